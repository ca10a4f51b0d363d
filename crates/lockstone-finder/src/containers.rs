use std::collections::VecDeque;

use hashbrown::HashSet;
use lockstone_geom::BlockPos;
use lockstone_world::BlockRef;

use crate::CARDINAL_FACES;

/// Finds the container blocks that form one unit with `block`.
///
/// The returned group is never empty and always starts with `block`.
pub trait ContainerNeighbors {
    fn find_container_neighbors<'w>(&self, block: &BlockRef<'w>) -> Vec<BlockRef<'w>>;
}

/// Every container stands alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeparateContainers;

impl ContainerNeighbors for SeparateContainers {
    fn find_container_neighbors<'w>(&self, block: &BlockRef<'w>) -> Vec<BlockRef<'w>> {
        vec![*block]
    }
}

/// Same-material containers touching horizontally form one unit, however long the run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConnectedContainers;

impl ContainerNeighbors for ConnectedContainers {
    fn find_container_neighbors<'w>(&self, block: &BlockRef<'w>) -> Vec<BlockRef<'w>> {
        let mut group = vec![*block];
        // Non-containers never merge; air would otherwise be an unbounded run.
        if !block.kind().is_container() {
            return group;
        }

        let mut seen: HashSet<BlockPos> = HashSet::new();
        seen.insert(block.pos());
        let mut queue: VecDeque<BlockRef<'w>> = VecDeque::new();
        queue.push_back(*block);
        while let Some(cur) = queue.pop_front() {
            for face in CARDINAL_FACES {
                let next = cur.at(face);
                if !next.same_kind(block) || !seen.insert(next.pos()) {
                    continue;
                }
                group.push(next);
                queue.push_back(next);
            }
        }
        if group.len() > 2 {
            log::debug!(
                "container group of {} `{}` blocks from {}",
                group.len(),
                block.name(),
                block.pos()
            );
        }
        group
    }
}

/// Connectivity strategy, chosen once from configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerPolicy {
    Separate(SeparateContainers),
    Connected(ConnectedContainers),
}

impl ContainerPolicy {
    pub fn from_config(connect_containers: bool) -> Self {
        if connect_containers {
            ContainerPolicy::Connected(ConnectedContainers)
        } else {
            ContainerPolicy::Separate(SeparateContainers)
        }
    }

    #[inline]
    pub fn connects(&self) -> bool {
        matches!(self, ContainerPolicy::Connected(_))
    }
}

impl Default for ContainerPolicy {
    fn default() -> Self {
        ContainerPolicy::from_config(true)
    }
}

impl ContainerNeighbors for ContainerPolicy {
    #[inline]
    fn find_container_neighbors<'w>(&self, block: &BlockRef<'w>) -> Vec<BlockRef<'w>> {
        match self {
            ContainerPolicy::Separate(s) => s.find_container_neighbors(block),
            ContainerPolicy::Connected(c) => c.find_container_neighbors(block),
        }
    }
}
