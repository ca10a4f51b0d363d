use std::collections::HashSet;
use std::fmt;

use lockstone_finder::BlockFinder;
use lockstone_geom::BlockPos;
use lockstone_world::{BlockSource, SparseWorld};
use rayon::prelude::*;

use crate::signs::{HeaderSignParser, ProtectionSign, SignKind};

pub type Finder = BlockFinder<HeaderSignParser>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InspectReport {
    pub pos: BlockPos,
    pub name: String,
    pub group: Vec<BlockPos>,
    pub signs: Vec<ProtectionSign>,
    // None when the block supports itself
    pub support: Option<(BlockPos, String)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupReport {
    pub name: String,
    pub group: Vec<BlockPos>,
    pub signs: Vec<ProtectionSign>,
}

pub fn inspect(finder: &Finder, world: &SparseWorld, pos: BlockPos) -> InspectReport {
    let block = world.block_ref(pos);
    let prot = finder.find_protection(&block);
    let support = finder.find_supporting_block(&block);
    InspectReport {
        pos,
        name: block.name().to_string(),
        group: prot.containers.iter().map(|b| b.pos()).collect(),
        signs: prot.signs,
        support: (support != block).then(|| (support.pos(), support.name().to_string())),
    }
}

/// Every container group in the world, each reported once, in position order.
pub fn scan(finder: &Finder, world: &SparseWorld) -> Vec<GroupReport> {
    let registry = world.registry();
    let mut claimed: HashSet<BlockPos> = HashSet::new();
    let mut groups = Vec::new();
    for pos in world.positions() {
        if claimed.contains(&pos) || !registry.kind(world.block_at(pos)).is_container() {
            continue;
        }
        let group = finder.find_container_neighbors(&world.block_ref(pos));
        claimed.extend(group.iter().map(|b| b.pos()));
        groups.push(group);
    }
    log::debug!("scan: {} container group(s)", groups.len());

    groups
        .par_iter()
        .map(|group| GroupReport {
            name: group[0].name().to_string(),
            group: group.iter().map(|b| b.pos()).collect(),
            signs: finder.find_attached_signs_all(group),
        })
        .collect()
}

fn write_signs(f: &mut fmt::Formatter<'_>, signs: &[ProtectionSign]) -> fmt::Result {
    if signs.is_empty() {
        return writeln!(f, "  unprotected");
    }
    for s in signs {
        let header = match s.kind {
            SignKind::Private => "private",
            SignKind::MoreUsers => "more users",
        };
        let names = s.names.join(", ");
        match s.owner() {
            Some(owner) => writeln!(f, "  {} sign at {}: {} (owner {})", header, s.pos, names, owner)?,
            None => writeln!(f, "  {} sign at {}: {}", header, s.pos, names)?,
        }
    }
    Ok(())
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} at {}", self.name, self.pos)?;
        if self.group.len() > 1 {
            let others: Vec<String> = self.group[1..].iter().map(|p| p.to_string()).collect();
            writeln!(f, "  connected to {}", others.join(", "))?;
        }
        write_signs(f, &self.signs)?;
        if let Some((pos, name)) = &self.support {
            writeln!(f, "  supported by {} at {}", name, pos)?;
        }
        Ok(())
    }
}

impl fmt::Display for GroupReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.group.iter().map(|p| p.to_string()).collect();
        writeln!(f, "{} x{}: {}", self.name, self.group.len(), cells.join(" "))?;
        write_signs(f, &self.signs)
    }
}
