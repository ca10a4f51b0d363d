use hashbrown::HashSet;
use lockstone_world::{BlockRef, SignRef};

use crate::SIGN_ATTACHMENT_FACES;
use crate::containers::{ContainerNeighbors, ContainerPolicy};
use crate::parser::SignParser;

/// Finds blocks that logically belong together: the other half of a chest,
/// the signs attached to it, the block a lever hangs on.
///
/// Holds no per-call state; one instance can serve every handler and thread.
#[derive(Clone, Debug)]
pub struct BlockFinder<P> {
    parser: P,
    containers: ContainerPolicy,
}

/// A container group together with the protection signs attached to any of its blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Protection<'w, S> {
    pub containers: Vec<BlockRef<'w>>,
    pub signs: Vec<S>,
}

impl<S> Protection<'_, S> {
    #[inline]
    pub fn is_protected(&self) -> bool {
        !self.signs.is_empty()
    }
}

impl<P: SignParser> BlockFinder<P> {
    /// `connect_containers` picks the connectivity strategy for the lifetime of the finder.
    pub fn new(parser: P, connect_containers: bool) -> Self {
        Self::with_policy(parser, ContainerPolicy::from_config(connect_containers))
    }

    pub fn with_policy(parser: P, containers: ContainerPolicy) -> Self {
        log::debug!(
            "block finder: containers {}",
            if containers.connects() {
                "connected"
            } else {
                "separate"
            }
        );
        Self { parser, containers }
    }

    #[inline]
    pub fn sign_parser(&self) -> &P {
        &self.parser
    }

    #[inline]
    pub fn policy(&self) -> ContainerPolicy {
        self.containers
    }

    /// Protection signs attached directly to `block`.
    pub fn find_attached_signs(&self, block: &BlockRef<'_>) -> Vec<P::Sign> {
        let mut signs = Vec::new();
        for face in SIGN_ATTACHMENT_FACES {
            let neighbor = block.at(face);
            if !neighbor.kind().is_sign() {
                continue;
            }
            let Some(sign) = neighbor.as_sign() else {
                continue;
            };
            if !is_attached_sign(&sign, block) {
                log::trace!(
                    "sign at {} hangs {}, not on {}",
                    sign.pos(),
                    sign.attached_face(),
                    block.pos()
                );
                continue;
            }
            if let Some(parsed) = self.parser.parse_sign(&sign) {
                signs.push(parsed);
            }
        }
        signs
    }

    /// Protection signs attached to any of `blocks`, each reported once.
    pub fn find_attached_signs_all(&self, blocks: &[BlockRef<'_>]) -> Vec<P::Sign> {
        if let [only] = blocks {
            return self.find_attached_signs(only);
        }

        let mut seen: HashSet<P::Sign> = HashSet::new();
        let mut signs = Vec::new();
        for block in blocks {
            for sign in self.find_attached_signs(block) {
                if seen.insert(sign.clone()) {
                    signs.push(sign);
                }
            }
        }
        signs
    }

    /// Container blocks forming one unit with `block`, `block` first.
    #[inline]
    pub fn find_container_neighbors<'w>(&self, block: &BlockRef<'w>) -> Vec<BlockRef<'w>> {
        self.containers.find_container_neighbors(block)
    }

    /// The block that, if removed, takes `block` down with it.
    ///
    /// Self-supporting blocks return themselves.
    pub fn find_supporting_block<'w>(&self, block: &BlockRef<'w>) -> BlockRef<'w> {
        match block.attached_face() {
            Some(face) => block.at(face),
            None => *block,
        }
    }

    pub fn find_protection<'w>(&self, block: &BlockRef<'w>) -> Protection<'w, P::Sign> {
        let containers = self.find_container_neighbors(block);
        let signs = self.find_attached_signs_all(&containers);
        Protection { containers, signs }
    }
}

// Direction and attachment only; the text is the parser's business.
fn is_attached_sign(sign: &SignRef<'_>, attached_to: &BlockRef<'_>) -> bool {
    sign.block().face_toward(attached_to) == Some(sign.attached_face())
}
