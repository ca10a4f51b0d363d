use std::fmt;

use lockstone_blocks::{Block, BlockKind, BlockRegistry};
use lockstone_geom::{BlockPos, Face};

/// Anything that can answer "what is at this position".
///
/// Implementations must tolerate concurrent reads; finders share one source
/// across threads.
pub trait BlockSource: Sync {
    fn registry(&self) -> &BlockRegistry;

    /// Block at `pos`; positions that were never set read as air.
    fn block_at(&self, pos: BlockPos) -> Block;

    /// Raw text of the sign at `pos`, if one was recorded.
    fn sign_lines(&self, pos: BlockPos) -> Option<&[String]>;
}

/// A block read at one position. Cheap to copy; never mutates the world.
#[derive(Clone, Copy)]
pub struct BlockRef<'w> {
    world: &'w dyn BlockSource,
    pos: BlockPos,
    block: Block,
}

impl<'w> BlockRef<'w> {
    pub fn new(world: &'w dyn BlockSource, pos: BlockPos) -> Self {
        Self {
            world,
            pos,
            block: world.block_at(pos),
        }
    }

    #[inline]
    pub fn pos(&self) -> BlockPos {
        self.pos
    }

    #[inline]
    pub fn block(&self) -> Block {
        self.block
    }

    #[inline]
    pub fn world(&self) -> &'w dyn BlockSource {
        self.world
    }

    #[inline]
    pub fn kind(&self) -> BlockKind {
        self.world.registry().kind(self.block)
    }

    /// Face pointing at the block holding this one up, for attachable kinds.
    #[inline]
    pub fn attached_face(&self) -> Option<Face> {
        self.world.registry().attached_face(self.block)
    }

    pub fn name(&self) -> &'w str {
        self.world.registry().debug_name(self.block)
    }

    /// The neighbor one step out of `face`.
    #[inline]
    pub fn at(&self, face: Face) -> BlockRef<'w> {
        BlockRef::new(self.world, self.pos.relative(face))
    }

    /// Direction from this block to `other`, if they share a face.
    #[inline]
    pub fn face_toward(&self, other: &BlockRef<'_>) -> Option<Face> {
        Face::between(self.pos, other.pos)
    }

    #[inline]
    pub fn same_kind(&self, other: &BlockRef<'_>) -> bool {
        self.block.same_kind(other.block)
    }

    /// Sign view of this block; `None` unless it is a sign with a resolvable attachment.
    pub fn as_sign(&self) -> Option<SignRef<'w>> {
        if !self.kind().is_sign() {
            return None;
        }
        let attached_face = self.attached_face()?;
        Some(SignRef {
            block: *self,
            attached_face,
            lines: self.world.sign_lines(self.pos).unwrap_or(&[]),
        })
    }
}

impl PartialEq for BlockRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && self.block == other.block
    }
}

impl Eq for BlockRef<'_> {}

impl fmt::Debug for BlockRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockRef")
            .field("pos", &self.pos)
            .field("name", &self.name())
            .field("state", &self.block.state)
            .finish()
    }
}

impl fmt::Display for BlockRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.name(), self.pos)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SignRef<'w> {
    block: BlockRef<'w>,
    attached_face: Face,
    lines: &'w [String],
}

impl<'w> SignRef<'w> {
    #[inline]
    pub fn block(&self) -> &BlockRef<'w> {
        &self.block
    }

    #[inline]
    pub fn pos(&self) -> BlockPos {
        self.block.pos()
    }

    #[inline]
    pub fn attached_face(&self) -> Face {
        self.attached_face
    }

    #[inline]
    pub fn lines(&self) -> &'w [String] {
        self.lines
    }
}
