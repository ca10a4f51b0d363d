use serde::{Deserialize, Serialize};

// Compact voxel representation used at runtime
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub state: BlockState,
}

pub type BlockId = u16;
pub type BlockState = u16;

impl Block {
    pub const AIR: Block = Block { id: 0, state: 0 };

    #[inline]
    pub const fn new(id: BlockId, state: BlockState) -> Self {
        Self { id, state }
    }

    /// Same material, ignoring state (facing, half, ...).
    #[inline]
    pub fn same_kind(self, other: Block) -> bool {
        self.id == other.id
    }
}

/// What a block type means to protection lookups.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    #[default]
    Plain,
    Container,
    // Wall-mounted or post-mounted sign; always attachable.
    Sign,
    // Levers, buttons, torches, ...
    Attachable,
}

impl BlockKind {
    #[inline]
    pub fn is_container(self) -> bool {
        matches!(self, BlockKind::Container)
    }

    #[inline]
    pub fn is_sign(self) -> bool {
        matches!(self, BlockKind::Sign)
    }
}
