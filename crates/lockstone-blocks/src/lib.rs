//! Block types, block states, and the registry that gives them meaning.
#![forbid(unsafe_code)]

pub mod config;
pub mod registry;
pub mod types;

pub use registry::{Attachment, BlockRegistry, BlockType};
pub use types::{Block, BlockId, BlockKind, BlockState};
