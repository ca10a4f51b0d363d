//! Read-only block views over a sparse world, and scene loading.
#![forbid(unsafe_code)]

pub mod scene;
pub mod store;
pub mod view;

pub use scene::{Placement, SceneConfig};
pub use store::{SparseWorld, WorldStats};
pub use view::{BlockRef, BlockSource, SignRef};
