//! Finds the blocks that make up one protection: the attached signs, the
//! other halves of a container, and the block an attachable hangs on.
#![forbid(unsafe_code)]

pub mod containers;
pub mod finder;
pub mod parser;

pub use containers::{ConnectedContainers, ContainerNeighbors, ContainerPolicy, SeparateContainers};
pub use finder::{BlockFinder, Protection};
pub use parser::SignParser;

use lockstone_geom::Face;

pub const CARDINAL_FACES: [Face; 4] = Face::CARDINAL;

pub const VERTICAL_FACES: [Face; 2] = Face::VERTICAL;

/// Faces scanned for attached signs. Down is excluded: nothing in this model
/// hangs a sign from the underside of a block onto the block below it.
pub const SIGN_ATTACHMENT_FACES: [Face; 5] =
    [Face::North, Face::East, Face::South, Face::West, Face::Up];
