//! Grid positions and block faces shared by the world and finder crates.
#![forbid(unsafe_code)]

mod face;

pub use face::Face;

use core::fmt;
use core::ops::{Add, AddAssign, Sub};

/// Integer grid cell. North is -z, east is +x, up is +y.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const ORIGIN: BlockPos = BlockPos { x: 0, y: 0, z: 0 };

    /// Largest coordinate magnitude a world stores on any axis.
    pub const LIMIT: i32 = 30_000_000;

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The cell one step out of `face`. Wraps at the `i32` edge, which is
    /// far outside `LIMIT`.
    #[inline]
    pub fn relative(self, face: Face) -> BlockPos {
        self + face.delta()
    }

    /// True when every axis is within `LIMIT`.
    #[inline]
    pub fn in_bounds(self) -> bool {
        let ok = |v: i32| (-Self::LIMIT..=Self::LIMIT).contains(&v);
        ok(self.x) && ok(self.y) && ok(self.z)
    }

    #[inline]
    pub fn as_tuple(self) -> (i32, i32, i32) {
        (self.x, self.y, self.z)
    }
}

impl From<(i32, i32, i32)> for BlockPos {
    #[inline]
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        BlockPos::new(x, y, z)
    }
}

impl From<[i32; 3]> for BlockPos {
    #[inline]
    fn from([x, y, z]: [i32; 3]) -> Self {
        BlockPos::new(x, y, z)
    }
}

impl Add<(i32, i32, i32)> for BlockPos {
    type Output = BlockPos;
    #[inline]
    fn add(self, (dx, dy, dz): (i32, i32, i32)) -> BlockPos {
        BlockPos::new(
            self.x.wrapping_add(dx),
            self.y.wrapping_add(dy),
            self.z.wrapping_add(dz),
        )
    }
}

impl AddAssign<(i32, i32, i32)> for BlockPos {
    #[inline]
    fn add_assign(&mut self, (dx, dy, dz): (i32, i32, i32)) {
        *self = *self + (dx, dy, dz);
    }
}

impl Sub for BlockPos {
    type Output = (i32, i32, i32);
    #[inline]
    fn sub(self, rhs: BlockPos) -> (i32, i32, i32) {
        (
            self.x.wrapping_sub(rhs.x),
            self.y.wrapping_sub(rhs.y),
            self.z.wrapping_sub(rhs.z),
        )
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
