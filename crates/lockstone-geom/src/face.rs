use crate::BlockPos;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Face {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
    Up = 4,
    Down = 5,
}

// Indexed by `Face as usize`.
const OPPOSITE: [Face; 6] = [
    Face::South,
    Face::West,
    Face::North,
    Face::East,
    Face::Down,
    Face::Up,
];

impl Face {
    pub const ALL: [Face; 6] = [
        Face::North,
        Face::East,
        Face::South,
        Face::West,
        Face::Up,
        Face::Down,
    ];

    /// The four horizontal compass directions.
    pub const CARDINAL: [Face; 4] = [Face::North, Face::East, Face::South, Face::West];

    pub const VERTICAL: [Face; 2] = [Face::Up, Face::Down];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a face index `[0..6)` back into a `Face`.
    #[inline]
    pub fn from_index(i: usize) -> Option<Face> {
        Face::ALL.get(i).copied()
    }

    #[inline]
    pub fn opposite(self) -> Face {
        OPPOSITE[self.index()]
    }

    #[inline]
    pub fn is_cardinal(self) -> bool {
        !self.is_vertical()
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Face::Up | Face::Down)
    }

    /// Returns the integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::North => (0, 0, -1),
            Face::East => (1, 0, 0),
            Face::South => (0, 0, 1),
            Face::West => (-1, 0, 0),
            Face::Up => (0, 1, 0),
            Face::Down => (0, -1, 0),
        }
    }

    /// The face of `from` that touches `to`, if the two cells share a face.
    pub fn between(from: BlockPos, to: BlockPos) -> Option<Face> {
        let d = to - from;
        Face::ALL.into_iter().find(|f| f.delta() == d)
    }

    /// Parses a lowercase face name as used in block state properties.
    pub fn from_name(s: &str) -> Option<Face> {
        match s {
            "north" => Some(Face::North),
            "east" => Some(Face::East),
            "south" => Some(Face::South),
            "west" => Some(Face::West),
            "up" => Some(Face::Up),
            "down" => Some(Face::Down),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Face::North => "north",
            Face::East => "east",
            Face::South => "south",
            Face::West => "west",
            Face::Up => "up",
            Face::Down => "down",
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_table_matches_deltas() {
        for f in Face::ALL {
            let (dx, dy, dz) = f.delta();
            assert_eq!(f.opposite().delta(), (-dx, -dy, -dz), "{f}");
        }
    }

    #[test]
    fn index_roundtrip() {
        for (i, f) in Face::ALL.into_iter().enumerate() {
            assert_eq!(f.index(), i);
            assert_eq!(Face::from_index(i), Some(f));
        }
        assert_eq!(Face::from_index(6), None);
    }

    #[test]
    fn between_rejects_non_adjacent() {
        let a = BlockPos::new(0, 0, 0);
        assert_eq!(Face::between(a, a), None);
        assert_eq!(Face::between(a, BlockPos::new(1, 0, 1)), None);
        assert_eq!(Face::between(a, BlockPos::new(0, 2, 0)), None);
        assert_eq!(Face::between(a, BlockPos::new(0, 1, 0)), Some(Face::Up));
    }
}
