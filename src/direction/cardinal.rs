//! The six axis-aligned unit directions

use crate::core::types::IVec3;

/// One of the six cardinal directions of the voxel grid.
///
/// The discriminant doubles as the bit index used by
/// [`DirectionSet`](super::DirectionSet) masks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
    Up = 4,
    Down = 5,
}

impl Direction {
    /// All six directions in stable order.
    pub const CARDINALS: [Direction; 6] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// Parameter name used in block state params ("north", "east", ...).
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Look up a direction by its parameter name.
    pub fn from_name(name: &str) -> Option<Direction> {
        Direction::CARDINALS.into_iter().find(|d| d.name() == name)
    }

    /// Unit offset toward the neighbor in this direction.
    ///
    /// North faces -Z, up faces +Y.
    pub fn offset(self) -> IVec3 {
        match self {
            Direction::North => IVec3::new(0, 0, -1),
            Direction::East => IVec3::new(1, 0, 0),
            Direction::South => IVec3::new(0, 0, 1),
            Direction::West => IVec3::new(-1, 0, 0),
            Direction::Up => IVec3::new(0, 1, 0),
            Direction::Down => IVec3::new(0, -1, 0),
        }
    }

    /// The direction facing the opposite way.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Bit index within a [`DirectionSet`](super::DirectionSet) mask.
    pub fn bit(self) -> u8 {
        self as u8
    }
}
