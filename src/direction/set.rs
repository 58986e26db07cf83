//! Subsets of the six cardinal directions

use super::cardinal::Direction;

/// Number of distinct direction subsets (2^6).
pub const COMBINATION_COUNT: usize = 64;

/// An immutable subset of the six cardinal directions, stored as a
/// 6-bit mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// The empty subset.
    pub const EMPTY: DirectionSet = DirectionSet(0);

    /// All six directions.
    pub const ALL: DirectionSet = DirectionSet(0b11_1111);

    /// Build a subset from a raw 6-bit mask.
    ///
    /// Panics if the mask has bits outside the 6-bit domain.
    pub fn from_mask(mask: u8) -> DirectionSet {
        assert!(
            (mask as usize) < COMBINATION_COUNT,
            "direction mask {mask:#04x} outside the 6-bit domain"
        );
        DirectionSet(mask)
    }

    /// Subset containing a single direction.
    pub fn only(direction: Direction) -> DirectionSet {
        DirectionSet(1 << direction.bit())
    }

    /// Raw 6-bit mask.
    pub fn mask(self) -> u8 {
        self.0
    }

    /// Copy of this subset with `direction` added.
    pub fn with(self, direction: Direction) -> DirectionSet {
        DirectionSet(self.0 | (1 << direction.bit()))
    }

    /// Check whether the subset contains `direction`.
    pub fn contains(self, direction: Direction) -> bool {
        self.0 & (1 << direction.bit()) != 0
    }

    /// Number of directions in the subset.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the subset is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the contained directions in cardinal order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::CARDINALS.into_iter().filter(move |d| self.contains(*d))
    }

    /// Enumerate all 64 subsets in ascending mask order.
    ///
    /// Returns a fresh, finite iterator on every call; the empty subset
    /// comes first and the full subset last.
    pub fn combinations() -> impl Iterator<Item = DirectionSet> {
        (0..COMBINATION_COUNT as u8).map(DirectionSet)
    }
}
