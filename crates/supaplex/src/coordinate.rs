//! Linear cell index over the fixed 60×24 field.

use std::fmt;

pub const FIELD_WIDTH: usize = 60;
pub const FIELD_HEIGHT: usize = 24;
pub const FIELD_SIZE: usize = FIELD_WIDTH * FIELD_HEIGHT;

/// A cell position stored as `y * 60 + x`.
///
/// Navigation is plain arithmetic with no bounds checking. Levels always
/// carry a solid border, so rules never step off the grid in practice.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Coordinate(u16);

impl Coordinate {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self((y * FIELD_WIDTH + x) as u16)
    }

    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn x(self) -> usize {
        self.0 as usize % FIELD_WIDTH
    }

    #[must_use]
    pub const fn y(self) -> usize {
        self.0 as usize / FIELD_WIDTH
    }

    #[must_use]
    pub const fn left(self) -> Self {
        Self(self.0.wrapping_sub(1))
    }

    #[must_use]
    pub const fn right(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub const fn above(self) -> Self {
        Self(self.0.wrapping_sub(FIELD_WIDTH as u16))
    }

    #[must_use]
    pub const fn below(self) -> Self {
        Self(self.0.wrapping_add(FIELD_WIDTH as u16))
    }

    /// All field coordinates in scan order (row-major, top to bottom).
    pub fn all() -> impl Iterator<Item = Self> {
        (0..FIELD_SIZE as u16).map(Self)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}
