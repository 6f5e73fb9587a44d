//! Button state sampled once per tick.

use std::ops::{BitOr, BitOrAssign};

/// Pressed buttons as a bitmask. Bit positions follow the handheld keypad
/// register the game was built around.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Buttons(u16);

impl Buttons {
    pub const NONE: Self = Self(0);
    pub const RIGHT: Self = Self(1 << 4);
    pub const LEFT: Self = Self(1 << 5);
    pub const UP: Self = Self(1 << 6);
    pub const DOWN: Self = Self(1 << 7);
    pub const NEXT_LEVEL: Self = Self(1 << 8);
    pub const PREVIOUS_LEVEL: Self = Self(1 << 9);

    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    /// Buttons down now that were up in `previous`.
    #[must_use]
    pub const fn pressed_since(self, previous: Self) -> Self {
        Self(self.0 & !previous.0)
    }
}

impl BitOr for Buttons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Buttons {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
