//! Shared fixtures for unit tests.

use crate::cell::ElementType;
use crate::coordinate::{Coordinate, FIELD_HEIGHT, FIELD_SIZE, FIELD_WIDTH};
use crate::level::Level;
use crate::Field;

/// Level-file codes for an empty level with a wall border.
pub fn bordered_codes() -> [u8; FIELD_SIZE] {
    let mut codes = [ElementType::Space.code(); FIELD_SIZE];
    for c in Coordinate::all() {
        if c.x() == 0 || c.y() == 0 || c.x() == FIELD_WIDTH - 1 || c.y() == FIELD_HEIGHT - 1 {
            codes[c.index()] = ElementType::Wall.code();
        }
    }
    codes
}

pub fn bordered_field() -> Field {
    let mut field = Field::new();
    for (c, &code) in Coordinate::all().zip(bordered_codes().iter()) {
        if let Some(kind) = ElementType::from_code(code) {
            field.set(c, kind);
        }
    }
    field
}

/// A bordered level with Murphy at `start` and the given extra cells.
pub fn level_with(start: Coordinate, cells: &[(Coordinate, ElementType)]) -> Level {
    named_level_with("TEST", start, cells)
}

pub fn named_level_with(
    name: &str,
    start: Coordinate,
    cells: &[(Coordinate, ElementType)],
) -> Level {
    let mut codes = bordered_codes();
    codes[start.index()] = ElementType::Murphy.code();
    for &(c, kind) in cells {
        codes[c.index()] = kind.code();
    }
    Level::new(name, 0, &codes).expect("fixture level is valid")
}

pub fn run(field: &mut Field, ticks: usize) {
    for _ in 0..ticks {
        field.tick();
    }
}
