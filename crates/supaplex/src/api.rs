//! Field access handed to element update rules.

use crate::cell::{Element, ElementType};
use crate::coordinate::Coordinate;
use crate::Field;

/// The cell being updated plus mutable access to the rest of the field.
/// Every `set` stamps the written cell with the current pass generation, so
/// the scan loop will not dispatch it a second time this pass.
#[derive(Debug)]
pub struct FieldApi<'a> {
    pub field: &'a mut Field,
    pub at: Coordinate,
    pub generation: u32,
}

impl<'a> FieldApi<'a> {
    pub fn new(field: &'a mut Field, at: Coordinate, generation: u32) -> Self {
        Self {
            field,
            at,
            generation,
        }
    }

    #[must_use]
    pub fn get(&self, c: Coordinate) -> Element {
        self.field.get(c)
    }

    #[must_use]
    pub fn here(&self) -> Element {
        self.field.get(self.at)
    }

    /// Replace the type at `c`, restarting its animation.
    pub fn set(&mut self, c: Coordinate, kind: ElementType) {
        let mut stamped = Element::new(kind);
        stamped.clock = self.generation;
        self.field.put(c, stamped);
    }

    /// Advance the current cell's animation; `true` when it wrapped.
    pub fn next_frame(&mut self) -> bool {
        self.field.element_mut(self.at).next_frame(Element::FRAMES)
    }
}
