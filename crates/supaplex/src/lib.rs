//! Tick-driven core of a Supaplex-style puzzle game.
//!
//! One call to [`Engine::tick`] per display refresh renders the current
//! field, runs one simulation pass, moves Murphy and samples input.

pub mod agent;
pub mod api;
pub mod assets;
pub mod cell;
pub mod coordinate;
pub mod elements;
pub mod engine;
pub mod error;
pub mod input;
pub mod level;
pub mod render;
pub mod scheduler;
pub mod universe;

#[cfg(test)]
pub(crate) mod testing;

pub use agent::{Direction, Facing, Murphy, MurphyState};
pub use cell::{Element, ElementType};
pub use coordinate::{Coordinate, FIELD_HEIGHT, FIELD_SIZE, FIELD_WIDTH};
pub use engine::Engine;
pub use error::EngineError;
pub use input::Buttons;
pub use level::{Level, LevelCatalog};
pub use render::RenderCommands;
pub use universe::Universe;

/// The 60×24 game field.
///
/// Coordinates are trusted: every level is walled in, so an out-of-range
/// index is a broken level and panics.
#[derive(Clone, Debug)]
pub struct Field {
    cells: Vec<Element>,
    pub generation: u32,
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

impl Field {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: vec![Element::space(); FIELD_SIZE],
            generation: 0,
        }
    }

    /// A fresh field holding the level's grid, Murphy's start cell emptied.
    #[must_use]
    pub fn from_level(level: &Level) -> Self {
        let mut field = Self::new();
        for (cell, &kind) in field.cells.iter_mut().zip(level.grid()) {
            *cell = Element::new(kind);
        }
        field.set(level.start(), ElementType::Space);
        field
    }

    #[must_use]
    pub fn cells(&self) -> &[Element] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, c: Coordinate) -> Element {
        self.cells[c.index()]
    }

    /// Replace the type at `c` and restart its animation.
    pub fn set(&mut self, c: Coordinate, kind: ElementType) {
        self.cells[c.index()] = Element::new(kind);
    }

    pub fn put(&mut self, c: Coordinate, element: Element) {
        self.cells[c.index()] = element;
    }

    pub fn element_mut(&mut self, c: Coordinate) -> &mut Element {
        &mut self.cells[c.index()]
    }

    /// Advance the simulation by one pass.
    ///
    /// Visits every cell once in coordinate order and runs the rule for its
    /// type. Later cells see what earlier cells wrote this pass, but a cell
    /// claimed by another cell's rule (clock == generation) is not dispatched
    /// again until the next pass.
    pub fn tick(&mut self) {
        self.generation = match self.generation.checked_add(1) {
            Some(gen) => gen,
            None => {
                // Generation 0 is what unstamped cells carry; never reuse it.
                for cell in &mut self.cells {
                    cell.clock = 0;
                }
                1
            }
        };
        let gen = self.generation;

        for c in Coordinate::all() {
            let cell = self.get(c);
            if cell.clock == gen {
                continue;
            }
            let kind = cell.kind;
            if elements::rule_for(kind).is_none() {
                continue;
            }
            let mut api = api::FieldApi::new(self, c, gen);
            elements::update_cell(kind, &mut api);
        }
    }
}
