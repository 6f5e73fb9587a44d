//! The game state aggregate and its per-refresh tick.

use crate::agent::Murphy;
use crate::coordinate::Coordinate;
use crate::error::EngineError;
use crate::input::Buttons;
use crate::level::{Level, LevelCatalog};
use crate::render::{self, RenderCommands};
use crate::Field;

/// Everything one running game owns: the level catalog, the field, Murphy,
/// last tick's input and the frame buffer handed to the presenter.
#[derive(Debug)]
pub struct Engine {
    catalog: LevelCatalog,
    level: usize,
    field: Field,
    murphy: Murphy,
    previous: Buttons,
    frame: RenderCommands,
}

impl Engine {
    /// Start a game on level `level`.
    ///
    /// # Errors
    ///
    /// [`EngineError::LevelOutOfRange`] if the catalog has no such level.
    pub fn new(catalog: LevelCatalog, level: usize) -> Result<Self, EngineError> {
        let mut engine = Self {
            catalog,
            level: 0,
            field: Field::new(),
            murphy: Murphy::spawn(Coordinate::new(0, 0)),
            previous: Buttons::NONE,
            frame: RenderCommands::default(),
        };
        engine.init(level)?;
        Ok(engine)
    }

    /// Replace the whole game state with a fresh copy of level `index`.
    ///
    /// # Errors
    ///
    /// [`EngineError::LevelOutOfRange`] if the catalog has no such level;
    /// the current state is left untouched.
    pub fn init(&mut self, index: usize) -> Result<(), EngineError> {
        self.catalog.get(index)?;
        self.load(index);
        Ok(())
    }

    /// Run one tick and return what should be on screen for it.
    ///
    /// The frame is drawn before anything moves, so it shows the result of
    /// the previous tick.
    pub fn tick(&mut self, input: Buttons) -> &RenderCommands {
        render::draw(&self.field, &self.murphy, &mut self.frame);

        self.field.tick();
        self.murphy.advance();
        self.murphy.steer(&mut self.field, input);

        let pressed = input.pressed_since(self.previous);
        if pressed.contains(Buttons::NEXT_LEVEL) && self.level < self.catalog.last_index() {
            self.switch_level(self.level + 1);
        }
        if pressed.contains(Buttons::PREVIOUS_LEVEL) && self.level > 0 {
            self.switch_level(self.level - 1);
        }

        self.previous = input;
        &self.frame
    }

    /// `index` is already clamped to the catalog.
    fn switch_level(&mut self, index: usize) {
        log::debug!("switching from level {} to {}", self.level, index);
        self.load(index);
    }

    /// Replace field and Murphy with a fresh copy of level `index`, which
    /// must be inside the catalog.
    fn load(&mut self, index: usize) {
        let level = &self.catalog.levels()[index];
        self.field = Field::from_level(level);
        self.murphy = Murphy::spawn(level.start());
        self.level = index;
        log::info!(
            "loaded level {} {:?} (murphy at {}, {} infotrons)",
            index,
            level.name(),
            level.start(),
            level.infotrons()
        );
    }

    #[must_use]
    pub fn level_count(&self) -> usize {
        self.catalog.len()
    }

    #[must_use]
    pub fn current_level(&self) -> usize {
        self.level
    }

    /// The level currently loaded.
    #[must_use]
    pub fn level(&self) -> &Level {
        &self.catalog.levels()[self.level]
    }

    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    #[must_use]
    pub fn murphy(&self) -> &Murphy {
        &self.murphy
    }

    /// The frame produced by the last tick.
    #[must_use]
    pub fn frame(&self) -> &RenderCommands {
        &self.frame
    }

    #[must_use]
    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{Direction, MurphyState, CELL_UNITS};
    use crate::cell::ElementType;
    use crate::render::sprites::first_tile;
    use crate::testing::{level_with, named_level_with};
    use proptest::prelude::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn single(start: Coordinate, cells: &[(Coordinate, ElementType)]) -> Engine {
        init_logger();
        let catalog = LevelCatalog::new(vec![level_with(start, cells)]).unwrap();
        Engine::new(catalog, 0).unwrap()
    }

    fn three_levels() -> Engine {
        init_logger();
        let catalog = LevelCatalog::new(vec![
            named_level_with("ONE", Coordinate::new(2, 2), &[]),
            named_level_with("TWO", Coordinate::new(10, 5), &[]),
            named_level_with("THREE", Coordinate::new(20, 8), &[]),
        ])
        .unwrap();
        Engine::new(catalog, 0).unwrap()
    }

    fn ticks(engine: &mut Engine, input: Buttons, n: usize) {
        for _ in 0..n {
            engine.tick(input);
        }
    }

    #[test]
    fn init_loads_grid_and_spawns_murphy() {
        let start = Coordinate::new(12, 7);
        let zonk = Coordinate::new(20, 20);
        let engine = single(start, &[(zonk, ElementType::Zonk)]);
        let level = engine.catalog().get(0).unwrap();

        for c in Coordinate::all() {
            let expected = if c == start {
                ElementType::Space
            } else {
                level.grid()[c.index()]
            };
            assert_eq!(engine.field().get(c).kind, expected, "cell {c}");
        }
        assert_eq!(engine.murphy().x, 12 * CELL_UNITS);
        assert_eq!(engine.murphy().y, 7 * CELL_UNITS);
        assert_eq!(engine.level_count(), 1);
    }

    #[test]
    fn init_rejects_unknown_level() {
        init_logger();
        let catalog = LevelCatalog::new(vec![level_with(Coordinate::new(1, 1), &[])]).unwrap();
        let err = Engine::new(catalog, 3).unwrap_err();
        assert_eq!(err, EngineError::LevelOutOfRange { index: 3, count: 1 });
    }

    #[test]
    fn failed_init_keeps_current_state() {
        let mut engine = single(Coordinate::new(4, 4), &[]);
        engine.tick(Buttons::RIGHT);
        let before = engine.field().clone();

        assert!(engine.init(9).is_err());
        assert_eq!(engine.field().cells(), before.cells());
        assert_eq!(engine.current_level(), 0);
    }

    #[test]
    fn murphy_walks_one_cell() {
        let start = Coordinate::new(5, 5);
        let mut engine = single(start, &[(start.right(), ElementType::Base)]);

        engine.tick(Buttons::RIGHT);
        assert_eq!(engine.murphy().state, MurphyState::Moving(Direction::Right));
        assert_eq!(engine.murphy().frame, 0);

        engine.tick(Buttons::NONE);
        assert_eq!(engine.murphy().state, MurphyState::Moving(Direction::Right));
        assert_eq!(engine.murphy().frame, 1);
        assert_eq!(engine.murphy().x, 5 * CELL_UNITS + 1);

        ticks(&mut engine, Buttons::NONE, 15);
        assert_eq!(engine.murphy().state, MurphyState::Facing);
        assert_eq!(engine.murphy().cell(), start.right());
        assert_eq!(engine.field().get(start).kind, ElementType::Space);
        assert_eq!(engine.field().get(start.right()).kind, ElementType::MurphyStanding);
    }

    #[test]
    fn held_direction_keeps_walking() {
        let start = Coordinate::new(5, 5);
        let mut engine = single(start, &[]);

        ticks(&mut engine, Buttons::DOWN, 1 + 16 * 3);
        assert_eq!(engine.murphy().cell(), Coordinate::new(5, 8));
        assert_eq!(engine.murphy().state, MurphyState::Moving(Direction::Down));
    }

    #[test]
    fn zonk_fall_through_engine() {
        let zonk = Coordinate::new(30, 5);
        let mut engine = single(
            Coordinate::new(2, 2),
            &[(zonk, ElementType::Zonk), (zonk.below().below(), ElementType::Wall)],
        );

        engine.tick(Buttons::NONE);
        ticks(&mut engine, Buttons::NONE, 16);
        assert_eq!(engine.field().get(zonk).kind, ElementType::Space);
        assert_eq!(engine.field().get(zonk.below()).kind, ElementType::Zonk);
    }

    #[test]
    fn frame_shows_previous_tick() {
        let zonk = Coordinate::new(4, 3);
        let mut engine = single(Coordinate::new(2, 2), &[(zonk, ElementType::Zonk)]);

        // The zonk starts falling during the first tick, after the draw.
        let first = engine.tick(Buttons::NONE);
        assert_eq!(first.sprites.elements().count(), 0);

        let second = engine.tick(Buttons::NONE);
        let sprite = second.sprites.elements().next().unwrap();
        assert_eq!(sprite.tile, first_tile::ZONK_FALLING);
        assert_eq!((sprite.x, sprite.y), (64, 48));
    }

    #[test]
    fn next_level_is_edge_triggered() {
        let mut engine = three_levels();

        engine.tick(Buttons::NEXT_LEVEL);
        assert_eq!(engine.current_level(), 1);
        assert_eq!(engine.murphy().cell(), Coordinate::new(10, 5));

        ticks(&mut engine, Buttons::NEXT_LEVEL, 5);
        assert_eq!(engine.current_level(), 1);

        engine.tick(Buttons::NONE);
        engine.tick(Buttons::NEXT_LEVEL);
        assert_eq!(engine.current_level(), 2);
    }

    #[test]
    fn level_switching_clamps() {
        let mut engine = three_levels();

        engine.tick(Buttons::PREVIOUS_LEVEL);
        assert_eq!(engine.current_level(), 0);

        for _ in 0..5 {
            engine.tick(Buttons::NEXT_LEVEL);
            engine.tick(Buttons::NONE);
        }
        assert_eq!(engine.current_level(), 2);

        engine.tick(Buttons::PREVIOUS_LEVEL);
        assert_eq!(engine.current_level(), 1);
    }

    #[test]
    fn level_switch_discards_progress() {
        let mut engine = three_levels();
        ticks(&mut engine, Buttons::RIGHT, 5);
        assert_ne!(engine.murphy().state, MurphyState::Facing);

        engine.tick(Buttons::NEXT_LEVEL);
        engine.tick(Buttons::NONE);
        engine.tick(Buttons::PREVIOUS_LEVEL);

        assert_eq!(engine.current_level(), 0);
        assert_eq!(engine.murphy().cell(), Coordinate::new(2, 2));
        assert!(Coordinate::all().all(|c| engine.field().get(c).kind.is_static()));
    }

    #[test]
    fn both_switch_buttons_restart_current_level() {
        let mut engine = three_levels();
        engine.tick(Buttons::NEXT_LEVEL);
        ticks(&mut engine, Buttons::LEFT, 3);
        assert_ne!(engine.murphy().state, MurphyState::Facing);

        engine.tick(Buttons::NEXT_LEVEL | Buttons::PREVIOUS_LEVEL);
        assert_eq!(engine.current_level(), 1);
        assert_eq!(engine.level().name(), "TWO");
        assert_eq!(engine.murphy().state, MurphyState::Facing);
        assert_eq!(engine.murphy().cell(), Coordinate::new(10, 5));
    }

    #[test]
    fn switching_at_the_ends_keeps_the_running_level() {
        let mut engine = three_levels();
        for _ in 0..3 {
            engine.tick(Buttons::NEXT_LEVEL);
            engine.tick(Buttons::NONE);
        }
        assert_eq!(engine.level().name(), "THREE");
        ticks(&mut engine, Buttons::LEFT, 3);

        // Already on the last level: no reload, Murphy keeps walking.
        engine.tick(Buttons::NEXT_LEVEL);
        assert_eq!(engine.current_level(), 2);
        assert_eq!(engine.murphy().state, MurphyState::Moving(Direction::Left));
    }

    proptest! {
        #[test]
        fn prop_any_input_keeps_level_in_range(
            inputs in proptest::collection::vec(any::<u16>(), 1..60)
        ) {
            let mut engine = three_levels();
            for bits in inputs {
                engine.tick(Buttons::from_bits(bits));
                prop_assert!(engine.current_level() < engine.level_count());
            }
        }
    }
}
