//! Browser-facing wrapper around [`Engine`].
//!
//! JavaScript owns the refresh loop: it calls `tick` once per animation frame
//! with the button bitmask, then copies the tile map, scroll registers and
//! sprite attributes into its own renderer.

use wasm_bindgen::prelude::*;

use crate::engine::Engine;
use crate::input::Buttons;
use crate::level::LevelCatalog;
use crate::render::sprites::HIDDEN_ATTRIBUTES;

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    engine: Engine,
}

#[wasm_bindgen]
impl Universe {
    /// `levels` is a `LEVELS.DAT` image: 1536-byte records back to back.
    #[wasm_bindgen(constructor)]
    pub fn new(levels: &[u8], level: usize) -> Result<Universe, JsError> {
        Self::with_catalog(LevelCatalog::from_records(levels)?, level)
    }

    /// Bare 1440-byte grids back to back, without titles or infotron counts.
    pub fn from_grids(grids: &[u8], level: usize) -> Result<Universe, JsError> {
        Self::with_catalog(LevelCatalog::from_grids(grids)?, level)
    }

    /// Restart on level `level`, discarding the current game.
    pub fn init(&mut self, level: usize) -> Result<(), JsError> {
        self.engine.init(level)?;
        Ok(())
    }

    pub fn tick(&mut self, buttons: u16) {
        self.engine.tick(Buttons::from_bits(buttons));
    }

    /// 32×22 sub-tile entries of the last frame.
    #[must_use]
    pub fn tile_map(&self) -> Vec<u16> {
        self.engine.frame().tile_map.entries().to_vec()
    }

    #[must_use]
    pub fn scroll_x(&self) -> u16 {
        self.engine.frame().scroll_x()
    }

    #[must_use]
    pub fn scroll_y(&self) -> u16 {
        self.engine.frame().scroll_y()
    }

    /// Three attribute halfwords per sprite slot, hidden slots included.
    #[must_use]
    pub fn sprite_attributes(&self) -> Vec<u16> {
        self.engine
            .frame()
            .sprites
            .slots()
            .iter()
            .flat_map(|slot| slot.map_or(HIDDEN_ATTRIBUTES, |sprite| sprite.attributes()))
            .collect()
    }

    #[must_use]
    pub fn level_count(&self) -> usize {
        self.engine.level_count()
    }

    #[must_use]
    pub fn current_level(&self) -> usize {
        self.engine.current_level()
    }

    #[must_use]
    pub fn level_name(&self) -> String {
        self.engine.level().name().to_owned()
    }

    /// Infotrons needed to open the exit on the current level.
    #[must_use]
    pub fn infotrons(&self) -> u8 {
        self.engine.level().infotrons()
    }
}

impl Universe {
    fn with_catalog(catalog: LevelCatalog, level: usize) -> Result<Self, JsError> {
        let engine = Engine::new(catalog, level)?;
        Ok(Self { engine })
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("logger already initialised");
    }
}
