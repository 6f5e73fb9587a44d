//! Graphics tables produced by the offline asset pipeline.
//!
//! The core never reads pixels; these types only fix the shape a presenter
//! can rely on when it uploads graphics before the first frame.

use crate::error::EngineError;
use crate::render::tiles::Tile;

/// Sixteen 15-bit colours.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Palette(pub [u16; 16]);

/// One 8×8 tile at 4 bits per pixel, a row per word.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Bitmap(pub [u32; 8]);

/// Sub-tiles per 16×16 graphic.
pub const SUB_TILES: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetTables {
    palettes: Vec<Palette>,
    tiles: Vec<Bitmap>,
    sprites: Vec<Bitmap>,
}

impl AssetTables {
    /// # Errors
    ///
    /// [`EngineError::AssetShape`] if there are no palettes, or the static
    /// tile table does not hold four sub-tiles for every [`Tile`], or the
    /// sprite table is not a whole number of 16×16 graphics.
    pub fn new(
        palettes: Vec<Palette>,
        tiles: Vec<Bitmap>,
        sprites: Vec<Bitmap>,
    ) -> Result<Self, EngineError> {
        if palettes.is_empty() {
            return Err(EngineError::AssetShape {
                table: "palette",
                expected: 1,
                actual: 0,
            });
        }
        let expected = SUB_TILES * Tile::COUNT;
        if tiles.len() != expected {
            return Err(EngineError::AssetShape {
                table: "static tile",
                expected,
                actual: tiles.len(),
            });
        }
        if sprites.len() % SUB_TILES != 0 {
            return Err(EngineError::AssetShape {
                table: "sprite",
                expected: sprites.len().next_multiple_of(SUB_TILES),
                actual: sprites.len(),
            });
        }
        Ok(Self {
            palettes,
            tiles,
            sprites,
        })
    }

    #[must_use]
    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    /// The four sub-tile bitmaps of a static graphic.
    #[must_use]
    pub fn tile(&self, tile: Tile) -> &[Bitmap] {
        let start = SUB_TILES * tile as usize;
        &self.tiles[start..start + SUB_TILES]
    }

    #[must_use]
    pub fn tiles(&self) -> &[Bitmap] {
        &self.tiles
    }

    #[must_use]
    pub fn sprites(&self) -> &[Bitmap] {
        &self.sprites
    }
}
