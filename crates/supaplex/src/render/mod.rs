//! Projects the field and Murphy into a tile map and sprite table.
//!
//! The screen shows a 16×11 window of the field. Static elements go into the
//! tile map; animated ones draw space there and may add a sprite on top.

pub mod camera;
pub mod sprites;
pub mod tiles;

use crate::agent::{Facing, Murphy};
use crate::cell::Element;
use crate::coordinate::{Coordinate, FIELD_HEIGHT, FIELD_WIDTH};
use crate::Field;
use camera::{Camera, TILE_SIZE};
use sprites::{first_tile, Sprite, SpriteTable};
use tiles::SubTiles;

/// Visible window in field cells, including the partial column and row
/// exposed while scrolling.
pub const WINDOW_WIDTH: usize = 16;
pub const WINDOW_HEIGHT: usize = 11;

/// Tile-map dimensions in 8×8 sub-tiles. Rows are 32 entries apart.
pub const MAP_STRIDE: usize = 32;
pub const MAP_ROWS: usize = 2 * WINDOW_HEIGHT;

/// Background tile map, one entry per 8×8 sub-tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileMap {
    entries: [u16; MAP_STRIDE * MAP_ROWS],
}

impl Default for TileMap {
    fn default() -> Self {
        Self {
            entries: [0; MAP_STRIDE * MAP_ROWS],
        }
    }
}

impl TileMap {
    /// Write one cell's four sub-tiles at window position `(x, y)`.
    pub fn put(&mut self, x: usize, y: usize, tiles: SubTiles) {
        let [top_left, top_right, bottom_left, bottom_right] = tiles.0;
        let top = 2 * y * MAP_STRIDE + 2 * x;
        let bottom = top + MAP_STRIDE;
        self.entries[top] = top_left;
        self.entries[top + 1] = top_right;
        self.entries[bottom] = bottom_left;
        self.entries[bottom + 1] = bottom_right;
    }

    /// The four sub-tiles of window cell `(x, y)`.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> SubTiles {
        let top = 2 * y * MAP_STRIDE + 2 * x;
        let bottom = top + MAP_STRIDE;
        SubTiles([
            self.entries[top],
            self.entries[top + 1],
            self.entries[bottom],
            self.entries[bottom + 1],
        ])
    }

    #[must_use]
    pub fn entries(&self) -> &[u16] {
        &self.entries
    }
}

/// One frame's worth of presentation state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderCommands {
    pub tile_map: TileMap,
    pub camera: Camera,
    pub sprites: SpriteTable,
}

impl RenderCommands {
    #[must_use]
    pub fn scroll_x(&self) -> u16 {
        self.camera.x.scroll
    }

    #[must_use]
    pub fn scroll_y(&self) -> u16 {
        self.camera.y.scroll
    }
}

/// Redraw `out` from the current field and Murphy.
pub fn draw(field: &Field, murphy: &Murphy, out: &mut RenderCommands) {
    let camera = Camera::follow(murphy);
    out.camera = camera;
    out.sprites.begin();

    let scroll_x = camera.x.scroll as i16;
    let scroll_y = camera.y.scroll as i16;

    for wy in 0..WINDOW_HEIGHT {
        let fy = usize::from(camera.y.origin) + wy;
        for wx in 0..WINDOW_WIDTH {
            let fx = usize::from(camera.x.origin) + wx;
            // The window can hang one column/row past the field edge.
            let element = if fx < FIELD_WIDTH && fy < FIELD_HEIGHT {
                field.get(Coordinate::new(fx, fy))
            } else {
                Element::space()
            };

            if !element.kind.is_static() {
                let x = (TILE_SIZE as usize * wx) as i16 - scroll_x;
                let y = (TILE_SIZE as usize * wy) as i16 - scroll_y;
                if let Some(sprite) = sprites::element_sprite(element, x, y) {
                    out.sprites.push(sprite);
                }
            }
            out.tile_map.put(wx, wy, tiles::sub_tiles(element.kind));
        }
    }

    out.sprites.finish();
    out.sprites.set_murphy(murphy_sprite(murphy, &camera));
}

fn murphy_sprite(murphy: &Murphy, camera: &Camera) -> Sprite {
    Sprite {
        x: camera.x.sprite as i16,
        y: camera.y.sprite as i16,
        tile: first_tile::MURPHY + murphy.frame / 4,
        flip_x: murphy.facing == Facing::Right,
    }
}
