//! Scroll window that keeps Murphy on screen.

use crate::agent::Murphy;

/// Pixels per field cell on screen.
pub const TILE_SIZE: u16 = 16;

/// Scroll limits along one axis, in sub-pixel units.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Axis {
    /// Below this the map is pinned to the top/left edge.
    pub low: u16,
    /// At or above this the map is pinned to the bottom/right edge.
    pub high: u16,
    /// Map origin, in tiles, when pinned to the far edge.
    pub max_origin: u16,
}

pub const X_AXIS: Axis = Axis {
    low: 112,
    high: 832,
    max_origin: 720 / TILE_SIZE,
};

pub const Y_AXIS: Axis = Axis {
    low: 72,
    high: 296,
    max_origin: 224 / TILE_SIZE,
};

/// Where the map and Murphy's sprite go along one axis.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct AxisView {
    /// First visible field column/row.
    pub origin: u16,
    /// Sub-tile pixel scroll of the tile map.
    pub scroll: u16,
    /// Murphy's on-screen sprite position.
    pub sprite: u16,
}

impl Axis {
    #[must_use]
    pub fn follow(&self, position: u16) -> AxisView {
        if position < self.low {
            AxisView {
                origin: 0,
                scroll: 0,
                sprite: position,
            }
        } else if position >= self.high {
            AxisView {
                origin: self.max_origin,
                scroll: 0,
                sprite: self.low + position - self.high,
            }
        } else {
            let offset = position - self.low;
            AxisView {
                origin: offset / TILE_SIZE,
                scroll: offset % TILE_SIZE,
                sprite: self.low,
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Camera {
    pub x: AxisView,
    pub y: AxisView,
}

impl Camera {
    #[must_use]
    pub fn follow(murphy: &Murphy) -> Self {
        Self {
            x: X_AXIS.follow(murphy.x),
            y: Y_AXIS.follow(murphy.y),
        }
    }
}
