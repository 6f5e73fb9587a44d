//! Static element graphics: which 8×8 sub-tiles make up each 16×16 cell.

use crate::cell::ElementType;

/// Horizontal flip bit of a tile-map entry.
pub const FLIP_X: u16 = 1 << 10;
/// Vertical flip bit of a tile-map entry.
pub const FLIP_Y: u16 = 1 << 11;

/// Graphics tiles in the order of the static tile bitmap table. Several
/// element types share one graphic, possibly mirrored.
#[repr(u16)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tile {
    Space,
    Zonk,
    Base,
    Murphy,
    Infotron,
    ChipSquare,
    Wall,
    Exit,
    DiskOrange,
    PortLeftToRight,
    PortUpToDown,
    SnikSnak,
    DiskYellow,
    Terminal,
    DiskRed,
    PortVertical,
    PortHorizontal,
    PortCross,
    Electron,
    ChipHorizontalLeft,
    ChipHorizontalRight,
    Hardware1,
    HardwareLampGreen,
    HardwareLampBlue,
    HardwareLampRed,
    Hardware2,
    Hardware3,
    Hardware4,
    Hardware5,
    Hardware6,
    Hardware7,
    ChipVerticalTop,
    ChipVerticalBottom,
}

impl Tile {
    /// Number of 16×16 graphics in the static bitmap table.
    pub const COUNT: usize = 33;
}

/// Tile-map entries for one cell: top-left, top-right, bottom-left,
/// bottom-right.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SubTiles(pub [u16; 4]);

impl SubTiles {
    #[must_use]
    pub const fn plain(tile: Tile) -> Self {
        let base = 4 * tile as u16;
        Self([base, base + 1, base + 2, base + 3])
    }

    /// Mirrored left to right: the quadrants swap columns.
    #[must_use]
    pub const fn flip_x(tile: Tile) -> Self {
        let base = 4 * tile as u16;
        Self([
            (base + 1) | FLIP_X,
            base | FLIP_X,
            (base + 3) | FLIP_X,
            (base + 2) | FLIP_X,
        ])
    }

    /// Mirrored top to bottom: the quadrants swap rows.
    #[must_use]
    pub const fn flip_y(tile: Tile) -> Self {
        let base = 4 * tile as u16;
        Self([
            (base + 2) | FLIP_Y,
            (base + 3) | FLIP_Y,
            base | FLIP_Y,
            (base + 1) | FLIP_Y,
        ])
    }
}

/// Indexed by static element code.
pub static STATIC_TILES: [SubTiles; ElementType::STATIC_COUNT] = [
    SubTiles::plain(Tile::Space),
    SubTiles::plain(Tile::Zonk),
    SubTiles::plain(Tile::Base),
    SubTiles::plain(Tile::Murphy),
    SubTiles::plain(Tile::Infotron),
    SubTiles::plain(Tile::ChipSquare),
    SubTiles::plain(Tile::Wall),
    SubTiles::plain(Tile::Exit),
    SubTiles::plain(Tile::DiskOrange),
    // One-way ports; the reverse directions are mirrored.
    SubTiles::plain(Tile::PortLeftToRight),
    SubTiles::plain(Tile::PortUpToDown),
    SubTiles::flip_x(Tile::PortLeftToRight),
    SubTiles::flip_y(Tile::PortUpToDown),
    // Special ports look like ordinary ones.
    SubTiles::plain(Tile::PortLeftToRight),
    SubTiles::plain(Tile::PortUpToDown),
    SubTiles::flip_x(Tile::PortLeftToRight),
    SubTiles::flip_y(Tile::PortUpToDown),
    SubTiles::plain(Tile::SnikSnak),
    SubTiles::plain(Tile::DiskYellow),
    SubTiles::plain(Tile::Terminal),
    SubTiles::plain(Tile::DiskRed),
    SubTiles::plain(Tile::PortVertical),
    SubTiles::plain(Tile::PortHorizontal),
    SubTiles::plain(Tile::PortCross),
    SubTiles::plain(Tile::Electron),
    // Bug
    SubTiles::plain(Tile::Base),
    SubTiles::plain(Tile::ChipHorizontalLeft),
    SubTiles::plain(Tile::ChipHorizontalRight),
    SubTiles::plain(Tile::Hardware1),
    SubTiles::plain(Tile::HardwareLampGreen),
    SubTiles::plain(Tile::HardwareLampBlue),
    SubTiles::plain(Tile::HardwareLampRed),
    SubTiles::plain(Tile::Hardware2),
    SubTiles::plain(Tile::Hardware3),
    SubTiles::plain(Tile::Hardware4),
    SubTiles::plain(Tile::Hardware5),
    SubTiles::plain(Tile::Hardware6),
    SubTiles::plain(Tile::Hardware7),
    SubTiles::plain(Tile::ChipVerticalTop),
    SubTiles::plain(Tile::ChipVerticalBottom),
    // Invisible wall
    SubTiles::plain(Tile::Space),
];

/// Sub-tiles for a static element; dynamic types draw as space.
#[must_use]
pub fn sub_tiles(kind: ElementType) -> SubTiles {
    if kind.is_static() {
        STATIC_TILES[kind as usize]
    } else {
        STATIC_TILES[ElementType::Space as usize]
    }
}
