//! Hardware-style sprite table and the per-type sprite formulas for animated
//! elements.

use crate::cell::{Element, ElementType};

pub const SPRITE_SLOTS: usize = 128;

/// Slot 0 always belongs to Murphy; element sprites fill from slot 1.
pub const MURPHY_SLOT: usize = 0;

/// First sprite graphic of each animation in the sprite bitmap table.
pub mod first_tile {
    pub const MURPHY: u16 = 0;
    pub const ZONK_FALLING: u16 = 15;
    pub const ZONK_ROLLING: u16 = 16;
}

/// Attribute 0 bit that hides a slot.
const ATTR0_HIDDEN: u16 = 1 << 9;
/// Attribute 1 horizontal flip bit.
const ATTR1_FLIP_X: u16 = 1 << 12;
/// Attribute 1 size bits selecting 16×16.
const ATTR1_SIZE_16: u16 = 1 << 14;

/// One visible 16×16 sprite, positioned in screen pixels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Sprite {
    pub x: i16,
    pub y: i16,
    pub tile: u16,
    pub flip_x: bool,
}

impl Sprite {
    /// Pack into the three attribute halfwords of a hardware sprite entry.
    #[must_use]
    pub fn attributes(&self) -> [u16; 3] {
        let flip = if self.flip_x { ATTR1_FLIP_X } else { 0 };
        [
            self.y as u16 & 0xff,
            (self.x as u16 & 0x1ff) | flip | ATTR1_SIZE_16,
            self.tile << 2,
        ]
    }
}

/// Attribute halfwords of a hidden slot.
pub const HIDDEN_ATTRIBUTES: [u16; 3] = [ATTR0_HIDDEN, 0, 0];

/// Sprite for an animated element whose cell is drawn at `(x, y)` on
/// screen, or `None` for types that have no sprite of their own.
#[must_use]
pub fn element_sprite(element: Element, x: i16, y: i16) -> Option<Sprite> {
    let frame = i16::from(element.frame);
    let rolling = first_tile::ZONK_ROLLING + u16::from(element.frame / 4);
    match element.kind {
        ElementType::ZonkFallingTop => Some(Sprite {
            x,
            y: y + frame,
            tile: first_tile::ZONK_FALLING,
            flip_x: false,
        }),
        ElementType::ZonkRollingLeftRight => Some(Sprite {
            x: x - frame,
            y,
            tile: rolling,
            flip_x: false,
        }),
        ElementType::ZonkRollingRightLeft => Some(Sprite {
            x: x + frame,
            y,
            tile: rolling,
            flip_x: true,
        }),
        _ => None,
    }
}

/// Every slot is rewritten each frame; a slot not claimed this frame is
/// `None` (hidden).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteTable {
    slots: [Option<Sprite>; SPRITE_SLOTS],
    next: usize,
}

impl Default for SpriteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SpriteTable {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: [None; SPRITE_SLOTS],
            next: MURPHY_SLOT + 1,
        }
    }

    /// Start a new frame; element sprites claim slots from 1 again.
    pub fn begin(&mut self) {
        self.next = MURPHY_SLOT + 1;
    }

    /// Claim the next free slot. Returns `false` once the table is full.
    pub fn push(&mut self, sprite: Sprite) -> bool {
        if self.next >= SPRITE_SLOTS {
            log::trace!("sprite table full, dropping {sprite:?}");
            return false;
        }
        self.slots[self.next] = Some(sprite);
        self.next += 1;
        true
    }

    /// Hide every element slot not claimed since [`SpriteTable::begin`].
    pub fn finish(&mut self) {
        for slot in &mut self.slots[self.next..] {
            *slot = None;
        }
    }

    pub fn set_murphy(&mut self, sprite: Sprite) {
        self.slots[MURPHY_SLOT] = Some(sprite);
    }

    #[must_use]
    pub fn murphy(&self) -> Option<Sprite> {
        self.slots[MURPHY_SLOT]
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<Sprite>] {
        &self.slots
    }

    /// Element sprites claimed this frame, in slot order.
    pub fn elements(&self) -> impl Iterator<Item = Sprite> + '_ {
        self.slots[MURPHY_SLOT + 1..].iter().flatten().copied()
    }
}
