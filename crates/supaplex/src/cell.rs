//! Element types and per-cell state for the game field.

use std::fmt;

/// Discriminants 0..=40 are the level-file codes and must not be reordered.
/// Everything from `MurphyMoving` on is a transient, animated state that only
/// the simulation produces.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ElementType {
    Space = 0,
    Zonk = 1,
    Base = 2,
    Murphy = 3,
    Infotron = 4,
    ChipSquare = 5,
    Wall = 6,
    Exit = 7,
    DiskOrange = 8,
    PortLeftToRight = 9,
    PortUpToDown = 10,
    PortRightToLeft = 11,
    PortDownToUp = 12,
    SpecialPortLeftToRight = 13,
    SpecialPortUpToDown = 14,
    SpecialPortRightToLeft = 15,
    SpecialPortDownToUp = 16,
    SnikSnak = 17,
    DiskYellow = 18,
    Terminal = 19,
    DiskRed = 20,
    PortVertical = 21,
    PortHorizontal = 22,
    PortCross = 23,
    Electron = 24,
    Bug = 25,
    ChipHorizontalLeft = 26,
    ChipHorizontalRight = 27,
    Hardware1 = 28,
    HardwareLampGreen = 29,
    HardwareLampBlue = 30,
    HardwareLampRed = 31,
    Hardware2 = 32,
    Hardware3 = 33,
    Hardware4 = 34,
    Hardware5 = 35,
    Hardware6 = 36,
    Hardware7 = 37,
    ChipVerticalTop = 38,
    ChipVerticalBottom = 39,
    WallInvisible = 40,

    MurphyMoving = 41,
    MurphyStanding = 42,
    ZonkFallingTop = 43,
    ZonkFallingBottom = 44,
    ZonkRollingLeftLeft = 45,
    ZonkRollingLeftRight = 46,
    ZonkRollingRightLeft = 47,
    ZonkRollingRightRight = 48,
    Reserved = 49,
}

impl ElementType {
    /// Number of type codes, i.e. the length of any table indexed by code.
    pub const COUNT: usize = 50;

    /// Codes below this value have a fixed tile and are drawn into the map.
    pub const STATIC_COUNT: usize = 41;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Space,
        Self::Zonk,
        Self::Base,
        Self::Murphy,
        Self::Infotron,
        Self::ChipSquare,
        Self::Wall,
        Self::Exit,
        Self::DiskOrange,
        Self::PortLeftToRight,
        Self::PortUpToDown,
        Self::PortRightToLeft,
        Self::PortDownToUp,
        Self::SpecialPortLeftToRight,
        Self::SpecialPortUpToDown,
        Self::SpecialPortRightToLeft,
        Self::SpecialPortDownToUp,
        Self::SnikSnak,
        Self::DiskYellow,
        Self::Terminal,
        Self::DiskRed,
        Self::PortVertical,
        Self::PortHorizontal,
        Self::PortCross,
        Self::Electron,
        Self::Bug,
        Self::ChipHorizontalLeft,
        Self::ChipHorizontalRight,
        Self::Hardware1,
        Self::HardwareLampGreen,
        Self::HardwareLampBlue,
        Self::HardwareLampRed,
        Self::Hardware2,
        Self::Hardware3,
        Self::Hardware4,
        Self::Hardware5,
        Self::Hardware6,
        Self::Hardware7,
        Self::ChipVerticalTop,
        Self::ChipVerticalBottom,
        Self::WallInvisible,
        Self::MurphyMoving,
        Self::MurphyStanding,
        Self::ZonkFallingTop,
        Self::ZonkFallingBottom,
        Self::ZonkRollingLeftLeft,
        Self::ZonkRollingLeftRight,
        Self::ZonkRollingRightLeft,
        Self::ZonkRollingRightRight,
        Self::Reserved,
    ];

    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn is_static(self) -> bool {
        (self as usize) < Self::STATIC_COUNT
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One field cell: its type, animation frame and the simulation pass that
/// last wrote it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Element {
    pub kind: ElementType,
    pub frame: u8,
    pub clock: u32,
}

impl Default for Element {
    fn default() -> Self {
        Self::space()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.kind, self.frame)
    }
}

impl Element {
    /// Animation length shared by every rule that moves an object one cell.
    pub const FRAMES: u8 = 16;

    #[must_use]
    pub const fn new(kind: ElementType) -> Self {
        Self {
            kind,
            frame: 0,
            clock: 0,
        }
    }

    #[must_use]
    pub const fn space() -> Self {
        Self::new(ElementType::Space)
    }

    /// Advance the animation. Returns `true` and resets to frame 0 once
    /// `frames` frames have elapsed.
    pub fn next_frame(&mut self, frames: u8) -> bool {
        self.frame += 1;
        if self.frame < frames {
            return false;
        }
        self.frame = 0;
        true
    }

    #[must_use]
    pub fn is_space(&self) -> bool {
        self.kind == ElementType::Space
    }

    #[must_use]
    pub fn is_murphy(&self) -> bool {
        self.kind == ElementType::Murphy
    }

    #[must_use]
    pub fn is_exit(&self) -> bool {
        self.kind == ElementType::Exit
    }

    /// Things a zonk can roll off.
    #[must_use]
    pub fn is_round(&self) -> bool {
        matches!(
            self.kind,
            ElementType::Zonk
                | ElementType::Infotron
                | ElementType::ChipSquare
                | ElementType::ChipVerticalTop
                | ElementType::ChipHorizontalLeft
                | ElementType::ChipHorizontalRight
        )
    }

    /// Cells Murphy may move into.
    #[must_use]
    pub fn is_edible(&self) -> bool {
        matches!(
            self.kind,
            ElementType::Space
                | ElementType::Base
                | ElementType::Infotron
                | ElementType::DiskRed
                | ElementType::Bug
        )
    }

    #[must_use]
    pub fn is_explodable(&self) -> bool {
        if matches!(self.kind, ElementType::Wall | ElementType::WallInvisible) {
            return false;
        }
        self.kind < ElementType::Hardware1 || self.kind > ElementType::Hardware7
    }

    #[must_use]
    pub fn is_reserved(&self) -> bool {
        self.kind == ElementType::Reserved
    }
}
