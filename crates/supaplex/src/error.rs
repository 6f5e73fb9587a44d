//! Error type for level loading and engine construction.

use std::fmt;

/// Everything that can stop a level from being loaded. None of these are
/// recoverable from inside a tick; the host is expected to halt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The level has no Murphy start cell.
    NoAgentStart {
        /// Name of the offending level.
        level: String,
    },
    /// A grid byte is not a known element code.
    UnknownElement {
        /// The raw byte.
        code: u8,
        /// Cell index within the grid.
        index: usize,
    },
    /// A level index outside the catalog.
    LevelOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of levels in the catalog.
        count: usize,
    },
    /// A catalog must hold at least one level.
    EmptyCatalog,
    /// Raw level data has the wrong length for its format.
    InvalidLevelData {
        /// Byte length that was supplied.
        len: usize,
    },
    /// Asset tables do not match the graphics tile enumeration.
    AssetShape {
        /// Which table is wrong.
        table: &'static str,
        /// Expected entry count.
        expected: usize,
        /// Supplied entry count.
        actual: usize,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAgentStart { level } => {
                write!(f, "level {level:?} has no Murphy start cell")
            }
            Self::UnknownElement { code, index } => {
                write!(f, "unknown element code {code:#04x} at cell {index}")
            }
            Self::LevelOutOfRange { index, count } => {
                write!(f, "level {index} out of range: catalog has {count} levels")
            }
            Self::EmptyCatalog => write!(f, "level catalog is empty"),
            Self::InvalidLevelData { len } => {
                write!(f, "level data of {len} bytes has the wrong length")
            }
            Self::AssetShape {
                table,
                expected,
                actual,
            } => write!(f, "{table} table has {actual} entries, expected {expected}"),
        }
    }
}

impl std::error::Error for EngineError {}
