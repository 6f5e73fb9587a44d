//! Read-only level records and the catalog they are selected from.

use crate::cell::ElementType;
use crate::coordinate::{Coordinate, FIELD_SIZE};
use crate::error::EngineError;

/// Bytes per level in a `LEVELS.DAT` file: the grid followed by 96 bytes of
/// metadata.
pub const RECORD_SIZE: usize = 1536;

/// Title: 23 space-padded bytes after four unused bytes, the gravity flag and
/// the version byte.
const NAME_OFFSET: usize = FIELD_SIZE + 6;
const NAME_LEN: usize = 23;
/// Follows the title and the freeze-zonks flag.
const INFOTRONS_OFFSET: usize = NAME_OFFSET + NAME_LEN + 1;

/// One level: a 60×24 grid of element types plus metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    name: String,
    infotrons: u8,
    grid: Box<[ElementType]>,
    start: Coordinate,
}

impl Level {
    /// Build a level from raw level-file codes.
    ///
    /// Murphy's start is the first Murphy cell in scan order.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownElement`] for a code outside the static element
    /// range, [`EngineError::NoAgentStart`] if no cell holds Murphy.
    pub fn new(name: &str, infotrons: u8, codes: &[u8; FIELD_SIZE]) -> Result<Self, EngineError> {
        let grid = codes
            .iter()
            .enumerate()
            .map(|(index, &code)| match ElementType::from_code(code) {
                Some(kind) if kind.is_static() => Ok(kind),
                _ => Err(EngineError::UnknownElement { code, index }),
            })
            .collect::<Result<Box<[ElementType]>, _>>()?;

        let start = grid
            .iter()
            .position(|&kind| kind == ElementType::Murphy)
            .map(|i| Coordinate::from_raw(i as u16))
            .ok_or_else(|| EngineError::NoAgentStart {
                level: name.to_owned(),
            })?;

        Ok(Self {
            name: name.to_owned(),
            infotrons,
            grid,
            start,
        })
    }

    /// Like [`Level::new`] for a byte slice that should hold one grid.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidLevelData`] if `bytes` is not exactly one grid,
    /// otherwise as [`Level::new`].
    pub fn from_bytes(name: &str, infotrons: u8, bytes: &[u8]) -> Result<Self, EngineError> {
        let codes: &[u8; FIELD_SIZE] = bytes
            .try_into()
            .map_err(|_| EngineError::InvalidLevelData { len: bytes.len() })?;
        Self::new(name, infotrons, codes)
    }

    /// Parse one `LEVELS.DAT` record: grid, title and infotrons needed.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidLevelData`] if `record` is not [`RECORD_SIZE`]
    /// bytes, otherwise as [`Level::new`].
    pub fn from_record(record: &[u8]) -> Result<Self, EngineError> {
        if record.len() != RECORD_SIZE {
            return Err(EngineError::InvalidLevelData { len: record.len() });
        }
        let title = String::from_utf8_lossy(&record[NAME_OFFSET..NAME_OFFSET + NAME_LEN]);
        let name = title.trim_matches(|c: char| c == '\0' || c.is_whitespace());
        Self::from_bytes(name, record[INFOTRONS_OFFSET], &record[..FIELD_SIZE])
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Infotrons needed to open the exit.
    #[must_use]
    pub fn infotrons(&self) -> u8 {
        self.infotrons
    }

    #[must_use]
    pub fn grid(&self) -> &[ElementType] {
        &self.grid
    }

    #[must_use]
    pub fn start(&self) -> Coordinate {
        self.start
    }
}

/// Ordered, non-empty list of levels.
#[derive(Clone, Debug)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    /// # Errors
    ///
    /// [`EngineError::EmptyCatalog`] if `levels` is empty.
    pub fn new(levels: Vec<Level>) -> Result<Self, EngineError> {
        if levels.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }
        Ok(Self { levels })
    }

    /// Split concatenated grids into levels named by their 1-based number.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidLevelData`] if the length is not a non-zero
    /// multiple of one grid, or any error from [`Level::new`].
    pub fn from_grids(bytes: &[u8]) -> Result<Self, EngineError> {
        if bytes.is_empty() || bytes.len() % FIELD_SIZE != 0 {
            return Err(EngineError::InvalidLevelData { len: bytes.len() });
        }
        let levels = bytes
            .chunks_exact(FIELD_SIZE)
            .enumerate()
            .map(|(i, grid)| Level::from_bytes(&format!("{:03}", i + 1), 0, grid))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(levels)
    }

    /// Split a `LEVELS.DAT` image into levels, keeping each record's title
    /// and infotron count.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidLevelData`] if the length is not a non-zero
    /// multiple of [`RECORD_SIZE`], or any error from [`Level::new`].
    pub fn from_records(bytes: &[u8]) -> Result<Self, EngineError> {
        if bytes.is_empty() || bytes.len() % RECORD_SIZE != 0 {
            return Err(EngineError::InvalidLevelData { len: bytes.len() });
        }
        let levels = bytes
            .chunks_exact(RECORD_SIZE)
            .map(Level::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("parsed {} level records", levels.len());
        Self::new(levels)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.levels.len() - 1
    }

    /// # Errors
    ///
    /// [`EngineError::LevelOutOfRange`] if `index` is past the end.
    pub fn get(&self, index: usize) -> Result<&Level, EngineError> {
        self.levels.get(index).ok_or(EngineError::LevelOutOfRange {
            index,
            count: self.levels.len(),
        })
    }

    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.levels.iter().map(Level::name)
    }
}
