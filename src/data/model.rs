use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Placeholder stored in `secondary_type` when the source cell is empty.
pub const NO_SECONDARY_TYPE: &str = "None";

// ---------------------------------------------------------------------------
// Stat – the six numeric attributes every record carries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Stat {
    /// Display / column order used everywhere stats are enumerated.
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];

    /// Column label in the source table.
    pub fn column(self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::SpecialAttack => "SP. Atk.",
            Stat::SpecialDefense => "SP. Def",
            Stat::Speed => "Speed",
        }
    }

    /// Position within [`Stat::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the table
// ---------------------------------------------------------------------------

/// A single creature entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub name: String,
    pub primary_type: String,
    /// Never empty: [`NO_SECONDARY_TYPE`] when the source had no value.
    pub secondary_type: String,
    /// Indexed by [`Stat::index`].
    pub stats: [f64; 6],
    /// Expected to equal the stat sum; not checked.
    pub total: f64,
    /// Path to a portrait image. May point at nothing.
    pub image: String,
}

impl Record {
    pub fn stat(&self, stat: Stat) -> f64 {
        self.stats[stat.index()]
    }

    pub fn has_secondary_type(&self) -> bool {
        self.secondary_type != NO_SECONDARY_TYPE
    }

    /// Resolve the image path against the filesystem.
    pub fn portrait(&self) -> Portrait {
        Portrait::resolve(&self.image)
    }
}

/// Outcome of resolving a record's image path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Portrait {
    Available(PathBuf),
    Missing,
}

impl Portrait {
    pub fn resolve(path: &str) -> Self {
        if path.is_empty() {
            return Portrait::Missing;
        }
        let path = Path::new(path);
        if path.is_file() {
            Portrait::Available(path.to_path_buf())
        } else {
            Portrait::Missing
        }
    }
}

// ---------------------------------------------------------------------------
// Pokedex – the complete loaded table
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("row index {index} is out of range for a table of {len} rows")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Every record in source-file order. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    records: Vec<Record>,
}

impl Pokedex {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Ordinal lookup by zero-based row position.
    pub fn get(&self, index: usize) -> Result<&Record, QueryError> {
        self.records.get(index).ok_or(QueryError::IndexOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
