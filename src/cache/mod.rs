//! Persisted opening scores
//!
//! Scoring every dictionary word against the full dictionary is the slowest thing the
//! solver does, and its result never changes for a given word list. The scores are
//! stored per word length behind the [`ScoreCache`] trait so the engine never deals
//! with paths or formats.

mod json;

pub use json::JsonFileCache;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::io;

/// Current on-disk schema version
pub const CACHE_VERSION: u32 = 1;

/// Expected-remaining score of every opening word, keyed by word text
pub type OpeningScores = BTreeMap<String, f64>;

/// Everything stored in a cache file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCacheRecord {
    pub version: u32,
    /// Opening scores keyed by [`length_key`]
    pub scores: BTreeMap<String, OpeningScores>,
}

impl Default for ScoreCacheRecord {
    fn default() -> Self {
        Self {
            version: CACHE_VERSION,
            scores: BTreeMap::new(),
        }
    }
}

/// Key under which scores for words of `len` letters are stored
#[must_use]
pub fn length_key(len: usize) -> String {
    len.to_string()
}

/// Errors reading or writing a score cache
#[derive(Debug)]
pub enum CacheError {
    Io(io::Error),
    Parse(serde_json::Error),
    UnsupportedVersion(u32),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Score cache I/O failed: {e}"),
            Self::Parse(e) => write!(f, "Score cache is malformed: {e}"),
            Self::UnsupportedVersion(found) => write!(
                f,
                "Score cache version {found} is not supported (expected {CACHE_VERSION})"
            ),
        }
    }
}

impl std::error::Error for CacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::UnsupportedVersion(_) => None,
        }
    }
}

impl From<io::Error> for CacheError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Storage for opening scores
pub trait ScoreCache {
    /// Scores stored under `key`, or `None` if there are none
    ///
    /// # Errors
    /// Returns `CacheError` if the backing store exists but cannot be read.
    fn load(&self, key: &str) -> Result<Option<OpeningScores>, CacheError>;

    /// Replace the scores stored under `key`
    ///
    /// # Errors
    /// Returns `CacheError` if the backing store cannot be written.
    fn save(&mut self, key: &str, scores: &OpeningScores) -> Result<(), CacheError>;
}

/// In-process cache
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: FxHashMap<String, OpeningScores>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreCache for MemoryCache {
    fn load(&self, key: &str) -> Result<Option<OpeningScores>, CacheError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, scores: &OpeningScores) -> Result<(), CacheError> {
        self.entries.insert(key.to_owned(), scores.clone());
        Ok(())
    }
}

/// Cache that stores nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl ScoreCache for NoCache {
    fn load(&self, _key: &str) -> Result<Option<OpeningScores>, CacheError> {
        Ok(None)
    }

    fn save(&mut self, _key: &str, _scores: &OpeningScores) -> Result<(), CacheError> {
        Ok(())
    }
}
