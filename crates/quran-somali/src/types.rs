//! Core data types for the Qur'an dataset, lookup results, and errors.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Number of surahs in a complete dataset.
pub const SURAH_COUNT: usize = 114;

/// A single verse (ayah) with its Arabic text and Somali rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub verse_number: u32,
    pub arabic_text: String,
    /// Stored on disk as `somali_translation`.
    #[serde(rename = "somali_translation", alias = "translation_text")]
    pub translation_text: String,
}

/// One of the 114 chapters, with its verses in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surah {
    pub surah_number: u32,
    pub surah_name: String,
    pub verses: Vec<Verse>,
}

impl Surah {
    /// Number of verses in this surah.
    pub fn verse_count(&self) -> usize {
        self.verses.len()
    }
}

/// The whole dataset: surahs ordered by number, read-only after load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quran {
    pub surahs: Vec<Surah>,
}

impl Quran {
    pub fn new(surahs: Vec<Surah>) -> Self {
        Self { surahs }
    }

    /// Return the number of surahs.
    pub fn count(&self) -> usize {
        self.surahs.len()
    }

    /// Total verses across every surah.
    pub fn verse_count(&self) -> usize {
        self.surahs.iter().map(Surah::verse_count).sum()
    }

    /// Whether the dataset holds all 114 surahs.
    pub fn is_complete(&self) -> bool {
        self.surahs.len() == SURAH_COUNT
    }
}

/// A single verse together with the surah it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerseRef<'a> {
    pub surah_number: u32,
    pub surah_name: &'a str,
    pub verse: &'a Verse,
}

/// A contiguous run of verses from one surah.
///
/// Serializes to the same shape as [`Surah`], so a saved range reads back as one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerseRange<'a> {
    pub surah_number: u32,
    pub surah_name: &'a str,
    pub verses: &'a [Verse],
}

/// Outcome of resolving a [`crate::Query`] against a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryResult<'a> {
    Surah(&'a Surah),
    Verse(VerseRef<'a>),
    Range(VerseRange<'a>),
    Multiple(Vec<VerseRef<'a>>),
}

impl QueryResult<'_> {
    /// Number of verses carried by this result.
    pub fn verse_count(&self) -> usize {
        match self {
            QueryResult::Surah(s) => s.verses.len(),
            QueryResult::Verse(_) => 1,
            QueryResult::Range(r) => r.verses.len(),
            QueryResult::Multiple(refs) => refs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.verse_count() == 0
    }
}

/// Errors produced while parsing a query string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid format in '{0}': multiple verse format requires 'surah:verse' (e.g., 5:10,5:15)")]
    MalformedSegment(String),

    #[error("Invalid range format. Use 'surah:start-end' (e.g., 5:10-20)")]
    InvalidRangeFormat,

    #[error("Invalid verse format. Use 'surah:verse' (e.g., 5:10)")]
    InvalidVerseFormat,

    #[error("Invalid query format: '{0}'")]
    InvalidSurahFormat(String),
}

/// Errors produced while resolving a query against the dataset.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Surah number must be between 1 and 114 (got {0})")]
    SurahOutOfRange(i64),

    #[error("Verse {verse} not found in Surah {surah} (max: {max})")]
    VerseOutOfRange { surah: i64, verse: i64, max: usize },

    #[error("Start verse ({start}) must be <= end verse ({end})")]
    InvertedRange { start: i64, end: i64 },
}

/// Errors produced while loading or saving a dataset.
#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("Dataset not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced when naming a translation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    #[error("Unknown translation '{0}'. Available translations: jacob, abduh, abdu")]
    UnknownTranslation(String),
}

/// Any error the library can produce.
#[derive(thiserror::Error, Debug)]
pub enum QuranError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Translation(#[from] TranslationError),
}

/// Convenience result type.
pub type QuranResult<T> = Result<T, QuranError>;

/// Result type for dataset I/O.
pub type DatasetResult<T> = Result<T, DatasetError>;
