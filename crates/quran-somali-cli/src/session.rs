//! A loaded dataset plus the translation it came from.

use std::path::Path;

use quran_somali::lookup;
use quran_somali::{
    parse, DatasetSource, DirectorySource, Query, QueryResult, Quran, QuranResult, Translation,
};

/// Holds one translation's dataset for the lifetime of a command or REPL.
pub struct QuranSession {
    quran: Quran,
    translation: Translation,
}

impl QuranSession {
    /// Load the dataset for `translation` from `data_dir`.
    pub fn open(data_dir: &Path, translation: Translation) -> QuranResult<Self> {
        Self::open_from(&DirectorySource::new(data_dir), translation)
    }

    /// Load the dataset for `translation` from any source.
    pub fn open_from<S: DatasetSource>(source: &S, translation: Translation) -> QuranResult<Self> {
        let quran = source.load(translation)?;
        if !quran.is_complete() {
            tracing::warn!(
                "Dataset for {translation} has {} surahs, expected 114",
                quran.count()
            );
        }

        Ok(Self { quran, translation })
    }

    /// Wrap an already-loaded dataset.
    pub fn from_quran(quran: Quran, translation: Translation) -> Self {
        Self { quran, translation }
    }

    pub fn quran(&self) -> &Quran {
        &self.quran
    }

    pub fn translation(&self) -> Translation {
        self.translation
    }

    /// Parse and resolve a query string.
    pub fn query(&self, input: &str) -> QuranResult<QueryResult<'_>> {
        let query = parse(input)?;
        tracing::debug!("Parsed query {input:?} as {query}");
        self.execute(&query)
    }

    /// Resolve a parsed query. References dropped from a verse list are logged.
    pub fn execute(&self, query: &Query) -> QuranResult<QueryResult<'_>> {
        if let Query::Multiple { refs } = query {
            let batch = lookup::multiple_with_errors(&self.quran, refs);
            for ((surah, verse), err) in &batch.errors {
                tracing::warn!("Skipping {surah}:{verse}: {err}");
            }
            return Ok(QueryResult::Multiple(batch.found));
        }

        Ok(lookup::execute(&self.quran, query)?)
    }
}
