//! quran-somali: query parsing, verse lookup, and dataset storage for the
//! Somali Qur'an translations.

pub mod assemble;
pub mod lookup;
pub mod query;
pub mod storage;
pub mod translation;
pub mod types;

pub use assemble::{assemble, Assembled, ChapterIndex, Edition};
pub use lookup::{execute, BatchLookup};
pub use query::{parse, Query};
pub use storage::{DatasetSource, DirectorySource, QuranReader, QuranWriter};
pub use translation::{Translation, TranslationInfo};
pub use types::*;
