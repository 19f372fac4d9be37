//! JSON dataset reader/writer and the file-backed dataset source.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::translation::Translation;
use crate::types::{DatasetError, DatasetResult, Quran};

/// Something that can produce the dataset for a translation.
pub trait DatasetSource {
    fn load(&self, translation: Translation) -> DatasetResult<Quran>;
}

/// Loads datasets from `<root>/<storage key>`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Full path of the file backing a translation.
    pub fn path_for(&self, translation: Translation) -> PathBuf {
        self.root.join(translation.storage_key())
    }
}

impl DatasetSource for DirectorySource {
    fn load(&self, translation: Translation) -> DatasetResult<Quran> {
        let path = self.path_for(translation);
        tracing::debug!("Loading {} from {}", translation, path.display());
        let quran = QuranReader::read_from_file(&path)?;
        tracing::info!(
            "Loaded {} surahs, {} verses ({})",
            quran.count(),
            quran.verse_count(),
            translation.display_name()
        );
        Ok(quran)
    }
}

/// Reader for dataset files.
pub struct QuranReader;

/// Writer for dataset and result files.
pub struct QuranWriter;

impl QuranReader {
    /// Read a dataset from a file.
    pub fn read_from_file(path: &Path) -> DatasetResult<Quran> {
        let mut file = std::fs::File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DatasetError::NotFound(path.to_path_buf()),
            _ => DatasetError::Io(e),
        })?;
        Self::read_from(&mut file, path)
    }

    /// Read a dataset from any reader. `origin` is only used in error messages.
    pub fn read_from<R: Read>(reader: &mut R, origin: &Path) -> DatasetResult<Quran> {
        let mut payload = Vec::new();
        reader.read_to_end(&mut payload)?;
        serde_json::from_slice(&payload).map_err(|source| DatasetError::Malformed {
            path: origin.to_path_buf(),
            source,
        })
    }
}

impl QuranWriter {
    /// Write a dataset to a file, creating parent directories.
    pub fn write_to_file(quran: &Quran, path: &Path) -> DatasetResult<()> {
        Self::write_json_to_file(quran, path)
    }

    /// Write a dataset to any writer.
    pub fn write_to<W: Write>(quran: &Quran, writer: &mut W) -> DatasetResult<()> {
        Self::write_json(quran, writer)
    }

    /// Write any serializable value (a dataset or a query result) as pretty JSON.
    pub fn write_json_to_file<T: Serialize + ?Sized>(value: &T, path: &Path) -> DatasetResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = std::fs::File::create(path)?;
        Self::write_json(value, &mut file)?;
        file.flush()?;
        Ok(())
    }

    /// Pretty JSON with two-space indent; non-ASCII text is written as-is.
    pub fn write_json<T: Serialize + ?Sized, W: Write>(value: &T, writer: &mut W) -> DatasetResult<()> {
        serde_json::to_writer_pretty(&mut *writer, value).map_err(DatasetError::Serialize)?;
        Ok(())
    }
}
