//! Command implementations behind the `quran-query` binary.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use quran_somali::translation::ARABIC_EDITION;
use quran_somali::{assemble, parse, ChapterIndex, Edition, QuranWriter, Translation};

use crate::render::{write_result, DisplayOptions};
use crate::session::QuranSession;

/// Inputs for a one-shot query.
#[derive(Debug, Clone)]
pub struct QueryArgs {
    pub query: String,
    pub output: Option<PathBuf>,
    pub translation: Translation,
    pub data_dir: PathBuf,
    pub display: DisplayOptions,
}

/// Load the dataset, resolve the query, print it, and optionally save it.
///
/// A verse list that resolves to nothing prints and saves nothing.
pub fn run_query<W: Write>(out: &mut W, args: &QueryArgs) -> Result<()> {
    let session = QuranSession::open(&args.data_dir, args.translation)?;

    if !args.translation.is_default() {
        writeln!(out, "\n[Using translation: {}]\n", args.translation.display_name())?;
    }

    let query = parse(&args.query)?;
    let result = session.execute(&query)?;
    if result.is_empty() {
        tracing::info!("Query {query} matched no verses");
        return Ok(());
    }

    write_result(out, &result, args.display)?;

    if let Some(path) = &args.output {
        QuranWriter::write_json_to_file(&result, path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        writeln!(out, "\n\u{2713} Saved to: {}\n", path.display())?;
    }
    Ok(())
}

/// Inputs for building a dataset from downloaded upstream editions.
#[derive(Debug, Clone)]
pub struct AssembleArgs {
    pub arabic: PathBuf,
    pub translation_file: PathBuf,
    pub info: PathBuf,
    pub translation: Translation,
    /// Defaults to the translation's file name inside `data_dir`.
    pub output: Option<PathBuf>,
    pub data_dir: PathBuf,
}

/// Merge upstream edition files into the per-surah format and write the result.
pub fn run_assemble<W: Write>(out: &mut W, args: &AssembleArgs) -> Result<PathBuf> {
    let arabic: Edition = read_json(&args.arabic)?;
    let translated: Edition = read_json(&args.translation_file)?;
    let index: ChapterIndex = read_json(&args.info)?;

    let assembled = assemble(&arabic, &translated, &index);

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| args.data_dir.join(args.translation.storage_key()));
    QuranWriter::write_to_file(&assembled.quran, &path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Assembled {} into {}", args.translation, path.display());
    writeln!(out, "\u{2713} Saved: {}", path.display())?;
    writeln!(out, "  Translator: {}", args.translation.info().translator)?;
    writeln!(out, "  Total Surahs: {}/114", assembled.quran.count())?;
    writeln!(out, "  Total Verses: {}", assembled.total_verses)?;
    Ok(path)
}

/// List the supported translations and whether each dataset is present.
pub fn run_translations<W: Write>(out: &mut W, data_dir: &Path) -> Result<()> {
    writeln!(out, "Available translations ({}):", data_dir.display())?;
    for t in Translation::ALL {
        let info = t.info();
        let present = if data_dir.join(info.storage_key).is_file() {
            "found"
        } else {
            "missing"
        };
        let default = if t.is_default() { " [DEFAULT]" } else { "" };
        writeln!(out, "  {:<6} {}{default}", info.id, info.display_name)?;
        writeln!(out, "         {} ({present})", info.storage_key)?;
        writeln!(out, "         {}, edition {}", info.description, t.edition_key())?;
    }
    writeln!(out, "Arabic text edition: {ARABIC_EDITION}")?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("{} not found", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid JSON file: {}", path.display()))
}
