//! Integration tests for the query, assemble, and translations commands.

use std::path::{Path, PathBuf};

use serde_json::{json, Value};

use quran_somali::{ParseError, Quran, QuranError, QuranWriter, Surah, Translation, Verse};
use quran_somali_cli::commands::{run_assemble, run_query, run_translations, AssembleArgs, QueryArgs};
use quran_somali_cli::{DisplayOptions, QuranSession};

// ─────────────────────── helpers ───────────────────────

/// 114 surahs with `n % 7 + 3` verses each (surah 18 gets 7).
fn sample_quran() -> Quran {
    let surahs = (1..=114u32)
        .map(|n| Surah {
            surah_number: n,
            surah_name: format!("Surah {n}"),
            verses: (1..=n % 7 + 3)
                .map(|v| Verse {
                    verse_number: v,
                    arabic_text: format!("ar {n}:{v}"),
                    translation_text: format!("so {n}:{v}"),
                })
                .collect(),
        })
        .collect();
    Quran::new(surahs)
}

/// Write the sample dataset for `translation` into a fresh temp dir.
fn data_dir_with(translation: Translation) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    QuranWriter::write_to_file(&sample_quran(), &dir.path().join(translation.storage_key()))
        .unwrap();
    dir
}

fn query_args(dir: &Path, query: &str) -> QueryArgs {
    QueryArgs {
        query: query.to_string(),
        output: None,
        translation: Translation::Jacob,
        data_dir: dir.to_path_buf(),
        display: DisplayOptions::default(),
    }
}

fn run(args: &QueryArgs) -> anyhow::Result<String> {
    let mut out = Vec::new();
    run_query(&mut out, args)?;
    Ok(String::from_utf8(out).unwrap())
}

fn write_json(path: &Path, value: &Value) {
    std::fs::write(path, serde_json::to_vec(value).unwrap()).unwrap();
}

// ═══════════════════════════════════════════════════════
// QUERY
// ═══════════════════════════════════════════════════════

#[test]
fn test_verse_query_prints_layout() {
    let dir = data_dir_with(Translation::Jacob);
    let out = run(&query_args(dir.path(), "2:3")).unwrap();
    assert!(out.contains("SURAH 2: Surah 2\nVerse 3\n"));
    assert!(out.contains("Arabic:  ar 2:3\nSomali:  so 2:3\n"));
    assert!(!out.contains("[Using translation"));
}

#[test]
fn test_non_default_translation_banner() {
    let dir = data_dir_with(Translation::Abdu);
    let mut args = query_args(dir.path(), "1");
    args.translation = Translation::Abdu;
    let out = run(&args).unwrap();
    assert!(out.starts_with(
        "\n[Using translation: Shaykh Mahmood Muhammad Abdu (Contemporary)]\n"
    ));
    assert!(out.contains("Total Verses: 4"));
}

#[test]
fn test_missing_dataset_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = run(&query_args(dir.path(), "1")).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<QuranError>(),
        Some(QuranError::Dataset(_))
    ));
}

#[test]
fn test_malformed_dataset_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(Translation::Jacob.storage_key()), "{oops").unwrap();
    let err = run(&query_args(dir.path(), "1")).unwrap_err();
    assert!(err.to_string().contains("Invalid JSON"));
}

#[test]
fn test_parse_and_lookup_errors_surface() {
    let dir = data_dir_with(Translation::Jacob);

    let err = run(&query_args(dir.path(), "abc")).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ParseError>(),
        Some(&ParseError::InvalidSurahFormat("abc".to_string()))
    );

    let err = run(&query_args(dir.path(), "115")).unwrap_err();
    assert!(err.to_string().contains("between 1 and 114"));

    let err = run(&query_args(dir.path(), "1:3-2")).unwrap_err();
    assert!(matches!(err.downcast_ref::<QuranError>(), Some(QuranError::Lookup(_))));
}

#[test]
fn test_empty_verse_list_prints_and_saves_nothing() {
    let dir = data_dir_with(Translation::Jacob);
    let out_path = dir.path().join("none.json");
    let mut args = query_args(dir.path(), "999:1,0:1");
    args.output = Some(out_path.clone());

    assert_eq!(run(&args).unwrap(), "");
    assert!(!out_path.exists());
}

#[test]
fn test_multiple_drops_bad_refs() {
    let dir = data_dir_with(Translation::Jacob);
    let out = run(&query_args(dir.path(), "1:1,999:1,2:2")).unwrap();
    assert!(out.contains("MULTIPLE VERSES (2 total)"));
}

#[test]
fn test_save_range_to_file() {
    let dir = data_dir_with(Translation::Jacob);
    let out_path: PathBuf = dir.path().join("out").join("kahf.json");
    let mut args = query_args(dir.path(), "18:2-5");
    args.output = Some(out_path.clone());

    let out = run(&args).unwrap();
    assert!(out.contains("Saved to:"));

    let saved: Value = serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(saved["surah_number"], 18);
    assert_eq!(saved["verses"].as_array().unwrap().len(), 4);
    assert_eq!(saved["verses"][0]["verse_number"], 2);
    assert_eq!(saved["verses"][0]["somali_translation"], "so 18:2");
}

#[test]
fn test_save_multiple_is_array() {
    let dir = data_dir_with(Translation::Jacob);
    let out_path = dir.path().join("refs.json");
    let mut args = query_args(dir.path(), "1:1,2:2");
    args.output = Some(out_path.clone());
    run(&args).unwrap();

    let saved: Value = serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(saved.as_array().unwrap().len(), 2);
    assert_eq!(saved[1]["verse"]["verse_number"], 2);
    assert_eq!(saved[1]["surah_name"], "Surah 2");
}

#[test]
fn test_display_flags() {
    let dir = data_dir_with(Translation::Jacob);
    let mut args = query_args(dir.path(), "3");
    args.display = DisplayOptions::from_flags(false, true, true);
    let out = run(&args).unwrap();
    assert!(!out.contains("Arabic:"));
    assert!(!out.contains("[Verse"));
    assert!(out.contains("Somali:  so 3:1"));
}

// ═══════════════════════════════════════════════════════
// SESSION
// ═══════════════════════════════════════════════════════

#[test]
fn test_session_query() {
    let session = QuranSession::from_quran(sample_quran(), Translation::Abduh);
    assert_eq!(session.translation(), Translation::Abduh);
    assert_eq!(session.query("18:1-7").unwrap().verse_count(), 7);
    assert_eq!(session.query("1:1,1:99").unwrap().verse_count(), 1);
    assert!(session.query("1:1,112:1-4").is_err());
}

// ═══════════════════════════════════════════════════════
// ASSEMBLE
// ═══════════════════════════════════════════════════════

#[test]
fn test_assemble_writes_loadable_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let arabic = dir.path().join("ara.json");
    let somali = dir.path().join("som.json");
    let info = dir.path().join("info.json");

    write_json(
        &arabic,
        &json!({"quran": [
            {"chapter": 1, "verse": 1, "text": "بسم الله"},
            {"chapter": 1, "verse": 2, "text": "الحمد لله"},
            {"chapter": 2, "verse": 1, "text": "الم"}
        ]}),
    );
    write_json(
        &somali,
        &json!({"quran": [
            {"chapter": 1, "verse": 1, "text": "Magaca Eebe"},
            {"chapter": 2, "verse": 1, "text": "A.L.M."}
        ]}),
    );
    write_json(
        &info,
        &json!({"chapters": [{"chapter": 1, "name": "الفاتحة"}]}),
    );

    let args = AssembleArgs {
        arabic,
        translation_file: somali,
        info,
        translation: Translation::Abduh,
        output: None,
        data_dir: dir.path().to_path_buf(),
    };
    let mut out = Vec::new();
    let path = run_assemble(&mut out, &args).unwrap();
    assert!(path.ends_with(Translation::Abduh.storage_key()));

    let report = String::from_utf8(out).unwrap();
    assert!(report.contains("Total Surahs: 2/114"));
    assert!(report.contains("Total Verses: 3"));

    let session = QuranSession::open(dir.path(), Translation::Abduh).unwrap();
    let quran = session.quran();
    assert_eq!(quran.surahs[0].surah_name, "الفاتحة");
    assert_eq!(quran.surahs[0].verses[1].translation_text, "");
    assert_eq!(quran.surahs[1].surah_name, "Surah 2");
}

#[test]
fn test_assemble_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let args = AssembleArgs {
        arabic: dir.path().join("nope.json"),
        translation_file: dir.path().join("nope.json"),
        info: dir.path().join("nope.json"),
        translation: Translation::Jacob,
        output: None,
        data_dir: dir.path().to_path_buf(),
    };
    let err = run_assemble(&mut std::io::sink(), &args).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

// ═══════════════════════════════════════════════════════
// TRANSLATIONS
// ═══════════════════════════════════════════════════════

#[test]
fn test_translations_report_presence() {
    let dir = data_dir_with(Translation::Abduh);
    let mut out = Vec::new();
    run_translations(&mut out, dir.path()).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("quran_somali_MahmudMuhammadAbduh.json (found)"));
    assert!(text.contains("quran_somali_AbdullahHasanJacob.json (missing)"));
    assert!(text.contains("[DEFAULT]"));
    assert!(text.contains("edition som-mahmudmuhammada"));
    assert!(text.ends_with("Arabic text edition: ara-quransimple\n"));
}
