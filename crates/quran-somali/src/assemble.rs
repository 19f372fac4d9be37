//! Build a per-surah dataset from upstream edition documents.
//!
//! Upstream editions are flat verse lists (`{"quran": [{"chapter", "verse", "text"}]}`)
//! and chapter names come from a separate index (`{"chapters": [{"chapter", "name"}]}`).
//! Both editions are re-keyed by chapter and verse, then merged surah by surah.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::types::{Quran, Surah, Verse, SURAH_COUNT};

/// An upstream edition: one entry per verse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Edition {
    #[serde(default)]
    pub quran: Vec<EditionVerse>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditionVerse {
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

/// Upstream chapter index.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChapterIndex {
    #[serde(default)]
    pub chapters: Vec<ChapterInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChapterInfo {
    pub chapter: u32,
    pub name: String,
}

/// Output of [`assemble`].
#[derive(Debug, Clone)]
pub struct Assembled {
    pub quran: Quran,
    pub total_verses: usize,
}

type Keyed<'a> = HashMap<u32, BTreeMap<u32, &'a str>>;

fn key_by_chapter(edition: &Edition) -> Keyed<'_> {
    let mut keyed: Keyed<'_> = HashMap::new();
    for v in &edition.quran {
        keyed
            .entry(v.chapter)
            .or_default()
            .insert(v.verse, v.text.as_str());
    }
    keyed
}

/// Merge an Arabic edition and a translation edition into a dataset.
///
/// Each surah gets as many verses as the higher verse number seen in either
/// edition; a text missing from one side is left empty. Surahs absent from the
/// Arabic edition are skipped.
pub fn assemble(arabic: &Edition, translation: &Edition, index: &ChapterIndex) -> Assembled {
    let arabic = key_by_chapter(arabic);
    let translation = key_by_chapter(translation);
    let names: HashMap<u32, &str> = index
        .chapters
        .iter()
        .map(|c| (c.chapter, c.name.as_str()))
        .collect();

    let mut surahs = Vec::with_capacity(SURAH_COUNT);
    let mut total_verses = 0;

    for number in 1..=SURAH_COUNT as u32 {
        let Some(ar) = arabic.get(&number) else {
            tracing::warn!("Surah {number} not found in Arabic edition");
            continue;
        };
        let tr = translation.get(&number);

        let last = |m: Option<&BTreeMap<u32, &str>>| {
            m.and_then(|m| m.keys().next_back().copied()).unwrap_or(0)
        };
        let max_verse = last(Some(ar)).max(last(tr));

        let verses: Vec<Verse> = (1..=max_verse)
            .map(|v| Verse {
                verse_number: v,
                arabic_text: ar.get(&v).copied().unwrap_or_default().to_string(),
                translation_text: tr
                    .and_then(|t| t.get(&v).copied())
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect();

        let surah_name = names
            .get(&number)
            .map(|n| n.to_string())
            .unwrap_or_else(|| format!("Surah {number}"));

        tracing::debug!("Processed Surah {number}: {surah_name} ({} verses)", verses.len());
        total_verses += verses.len();
        surahs.push(Surah {
            surah_number: number,
            surah_name,
            verses,
        });
    }

    Assembled {
        quran: Quran::new(surahs),
        total_verses,
    }
}
