//! The three supported Somali translations and where each one is stored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::TranslationError;

/// Upstream edition key for the Arabic text shared by every translation.
pub const ARABIC_EDITION: &str = "ara-quransimple";

/// A supported Somali translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Translation {
    #[default]
    Jacob,
    Abduh,
    Abdu,
}

/// Static description of a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationInfo {
    pub id: &'static str,
    pub display_name: &'static str,
    pub translator: &'static str,
    pub description: &'static str,
    /// File name of the per-surah dataset.
    pub storage_key: &'static str,
    /// Edition key on the upstream Qur'an API.
    pub edition_key: &'static str,
}

static TABLE: [(Translation, TranslationInfo); 3] = [
    (
        Translation::Jacob,
        TranslationInfo {
            id: "jacob",
            display_name: "Abdullah Hasan Jacob (Classic)",
            translator: "Abdullah Hasan Jacob",
            description: "Classic Somali Translation",
            storage_key: "quran_somali_AbdullahHasanJacob.json",
            edition_key: "som-abdullahhasanja",
        },
    ),
    (
        Translation::Abduh,
        TranslationInfo {
            id: "abduh",
            display_name: "Mahmud Muhammad Abduh (Modern)",
            translator: "Mahmud Muhammad Abduh",
            description: "Modern Somali Translation",
            storage_key: "quran_somali_MahmudMuhammadAbduh.json",
            edition_key: "som-mahmudmuhammada",
        },
    ),
    (
        Translation::Abdu,
        TranslationInfo {
            id: "abdu",
            display_name: "Shaykh Mahmood Muhammad Abdu (Contemporary)",
            translator: "Shaykh Mahmood Muhammad Abdu",
            description: "Contemporary Somali Translation",
            storage_key: "quran_somali_ShaykhMahmoodMuhammadAbdu.json",
            edition_key: "som-shaykhmahmoodmu",
        },
    ),
];

impl Translation {
    pub const ALL: [Translation; 3] = [Translation::Jacob, Translation::Abduh, Translation::Abdu];

    pub fn info(self) -> &'static TranslationInfo {
        // TABLE is ordered like the enum variants.
        &TABLE[self as usize].1
    }

    pub fn id(self) -> &'static str {
        self.info().id
    }

    pub fn display_name(self) -> &'static str {
        self.info().display_name
    }

    pub fn storage_key(self) -> &'static str {
        self.info().storage_key
    }

    pub fn edition_key(self) -> &'static str {
        self.info().edition_key
    }

    pub fn is_default(self) -> bool {
        self == Translation::default()
    }
}

impl FromStr for Translation {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TABLE
            .iter()
            .find(|(_, info)| info.id.eq_ignore_ascii_case(s.trim()))
            .map(|(t, _)| *t)
            .ok_or_else(|| TranslationError::UnknownTranslation(s.to_string()))
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
