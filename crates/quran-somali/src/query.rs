//! Query string parser.
//!
//! Grammar, tried in order:
//! ```text
//! multiple := ref (',' ref)*        ref := int ':' int
//! range    := int ':' int '-' int
//! verse    := int ':' int
//! surah    := int
//! ```
//! Any comma selects `multiple`, so `"1:1,112:1-4"` is rejected rather than
//! read as a verse plus a range.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::ParseError;

/// A typed query descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Query {
    Surah { surah: i64 },
    Verse { surah: i64, verse: i64 },
    Range { surah: i64, start: i64, end: i64 },
    Multiple { refs: Vec<(i64, i64)> },
}

/// Parse a free-form query such as `"5"`, `"5:10"`, `"5:10-20"` or `"1:1,2:255"`.
pub fn parse(input: &str) -> Result<Query, ParseError> {
    let input = input.trim();

    if input.contains(',') {
        let refs = input
            .split(',')
            .map(|segment| {
                let segment = segment.trim();
                split_pair(segment, ':')
                    .ok_or_else(|| ParseError::MalformedSegment(segment.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(Query::Multiple { refs });
    }

    if input.split(':').nth(1).is_some_and(|verses| verses.contains('-')) {
        return parse_range(input).ok_or(ParseError::InvalidRangeFormat);
    }

    if input.contains(':') {
        let (surah, verse) = split_pair(input, ':').ok_or(ParseError::InvalidVerseFormat)?;
        return Ok(Query::Verse { surah, verse });
    }

    int(input)
        .map(|surah| Query::Surah { surah })
        .ok_or_else(|| ParseError::InvalidSurahFormat(input.to_string()))
}

fn parse_range(input: &str) -> Option<Query> {
    let (surah, verses) = split_exact(input, ':')?;
    let (start, end) = split_pair(verses, '-')?;
    Some(Query::Range {
        surah: int(surah)?,
        start,
        end,
    })
}

/// Split on `sep` into exactly two integers.
fn split_pair(s: &str, sep: char) -> Option<(i64, i64)> {
    let (a, b) = split_exact(s, sep)?;
    Some((int(a)?, int(b)?))
}

/// Split on `sep` into exactly two parts.
fn split_exact(s: &str, sep: char) -> Option<(&str, &str)> {
    let (a, b) = s.split_once(sep)?;
    if b.contains(sep) {
        return None;
    }
    Some((a, b))
}

/// Integers too large for `i64` saturate, so they fail later as out of range
/// instead of as a format error.
fn int(s: &str) -> Option<i64> {
    match s.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

impl FromStr for Query {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Surah { surah } => write!(f, "{surah}"),
            Query::Verse { surah, verse } => write!(f, "{surah}:{verse}"),
            Query::Range { surah, start, end } => write!(f, "{surah}:{start}-{end}"),
            Query::Multiple { refs } => {
                for (i, (surah, verse)) in refs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{surah}:{verse}")?;
                }
                Ok(())
            }
        }
    }
}
