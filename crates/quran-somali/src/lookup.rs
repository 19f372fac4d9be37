//! Verse lookup over a loaded dataset.

use serde::Serialize;

use crate::query::Query;
use crate::types::{
    LookupError, Quran, QueryResult, Surah, VerseRange, VerseRef, SURAH_COUNT,
};

/// Outcome of a batch lookup: the verses found and the references that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchLookup<'a> {
    pub found: Vec<VerseRef<'a>>,
    #[serde(skip)]
    pub errors: Vec<((i64, i64), LookupError)>,
}

/// Get an entire surah by number (1-114).
///
/// Records are normally stored in order, so the positional slot is tried
/// first. A dataset with gaps falls back to matching `surah_number`.
pub fn surah(quran: &Quran, number: i64) -> Result<&Surah, LookupError> {
    if !(1..=SURAH_COUNT as i64).contains(&number) {
        return Err(LookupError::SurahOutOfRange(number));
    }
    match quran.surahs.get(number as usize - 1) {
        Some(s) if i64::from(s.surah_number) == number => Ok(s),
        _ => quran
            .surahs
            .iter()
            .find(|s| i64::from(s.surah_number) == number)
            .ok_or(LookupError::SurahOutOfRange(number)),
    }
}

/// Get a single verse.
pub fn verse(quran: &Quran, surah_number: i64, verse_number: i64) -> Result<VerseRef<'_>, LookupError> {
    let s = surah(quran, surah_number)?;
    check_verse(s, surah_number, verse_number)?;

    Ok(VerseRef {
        surah_number: s.surah_number,
        surah_name: &s.surah_name,
        verse: &s.verses[verse_number as usize - 1],
    })
}

/// Get an inclusive range of verses from one surah.
pub fn range(
    quran: &Quran,
    surah_number: i64,
    start: i64,
    end: i64,
) -> Result<VerseRange<'_>, LookupError> {
    let s = surah(quran, surah_number)?;
    check_verse(s, surah_number, start)?;
    check_verse(s, surah_number, end)?;
    if start > end {
        return Err(LookupError::InvertedRange { start, end });
    }

    Ok(VerseRange {
        surah_number: s.surah_number,
        surah_name: &s.surah_name,
        verses: &s.verses[start as usize - 1..end as usize],
    })
}

/// Get several verses, silently dropping references that do not resolve.
pub fn multiple<'a>(quran: &'a Quran, refs: &[(i64, i64)]) -> Vec<VerseRef<'a>> {
    multiple_with_errors(quran, refs).found
}

/// Get several verses, keeping the error for every reference that failed.
///
/// Input order is preserved in both lists.
pub fn multiple_with_errors<'a>(quran: &'a Quran, refs: &[(i64, i64)]) -> BatchLookup<'a> {
    let mut batch = BatchLookup::default();
    for &(s, v) in refs {
        match verse(quran, s, v) {
            Ok(found) => batch.found.push(found),
            Err(e) => batch.errors.push(((s, v), e)),
        }
    }
    batch
}

/// Resolve a parsed query against the dataset.
pub fn execute<'a>(quran: &'a Quran, query: &Query) -> Result<QueryResult<'a>, LookupError> {
    match query {
        Query::Surah { surah: n } => surah(quran, *n).map(QueryResult::Surah),
        Query::Verse { surah, verse: v } => verse(quran, *surah, *v).map(QueryResult::Verse),
        Query::Range { surah, start, end } => {
            range(quran, *surah, *start, *end).map(QueryResult::Range)
        }
        Query::Multiple { refs } => Ok(QueryResult::Multiple(multiple(quran, refs))),
    }
}

fn check_verse(s: &Surah, surah_number: i64, verse_number: i64) -> Result<(), LookupError> {
    let max = s.verses.len();
    if !(1..=max as i64).contains(&verse_number) {
        return Err(LookupError::VerseOutOfRange {
            surah: surah_number,
            verse: verse_number,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Verse;

    fn small_quran() -> Quran {
        let surahs = (1..=SURAH_COUNT as u32)
            .map(|n| Surah {
                surah_number: n,
                surah_name: format!("Surah {n}"),
                verses: (1..=3)
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

    #[test]
    fn test_surah_bounds() {
        let q = small_quran();
        assert_eq!(surah(&q, 1).unwrap().surah_number, 1);
        assert_eq!(surah(&q, 114).unwrap().surah_number, 114);
        assert_eq!(surah(&q, 0), Err(LookupError::SurahOutOfRange(0)));
        assert_eq!(surah(&q, 115), Err(LookupError::SurahOutOfRange(115)));
        assert_eq!(surah(&q, -1), Err(LookupError::SurahOutOfRange(-1)));
        assert_eq!(surah(&q, i64::MAX), Err(LookupError::SurahOutOfRange(i64::MAX)));
        assert!(verse(&q, 1, i64::MAX).is_err());
    }

    #[test]
    fn test_surah_missing_from_short_dataset() {
        let mut q = small_quran();
        q.surahs.truncate(10);
        assert_eq!(surah(&q, 11), Err(LookupError::SurahOutOfRange(11)));
    }

    #[test]
    fn test_surah_gap_does_not_shift_numbers() {
        let mut q = small_quran();
        q.surahs.remove(1);
        assert_eq!(surah(&q, 2), Err(LookupError::SurahOutOfRange(2)));
        assert_eq!(surah(&q, 3).unwrap().surah_number, 3);
        assert_eq!(verse(&q, 114, 1).unwrap().verse.arabic_text, "ar 114:1");
    }

    #[test]
    fn test_verse_out_of_range() {
        let q = small_quran();
        assert_eq!(
            verse(&q, 1, 4),
            Err(LookupError::VerseOutOfRange { surah: 1, verse: 4, max: 3 })
        );
        assert!(matches!(verse(&q, 1, 0), Err(LookupError::VerseOutOfRange { .. })));
        assert_eq!(verse(&q, 200, 1), Err(LookupError::SurahOutOfRange(200)));
    }

    #[test]
    fn test_range_checks_start_before_end() {
        let q = small_quran();
        assert_eq!(
            range(&q, 1, 9, 1),
            Err(LookupError::VerseOutOfRange { surah: 1, verse: 9, max: 3 })
        );
        assert_eq!(
            range(&q, 1, 3, 2),
            Err(LookupError::InvertedRange { start: 3, end: 2 })
        );
    }

    #[test]
    fn test_single_verse_range() {
        let q = small_quran();
        let r = range(&q, 5, 2, 2).unwrap();
        assert_eq!(r.verses.len(), 1);
        assert_eq!(r.verses[0].verse_number, 2);
    }

    #[test]
    fn test_batch_errors_keep_order() {
        let q = small_quran();
        let batch = multiple_with_errors(&q, &[(0, 1), (1, 1), (1, 9), (2, 2)]);
        assert_eq!(batch.found.len(), 2);
        assert_eq!(batch.found[0].surah_number, 1);
        assert_eq!(batch.found[1].surah_number, 2);
        assert_eq!(batch.errors.len(), 2);
        assert_eq!(batch.errors[0].0, (0, 1));
        assert_eq!(batch.errors[1].0, (1, 9));
    }

    #[test]
    fn test_execute_dispatch() {
        let q = small_quran();
        let result = execute(&q, &Query::Range { surah: 3, start: 1, end: 3 }).unwrap();
        assert_eq!(result.verse_count(), 3);

        let result = execute(&q, &Query::Multiple { refs: vec![(999, 1)] }).unwrap();
        assert!(result.is_empty());

        assert!(execute(&q, &Query::Surah { surah: 0 }).is_err());
    }
}
