//! Plain-text rendering of query results and the usage banner.

use std::io::{self, Write};

use quran_somali::{QueryResult, Surah, Translation, Verse, VerseRange, VerseRef};

const WIDTH: usize = 80;

/// Which parts of a verse to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_arabic: bool,
    pub show_translation: bool,
    pub show_verse_numbers: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_arabic: true,
            show_translation: true,
            show_verse_numbers: true,
        }
    }
}

impl DisplayOptions {
    pub fn from_flags(arabic_only: bool, somali_only: bool, no_verse_numbers: bool) -> Self {
        Self {
            show_arabic: !somali_only,
            show_translation: !arabic_only,
            show_verse_numbers: !no_verse_numbers,
        }
    }
}

fn rule(c: char) -> String {
    std::iter::repeat(c).take(WIDTH).collect()
}

fn write_texts<W: Write>(w: &mut W, verse: &Verse, opts: DisplayOptions) -> io::Result<()> {
    if opts.show_arabic {
        writeln!(w, "Arabic:  {}", verse.arabic_text)?;
    }
    if opts.show_translation {
        writeln!(w, "Somali:  {}", verse.translation_text)?;
    }
    Ok(())
}

/// Print a whole surah.
pub fn write_surah<W: Write>(w: &mut W, surah: &Surah, opts: DisplayOptions) -> io::Result<()> {
    writeln!(w, "\n{}", rule('='))?;
    writeln!(w, "SURAH {}: {}", surah.surah_number, surah.surah_name)?;
    writeln!(w, "Total Verses: {}", surah.verses.len())?;
    writeln!(w, "{}", rule('='))?;

    for verse in &surah.verses {
        writeln!(w)?;
        if opts.show_verse_numbers {
            writeln!(w, "[Verse {}]", verse.verse_number)?;
        }
        write_texts(w, verse, opts)?;
        writeln!(w, "{}", rule('-'))?;
    }
    Ok(())
}

/// Print a single verse.
pub fn write_verse<W: Write>(w: &mut W, found: &VerseRef<'_>, opts: DisplayOptions) -> io::Result<()> {
    writeln!(w, "\n{}", rule('='))?;
    writeln!(w, "SURAH {}: {}", found.surah_number, found.surah_name)?;
    writeln!(w, "Verse {}", found.verse.verse_number)?;
    writeln!(w, "{}", rule('='))?;
    writeln!(w)?;
    write_texts(w, found.verse, opts)?;
    writeln!(w, "{}\n", rule('='))
}

/// Print a verse range.
pub fn write_range<W: Write>(w: &mut W, range: &VerseRange<'_>, opts: DisplayOptions) -> io::Result<()> {
    writeln!(w, "\n{}", rule('='))?;
    writeln!(w, "SURAH {}: {}", range.surah_number, range.surah_name)?;
    match range.verses {
        [only] => writeln!(w, "Verse {}", only.verse_number)?,
        [first, .., last] => writeln!(w, "Verses {}-{}", first.verse_number, last.verse_number)?,
        [] => {}
    }
    writeln!(w, "{}", rule('='))?;

    for verse in range.verses {
        writeln!(w)?;
        if opts.show_verse_numbers {
            writeln!(w, "[Verse {}]", verse.verse_number)?;
        }
        write_texts(w, verse, opts)?;
        writeln!(w, "{}", rule('-'))?;
    }
    writeln!(w)
}

/// Print verses that may come from different surahs.
pub fn write_multiple<W: Write>(w: &mut W, refs: &[VerseRef<'_>], opts: DisplayOptions) -> io::Result<()> {
    writeln!(w, "\n{}", rule('='))?;
    writeln!(w, "MULTIPLE VERSES ({} total)", refs.len())?;
    writeln!(w, "{}", rule('='))?;

    for found in refs {
        writeln!(w)?;
        writeln!(
            w,
            "Surah {}: {} - Verse {}",
            found.surah_number, found.surah_name, found.verse.verse_number
        )?;
        write_texts(w, found.verse, opts)?;
        writeln!(w, "{}", rule('-'))?;
    }
    writeln!(w)
}

/// Print any query result.
pub fn write_result<W: Write>(w: &mut W, result: &QueryResult<'_>, opts: DisplayOptions) -> io::Result<()> {
    match result {
        QueryResult::Surah(s) => write_surah(w, s, opts),
        QueryResult::Verse(v) => write_verse(w, v, opts),
        QueryResult::Range(r) => write_range(w, r, opts),
        QueryResult::Multiple(refs) => write_multiple(w, refs, opts),
    }
}

/// Banner shown when the tool is run without arguments.
pub fn write_usage<W: Write>(w: &mut W, bin: &str) -> io::Result<()> {
    writeln!(w, "Qur'an Somali Translation Query Tool")?;
    writeln!(w, "{}", "=".repeat(60))?;
    writeln!(w, "\nAvailable Translations:")?;
    for t in Translation::ALL {
        let marker = if t.is_default() { " [DEFAULT]" } else { "" };
        writeln!(w, "  {:<6} - {}{marker}", t.id(), t.display_name())?;
    }
    writeln!(w, "\nUsage examples:")?;
    for (args, note) in EXAMPLES {
        let cmd = format!("{bin} {args}");
        writeln!(w, "  {cmd:<40} # {note}")?;
    }
    writeln!(w, "\nFor more options, use: {bin} --help\n")
}

const EXAMPLES: &[(&str, &str)] = &[
    ("1", "Get Surah Al-Fatihah"),
    ("2:255", "Get Ayat Al-Kursi"),
    ("18:1-10", "Get verses 1-10 of Surah 18"),
    ("\"1:1,2:255,112:1\"", "Multiple verses (use quotes)"),
    ("36 -o yaseen.json", "Save to file"),
    ("1 -t abduh", "Use different translation"),
];
