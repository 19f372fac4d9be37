//! Interactive REPL for querying a loaded translation.
//!
//! Launch with `quran-query repl`. Type a query (`2:255`, `18:1-10`, ...)
//! to print it, or `/help` for commands. Tab completes commands and
//! translation names.

use std::path::PathBuf;

use rustyline::completion::{Completer, Pair};
use rustyline::config::CompletionType;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{
    Cmd, ConditionalEventHandler, Config, Editor, Event, EventContext, EventHandler, Helper,
    KeyEvent, RepeatCount,
};

use quran_somali::{parse, Query, QuranWriter, Translation};

use crate::render::{write_result, DisplayOptions};
use crate::session::QuranSession;

/// Available REPL commands.
const COMMANDS: &[(&str, &str)] = &[
    ("/load", "Switch translation (jacob, abduh, abdu)"),
    ("/translations", "List available translations"),
    ("/save", "Save the last result to a JSON file"),
    ("/arabic", "Toggle Arabic text"),
    ("/somali", "Toggle Somali translation"),
    ("/numbers", "Toggle verse numbers"),
    ("/stats", "Show dataset statistics"),
    ("/clear", "Clear the screen"),
    ("/help", "Show available commands"),
    ("/exit", "Quit the REPL"),
];

/// REPL helper for tab completion.
#[derive(Default)]
struct QuranHelper;

impl Completer for QuranHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];

        if input.starts_with('/') && !input.contains(' ') {
            let matches: Vec<Pair> = COMMANDS
                .iter()
                .filter(|(cmd, _)| cmd.starts_with(input))
                .map(|(cmd, desc)| Pair {
                    display: format!("{cmd:<16} {desc}"),
                    replacement: format!("{cmd} "),
                })
                .collect();
            return Ok((0, matches));
        }

        if let Some(args) = input.strip_prefix("/load ") {
            let prefix_start = input.len() - args.len();
            let matches: Vec<Pair> = Translation::ALL
                .iter()
                .filter(|t| t.id().starts_with(args.trim()))
                .map(|t| Pair {
                    display: format!("{:<8} {}", t.id(), t.display_name()),
                    replacement: t.id().to_string(),
                })
                .collect();
            return Ok((prefix_start, matches));
        }

        Ok((pos, Vec::new()))
    }
}

impl Hinter for QuranHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() || line.is_empty() {
            return None;
        }
        if line.starts_with('/') && !line.contains(' ') {
            for (cmd, _) in COMMANDS {
                if cmd.starts_with(line) && *cmd != line {
                    return Some(cmd[line.len()..].to_string());
                }
            }
        }
        None
    }
}

impl Highlighter for QuranHelper {}
impl Validator for QuranHelper {}
impl Helper for QuranHelper {}

struct TabCompleteOrAcceptHint;

impl ConditionalEventHandler for TabCompleteOrAcceptHint {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        ctx: &EventContext<'_>,
    ) -> Option<Cmd> {
        if ctx.has_hint() {
            Some(Cmd::CompleteHint)
        } else {
            Some(Cmd::Complete)
        }
    }
}

/// Session state.
struct ReplState {
    data_dir: PathBuf,
    session: Option<QuranSession>,
    opts: DisplayOptions,
    last_query: Option<Query>,
}

/// Run the interactive REPL.
pub fn run(data_dir: PathBuf, translation: Translation) -> anyhow::Result<()> {
    eprintln!();
    eprintln!(
        "  \x1b[32m\u{25c9}\x1b[0m \x1b[1mquran-query v{}\x1b[0m \x1b[90m\u{2014} Somali Qur'an\x1b[0m",
        env!("CARGO_PKG_VERSION")
    );
    eprintln!();
    eprintln!(
        "    Type a query like \x1b[36m2:255\x1b[0m, \x1b[36m/\x1b[0m to browse commands, \x1b[90m/exit\x1b[0m to quit."
    );
    eprintln!();

    let config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .completion_type(CompletionType::List)
        .completion_prompt_limit(20)
        .build();

    let mut rl: Editor<QuranHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    rl.set_helper(Some(QuranHelper));
    rl.bind_sequence(
        KeyEvent::from('\t'),
        EventHandler::Conditional(Box::new(TabCompleteOrAcceptHint)),
    );

    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    let hist_path = PathBuf::from(&home).join(".quran_query_history");
    if hist_path.exists() {
        let _ = rl.load_history(&hist_path);
    }

    let mut state = ReplState {
        data_dir,
        session: None,
        opts: DisplayOptions::default(),
        last_query: None,
    };
    cmd_load(translation.id(), &mut state);

    let prompt = " \x1b[36mquran>\x1b[0m ";

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let Some(input) = line.strip_prefix('/') else {
                    cmd_query(line, &mut state);
                    continue;
                };
                if input.is_empty() {
                    cmd_help();
                    continue;
                }

                let mut parts = input.splitn(2, ' ');
                let cmd = parts.next().unwrap_or("");
                let args = parts.next().unwrap_or("").trim();

                match cmd {
                    "exit" | "quit" => {
                        eprintln!("  \x1b[90m\u{2728}\x1b[0m Nabad gelyo!");
                        break;
                    }
                    "help" | "h" | "?" => cmd_help(),
                    "clear" | "cls" => eprint!("\x1b[2J\x1b[H"),
                    "translations" => cmd_translations(&state),
                    "load" => cmd_load(args, &mut state),
                    "save" => cmd_save(args, &state),
                    "arabic" => {
                        state.opts.show_arabic = !state.opts.show_arabic;
                        eprintln!("  Arabic text: {}", on_off(state.opts.show_arabic));
                    }
                    "somali" => {
                        state.opts.show_translation = !state.opts.show_translation;
                        eprintln!("  Somali translation: {}", on_off(state.opts.show_translation));
                    }
                    "numbers" => {
                        state.opts.show_verse_numbers = !state.opts.show_verse_numbers;
                        eprintln!("  Verse numbers: {}", on_off(state.opts.show_verse_numbers));
                    }
                    "stats" => cmd_stats(&state),
                    _ => {
                        eprintln!("  Unknown command '/{cmd}'. Type /help for commands.");
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("  \x1b[90m(Ctrl+C)\x1b[0m Type \x1b[1m/exit\x1b[0m to quit.");
            }
            Err(ReadlineError::Eof) => {
                eprintln!("  \x1b[90m\u{2728}\x1b[0m Nabad gelyo!");
                break;
            }
            Err(err) => {
                eprintln!("  Error: {err}");
                break;
            }
        }
    }

    let _ = std::fs::create_dir_all(hist_path.parent().unwrap_or(std::path::Path::new(".")));
    let _ = rl.save_history(&hist_path);

    Ok(())
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

fn cmd_help() {
    eprintln!();
    eprintln!("  Queries:");
    eprintln!();
    eprintln!("    {:<18} {}", "36", "Whole surah");
    eprintln!("    {:<18} {}", "2:255", "Single verse");
    eprintln!("    {:<18} {}", "18:1-10", "Verse range");
    eprintln!("    {:<18} {}", "1:1,2:255", "Several verses");
    eprintln!();
    eprintln!("  Commands:");
    eprintln!();
    for (cmd, desc) in COMMANDS {
        eprintln!("    {cmd:<18} {desc}");
    }
    eprintln!();
}

fn cmd_translations(state: &ReplState) {
    let current = state.session.as_ref().map(QuranSession::translation);
    eprintln!();
    for t in Translation::ALL {
        let marker = if Some(t) == current { "*" } else { " " };
        eprintln!("  {marker} {:<8} {}", t.id(), t.display_name());
    }
    eprintln!();
}

fn cmd_load(args: &str, state: &mut ReplState) {
    if args.is_empty() {
        eprintln!("  Usage: /load <jacob|abduh|abdu>");
        return;
    }
    let translation = match args.parse::<Translation>() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("  {e}");
            return;
        }
    };

    match QuranSession::open(&state.data_dir, translation) {
        Ok(session) => {
            let quran = session.quran();
            eprintln!(
                "  Loaded: {} ({} surahs, {} verses)",
                translation.display_name(),
                quran.count(),
                quran.verse_count()
            );
            state.session = Some(session);
            state.last_query = None;
        }
        Err(e) => {
            eprintln!("  Failed to load: {e}");
        }
    }
}

fn cmd_query(line: &str, state: &mut ReplState) {
    let Some(session) = &state.session else {
        eprintln!("  No translation loaded. Use /load <jacob|abduh|abdu>.");
        return;
    };

    let query = match parse(line) {
        Ok(q) => q,
        Err(e) => {
            eprintln!("  ERROR: {e}");
            return;
        }
    };

    match session.execute(&query) {
        Ok(result) if result.is_empty() => eprintln!("  No verses found."),
        Ok(result) => {
            let mut out = std::io::stdout().lock();
            if let Err(e) = write_result(&mut out, &result, state.opts) {
                eprintln!("  Error: {e}");
            }
            state.last_query = Some(query);
        }
        Err(e) => eprintln!("  ERROR: {e}"),
    }
}

fn cmd_save(args: &str, state: &ReplState) {
    if args.is_empty() {
        eprintln!("  Usage: /save <file.json>");
        return;
    }
    let (Some(session), Some(query)) = (&state.session, &state.last_query) else {
        eprintln!("  Nothing to save yet. Run a query first.");
        return;
    };

    let path = PathBuf::from(args.split_whitespace().next().unwrap_or(args));
    let result = match session.execute(query) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("  ERROR: {e}");
            return;
        }
    };
    match QuranWriter::write_json_to_file(&result, &path) {
        Ok(()) => eprintln!("  \u{2713} Saved {query} to: {}", path.display()),
        Err(e) => eprintln!("  Failed to save: {e}"),
    }
}

fn cmd_stats(state: &ReplState) {
    let Some(session) = &state.session else {
        eprintln!("  No translation loaded.");
        return;
    };
    let quran = session.quran();
    eprintln!();
    eprintln!("  Translation: {}", session.translation().display_name());
    eprintln!("    Data dir:  {}", state.data_dir.display());
    eprintln!("    Surahs:    {}", quran.count());
    eprintln!("    Verses:    {}", quran.verse_count());
    eprintln!();
}
