//! quran-query entry point.

use std::io::Write;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use quran_somali::Translation;
use quran_somali_cli::commands::{run_assemble, run_query, run_translations, AssembleArgs, QueryArgs};
use quran_somali_cli::config::resolve_data_dir;
use quran_somali_cli::render::{write_usage, DisplayOptions};

const BIN_NAME: &str = "quran-query";

#[derive(Parser)]
#[command(
    name = "quran-query",
    about = "Query the Qur'an with Somali translation — surahs, verses, ranges, or verse lists",
    version,
    after_help = "Examples:\n  \
        quran-query 1                    # Get entire Surah Al-Fatihah\n  \
        quran-query 2:255                # Get Ayat Al-Kursi (Surah 2, Verse 255)\n  \
        quran-query 18:1-10              # Get first 10 verses of Surah Al-Kahf\n  \
        quran-query \"1:1,2:255,112:1\"    # Get multiple specific verses (use quotes)\n  \
        quran-query 36 -o yaseen.json    # Save Surah Yaseen to file\n  \
        quran-query 67:1-5 --arabic-only # Show only Arabic text\n  \
        quran-query 55 --somali-only     # Show only Somali translation\n  \
        quran-query 1 -t abduh           # Use Mahmud Muhammad Abduh translation"
)]
struct Cli {
    /// Query: surah number, surah:verse, surah:verse-verse, or comma-separated verses.
    #[arg(allow_hyphen_values = true)]
    query: Option<String>,

    /// Save results to a JSON file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Translation to use: jacob (default/classic), abduh (modern), abdu (contemporary).
    #[arg(short, long, default_value = "jacob")]
    translation: Translation,

    /// Show only Arabic text.
    #[arg(long, conflicts_with = "somali_only")]
    arabic_only: bool,

    /// Show only Somali translation.
    #[arg(long)]
    somali_only: bool,

    /// Hide verse numbers.
    #[arg(long)]
    no_verse_numbers: bool,

    /// Directory holding the translation JSON files.
    /// Also reads from QURAN_SOMALI_DIR env var.
    #[arg(short, long, global = true)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported translations and their dataset files.
    Translations,

    /// Build a translation dataset from downloaded upstream edition files.
    Assemble {
        /// Arabic edition JSON (e.g. ara-quransimple.json).
        #[arg(long)]
        arabic: PathBuf,

        /// Somali edition JSON (e.g. som-abdullahhasanja.json).
        #[arg(long)]
        translation_file: PathBuf,

        /// Chapter index JSON (info.json) providing surah names.
        #[arg(long)]
        info: PathBuf,

        /// Which translation the edition file holds.
        #[arg(short, long, default_value = "jacob")]
        translation: Translation,

        /// Output file (defaults to the translation's file in the data directory).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Launch interactive REPL mode.
    Repl {
        /// Translation to load first.
        #[arg(short, long, default_value = "jacob")]
        translation: Translation,
    },

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   quran-query completions bash > ~/.local/share/bash-completion/completions/quran-query
    ///   quran-query completions zsh > ~/.zfunc/_quran-query
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let code = run(cli, &mut std::io::stdout());
    std::process::exit(code);
}

/// Run a parsed command line and return the process exit code.
///
/// Errors are printed to stderr as `ERROR: ...` and map to 1.
fn run<W: Write>(cli: Cli, out: &mut W) -> i32 {
    let result = dispatch(cli, out);
    let _ = out.flush();
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            1
        }
    }
}

fn dispatch<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref());

    match cli.command {
        Some(Commands::Translations) => run_translations(out, &data_dir),

        Some(Commands::Assemble {
            arabic,
            translation_file,
            info,
            translation,
            output,
        }) => {
            let args = AssembleArgs {
                arabic,
                translation_file,
                info,
                translation,
                output,
                data_dir,
            };
            run_assemble(out, &args).map(|_| ())
        }

        Some(Commands::Repl { translation }) => quran_somali_cli::repl::run(data_dir, translation),

        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, BIN_NAME, out);
            Ok(())
        }

        None => {
            let Some(query) = cli.query else {
                write_usage(out, BIN_NAME)?;
                return Ok(());
            };

            let args = QueryArgs {
                query,
                output: cli.output,
                translation: cli.translation,
                data_dir,
                display: DisplayOptions::from_flags(
                    cli.arabic_only,
                    cli.somali_only,
                    cli.no_verse_numbers,
                ),
            };
            run_query(out, &args)
        }
    }
}
