//! quran-query: command-line access to the Somali Qur'an translations.

pub mod commands;
pub mod config;
pub mod render;
pub mod repl;
pub mod session;

pub use config::resolve_data_dir;
pub use render::DisplayOptions;
pub use session::QuranSession;
