pub mod environment;
pub mod terminal;

pub use environment::{CORPUS_ENV_VAR, CORPUS_FILENAME, resolve_corpus_path};
pub use terminal::sanitize_for_terminal;
