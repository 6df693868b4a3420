//! Interactive terminal interface
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;
mod timestamps;

use std::path::PathBuf;

use anyhow::Result;
pub use app::App;
use terminal::TerminalManager;
use tracing::info;

use crate::corpus::CorpusStore;
use crate::speech::SpeechSink;

/// Run the TUI until the user quits.
///
/// One session is created here and dropped on return, taking its history with it.
pub fn run_interactive<S: SpeechSink>(
    corpus: &CorpusStore,
    speech: S,
    export_path: PathBuf,
) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(corpus, speech).with_export_path(export_path);

    info!("interactive session started");
    let res = app.run(manager.terminal_mut());

    // Restore first so a loop error prints on the normal screen
    manager.restore()?;
    info!("interactive session ended");
    res
}
