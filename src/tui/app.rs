//! TUI application state and event handling.
//!
//! The `App` owns one [`Session`] for its lifetime and borrows the corpus store.
//! Three views share the list/preview panes and are cycled with Tab:
//!
//! - **Results**: verses from the last query, or every ayah of a loaded surah
//! - **Surahs**: the surah index, fuzzy-filtered by name via `nucleo`
//! - **History**: the session's committed queries
//!
//! Query submission, recitation and history export are reported through transient
//! status messages rather than modal dialogs.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Utc;
use nucleo::{Config, Nucleo};
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{Preview, RenderState, render_ui};
use super::timestamps::format_history_time;
use crate::clipboard::copy_verse;
use crate::corpus::CorpusStore;
use crate::history::DEFAULT_EXPORT_FILENAME;
use crate::models::VerseRef;
use crate::resolver::{QueryResult, Verse};
use crate::session::Session;
use crate::speech::SpeechSink;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Input length cap (characters)
const MAX_INPUT_CHARS: usize = 256;
/// Minimum gap between two accepted Enter presses
const SUBMIT_DEBOUNCE_MS: u64 = 150;

const NO_MATCH_MESSAGE: &str = "No exact matches found. You can try simpler keywords like 'patience', 'charity', or do Surah:2 Ayah:255 style lookup.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Results,
    Surahs,
    History,
}

impl View {
    fn next(self) -> Self {
        match self {
            View::Results => View::Surahs,
            View::Surahs => View::History,
            View::History => View::Results,
        }
    }
}

pub struct App<'c, S: SpeechSink> {
    corpus: &'c CorpusStore,
    session: Session,
    speech: S,
    view: View,
    selected_idx: usize,
    should_quit: bool,
    // Results view
    query_input: String,
    results: Vec<VerseRef>,
    results_title: String,
    // Surahs view
    surah_filter: String,
    nucleo: Nucleo<u32>,
    export_path: PathBuf,
    last_submit_time: Option<Instant>,
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl<'c, S: SpeechSink> App<'c, S> {
    pub fn new(corpus: &'c CorpusStore, speech: S) -> Self {
        let nucleo = Nucleo::new(Config::DEFAULT, Arc::new(|| {}), None, 1);

        let injector = nucleo.injector();
        for surah in corpus.surahs() {
            let label = surah.browse_label();
            injector.push(surah.number, move |_number, cols| {
                cols[0] = label.clone().into();
            });
        }

        Self {
            corpus,
            session: Session::new(),
            speech,
            view: View::Results,
            selected_idx: 0,
            should_quit: false,
            query_input: String::new(),
            results: Vec::new(),
            results_title: "Results".to_string(),
            surah_filter: String::new(),
            nucleo,
            export_path: PathBuf::from(DEFAULT_EXPORT_FILENAME),
            last_submit_time: None,
            status_message: None,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    /// Where Ctrl+E writes the history CSV
    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = path;
        self
    }

    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType) {
        let duration_ms = match message_type {
            MessageType::Success => STATUS_SUCCESS_DURATION_MS,
            MessageType::Error => STATUS_ERROR_DURATION_MS,
        };
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn check_and_clear_expired_status(&mut self) {
        let expired =
            self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();
            self.nucleo.tick(10);

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(100)
            {
                let state = self.render_state();
                terminal.draw(|f| render_ui(f, &state))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Surah numbers matching the current filter, in match order
    fn matched_surahs(&self) -> Vec<u32> {
        let snapshot = self.nucleo.snapshot();
        snapshot.matched_items(..snapshot.matched_item_count()).map(|item| *item.data).collect()
    }

    fn item_count(&self) -> usize {
        match self.view {
            View::Results => self.results.len(),
            View::Surahs => self.nucleo.snapshot().matched_item_count() as usize,
            View::History => self.session.history().len(),
        }
    }

    fn verse(&self, verse: VerseRef) -> Option<Verse<'c>> {
        let surah = self.corpus.surah(verse.surah)?;
        let ayah = surah.ayah(verse.ayah)?;
        Some(Verse { surah, ayah })
    }

    fn selected_verse(&self) -> Option<Verse<'c>> {
        self.results.get(self.selected_idx).and_then(|&v| self.verse(v))
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearInput => self.clear_input(),
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-10),
            Action::PageDown => self.move_selection(10),
            Action::Input(c) => self.push_char(c),
            Action::DeleteChar => self.delete_char(),
            Action::Submit => {
                let accept = self
                    .last_submit_time
                    .is_none_or(|t| t.elapsed() >= Duration::from_millis(SUBMIT_DEBOUNCE_MS));
                if accept {
                    self.last_submit_time = Some(Instant::now());
                    match self.view {
                        View::Surahs => self.load_selected_surah(),
                        View::Results | View::History => self.submit_query(),
                    }
                }
            }
            Action::Recite => self.recite_last(),
            Action::ExportHistory => self.export_history(),
            Action::CopyToClipboard => self.copy_selected(),
            Action::NextView => {
                self.view = self.view.next();
                self.selected_idx = 0;
                self.needs_redraw = true;
            }
            Action::None => {}
        }
    }

    fn active_input(&mut self) -> &mut String {
        match self.view {
            View::Surahs => &mut self.surah_filter,
            View::Results | View::History => &mut self.query_input,
        }
    }

    fn push_char(&mut self, c: char) {
        let input = self.active_input();
        if input.chars().count() < MAX_INPUT_CHARS {
            input.push(c);
            self.input_changed();
        }
    }

    fn delete_char(&mut self) {
        if self.active_input().pop().is_some() {
            self.input_changed();
        }
    }

    fn clear_input(&mut self) {
        if self.active_input().is_empty() {
            self.should_quit = true;
        } else {
            self.active_input().clear();
            self.input_changed();
        }
    }

    fn input_changed(&mut self) {
        if self.view == View::Surahs {
            self.update_surah_pattern();
            self.selected_idx = 0;
        }
        self.needs_redraw = true;
    }

    fn update_surah_pattern(&mut self) {
        self.nucleo.pattern.reparse(
            0,
            &self.surah_filter,
            nucleo::pattern::CaseMatching::Smart,
            nucleo::pattern::Normalization::Smart,
            false,
        );
        self.nucleo.tick(10);
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.item_count();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    fn submit_query(&mut self) {
        let query = self.query_input.clone();
        match self.session.submit(self.corpus, &query) {
            Ok(QueryResult::DirectHit(verse)) => {
                self.show_results(verse.verse_ref().to_string(), vec![verse.verse_ref()]);
            }
            Ok(QueryResult::KeywordHits(verses)) => {
                let refs = verses.iter().map(Verse::verse_ref).collect();
                self.show_results("Found related verses (best-effort)".to_string(), refs);
            }
            Ok(QueryResult::NoMatch) => self.set_status(NO_MATCH_MESSAGE, MessageType::Error),
            Err(e) => self.set_status(e.to_string(), MessageType::Error),
        }
    }

    fn load_selected_surah(&mut self) {
        let Some(&number) = self.matched_surahs().get(self.selected_idx) else {
            self.set_status("✗ No surah selected", MessageType::Error);
            return;
        };
        let Some(surah) = self.corpus.surah(number) else {
            return;
        };

        let refs = surah.ayahs.iter().map(|a| VerseRef::new(number, a.number_in_surah)).collect();
        self.show_results(format!("Surah {}: {}", surah.number, surah.display_name()), refs);
    }

    fn show_results(&mut self, title: String, results: Vec<VerseRef>) {
        self.results_title = title;
        self.results = results;
        self.view = View::Results;
        self.selected_idx = 0;
        self.needs_redraw = true;
    }

    fn recite_last(&mut self) {
        match self.session.recite_last(self.corpus, &mut self.speech) {
            Ok(verse) => self.set_status(format!("✓ Recited {}", verse), MessageType::Success),
            Err(e) => self.set_status(e.to_string(), MessageType::Error),
        }
        // Speech blocks; anything typed meanwhile is already queued, force a fresh frame
        self.needs_redraw = true;
    }

    fn export_history(&mut self) {
        if self.session.history().is_empty() {
            self.set_status("✗ No history to export", MessageType::Error);
            return;
        }

        match self.session.export_history(&self.export_path) {
            Ok(()) => {
                let text = format!(
                    "✓ Exported {} entries to {}",
                    self.session.history().len(),
                    self.export_path.display()
                );
                self.set_status(text, MessageType::Success);
            }
            Err(e) => self.set_status(format!("✗ Export failed: {:#}", e), MessageType::Error),
        }
    }

    fn copy_selected(&mut self) {
        if self.view != View::Results {
            self.set_status("✗ Select a verse in the Results view to copy", MessageType::Error);
            return;
        }
        let Some(verse) = self.selected_verse() else {
            self.set_status("✗ No verse to copy", MessageType::Error);
            return;
        };

        match copy_verse(&verse) {
            Ok(()) => self.set_status("✓ Copied to clipboard", MessageType::Success),
            Err(e) => self.set_status(format!("✗ Clipboard error: {}", e), MessageType::Error),
        }
    }

    fn list_items(&self) -> Vec<String> {
        match self.view {
            View::Results => self
                .results
                .iter()
                .filter_map(|&v| self.verse(v))
                .map(|verse| {
                    let snippet: String = verse
                        .ayah
                        .text_en
                        .as_deref()
                        .or(verse.ayah.text_ar.as_deref())
                        .unwrap_or("")
                        .chars()
                        .take(50)
                        .collect();
                    format!("{} | {}", verse.verse_ref(), snippet)
                })
                .collect(),
            View::Surahs => self
                .matched_surahs()
                .into_iter()
                .filter_map(|n| self.corpus.surah(n))
                .map(|s| s.browse_label())
                .collect(),
            View::History => {
                let now = Utc::now();
                self.session
                    .history()
                    .all()
                    .iter()
                    .map(|e| {
                        format!("{} | {} | {}", format_history_time(&e.time, &now), e.query, e.result)
                    })
                    .collect()
            }
        }
    }

    fn preview(&self) -> Preview<'_> {
        match self.view {
            View::Results => match self.selected_verse() {
                Some(verse) => Preview::Verse(verse),
                None => Preview::Empty("No verse selected"),
            },
            View::Surahs => match self
                .matched_surahs()
                .get(self.selected_idx)
                .and_then(|&n| self.corpus.surah(n))
            {
                Some(surah) => Preview::Surah(surah),
                None => Preview::Empty("No surah matches the filter"),
            },
            View::History => match self.session.history().all().get(self.selected_idx) {
                Some(entry) => Preview::History(entry),
                None => Preview::Empty("No history yet. Perform a lookup first."),
            },
        }
    }

    fn render_state(&self) -> RenderState<'_> {
        let (input, list_title) = match self.view {
            View::Results => (self.query_input.as_str(), self.results_title.as_str()),
            View::Surahs => (self.surah_filter.as_str(), "Surahs"),
            View::History => (self.query_input.as_str(), "History"),
        };

        RenderState {
            view: self.view,
            input,
            list_title,
            items: self.list_items(),
            selected_idx: self.selected_idx,
            preview: self.preview(),
            history_len: self.session.history().len(),
            status_message: self.status_message.as_ref(),
        }
    }
}
