use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage, View};
use super::layout::AppLayout;
use crate::models::{HistoryEntry, Surah};
use crate::resolver::Verse;
use crate::utils::sanitize_for_terminal;

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const EMERALD: Color = Color::Rgb(16, 185, 129);
const RED: Color = Color::Rgb(239, 68, 68);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// Content of the preview pane
#[derive(Debug, Clone, Copy)]
pub enum Preview<'a> {
    Verse(Verse<'a>),
    Surah(&'a Surah),
    History(&'a HistoryEntry),
    Empty(&'a str),
}

/// Everything the renderer needs for one frame
pub struct RenderState<'a> {
    pub view: View,
    pub input: &'a str,
    pub list_title: &'a str,
    pub items: Vec<String>,
    pub selected_idx: usize,
    pub preview: Preview<'a>,
    pub history_len: usize,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState<'_>) {
    let layout = AppLayout::new(frame.area());

    render_input(frame, layout.input_area, state.view, state.input);
    render_list(frame, layout.list_area, state.list_title, &state.items, state.selected_idx);
    render_preview(frame, layout.preview_area, state.preview);
    render_status_bar(frame, layout.status_area, state);
}

fn render_input(frame: &mut Frame, area: Rect, view: View, input: &str) {
    let title = match view {
        View::Surahs => " Browse Surah (type to filter) ",
        View::Results | View::History => {
            " Ask your question (English/Urdu) or search by Surah/Ayah "
        }
    };

    let content = if input.is_empty() && view != View::Surahs {
        Line::from(Span::styled(
            "Example: What does the Quran say about patience?  OR  Surah:2 Ayah:255",
            Style::default().fg(MUTED),
        ))
    } else {
        Line::from(input.to_string())
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(EMERALD))
            .title(title),
    );
    frame.render_widget(paragraph, area);
}

fn render_list(frame: &mut Frame, area: Rect, title: &str, items: &[String], selected_idx: usize) {
    let list_items: Vec<ListItem> = items
        .iter()
        .map(|item| ListItem::new(sanitize_for_terminal(item).into_owned()))
        .collect();

    let list = List::new(list_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(format!(" {} ", title)),
        )
        .style(Style::default().fg(MUTED))
        .highlight_style(Style::default().fg(BRIGHT).bg(EMERALD).add_modifier(Modifier::BOLD));

    // Stateful rendering keeps the selection scrolled into view
    let mut list_state =
        ListState::default().with_selected((!items.is_empty()).then_some(selected_idx));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn labelled(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(MUTED)),
        Span::raw(sanitize_for_terminal(value).into_owned()),
    ])
}

fn preview_text(preview: Preview<'_>) -> Text<'static> {
    match preview {
        Preview::Verse(verse) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    format!("{} - {}", verse.verse_ref(), sanitize_for_terminal(verse.surah.display_name())),
                    Style::default().fg(EMERALD).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
            ];
            if let Some(text) = &verse.ayah.text_ar {
                lines.push(labelled("Arabic", text));
                lines.push(Line::from(""));
            }
            if let Some(text) = &verse.ayah.text_en {
                lines.push(labelled("English", text));
                lines.push(Line::from(""));
            }
            if let Some(text) = &verse.ayah.text_ur {
                lines.push(labelled("Urdu", text));
            }
            Text::from(lines)
        }
        Preview::Surah(surah) => Text::from(vec![
            labelled("Surah", &surah.number.to_string()),
            labelled("English name", surah.name_en.as_deref().unwrap_or("-")),
            labelled("Arabic name", &surah.name_ar),
            labelled("Ayahs", &surah.ayahs.len().to_string()),
            Line::from(""),
            Line::from(Span::styled("Enter: load surah", Style::default().fg(MUTED))),
        ]),
        Preview::History(entry) => Text::from(vec![
            labelled("Time", &entry.time.to_rfc3339()),
            labelled("Query", &entry.query),
            labelled("Result", &entry.result),
        ]),
        Preview::Empty(message) => Text::from(message.to_string()),
    }
}

fn render_preview(frame: &mut Frame, area: Rect, preview: Preview<'_>) {
    let paragraph = Paragraph::new(preview_text(preview))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Preview "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState<'_>) {
    let bar = Style::default().bg(BAR_BG);

    let (status_text, style) = if let Some(message) = state.status_message {
        let fg = match message.message_type {
            MessageType::Success => EMERALD,
            MessageType::Error => RED,
        };
        (format!(" {} ", message.text), bar.fg(fg))
    } else {
        let mut parts = vec![];

        parts.push(match state.view {
            View::Results => "[RESULTS]".to_string(),
            View::Surahs => "[SURAHS]".to_string(),
            View::History => "[HISTORY]".to_string(),
        });

        if state.items.is_empty() {
            parts.push("no entries".to_string());
        } else {
            parts.push(format!("{}/{}", state.selected_idx + 1, state.items.len()));
        }
        parts.push(format!("history: {}", state.history_len));

        parts.push(match state.view {
            View::Surahs => "Enter: load".to_string(),
            View::Results | View::History => "Enter: search".to_string(),
        });
        parts.push("Tab: view".to_string());
        parts.push("Ctrl+R: recite".to_string());
        parts.push("Ctrl+E: export".to_string());
        parts.push("Ctrl+C: quit".to_string());

        (format!(" {} ", parts.join(" | ")), bar.fg(BRIGHT))
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}
