use ratatui::layout::{Constraint, Layout, Rect};

/// Screen regions: query box on top, list and preview side by side, status row last
pub struct AppLayout {
    pub input_area: Rect,
    pub list_area: Rect,
    pub preview_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let [input_area, main_area, status_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(3), Constraint::Length(1)])
                .areas(area);
        // Preview gets the smaller share; Arabic lines wrap there
        let [list_area, preview_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(main_area);

        Self { input_area, list_area, preview_area, status_area }
    }
}
