//! Status bar component

use ratatui::prelude::*;

use crate::{
    core::state::{AppState, HomePhase},
    presentation::widgets::status_bar::StatusBarWidget,
};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// 1-based current page and page count, once movies are loaded
    pub fn page_position(&self, state: &AppState) -> Option<(usize, usize)> {
        let list = state.movies()?;
        let pages = state
            .slider
            .paginator()
            .max_page_index(list.len())
            .map_or(1, |max| max + 1);
        Some((state.slider.index() + 1, pages))
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let mut widget = StatusBarWidget::new(state.system.status_message.as_deref(), styles)
            .error(state.phase() == HomePhase::Failed);
        if let Some((current, total)) = self.page_position(state) {
            widget = widget.page(current, total);
        }
        frame.render_widget(widget, area);
    }
}
