//! Detail overlay component
//!
//! Dims everything underneath and grows the detail panel from the card it
//! was opened from. Keeps drawing during the exit animation, after the
//! route has already gone back home.

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::{layout::HomeLayout, widgets::detail_panel::DetailPanel},
};

const MIN_PANEL_WIDTH: u16 = 4;
const MIN_PANEL_HEIGHT: u16 = 3;

#[derive(Debug, Default)]
pub struct OverlayComponent;

impl OverlayComponent {
    /// Style laid over the page behind the panel at `visibility`
    pub fn backdrop_style(&self, state: &AppState, visibility: f64) -> Option<Style> {
        if visibility <= 0.0 {
            return None;
        }
        let dim = Style::default().add_modifier(Modifier::DIM);
        if visibility < 0.5 {
            return Some(dim);
        }
        Some(
            state
                .config
                .config
                .styles
                .get_or("overlay.backdrop", dim.fg(Color::DarkGray)),
        )
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, layout: &HomeLayout) {
        let Some(presence) = state.overlay.presence() else {
            return;
        };
        let Some(movie) = state
            .movies()
            .and_then(|list| list.get_by_id(presence.movie_id))
        else {
            return;
        };

        let area = frame.area();
        if let Some(style) = self.backdrop_style(state, presence.visibility()) {
            frame.buffer_mut().set_style(area, style);
        }

        let panel = layout
            .panel_rect(presence.origin, presence.expansion())
            .intersection(area);
        if panel.width < MIN_PANEL_WIDTH || panel.height < MIN_PANEL_HEIGHT {
            return;
        }
        let config = &state.config.config;
        frame.render_widget(
            DetailPanel::new(movie, &config.tmdb.image_base_url, &config.styles),
            panel,
        );
    }
}
