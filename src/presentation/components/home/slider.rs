//! Slider component
//!
//! Draws the visible page of cards. While a page transition runs, the
//! outgoing page slides out to the left and the new page slides in from
//! the right.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::{movie::MovieRecord, transition::lerp},
    presentation::{
        layout::{shift_x, HomeLayout},
        widgets::movie_card::MovieCard,
    },
};

#[derive(Debug, Default)]
pub struct SliderComponent;

impl SliderComponent {
    /// Horizontal offsets of the outgoing and current page
    pub fn offsets(&self, state: &AppState, width: u16) -> (Option<i32>, i32) {
        let width = f64::from(width);
        let outgoing = state
            .slider
            .outgoing()
            .map(|page| -(lerp(0.0, width, page.tween.progress()).round() as i32));
        let current = state
            .slider
            .incoming()
            .map_or(0, |tween| lerp(width, 0.0, tween.progress()).round() as i32);
        (outgoing, current)
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, layout: &HomeLayout) {
        let Some(list) = state.movies() else {
            return;
        };
        if list.grid().is_empty() {
            return;
        }

        let (outgoing_dx, current_dx) = self.offsets(state, layout.slider.width);

        if let (Some(page), Some(dx)) = (state.slider.outgoing(), outgoing_dx) {
            let movies = state.slider.paginator().page(list.grid(), page.index);
            self.render_page(state, frame, layout, movies, dx, false);
        }

        let page = state.visible_page();
        if page.is_empty() {
            frame.render_widget(
                Paragraph::new("Nothing else is playing right now").alignment(Alignment::Center),
                layout.slider,
            );
            return;
        }
        self.render_page(state, frame, layout, page, current_dx, true);
    }

    fn render_page(
        &self,
        state: &AppState,
        frame: &mut Frame,
        layout: &HomeLayout,
        movies: &[MovieRecord],
        dx: i32,
        interactive: bool,
    ) {
        let styles = &state.config.config.styles;
        for (slot, (movie, rect)) in movies.iter().zip(&layout.cards).enumerate() {
            let Some(rect) = shift_x(*rect, dx, layout.slider) else {
                continue;
            };

            let mut card = MovieCard::new(movie, styles);
            if interactive {
                card = card.focused(state.slider.focus() == Some(slot));
                if let Some(hover) = state.slider.hover().filter(|hover| hover.id == movie.id) {
                    card = card
                        .emphasis(hover.card.progress())
                        .caption(hover.caption.progress());
                }
            }
            frame.render_widget(card, rect);
        }
    }
}
