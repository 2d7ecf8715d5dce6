//! Screen geometry shared by rendering and mouse hit testing

use ratatui::prelude::*;

use crate::core::state::{AppState, HomePhase};
use crate::domain::{transition::lerp, ui::HitTarget};

const MAX_COLUMNS: usize = 3;

/// Rectangles of the home page for one terminal size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeLayout {
    pub banner: Rect,
    pub slider: Rect,
    /// One rect per slot on a page, row-major
    pub cards: Vec<Rect>,
    pub status_bar: Rect,
    /// Final size of the detail panel
    pub modal: Rect,
}

impl HomeLayout {
    pub fn new(area: Rect, page_size: usize) -> Self {
        let [main, status_bar] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let [banner, slider] =
            Layout::vertical([Constraint::Percentage(40), Constraint::Min(0)]).areas(main);

        Self {
            banner,
            slider,
            cards: card_grid(slider, page_size),
            status_bar,
            modal: centered(area, 70, 70),
        }
    }

    /// Where the detail panel starts growing from
    pub fn origin_rect(&self, slot: Option<usize>) -> Rect {
        slot.and_then(|slot| self.cards.get(slot).copied())
            .unwrap_or_else(|| centered(self.modal, 10, 10))
    }

    /// Detail panel rect at `expansion` in `[0, 1]` between its origin and the modal
    pub fn panel_rect(&self, origin: Option<usize>, expansion: f64) -> Rect {
        let from = self.origin_rect(origin);
        let to = self.modal;
        let interpolate = |a: u16, b: u16| lerp(f64::from(a), f64::from(b), expansion).round() as u16;
        Rect::new(
            interpolate(from.x, to.x),
            interpolate(from.y, to.y),
            interpolate(from.width, to.width),
            interpolate(from.height, to.height),
        )
    }

    /// Resolves a mouse position to what the user pointed at
    pub fn hit_test(&self, state: &AppState, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        match state.phase() {
            HomePhase::ReadyOverlayOpen => {
                if self.modal.contains(position) {
                    Some(HitTarget::DetailPanel)
                } else {
                    Some(HitTarget::Backdrop)
                }
            }
            // The exit animation still covers the page
            HomePhase::ReadyNoOverlay if state.overlay.is_mounted() => None,
            HomePhase::ReadyNoOverlay => {
                if self.banner.contains(position) {
                    return Some(HitTarget::Banner);
                }
                state
                    .visible_page()
                    .iter()
                    .zip(&self.cards)
                    .find(|(_, rect)| rect.contains(position))
                    .map(|(movie, _)| HitTarget::Card(movie.id))
            }
            HomePhase::Loading | HomePhase::Failed => None,
        }
    }
}

fn card_grid(area: Rect, page_size: usize) -> Vec<Rect> {
    if page_size == 0 {
        return Vec::new();
    }
    let columns = page_size.min(MAX_COLUMNS);
    let rows = page_size.div_ceil(columns);

    let row_rects = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(area);
    row_rects
        .iter()
        .flat_map(|row| {
            Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row)
                .to_vec()
        })
        .take(page_size)
        .collect()
}

/// A rect of `percent_x` by `percent_y` centred in `area`
pub fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    center
}

/// Moves `rect` horizontally by `dx` and clips it to `bounds`
pub fn shift_x(rect: Rect, dx: i32, bounds: Rect) -> Option<Rect> {
    let left = i32::from(rect.x) + dx;
    let right = left + i32::from(rect.width);
    let clipped_left = left.max(i32::from(bounds.x));
    let clipped_right = right.min(i32::from(bounds.right()));
    if clipped_right <= clipped_left {
        return None;
    }
    Some(Rect::new(
        clipped_left as u16,
        rect.y,
        (clipped_right - clipped_left) as u16,
        rect.height,
    ))
}
