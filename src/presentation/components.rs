//! Stateless components
//!
//! Components receive `AppState` and the current `HomeLayout` at render
//! time and draw it; they own no state of their own.

use ratatui::prelude::*;

use crate::{core::state::AppState, presentation::layout::HomeLayout};

pub mod home;
pub mod status_bar;

pub use home::HomeComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
#[derive(Debug, Default)]
pub struct Components {
    pub home: HomeComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout for `area` under the current page size
    pub fn layout(state: &AppState, area: Rect) -> HomeLayout {
        HomeLayout::new(area, state.slider.paginator().page_size())
    }

    /// Main rendering entry point
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let layout = Self::layout(state, frame.area());
        self.home.view(state, frame, &layout);
        self.status_bar.view(state, frame, layout.status_bar);
    }
}
