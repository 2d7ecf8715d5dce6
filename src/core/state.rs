pub mod catalog;
pub mod overlay;
pub mod router;
pub mod slider;
pub mod system;

pub use catalog::CatalogState;
pub use overlay::OverlayState;
pub use router::RouterState;
pub use slider::SliderState;
pub use system::SystemState;

use crate::domain::{
    movie::{MovieList, MovieRecord},
    pagination::Paginator,
    route::Route,
    selection,
};
use crate::infrastructure::config::Config;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub catalog: CatalogState,
    pub slider: SliderState,
    pub router: RouterState,
    pub overlay: OverlayState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

/// What the home page is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomePhase {
    Loading,
    Failed,
    ReadyNoOverlay,
    ReadyOverlayOpen,
}

impl AppState {
    /// Initialize AppState with the specified config
    pub fn new_with_config(config: Config) -> Self {
        Self {
            slider: SliderState::new(Paginator::new(config.ui.page_size), config.ui.timing()),
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Starts at `route`, with home underneath it in the history
    pub fn with_route(mut self, route: Route) -> Self {
        self.router = RouterState::with_deep_link(route);
        self
    }

    pub fn phase(&self) -> HomePhase {
        match &self.catalog {
            CatalogState::Idle | CatalogState::Loading => HomePhase::Loading,
            CatalogState::Failed(_) => HomePhase::Failed,
            CatalogState::Ready(_) => {
                if self.selected_movie().is_some() {
                    HomePhase::ReadyOverlayOpen
                } else {
                    HomePhase::ReadyNoOverlay
                }
            }
        }
    }

    pub fn movies(&self) -> Option<&MovieList> {
        self.catalog.movies()
    }

    /// The record the current route points at, if it is loaded
    pub fn selected_movie(&self) -> Option<&MovieRecord> {
        selection::resolve(self.router.current().movie_id(), self.catalog.movies())
    }

    pub fn visible_page(&self) -> &[MovieRecord] {
        self.movies()
            .map(|list| self.slider.visible_page(list))
            .unwrap_or(&[])
    }

    pub fn focused_movie(&self) -> Option<&MovieRecord> {
        self.movies().and_then(|list| self.slider.focused_movie(list))
    }

    /// Mounts, keeps or dismisses the overlay to match the route
    pub fn sync_overlay(&mut self) {
        let selected = self.selected_movie().map(|movie| movie.id);
        let origin = selected.and_then(|id| {
            self.movies()
                .and_then(|list| self.slider.slot_of(id, list))
        });
        let timing = self.slider.timing();
        self.overlay.sync(selected, origin, timing);
    }
}
