use crate::core::{cmd::Cmd, msg::catalog::CatalogMsg};
use crate::domain::movie::MovieList;

/// Lifecycle of the now-playing list
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CatalogState {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Ready(MovieList),
    Failed(String),
}

impl CatalogState {
    pub fn movies(&self) -> Option<&MovieList> {
        match self {
            CatalogState::Ready(list) => Some(list),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CatalogState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Catalog-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: CatalogMsg) -> Vec<Cmd> {
        match msg {
            CatalogMsg::Load => {
                // Single flight
                if self.is_loading() {
                    log::debug!("Ignoring load request: a fetch is already in flight");
                    return vec![];
                }
                *self = CatalogState::Loading;
                vec![Cmd::FetchNowPlaying]
            }

            CatalogMsg::Loaded(list) => {
                let message = format!("Loaded {} now-playing movies", list.len());
                *self = CatalogState::Ready(list);
                vec![Cmd::LogInfo { message }]
            }

            CatalogMsg::Failed(error) => {
                let message = format!("Failed to load now-playing movies: {error}");
                *self = CatalogState::Failed(error);
                vec![Cmd::LogError { message }]
            }
        }
    }
}
