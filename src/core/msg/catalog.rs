use serde::{Deserialize, Serialize};

use crate::domain::movie::MovieList;

/// Messages specific to CatalogState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatalogMsg {
    /// Request the now-playing list (ignored while a request is in flight)
    Load,
    Loaded(MovieList),
    Failed(String),
}
