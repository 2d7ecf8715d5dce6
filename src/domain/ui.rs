use serde::{Deserialize, Serialize};

use crate::domain::movie::MovieId;

/// What a mouse click landed on, resolved against the last rendered layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitTarget {
    Banner,
    Card(MovieId),
    /// The dimmed area around the detail panel
    Backdrop,
    DetailPanel,
}
