use serde::{Deserialize, Serialize};

use crate::domain::movie::MovieId;

/// Messages specific to SliderState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliderMsg {
    /// Banner click: move to the next page unless a page change is running
    Advance,
    FocusNext,
    FocusPrev,
    Hover(MovieId),
    Unhover,
}

impl SliderMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, SliderMsg::Hover(_) | SliderMsg::Unhover)
    }
}
