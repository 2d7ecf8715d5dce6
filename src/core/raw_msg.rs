use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::{movie::MovieList, ui::HitTarget};

/// Raw messages from external sources (input, network, system)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input
    Key(KeyEvent),
    Click(HitTarget),
    /// Pointer moved; `None` when it is over nothing interactive
    Hover(Option<HitTarget>),

    /// Animation clock, emitted once per rendered frame
    Frame { elapsed_ms: u64 },

    // Movie service replies
    NowPlayingLoaded(MovieList),
    NowPlayingFailed(String),

    // System status
    SystemMessage(String),
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(
            self,
            RawMsg::Tick | RawMsg::Render | RawMsg::Frame { .. } | RawMsg::Hover(_)
        )
    }
}
