use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod router;
pub mod slider;
pub mod system;

use catalog::CatalogMsg;
use router::RouterMsg;
use slider::SliderMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Now-playing list lifecycle (delegated to CatalogState)
    Catalog(CatalogMsg),

    // Paging, focus and hover (delegated to SliderState)
    Slider(SliderMsg),

    // Navigation (delegated to RouterState)
    Router(RouterMsg),

    /// Advance every running transition by the given milliseconds
    Frame(u64),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Frame(_) => true,
            Msg::Slider(slider_msg) => slider_msg.is_frequent(),
            _ => false,
        }
    }
}
