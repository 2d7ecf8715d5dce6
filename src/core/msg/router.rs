use serde::{Deserialize, Serialize};

use crate::domain::route::Route;

/// Messages specific to RouterState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouterMsg {
    Push(Route),
    /// Backward navigation; a no-op at the root
    Pop,
}
