use crate::core::{cmd::Cmd, msg::router::RouterMsg};
use crate::domain::route::Route;

/// In-process navigation history. Never empty; the first entry is home.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterState {
    history: Vec<Route>,
}

impl Default for RouterState {
    fn default() -> Self {
        Self {
            history: vec![Route::Home],
        }
    }
}

impl RouterState {
    /// History seeded for a deep link, so that going back lands on home
    pub fn with_deep_link(route: Route) -> Self {
        let mut router = Self::default();
        router.push(route);
        router
    }

    pub fn current(&self) -> &Route {
        self.history.last().unwrap_or(&Route::Home)
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }

    fn push(&mut self, route: Route) -> bool {
        if *self.current() == route {
            return false;
        }
        self.history.push(route);
        true
    }

    fn pop(&mut self) -> Option<Route> {
        if self.can_go_back() {
            self.history.pop()
        } else {
            None
        }
    }

    /// Router-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: RouterMsg) -> Vec<Cmd> {
        match msg {
            RouterMsg::Push(route) => {
                let target = route.to_string();
                if self.push(route) {
                    log::debug!("Navigated to {target}");
                }
                vec![]
            }
            RouterMsg::Pop => {
                if let Some(route) = self.pop() {
                    log::debug!("Navigated back from {route} to {}", self.current());
                }
                vec![]
            }
        }
    }
}
