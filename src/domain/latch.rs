//! Transition latch guarding page advances

use serde::{Deserialize, Serialize};

/// Two-state latch held while a page's exit animation is running.
///
/// There is exactly one release per engagement. Releasing an already
/// released latch does nothing, so a stray second completion signal cannot
/// unlock a transition that never started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransitionLatch {
    #[default]
    Released,
    Engaged,
}

impl TransitionLatch {
    pub fn is_engaged(&self) -> bool {
        matches!(self, TransitionLatch::Engaged)
    }

    /// Engages the latch.
    /// Returns: false if it was already engaged
    pub fn engage(&mut self) -> bool {
        match self {
            TransitionLatch::Engaged => false,
            TransitionLatch::Released => {
                *self = TransitionLatch::Engaged;
                true
            }
        }
    }

    /// Releases the latch.
    /// Returns: false if there was nothing to release
    pub fn release(&mut self) -> bool {
        match self {
            TransitionLatch::Released => false,
            TransitionLatch::Engaged => {
                *self = TransitionLatch::Released;
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_default_is_released() {
        assert!(!TransitionLatch::default().is_engaged());
    }

    #[test]
    fn test_engage_then_release() {
        let mut latch = TransitionLatch::default();
        assert!(latch.engage());
        assert!(latch.is_engaged());
        assert!(!latch.engage());

        assert!(latch.release());
        assert!(!latch.is_engaged());
    }

    #[test]
    fn test_double_release_is_noop() {
        let mut latch = TransitionLatch::Engaged;
        assert!(latch.release());
        assert!(!latch.release());
        assert_eq!(latch, TransitionLatch::Released);
    }
}
