//! Transition descriptors and the tweens that play them.
//!
//! Each animated element on the home page is described by a
//! [`TransitionDescriptor`]: what triggers it, which visual state it moves
//! between, how long it waits, how long it runs and how progress is eased.
//! A [`Tween`] is a running instance of a descriptor, advanced by frame
//! messages carrying elapsed milliseconds. Rendering reads
//! [`Tween::progress`] and interpolates whatever it draws.

use serde::{Deserialize, Serialize};

/// What starts a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    PageAdvance,
    HoverStart,
    OverlayOpen,
    OverlayClose,
}

/// Named visual states a transition interpolates between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualState {
    Hidden,
    Visible,
    Exit,
    Normal,
    Hover,
    Collapsed,
    Expanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    #[default]
    EaseInOut,
    EaseOut,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` onto the eased curve
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }

    /// Linear progress at which the curve reaches `y`
    pub fn invert(self, y: f64) -> f64 {
        let y = y.clamp(0.0, 1.0);
        match self {
            Easing::Linear => y,
            Easing::EaseInOut => {
                if y < 0.5 {
                    (y / 2.0).sqrt()
                } else {
                    1.0 - (2.0 * (1.0 - y)).sqrt() / 2.0
                }
            }
            Easing::EaseOut => 1.0 - (1.0 - y).cbrt(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDescriptor {
    pub trigger: Trigger,
    pub from: VisualState,
    pub to: VisualState,
    pub delay_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl TransitionDescriptor {
    pub const fn new(
        trigger: Trigger,
        from: VisualState,
        to: VisualState,
        duration_ms: u64,
        easing: Easing,
    ) -> Self {
        Self {
            trigger,
            from,
            to,
            delay_ms: 0,
            duration_ms,
            easing,
        }
    }

    pub const fn delayed(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Total running time including the delay
    pub fn total_ms(&self) -> u64 {
        self.delay_ms + self.duration_ms
    }
}

pub const PAGE_ENTER: TransitionDescriptor = TransitionDescriptor::new(
    Trigger::PageAdvance,
    VisualState::Hidden,
    VisualState::Visible,
    700,
    Easing::EaseInOut,
);

pub const PAGE_EXIT: TransitionDescriptor = TransitionDescriptor::new(
    Trigger::PageAdvance,
    VisualState::Visible,
    VisualState::Exit,
    700,
    Easing::EaseInOut,
);

pub const CARD_HOVER: TransitionDescriptor = TransitionDescriptor::new(
    Trigger::HoverStart,
    VisualState::Normal,
    VisualState::Hover,
    200,
    Easing::EaseInOut,
)
.delayed(400);

pub const CAPTION_REVEAL: TransitionDescriptor = TransitionDescriptor::new(
    Trigger::HoverStart,
    VisualState::Hidden,
    VisualState::Visible,
    200,
    Easing::EaseInOut,
)
.delayed(400);

pub const OVERLAY_FADE_IN: TransitionDescriptor = TransitionDescriptor::new(
    Trigger::OverlayOpen,
    VisualState::Hidden,
    VisualState::Visible,
    300,
    Easing::EaseOut,
);

pub const OVERLAY_FADE_OUT: TransitionDescriptor = TransitionDescriptor::new(
    Trigger::OverlayClose,
    VisualState::Visible,
    VisualState::Hidden,
    300,
    Easing::EaseOut,
);

pub const SHARED_EXPAND: TransitionDescriptor = TransitionDescriptor::new(
    Trigger::OverlayOpen,
    VisualState::Collapsed,
    VisualState::Expanded,
    350,
    Easing::EaseOut,
);

pub const SHARED_COLLAPSE: TransitionDescriptor = TransitionDescriptor::new(
    Trigger::OverlayClose,
    VisualState::Expanded,
    VisualState::Collapsed,
    350,
    Easing::EaseOut,
);

/// Playback settings shared by every tween
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    pub enabled: bool,
    /// Playback rate; 2.0 plays twice as fast, 0.5 twice as slow
    pub speed: f64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            enabled: true,
            speed: 1.0,
        }
    }
}

impl Timing {
    fn scale(&self, ms: u64) -> u64 {
        if !self.enabled {
            return 0;
        }
        if self.speed <= 0.0 {
            return ms;
        }
        (ms as f64 / self.speed).round() as u64
    }
}

/// A running transition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    descriptor: TransitionDescriptor,
    delay_ms: u64,
    duration_ms: u64,
    elapsed_ms: u64,
}

impl Tween {
    pub fn start(descriptor: TransitionDescriptor, timing: Timing) -> Self {
        Self {
            descriptor,
            delay_ms: timing.scale(descriptor.delay_ms),
            duration_ms: timing.scale(descriptor.duration_ms),
            elapsed_ms: 0,
        }
    }

    pub fn descriptor(&self) -> &TransitionDescriptor {
        &self.descriptor
    }

    /// Advances the clock.
    /// Returns: true if this call finished the tween
    pub fn tick(&mut self, elapsed_ms: u64) -> bool {
        let was_finished = self.is_finished();
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        !was_finished && self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.delay_ms + self.duration_ms
    }

    /// Eased progress in `[0, 1]`; stays at 0 during the delay
    pub fn progress(&self) -> f64 {
        if self.is_finished() {
            return 1.0;
        }
        let active = self.elapsed_ms.saturating_sub(self.delay_ms);
        if self.duration_ms == 0 {
            return 1.0;
        }
        self.descriptor
            .easing
            .apply(active as f64 / self.duration_ms as f64)
    }

    /// Starts the reverse transition from wherever this one currently is,
    /// so an interrupted open collapses from its current size.
    ///
    /// The reversed tween starts where its eased progress equals
    /// `1 - self.progress()`, which keeps the rendered value continuous
    /// even when the curve is not symmetric.
    pub fn reverse(&self, descriptor: TransitionDescriptor, timing: Timing) -> Self {
        let mut reversed = Tween::start(descriptor, timing);
        let linear = descriptor.easing.invert(1.0 - self.progress());
        reversed.elapsed_ms =
            reversed.delay_ms + (linear * reversed.duration_ms as f64).round() as u64;
        reversed
    }
}

/// Linear interpolation helper used by renderers
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(Easing::Linear)]
    #[case(Easing::EaseInOut)]
    #[case(Easing::EaseOut)]
    fn test_easing_endpoints(#[case] easing: Easing) {
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
        assert_eq!(easing.apply(-1.0), 0.0);
        assert_eq!(easing.apply(2.0), 1.0);
    }

    #[test]
    fn test_tween_finishes_once() {
        let mut tween = Tween::start(PAGE_EXIT, Timing::default());
        assert!(!tween.tick(300));
        assert!(!tween.is_finished());
        assert!(tween.tick(400));
        assert!(tween.is_finished());
        assert!(!tween.tick(100));
        assert_eq!(tween.progress(), 1.0);
    }

    #[test]
    fn test_delay_holds_progress_at_zero() {
        let mut tween = Tween::start(CAPTION_REVEAL, Timing::default());
        tween.tick(399);
        assert_eq!(tween.progress(), 0.0);
        tween.tick(101);
        assert!(tween.progress() > 0.0);
        tween.tick(100);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_disabled_timing_finishes_on_first_tick() {
        let timing = Timing {
            enabled: false,
            speed: 1.0,
        };
        let mut tween = Tween::start(PAGE_ENTER, timing);
        assert!(tween.is_finished());
        assert_eq!(tween.progress(), 1.0);
        assert!(!tween.tick(0));
    }

    #[test]
    fn test_speed_scales_duration() {
        let slow = Timing {
            enabled: true,
            speed: 0.5,
        };
        let mut tween = Tween::start(OVERLAY_FADE_IN, slow);
        assert!(!tween.tick(300));
        assert!(tween.tick(300));

        let fast = Timing {
            enabled: true,
            speed: 2.0,
        };
        let mut tween = Tween::start(OVERLAY_FADE_IN, fast);
        assert!(tween.tick(150));
    }

    #[rstest]
    #[case(Easing::Linear)]
    #[case(Easing::EaseInOut)]
    #[case(Easing::EaseOut)]
    fn test_invert_undoes_apply(#[case] easing: Easing) {
        for step in 0..=20 {
            let t = f64::from(step) / 20.0;
            assert!((easing.invert(easing.apply(t)) - t).abs() < 1e-9, "{easing:?} at {t}");
        }
    }

    #[rstest]
    #[case(SHARED_EXPAND, SHARED_COLLAPSE)]
    #[case(PAGE_ENTER, PAGE_EXIT)]
    fn test_reverse_mid_animation_is_continuous(
        #[case] forward: TransitionDescriptor,
        #[case] backward: TransitionDescriptor,
    ) {
        for elapsed in [20, 70, 175, 300] {
            let mut tween = Tween::start(forward, Timing::default());
            tween.tick(elapsed);
            let reversed = tween.reverse(backward, Timing::default());
            let before = tween.progress();
            let after = 1.0 - reversed.progress();
            assert!((before - after).abs() < 0.01, "{before} vs {after} at {elapsed}ms");
        }
    }

    #[test]
    fn test_reverse_starts_from_current_position() {
        let mut open = Tween::start(SHARED_EXPAND, Timing::default());
        open.tick(350);
        let close = open.reverse(SHARED_COLLAPSE, Timing::default());
        assert_eq!(close.progress(), 0.0);

        let half = Tween::start(SHARED_EXPAND, Timing::default());
        let close = half.reverse(SHARED_COLLAPSE, Timing::default());
        assert!(close.is_finished());
    }

    #[test]
    fn test_descriptor_table() {
        assert_eq!(PAGE_EXIT.total_ms(), 700);
        assert_eq!(CARD_HOVER.total_ms(), 600);
        assert_eq!(SHARED_EXPAND.from, VisualState::Collapsed);
        assert_eq!(SHARED_EXPAND.to, VisualState::Expanded);
    }
}
