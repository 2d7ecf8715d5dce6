use crate::domain::{
    movie::MovieId,
    transition::{Timing, Tween, OVERLAY_FADE_IN, OVERLAY_FADE_OUT, SHARED_COLLAPSE, SHARED_EXPAND},
};

/// A mounted detail overlay, keyed by the movie it shows
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayPresence {
    pub movie_id: MovieId,
    /// Slot on the visible page the panel grows from; `None` grows from the centre
    pub origin: Option<usize>,
    /// The route no longer selects this movie and the exit is playing
    pub closing: bool,
    pub backdrop: Tween,
    pub panel: Tween,
}

impl OverlayPresence {
    fn open(movie_id: MovieId, origin: Option<usize>, timing: Timing) -> Self {
        Self {
            movie_id,
            origin,
            closing: false,
            backdrop: Tween::start(OVERLAY_FADE_IN, timing),
            panel: Tween::start(SHARED_EXPAND, timing),
        }
    }

    /// Backdrop opacity in `[0, 1]`
    pub fn visibility(&self) -> f64 {
        if self.closing {
            1.0 - self.backdrop.progress()
        } else {
            self.backdrop.progress()
        }
    }

    /// How far the panel has grown from its origin towards the modal rect
    pub fn expansion(&self) -> f64 {
        if self.closing {
            1.0 - self.panel.progress()
        } else {
            self.panel.progress()
        }
    }
}

/// Detail overlay lifecycle.
///
/// Presence follows the routed selection, with the exit animation kept
/// alive after the route has moved on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayState {
    presence: Option<OverlayPresence>,
}

impl OverlayState {
    pub fn presence(&self) -> Option<&OverlayPresence> {
        self.presence.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.presence.is_some()
    }

    /// Reconciles the overlay with the currently selected movie
    pub fn sync(&mut self, selected: Option<MovieId>, origin: Option<usize>, timing: Timing) {
        let Some(movie_id) = selected else {
            self.close(timing);
            return;
        };

        if let Some(presence) = self.presence.as_mut() {
            if presence.movie_id == movie_id {
                if presence.closing {
                    presence.closing = false;
                    presence.backdrop = presence.backdrop.reverse(OVERLAY_FADE_IN, timing);
                    presence.panel = presence.panel.reverse(SHARED_EXPAND, timing);
                }
                return;
            }
        }

        log::debug!("Opening detail overlay for movie {movie_id}");
        self.presence = Some(OverlayPresence::open(movie_id, origin, timing));
    }

    fn close(&mut self, timing: Timing) {
        if let Some(presence) = self.presence.as_mut() {
            if !presence.closing {
                log::debug!("Closing detail overlay for movie {}", presence.movie_id);
                presence.closing = true;
                presence.backdrop = presence.backdrop.reverse(OVERLAY_FADE_OUT, timing);
                presence.panel = presence.panel.reverse(SHARED_COLLAPSE, timing);
            }
        }
    }

    /// Advances the overlay tweens and unmounts a finished exit
    pub fn tick(&mut self, elapsed_ms: u64) {
        let Some(presence) = self.presence.as_mut() else {
            return;
        };
        presence.backdrop.tick(elapsed_ms);
        presence.panel.tick(elapsed_ms);
        if presence.closing && presence.backdrop.is_finished() && presence.panel.is_finished() {
            self.presence = None;
        }
    }
}
