use crate::core::{cmd::Cmd, msg::slider::SliderMsg};
use crate::domain::{
    latch::TransitionLatch,
    movie::{MovieId, MovieList, MovieRecord},
    pagination::Paginator,
    transition::{Timing, Tween, CAPTION_REVEAL, CARD_HOVER, PAGE_ENTER, PAGE_EXIT},
};

/// The page that is sliding out after an advance
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingPage {
    pub index: usize,
    pub tween: Tween,
}

/// The card under the pointer or keyboard focus
#[derive(Debug, Clone, PartialEq)]
pub struct HoverState {
    pub id: MovieId,
    pub card: Tween,
    pub caption: Tween,
}

/// Paged grid below the banner.
///
/// The latch is engaged by an accepted advance and released exactly once,
/// on the frame where the outgoing page's exit tween finishes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SliderState {
    paginator: Paginator,
    index: usize,
    latch: TransitionLatch,
    incoming: Option<Tween>,
    outgoing: Option<OutgoingPage>,
    focus: Option<usize>,
    hover: Option<HoverState>,
    timing: Timing,
}

impl SliderState {
    pub fn new(paginator: Paginator, timing: Timing) -> Self {
        Self {
            paginator,
            timing,
            ..Default::default()
        }
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn latch(&self) -> TransitionLatch {
        self.latch
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn incoming(&self) -> Option<&Tween> {
        self.incoming.as_ref()
    }

    pub fn outgoing(&self) -> Option<&OutgoingPage> {
        self.outgoing.as_ref()
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn hover(&self) -> Option<&HoverState> {
        self.hover.as_ref()
    }

    pub fn visible_page<'a>(&self, list: &'a MovieList) -> &'a [MovieRecord] {
        self.paginator.page(list.grid(), self.index)
    }

    pub fn focused_movie<'a>(&self, list: &'a MovieList) -> Option<&'a MovieRecord> {
        self.focus.and_then(|slot| self.visible_page(list).get(slot))
    }

    /// Position of `id` on the visible page
    pub fn slot_of(&self, id: MovieId, list: &MovieList) -> Option<usize> {
        self.visible_page(list).iter().position(|movie| movie.id == id)
    }

    pub fn is_animating(&self) -> bool {
        self.incoming.is_some()
            || self.outgoing.is_some()
            || self
                .hover
                .as_ref()
                .is_some_and(|hover| !hover.card.is_finished() || !hover.caption.is_finished())
    }

    /// Back to the first page with nothing running, e.g. after a reload
    pub fn reset(&mut self) {
        *self = Self::new(self.paginator, self.timing);
    }

    /// Slider-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SliderMsg, movies: Option<&MovieList>) -> Vec<Cmd> {
        let Some(list) = movies else {
            return vec![];
        };

        match msg {
            SliderMsg::Advance => self.advance(list),
            SliderMsg::FocusNext => {
                let len = self.visible_page(list).len();
                if len > 0 {
                    let slot = self.focus.map_or(0, |slot| (slot + 1).min(len - 1));
                    self.set_focus(slot, list);
                }
            }
            SliderMsg::FocusPrev => {
                let len = self.visible_page(list).len();
                if len > 0 {
                    let slot = self.focus.map_or(len - 1, |slot| slot.saturating_sub(1));
                    self.set_focus(slot, list);
                }
            }
            SliderMsg::Hover(id) => {
                if let Some(slot) = self.slot_of(id, list) {
                    self.set_focus(slot, list);
                }
            }
            SliderMsg::Unhover => {
                self.focus = None;
                self.hover = None;
            }
        }
        vec![]
    }

    fn advance(&mut self, list: &MovieList) {
        let current = self.index;
        if self.latch.is_engaged() {
            log::debug!("Page advance ignored: page {current} is still leaving");
            return;
        }

        let next = self.paginator.advance(current, &mut self.latch, list.len());
        if next == current {
            return;
        }

        log::debug!("Slider page {current} -> {next}");
        self.outgoing = Some(OutgoingPage {
            index: current,
            tween: Tween::start(PAGE_EXIT, self.timing),
        });
        self.incoming = Some(Tween::start(PAGE_ENTER, self.timing));
        self.index = next;
        self.focus = None;
        self.hover = None;
    }

    fn set_focus(&mut self, slot: usize, list: &MovieList) {
        self.focus = Some(slot);
        let Some(id) = self.visible_page(list).get(slot).map(|movie| movie.id) else {
            return;
        };
        if self.hover.as_ref().is_some_and(|hover| hover.id == id) {
            return;
        }
        self.hover = Some(HoverState {
            id,
            card: Tween::start(CARD_HOVER, self.timing),
            caption: Tween::start(CAPTION_REVEAL, self.timing),
        });
    }

    /// Advances every running tween by `elapsed_ms`
    pub fn tick(&mut self, elapsed_ms: u64) {
        if let Some(incoming) = self.incoming.as_mut() {
            incoming.tick(elapsed_ms);
            if incoming.is_finished() {
                self.incoming = None;
            }
        }

        if let Some(outgoing) = self.outgoing.as_mut() {
            outgoing.tween.tick(elapsed_ms);
            if outgoing.tween.is_finished() {
                self.outgoing = None;
                if self.latch.release() {
                    log::debug!("Page exit finished, slider unlocked");
                }
            }
        }

        if let Some(hover) = self.hover.as_mut() {
            hover.card.tick(elapsed_ms);
            hover.caption.tick(elapsed_ms);
        }
    }
}
