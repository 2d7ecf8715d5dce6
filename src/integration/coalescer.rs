/// Collapses the render requests and resizes seen during one loop
/// iteration into at most one resize and one draw
#[derive(Debug, Default)]
pub struct Coalescer {
    render_requests: usize,
    saw_render_tick: bool,
    resizes: Vec<(u16, u16)>,
    last_size: Option<(u16, u16)>,
}

/// What the runner should do this iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decision {
    pub resize: Option<(u16, u16)>,
    pub render: bool,
}

impl Coalescer {
    /// Pure decision function: whether to render this loop based on coalesced inputs
    #[inline]
    pub fn decide_render(queued_render_reqs: usize, saw_tui_render: bool) -> bool {
        queued_render_reqs > 0 || saw_tui_render
    }

    /// Pure decision function: coalesce multiple resizes into last-only
    #[inline]
    pub fn decide_resize(
        last_seen: Option<(u16, u16)>,
        events: &[(u16, u16)],
    ) -> Option<(u16, u16)> {
        events.last().copied().or(last_seen)
    }

    pub fn request_render(&mut self) {
        self.render_requests += 1;
    }

    pub fn saw_render_tick(&mut self) {
        self.saw_render_tick = true;
    }

    pub fn push_resize(&mut self, width: u16, height: u16) {
        self.resizes.push((width, height));
    }

    /// Last size applied to the terminal
    pub fn last_size(&self) -> Option<(u16, u16)> {
        self.last_size
    }

    /// Drains everything recorded since the previous call
    pub fn take(&mut self) -> Decision {
        let resize = if self.resizes.is_empty() {
            None
        } else {
            Self::decide_resize(self.last_size, &self.resizes)
                .filter(|size| Some(*size) != self.last_size)
        };
        if resize.is_some() {
            self.last_size = resize;
        }
        let render =
            Self::decide_render(self.render_requests, self.saw_render_tick) || resize.is_some();

        self.render_requests = 0;
        self.saw_render_tick = false;
        self.resizes.clear();

        Decision { resize, render }
    }
}
