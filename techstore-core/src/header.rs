//! Header chrome state: scroll style, mobile menu and mobile search.

/// Width class of the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Narrow,
    Wide,
}

impl Viewport {
    #[must_use]
    pub fn from_width(width_px: f64, wide_breakpoint_px: f64) -> Self {
        if width_px >= wide_breakpoint_px {
            Self::Wide
        } else {
            Self::Narrow
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderEvent {
    /// Whether the page is now scrolled past the threshold, as decided
    /// by [`ScrollBinding::observe`].
    Scrolled(bool),
    ToggleMobileMenu,
    SearchIconPressed,
    SearchBlurred,
    SearchButtonPressed,
}

/// The three independent header flags. Any combination is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderState {
    pub scrolled: bool,
    pub mobile_menu_open: bool,
    pub search_expanded: bool,
}

impl HeaderState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scrolled: false,
            mobile_menu_open: false,
            search_expanded: false,
        }
    }

    /// Apply `event`, returning whether any flag changed.
    pub fn apply(&mut self, event: HeaderEvent) -> bool {
        let before = *self;
        match event {
            HeaderEvent::Scrolled(past) => self.scrolled = past,
            HeaderEvent::ToggleMobileMenu => self.mobile_menu_open = !self.mobile_menu_open,
            HeaderEvent::SearchIconPressed => self.search_expanded = true,
            HeaderEvent::SearchBlurred | HeaderEvent::SearchButtonPressed => {
                self.search_expanded = false;
            }
        }
        before != *self
    }

    /// Wide viewports always show navigation.
    #[must_use]
    pub fn nav_visible(&self, viewport: Viewport) -> bool {
        viewport == Viewport::Wide || self.mobile_menu_open
    }

    /// Wide viewports always show the search box; narrow ones only once
    /// it has been expanded.
    #[must_use]
    pub fn search_visible(&self, viewport: Viewport) -> bool {
        viewport == Viewport::Wide || self.search_expanded
    }
}

/// Lifecycle guard for the page scroll subscription.
///
/// A header attaches once on mount and detaches once on unmount; offsets
/// observed while detached are ignored so a stale listener can never
/// flip state after unmount.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollBinding {
    threshold_px: f64,
    attached: bool,
}

impl ScrollBinding {
    #[must_use]
    pub const fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            attached: false,
        }
    }

    /// Returns `true` only when the binding was previously detached, so
    /// the caller registers its listener at most once.
    pub fn attach(&mut self) -> bool {
        !std::mem::replace(&mut self.attached, true)
    }

    /// Returns `true` only when the binding was attached.
    pub fn detach(&mut self) -> bool {
        std::mem::replace(&mut self.attached, false)
    }

    /// Scrolled flag for `offset`, or `None` while detached.
    #[must_use]
    pub fn observe(&self, offset: f64) -> Option<bool> {
        self.attached.then_some(offset > self.threshold_px)
    }

    /// The event to dispatch for `offset`, or `None` while detached.
    #[must_use]
    pub fn event_for(&self, offset: f64) -> Option<HeaderEvent> {
        self.observe(offset).map(HeaderEvent::Scrolled)
    }
}
