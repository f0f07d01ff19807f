//! Single-open disclosure state for the mega-menu.

/// User input that can change which panel is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisclosureEvent {
    /// Pointer entered the trigger for `key`.
    PointerEnter(String),
    /// Trigger for `key` was clicked.
    Click(String),
    /// Pointer left the whole menu, or focus moved out of it.
    Dismiss,
}

/// Which mega-menu panel, if any, is open.
///
/// Only one key is held at a time, so opening a panel closes any other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Disclosure {
    active: Option<String>,
}

impl Disclosure {
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Panel visibility and trigger highlight rule.
    #[must_use]
    pub fn is_open(&self, key: &str) -> bool {
        self.active.as_deref() == Some(key)
    }

    pub fn hover(&mut self, key: &str) {
        if !self.is_open(key) {
            self.active = Some(key.to_string());
        }
    }

    /// Clicking the open trigger closes it; any other trigger opens.
    pub fn click(&mut self, key: &str) {
        if self.is_open(key) {
            self.active = None;
        } else {
            self.active = Some(key.to_string());
        }
    }

    pub fn dismiss(&mut self) {
        self.active = None;
    }

    /// Apply `event`, returning whether the open panel changed.
    pub fn apply(&mut self, event: &DisclosureEvent) -> bool {
        let before = self.active.clone();
        match event {
            DisclosureEvent::PointerEnter(key) => self.hover(key),
            DisclosureEvent::Click(key) => self.click(key),
            DisclosureEvent::Dismiss => self.dismiss(),
        }
        before != self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let menu = Disclosure::new();
        assert_eq!(menu.active(), None);
        assert!(!menu.is_open("gaming"));
    }

    #[test]
    fn hovering_another_trigger_replaces_the_open_panel() {
        let mut menu = Disclosure::new();
        menu.hover("audio");
        menu.hover("gaming");
        assert!(menu.is_open("gaming"));
        assert!(!menu.is_open("audio"));
    }

    #[test]
    fn clicking_the_open_trigger_closes_it() {
        let mut menu = Disclosure::new();
        menu.hover("audio");
        menu.click("audio");
        assert_eq!(menu.active(), None);
    }

    #[test]
    fn clicking_a_closed_trigger_opens_it() {
        let mut menu = Disclosure::new();
        menu.click("audio");
        assert!(menu.is_open("audio"));
        menu.click("gaming");
        assert!(menu.is_open("gaming"));
        assert!(!menu.is_open("audio"));
    }

    #[test]
    fn apply_reports_changes() {
        let mut menu = Disclosure::new();
        assert!(menu.apply(&DisclosureEvent::PointerEnter("tv".into())));
        assert!(!menu.apply(&DisclosureEvent::PointerEnter("tv".into())));
        assert!(menu.apply(&DisclosureEvent::Dismiss));
        assert!(!menu.apply(&DisclosureEvent::Dismiss));
    }
}
