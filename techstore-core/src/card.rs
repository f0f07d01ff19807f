/// Pointer hover flag owned by one product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardHover {
    hovered: bool,
}

impl CardHover {
    #[must_use]
    pub const fn new() -> Self {
        Self { hovered: false }
    }

    #[must_use]
    pub const fn is_hovered(self) -> bool {
        self.hovered
    }

    pub fn enter(&mut self) {
        self.hovered = true;
    }

    pub fn leave(&mut self) {
        self.hovered = false;
    }

    /// Inline transform for the product image.
    #[must_use]
    pub const fn image_transform(self) -> &'static str {
        if self.hovered { "scale(1.05)" } else { "scale(1)" }
    }

    /// Opacity class for the quick-action overlay.
    #[must_use]
    pub const fn overlay_class(self) -> &'static str {
        if self.hovered { "opacity-100" } else { "opacity-0" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_leave_toggle_overlay() {
        let mut hover = CardHover::new();
        assert_eq!(hover.overlay_class(), "opacity-0");
        hover.enter();
        assert!(hover.is_hovered());
        assert_eq!(hover.image_transform(), "scale(1.05)");
        assert_eq!(hover.overlay_class(), "opacity-100");
        hover.leave();
        assert_eq!(hover.image_transform(), "scale(1)");
    }
}
