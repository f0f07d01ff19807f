//! Navigation requests raised by views and handled by the host.

use std::fmt;

/// Where a view asked to go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// An opaque route such as a slide call-to-action link.
    Link(String),
    /// A zero-based carousel slide.
    Slide(usize),
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Link(href) => write!(f, "{href}"),
            Self::Slide(index) => write!(f, "slide {}", index + 1),
        }
    }
}

/// Host-supplied handler for navigation requests.
pub trait Navigator {
    fn navigate(&self, target: &NavTarget);
}

/// Default handler: records the request and does nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, target: &NavTarget) {
        log::info!("Navigating to {target}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<NavTarget>>);

    impl Navigator for Recorder {
        fn navigate(&self, target: &NavTarget) {
            self.0.borrow_mut().push(target.clone());
        }
    }

    #[test]
    fn targets_display_human_readably() {
        assert_eq!(NavTarget::Link("/promotions".into()).to_string(), "/promotions");
        assert_eq!(NavTarget::Slide(0).to_string(), "slide 1");
    }

    #[test]
    fn custom_navigators_receive_targets() {
        let recorder = Recorder::default();
        recorder.navigate(&NavTarget::Slide(2));
        LogNavigator.navigate(&NavTarget::Slide(2));
        assert_eq!(*recorder.0.borrow(), vec![NavTarget::Slide(2)]);
    }
}
