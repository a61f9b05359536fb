use crate::components::visibility::set_shown;
use crate::utils::dom::Element;

/// "Back to top" button that appears once the page is scrolled far enough.
#[derive(Clone)]
pub struct ScrollToTop<E> {
    button: E,
    threshold: f64,
}

impl<E: Element> ScrollToTop<E> {
    pub fn new(button: E, threshold: f64) -> Self {
        Self { button, threshold }
    }

    /// Returns whether the button is shown at `scroll_y`.
    pub fn update(&self, scroll_y: f64) -> bool {
        let shown = scroll_y > self.threshold;
        set_shown(&self.button, shown);
        shown
    }

    #[cfg(test)]
    pub fn is_shown(&self) -> bool {
        crate::components::visibility::is_shown(&self.button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeElement;

    #[test]
    fn shown_only_past_threshold() {
        let button = FakeElement::with_classes(&["opacity-0", "pointer-events-none"]);
        let control = ScrollToTop::new(button.clone(), 300.0);

        assert!(!control.update(0.0));
        assert!(!control.update(300.0));
        assert!(button.has_class("opacity-0"));

        assert!(control.update(300.5));
        assert!(control.is_shown());
        assert!(!button.has_class("pointer-events-none"));

        assert!(!control.update(120.0));
        assert!(!control.is_shown());
        assert!(button.has_class("pointer-events-none"));
        assert!(!button.has_class("opacity-100"));
    }
}
