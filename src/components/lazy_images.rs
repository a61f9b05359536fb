use crate::utils::dom::Element;

pub const LOADED_CLASS: &str = "loaded";

pub fn mark_loaded<E: Element>(image: &E) {
    image.add_class(LOADED_CLASS);
}

/// Marks an already-complete image right away. Returns `true` if the caller
/// still has to wait for its `load` or `error` event.
pub fn prepare<E: Element>(image: &E, complete: bool) -> bool {
    if complete {
        mark_loaded(image);
        false
    } else {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeElement;

    #[test]
    fn complete_image_is_marked_immediately() {
        let image = FakeElement::new();
        assert!(!prepare(&image, true));
        assert!(image.has_class(LOADED_CLASS));
    }

    #[test]
    fn pending_image_waits_for_event() {
        let image = FakeElement::new();
        assert!(prepare(&image, false));
        assert!(!image.has_class(LOADED_CLASS));
        // load and error both end up here
        mark_loaded(&image);
        mark_loaded(&image);
        assert_eq!(image.classes(), vec![LOADED_CLASS.to_string()]);
    }
}
