use crate::utils::dom::Element;

/// Clicks the menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Hamburger button.
    Toggle,
    Close,
    /// Any link inside the overlay.
    Link,
}

/// Full-screen navigation overlay for small screens.
#[derive(Clone)]
pub struct MobileMenu<E> {
    menu: E,
    body: E,
}

impl<E: Element> MobileMenu<E> {
    pub fn new(menu: E, body: E) -> Self {
        Self { menu, body }
    }

    pub fn is_open(&self) -> bool {
        self.menu.has_class("flex")
    }

    /// Shows the overlay and stops the page behind it from scrolling.
    pub fn open(&self) {
        self.menu.remove_class("hidden");
        self.menu.add_class("flex");
        self.body.set_style("overflow", "hidden");
    }

    pub fn close(&self) {
        self.menu.add_class("hidden");
        self.menu.remove_class("flex");
        self.body.set_style("overflow", "");
    }

    pub fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn handle(&self, action: MenuAction) {
        match action {
            MenuAction::Toggle => self.toggle(),
            MenuAction::Close | MenuAction::Link => self.close(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeElement;

    fn menu() -> (MobileMenu<FakeElement>, FakeElement, FakeElement) {
        let overlay = FakeElement::with_classes(&["hidden"]);
        let body = FakeElement::new();
        (MobileMenu::new(overlay.clone(), body.clone()), overlay, body)
    }

    #[test]
    fn open_locks_scroll_and_close_releases_it() {
        let (menu, overlay, body) = menu();

        menu.open();
        assert!(menu.is_open());
        assert!(!overlay.has_class("hidden"));
        assert_eq!(body.style("overflow"), "hidden");

        menu.close();
        assert!(!menu.is_open());
        assert!(overlay.has_class("hidden"));
        assert_eq!(body.style("overflow"), "");
    }

    #[test]
    fn toggle_follows_current_state() {
        let (menu, _, body) = menu();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
        assert_eq!(body.style("overflow"), "");
    }

    #[test]
    fn close_on_closed_menu_is_harmless() {
        let (menu, overlay, _) = menu();
        menu.handle(MenuAction::Close);
        assert!(overlay.has_class("hidden"));
        assert_eq!(overlay.classes(), vec!["hidden".to_string()]);
    }

    #[test]
    fn link_click_closes_open_menu() {
        let (menu, overlay, body) = menu();
        menu.handle(MenuAction::Toggle);
        assert!(menu.is_open());
        menu.handle(MenuAction::Link);
        assert!(!menu.is_open());
        assert!(overlay.has_class("hidden"));
        assert_eq!(body.style("overflow"), "");
    }
}
