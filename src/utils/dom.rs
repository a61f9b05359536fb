//! The slice of the DOM the landing page behaviors touch.
//!
//! Components are written against [`Element`] so they can run on a real
//! `web_sys::Element` in the browser and on an in-memory fake in tests.

use wasm_bindgen::JsCast;

pub trait Element: Clone + 'static {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    /// Flips `class` and returns whether it is now present.
    fn toggle_class(&self, class: &str) -> bool;
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    fn set_style(&self, property: &str, value: &str);
    fn style(&self, property: &str) -> String;
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn parent(&self) -> Option<Self>;
    /// Appends a new `tag` child with the given class list and inner HTML.
    fn append_html(&self, tag: &str, class: &str, inner_html: &str);
}

impl Element for web_sys::Element {
    fn add_class(&self, class: &str) {
        if let Err(e) = self.class_list().add_1(class) {
            log::warn!("Failed to add class {}: {:?}", class, e);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.class_list().remove_1(class) {
            log::warn!("Failed to remove class {}: {:?}", class, e);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn toggle_class(&self, class: &str) -> bool {
        match self.class_list().toggle(class) {
            Ok(present) => present,
            Err(e) => {
                log::warn!("Failed to toggle class {}: {:?}", class, e);
                self.has_class(class)
            }
        }
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_style(&self, property: &str, value: &str) {
        let Some(html) = self.dyn_ref::<web_sys::HtmlElement>() else {
            return;
        };
        let style = html.style();
        let result = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
        if let Err(e) = result {
            log::warn!("Failed to set style {}: {:?}", property, e);
        }
    }

    fn style(&self, property: &str) -> String {
        self.dyn_ref::<web_sys::HtmlElement>()
            .and_then(|html| html.style().get_property_value(property).ok())
            .unwrap_or_default()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(e) = web_sys::Element::set_attribute(self, name, value) {
            log::warn!("Failed to set attribute {}: {:?}", name, e);
        }
    }

    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }

    fn append_html(&self, tag: &str, class: &str, inner_html: &str) {
        let Some(document) = self.owner_document() else {
            return;
        };
        let child = match document.create_element(tag) {
            Ok(child) => child,
            Err(e) => {
                log::warn!("Failed to create <{}>: {:?}", tag, e);
                return;
            }
        };
        child.set_class_name(class);
        child.set_inner_html(inner_html);
        if let Err(e) = self.append_child(&child) {
            log::warn!("Failed to append <{}>: {:?}", tag, e);
        }
    }
}
