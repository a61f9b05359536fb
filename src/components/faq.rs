use crate::utils::dom::Element;

/// One question/answer pair. Entries toggle independently of each other.
#[derive(Clone)]
pub struct FaqEntry<E> {
    answer: E,
    icon: Option<E>,
}

impl<E: Element> FaqEntry<E> {
    pub fn new(answer: E, icon: Option<E>) -> Self {
        Self { answer, icon }
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        !self.answer.has_class("hidden")
    }

    /// Shows or hides the answer and flips the chevron. Returns whether the
    /// answer is now open.
    pub fn toggle(&self) -> bool {
        let hidden = self.answer.toggle_class("hidden");
        if let Some(icon) = &self.icon {
            icon.toggle_class("rotate-180");
        }
        !hidden
    }
}
