use crate::utils::dom::Element;

pub const REVEAL_CLASS: &str = "animate-fade-in";

/// Fades a section in the first time it scrolls into view. Returns `true`
/// when the section was revealed and no longer needs observing.
pub fn on_section_visibility<E: Element>(section: &E, is_intersecting: bool) -> bool {
    if is_intersecting {
        section.add_class(REVEAL_CLASS);
    }
    is_intersecting
}
