use crate::utils::dom::Element;

const HIDDEN: [&str; 2] = ["opacity-0", "pointer-events-none"];
const SHOWN: [&str; 2] = ["opacity-100", "pointer-events-auto"];

/// Fades an overlay element in or out and toggles whether it takes clicks.
pub fn set_shown<E: Element>(element: &E, shown: bool) {
    let (add, remove) = if shown { (SHOWN, HIDDEN) } else { (HIDDEN, SHOWN) };
    for class in remove {
        element.remove_class(class);
    }
    for class in add {
        element.add_class(class);
    }
}

pub fn is_shown<E: Element>(element: &E) -> bool {
    SHOWN.iter().all(|class| element.has_class(class))
}
