use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Runs `frame` on every animation frame until it returns `false` or `alive`
/// is cleared.
pub fn run_frames<F>(alive: Rc<Cell<bool>>, mut frame: F)
where
    F: FnMut() -> bool + 'static,
{
    let f: FrameSlot = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
        if !alive.get() || !frame() {
            // Drop our own handle so the closure is freed once it returns.
            let _ = f.borrow_mut().take();
            return;
        }
        request_frame(&f);
    }) as Box<dyn FnMut(f64)>));

    request_frame(&g);
}

fn request_frame(slot: &FrameSlot) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(callback) = slot.borrow().as_ref() {
        if let Err(e) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {:?}", e);
        }
    }
}
