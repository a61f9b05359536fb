//! Client-side behavior for the Momentum Media landing page.
//!
//! Compiled to WebAssembly and loaded next to static markup. At page-ready
//! time it renders the testimonial carousel, wires the mobile menu, FAQ,
//! scroll controls, lazy images and stat counters, and runs the simulated
//! activity feed.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

pub mod config;
pub mod data;
pub mod error;
pub mod lifecycle;
pub mod components {
    pub mod activity;
    pub mod carousel;
    pub mod counter;
    pub mod faq;
    pub mod lazy_images;
    pub mod mobile_menu;
    pub mod notification;
    pub mod reveal;
    pub mod scroll_to_top;
    pub mod testimonials;
    pub mod visibility;
}
pub mod pages {
    pub mod landing;
}
pub mod utils {
    pub mod dom;
    pub mod events;
    pub mod format;
    pub mod frames;
    pub mod scheduler;
}
#[cfg(test)]
pub mod test_utils;

use crate::config::PageConfig;
use crate::lifecycle::Lifecycle;
use crate::pages::landing::LandingPage;
use crate::utils::events::EventListener;

thread_local! {
    static LIFECYCLE: RefCell<Lifecycle<EventListener, LandingPage>> = RefCell::new(Lifecycle::default());
}

#[wasm_bindgen(start)]
pub fn run() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let (config, config_error) = match PageConfig::from_document(&document) {
        Ok(config) => (config, None),
        Err(e) => (PageConfig::default(), Some(e)),
    };
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    if let Some(e) = config_error {
        log::warn!("Ignoring landing page config: {}", e);
    }

    if document.ready_state() == "loading" {
        let listener = EventListener::new(&document, "DOMContentLoaded", move |_| {
            // Nothing left waiting means teardown already ran.
            let Some(listener) = LIFECYCLE.with(|slot| slot.borrow_mut().ready()) else {
                return;
            };
            mount(config.clone());
            drop(listener);
        });
        match listener {
            Ok(listener) => LIFECYCLE.with(|slot| slot.borrow_mut().wait(listener)),
            Err(e) => log::error!("Failed to wait for DOMContentLoaded: {}", e),
        }
    } else {
        mount(config);
    }
}

fn mount(config: PageConfig) {
    match LandingPage::mount(config) {
        Ok(page) => LIFECYCLE.with(|slot| slot.borrow_mut().mounted(page)),
        Err(e) => log::error!("Landing page not mounted: {}", e),
    }
}

/// Stops every timer, listener and observer the page installed, and cancels
/// a mount still waiting for `DOMContentLoaded`.
#[wasm_bindgen]
pub fn teardown() {
    let previous = LIFECYCLE.with(|slot| slot.take());
    if previous.is_active() {
        log::info!("Tearing down landing page behaviors");
    }
    drop(previous);
}
