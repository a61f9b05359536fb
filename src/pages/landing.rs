use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement, NodeList, ScrollBehavior, ScrollToOptions, Window};

use crate::components::activity::{ActivityElements, ActivitySimulator};
use crate::components::carousel::{Carousel, CarouselOptions};
use crate::components::counter::Counter;
use crate::components::faq::FaqEntry;
use crate::components::lazy_images;
use crate::components::mobile_menu::{MenuAction, MobileMenu};
use crate::components::notification::{DownloadToasts, ToastContent, ToastElements};
use crate::components::reveal;
use crate::components::scroll_to_top::ScrollToTop;
use crate::components::testimonials::render_testimonials;
use crate::config::{CounterSettings, PageConfig, RevealSettings, Selectors};
use crate::data::{NOTIFICATION_CANDIDATES, TESTIMONIALS, TIME_AGO};
use crate::error::PageError;
use crate::utils::events::{EventListener, Observer};
use crate::utils::frames::run_frames;
use crate::utils::scheduler::BrowserScheduler;

type PageRng = Rc<RefCell<StdRng>>;

/// Everything the landing page wired up. Dropping it undoes all of it.
pub struct LandingPage {
    _listeners: Vec<EventListener>,
    _observers: Vec<Observer>,
    _carousel: Option<Carousel>,
    _activity: Option<ActivitySimulator<BrowserScheduler>>,
    _toasts: Option<DownloadToasts<BrowserScheduler>>,
    animations_alive: Rc<Cell<bool>>,
}

impl LandingPage {
    /// Wires every behavior against the current document.
    ///
    /// Each feature is set up on its own: a missing element is logged and
    /// only that feature is skipped.
    pub fn mount(config: PageConfig) -> Result<Self, PageError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        let document = window.document().ok_or(PageError::NoDocument)?;
        let selectors = &config.selectors;
        let rng: PageRng = Rc::new(RefCell::new(StdRng::from_entropy()));

        let animations_alive = Rc::new(Cell::new(true));

        if let Some(count) = feature("testimonials", render_slides(&document, selectors)) {
            log::debug!("{} testimonials rendered", count);
        }
        let carousel = feature("carousel", mount_carousel(&config));

        let listeners: Vec<EventListener> = collect_features([
            ("mobile menu", wire_mobile_menu(&document, selectors)),
            ("faq", wire_faq(&document, selectors)),
            (
                "scroll to top",
                wire_scroll_to_top(&window, &document, selectors, config.scroll_to_top.threshold_px),
            ),
            ("lazy images", wire_lazy_images(&document, selectors)),
        ]);

        let observers: Vec<Observer> = collect_features([
            ("scroll reveal", observe_sections(&document, selectors, &config.reveal).map(|o| vec![o])),
            (
                "counters",
                observe_counters(&document, selectors, &config.counter, animations_alive.clone())
                    .map(|o| vec![o]),
            ),
        ]);

        let activity = feature("activity", start_activity(&document, &config, rng.clone()));
        let toasts = feature("download toasts", start_toasts(&document, &config, rng));

        log::info!(
            "Landing page ready: {} listeners, {} observers",
            listeners.len(),
            observers.len()
        );
        let page = LandingPage {
            _listeners: listeners,
            _observers: observers,
            _carousel: carousel,
            _activity: activity,
            _toasts: toasts,
            animations_alive,
        };
        Ok(page)
    }
}

impl Drop for LandingPage {
    fn drop(&mut self) {
        self.animations_alive.set(false);
    }
}

fn feature<T>(name: &str, result: Result<T, PageError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("Skipping {}: {}", name, e);
            None
        }
    }
}

/// Runs every step's result through [`feature`], keeping what the
/// successful ones produced.
fn collect_features<T, I>(steps: I) -> Vec<T>
where
    I: IntoIterator<Item = (&'static str, Result<Vec<T>, PageError>)>,
{
    steps
        .into_iter()
        .filter_map(|(name, result)| feature(name, result))
        .flatten()
        .collect()
}

fn by_id(document: &Document, id: &str) -> Result<Element, PageError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement(format!("#{}", id)))
}

fn element_list(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn render_slides(document: &Document, selectors: &Selectors) -> Result<usize, PageError> {
    let container = by_id(document, &selectors.testimonials_container)?;
    Ok(render_testimonials(&container, &TESTIMONIALS))
}

fn mount_carousel(config: &PageConfig) -> Result<Carousel, PageError> {
    let options = CarouselOptions::new(&config.carousel, &config.selectors.carousel_pagination);
    Carousel::mount(&config.selectors.carousel, &options)
}

fn wire_mobile_menu(document: &Document, selectors: &Selectors) -> Result<Vec<EventListener>, PageError> {
    let button = by_id(document, &selectors.menu_button)?;
    let overlay = by_id(document, &selectors.menu)?;
    let close = by_id(document, &selectors.menu_close)?;
    let body: Element = document
        .body()
        .ok_or_else(|| PageError::MissingElement("body".to_string()))?
        .into();
    let links = element_list(overlay.query_selector_all("a")?);
    let menu = MobileMenu::new(overlay, body);

    let mut listeners = Vec::with_capacity(links.len() + 2);
    listeners.push(menu_listener(&button, &menu, MenuAction::Toggle)?);
    listeners.push(menu_listener(&close, &menu, MenuAction::Close)?);
    for link in &links {
        listeners.push(menu_listener(link, &menu, MenuAction::Link)?);
    }
    Ok(listeners)
}

fn menu_listener(
    target: &Element,
    menu: &MobileMenu<Element>,
    action: MenuAction,
) -> Result<EventListener, PageError> {
    let menu = menu.clone();
    EventListener::new(target, "click", move |_| menu.handle(action))
}

fn wire_faq(document: &Document, selectors: &Selectors) -> Result<Vec<EventListener>, PageError> {
    let mut listeners = Vec::new();
    for question in element_list(document.query_selector_all(&selectors.faq_question)?) {
        let Some(answer) = question.next_element_sibling() else {
            log::warn!("FAQ question without an answer, skipping");
            continue;
        };
        let icon = question.query_selector("i")?;
        let entry = FaqEntry::new(answer, icon);
        listeners.push(EventListener::new(&question, "click", move |_| {
            entry.toggle();
        })?);
    }
    Ok(listeners)
}

fn wire_scroll_to_top(
    window: &Window,
    document: &Document,
    selectors: &Selectors,
    threshold: f64,
) -> Result<Vec<EventListener>, PageError> {
    let button = by_id(document, &selectors.scroll_to_top)?;
    let control = ScrollToTop::new(button.clone(), threshold);
    control.update(window.scroll_y()?);

    let on_scroll = {
        let win = window.clone();
        EventListener::new(window, "scroll", move |_| {
            if let Ok(scroll_y) = win.scroll_y() {
                control.update(scroll_y);
            }
        })?
    };
    let on_click = {
        let window = window.clone();
        EventListener::new(&button, "click", move |_| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?
    };
    Ok(vec![on_scroll, on_click])
}

fn wire_lazy_images(document: &Document, selectors: &Selectors) -> Result<Vec<EventListener>, PageError> {
    let mut listeners = Vec::new();
    for image in element_list(document.query_selector_all(&selectors.lazy_images)?) {
        let complete = image
            .dyn_ref::<HtmlImageElement>()
            .map(|img| img.complete())
            .unwrap_or(true);
        if !lazy_images::prepare(&image, complete) {
            continue;
        }
        // A broken image is revealed the same way as a loaded one.
        for event in ["load", "error"] {
            let target = image.clone();
            listeners.push(EventListener::new(&image, event, move |_| {
                lazy_images::mark_loaded(&target)
            })?);
        }
    }
    Ok(listeners)
}

fn observe_sections(
    document: &Document,
    selectors: &Selectors,
    settings: &RevealSettings,
) -> Result<Observer, PageError> {
    let observer = Observer::new(settings.threshold, Some(settings.root_margin.as_str()), |entry, observer| {
        let section = entry.target();
        if reveal::on_section_visibility(&section, entry.is_intersecting()) {
            observer.unobserve(&section);
        }
    })?;
    for section in element_list(document.query_selector_all(&selectors.sections)?) {
        observer.observe(&section);
    }
    Ok(observer)
}

fn observe_counters(
    document: &Document,
    selectors: &Selectors,
    settings: &CounterSettings,
    alive: Rc<Cell<bool>>,
) -> Result<Observer, PageError> {
    let threshold = settings.threshold;
    let settings = settings.clone();
    let observer = Observer::new(threshold, None, move |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let element = entry.target();
        // One animation per counter, whatever happens next.
        observer.unobserve(&element);

        let counter = Counter::new(element);
        match counter.begin(&settings) {
            Ok(Some(mut animation)) => {
                if counter.apply(animation.step()) {
                    run_frames(alive.clone(), move || counter.apply(animation.step()));
                }
            }
            Ok(None) => {}
            Err(e) => log::warn!("Skipping counter: {}", e),
        }
    })?;
    for counter in element_list(document.query_selector_all(&selectors.counters)?) {
        observer.observe(&counter);
    }
    Ok(observer)
}

fn start_activity(
    document: &Document,
    config: &PageConfig,
    rng: PageRng,
) -> Result<ActivitySimulator<BrowserScheduler>, PageError> {
    let elements = ActivityElements {
        downloads: by_id(document, &config.selectors.download_counter)?,
        active_users: by_id(document, &config.selectors.active_users)?,
    };
    Ok(ActivitySimulator::start(elements, &config.activity, &BrowserScheduler, rng))
}

fn start_toasts(
    document: &Document,
    config: &PageConfig,
    rng: PageRng,
) -> Result<DownloadToasts<BrowserScheduler>, PageError> {
    let selectors = &config.selectors;
    let elements = ToastElements {
        toast: by_id(document, &selectors.toast)?,
        name: by_id(document, &selectors.toast_name)?,
        location: by_id(document, &selectors.toast_location)?,
        time: by_id(document, &selectors.toast_time)?,
    };
    let content = ToastContent {
        candidates: &NOTIFICATION_CANDIDATES,
        times: &TIME_AGO,
    };
    Ok(DownloadToasts::start(
        elements,
        content,
        &config.notifications,
        &BrowserScheduler,
        rng,
    ))
}
