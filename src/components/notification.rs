use std::cell::RefCell;
use std::rc::Rc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::activity::draw_period;
use crate::components::visibility::set_shown;
use crate::config::NotificationSettings;
use crate::data::NotificationCandidate;
use crate::utils::dom::Element;
use crate::utils::scheduler::Scheduler;

#[derive(Clone)]
pub struct ToastElements<E> {
    pub toast: E,
    pub name: E,
    pub location: E,
    pub time: E,
}

/// Content pools a toast draws from.
#[derive(Debug, Clone, Copy)]
pub struct ToastContent {
    pub candidates: &'static [NotificationCandidate],
    pub times: &'static [&'static str],
}

/// "Someone just downloaded the guide" toast, shown on a timer until dropped.
pub struct DownloadToasts<S: Scheduler> {
    _timers: Vec<S::Handle>,
    hide: Rc<RefCell<Option<S::Handle>>>,
}

impl<S: Scheduler> DownloadToasts<S> {
    pub fn start<E, R>(
        elements: ToastElements<E>,
        content: ToastContent,
        settings: &NotificationSettings,
        scheduler: &S,
        rng: Rc<RefCell<R>>,
    ) -> Self
    where
        E: Element,
        R: Rng + 'static,
    {
        let hide: Rc<RefCell<Option<S::Handle>>> = Rc::new(RefCell::new(None));
        let period = draw_period(&mut *rng.borrow_mut(), settings.period_ms);
        log::debug!(
            "Download toast after {}ms, then every {}ms",
            settings.first_delay_ms,
            period
        );

        let show: Rc<dyn Fn()> = {
            let hide = hide.clone();
            let scheduler = scheduler.clone();
            let visible_ms = settings.visible_ms;
            Rc::new(move || {
                let picked = {
                    let mut rng = rng.borrow_mut();
                    (
                        content.candidates.choose(&mut *rng).copied(),
                        content.times.choose(&mut *rng).copied(),
                    )
                };
                let (Some(person), Some(time)) = picked else {
                    log::warn!("No toast content to show");
                    return;
                };
                show_toast(&elements, &person, time);

                let toast = elements.toast.clone();
                let handle = scheduler.timeout(visible_ms, Box::new(move || set_shown(&toast, false)));
                // A newer toast restarts the hide countdown.
                *hide.borrow_mut() = Some(handle);
            })
        };

        let first = {
            let show = show.clone();
            scheduler.timeout(settings.first_delay_ms, Box::new(move || show()))
        };
        let repeat = scheduler.interval(period, Box::new(move || show()));

        Self {
            _timers: vec![first, repeat],
            hide,
        }
    }
}

impl<S: Scheduler> Drop for DownloadToasts<S> {
    fn drop(&mut self) {
        self.hide.borrow_mut().take();
    }
}

pub fn show_toast<E: Element>(elements: &ToastElements<E>, person: &NotificationCandidate, time: &str) {
    elements.name.set_text(person.name);
    elements.location.set_text(person.location);
    elements.time.set_text(time);
    set_shown(&elements.toast, true);
}
