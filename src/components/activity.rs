use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;

use crate::config::ActivitySettings;
use crate::utils::dom::Element;
use crate::utils::format::{group_thousands, FR_GROUP_SEPARATOR};
use crate::utils::scheduler::Scheduler;

pub const PULSE_CLASS: &str = "animate-pulse";

/// Download total and live-visitor count shown in the hero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityState {
    downloads: u64,
    active_users: u32,
}

impl ActivityState {
    pub fn new(settings: &ActivitySettings) -> Self {
        Self {
            downloads: settings.initial_downloads,
            active_users: settings
                .initial_active_users
                .clamp(settings.users_min, settings.users_max.max(settings.users_min)),
        }
    }

    pub fn downloads(&self) -> u64 {
        self.downloads
    }

    pub fn active_users(&self) -> u32 {
        self.active_users
    }

    pub fn record_downloads<R: Rng + ?Sized>(&mut self, settings: &ActivitySettings, rng: &mut R) -> u64 {
        let (min, max) = settings.download_step;
        self.downloads += rng.gen_range(min..=max.max(min));
        self.downloads
    }

    /// Nudges the visitor count up or down, staying inside the configured band.
    pub fn drift_active_users<R: Rng + ?Sized>(&mut self, settings: &ActivitySettings, rng: &mut R) -> u32 {
        let drift = i64::from(settings.users_max_drift);
        let variation = rng.gen_range(-drift..=drift);
        let min = i64::from(settings.users_min);
        let max = i64::from(settings.users_max).max(min);
        self.active_users = (i64::from(self.active_users) + variation).clamp(min, max) as u32;
        self.active_users
    }
}

pub struct ActivityElements<E> {
    pub downloads: E,
    pub active_users: E,
}

/// Ticks the fake activity numbers on their own timers until dropped.
pub struct ActivitySimulator<S: Scheduler> {
    state: Rc<RefCell<ActivityState>>,
    _timers: Vec<S::Handle>,
    pulse: Rc<RefCell<Option<S::Handle>>>,
}

impl<S: Scheduler> ActivitySimulator<S> {
    pub fn start<E, R>(
        elements: ActivityElements<E>,
        settings: &ActivitySettings,
        scheduler: &S,
        rng: Rc<RefCell<R>>,
    ) -> Self
    where
        E: Element,
        R: Rng + 'static,
    {
        let state = Rc::new(RefCell::new(ActivityState::new(settings)));
        let pulse: Rc<RefCell<Option<S::Handle>>> = Rc::new(RefCell::new(None));

        let (download_period, users_period) = {
            let mut rng = rng.borrow_mut();
            (
                draw_period(&mut *rng, settings.download_period_ms),
                draw_period(&mut *rng, settings.users_period_ms),
            )
        };
        log::debug!(
            "Activity simulation every {}ms (downloads) and {}ms (users)",
            download_period,
            users_period
        );

        let downloads_timer = {
            let state = state.clone();
            let pulse = pulse.clone();
            let rng = rng.clone();
            let settings = settings.clone();
            let scheduler_for_pulse = scheduler.clone();
            let counter = elements.downloads;
            scheduler.interval(
                download_period,
                Box::new(move || {
                    let total = state
                        .borrow_mut()
                        .record_downloads(&settings, &mut *rng.borrow_mut());
                    counter.set_text(&group_thousands(total, FR_GROUP_SEPARATOR));

                    if let Some(container) = counter.parent() {
                        container.add_class(PULSE_CLASS);
                        let handle = scheduler_for_pulse.timeout(
                            settings.pulse_ms,
                            Box::new(move || container.remove_class(PULSE_CLASS)),
                        );
                        // Replacing the slot cancels a pulse still pending.
                        *pulse.borrow_mut() = Some(handle);
                    }
                }),
            )
        };

        let users_timer = {
            let state = state.clone();
            let settings = settings.clone();
            let label = elements.active_users;
            scheduler.interval(
                users_period,
                Box::new(move || {
                    let users = state
                        .borrow_mut()
                        .drift_active_users(&settings, &mut *rng.borrow_mut());
                    label.set_text(&users.to_string());
                }),
            )
        };

        Self {
            state,
            _timers: vec![downloads_timer, users_timer],
            pulse,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> ActivityState {
        self.state.borrow().clone()
    }
}

impl<S: Scheduler> Drop for ActivitySimulator<S> {
    fn drop(&mut self) {
        self.pulse.borrow_mut().take();
        log::debug!(
            "Activity simulation stopped at {} downloads",
            self.state.borrow().downloads
        );
    }
}

/// Picks a timer period from the half-open range `[min, max)`.
pub fn draw_period<R: Rng + ?Sized>(rng: &mut R, (min, max): (u32, u32)) -> u32 {
    if max <= min {
        min
    } else {
        rng.gen_range(min..max)
    }
}
