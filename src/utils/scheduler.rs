use gloo_timers::callback::{Interval, Timeout};

/// Source of timer callbacks.
///
/// Handles cancel their timer when dropped, so whoever keeps the handle
/// decides how long the task lives.
pub trait Scheduler: Clone + 'static {
    type Handle: 'static;

    fn timeout(&self, millis: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
    fn interval(&self, millis: u32, task: Box<dyn FnMut()>) -> Self::Handle;
}

/// `setTimeout`/`setInterval` through gloo.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

pub enum TimerHandle {
    Timeout(Timeout),
    Interval(Interval),
}

impl Scheduler for BrowserScheduler {
    type Handle = TimerHandle;

    fn timeout(&self, millis: u32, task: Box<dyn FnOnce()>) -> TimerHandle {
        TimerHandle::Timeout(Timeout::new(millis, task))
    }

    fn interval(&self, millis: u32, mut task: Box<dyn FnMut()>) -> TimerHandle {
        TimerHandle::Interval(Interval::new(millis, move || task()))
    }
}
