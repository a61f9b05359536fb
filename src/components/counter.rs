use crate::config::CounterSettings;
use crate::error::PageError;
use crate::utils::dom::Element;

pub const COUNTED_CLASS: &str = "counted";
pub const TARGET_ATTRIBUTE: &str = "data-target";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterFrame {
    Running(u64),
    Finished(u64),
}

/// Counts from 0 to `target` in equal per-frame steps.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: u64, settings: &CounterSettings) -> Self {
        let frames = settings.duration_ms / settings.frame_ms;
        // Degenerate timings jump straight to the target.
        let frames = if frames.is_finite() && frames >= 1.0 { frames } else { 1.0 };
        Self {
            target,
            increment: target as f64 / frames,
            current: 0.0,
        }
    }

    pub fn step(&mut self) -> CounterFrame {
        self.current += self.increment;
        if self.current < self.target as f64 {
            CounterFrame::Running(self.current.floor() as u64)
        } else {
            CounterFrame::Finished(self.target)
        }
    }
}

/// A stat element that counts up to its `data-target` once.
#[derive(Clone)]
pub struct Counter<E> {
    element: E,
}

impl<E: Element> Counter<E> {
    pub fn new(element: E) -> Self {
        Self { element }
    }

    pub fn target(&self) -> Result<u64, PageError> {
        let raw = self.element.attribute(TARGET_ATTRIBUTE).unwrap_or_default();
        raw.trim()
            .parse()
            .map_err(|_| PageError::InvalidCounterTarget(raw))
    }

    /// Starts the animation unless this counter already finished one.
    pub fn begin(&self, settings: &CounterSettings) -> Result<Option<CounterAnimation>, PageError> {
        if self.element.has_class(COUNTED_CLASS) {
            return Ok(None);
        }
        Ok(Some(CounterAnimation::new(self.target()?, settings)))
    }

    /// Shows `frame`. Returns `true` while more frames are needed.
    pub fn apply(&self, frame: CounterFrame) -> bool {
        match frame {
            CounterFrame::Running(value) => {
                self.element.set_text(&value.to_string());
                true
            }
            CounterFrame::Finished(target) => {
                self.element.set_text(&target.to_string());
                self.element.add_class(COUNTED_CLASS);
                false
            }
        }
    }
}
