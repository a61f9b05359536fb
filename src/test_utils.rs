//! In-memory stand-ins for the DOM and browser timers.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::utils::dom::Element;
use crate::utils::scheduler::Scheduler;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeChild {
    pub tag: String,
    pub class: String,
    pub inner_html: String,
}

#[derive(Default)]
struct FakeNode {
    classes: Vec<String>,
    text: String,
    styles: HashMap<String, String>,
    attributes: HashMap<String, String>,
    children: Vec<FakeChild>,
    parent: Option<FakeElement>,
}

#[derive(Clone, Default)]
pub struct FakeElement(Rc<RefCell<FakeNode>>);

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes(classes: &[&str]) -> Self {
        let element = Self::new();
        for class in classes {
            element.add_class(class);
        }
        element
    }

    pub fn with_parent(parent: &FakeElement) -> Self {
        let element = Self::new();
        element.0.borrow_mut().parent = Some(parent.clone());
        element
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn children(&self) -> Vec<FakeChild> {
        self.0.borrow().children.clone()
    }
}

impl Element for FakeElement {
    fn add_class(&self, class: &str) {
        let mut node = self.0.borrow_mut();
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn set_style(&self, property: &str, value: &str) {
        let mut node = self.0.borrow_mut();
        if value.is_empty() {
            node.styles.remove(property);
        } else {
            node.styles.insert(property.to_string(), value.to_string());
        }
    }

    fn style(&self, property: &str) -> String {
        self.0.borrow().styles.get(property).cloned().unwrap_or_default()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.clone()
    }

    fn append_html(&self, tag: &str, class: &str, inner_html: &str) {
        self.0.borrow_mut().children.push(FakeChild {
            tag: tag.to_string(),
            class: class.to_string(),
            inner_html: inner_html.to_string(),
        });
    }
}

enum Task {
    Once(Box<dyn FnOnce()>),
    Repeat(Box<dyn FnMut()>, u64),
}

struct Entry {
    due: u64,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    task: Task,
}

#[derive(Default)]
struct Clock {
    now: u64,
    seq: u64,
    entries: Vec<Entry>,
}

/// Virtual clock. Nothing runs until [`ManualScheduler::advance`] is called.
#[derive(Clone, Default)]
pub struct ManualScheduler(Rc<RefCell<Clock>>);

/// Cancels its task on drop, like a gloo timer.
pub struct ManualHandle(Rc<Cell<bool>>);

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timers that are still armed.
    pub fn pending(&self) -> usize {
        self.0
            .borrow()
            .entries
            .iter()
            .filter(|e| !e.cancelled.get())
            .count()
    }

    /// Moves the clock forward, firing due tasks in deadline order.
    pub fn advance(&self, millis: u64) {
        let target = self.0.borrow().now + millis;
        loop {
            let next = {
                let mut clock = self.0.borrow_mut();
                clock.entries.retain(|e| !e.cancelled.get());
                let index = clock
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.due <= target)
                    .min_by_key(|(_, e)| (e.due, e.seq))
                    .map(|(i, _)| i);
                index.map(|i| {
                    let entry = clock.entries.remove(i);
                    clock.now = entry.due;
                    entry
                })
            };
            let Some(entry) = next else {
                break;
            };
            match entry.task {
                Task::Once(task) => task(),
                Task::Repeat(mut task, period) => {
                    task();
                    if !entry.cancelled.get() {
                        let mut clock = self.0.borrow_mut();
                        let seq = clock.seq;
                        clock.seq += 1;
                        clock.entries.push(Entry {
                            due: entry.due + period.max(1),
                            seq,
                            cancelled: entry.cancelled,
                            task: Task::Repeat(task, period),
                        });
                    }
                }
            }
        }
        self.0.borrow_mut().now = target;
    }

    fn push(&self, millis: u32, task: Task) -> ManualHandle {
        let cancelled = Rc::new(Cell::new(false));
        let mut clock = self.0.borrow_mut();
        let seq = clock.seq;
        clock.seq += 1;
        let due = clock.now + u64::from(millis);
        clock.entries.push(Entry {
            due,
            seq,
            cancelled: cancelled.clone(),
            task,
        });
        ManualHandle(cancelled)
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn timeout(&self, millis: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
        self.push(millis, Task::Once(task))
    }

    fn interval(&self, millis: u32, task: Box<dyn FnMut()>) -> ManualHandle {
        self.push(millis, Task::Repeat(task, u64::from(millis)))
    }
}
