/// Where the page stands between script start and teardown.
///
/// `W` is whatever keeps a deferred mount armed (the `DOMContentLoaded`
/// listener in the browser), `P` is the mounted page. Teardown clears both,
/// so a page that was still waiting for the document never mounts.
pub struct Lifecycle<W, P> {
    waiting: Option<W>,
    page: Option<P>,
}

impl<W, P> Default for Lifecycle<W, P> {
    fn default() -> Self {
        Self {
            waiting: None,
            page: None,
        }
    }
}

impl<W, P> Lifecycle<W, P> {
    pub fn wait(&mut self, waiter: W) {
        self.waiting = Some(waiter);
    }

    /// Called when the document is ready. Returns the waiter if a deferred
    /// mount is still wanted, `None` after teardown.
    pub fn ready(&mut self) -> Option<W> {
        self.waiting.take()
    }

    pub fn mounted(&mut self, page: P) {
        self.page = Some(page);
    }

    pub fn is_active(&self) -> bool {
        self.waiting.is_some() || self.page.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct DropFlag(Rc<Cell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn teardown_before_ready_cancels_deferred_mount() {
        let mut lifecycle: Lifecycle<(), DropFlag> = Lifecycle::default();
        lifecycle.wait(());
        assert!(lifecycle.is_active());

        let previous = std::mem::take(&mut lifecycle);
        assert!(previous.is_active());
        drop(previous);

        assert!(lifecycle.ready().is_none());
        assert!(!lifecycle.is_active());
    }

    #[test]
    fn ready_fires_once() {
        let mut lifecycle: Lifecycle<u8, DropFlag> = Lifecycle::default();
        lifecycle.wait(7);
        assert_eq!(lifecycle.ready(), Some(7));
        assert_eq!(lifecycle.ready(), None);
    }

    #[test]
    fn teardown_drops_mounted_page() {
        let dropped = Rc::new(Cell::new(false));
        let mut lifecycle: Lifecycle<(), DropFlag> = Lifecycle::default();
        lifecycle.mounted(DropFlag(dropped.clone()));
        assert!(!dropped.get());

        drop(std::mem::take(&mut lifecycle));
        assert!(dropped.get());
        assert!(!lifecycle.is_active());
    }
}
