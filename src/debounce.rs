//! Trailing-edge debounce on the glib main loop.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gtk::glib;

/// Holds at most one pending timeout. Each `feed` cancels the previous
/// timeout and schedules a fresh one, so only the last action fires, and only
/// after the input has been quiet for the full delay.
pub struct Debouncer {
    delay: Duration,
    pending: Rc<RefCell<Option<glib::SourceId>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn feed<F: FnOnce() + 'static>(&self, action: F) {
        self.cancel();
        let pending = Rc::clone(&self.pending);
        let id = glib::timeout_add_local_once(self.delay, move || {
            // The source is finished once this runs; forget it before the
            // action so a re-feed from inside the action starts clean.
            pending.borrow_mut().take();
            action();
        });
        *self.pending.borrow_mut() = Some(id);
    }

    /// Discard any scheduled action without running it. Called on every new
    /// keystroke (via `feed`) and on teardown, so a dangling callback can
    /// never touch widgets that are already gone.
    pub fn cancel(&self) {
        if let Some(id) = self.pending.borrow_mut().take() {
            id.remove();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    // Single test so only one thread drives the default main context.
    #[test]
    fn fires_once_with_last_value_and_cancels_cleanly() {
        let ctx = glib::MainContext::default();
        let _guard = ctx.acquire().expect("owning the default main context");

        let fired: Rc<RefCell<Vec<&str>>> = Rc::new(RefCell::new(Vec::new()));
        let debouncer = Debouncer::new(Duration::from_millis(30));

        // Three rapid feeds inside the delay window: only "sam" survives,
        // and not before the full delay has elapsed since the last feed.
        let started = Instant::now();
        for value in ["s", "sa", "sam"] {
            let fired = Rc::clone(&fired);
            debouncer.feed(move || fired.borrow_mut().push(value));
        }
        let deadline = started + Duration::from_secs(2);
        while fired.borrow().is_empty() && Instant::now() < deadline {
            ctx.iteration(true);
        }
        assert_eq!(*fired.borrow(), vec!["sam"]);
        assert!(started.elapsed() >= Duration::from_millis(30));

        // A cancelled feed never fires.
        {
            let fired = Rc::clone(&fired);
            debouncer.feed(move || fired.borrow_mut().push("late"));
        }
        debouncer.cancel();
        let settle = Instant::now() + Duration::from_millis(120);
        while Instant::now() < settle {
            ctx.iteration(false);
        }
        assert_eq!(*fired.borrow(), vec!["sam"]);

        // Dropping with a pending action discards it too.
        {
            let fired = Rc::clone(&fired);
            debouncer.feed(move || fired.borrow_mut().push("after drop"));
        }
        drop(debouncer);
        let settle = Instant::now() + Duration::from_millis(120);
        while Instant::now() < settle {
            ctx.iteration(false);
        }
        assert_eq!(*fired.borrow(), vec!["sam"]);
    }
}
