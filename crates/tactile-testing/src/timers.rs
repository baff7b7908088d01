//! Deterministic timer driver for tests.
//!
//! Real hosts schedule timers on an event loop; tests instead advance a
//! manual clock and pump due handles back into the recognizer themselves.
//! Pending entries keep insertion order (`IndexMap`), so two timers due at
//! the same instant fire in the order they were scheduled.

use indexmap::IndexMap;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use tactile_core::{TimerDriver, TimerHandle};

/// Hand-cranked [`TimerDriver`]: timers fire only when the test advances the
/// clock and pops them.
pub struct ManualTimerDriver {
    now: Cell<Duration>,
    next_handle: Cell<u64>,
    pending: RefCell<IndexMap<TimerHandle, Duration>>,
}

impl ManualTimerDriver {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            now: Cell::new(Duration::ZERO),
            next_handle: Cell::new(1),
            pending: RefCell::new(IndexMap::new()),
        })
    }

    /// Current clock reading.
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Move the clock forward. Nothing fires until [`Self::pop_due`] is
    /// called; drivers stay recognizer-agnostic.
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }

    /// Remove and return the earliest timer due at the current clock, if
    /// any. Equal deadlines pop in scheduling order.
    pub fn pop_due(&self) -> Option<TimerHandle> {
        let now = self.now.get();
        let mut pending = self.pending.borrow_mut();
        // Manual scan: entries iterate in scheduling order, and only a
        // strictly earlier deadline replaces the candidate, so ties keep
        // the first-scheduled entry.
        let mut best: Option<(TimerHandle, Duration)> = None;
        for (handle, deadline) in pending.iter() {
            if *deadline > now {
                continue;
            }
            let earlier = match best {
                Some((_, best_deadline)) => *deadline < best_deadline,
                None => true,
            };
            if earlier {
                best = Some((*handle, *deadline));
            }
        }
        let handle = best.map(|(handle, _)| handle)?;
        pending.shift_remove(&handle);
        Some(handle)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.borrow().contains_key(&handle)
    }
}

impl TimerDriver for ManualTimerDriver {
    fn schedule(&self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_handle.get());
        self.next_handle.set(handle.0 + 1);
        self.pending
            .borrow_mut()
            .insert(handle, self.now.get() + delay);
        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        self.pending.borrow_mut().shift_remove(&handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_fire_in_deadline_order() {
        let driver = ManualTimerDriver::new();
        let slow = driver.schedule(Duration::from_millis(100));
        let fast = driver.schedule(Duration::from_millis(10));

        driver.advance(Duration::from_millis(5));
        assert_eq!(driver.pop_due(), None);

        driver.advance(Duration::from_millis(100));
        assert_eq!(driver.pop_due(), Some(fast));
        assert_eq!(driver.pop_due(), Some(slow));
        assert_eq!(driver.pop_due(), None);
    }

    #[test]
    fn equal_deadlines_pop_in_scheduling_order() {
        let driver = ManualTimerDriver::new();
        let first = driver.schedule(Duration::from_millis(50));
        let second = driver.schedule(Duration::from_millis(50));

        driver.advance(Duration::from_millis(50));
        assert_eq!(driver.pop_due(), Some(first));
        assert_eq!(driver.pop_due(), Some(second));
    }

    #[test]
    fn cancelled_timers_never_pop() {
        let driver = ManualTimerDriver::new();
        let handle = driver.schedule(Duration::from_millis(10));
        assert!(driver.is_pending(handle));

        driver.cancel(handle);
        assert!(!driver.is_pending(handle));
        driver.advance(Duration::from_millis(20));
        assert_eq!(driver.pop_due(), None);
    }

    #[test]
    fn cancelling_unknown_handles_is_harmless() {
        let driver = ManualTimerDriver::new();
        driver.cancel(TimerHandle(999));
        assert_eq!(driver.pending_count(), 0);
    }
}
