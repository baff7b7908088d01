//! Host timer capability.
//!
//! The recognizer never sleeps or reads a clock; it asks the host to schedule
//! one-shot timers and the host calls [`GestureRecognizer::timer_fired`] when
//! one elapses. The recognizer validates every fire against the handle it is
//! still waiting on, so a late fire for a cancelled or superseded timer is a
//! no-op even if the host's cancellation was best-effort.
//!
//! [`GestureRecognizer::timer_fired`]: crate::recognizer::GestureRecognizer::timer_fired

use std::time::Duration;

/// Identifier for one scheduled timer, issued by the host.
///
/// Handles must be unique among the timers a driver currently has pending;
/// reusing a handle while an earlier timer with the same value could still
/// fire defeats the recognizer's staleness checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// Schedules one-shot timers on behalf of the recognizer.
///
/// Implementations route elapsed timers back to the recognizer however the
/// host loop works (task queue, frame callback, test clock). `cancel` is
/// best-effort: the recognizer tolerates fires for cancelled handles.
pub trait TimerDriver {
    /// Schedule a one-shot timer and return its handle.
    fn schedule(&self, delay: Duration) -> TimerHandle;

    /// Cancel a pending timer. Cancelling an already-fired or unknown
    /// handle is allowed and does nothing.
    fn cancel(&self, handle: TimerHandle);
}
