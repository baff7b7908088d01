//! Callback recording for exact-sequence assertions.
//!
//! [`recording_callbacks`] wires every recognizer slot to push a
//! [`CallbackRecord`] into a shared [`CallbackLog`]; tests then assert on
//! the full fired sequence instead of sprinkling counters per callback.

use std::cell::RefCell;
use std::rc::Rc;
use tactile_core::GestureCallbacks;

/// One fired callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackRecord {
    Tap,
    Press,
    Deactivate,
    Reactivate,
    TouchStart,
    TouchMove,
    TouchEnd,
    MouseDown,
    MouseMove,
    MouseUp,
    MouseOut,
    KeyDown,
    KeyUp,
}

/// Shared, cloneable record of every callback fired so far.
#[derive(Clone, Default)]
pub struct CallbackLog {
    records: Rc<RefCell<Vec<CallbackRecord>>>,
}

impl CallbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, record: CallbackRecord) {
        self.records.borrow_mut().push(record);
    }

    /// Snapshot of the fired sequence.
    pub fn records(&self) -> Vec<CallbackRecord> {
        self.records.borrow().clone()
    }

    /// Snapshot and clear, for staged assertions.
    pub fn take(&self) -> Vec<CallbackRecord> {
        std::mem::take(&mut *self.records.borrow_mut())
    }

    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }

    pub fn count(&self, record: CallbackRecord) -> usize {
        self.records.borrow().iter().filter(|r| **r == record).count()
    }

    pub fn contains(&self, record: CallbackRecord) -> bool {
        self.count(record) > 0
    }
}

/// Callbacks with every slot recording into `log`. The vetoing slots record
/// and then let the gesture proceed; override a slot after this call to test
/// veto behavior.
pub fn recording_callbacks(log: &CallbackLog) -> GestureCallbacks {
    let with = |record: CallbackRecord| {
        let log = log.clone();
        move || log.push(record)
    };

    let tap = with(CallbackRecord::Tap);
    let press = with(CallbackRecord::Press);
    let deactivate = with(CallbackRecord::Deactivate);
    let reactivate = with(CallbackRecord::Reactivate);
    let touch_start = with(CallbackRecord::TouchStart);
    let touch_move = with(CallbackRecord::TouchMove);
    let touch_end = with(CallbackRecord::TouchEnd);
    let mouse_down = with(CallbackRecord::MouseDown);
    let mouse_move = with(CallbackRecord::MouseMove);
    let mouse_up = with(CallbackRecord::MouseUp);
    let mouse_out = with(CallbackRecord::MouseOut);
    let key_down = with(CallbackRecord::KeyDown);
    let key_up = with(CallbackRecord::KeyUp);

    GestureCallbacks::new()
        .on_tap(move |_| tap())
        .on_press(move |_| press())
        .on_deactivate(move || deactivate())
        .on_reactivate(move || reactivate())
        .on_touch_start(move |_| {
            touch_start();
            true
        })
        .on_touch_move(move |_| touch_move())
        .on_touch_end(move |_| touch_end())
        .on_mouse_down(move |_| {
            mouse_down();
            true
        })
        .on_mouse_move(move |_| mouse_move())
        .on_mouse_up(move |_| mouse_up())
        .on_mouse_out(move |_| mouse_out())
        .on_key_down(move |_| {
            key_down();
            true
        })
        .on_key_up(move |_| key_up())
}
