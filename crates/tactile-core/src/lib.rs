//! Tap, press, and active-state gesture recognition.
//!
//! `tactile-core` turns raw touch, mouse, and keyboard streams into the
//! interaction events interactive elements care about: **tap**, **press**
//! (long-hold), and the **active** visually-pressed state, while filtering
//! out accidental gestures caused by scrolling, momentum, or movement.
//! The crate owns no event loop and reads no clock: hosts feed events in,
//! implement the [`TimerDriver`] and [`ScrollAncestry`] capabilities, and
//! route elapsed timers back to the recognizer.
//!
//! ```
//! use std::rc::Rc;
//! use tactile_core::{
//!     GestureCallbacks, GestureRecognizer, ScrollAncestry, ScrollContainer, TapConfig,
//!     TimerDriver, TimerHandle, TouchEvent, TouchPoint,
//! };
//!
//! struct NeverFires;
//! impl TimerDriver for NeverFires {
//!     fn schedule(&self, _delay: std::time::Duration) -> TimerHandle {
//!         TimerHandle(0)
//!     }
//!     fn cancel(&self, _handle: TimerHandle) {}
//! }
//!
//! struct NoAncestors;
//! impl ScrollAncestry for NoAncestors {
//!     fn scroll_chain(&self) -> Vec<Rc<dyn ScrollContainer>> {
//!         Vec::new()
//!     }
//! }
//!
//! let mut recognizer = GestureRecognizer::new(
//!     TapConfig::default(),
//!     Rc::new(NeverFires),
//!     Rc::new(NoAncestors),
//! )
//! .with_callbacks(GestureCallbacks::new().on_tap(|_| println!("tap")));
//!
//! recognizer.touch_start(&TouchEvent::single(TouchPoint::at(10.0, 10.0)));
//! recognizer.touch_end(&TouchEvent::lift(TouchPoint::at(12.0, 11.0)));
//! assert!(!recognizer.is_active());
//! ```

pub mod callbacks;
pub mod config;
pub mod coordinator;
pub mod event;
pub mod recognizer;
pub mod scroll;
pub mod timer;

pub use callbacks::{GestureCallbacks, PinchDelegate};
pub use config::{
    TapConfig, DEFAULT_ACTIVE_DELAY, DEFAULT_MOVE_THRESHOLD, DEFAULT_PRESS_DELAY,
    DEFAULT_PRESS_MOVE_THRESHOLD, DEFAULT_TOUCH_SETTLE_TIMEOUT,
};
pub use coordinator::PointerCoordinator;
pub use event::{EventEffects, InputEvent, KeyCode, KeyEvent, MouseEvent, TouchEvent, TouchPoint};
pub use recognizer::GestureRecognizer;
pub use scroll::{Extent, ScrollAncestry, ScrollContainer, ScrollOffset};
pub use timer::{TimerDriver, TimerHandle};

pub mod prelude {
    pub use crate::callbacks::{GestureCallbacks, PinchDelegate};
    pub use crate::config::TapConfig;
    pub use crate::coordinator::PointerCoordinator;
    pub use crate::event::{
        EventEffects, InputEvent, KeyCode, KeyEvent, MouseEvent, TouchEvent, TouchPoint,
    };
    pub use crate::recognizer::GestureRecognizer;
    pub use crate::scroll::{Extent, ScrollAncestry, ScrollContainer, ScrollOffset};
    pub use crate::timer::{TimerDriver, TimerHandle};
}
