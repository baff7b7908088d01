//! Testing utilities and harness for Tactile
//!
//! Everything a deterministic gesture test needs:
//! - [`ManualTimerDriver`]: hand-cranked clock standing in for the host's
//!   timer scheduling
//! - [`ScriptedScrollContainer`] / [`ScriptedAncestry`]: scroll surfaces
//!   tests can move mid-gesture
//! - [`CallbackLog`] / [`recording_callbacks`]: exact-sequence records of
//!   fired callbacks
//! - [`GestureRobot`]: all of the above behind one scripted-input facade

pub mod harness;
pub mod recording;
pub mod surface;
pub mod timers;

pub use harness::GestureRobot;
pub use recording::{recording_callbacks, CallbackLog, CallbackRecord};
pub use surface::{ScriptedAncestry, ScriptedScrollContainer};
pub use timers::ManualTimerDriver;

pub mod prelude {
    pub use crate::harness::GestureRobot;
    pub use crate::recording::{recording_callbacks, CallbackLog, CallbackRecord};
    pub use crate::surface::{ScriptedAncestry, ScriptedScrollContainer};
    pub use crate::timers::ManualTimerDriver;
}
