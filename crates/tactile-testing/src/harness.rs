//! Robot-style harness around one recognizer.
//!
//! A [`GestureRobot`] owns a recognizer, a [`ManualTimerDriver`], and a
//! [`CallbackLog`], and exposes scripted input so tests read as interaction
//! scripts:
//!
//! ```
//! use tactile_core::TapConfig;
//! use tactile_testing::{CallbackRecord, GestureRobot};
//!
//! let mut robot = GestureRobot::new(TapConfig::default());
//! robot.touch_down(100.0, 100.0);
//! robot.touch_up_at(104.0, 102.0);
//! assert!(robot.log().contains(CallbackRecord::Tap));
//! ```

use crate::recording::{recording_callbacks, CallbackLog};
use crate::surface::ScriptedAncestry;
use crate::timers::ManualTimerDriver;
use std::rc::Rc;
use std::time::Duration;
use tactile_core::{
    GestureRecognizer, KeyCode, KeyEvent, MouseEvent, ScrollAncestry, TapConfig, TouchEvent,
    TouchPoint,
};

/// Drives one recognizer with scripted input and a manual clock.
pub struct GestureRobot {
    recognizer: GestureRecognizer,
    timers: Rc<ManualTimerDriver>,
    log: CallbackLog,
}

impl GestureRobot {
    /// Robot over an element with no scrollable ancestors.
    pub fn new(config: TapConfig) -> Self {
        Self::with_ancestry(config, ScriptedAncestry::new())
    }

    /// Robot over an element inside the given ancestor chain.
    pub fn with_ancestry(config: TapConfig, ancestry: Rc<dyn ScrollAncestry>) -> Self {
        let timers = ManualTimerDriver::new();
        let log = CallbackLog::new();
        let recognizer = GestureRecognizer::new(config, timers.clone(), ancestry)
            .with_callbacks(recording_callbacks(&log));
        Self {
            recognizer,
            timers,
            log,
        }
    }

    /// Direct access for calls the scripted surface does not cover.
    pub fn recognizer(&mut self) -> &mut GestureRecognizer {
        &mut self.recognizer
    }

    pub fn log(&self) -> &CallbackLog {
        &self.log
    }

    pub fn timers(&self) -> &Rc<ManualTimerDriver> {
        &self.timers
    }

    pub fn is_active(&self) -> bool {
        self.recognizer.is_active()
    }

    // ----- scripted input -----

    pub fn touch_down(&mut self, x: f32, y: f32) {
        let event = TouchEvent::single(TouchPoint::at(x, y));
        self.recognizer.touch_start(&event);
    }

    pub fn touch_move_to(&mut self, x: f32, y: f32) {
        let event = TouchEvent::single(TouchPoint::at(x, y));
        self.recognizer.touch_move(&event);
    }

    pub fn touch_up_at(&mut self, x: f32, y: f32) {
        let event = TouchEvent::lift(TouchPoint::at(x, y));
        self.recognizer.touch_end(&event);
    }

    pub fn mouse_down(&mut self) {
        self.recognizer.mouse_down(&MouseEvent::new());
    }

    pub fn mouse_move(&mut self) {
        self.recognizer.mouse_move(&MouseEvent::new());
    }

    pub fn mouse_up(&mut self) {
        self.recognizer.mouse_up(&MouseEvent::new());
    }

    pub fn mouse_out(&mut self) {
        self.recognizer.mouse_out(&MouseEvent::new());
    }

    /// Full click: down then up.
    pub fn mouse_click(&mut self) {
        self.mouse_down();
        self.mouse_up();
    }

    pub fn key_down(&mut self, key: KeyCode) {
        self.recognizer.key_down(&KeyEvent::new(key));
    }

    pub fn key_up(&mut self, key: KeyCode) {
        self.recognizer.key_up(&KeyEvent::new(key));
    }

    /// Full keyboard activation: down then up.
    pub fn key_tap(&mut self, key: KeyCode) {
        self.key_down(key);
        self.key_up(key);
    }

    // ----- time -----

    /// Advance the clock and pump every timer that comes due, in deadline
    /// order, back into the recognizer.
    pub fn advance(&mut self, delta: Duration) {
        self.timers.advance(delta);
        while let Some(handle) = self.timers.pop_due() {
            log::trace!("robot firing due timer {:?} at {:?}", handle, self.timers.now());
            self.recognizer.timer_fired(handle);
        }
    }

    pub fn advance_ms(&mut self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::CallbackRecord;

    #[test]
    fn scripted_tap_records_expected_sequence() {
        let mut robot = GestureRobot::new(TapConfig::default());
        robot.touch_down(50.0, 50.0);
        assert!(robot.is_active());
        robot.touch_up_at(52.0, 50.0);
        assert!(!robot.is_active());
        assert_eq!(
            robot.log().records(),
            vec![
                CallbackRecord::TouchStart,
                CallbackRecord::Reactivate,
                CallbackRecord::TouchEnd,
                CallbackRecord::Tap,
                CallbackRecord::Deactivate,
            ]
        );
    }

    #[test]
    fn advance_fires_press_through_the_recognizer() {
        let mut robot = GestureRobot::new(TapConfig::default());
        robot.touch_down(10.0, 10.0);
        robot.advance_ms(1000);
        assert!(robot.log().contains(CallbackRecord::Press));
        assert!(!robot.is_active());
    }
}
