//! The tap/press gesture state machine.
//!
//! One [`GestureRecognizer`] serves one interactive element. Hosts feed it
//! normalized events through the named handler methods and route elapsed
//! timers back through [`GestureRecognizer::timer_fired`]; the recognizer
//! classifies the stream into tap, press, and active-state outcomes.
//!
//! # Gesture flow (touch)
//!
//! 1. `touch_start` with one contact opens a session: movement baselines and
//!    scroll baselines are captured, press detection arms, the active state
//!    engages (immediately or after `active_delay`).
//! 2. `touch_move` cancels on scrolling, arms the settle heuristic on the
//!    first move, and applies the movement thresholds.
//! 3. `touch_end` decides the tap: within the movement radius, and only if
//!    no scrollable ancestor moved during the touch (momentum check).
//!
//! Mouse and keyboard streams run reduced versions of the same session with
//! their own engagement flags and cancel rules.

use crate::callbacks::{GestureCallbacks, PinchDelegate};
use crate::config::TapConfig;
use crate::coordinator::PointerCoordinator;
use crate::event::{EventEffects, InputEvent, KeyEvent, MouseEvent, TouchEvent, TouchPoint};
use crate::scroll::{ScrollAncestry, ScrollAnchor};
use crate::timer::{TimerDriver, TimerHandle};
use log::{debug, trace};
use std::rc::Rc;
use std::time::Duration;

/// Which end routine runs after a press fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Modality {
    Touch,
    Mouse,
    Key,
}

/// Armed press detection: the timer, the event snapshot to deliver, and the
/// modality whose session ends when it fires.
struct PendingPress {
    handle: TimerHandle,
    event: InputEvent,
    ends: Modality,
}

/// Classifies touch, mouse, and keyboard streams into taps, presses, and
/// active-state transitions for one element.
///
/// Single-threaded and cooperative: handlers run to completion, timers are
/// scheduled through the host's [`TimerDriver`] and re-enter through
/// [`GestureRecognizer::timer_fired`]. At most one modality is engaged at a
/// time; events for a modality that is not engaged are ignored.
pub struct GestureRecognizer {
    config: TapConfig,
    callbacks: GestureCallbacks,
    timers: Rc<dyn TimerDriver>,
    ancestry: Rc<dyn ScrollAncestry>,
    coordinator: PointerCoordinator,
    pinch: Option<Rc<dyn PinchDelegate>>,

    active: bool,
    initial_touch: Option<TouchPoint>,
    last_touch: Option<TouchPoint>,
    scroll_anchor: Option<ScrollAnchor>,
    active_timer: Option<TimerHandle>,
    settle_timer: Option<TimerHandle>,
    settle_event: Option<TouchEvent>,
    touchmove_count: u32,
    pending_press: Option<PendingPress>,
    mouse_engaged: bool,
    key_engaged: bool,
    pinch_active: bool,
}

impl GestureRecognizer {
    pub fn new(
        config: TapConfig,
        timers: Rc<dyn TimerDriver>,
        ancestry: Rc<dyn ScrollAncestry>,
    ) -> Self {
        Self {
            config,
            callbacks: GestureCallbacks::default(),
            timers,
            ancestry,
            coordinator: PointerCoordinator::new(),
            pinch: None,
            active: false,
            initial_touch: None,
            last_touch: None,
            scroll_anchor: None,
            active_timer: None,
            settle_timer: None,
            settle_event: None,
            touchmove_count: 0,
            pending_press: None,
            mouse_engaged: false,
            key_engaged: false,
            pinch_active: false,
        }
    }

    pub fn with_callbacks(mut self, callbacks: GestureCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Share a suppression flag with other recognizers on the same pointer
    /// surface. Without this the recognizer keeps a private flag.
    pub fn with_coordinator(mut self, coordinator: PointerCoordinator) -> Self {
        self.coordinator = coordinator;
        self
    }

    /// Route two-finger sequences to a pinch handler instead of ignoring
    /// them. Decided at construction; there is no runtime toggle.
    pub fn with_pinch_delegate(mut self, delegate: Rc<dyn PinchDelegate>) -> Self {
        self.pinch = Some(delegate);
        self
    }

    /// Whether the element is currently in its visually-pressed state.
    pub fn is_active(&self) -> bool {
        self.active
    }

    // ----- touch -----

    pub fn touch_start(&mut self, event: &TouchEvent) {
        if let Some(cb) = self.callbacks.touch_start.clone() {
            if !cb(event) {
                return;
            }
        }
        self.apply_side_effects(event.effects());
        // Raised before the contact-count check: every accepted touch-start
        // suppresses the next synthesized mouse-down, multi-touch included.
        self.coordinator.suppress_next_mouse();
        match event.touches.as_slice() {
            [touch] => {
                self.initial_touch = Some(*touch);
                self.last_touch = Some(*touch);
                self.scroll_anchor = Some(ScrollAnchor::capture(self.ancestry.as_ref()));
                self.init_press_detection(InputEvent::Touch(event.clone()), Modality::Touch);
                self.touchmove_count = 0;
                if self.config.active_delay > Duration::ZERO {
                    self.active_timer = Some(self.timers.schedule(self.config.active_delay));
                } else {
                    self.make_active();
                }
            }
            [_, _] => {
                if let Some(pinch) = self.pinch.clone() {
                    pinch.pinch_start(event);
                    self.pinch_active = true;
                }
            }
            _ => {}
        }
    }

    pub fn touch_move(&mut self, event: &TouchEvent) {
        if self.initial_touch.is_none() {
            if self.pinch_active && event.touch_count() == 2 {
                if let Some(pinch) = self.pinch.clone() {
                    pinch.pinch_move(event);
                    event.prevent_default();
                }
            }
            return;
        }
        self.apply_side_effects(event.effects());

        let scrolled = self
            .scroll_anchor
            .as_ref()
            .map_or(false, |anchor| anchor.scrolled_since_capture());
        if scrolled {
            debug!("ancestor scrolled during touch, ending gesture");
            self.end_touch(Some(event), None);
            return;
        }

        // Settle heuristic: one synthetic move followed by silence is treated
        // as the end of the touch. Armed on the first move only; a second
        // move within the window leaves the counter above one, disarming it.
        let first_move = self.touchmove_count == 0;
        self.touchmove_count += 1;
        if first_move {
            self.settle_event = Some(event.clone());
            self.settle_timer = Some(self.timers.schedule(self.config.touch_settle_timeout));
        }

        if let Some(cb) = self.callbacks.touch_move.clone() {
            cb(event);
        }

        let touch = match event.first_touch() {
            Some(touch) => *touch,
            None => return,
        };
        self.last_touch = Some(touch);
        let (moved_x, moved_y) = self.movement_from_initial(&touch);

        if moved_x > self.config.press_move_threshold || moved_y > self.config.press_move_threshold
        {
            self.cancel_press_detection();
        }

        if moved_x > self.config.threshold_x() || moved_y > self.config.threshold_y() {
            if self.active {
                if self.config.allow_reactivation {
                    self.set_active(false);
                } else {
                    self.end_touch(Some(event), None);
                }
            } else if self.active_timer.is_some() {
                self.clear_active_timer();
            }
        } else if !self.active && self.active_timer.is_none() {
            self.set_active(true);
        }
    }

    pub fn touch_end(&mut self, event: &TouchEvent) {
        if self.initial_touch.is_some() {
            self.apply_side_effects(event.effects());
            let mut deferred_tap = None;
            if let Some(last) = self.last_touch {
                let (moved_x, moved_y) = self.movement_from_initial(&last);
                if moved_x <= self.config.threshold_x()
                    && moved_y <= self.config.threshold_y()
                    && self.callbacks.tap.is_some()
                {
                    event.prevent_default();
                    deferred_tap = Some(event.clone());
                }
            }
            self.end_touch(Some(event), deferred_tap);
        } else if self.pinch_active
            && event.touch_count() + event.changed_touches.len() == 2
        {
            if let Some(pinch) = self.pinch.clone() {
                pinch.pinch_end(event);
                event.prevent_default();
                self.pinch_active = false;
            }
        }
    }

    // ----- mouse -----

    pub fn mouse_down(&mut self, event: &MouseEvent) {
        if self.coordinator.take_suppression() {
            trace!("dropping mouse-down synthesized from a handled touch");
            return;
        }
        if let Some(cb) = self.callbacks.mouse_down.clone() {
            if !cb(event) {
                return;
            }
        }
        self.apply_side_effects(event.effects());
        self.init_press_detection(InputEvent::Mouse(event.clone()), Modality::Mouse);
        self.mouse_engaged = true;
        self.set_active(true);
    }

    pub fn mouse_move(&mut self, event: &MouseEvent) {
        if self.coordinator.is_suppressing() || !self.mouse_engaged {
            return;
        }
        self.apply_side_effects(event.effects());
        if let Some(cb) = self.callbacks.mouse_move.clone() {
            cb(event);
        }
    }

    pub fn mouse_up(&mut self, event: &MouseEvent) {
        if self.coordinator.is_suppressing() || !self.mouse_engaged {
            return;
        }
        self.apply_side_effects(event.effects());
        if let Some(cb) = self.callbacks.mouse_up.clone() {
            cb(event);
        }
        // Mouse taps carry no movement filtering: the press started on the
        // element and the release reached it, which is all a click needs.
        if let Some(cb) = self.callbacks.tap.clone() {
            cb(&InputEvent::Mouse(event.clone()));
        }
        self.end_mouse();
    }

    pub fn mouse_out(&mut self, event: &MouseEvent) {
        if self.coordinator.is_suppressing() || !self.mouse_engaged {
            return;
        }
        self.apply_side_effects(event.effects());
        if let Some(cb) = self.callbacks.mouse_out.clone() {
            cb(event);
        }
        self.end_mouse();
    }

    // ----- keyboard -----

    pub fn key_down(&mut self, event: &KeyEvent) {
        if let Some(cb) = self.callbacks.key_down.clone() {
            if !cb(event) {
                return;
            }
        }
        if !event.key.is_activation_key() {
            return;
        }
        if self.key_engaged {
            return;
        }
        // Press detection arms before the configured side effects apply.
        self.init_press_detection(InputEvent::Key(event.clone()), Modality::Key);
        self.apply_side_effects(event.effects());
        self.key_engaged = true;
        self.set_active(true);
    }

    pub fn key_up(&mut self, event: &KeyEvent) {
        if !self.key_engaged {
            return;
        }
        self.apply_side_effects(event.effects());
        if let Some(cb) = self.callbacks.key_up.clone() {
            cb(event);
        }
        if let Some(cb) = self.callbacks.tap.clone() {
            cb(&InputEvent::Key(event.clone()));
        }
        self.key_engaged = false;
        self.cancel_press_detection();
        self.set_active(false);
    }

    // ----- timers -----

    /// Host entry point for an elapsed timer. A fire for a handle the
    /// recognizer is no longer waiting on is ignored.
    pub fn timer_fired(&mut self, handle: TimerHandle) {
        if self.active_timer == Some(handle) {
            self.active_timer = None;
            self.set_active(true);
        } else if self.settle_timer == Some(handle) {
            self.settle_timer = None;
            let event = self.settle_event.take();
            // Only a lone move counts as settled; more moves mean a drag.
            if self.touchmove_count == 1 {
                debug!("single touch-move settled, ending gesture");
                self.end_touch(event.as_ref(), None);
            }
        } else if self
            .pending_press
            .as_ref()
            .map_or(false, |press| press.handle == handle)
        {
            if let Some(press) = self.pending_press.take() {
                if let Some(cb) = self.callbacks.press.clone() {
                    cb(&press.event);
                }
                match press.ends {
                    Modality::Touch => self.end_touch(None, None),
                    Modality::Mouse => self.end_mouse(),
                    Modality::Key => self.end_key(),
                }
            }
        } else {
            trace!("ignoring stale timer fire: {:?}", handle);
        }
    }

    // ----- lifecycle -----

    /// Abort any in-flight touch or mouse interaction without firing a tap.
    /// A held keyboard activation survives and may still tap on key-up.
    pub fn cancel_tap(&mut self) {
        self.end_touch(None, None);
        self.mouse_engaged = false;
    }

    /// Release scroll tracking and every pending timer. Idempotent; also
    /// runs on `Drop` so a discarded recognizer cannot leak host timers.
    pub fn unmount(&mut self) {
        self.release();
    }

    fn release(&mut self) {
        self.scroll_anchor = None;
        self.cancel_press_detection();
        self.clear_active_timer();
        self.cancel_settle_detection();
    }

    // ----- internals -----

    fn apply_side_effects(&self, effects: &EventEffects) {
        if self.config.prevent_default {
            effects.prevent_default();
        }
        if self.config.stop_propagation {
            effects.stop_propagation();
        }
    }

    fn movement_from_initial(&self, touch: &TouchPoint) -> (f32, f32) {
        match &self.initial_touch {
            Some(initial) => (
                (touch.client_x - initial.client_x).abs(),
                (touch.client_y - initial.client_y).abs(),
            ),
            None => (0.0, 0.0),
        }
    }

    /// Runs the transition hook before committing a changed state.
    fn set_active(&mut self, next: bool) {
        if self.active == next {
            return;
        }
        if next {
            if let Some(cb) = self.callbacks.reactivate.clone() {
                cb();
            }
        } else if let Some(cb) = self.callbacks.deactivate.clone() {
            cb();
        }
        self.active = next;
    }

    fn make_active(&mut self) {
        self.clear_active_timer();
        self.set_active(true);
    }

    fn clear_active_timer(&mut self) {
        if let Some(handle) = self.active_timer.take() {
            self.timers.cancel(handle);
        }
    }

    fn cancel_settle_detection(&mut self) {
        if let Some(handle) = self.settle_timer.take() {
            self.timers.cancel(handle);
            self.touchmove_count = 0;
            self.settle_event = None;
        }
    }

    fn init_press_detection(&mut self, event: InputEvent, ends: Modality) {
        if self.callbacks.press.is_none() {
            return;
        }
        self.cancel_press_detection();
        let handle = self.timers.schedule(self.config.press_delay);
        self.pending_press = Some(PendingPress {
            handle,
            event,
            ends,
        });
    }

    fn cancel_press_detection(&mut self) {
        if let Some(press) = self.pending_press.take() {
            self.timers.cancel(press.handle);
        }
    }

    /// Shared teardown for every way a touch session ends. `event` feeds the
    /// touch-end pass-through when the ending was driven by a real event;
    /// `deferred_tap` carries a tap attempt to be decided after teardown,
    /// against the momentum state of the released scroll anchor.
    fn end_touch(&mut self, event: Option<&TouchEvent>, deferred_tap: Option<TouchEvent>) {
        self.cancel_settle_detection();
        self.cancel_press_detection();
        self.clear_active_timer();
        if let Some(event) = event {
            if let Some(cb) = self.callbacks.touch_end.clone() {
                cb(event);
            }
        }
        self.initial_touch = None;
        self.last_touch = None;
        let anchor = self.scroll_anchor.take();
        if let Some(tap_event) = deferred_tap {
            let momentum = anchor
                .as_ref()
                .map_or(false, |anchor| anchor.momentum_since_capture());
            if momentum {
                debug!("tap suppressed: ancestor kept scrolling through the touch");
            } else if let Some(cb) = self.callbacks.tap.clone() {
                cb(&InputEvent::Touch(tap_event));
            }
        }
        if self.active {
            self.set_active(false);
        }
    }

    fn end_mouse(&mut self) {
        self.cancel_press_detection();
        self.mouse_engaged = false;
        self.set_active(false);
    }

    fn end_key(&mut self) {
        self.cancel_press_detection();
        self.key_engaged = false;
        self.set_active(false);
    }
}

impl Drop for GestureRecognizer {
    fn drop(&mut self) {
        self.release();
    }
}
