//! Host-facing callback surface.
//!
//! Every slot is optional. Gesture outcomes (`tap`, `press`) receive the
//! [`InputEvent`] snapshot that completed them; state transitions
//! (`deactivate`/`reactivate`) fire before the state commits; raw
//! pass-throughs mirror each event the recognizer processed. The three
//! *down* pass-throughs return a verdict: `false` means the host already
//! handled the event and the recognizer must not start a gesture from it.

use crate::event::{InputEvent, KeyEvent, MouseEvent, TouchEvent};
use std::rc::Rc;

pub(crate) type OutcomeHandler = Rc<dyn Fn(&InputEvent)>;
pub(crate) type TransitionHandler = Rc<dyn Fn()>;
pub(crate) type TouchHandler = Rc<dyn Fn(&TouchEvent)>;
pub(crate) type TouchVerdict = Rc<dyn Fn(&TouchEvent) -> bool>;
pub(crate) type MouseHandler = Rc<dyn Fn(&MouseEvent)>;
pub(crate) type MouseVerdict = Rc<dyn Fn(&MouseEvent) -> bool>;
pub(crate) type KeyHandler = Rc<dyn Fn(&KeyEvent)>;
pub(crate) type KeyVerdict = Rc<dyn Fn(&KeyEvent) -> bool>;

/// Callback slots for one recognizer, built with chained setters.
///
/// ```
/// use tactile_core::GestureCallbacks;
///
/// let callbacks = GestureCallbacks::new()
///     .on_tap(|_| println!("tap"))
///     .on_press(|_| println!("long press"));
/// ```
#[derive(Clone, Default)]
pub struct GestureCallbacks {
    pub(crate) tap: Option<OutcomeHandler>,
    pub(crate) press: Option<OutcomeHandler>,
    pub(crate) deactivate: Option<TransitionHandler>,
    pub(crate) reactivate: Option<TransitionHandler>,
    pub(crate) touch_start: Option<TouchVerdict>,
    pub(crate) touch_move: Option<TouchHandler>,
    pub(crate) touch_end: Option<TouchHandler>,
    pub(crate) mouse_down: Option<MouseVerdict>,
    pub(crate) mouse_move: Option<MouseHandler>,
    pub(crate) mouse_up: Option<MouseHandler>,
    pub(crate) mouse_out: Option<MouseHandler>,
    pub(crate) key_down: Option<KeyVerdict>,
    pub(crate) key_up: Option<KeyHandler>,
}

impl GestureCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// A completed tap. Fires at touch-end inside the movement radius (after
    /// the momentum check), and unconditionally on mouse-up and key-up.
    pub fn on_tap(mut self, handler: impl Fn(&InputEvent) + 'static) -> Self {
        self.tap = Some(Rc::new(handler));
        self
    }

    /// A completed long-hold. Mutually exclusive with `on_tap` within one
    /// gesture; press detection only runs at all when this slot is set.
    pub fn on_press(mut self, handler: impl Fn(&InputEvent) + 'static) -> Self {
        self.press = Some(Rc::new(handler));
        self
    }

    /// Active state is about to turn off. Runs before the state commits.
    pub fn on_deactivate(mut self, handler: impl Fn() + 'static) -> Self {
        self.deactivate = Some(Rc::new(handler));
        self
    }

    /// Active state is about to turn on (including the first activation).
    /// Runs before the state commits.
    pub fn on_reactivate(mut self, handler: impl Fn() + 'static) -> Self {
        self.reactivate = Some(Rc::new(handler));
        self
    }

    /// Raw touch-start pass-through. Return `false` to veto the gesture.
    pub fn on_touch_start(mut self, handler: impl Fn(&TouchEvent) -> bool + 'static) -> Self {
        self.touch_start = Some(Rc::new(handler));
        self
    }

    pub fn on_touch_move(mut self, handler: impl Fn(&TouchEvent) + 'static) -> Self {
        self.touch_move = Some(Rc::new(handler));
        self
    }

    pub fn on_touch_end(mut self, handler: impl Fn(&TouchEvent) + 'static) -> Self {
        self.touch_end = Some(Rc::new(handler));
        self
    }

    /// Raw mouse-down pass-through. Return `false` to veto the gesture.
    /// Not called for suppressed synthesized mouse-downs.
    pub fn on_mouse_down(mut self, handler: impl Fn(&MouseEvent) -> bool + 'static) -> Self {
        self.mouse_down = Some(Rc::new(handler));
        self
    }

    pub fn on_mouse_move(mut self, handler: impl Fn(&MouseEvent) + 'static) -> Self {
        self.mouse_move = Some(Rc::new(handler));
        self
    }

    pub fn on_mouse_up(mut self, handler: impl Fn(&MouseEvent) + 'static) -> Self {
        self.mouse_up = Some(Rc::new(handler));
        self
    }

    pub fn on_mouse_out(mut self, handler: impl Fn(&MouseEvent) + 'static) -> Self {
        self.mouse_out = Some(Rc::new(handler));
        self
    }

    /// Raw key-down pass-through. Return `false` to veto the gesture.
    /// Called for every key, not just activation keys.
    pub fn on_key_down(mut self, handler: impl Fn(&KeyEvent) -> bool + 'static) -> Self {
        self.key_down = Some(Rc::new(handler));
        self
    }

    pub fn on_key_up(mut self, handler: impl Fn(&KeyEvent) + 'static) -> Self {
        self.key_up = Some(Rc::new(handler));
        self
    }
}

/// Handler for two-finger sequences, injected at construction.
///
/// When present, a second finger routes the touch stream here instead of
/// cancelling into the single-touch logic; the recognizer still tracks
/// whether a pinch is in flight so the end event is delivered once.
pub trait PinchDelegate {
    fn pinch_start(&self, event: &TouchEvent);
    fn pinch_move(&self, event: &TouchEvent);
    fn pinch_end(&self, event: &TouchEvent);
}
