//! Normalized input events fed to the recognizer.
//!
//! Hosts translate their native events (DOM, winit, test scripts) into these
//! snapshots before dispatch. Events are plain cloneable data except for the
//! [`EventEffects`] pair, which is shared across clones so that a request made
//! by the recognizer is visible on whichever copy the host retained.

use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;

/// Coordinate snapshot of one contact, in page and client space.
///
/// Movement math uses client coordinates only; page coordinates ride along
/// for pass-through consumers that want document-relative positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub page_x: f32,
    pub page_y: f32,
    pub client_x: f32,
    pub client_y: f32,
}

impl TouchPoint {
    pub fn new(page_x: f32, page_y: f32, client_x: f32, client_y: f32) -> Self {
        Self {
            page_x,
            page_y,
            client_x,
            client_y,
        }
    }

    /// Snapshot where page and client space coincide (unscrolled viewport).
    pub fn at(x: f32, y: f32) -> Self {
        Self::new(x, y, x, y)
    }
}

/// Processing requests attached to an event.
///
/// The recognizer sets these; the host reads them after dispatch and applies
/// them to its native event. Shared via `Rc<Cell>` so requests made on one
/// copy are observed on all copies.
#[derive(Clone, Debug, Default)]
pub struct EventEffects {
    default_prevented: Rc<Cell<bool>>,
    propagation_stopped: Rc<Cell<bool>>,
}

impl EventEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }
}

/// One touch-stream event: the live contact list plus the contacts that
/// changed in this event (lifted fingers appear only in `changed_touches`).
#[derive(Clone, Debug)]
pub struct TouchEvent {
    pub touches: SmallVec<[TouchPoint; 2]>,
    pub changed_touches: SmallVec<[TouchPoint; 2]>,
    effects: EventEffects,
}

impl TouchEvent {
    pub fn new(
        touches: impl IntoIterator<Item = TouchPoint>,
        changed_touches: impl IntoIterator<Item = TouchPoint>,
    ) -> Self {
        Self {
            touches: touches.into_iter().collect(),
            changed_touches: changed_touches.into_iter().collect(),
            effects: EventEffects::new(),
        }
    }

    /// Event with a single live contact and nothing changed.
    pub fn single(touch: TouchPoint) -> Self {
        Self::new([touch], [])
    }

    /// Event for the last finger lifting: no live contacts, one changed.
    pub fn lift(touch: TouchPoint) -> Self {
        Self::new([], [touch])
    }

    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    pub fn first_touch(&self) -> Option<&TouchPoint> {
        self.touches.first()
    }

    pub fn effects(&self) -> &EventEffects {
        &self.effects
    }

    pub fn prevent_default(&self) {
        self.effects.prevent_default();
    }

    pub fn is_default_prevented(&self) -> bool {
        self.effects.is_default_prevented()
    }

    pub fn stop_propagation(&self) {
        self.effects.stop_propagation();
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.effects.is_propagation_stopped()
    }
}

/// One mouse event. The recognizer never reads the position (mouse taps are
/// not movement-filtered); it is carried for pass-through consumers.
#[derive(Clone, Debug)]
pub struct MouseEvent {
    pub position: Option<TouchPoint>,
    effects: EventEffects,
}

impl MouseEvent {
    pub fn new() -> Self {
        Self {
            position: None,
            effects: EventEffects::new(),
        }
    }

    pub fn at(position: TouchPoint) -> Self {
        Self {
            position: Some(position),
            effects: EventEffects::new(),
        }
    }

    pub fn effects(&self) -> &EventEffects {
        &self.effects
    }

    pub fn prevent_default(&self) {
        self.effects.prevent_default();
    }

    pub fn is_default_prevented(&self) -> bool {
        self.effects.is_default_prevented()
    }

    pub fn stop_propagation(&self) {
        self.effects.stop_propagation();
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.effects.is_propagation_stopped()
    }
}

impl Default for MouseEvent {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyboard key identity, normalized by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Space,
    Enter,
    /// Any other key, carrying the host's raw code.
    Other(u32),
}

impl KeyCode {
    /// Whether this key activates controls (taps/presses respond to it).
    pub fn is_activation_key(&self) -> bool {
        matches!(self, KeyCode::Space | KeyCode::Enter)
    }
}

/// One keyboard event.
#[derive(Clone, Debug)]
pub struct KeyEvent {
    pub key: KeyCode,
    effects: EventEffects,
}

impl KeyEvent {
    pub fn new(key: KeyCode) -> Self {
        Self {
            key,
            effects: EventEffects::new(),
        }
    }

    pub fn effects(&self) -> &EventEffects {
        &self.effects
    }

    pub fn prevent_default(&self) {
        self.effects.prevent_default();
    }

    pub fn is_default_prevented(&self) -> bool {
        self.effects.is_default_prevented()
    }

    pub fn stop_propagation(&self) {
        self.effects.stop_propagation();
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.effects.is_propagation_stopped()
    }
}

/// Snapshot of whichever event started a gesture outcome, handed to the
/// tap and press callbacks.
#[derive(Clone, Debug)]
pub enum InputEvent {
    Touch(TouchEvent),
    Mouse(MouseEvent),
    Key(KeyEvent),
}

impl InputEvent {
    pub fn effects(&self) -> &EventEffects {
        match self {
            InputEvent::Touch(event) => event.effects(),
            InputEvent::Mouse(event) => event.effects(),
            InputEvent::Key(event) => event.effects(),
        }
    }
}
