//! Cross-recognizer pointer coordination.
//!
//! Touch platforms synthesize a mouse-event echo (down/up, sometimes
//! move/out) after a touch sequence, delivered to whichever element sits
//! under the lifted finger. Recognizers sharing a physical pointer surface
//! share one [`PointerCoordinator`] clone so a touch handled by any of them
//! suppresses the echo no matter which of them receives it.

use std::cell::Cell;
use std::rc::Rc;

/// Shared mouse-suppression flag for one pointer surface.
///
/// Cloning shares the flag. A recognizer constructed without an explicit
/// coordinator gets a private one, which still suppresses its own echoes.
#[derive(Clone, Debug, Default)]
pub struct PointerCoordinator {
    suppress_mouse: Rc<Cell<bool>>,
}

impl PointerCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag. Called on every accepted touch-start; stays raised
    /// until a mouse-down consumes it.
    pub(crate) fn suppress_next_mouse(&self) {
        self.suppress_mouse.set(true);
    }

    /// Consume the flag: returns whether it was raised, lowering it.
    /// Exactly one mouse-down observes each raised flag.
    pub(crate) fn take_suppression(&self) -> bool {
        self.suppress_mouse.replace(false)
    }

    /// Observe the flag without lowering it. Mouse move/up/out guards peek
    /// so the pending mouse-down still gets to consume.
    pub(crate) fn is_suppressing(&self) -> bool {
        self.suppress_mouse.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_consumes_exactly_once() {
        let coordinator = PointerCoordinator::new();
        coordinator.suppress_next_mouse();
        assert!(coordinator.is_suppressing());
        assert!(coordinator.take_suppression());
        assert!(!coordinator.take_suppression());
        assert!(!coordinator.is_suppressing());
    }

    #[test]
    fn clones_share_the_flag() {
        let a = PointerCoordinator::new();
        let b = a.clone();
        a.suppress_next_mouse();
        assert!(b.is_suppressing());
        assert!(b.take_suppression());
        assert!(!a.is_suppressing());
    }

    #[test]
    fn peek_leaves_the_flag_raised() {
        let coordinator = PointerCoordinator::new();
        coordinator.suppress_next_mouse();
        assert!(coordinator.is_suppressing());
        assert!(coordinator.is_suppressing());
        assert!(coordinator.take_suppression());
    }
}
