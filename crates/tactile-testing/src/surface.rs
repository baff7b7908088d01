//! Scriptable scroll surfaces.
//!
//! Tests scroll these mid-gesture to exercise the recognizer's instant
//! scroll cancellation and the momentum check at touch-end.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tactile_core::{Extent, ScrollAncestry, ScrollContainer, ScrollOffset};

/// A scroll container whose offset tests can move at any point.
pub struct ScriptedScrollContainer {
    content: Cell<Extent>,
    viewport: Cell<Extent>,
    offset: Cell<ScrollOffset>,
}

impl ScriptedScrollContainer {
    /// A container with more content than viewport, so the recognizer will
    /// track it.
    pub fn scrollable(content: Extent, viewport: Extent) -> Rc<Self> {
        Rc::new(Self {
            content: Cell::new(content),
            viewport: Cell::new(viewport),
            offset: Cell::new(ScrollOffset::default()),
        })
    }

    /// A tall list in a short viewport, the common case.
    pub fn tall_list() -> Rc<Self> {
        Self::scrollable(Extent::new(320.0, 2000.0), Extent::new(320.0, 480.0))
    }

    /// A container whose content fits its viewport; the recognizer will
    /// skip it when capturing baselines.
    pub fn fixed(size: Extent) -> Rc<Self> {
        Rc::new(Self {
            content: Cell::new(size),
            viewport: Cell::new(size),
            offset: Cell::new(ScrollOffset::default()),
        })
    }

    pub fn offset(&self) -> ScrollOffset {
        self.offset.get()
    }

    pub fn set_offset(&self, offset: ScrollOffset) {
        self.offset.set(offset);
    }

    /// Scroll relative to the current offset.
    pub fn scroll_by(&self, top: f32, left: f32) {
        let current = self.offset.get();
        self.offset
            .set(ScrollOffset::new(current.top + top, current.left + left));
    }
}

impl ScrollContainer for ScriptedScrollContainer {
    fn content_size(&self) -> Extent {
        self.content.get()
    }

    fn viewport_size(&self) -> Extent {
        self.viewport.get()
    }

    fn scroll_offset(&self) -> ScrollOffset {
        self.offset.get()
    }
}

/// Ancestor chain handed to the recognizer, innermost first.
#[derive(Default)]
pub struct ScriptedAncestry {
    chain: RefCell<Vec<Rc<dyn ScrollContainer>>>,
}

impl ScriptedAncestry {
    /// An element with no scrollable ancestors.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn of(containers: Vec<Rc<dyn ScrollContainer>>) -> Rc<Self> {
        Rc::new(Self {
            chain: RefCell::new(containers),
        })
    }

    /// Append an ancestor further out in the chain.
    pub fn push(&self, container: Rc<dyn ScrollContainer>) {
        self.chain.borrow_mut().push(container);
    }
}

impl ScrollAncestry for ScriptedAncestry {
    fn scroll_chain(&self) -> Vec<Rc<dyn ScrollContainer>> {
        self.chain.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_by_accumulates() {
        let container = ScriptedScrollContainer::tall_list();
        container.scroll_by(10.0, 0.0);
        container.scroll_by(5.0, 2.0);
        assert_eq!(container.offset(), ScrollOffset::new(15.0, 2.0));
    }

    #[test]
    fn ancestry_returns_pushed_containers_in_order() {
        let inner = ScriptedScrollContainer::tall_list();
        let outer = ScriptedScrollContainer::tall_list();
        let ancestry = ScriptedAncestry::new();
        ancestry.push(inner.clone());
        ancestry.push(outer);
        let chain = ancestry.scroll_chain();
        assert_eq!(chain.len(), 2);

        inner.scroll_by(7.0, 0.0);
        assert_eq!(chain[0].scroll_offset(), ScrollOffset::new(7.0, 0.0));
        assert_eq!(chain[1].scroll_offset(), ScrollOffset::default());
    }
}
