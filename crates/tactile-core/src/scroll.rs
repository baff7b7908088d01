//! Scroll-interference detection.
//!
//! A tap must not fire when the element (or any scrollable ancestor) scrolled
//! during the touch. At touch-start the recognizer captures an anchor over the
//! ancestor chain; two independent baselines are read from it:
//!
//! - the *aggregate* of all scroll offsets, re-checked on every touch-move to
//!   cancel the gesture the instant scrolling starts, and
//! - *per-container* offset sums, latched and re-checked once at touch-end to
//!   suppress taps landed during momentum scrolling (where the container keeps
//!   moving after the finger is already down again).

use smallvec::SmallVec;
use std::rc::Rc;

/// Size of a container's contents or viewport, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Scroll position of a container, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollOffset {
    pub top: f32,
    pub left: f32,
}

impl ScrollOffset {
    pub fn new(top: f32, left: f32) -> Self {
        Self { top, left }
    }
}

/// Live view of one potentially scrollable container.
///
/// Implementations re-read real state on every call; the recognizer depends
/// on observing offsets move between calls.
pub trait ScrollContainer {
    fn content_size(&self) -> Extent;
    fn viewport_size(&self) -> Extent;
    fn scroll_offset(&self) -> ScrollOffset;
}

/// Host capability: the chain of containers to watch for a recognizer,
/// starting at the recognizer's own element and walking rootward.
///
/// The recognizer filters the chain itself; hosts return every ancestor
/// without judging scrollability.
pub trait ScrollAncestry {
    fn scroll_chain(&self) -> Vec<Rc<dyn ScrollContainer>>;
}

fn is_scrollable(container: &dyn ScrollContainer) -> bool {
    let content = container.content_size();
    let viewport = container.viewport_size();
    content.height > viewport.height || content.width > viewport.width
}

/// Baselines captured at touch-start over the scrollable ancestors.
pub(crate) struct ScrollAnchor {
    parents: SmallVec<[Rc<dyn ScrollContainer>; 4]>,
    /// Per-parent `top + left` sum at capture time.
    latched_sums: SmallVec<[f32; 4]>,
    /// Aggregate offset across all captured parents at capture time.
    baseline: ScrollOffset,
}

impl ScrollAnchor {
    /// Walk the ancestor chain and latch baselines for every container whose
    /// content exceeds its viewport on either axis.
    pub(crate) fn capture(ancestry: &dyn ScrollAncestry) -> Self {
        let mut parents: SmallVec<[Rc<dyn ScrollContainer>; 4]> = SmallVec::new();
        let mut latched_sums: SmallVec<[f32; 4]> = SmallVec::new();
        let mut baseline = ScrollOffset::default();
        for container in ancestry.scroll_chain() {
            if !is_scrollable(container.as_ref()) {
                continue;
            }
            let offset = container.scroll_offset();
            latched_sums.push(offset.top + offset.left);
            baseline.top += offset.top;
            baseline.left += offset.left;
            parents.push(container);
        }
        Self {
            parents,
            latched_sums,
            baseline,
        }
    }

    /// Instant check: has the aggregate offset moved since capture?
    /// Exact comparison: any change at all counts as scrolling.
    pub(crate) fn scrolled_since_capture(&self) -> bool {
        let mut current = ScrollOffset::default();
        for parent in &self.parents {
            let offset = parent.scroll_offset();
            current.top += offset.top;
            current.left += offset.left;
        }
        current.top != self.baseline.top || current.left != self.baseline.left
    }

    /// Momentum check: has any single container's offset sum moved since
    /// capture? Evaluated once, after the rest of the touch teardown ran.
    pub(crate) fn momentum_since_capture(&self) -> bool {
        self.parents
            .iter()
            .zip(&self.latched_sums)
            .any(|(parent, latched)| {
                let offset = parent.scroll_offset();
                offset.top + offset.left != *latched
            })
    }

    #[cfg(test)]
    fn parent_count(&self) -> usize {
        self.parents.len()
    }
}
