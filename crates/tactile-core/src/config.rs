//! Recognizer tuning knobs and their defaults.
//!
//! All thresholds are in logical pixels, all delays in wall-clock time as
//! measured by the host's timer driver. Defaults match long-standing mobile
//! web conventions and are deliberately conservative: a large tap-cancel
//! radius (fingers wander while scrolling decisions settle) and a tight
//! press-cancel radius (a long-press should mean a held, still finger).

use std::time::Duration;

/// Movement (per axis, logical pixels) beyond which a touch tap is cancelled.
///
/// Generous on purpose: momentum and scroll detection catch the common
/// accidental cases, so the radius only needs to reject wild swipes.
pub const DEFAULT_MOVE_THRESHOLD: f32 = 100.0;

/// Movement (per axis, logical pixels) beyond which press detection stops.
///
/// Much tighter than the tap radius: a long-press is a deliberate hold, and
/// more than a few pixels of drift means the finger is doing something else.
pub const DEFAULT_PRESS_MOVE_THRESHOLD: f32 = 5.0;

/// Held-down duration before the press (long-hold) callback fires.
pub const DEFAULT_PRESS_DELAY: Duration = Duration::from_millis(1000);

/// Delay between touch-down and the visual active state engaging.
///
/// Zero by default: controls highlight immediately. A small delay avoids
/// flashing list rows while the user is really starting a scroll.
pub const DEFAULT_ACTIVE_DELAY: Duration = Duration::ZERO;

/// Settle window for the touch-move heuristic.
///
/// Some platforms emit exactly one synthetic touch-move between touch-start
/// and touch-end of a plain tap. A single move followed by this much silence
/// is treated as the end of the touch; a second move within the window is a
/// real drag and disarms the heuristic.
pub const DEFAULT_TOUCH_SETTLE_TIMEOUT: Duration = Duration::from_millis(64);

/// Immutable per-recognizer configuration.
#[derive(Clone, Debug)]
pub struct TapConfig {
    /// Tap-cancel movement radius, both axes, unless overridden per axis.
    pub move_threshold: f32,
    /// Horizontal override of [`TapConfig::move_threshold`].
    pub move_x_threshold: Option<f32>,
    /// Vertical override of [`TapConfig::move_threshold`].
    pub move_y_threshold: Option<f32>,
    /// Whether re-entering the movement radius restores the active state.
    /// When false, leaving the radius ends the touch interaction outright.
    pub allow_reactivation: bool,
    /// Delay before the active state engages after touch-down.
    pub active_delay: Duration,
    /// Held duration before the press callback fires.
    pub press_delay: Duration,
    /// Press-cancel movement radius, both axes.
    pub press_move_threshold: f32,
    /// Settle window for the single-synthetic-move heuristic.
    pub touch_settle_timeout: Duration,
    /// Request default-action suppression on every processed event.
    pub prevent_default: bool,
    /// Request propagation stop on every processed event.
    pub stop_propagation: bool,
}

impl TapConfig {
    /// Effective horizontal tap-cancel threshold.
    pub fn threshold_x(&self) -> f32 {
        self.move_x_threshold.unwrap_or(self.move_threshold)
    }

    /// Effective vertical tap-cancel threshold.
    pub fn threshold_y(&self) -> f32 {
        self.move_y_threshold.unwrap_or(self.move_threshold)
    }
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            move_threshold: DEFAULT_MOVE_THRESHOLD,
            move_x_threshold: None,
            move_y_threshold: None,
            allow_reactivation: true,
            active_delay: DEFAULT_ACTIVE_DELAY,
            press_delay: DEFAULT_PRESS_DELAY,
            press_move_threshold: DEFAULT_PRESS_MOVE_THRESHOLD,
            touch_settle_timeout: DEFAULT_TOUCH_SETTLE_TIMEOUT,
            prevent_default: false,
            stop_propagation: false,
        }
    }
}
