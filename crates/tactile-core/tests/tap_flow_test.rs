/// End-to-end touch tap flows: movement thresholds, reactivation, and the
/// delayed active state, driven through the scripted robot.
use std::time::Duration;
use tactile_core::{TapConfig, TouchEvent, TouchPoint};
use tactile_testing::{CallbackRecord, GestureRobot};

#[test]
fn tap_fires_when_released_within_threshold() {
    let mut robot = GestureRobot::new(TapConfig::default());
    robot.touch_down(10.0, 10.0);
    robot.touch_move_to(18.0, 12.0);
    robot.touch_move_to(30.0, 15.0);

    let end = TouchEvent::lift(TouchPoint::at(30.0, 15.0));
    robot.recognizer().touch_end(&end);

    assert_eq!(robot.log().count(CallbackRecord::Tap), 1);
    // A recognized tap claims the end event's default action.
    assert!(end.is_default_prevented());
    assert!(!robot.is_active());
}

#[test]
fn tap_cancelled_beyond_default_threshold() {
    let mut robot = GestureRobot::new(TapConfig::default());
    robot.touch_down(0.0, 0.0);
    robot.touch_move_to(80.0, 0.0);
    robot.touch_move_to(150.0, 0.0);
    robot.touch_up_at(150.0, 0.0);

    assert_eq!(robot.log().count(CallbackRecord::Tap), 0);
    // The session still tears down through the touch-end pass-through.
    assert_eq!(robot.log().count(CallbackRecord::TouchEnd), 1);
    assert!(!robot.is_active());
}

#[test]
fn axis_override_tightens_only_that_axis() {
    let config = TapConfig {
        move_y_threshold: Some(10.0),
        ..TapConfig::default()
    };

    // Vertical drift beyond the override kills the tap.
    let mut robot = GestureRobot::new(config.clone());
    robot.touch_down(0.0, 0.0);
    robot.touch_move_to(0.0, 6.0);
    robot.touch_move_to(0.0, 12.0);
    robot.touch_up_at(0.0, 12.0);
    assert_eq!(robot.log().count(CallbackRecord::Tap), 0);

    // The same distance horizontally still taps: x keeps the shared default.
    let mut robot = GestureRobot::new(config);
    robot.touch_down(0.0, 0.0);
    robot.touch_move_to(6.0, 0.0);
    robot.touch_move_to(12.0, 0.0);
    robot.touch_up_at(12.0, 0.0);
    assert_eq!(robot.log().count(CallbackRecord::Tap), 1);
}

#[test]
fn leaving_and_reentering_threshold_reactivates() {
    let mut robot = GestureRobot::new(TapConfig::default());
    robot.touch_down(0.0, 0.0);
    robot.touch_move_to(150.0, 0.0);
    robot.touch_move_to(50.0, 0.0);
    robot.touch_up_at(50.0, 0.0);

    assert_eq!(
        robot.log().records(),
        vec![
            CallbackRecord::TouchStart,
            CallbackRecord::Reactivate,
            CallbackRecord::TouchMove,
            CallbackRecord::Deactivate,
            CallbackRecord::TouchMove,
            CallbackRecord::Reactivate,
            CallbackRecord::TouchEnd,
            CallbackRecord::Tap,
            CallbackRecord::Deactivate,
        ]
    );
}

#[test]
fn without_reactivation_leaving_threshold_ends_the_touch() {
    let config = TapConfig {
        allow_reactivation: false,
        ..TapConfig::default()
    };
    let mut robot = GestureRobot::new(config);
    robot.touch_down(0.0, 0.0);
    robot.touch_move_to(150.0, 0.0);

    assert_eq!(
        robot.log().records(),
        vec![
            CallbackRecord::TouchStart,
            CallbackRecord::Reactivate,
            CallbackRecord::TouchMove,
            CallbackRecord::TouchEnd,
            CallbackRecord::Deactivate,
        ]
    );

    // The session is gone; a later end event is a no-op.
    robot.touch_up_at(150.0, 0.0);
    assert_eq!(robot.log().count(CallbackRecord::TouchEnd), 1);
    assert_eq!(robot.log().count(CallbackRecord::Tap), 0);
}

#[test]
fn movement_cancels_a_pending_delayed_activation() {
    let config = TapConfig {
        active_delay: Duration::from_millis(500),
        ..TapConfig::default()
    };
    let mut robot = GestureRobot::new(config);
    robot.touch_down(0.0, 0.0);
    assert!(!robot.is_active());

    robot.touch_move_to(150.0, 0.0);
    robot.advance_ms(1000);
    assert!(!robot.is_active());
    assert_eq!(robot.log().count(CallbackRecord::Reactivate), 0);
}

#[test]
fn small_movement_during_active_delay_waits_for_the_timer() {
    let config = TapConfig {
        active_delay: Duration::from_millis(500),
        ..TapConfig::default()
    };
    let mut robot = GestureRobot::new(config);
    robot.touch_down(0.0, 0.0);
    robot.touch_move_to(10.0, 0.0);
    robot.touch_move_to(11.0, 0.0);
    // In-threshold movement does not activate early while the delay runs.
    assert!(!robot.is_active());

    robot.advance_ms(500);
    assert!(robot.is_active());

    robot.touch_up_at(10.0, 0.0);
    assert_eq!(robot.log().count(CallbackRecord::Tap), 1);
}

#[test]
fn end_without_start_is_ignored() {
    let mut robot = GestureRobot::new(TapConfig::default());
    robot.touch_up_at(10.0, 10.0);
    robot.touch_move_to(10.0, 10.0);
    assert!(robot.log().records().is_empty());
    assert!(!robot.is_active());
}
