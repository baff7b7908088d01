/// Lifecycle and cross-instance behavior: programmatic cancellation,
/// unmount cleanup, the shared mouse-suppression flag, and two-finger
/// delegation to a pinch handler.
use std::cell::RefCell;
use std::rc::Rc;
use tactile_core::{
    GestureRecognizer, PinchDelegate, PointerCoordinator, TapConfig, TouchEvent, TouchPoint,
};
use tactile_testing::{
    recording_callbacks, CallbackLog, CallbackRecord, GestureRobot, ManualTimerDriver,
    ScriptedAncestry,
};

#[test]
fn cancel_tap_aborts_an_in_flight_touch() {
    let mut robot = GestureRobot::new(TapConfig::default());
    robot.touch_down(10.0, 10.0);
    assert!(robot.is_active());

    robot.recognizer().cancel_tap();
    assert!(!robot.is_active());
    assert_eq!(robot.timers().pending_count(), 0);

    robot.touch_up_at(10.0, 10.0);
    assert_eq!(robot.log().count(CallbackRecord::Tap), 0);
    // Programmatic cancellation feeds no event into the pass-through.
    assert_eq!(robot.log().count(CallbackRecord::TouchEnd), 0);
}

#[test]
fn unmount_releases_every_pending_timer() {
    let config = TapConfig {
        active_delay: std::time::Duration::from_millis(300),
        ..TapConfig::default()
    };
    let mut robot = GestureRobot::new(config);
    robot.touch_down(10.0, 10.0);
    robot.touch_move_to(11.0, 10.0);
    // Active delay, press delay, and the settle window are all in flight.
    assert_eq!(robot.timers().pending_count(), 3);

    robot.recognizer().unmount();
    assert_eq!(robot.timers().pending_count(), 0);

    robot.advance_ms(2000);
    assert_eq!(robot.log().count(CallbackRecord::Press), 0);
    assert!(!robot.is_active());
}

#[test]
fn recognizers_sharing_a_surface_suppress_each_others_echo() {
    // A touch handled by one element; the synthesized mouse-down lands on a
    // sibling that shares the coordinator.
    let coordinator = PointerCoordinator::new();
    let timers = ManualTimerDriver::new();

    let touch_log = CallbackLog::new();
    let mut touched = GestureRecognizer::new(
        TapConfig::default(),
        timers.clone(),
        ScriptedAncestry::new(),
    )
    .with_callbacks(recording_callbacks(&touch_log))
    .with_coordinator(coordinator.clone());

    let mouse_log = CallbackLog::new();
    let mut sibling = GestureRecognizer::new(
        TapConfig::default(),
        timers.clone(),
        ScriptedAncestry::new(),
    )
    .with_callbacks(recording_callbacks(&mouse_log))
    .with_coordinator(coordinator.clone());

    touched.touch_start(&TouchEvent::single(TouchPoint::at(10.0, 10.0)));
    touched.touch_end(&TouchEvent::lift(TouchPoint::at(10.0, 10.0)));
    assert_eq!(touch_log.count(CallbackRecord::Tap), 1);

    sibling.mouse_down(&tactile_core::MouseEvent::new());
    assert!(!sibling.is_active());
    assert_eq!(mouse_log.count(CallbackRecord::MouseDown), 0);

    // The flag was consumed; a real click afterwards works normally.
    sibling.mouse_down(&tactile_core::MouseEvent::new());
    sibling.mouse_up(&tactile_core::MouseEvent::new());
    assert_eq!(mouse_log.count(CallbackRecord::Tap), 1);
}

#[derive(Default)]
struct RecordingPinch {
    calls: RefCell<Vec<&'static str>>,
}

impl PinchDelegate for RecordingPinch {
    fn pinch_start(&self, _event: &TouchEvent) {
        self.calls.borrow_mut().push("start");
    }

    fn pinch_move(&self, _event: &TouchEvent) {
        self.calls.borrow_mut().push("move");
    }

    fn pinch_end(&self, _event: &TouchEvent) {
        self.calls.borrow_mut().push("end");
    }
}

fn two_finger_event(a: (f32, f32), b: (f32, f32)) -> TouchEvent {
    TouchEvent::new([TouchPoint::at(a.0, a.1), TouchPoint::at(b.0, b.1)], [])
}

#[test]
fn two_fingers_route_to_the_pinch_delegate() {
    let pinch = Rc::new(RecordingPinch::default());
    let log = CallbackLog::new();
    let timers = ManualTimerDriver::new();
    let mut recognizer = GestureRecognizer::new(
        TapConfig::default(),
        timers.clone(),
        ScriptedAncestry::new(),
    )
    .with_callbacks(recording_callbacks(&log))
    .with_pinch_delegate(pinch.clone());

    recognizer.touch_start(&two_finger_event((10.0, 10.0), (60.0, 60.0)));
    // No single-touch session: the active state never engages.
    assert!(!recognizer.is_active());

    let spread = two_finger_event((5.0, 5.0), (70.0, 70.0));
    recognizer.touch_move(&spread);
    assert!(spread.is_default_prevented());

    let lift = TouchEvent::new(
        [TouchPoint::at(5.0, 5.0)],
        [TouchPoint::at(70.0, 70.0)],
    );
    recognizer.touch_end(&lift);

    assert_eq!(*pinch.calls.borrow(), vec!["start", "move", "end"]);
    assert_eq!(log.count(CallbackRecord::Tap), 0);
    assert_eq!(log.count(CallbackRecord::Reactivate), 0);
}

#[test]
fn second_finger_without_a_delegate_is_ignored() {
    let mut robot = GestureRobot::new(TapConfig::default());
    robot
        .recognizer()
        .touch_start(&two_finger_event((10.0, 10.0), (60.0, 60.0)));

    assert!(!robot.is_active());
    // The pass-through still saw the event; nothing else happened.
    assert_eq!(robot.log().count(CallbackRecord::TouchStart), 1);
    assert_eq!(robot.log().count(CallbackRecord::Reactivate), 0);
}

#[test]
fn pinch_end_stops_further_delegation() {
    let pinch = Rc::new(RecordingPinch::default());
    let timers = ManualTimerDriver::new();
    let mut recognizer = GestureRecognizer::new(
        TapConfig::default(),
        timers.clone(),
        ScriptedAncestry::new(),
    )
    .with_pinch_delegate(pinch.clone());

    recognizer.touch_start(&two_finger_event((10.0, 10.0), (60.0, 60.0)));
    let lift = TouchEvent::new([TouchPoint::at(10.0, 10.0)], [TouchPoint::at(60.0, 60.0)]);
    recognizer.touch_end(&lift);

    // The pinch is over; stray two-finger moves no longer reach the
    // delegate.
    recognizer.touch_move(&two_finger_event((10.0, 10.0), (60.0, 60.0)));
    assert_eq!(*pinch.calls.borrow(), vec!["start", "end"]);
}
