//! Scripted gesture playground.
//!
//! Replays canned input scenarios through a recognizer wired to a callback
//! log, then checks that each scenario produced the expected outcome. Run
//! with `RUST_LOG=debug` to watch the recognizer's decisions as they happen.

use anyhow::{ensure, Context, Result};
use std::rc::Rc;
use tactile_core::{KeyCode, ScrollContainer, TapConfig};
use tactile_testing::{CallbackRecord, GestureRobot, ScriptedAncestry, ScriptedScrollContainer};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Tap Lab ===");
    println!("Replays scripted touch, mouse, and keyboard streams through a");
    println!("gesture recognizer and checks the callbacks it fires:");
    println!("  - clean taps inside the movement radius");
    println!("  - cancellation when a scrollable ancestor moves");
    println!("  - momentum suppression at touch-end");
    println!("  - long-press detection on a held, still finger");
    println!("  - keyboard activation and synthesized-mouse suppression");
    println!();

    run("clean tap", clean_tap)?;
    run("scroll cancels the touch", scroll_cancels_the_touch)?;
    run("momentum suppresses the tap", momentum_suppresses_the_tap)?;
    run("long press instead of tap", long_press_instead_of_tap)?;
    run("keyboard activation", keyboard_activation)?;
    run("synthesized mouse echo is dropped", synthesized_mouse_echo_is_dropped)?;

    println!();
    println!("All scenarios behaved.");
    Ok(())
}

fn run(name: &str, scenario: fn() -> Result<()>) -> Result<()> {
    log::info!("replaying scenario: {name}");
    scenario().with_context(|| format!("scenario failed: {name}"))?;
    println!("  ok: {name}");
    Ok(())
}

/// Finger lands, wobbles a couple of pixels, lifts. One tap.
fn clean_tap() -> Result<()> {
    let mut robot = GestureRobot::new(TapConfig::default());
    robot.touch_down(160.0, 240.0);
    ensure!(robot.is_active(), "touch-down should activate immediately");
    robot.touch_up_at(162.0, 241.0);
    ensure!(!robot.is_active(), "release should deactivate");
    ensure!(
        robot.log().count(CallbackRecord::Tap) == 1,
        "expected exactly one tap, log was {:?}",
        robot.log().records()
    );
    Ok(())
}

/// An ancestor list scrolls between down and the first move. The gesture
/// ends immediately; a late lift must not resurrect it.
fn scroll_cancels_the_touch() -> Result<()> {
    let list = ScriptedScrollContainer::tall_list();
    let ancestry = ScriptedAncestry::of(vec![list.clone() as Rc<dyn ScrollContainer>]);
    let mut robot = GestureRobot::with_ancestry(TapConfig::default(), ancestry);

    robot.touch_down(160.0, 400.0);
    list.scroll_by(40.0, 0.0);
    robot.touch_move_to(160.0, 396.0);
    ensure!(!robot.is_active(), "scrolling should end the gesture");
    ensure!(
        robot.log().count(CallbackRecord::TouchMove) == 0,
        "the cancelling move must not reach the pass-through"
    );

    robot.touch_up_at(160.0, 396.0);
    ensure!(
        !robot.log().contains(CallbackRecord::Tap),
        "no tap after a scroll cancellation, log was {:?}",
        robot.log().records()
    );
    Ok(())
}

/// The list keeps coasting under a fresh touch. The release looks like a
/// perfect tap, and the momentum check still suppresses it.
fn momentum_suppresses_the_tap() -> Result<()> {
    let list = ScriptedScrollContainer::tall_list();
    let ancestry = ScriptedAncestry::of(vec![list.clone() as Rc<dyn ScrollContainer>]);
    let mut robot = GestureRobot::with_ancestry(TapConfig::default(), ancestry);

    robot.touch_down(160.0, 400.0);
    list.scroll_by(18.0, 0.0);
    robot.touch_up_at(160.0, 400.0);
    ensure!(
        !robot.log().contains(CallbackRecord::Tap),
        "momentum should suppress the tap, log was {:?}",
        robot.log().records()
    );
    ensure!(
        robot.log().contains(CallbackRecord::TouchEnd),
        "the touch still ends normally"
    );
    Ok(())
}

/// A held, still finger crosses the press delay. Press fires, tap never does,
/// and the session is torn down without a touch-end pass-through.
fn long_press_instead_of_tap() -> Result<()> {
    let mut robot = GestureRobot::new(TapConfig::default());
    robot.touch_down(100.0, 100.0);

    robot.advance_ms(999);
    ensure!(
        !robot.log().contains(CallbackRecord::Press),
        "press must wait the full delay"
    );

    robot.advance_ms(1);
    ensure!(robot.log().contains(CallbackRecord::Press), "press fires at the delay");
    ensure!(!robot.is_active(), "press tears the session down");

    robot.touch_up_at(100.0, 100.0);
    ensure!(
        !robot.log().contains(CallbackRecord::Tap),
        "no tap after a press, log was {:?}",
        robot.log().records()
    );
    Ok(())
}

/// Space activates like a pointer: down engages, up taps.
fn keyboard_activation() -> Result<()> {
    let mut robot = GestureRobot::new(TapConfig::default());
    robot.key_tap(KeyCode::Space);
    ensure!(
        robot.log().records()
            == vec![
                CallbackRecord::KeyDown,
                CallbackRecord::Reactivate,
                CallbackRecord::KeyUp,
                CallbackRecord::Tap,
                CallbackRecord::Deactivate,
            ],
        "unexpected keyboard sequence: {:?}",
        robot.log().records()
    );
    Ok(())
}

/// After a handled touch the platform synthesizes a mouse-down at the same
/// spot. The first mouse-down is swallowed; a later real click still taps.
fn synthesized_mouse_echo_is_dropped() -> Result<()> {
    let mut robot = GestureRobot::new(TapConfig::default());
    robot.touch_down(80.0, 80.0);
    robot.touch_up_at(80.0, 80.0);

    robot.mouse_down();
    robot.mouse_up();
    ensure!(
        robot.log().count(CallbackRecord::MouseDown) == 0,
        "the synthesized echo must not reach the pass-through"
    );

    robot.mouse_click();
    ensure!(
        robot.log().count(CallbackRecord::Tap) == 2,
        "the real click should tap, log was {:?}",
        robot.log().records()
    );
    ensure!(robot.log().count(CallbackRecord::MouseDown) == 1, "one real mouse-down");
    Ok(())
}
