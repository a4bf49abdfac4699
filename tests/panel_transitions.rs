//! Panel controller integration tests
//!
//! Verifies the transition state machine's drop-not-queue behavior
//! around the settle duration.

use std::time::Duration;

use joojit::panel::{Panel, PanelController};

#[tokio::test]
async fn double_activate_before_settle_results_in_one_transition() {
    let mut controller = PanelController::new(Panel::Spiral, Duration::from_millis(100));

    let first = controller.activate(Panel::Throttle);
    let second = controller.activate(Panel::Spores);

    assert!(first.is_some());
    assert!(second.is_none());
    // The second call is a no-op: current stays at the first target.
    assert_eq!(controller.current(), Panel::Throttle);
}

#[tokio::test]
async fn controller_accepts_new_request_after_settle_elapses() {
    let mut controller = PanelController::new(Panel::Spiral, Duration::from_millis(30));

    assert!(controller.activate(Panel::Spores).is_some());
    tokio::time::sleep(Duration::from_millis(80)).await;
    assert!(!controller.is_transitioning());

    let transition = controller.activate(Panel::Throttle).expect("transition");
    assert_eq!(transition.offset_vw, -200);
    assert_eq!(controller.current(), Panel::Throttle);
}

#[tokio::test]
async fn activating_current_panel_never_locks_the_controller() {
    let mut controller = PanelController::new(Panel::Spiral, Duration::from_millis(30));

    assert!(controller.activate(Panel::Spiral).is_none());
    assert!(!controller.is_transitioning());
    // A real transition is still possible immediately afterwards.
    assert!(controller.activate(Panel::Spores).is_some());
}

#[tokio::test]
async fn exactly_one_panel_is_current_throughout() {
    let mut controller = PanelController::new(Panel::Spiral, Duration::from_millis(10));

    for target in [Panel::Spores, Panel::Throttle, Panel::Spiral] {
        controller.activate(target);
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(controller.current(), target);
    }
}
