//! End-to-end scenarios for the split layout: container resizes under each
//! resize strategy, direct side drags under each side strategy, and the
//! collapse/absence rules that tie them together.

use trisplit::{ResizeStrategy, SideStrategy, SplitConfig, SplitLayout, ValueError};

#[track_caller]
fn assert_close(actual: Option<f64>, expected: f64) {
    match actual {
        Some(actual) if (actual - expected).abs() < 1e-6 => {}
        other => panic!("expected ~{expected}, got {other:?}"),
    }
}

fn proportional_fixture() -> SplitLayout {
    SplitLayout::new(
        SplitConfig::new(600.0)
            .start_size(300.0)
            .start_min(250.0)
            .start_max(350.0)
            .end_size(100.0)
            .end_min(5.0)
            .end_max(150.0)
            .middle_min(130.0)
            .resize_strategy(ResizeStrategy::Proportional),
    )
    .expect("valid fixture")
}

fn drag_fixture(side_strategy: SideStrategy) -> SplitLayout {
    SplitLayout::new(
        SplitConfig::new(600.0)
            .start_min(250.0)
            .start_max(600.0)
            .end_size(100.0)
            .end_min(5.0)
            .middle_min(130.0)
            .side_resize_strategy(side_strategy),
    )
    .expect("valid fixture")
}

#[test]
fn proportional_shrink_distributes_the_deficit() {
    let mut layout = proportional_fixture();
    layout.set_container_size(400.0).expect("feasible");
    // Start and middle bottom out at their minimums; end absorbs the rest.
    assert_close(layout.start_size(), 250.0);
    assert_close(layout.end_size(), 20.0);
    assert!((layout.middle_size() - 130.0).abs() < 1e-6);
}

#[test]
fn consume_drag_squeezes_middle_then_takes_from_the_other_side() {
    let mut layout = drag_fixture(SideStrategy::Consume);
    layout.set_start_size(Some(400.0)).expect("feasible");
    assert_close(layout.start_size(), 400.0);
    assert_close(layout.end_size(), 70.0);
    assert!((layout.middle_size() - 130.0).abs() < 1e-6);
}

#[test]
fn constrain_drag_caps_the_request_and_spares_the_other_side() {
    let mut layout = drag_fixture(SideStrategy::Constrain);
    layout.set_start_size(Some(400.0)).expect("feasible");
    assert_close(layout.start_size(), 370.0);
    assert_close(layout.end_size(), 100.0);
    assert!((layout.middle_size() - 130.0).abs() < 1e-6);
}

#[test]
fn absent_start_never_materializes_from_container_resizes() {
    let mut layout = SplitLayout::new(
        SplitConfig::new(600.0)
            .start_min(50.0)
            .end_size(100.0)
            .middle_min(130.0),
    )
    .expect("valid fixture");
    assert_eq!(layout.start_size(), None);

    for size in [700.0, 300.0, 1200.0, 450.0] {
        layout.set_container_size(size).expect("feasible");
        assert_eq!(layout.start_size(), None, "at container {size}");
    }

    // Only a direct side resize brings the side into existence.
    layout.set_start_size(Some(80.0)).expect("feasible");
    assert_close(layout.start_size(), 80.0);
}

#[test]
fn monotonic_collapse_gives_everything_to_the_middle() {
    let mut layout = proportional_fixture();
    layout.set_container_size(200.0).expect("collapse is valid");
    assert_eq!(layout.start_size(), None);
    assert_eq!(layout.end_size(), None);
    assert_eq!(layout.middle_size(), 200.0);
}

#[test]
fn side_round_trip_stays_within_bounds_or_fails() {
    let mut layout = drag_fixture(SideStrategy::Consume);
    for request in [0.0, 100.0, 260.0, 465.0, 10_000.0] {
        match layout.set_start_size(Some(request)) {
            Ok(()) => {
                let size = layout.start_size().expect("present after direct resize");
                assert!(size >= layout.start_min());
                assert!(size <= layout.start_max().expect("bounded fixture"));
            }
            Err(ValueError::OutOfRange { .. }) => {}
            Err(other) => panic!("unexpected error kind: {other}"),
        }
    }
}

#[test]
fn drag_intent_persists_across_container_resizes() {
    let mut layout = drag_fixture(SideStrategy::Consume);
    layout.set_start_size(Some(300.0)).expect("feasible");

    // Preserve-sides is the default resize strategy: growing the container
    // hands the new space to the middle while the dragged sizes hold.
    layout.set_container_size(900.0).expect("feasible");
    assert_close(layout.start_size(), 300.0);
    assert_close(layout.end_size(), 100.0);
    assert_eq!(layout.middle_size(), 500.0);

    // Shrinking below the ideals squeezes the middle to its floor first.
    layout.set_container_size(500.0).expect("feasible");
    assert!((layout.middle_size() - 130.0).abs() < 1e-6);
}

#[test]
fn strategy_swap_recomputes_immediately() {
    let mut layout = proportional_fixture();
    layout.set_container_size(400.0).expect("feasible");
    assert_close(layout.start_size(), 250.0);

    // Preserve-middle at this width pins both sides to their minimums
    // (middle ideal 200 > middle_max 145).
    layout
        .set_resize_strategy(ResizeStrategy::PreserveMiddle)
        .expect("feasible");
    assert_close(layout.start_size(), 250.0);
    assert_close(layout.end_size(), 5.0);
}

#[test]
fn full_config_path_matches_builder_path() {
    let from_json: SplitConfig = serde_json::from_str(
        r#"{
            "containerSize": 600,
            "startMin": 250,
            "startMax": 350,
            "startSize": 300,
            "middleMin": 130,
            "endMin": 5,
            "endMax": 150,
            "endSize": 100,
            "resizeStrategy": "proportional"
        }"#,
    )
    .expect("valid json");
    let a = SplitLayout::new(from_json).expect("valid config");
    let b = proportional_fixture();
    assert_eq!(a.snapshot(), b.snapshot());
}
