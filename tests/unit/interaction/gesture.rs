use super::*;

#[test]
fn pan_deltas_sum_to_cumulative() {
    let mut pan = PanTracker::new();
    let steps = [
        (GesturePhase::Began, Vec2::new(0.0, 0.0)),
        (GesturePhase::Changed, Vec2::new(5.0, -2.0)),
        (GesturePhase::Changed, Vec2::new(12.0, -1.0)),
        (GesturePhase::Ended, Vec2::new(15.0, 4.0)),
    ];
    let total = steps
        .iter()
        .fold(Vec2::ZERO, |acc, &(phase, v)| acc + pan.update(phase, v));
    assert_eq!(total, Vec2::new(15.0, 4.0));
    assert_eq!(pan, PanTracker::new());
}

#[test]
fn pan_cancel_applies_nothing() {
    let mut pan = PanTracker::new();
    pan.update(GesturePhase::Began, Vec2::ZERO);
    pan.update(GesturePhase::Changed, Vec2::new(3.0, 3.0));
    assert_eq!(
        pan.update(GesturePhase::Cancelled, Vec2::new(9.0, 9.0)),
        Vec2::ZERO
    );
}

#[test]
fn pinch_factors_multiply_to_cumulative() {
    let mut pinch = PinchTracker::new();
    let mut total = 1.0;
    for (phase, s) in [
        (GesturePhase::Began, 1.0),
        (GesturePhase::Changed, 1.5),
        (GesturePhase::Changed, 3.0),
        (GesturePhase::Ended, 2.0),
    ] {
        total *= pinch.update(phase, s);
    }
    assert!((total - 2.0).abs() < 1e-12);
    assert_eq!(pinch, PinchTracker::new());
}

#[test]
fn pinch_ignores_degenerate_scale() {
    let mut pinch = PinchTracker::new();
    pinch.update(GesturePhase::Began, 1.0);
    assert_eq!(pinch.update(GesturePhase::Changed, 0.0), 1.0);
    assert_eq!(pinch.update(GesturePhase::Changed, f64::NAN), 1.0);
    assert_eq!(pinch.update(GesturePhase::Changed, 2.0), 2.0);
    assert_eq!(pinch.update(GesturePhase::Cancelled, 4.0), 1.0);
}

#[test]
fn pan_began_moves_nothing() {
    let mut pan = PanTracker::new();
    assert_eq!(pan.update(GesturePhase::Began, Vec2::new(3.0, 4.0)), Vec2::ZERO);
    assert_eq!(
        pan.update(GesturePhase::Changed, Vec2::new(5.0, 4.0)),
        Vec2::new(2.0, 0.0)
    );
}
