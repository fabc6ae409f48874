use super::*;

fn approx_rect(a: Rect, b: Rect) -> bool {
    const EPS: f64 = 1e-9;
    (a.x0 - b.x0).abs() < EPS
        && (a.y0 - b.y0).abs() < EPS
        && (a.x1 - b.x1).abs() < EPS
        && (a.y1 - b.y1).abs() < EPS
}

#[test]
fn scale_rect_uses_per_axis_ratios() {
    let r = Rect::from_origin_size((10.0, 20.0), (30.0, 40.0));
    let out = scale_rect(r, Size::new(100.0, 200.0), Size::new(1000.0, 1000.0)).unwrap();
    assert!(approx_rect(
        out,
        Rect::from_origin_size((100.0, 100.0), (300.0, 200.0))
    ));
}

#[test]
fn scale_rect_round_trip_returns_input() {
    let sizes = [
        (Size::new(375.0, 375.0), Size::new(1980.0, 1980.0)),
        (Size::new(320.0, 480.0), Size::new(1980.0, 1320.0)),
        (Size::new(3.0, 7.0), Size::new(11.0, 5.0)),
    ];
    let rects = [
        Rect::from_origin_size((0.0, 0.0), (1.0, 1.0)),
        Rect::from_origin_size((12.5, -4.0), (80.0, 33.3)),
        Rect::from_origin_size((187.5, 187.5), (540.0, 270.0)),
    ];
    for (a, b) in sizes {
        for r in rects {
            let there = scale_rect(r, a, b).unwrap();
            let back = scale_rect(there, b, a).unwrap();
            assert!(approx_rect(back, r), "{r:?} -> {there:?} -> {back:?}");
        }
    }
}

#[test]
fn scale_rect_rejects_zero_source() {
    let r = Rect::from_origin_size((0.0, 0.0), (1.0, 1.0));
    let err = scale_rect(r, Size::new(0.0, 10.0), Size::new(10.0, 10.0)).unwrap_err();
    assert!(matches!(err, PhotoplateError::InvalidGeometry(_)));
    assert!(scale_rect(r, Size::new(10.0, 10.0), Size::new(f64::NAN, 1.0)).is_err());
}

#[test]
fn inset_for_control_trims_top_and_right() {
    let frame = Rect::from_origin_size((50.0, 60.0), (100.0, 40.0));
    let inner = inset_for_control(frame, 20.0);
    assert_eq!(inner, Rect::from_origin_size((50.0, 80.0), (80.0, 20.0)));
}

#[test]
fn inset_for_control_clamps_to_empty() {
    let frame = Rect::from_origin_size((0.0, 0.0), (10.0, 5.0));
    let inner = inset_for_control(frame, 20.0);
    assert_eq!(inner.width(), 0.0);
    assert_eq!(inner.height(), 0.0);
}

#[test]
fn scale_about_center_keeps_center() {
    let frame = Rect::from_origin_size((10.0, 10.0), (20.0, 40.0));
    let out = scale_frame_about_center(frame, 1.5).unwrap();
    assert_eq!(out.center(), frame.center());
    assert!((out.width() - 30.0).abs() < 1e-12);
    assert!((out.height() - 60.0).abs() < 1e-12);
    assert!(scale_frame_about_center(frame, 0.0).is_err());
}

#[test]
fn translate_is_additive() {
    let frame = Rect::from_origin_size((1.0, 2.0), (3.0, 4.0));
    let out = translate_frame(frame, Vec2::new(5.0, -1.0));
    assert_eq!(out, Rect::from_origin_size((6.0, 1.0), (3.0, 4.0)));
}

#[test]
fn centered_in_places_center_on_container_center() {
    let r = centered_in(Size::new(40.0, 20.0), Size::new(100.0, 100.0));
    assert_eq!(r.center(), Point::new(50.0, 50.0));
    assert_eq!(r.size(), Size::new(40.0, 20.0));
}

#[test]
fn reposition_keeps_size_and_relative_origin() {
    let frame = Rect::from_origin_size((50.0, 25.0), (10.0, 10.0));
    let out =
        reposition_proportionally(frame, Size::new(100.0, 100.0), Size::new(200.0, 50.0)).unwrap();
    assert_eq!(out, Rect::from_origin_size((100.0, 12.5), (10.0, 10.0)));
}
