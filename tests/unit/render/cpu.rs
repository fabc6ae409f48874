use super::*;
use crate::foundation::core::Rgba8;
use crate::test_support;

fn snapshot(background: Option<Raster>) -> RenderSnapshot {
    RenderSnapshot {
        background,
        screen_size: Size::new(400.0, 400.0),
        export_max_dimension: 200,
        control_width: 20.0,
        images: Vec::new(),
        texts: Vec::new(),
        fonts: test_support::font_book(),
    }
}

#[test]
fn no_background_renders_empty() {
    let out = render_snapshot(&snapshot(None)).unwrap();
    assert!(out.is_empty());
}

#[test]
fn background_fills_canvas_at_export_bound() {
    let snap = snapshot(Some(test_support::solid(100, 50, (0, 0, 255))));
    let out = render_snapshot(&snap).unwrap();
    assert_eq!((out.width, out.height), (200, 100));
    assert!(out.premultiplied);
    assert_eq!(out.pixel(100, 50), Some([0, 0, 255, 255]));
}

#[test]
fn image_is_stretched_into_mapped_frame() {
    let mut snap = snapshot(Some(test_support::solid(100, 100, (0, 0, 255))));
    snap.images.push(ImageItem {
        raster: test_support::solid(10, 30, (255, 0, 0)),
        frame: Rect::new(0.0, 0.0, 200.0, 200.0),
    });
    let out = render_snapshot(&snap).unwrap();
    assert_eq!((out.width, out.height), (200, 200));
    // Frame covers the top-left quarter of the screen, so of the export.
    assert_eq!(out.pixel(50, 50), Some([255, 0, 0, 255]));
    assert_eq!(out.pixel(150, 150), Some([0, 0, 255, 255]));
}

#[test]
fn text_draws_inside_content_rect() {
    let mut snap = snapshot(Some(test_support::solid(200, 200, (255, 255, 255))));
    snap.texts.push(TextItem {
        content: "MMMM".to_owned(),
        font: "DejaVu Sans".to_owned(),
        size: 40.0,
        color: Rgba8::BLACK,
        frame: Rect::new(0.0, 0.0, 400.0, 200.0),
    });
    let out = render_snapshot(&snap).unwrap();

    let dark_rows: Vec<u32> = (0..out.height)
        .filter(|&y| (0..out.width).any(|x| out.pixel(x, y).is_some_and(|p| p[0] < 128)))
        .collect();
    assert!(!dark_rows.is_empty());
    // Content starts below the control inset (20 screen units -> 10 export px).
    assert!(dark_rows[0] >= 10);
}

#[test]
fn layers_without_screen_size_are_rejected() {
    let mut snap = snapshot(Some(test_support::solid(10, 10, (0, 0, 0))));
    snap.screen_size = Size::ZERO;
    assert!(render_snapshot(&snap).is_ok());

    snap.images.push(ImageItem {
        raster: test_support::solid(2, 2, (255, 0, 0)),
        frame: Rect::new(0.0, 0.0, 1.0, 1.0),
    });
    assert!(matches!(
        render_snapshot(&snap),
        Err(PhotoplateError::InvalidGeometry(_))
    ));
}

#[test]
fn rendering_is_deterministic() {
    let mut snap = snapshot(Some(test_support::solid(64, 48, (10, 200, 30))));
    snap.images.push(ImageItem {
        raster: test_support::solid(8, 8, (200, 10, 10)),
        frame: Rect::new(33.3, 71.7, 180.2, 140.9),
    });
    snap.texts.push(TextItem {
        content: "Hello".to_owned(),
        font: "Georgia".to_owned(),
        size: 24.0,
        color: Rgba8::WHITE,
        frame: Rect::new(120.0, 160.0, 260.0, 210.0),
    });
    assert_eq!(
        render_snapshot(&snap).unwrap(),
        render_snapshot(&snap).unwrap()
    );
}
