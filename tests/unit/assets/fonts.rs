use super::*;
use crate::test_support;

#[test]
fn resolve_is_case_insensitive_and_falls_back() {
    let book = test_support::font_book();
    let r = book.resolve("georgia");
    assert_eq!(r.family, "Georgia");
    assert!(!r.fell_back);

    let r = book.resolve("Helvetica");
    assert_eq!(r.family, "DejaVu Sans");
    assert!(r.fell_back);
    assert!(book.contains("DEJAVU SANS"));
}

#[test]
fn register_replaces_same_family() {
    let mut book = test_support::font_book();
    book.register("georgia", test_support::SANS.to_vec());
    assert_eq!(book.families().count(), 2);
    assert_eq!(book.resolve("Georgia").bytes.len(), test_support::SANS.len());
}

#[test]
fn engine_rejects_non_font_bytes() {
    let book = FontBook::new("Broken", b"not a font".to_vec());
    let err = TextEngine::new(book).unwrap_err();
    assert!(matches!(err, PhotoplateError::AssetNotFound(_)));
}

#[test]
fn missing_font_file_is_asset_not_found() {
    let err = FontBook::from_default_file("Nope", "tests/data/fonts/missing.ttf").unwrap_err();
    assert!(matches!(err, PhotoplateError::AssetNotFound(_)));
}

#[test]
fn measure_grows_with_content_and_size() {
    let mut engine = TextEngine::new(test_support::font_book()).unwrap();
    let short = engine.measure("Text", "DejaVu Sans", 20.0, Some(180.0)).unwrap();
    let long = engine
        .measure("Text and more", "DejaVu Sans", 20.0, Some(180.0))
        .unwrap();
    let big = engine.measure("Text", "DejaVu Sans", 40.0, Some(180.0)).unwrap();

    assert!(short.width > 0.0 && short.height > 0.0);
    assert!(long.width > short.width);
    assert_eq!(long.height, short.height);
    assert!(big.width > short.width);
    assert!(big.height > short.height);
}

#[test]
fn measure_wraps_at_max_width() {
    let mut engine = TextEngine::new(test_support::font_book()).unwrap();
    let text = "many short words that will certainly not fit on one line of text";
    let single = engine.measure("many", "DejaVu Sans", 20.0, Some(180.0)).unwrap();
    let wrapped = engine.measure(text, "DejaVu Sans", 20.0, Some(180.0)).unwrap();
    assert!(wrapped.width <= 180.0);
    assert!(wrapped.height >= single.height * 2.0);
}

#[test]
fn unknown_family_measures_like_default() {
    let mut engine = TextEngine::new(test_support::font_book()).unwrap();
    let a = engine.measure("Hello", "Helvetica", 20.0, None).unwrap();
    let b = engine.measure("Hello", "DejaVu Sans", 20.0, None).unwrap();
    assert_eq!(a, b);
}

#[test]
fn layout_rejects_non_positive_size() {
    let mut engine = TextEngine::new(test_support::font_book()).unwrap();
    assert!(
        engine
            .layout("x", "DejaVu Sans", 0.0, TextBrushRgba8::default(), None)
            .is_err()
    );
}
