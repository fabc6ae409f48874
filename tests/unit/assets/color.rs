use super::*;

#[test]
fn parses_named_colors_case_insensitively() {
    assert_eq!(parse_color("black").unwrap(), Rgba8::BLACK);
    assert_eq!(parse_color(" White ").unwrap(), Rgba8::WHITE);
    assert_eq!(parse_color("GREY").unwrap(), parse_color("gray").unwrap());
    assert_eq!(parse_color("clear").unwrap().a, 0);
}

#[test]
fn parses_hex_rgb_and_rgba() {
    assert_eq!(parse_color("#ff0000").unwrap(), Rgba8::opaque(255, 0, 0));
    let c = parse_color("#0000FF80").unwrap();
    assert_eq!((c.b, c.a), (255, 128));
}

#[test]
fn rejects_unknown_and_malformed() {
    for bad in ["chartreuse-ish", "", "#12345", "#gg0000", "#ééé"] {
        let err = parse_color(bad).unwrap_err();
        assert!(
            matches!(err, PhotoplateError::MalformedTemplate(_)),
            "{bad}: {err}"
        );
    }
}
