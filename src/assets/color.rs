use crate::foundation::core::Rgba8;
use crate::foundation::error::{PhotoplateError, PhotoplateResult};

const NAMED: &[(&str, Rgba8)] = &[
    ("black", Rgba8::opaque(0, 0, 0)),
    ("white", Rgba8::opaque(255, 255, 255)),
    ("red", Rgba8::opaque(255, 0, 0)),
    ("green", Rgba8::opaque(0, 255, 0)),
    ("blue", Rgba8::opaque(0, 0, 255)),
    ("gray", Rgba8::opaque(128, 128, 128)),
    ("grey", Rgba8::opaque(128, 128, 128)),
    ("darkgray", Rgba8::opaque(85, 85, 85)),
    ("lightgray", Rgba8::opaque(170, 170, 170)),
    ("yellow", Rgba8::opaque(255, 255, 0)),
    ("orange", Rgba8::opaque(255, 128, 0)),
    ("purple", Rgba8::opaque(128, 0, 128)),
    ("pink", Rgba8::opaque(255, 192, 203)),
    ("brown", Rgba8::opaque(153, 102, 51)),
    ("cyan", Rgba8::opaque(0, 255, 255)),
    ("magenta", Rgba8::opaque(255, 0, 255)),
    (
        "clear",
        Rgba8 {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        },
    ),
];

/// Parse a template color: a named color (case-insensitive) or `#RRGGBB` / `#RRGGBBAA`.
pub fn parse_color(s: &str) -> PhotoplateResult<Rgba8> {
    let s = s.trim();
    if s.starts_with('#') {
        return parse_hex(s).map_err(PhotoplateError::malformed_template);
    }
    let lower = s.to_ascii_lowercase();
    NAMED
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, c)| *c)
        .ok_or_else(|| PhotoplateError::malformed_template(format!("unknown color \"{s}\"")))
}

fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ascii".to_owned());
    }
    let (r, g, b, a) = match s.len() {
        6 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            255,
        ),
        8 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        ),
        _ => {
            return Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned());
        }
    };
    Ok(Rgba8 { r, g, b, a })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
