use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn premultiply_zero_alpha_clears_color() {
    let mut px = [200u8, 100, 50, 0];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [0, 0, 0, 0]);
}

#[test]
fn premultiply_then_unpremultiply_opaque_is_identity() {
    let src = [12u8, 34, 56, 255, 200, 100, 50, 255];
    let mut px = src;
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, src);
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, src);
}

#[test]
fn unpremultiply_half_alpha_restores_within_rounding() {
    let mut px = [100u8, 50, 200, 128];
    premultiply_rgba8_in_place(&mut px);
    unpremultiply_rgba8_in_place(&mut px);
    assert!((i32::from(px[0]) - 100).abs() <= 1);
    assert!((i32::from(px[1]) - 50).abs() <= 1);
    assert!((i32::from(px[2]) - 200).abs() <= 1);
    assert_eq!(px[3], 128);
}
