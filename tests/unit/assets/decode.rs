use std::io::Cursor;

use super::*;

#[test]
fn decode_image_png_dimensions_and_premul() {
    let src_rgba = vec![100u8, 50u8, 200u8, 128u8];
    let img = image::RgbaImage::from_raw(1, 1, src_rgba).unwrap();

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let raster = decode_image(&buf).unwrap();
    assert_eq!(raster.width(), 1);
    assert_eq!(raster.height(), 1);
    assert_eq!(
        raster.premul_bytes(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_garbage_is_wrapped_error() {
    let err = decode_image(b"definitely not an image").unwrap_err();
    assert!(err.to_string().contains("decode image"));
}
