use super::*;

#[test]
fn empty_bitmap_has_no_pixels() {
    let b = Bitmap::empty();
    assert!(b.is_empty());
    assert_eq!(b.pixel(0, 0), None);
}

#[test]
fn to_rgba_image_unpremultiplies() {
    let b = Bitmap {
        width: 2,
        height: 1,
        data: vec![128, 0, 0, 128, 0, 0, 0, 0],
        premultiplied: true,
    };
    let img = b.to_rgba_image().unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 128]);
    assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0, 0]);
    assert_eq!(b.pixel(0, 0), Some([128, 0, 0, 128]));
}

#[test]
fn to_rgba_image_rejects_bad_length() {
    let b = Bitmap {
        width: 3,
        height: 3,
        data: vec![0; 4],
        premultiplied: false,
    };
    assert!(matches!(
        b.to_rgba_image(),
        Err(PhotoplateError::ExportFailed(_))
    ));
}
