use std::io::Cursor;

use super::*;
use crate::test_support;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("photoplate-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn normalize_path_slash_normalization() {
    assert_eq!(normalize_rel_path("a/b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("a\\b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("./a//b").unwrap(), "a/b");
    assert!(normalize_rel_path("../x.png").is_err());
    assert!(normalize_rel_path("/abs.png").is_err());
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path("./").is_err());
}

#[test]
fn dir_resolver_tries_image_extensions() {
    let dir = scratch_dir("ext");
    std::fs::write(dir.join("bg1.png"), png_bytes(3, 2)).unwrap();

    let resolver = DirAssetResolver::new(&dir);
    let raster = resolver.resolve("bg1").unwrap();
    assert_eq!((raster.width(), raster.height()), (3, 2));
    let raster = resolver.resolve("bg1.png").unwrap();
    assert_eq!(raster.width(), 3);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn dir_resolver_reports_missing_and_undecodable() {
    let dir = scratch_dir("missing");
    std::fs::write(dir.join("junk.png"), b"not a png").unwrap();

    let resolver = DirAssetResolver::new(&dir);
    assert!(matches!(
        resolver.resolve("nope"),
        Err(PhotoplateError::AssetNotFound(_))
    ));
    assert!(matches!(
        resolver.resolve("junk"),
        Err(PhotoplateError::AssetNotFound(_))
    ));
    assert!(matches!(
        resolver.resolve("../escape"),
        Err(PhotoplateError::AssetNotFound(_))
    ));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn memory_resolver_shares_pixels() {
    let bg = test_support::solid(4, 4, (1, 2, 3));
    let resolver = MemoryAssetResolver::new().with_asset("bg", bg.clone());
    assert!(resolver.resolve("bg").unwrap().shares_pixels_with(&bg));
    assert!(resolver.resolve("other").is_err());
}
