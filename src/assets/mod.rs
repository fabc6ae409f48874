//! Loading and preparing rasters, fonts and colors.

/// Named and hex color parsing.
pub mod color;
/// Image decoding.
pub mod decode;
/// Font registry and text layout.
pub mod fonts;
/// Premultiplied rasters and their transforms.
pub mod raster;
/// Asset id resolution.
pub mod resolver;
