use std::sync::Arc;

use image::imageops::{self, FilterType};

use crate::foundation::core::{Rgba8, Size};
use crate::foundation::error::{PhotoplateError, PhotoplateResult};
use crate::foundation::math::premultiply_rgba8_in_place;

type PremulView<'a> = image::ImageBuffer<image::Rgba<u8>, &'a [u8]>;

/// Resampling filter shared by every resize so identical input always yields identical pixels.
const RESAMPLE_FILTER: FilterType = FilterType::Triangle;

/// Decoded raster image in premultiplied RGBA8 form.
///
/// Pixel storage is shared behind an [`Arc`], so clones are cheap and snapshots taken for
/// rendering never copy pixel data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    rgba8_premul: Arc<Vec<u8>>,
}

impl Raster {
    /// Wrap already premultiplied, tightly packed, row-major RGBA8 bytes.
    pub fn from_premul_rgba8(width: u32, height: u32, bytes: Vec<u8>) -> PhotoplateResult<Self> {
        let expected = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4);
        if bytes.len() != expected {
            return Err(PhotoplateError::invalid_geometry(format!(
                "raster byte len {} does not match {width}x{height}",
                bytes.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(bytes),
        })
    }

    /// Premultiply straight-alpha RGBA8 bytes and wrap them.
    pub fn from_straight_rgba8(
        width: u32,
        height: u32,
        mut bytes: Vec<u8>,
    ) -> PhotoplateResult<Self> {
        premultiply_rgba8_in_place(&mut bytes);
        Self::from_premul_rgba8(width, height, bytes)
    }

    /// Convert a decoded straight-alpha image.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut bytes = img.into_raw();
        premultiply_rgba8_in_place(&mut bytes);
        Self {
            width,
            height,
            rgba8_premul: Arc::new(bytes),
        }
    }

    /// A raster filled with one color.
    pub fn solid(width: u32, height: u32, color: Rgba8) -> Self {
        let px = color.premultiplied().to_array();
        let n = (width as usize) * (height as usize);
        let mut bytes = Vec::with_capacity(n * 4);
        for _ in 0..n {
            bytes.extend_from_slice(&px);
        }
        Self {
            width,
            height,
            rgba8_premul: Arc::new(bytes),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel dimensions as a float size.
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// `true` when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Premultiplied RGBA8 bytes, row-major.
    pub fn premul_bytes(&self) -> &[u8] {
        self.rgba8_premul.as_slice()
    }

    /// Premultiplied pixel at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.rgba8_premul.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Return `true` when both rasters share the same pixel allocation.
    pub fn shares_pixels_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.rgba8_premul, &other.rgba8_premul)
    }

    /// Crop the longer dimension symmetrically about the center, producing a square of side
    /// `min(width, height)`.
    pub fn square_crop(&self) -> Self {
        if self.width == self.height || self.is_empty() {
            return self.clone();
        }
        let side = self.width.min(self.height);
        let x = (self.width - side) / 2;
        let y = (self.height - side) / 2;
        let stride = self.width as usize * 4;
        let row_len = side as usize * 4;
        let src = self.rgba8_premul.as_slice();
        let mut bytes = Vec::with_capacity(row_len * side as usize);
        for row in 0..side as usize {
            let start = (y as usize + row) * stride + x as usize * 4;
            bytes.extend_from_slice(&src[start..start + row_len]);
        }
        Self {
            width: side,
            height: side,
            rgba8_premul: Arc::new(bytes),
        }
    }

    /// Uniformly rescale so the longer side equals `max_dimension`, preserving aspect ratio.
    ///
    /// Images smaller than the bound are scaled up. The shorter side is rounded to the nearest
    /// pixel and never collapses below one pixel.
    pub fn downsample(&self, max_dimension: u32) -> PhotoplateResult<Self> {
        if self.is_empty() {
            return Err(PhotoplateError::invalid_geometry(format!(
                "cannot resample a {}x{} raster",
                self.width, self.height
            )));
        }
        if max_dimension == 0 {
            return Err(PhotoplateError::invalid_geometry(
                "downsample bound must be > 0",
            ));
        }

        let (w, h) = fit_longer_side(self.width, self.height, max_dimension);
        if (w, h) == (self.width, self.height) {
            return Ok(self.clone());
        }

        let view = self
            .view()
            .ok_or_else(|| PhotoplateError::invalid_geometry("raster buffer is inconsistent"))?;
        let resized = imageops::resize(&view, w, h, RESAMPLE_FILTER);
        Ok(Self {
            width: w,
            height: h,
            rgba8_premul: Arc::new(resized.into_raw()),
        })
    }

    fn view(&self) -> Option<PremulView<'_>> {
        image::ImageBuffer::from_raw(self.width, self.height, self.rgba8_premul.as_slice())
    }
}

/// Target dimensions whose longer side is `bound`.
pub(crate) fn fit_longer_side(width: u32, height: u32, bound: u32) -> (u32, u32) {
    let scaled = |short: u32, long: u32| -> u32 {
        let v = (f64::from(short) * f64::from(bound) / f64::from(long)).round();
        (v as u32).max(1)
    };
    if width >= height {
        (bound, scaled(height, width))
    } else {
        (scaled(width, height), bound)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/raster.rs"]
mod tests;
