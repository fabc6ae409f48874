use crate::foundation::error::{PhotoplateError, PhotoplateResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;

/// A rendered RGBA8 export.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Bitmap {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl Bitmap {
    /// The 0x0 bitmap produced when a surface has no background.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            data: Vec::new(),
            premultiplied: true,
        }
    }

    /// `true` when the bitmap has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel at `(x, y)` as stored, or `None` outside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha copy suitable for encoding.
    pub fn to_rgba_image(&self) -> PhotoplateResult<image::RgbaImage> {
        let mut data = self.data.clone();
        if self.premultiplied {
            unpremultiply_rgba8_in_place(&mut data);
        }
        image::RgbaImage::from_raw(self.width, self.height, data).ok_or_else(|| {
            PhotoplateError::export_failed(format!(
                "bitmap byte len {} does not match {}x{}",
                self.data.len(),
                self.width,
                self.height
            ))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/bitmap.rs"]
mod tests;
