use anyhow::Context;

use crate::assets::raster::Raster;
use crate::foundation::error::PhotoplateResult;

/// Decode encoded image bytes (PNG, JPEG, ...) into a premultiplied [`Raster`].
pub fn decode_image(bytes: &[u8]) -> PhotoplateResult<Raster> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(Raster::from_rgba_image(dyn_img.to_rgba8()))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
