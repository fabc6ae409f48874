use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::{PhotoplateError, PhotoplateResult};
use crate::render::bitmap::Bitmap;
use crate::surface::composition::CompositionSurface;

/// Destination for an exported bitmap, such as a photo library or a file.
pub trait ExportSink {
    /// Accept one export. Failures should be reported as [`PhotoplateError::ExportFailed`].
    fn export(&mut self, bitmap: &Bitmap) -> PhotoplateResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    exports: Vec<Bitmap>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the captured exports, oldest first.
    pub fn exports(&self) -> &[Bitmap] {
        &self.exports
    }

    /// Most recent export.
    pub fn last(&self) -> Option<&Bitmap> {
        self.exports.last()
    }
}

impl ExportSink for InMemorySink {
    fn export(&mut self, bitmap: &Bitmap) -> PhotoplateResult<()> {
        self.exports.push(bitmap.clone());
        Ok(())
    }
}

/// Writes each export as a PNG file, replacing any previous file at the path.
#[derive(Clone, Debug)]
pub struct PngFileSink {
    path: PathBuf,
}

impl PngFileSink {
    /// Sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExportSink for PngFileSink {
    fn export(&mut self, bitmap: &Bitmap) -> PhotoplateResult<()> {
        let img = bitmap.to_rgba_image()?;
        img.save_with_format(&self.path, image::ImageFormat::Png)
            .with_context(|| format!("write PNG '{}'", self.path.display()))
            .map_err(|e| PhotoplateError::export_failed(format!("{e:#}")))
    }
}

/// Render `surface` and hand the result to `sink`.
///
/// A surface without a background renders an empty bitmap, which cannot be exported.
#[tracing::instrument(skip_all)]
pub fn export(surface: &CompositionSurface, sink: &mut dyn ExportSink) -> PhotoplateResult<()> {
    let bitmap = surface.render()?;
    if bitmap.is_empty() {
        return Err(PhotoplateError::export_failed(
            "nothing to export: surface has no background",
        ));
    }
    sink.export(&bitmap)?;
    tracing::debug!(width = bitmap.width, height = bitmap.height, "exported");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
