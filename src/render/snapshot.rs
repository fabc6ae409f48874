use crate::assets::fonts::FontBook;
use crate::assets::raster::Raster;
use crate::foundation::core::{Rect, Rgba8, Size};
use crate::foundation::error::PhotoplateResult;
use crate::render::bitmap::Bitmap;

/// Immutable copy of everything an export needs.
///
/// Frames and text styles are copied; pixels and font bytes are shared, so taking a snapshot is
/// cheap and the snapshot can be rendered on another thread while editing continues.
#[derive(Clone, Debug)]
pub struct RenderSnapshot {
    pub(crate) background: Option<Raster>,
    pub(crate) screen_size: Size,
    pub(crate) export_max_dimension: u32,
    pub(crate) control_width: f64,
    pub(crate) images: Vec<ImageItem>,
    pub(crate) texts: Vec<TextItem>,
    pub(crate) fonts: FontBook,
}

#[derive(Clone, Debug)]
pub(crate) struct ImageItem {
    pub(crate) raster: Raster,
    pub(crate) frame: Rect,
}

#[derive(Clone, Debug)]
pub(crate) struct TextItem {
    pub(crate) content: String,
    pub(crate) font: String,
    pub(crate) size: f64,
    pub(crate) color: Rgba8,
    pub(crate) frame: Rect,
}

impl RenderSnapshot {
    /// Rasterize the snapshot at export resolution.
    pub fn render(&self) -> PhotoplateResult<Bitmap> {
        crate::render::cpu::render_snapshot(self)
    }

    /// Screen size the layer frames are expressed against.
    pub fn screen_size(&self) -> Size {
        self.screen_size
    }

    /// Number of image and text layers captured.
    pub fn layer_count(&self) -> usize {
        self.images.len() + self.texts.len()
    }

    /// `true` when a background was present at snapshot time.
    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }
}
