//! Photoplate composes a background photo, image layers and text layers into a single exported
//! bitmap.
//!
//! Editing happens in screen space on a [`CompositionSurface`]:
//!
//! - Open a [`Template`] (or start blank) and lay it out with [`CompositionSurface::on_resize`]
//! - Add, move, pinch, restyle and delete layers
//! - [`CompositionSurface::render`] at export resolution, or hand the result to an [`ExportSink`]
//!
//! Rendering is a pure function of the surface state and can run on the rayon pool through
//! [`CompositionSurface::render_in_background`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Loading and preparing rasters, fonts and colors.
pub mod assets;
/// Export sinks.
pub mod encode;
/// Geometry helpers.
pub mod geometry;
/// Gesture tracking for interactive edits.
pub mod interaction;
/// Text and image layers.
pub mod layer;
/// Export rendering.
pub mod render;
/// The editable composition.
pub mod surface;
/// Template documents.
pub mod template;

pub use crate::foundation::config::{
    ENV_EXPORT_MAX_DIMENSION, ENV_PHOTO_MAX_DIMENSION, SurfaceConfig,
};
pub use crate::foundation::core::{Affine, Point, Rect, Rgba8, Rgba8Premul, Size, Vec2};
pub use crate::foundation::error::{PhotoplateError, PhotoplateResult};

pub use crate::assets::color::parse_color;
pub use crate::assets::fonts::{FontBook, TextEngine};
pub use crate::assets::raster::Raster;
pub use crate::assets::resolver::{AssetResolver, DirAssetResolver, MemoryAssetResolver};
pub use crate::encode::sink::{ExportSink, InMemorySink, PngFileSink, export};
pub use crate::geometry::scale::scale_rect;
pub use crate::interaction::gesture::{GesturePhase, PanTracker, PinchTracker};
pub use crate::layer::{
    ImageLayer, LayerEvent, LayerId, LayerKind, LayerObserver, LayerRef, TextLayer,
};
pub use crate::render::bitmap::Bitmap;
pub use crate::render::job::RenderJob;
pub use crate::render::snapshot::RenderSnapshot;
pub use crate::surface::composition::CompositionSurface;
pub use crate::template::model::{Template, Templates, TextSpec};

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
pub(crate) mod test_support;
