//! Editable layers placed on a composition surface.

/// Photo layers.
pub mod image;
/// Layer events and their owner-side handler.
pub mod observer;
/// Text layers.
pub mod text;

pub use image::ImageLayer;
pub use observer::{LayerEvent, LayerObserver};
pub use text::TextLayer;

use crate::foundation::core::Rect;

/// Stable identity of a layer within one surface. Ids are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerId(pub u64);

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "layer#{}", self.0)
    }
}

/// Discriminant of a layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerKind {
    /// [`TextLayer`].
    Text,
    /// [`ImageLayer`].
    Image,
}

/// Borrowed view of either kind of layer, in paint order.
#[derive(Clone, Copy, Debug)]
pub enum LayerRef<'a> {
    /// Text layer.
    Text(&'a TextLayer),
    /// Image layer.
    Image(&'a ImageLayer),
}

impl LayerRef<'_> {
    /// Identity of the referenced layer.
    pub fn id(&self) -> LayerId {
        match self {
            Self::Text(t) => t.id(),
            Self::Image(i) => i.id(),
        }
    }

    /// Frame in screen space.
    pub fn frame(&self) -> Rect {
        match self {
            Self::Text(t) => t.frame(),
            Self::Image(i) => i.frame(),
        }
    }

    /// Kind of the referenced layer.
    pub fn kind(&self) -> LayerKind {
        match self {
            Self::Text(_) => LayerKind::Text,
            Self::Image(_) => LayerKind::Image,
        }
    }
}
