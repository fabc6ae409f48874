use crate::foundation::core::Size;
use crate::layer::LayerId;

/// Notification a layer raises towards its owner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayerEvent {
    /// A text layer's natural size no longer matches its frame size.
    ContentSizeChanged {
        /// Layer whose content changed.
        layer: LayerId,
        /// New natural size including the delete-control inset.
        size: Size,
    },
    /// The layer's delete control was activated.
    DeleteRequested {
        /// Layer asking to be removed.
        layer: LayerId,
    },
}

impl LayerEvent {
    /// Layer the event is about.
    pub fn layer(&self) -> LayerId {
        match *self {
            Self::ContentSizeChanged { layer, .. } | Self::DeleteRequested { layer } => layer,
        }
    }
}

/// Owner-side handler for [`LayerEvent`]s.
pub trait LayerObserver {
    /// Resize the layer's frame to `new_size`, keeping its top-left origin.
    fn on_content_size_changed(&mut self, layer: LayerId, new_size: Size);

    /// Remove the layer; no further events for it are expected afterwards.
    fn on_delete_requested(&mut self, layer: LayerId);

    /// Route `event` to the matching handler.
    fn notify(&mut self, event: LayerEvent) {
        match event {
            LayerEvent::ContentSizeChanged { layer, size } => {
                self.on_content_size_changed(layer, size);
            }
            LayerEvent::DeleteRequested { layer } => self.on_delete_requested(layer),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/observer.rs"]
mod tests;
