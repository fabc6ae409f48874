use crate::assets::raster::Raster;
use crate::foundation::config::SurfaceConfig;
use crate::foundation::core::{Point, Rect, Size};
use crate::foundation::error::PhotoplateResult;
use crate::layer::LayerId;

/// A photo placed above the background and below all text.
#[derive(Clone, Debug)]
pub struct ImageLayer {
    id: LayerId,
    raster: Raster,
    frame: Rect,
}

impl ImageLayer {
    /// Downsample `raster` to the photo bound and size the frame at the initial scale of the
    /// downsampled pixel size. The frame origin is zero until the surface places it.
    pub fn create(id: LayerId, raster: &Raster, config: &SurfaceConfig) -> PhotoplateResult<Self> {
        let raster = raster.downsample(config.photo_max_dimension)?;
        let size = raster.size() * config.image_initial_scale;
        Ok(Self {
            id,
            raster,
            frame: Rect::from_origin_size(Point::ORIGIN, size),
        })
    }

    /// Layer identity.
    pub fn id(&self) -> LayerId {
        self.id
    }

    /// Downsampled pixels drawn into the frame.
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Frame in screen space.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Pixel size of the stored raster.
    pub fn pixel_size(&self) -> Size {
        self.raster.size()
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/image.rs"]
mod tests;
