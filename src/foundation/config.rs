use crate::foundation::error::{PhotoplateError, PhotoplateResult};

/// Environment variable overriding [`SurfaceConfig::export_max_dimension`].
pub const ENV_EXPORT_MAX_DIMENSION: &str = "PHOTOPLATE_EXPORT_MAX_DIMENSION";
/// Environment variable overriding [`SurfaceConfig::photo_max_dimension`].
pub const ENV_PHOTO_MAX_DIMENSION: &str = "PHOTOPLATE_PHOTO_MAX_DIMENSION";

/// Immutable style and sizing constants for a composition surface.
///
/// All lengths are in screen-space units (points) unless suffixed with `dimension`, which are
/// pixel bounds for the longer side of a raster.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Side of the square delete control inset on the top/right of every text layer.
    pub control_width: f64,
    /// Width at which text wraps instead of growing the layer further.
    pub max_text_width: f64,
    /// Longer-side bound applied to photos when they are inserted as image layers.
    pub photo_max_dimension: u32,
    /// Longer-side bound of the exported bitmap.
    pub export_max_dimension: u32,
    /// Content given to freshly created text layers.
    pub placeholder_text: String,
    /// Initial frame size of an image layer relative to its downsampled pixel size.
    pub image_initial_scale: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            control_width: 20.0,
            max_text_width: 180.0,
            photo_max_dimension: 1080,
            export_max_dimension: 1980,
            placeholder_text: "Text".to_owned(),
            image_initial_scale: 0.5,
        }
    }
}

impl SurfaceConfig {
    /// Return a copy with a different export bound.
    pub fn with_export_max_dimension(mut self, px: u32) -> Self {
        self.export_max_dimension = px;
        self
    }

    /// Return a copy with a different photo insertion bound.
    pub fn with_photo_max_dimension(mut self, px: u32) -> Self {
        self.photo_max_dimension = px;
        self
    }

    /// Return a copy with a different text wrap width.
    pub fn with_max_text_width(mut self, width: f64) -> Self {
        self.max_text_width = width;
        self
    }

    /// Return a copy with a different delete-control width.
    pub fn with_control_width(mut self, width: f64) -> Self {
        self.control_width = width;
        self
    }

    /// Apply raster bounds from the environment.
    ///
    /// Unset, unparsable or zero values leave the current setting untouched.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(px) = env_dimension(ENV_EXPORT_MAX_DIMENSION) {
            self.export_max_dimension = px;
        }
        if let Some(px) = env_dimension(ENV_PHOTO_MAX_DIMENSION) {
            self.photo_max_dimension = px;
        }
        self
    }

    /// Reject configurations that would make layout or scaling degenerate.
    pub fn validate(&self) -> PhotoplateResult<()> {
        if !self.control_width.is_finite() || self.control_width < 0.0 {
            return Err(PhotoplateError::invalid_geometry(
                "control_width must be finite and >= 0",
            ));
        }
        if !self.max_text_width.is_finite() || self.max_text_width <= 0.0 {
            return Err(PhotoplateError::invalid_geometry(
                "max_text_width must be finite and > 0",
            ));
        }
        if self.photo_max_dimension == 0 || self.export_max_dimension == 0 {
            return Err(PhotoplateError::invalid_geometry(
                "raster bounds must be > 0",
            ));
        }
        if !self.image_initial_scale.is_finite() || self.image_initial_scale <= 0.0 {
            return Err(PhotoplateError::invalid_geometry(
                "image_initial_scale must be finite and > 0",
            ));
        }
        Ok(())
    }
}

fn env_dimension(key: &str) -> Option<u32> {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|&n| n > 0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
