/// Convenience result type used across photoplate.
pub type PhotoplateResult<T> = Result<T, PhotoplateError>;

/// Top-level error taxonomy used by compositor APIs.
#[derive(thiserror::Error, Debug)]
pub enum PhotoplateError {
    /// Zero, negative or non-finite reference dimensions during scaling or resampling.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Template document failed to parse or validate.
    #[error("malformed template: {0}")]
    MalformedTemplate(String),

    /// A background or photo asset could not be located or decoded.
    #[error("asset not found: {0}")]
    AssetNotFound(String),

    /// The export sink reported a failure.
    #[error("export failed: {0}")]
    ExportFailed(String),

    /// Rasterizer resource failures (surface limits, text layout).
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PhotoplateError {
    /// Build a [`PhotoplateError::InvalidGeometry`] value.
    pub fn invalid_geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }

    /// Build a [`PhotoplateError::MalformedTemplate`] value.
    pub fn malformed_template(msg: impl Into<String>) -> Self {
        Self::MalformedTemplate(msg.into())
    }

    /// Build a [`PhotoplateError::AssetNotFound`] value.
    pub fn asset_not_found(msg: impl Into<String>) -> Self {
        Self::AssetNotFound(msg.into())
    }

    /// Build a [`PhotoplateError::ExportFailed`] value.
    pub fn export_failed(msg: impl Into<String>) -> Self {
        Self::ExportFailed(msg.into())
    }

    /// Build a [`PhotoplateError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
