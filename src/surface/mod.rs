//! The editable composition: background, layers and export.

/// [`composition::CompositionSurface`] and its editing operations.
pub mod composition;
