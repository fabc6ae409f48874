//! Geometry helpers shared by layout, interaction and export.

/// Rectangle mapping between screen and export space.
pub mod scale;
