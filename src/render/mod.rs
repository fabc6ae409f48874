//! Export rendering: snapshots, the CPU rasterizer and background jobs.

/// Export bitmaps.
pub mod bitmap;
pub(crate) mod cpu;
/// Background render jobs.
pub mod job;
/// Immutable render inputs.
pub mod snapshot;
