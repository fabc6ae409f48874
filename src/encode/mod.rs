//! Delivering exported bitmaps to their destination.

/// Export sink trait and built-in sinks.
pub mod sink;
