//! Turning gesture recognizer output into surface edits.

pub mod gesture;
