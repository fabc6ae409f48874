//! Template documents that describe a starting composition.

/// Serde model of the template JSON format.
pub mod model;
