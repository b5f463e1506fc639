//! Curve algorithms.

pub mod smoothing;
pub mod snapping;
