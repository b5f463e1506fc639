//! Smoothing, snapping and correspondence errors

use crate::float_types::Real;
use thiserror::Error;

/// Result alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, SmoothError>;

/// All the possible failures an edge-smoothing operation can report.
///
/// Every variant is recoverable: the operation that produced it is aborted
/// and the caller's data is left as it was before that operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SmoothError {
    /// (InsufficientPoints) The sequence is too short for the operation
    #[error("(InsufficientPoints) at least {required} control points are required, found {found}")]
    InsufficientPoints { found: usize, required: usize },

    /// (EmptyReferenceSet) Nearest-point snapping was asked to snap onto nothing
    #[error("(EmptyReferenceSet) cannot snap onto an empty reference point set")]
    EmptyReferenceSet,

    /// (NoCorrespondenceMatch) A vertex has no control point at its rounded position.
    /// Reported per vertex and never fatal.
    #[error("(NoCorrespondenceMatch) vertex {vertex} has no control point at its rounded position")]
    NoCorrespondenceMatch { vertex: usize },

    /// (InvalidParameter) A smoothing parameter is outside its usable range
    #[error("(InvalidParameter) {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: Real,
        reason: &'static str,
    },

    /// (NoVertices) A pipeline step needs recorded mesh vertices and there are none
    #[error("(NoVertices) no mesh vertices were recorded for this session")]
    NoVertices,
}

impl SmoothError {
    /// Shorthand for [`SmoothError::InsufficientPoints`].
    pub const fn insufficient(found: usize, required: usize) -> Self {
        SmoothError::InsufficientPoints { found, required }
    }

    /// `true` for failures that only affect a single item and do not abort
    /// the surrounding operation.
    pub const fn is_per_item(&self) -> bool {
        matches!(self, SmoothError::NoCorrespondenceMatch { .. })
    }
}
