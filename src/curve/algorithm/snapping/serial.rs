//! Serial nearest-point snapping.

use super::snap_one;
use super::traits::{Snap, SnapOps};
use crate::errors::{Result, SmoothError};
use crate::float_types::Real;
use nalgebra::Point3;

/// Serial implementation of `SnapOps`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialSnapOps;

impl SerialSnapOps {
    pub const fn new() -> Self {
        Self
    }
}

impl SnapOps for SerialSnapOps {
    fn snap(&self, queries: &[Point3<Real>], reference: &[Point3<Real>]) -> Result<Vec<Snap>> {
        if reference.is_empty() {
            return Err(SmoothError::EmptyReferenceSet);
        }

        let snaps: Vec<Snap> = queries
            .iter()
            .enumerate()
            .filter_map(|(i, q)| snap_one(i, q, reference))
            .collect();

        log::debug!("snapped {} points onto {} reference points", snaps.len(), reference.len());
        Ok(snaps)
    }
}
