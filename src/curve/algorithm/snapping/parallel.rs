//! Parallel nearest-point snapping.

use super::snap_one;
use super::traits::{Snap, SnapOps};
use crate::errors::{Result, SmoothError};
use crate::float_types::Real;
use nalgebra::Point3;
use rayon::prelude::*;

/// Parallel implementation of `SnapOps`. Queries are independent, so each
/// one scans the reference set on its own worker; output order and tie
/// breaking match [`SerialSnapOps`](super::SerialSnapOps).
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelSnapOps;

impl ParallelSnapOps {
    pub const fn new() -> Self {
        Self
    }
}

impl SnapOps for ParallelSnapOps {
    fn snap(&self, queries: &[Point3<Real>], reference: &[Point3<Real>]) -> Result<Vec<Snap>> {
        if reference.is_empty() {
            return Err(SmoothError::EmptyReferenceSet);
        }

        let snaps: Vec<Snap> = queries
            .par_iter()
            .enumerate()
            .filter_map(|(i, q)| snap_one(i, q, reference))
            .collect();

        log::debug!(
            "snapped {} points onto {} reference points in parallel",
            snaps.len(),
            reference.len()
        );
        Ok(snaps)
    }
}
