//! Serial implementations of curve smoothing operations.

use super::traits::SmoothingOps;
use super::{compensated_position, length_restoring_factor, relaxed_position};
use crate::curve::PointSequence;
use crate::errors::Result;
use crate::float_types::Real;
use crate::parameters::{MIN_SMOOTHING_POINTS, validate_preserve_strength, validate_tension};
use nalgebra::Point3;

/// Serial implementation of `SmoothingOps`.
#[derive(Debug, Clone, Copy)]
pub struct SerialSmoothingOps;

impl Default for SerialSmoothingOps {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialSmoothingOps {
    pub const fn new() -> Self {
        Self
    }
}

impl SmoothingOps for SerialSmoothingOps {
    fn smooth(
        &self,
        sequence: &mut PointSequence,
        iterations: usize,
        tension: Real,
    ) -> Result<()> {
        sequence.require(MIN_SMOOTHING_POINTS)?;
        validate_tension(tension)?;

        let anchors = sequence.pinned_endpoints();
        let mut working = sequence.clone();

        for iteration in 0..iterations {
            // Every new position is computed from the previous pass only
            let relaxed: Vec<Point3<Real>> = (0..working.len())
                .map(|i| relaxed_position(&working, i, tension))
                .collect();
            working.points = relaxed;

            log::trace!("smoothing pass {}/{}", iteration + 1, iterations);
        }

        // Re-assert the pinned endpoints against floating-point drift
        if let Some((first, last)) = anchors {
            let n = working.len();
            working.points[0] = first;
            working.points[n - 1] = last;
        }

        log::debug!(
            "smoothed {} {} points ({} passes, tension {})",
            working.len(),
            if working.closed { "closed" } else { "open" },
            iterations,
            tension
        );
        *sequence = working;
        Ok(())
    }

    fn shape_preserving_smooth(
        &self,
        sequence: &mut PointSequence,
        iterations: usize,
        tension: Real,
        preserve_strength: Real,
    ) -> Result<()> {
        sequence.require(MIN_SMOOTHING_POINTS)?;
        validate_tension(tension)?;
        validate_preserve_strength(preserve_strength)?;

        let original = sequence.clone();
        let original_length = original.arc_length();
        let mut working = sequence.clone();

        for iteration in 0..iterations {
            let compensated: Vec<Point3<Real>> = (0..working.len())
                .map(|i| compensated_position(&working, &original, i, tension, preserve_strength))
                .collect();
            working.points = compensated;

            // Counteract the shrinkage of repeated averaging
            let factor = length_restoring_factor(original_length, working.arc_length());
            working.scale_about_centroid(factor);

            log::trace!(
                "shape-preserving pass {}/{} (length factor {})",
                iteration + 1,
                iterations,
                factor
            );
        }

        log::debug!(
            "shape-preserving smoothing of {} points done (strength {})",
            working.len(),
            preserve_strength
        );
        *sequence = working;
        Ok(())
    }
}
