//! Traits for curve smoothing operations.

use crate::curve::PointSequence;
use crate::errors::Result;
use crate::float_types::Real;
use crate::parameters::SmoothingParameters;

/// Iterative neighbor relaxation of a control-point sequence.
///
/// Every pass reads only the previous pass's positions, so the result does not
/// depend on the order points are visited in. Implementations write to a
/// private copy and commit it to `sequence` only when the whole run succeeds.
pub trait SmoothingOps {
    /// Tension-weighted relaxation.
    ///
    /// Open sequences keep their first and last point bit for bit.
    ///
    /// # Errors
    /// [`InsufficientPoints`](crate::errors::SmoothError::InsufficientPoints) for
    /// fewer than 3 points, [`InvalidParameter`](crate::errors::SmoothError::InvalidParameter)
    /// for an unusable tension.
    fn smooth(&self, sequence: &mut PointSequence, iterations: usize, tension: Real)
    -> Result<()>;

    /// Relaxation pulled back toward the starting shape by `preserve_strength`,
    /// followed by a rescale about the centroid that restores the starting arc
    /// length after every pass.
    ///
    /// `preserve_strength = 0` behaves like [`smooth`](Self::smooth) plus the
    /// length rescale; `preserve_strength = 1` leaves every point where it was.
    fn shape_preserving_smooth(
        &self,
        sequence: &mut PointSequence,
        iterations: usize,
        tension: Real,
        preserve_strength: Real,
    ) -> Result<()>;

    /// [`smooth`](Self::smooth) driven by a parameter set.
    fn smooth_with(
        &self,
        sequence: &mut PointSequence,
        parameters: &SmoothingParameters,
    ) -> Result<()> {
        self.smooth(sequence, parameters.iterations, parameters.tension)
    }

    /// [`shape_preserving_smooth`](Self::shape_preserving_smooth) driven by a parameter set.
    fn shape_preserving_smooth_with(
        &self,
        sequence: &mut PointSequence,
        parameters: &SmoothingParameters,
    ) -> Result<()> {
        self.shape_preserving_smooth(
            sequence,
            parameters.iterations,
            parameters.tension,
            parameters.preserve_strength,
        )
    }
}
