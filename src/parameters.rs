//! Smoothing parameters, presets and the automatic parameter choice used by
//! the one-click pipeline.

use crate::errors::{Result, SmoothError};
use crate::float_types::{Real, tolerance};

/// Smoothing needs a point with two distinct neighbors.
pub const MIN_SMOOTHING_POINTS: usize = 3;

/// Above this many selected edges the automatic parameters switch to the
/// lighter, tension-free setting.
pub const AUTO_EDGE_THRESHOLD: usize = 50;

/// Rebuilt curve spans per recorded vertex before snapping.
pub const SNAP_DENSITY: usize = 3;

/// Edge chains shorter than this are left alone by edge-length averaging.
pub const MIN_AVERAGING_EDGES: usize = 3;

/// Tunables for [`SmoothingOps`](crate::curve::algorithm::smoothing::SmoothingOps).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingParameters {
    /// Number of relaxation passes.
    pub iterations: usize,
    /// Self-weight bias. `0.0..=1.0` is the useful range; larger values
    /// resist smoothing more, the formula stays valid outside it.
    pub tension: Real,
    /// Pull back toward the original shape, `0.0` (none) to `1.0` (frozen).
    /// Only used by shape-preserving smoothing.
    pub preserve_strength: Real,
}

impl Default for SmoothingParameters {
    fn default() -> Self {
        Self {
            iterations: 2,
            tension: 0.5,
            preserve_strength: 0.3,
        }
    }
}

impl SmoothingParameters {
    pub fn new(iterations: usize, tension: Real) -> Self {
        Self {
            iterations,
            tension,
            ..Self::default()
        }
    }

    pub const fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub const fn with_tension(mut self, tension: Real) -> Self {
        self.tension = tension;
        self
    }

    pub const fn with_preserve_strength(mut self, preserve_strength: Real) -> Self {
        self.preserve_strength = preserve_strength;
        self
    }

    /// Parameters the one-click flow picks for a chain of `edge_count` edges:
    /// long chains get fewer, untensioned passes.
    pub fn auto_for_edge_count(edge_count: usize) -> Self {
        if edge_count > AUTO_EDGE_THRESHOLD {
            Self::new(5, 0.0)
        } else {
            Self::new(10, 0.5)
        }
    }

    /// Check tension and preserve strength.
    pub fn validate(&self) -> Result<()> {
        validate_tension(self.tension)?;
        validate_preserve_strength(self.preserve_strength)
    }
}

/// Tension must be finite and must not cancel the `4 + tension` denominator.
pub fn validate_tension(tension: Real) -> Result<()> {
    if !tension.is_finite() {
        return Err(SmoothError::InvalidParameter {
            name: "tension",
            value: tension,
            reason: "must be finite",
        });
    }
    if (4.0 + tension).abs() < tolerance() {
        return Err(SmoothError::InvalidParameter {
            name: "tension",
            value: tension,
            reason: "weighting denominator 4 + tension vanishes",
        });
    }
    Ok(())
}

pub fn validate_preserve_strength(preserve_strength: Real) -> Result<()> {
    if !(0.0..=1.0).contains(&preserve_strength) {
        return Err(SmoothError::InvalidParameter {
            name: "preserve_strength",
            value: preserve_strength,
            reason: "must lie in [0, 1]",
        });
    }
    Ok(())
}

/// Named `(iterations, tension)` pairs offered to artists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SmoothingPreset {
    Strong,
    Medium,
    Weak,
}

impl SmoothingPreset {
    pub const fn iterations_and_tension(self) -> (usize, Real) {
        match self {
            Self::Strong => (10, 0.1),
            Self::Medium => (3, 0.5),
            Self::Weak => (2, 0.9),
        }
    }

    pub fn parameters(self) -> SmoothingParameters {
        let (iterations, tension) = self.iterations_and_tension();
        SmoothingParameters::new(iterations, tension)
    }
}

impl From<SmoothingPreset> for SmoothingParameters {
    fn from(preset: SmoothingPreset) -> Self {
        preset.parameters()
    }
}
