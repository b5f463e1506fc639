//! Evenly spaced rebuild of a control-point sequence by arc length.

use super::PointSequence;
use super::measure::polyline_length;
use super::point::{distance, lerp};
use crate::float_types::{Real, tolerance};
use crate::traits::SequenceRebuilder;
use nalgebra::Point3;

/// Default [`SequenceRebuilder`]: redistributes points evenly along the
/// polyline through the control points.
///
/// The rebuild is linear; it does not evaluate any spline between the
/// control points.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformResampler;

impl UniformResampler {
    pub const fn new() -> Self {
        Self
    }
}

impl SequenceRebuilder for UniformResampler {
    fn rebuild(&self, sequence: &PointSequence, spans: usize) -> PointSequence {
        sequence.resample_uniform(spans)
    }
}

impl PointSequence {
    /// Rebuild with `spans` equal-length segments of the same closedness.
    ///
    /// * open: `spans + 1` points, first and last copied exactly
    /// * closed: `spans` points starting at the first point, the wraparound
    ///   segment counted in the length
    ///
    /// If rounding exhausts the length early, the missing tail sample is
    /// dropped rather than repeating an end point.
    ///
    /// Sequences with fewer than two points, zero `spans`, or a length below
    /// [`tolerance`] come back unchanged.
    pub fn resample_uniform(&self, spans: usize) -> PointSequence {
        if self.points.len() < 2 || spans == 0 {
            return self.clone();
        }

        let mut polyline = self.points.clone();
        if self.closed {
            polyline.push(self.points[0]);
        }

        let total = polyline_length(&polyline);
        if total < tolerance() {
            return self.clone();
        }

        let spacing = total / spans as Real;
        let mut result: Vec<Point3<Real>> =
            Vec::with_capacity(if self.closed { spans } else { spans + 1 });
        result.push(polyline[0]);

        let mut segment = 0;
        let mut consumed: Real = 0.0; // distance already walked on `segment`

        'samples: for _ in 1..spans {
            let mut needed = spacing;
            loop {
                if segment + 1 >= polyline.len() {
                    // Rounding ran us off the end; the last point is already
                    // the closing point (open) or the first one (closed).
                    break 'samples;
                }
                let segment_length = distance(&polyline[segment], &polyline[segment + 1]);
                let available = segment_length - consumed;

                if available >= needed {
                    consumed += needed;
                    let t = if segment_length > 0.0 {
                        consumed / segment_length
                    } else {
                        0.0
                    };
                    result.push(lerp(&polyline[segment], &polyline[segment + 1], t));
                    break;
                }
                needed -= available;
                consumed = 0.0;
                segment += 1;
            }
        }

        if !self.closed {
            result.push(polyline[polyline.len() - 1]);
        }

        log::debug!(
            "rebuilt {} control points into {} evenly spaced points",
            self.points.len(),
            result.len()
        );
        PointSequence::new(result, self.closed)
    }
}
