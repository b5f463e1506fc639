//! Explicit per-selection context for the edge smoothing workflow.
//!
//! A [`SmoothSession`] holds everything that lives between the artist's
//! steps: the curve being smoothed, the untouched boundary it started from,
//! and the mesh vertices that will eventually be moved. Nothing is kept in
//! process-wide state; every step takes the session it works on.

use crate::correspondence::{CorrespondenceMap, ResampleReport};
use crate::curve::PointSequence;
use crate::curve::algorithm::smoothing::{DefaultSmoothingOps, SmoothingOps};
use crate::curve::algorithm::snapping::{DefaultSnapOps, SnapOps};
use crate::errors::{Result, SmoothError};
use crate::float_types::Real;
use crate::parameters::{MIN_AVERAGING_EDGES, SNAP_DENSITY, SmoothingParameters};
use crate::traits::{Boundary, BoundarySource, PositionSink, SequenceRebuilder};
use nalgebra::Point3;

/// Summary of a completed one-click run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineReport {
    /// Parameters chosen from the edge count.
    pub parameters: SmoothingParameters,
    /// Number of vertex positions handed to the sink.
    pub updated: usize,
}

/// State of one edge-smoothing job.
#[derive(Debug, Clone)]
pub struct SmoothSession<V> {
    curve: PointSequence,
    original: PointSequence,
    vertices: Vec<(V, Point3<Real>)>,
    edge_count: usize,
    snap_density: usize,
}

impl<V: Clone> SmoothSession<V> {
    /// Record a boundary. `curve` is both the working curve and the shape
    /// edge-length averaging starts from.
    pub fn new(curve: PointSequence, vertices: Vec<(V, Point3<Real>)>, edge_count: usize) -> Self {
        SmoothSession {
            original: curve.clone(),
            curve,
            vertices,
            edge_count,
            snap_density: SNAP_DENSITY,
        }
    }

    /// Ask the host for the current selection's boundary and record it.
    pub fn from_source<S: BoundarySource<V>>(source: &S) -> Result<Self> {
        let Boundary {
            sequence,
            vertices,
            edge_count,
        } = source.ordered_boundary()?;

        log::info!(
            "recorded {} boundary with {} control points and {} vertices",
            if sequence.closed { "closed" } else { "open" },
            sequence.len(),
            vertices.len()
        );
        Ok(Self::new(sequence, vertices, edge_count))
    }

    /// Rebuilt spans per vertex used by [`snap_vertices`](Self::snap_vertices).
    pub fn with_snap_density(mut self, snap_density: usize) -> Self {
        self.snap_density = snap_density.max(1);
        self
    }

    pub const fn curve(&self) -> &PointSequence {
        &self.curve
    }

    /// The boundary as recorded, before any smoothing.
    pub const fn original(&self) -> &PointSequence {
        &self.original
    }

    pub fn vertices(&self) -> &[(V, Point3<Real>)] {
        &self.vertices
    }

    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub const fn is_closed(&self) -> bool {
        self.curve.closed
    }

    /// Plain tension-weighted smoothing of the working curve.
    pub fn smooth(&mut self, parameters: &SmoothingParameters) -> Result<()> {
        DefaultSmoothingOps::new().smooth_with(&mut self.curve, parameters)?;
        log::info!("smoothing done ({} passes)", parameters.iterations);
        Ok(())
    }

    /// Shape-preserving smoothing of the working curve.
    pub fn shape_preserving_smooth(&mut self, parameters: &SmoothingParameters) -> Result<()> {
        DefaultSmoothingOps::new().shape_preserving_smooth_with(&mut self.curve, parameters)?;
        log::info!(
            "shape-preserving smoothing done (strength {})",
            parameters.preserve_strength
        );
        Ok(())
    }

    /// Rebuild the working curve densely and move every recorded vertex to the
    /// closest rebuilt control point.
    ///
    /// The curve is rebuilt with `vertex count × snap density` spans. Returns
    /// the new vertex positions in recorded order; nothing is written back.
    pub fn snap_vertices<R: SequenceRebuilder>(
        &self,
        rebuilder: &R,
    ) -> Result<Vec<(V, Point3<Real>)>> {
        if self.vertices.is_empty() {
            return Err(SmoothError::NoVertices);
        }

        let dense = rebuilder.rebuild(&self.curve, self.vertices.len() * self.snap_density);
        let queries: Vec<Point3<Real>> = self.vertices.iter().map(|(_, p)| *p).collect();
        let snaps = DefaultSnapOps::new().snap(&queries, &dense.points)?;

        let updates = snaps
            .into_iter()
            .map(|snap| (self.vertices[snap.query].0.clone(), snap.point))
            .collect();
        log::info!("snapped {} vertices onto the curve", self.vertices.len());
        Ok(updates)
    }

    /// Even out edge lengths along the recorded boundary.
    ///
    /// The boundary as recorded is rebuilt with the same number of spans, and
    /// each vertex moves to the rebuilt point whose index matched its rounded
    /// position beforehand. Chains of fewer than 3 edges produce an empty
    /// report.
    pub fn average_edge_lengths<R: SequenceRebuilder>(
        &self,
        rebuilder: &R,
    ) -> Result<ResampleReport<V>> {
        if self.edge_count < MIN_AVERAGING_EDGES {
            log::debug!(
                "edge-length averaging skipped for {} edges",
                self.edge_count
            );
            return Ok(ResampleReport::default());
        }
        if self.vertices.is_empty() {
            return Err(SmoothError::NoVertices);
        }

        let map = CorrespondenceMap::from_sequence(&self.original);
        let mapping = map.resolve(&self.vertices);
        let rebuilt = rebuilder.rebuild(&self.original, self.original.segment_count());
        let report = mapping.apply(&rebuilt);

        log::info!(
            "vertex update complete ({}%, {} skipped)",
            report.success_rate(),
            report.skipped_count()
        );
        Ok(report)
    }

    /// One-click flow: smooth with parameters chosen from the edge count, snap
    /// the vertices, and hand the result to `sink`.
    ///
    /// Stops at the first failing step; `sink` is only called when every step
    /// succeeded. The working curve keeps whatever smoothing already happened.
    pub fn auto_process<R, K>(&mut self, rebuilder: &R, sink: &mut K) -> Result<PipelineReport>
    where
        R: SequenceRebuilder,
        K: PositionSink<V>,
    {
        let parameters = SmoothingParameters::auto_for_edge_count(self.edge_count);
        self.smooth(&parameters)?;
        let updates = self.snap_vertices(rebuilder)?;
        sink.write_back(&updates);

        log::info!("one-click smoothing complete");
        Ok(PipelineReport {
            parameters,
            updated: updates.len(),
        })
    }
}
