//! Seams to the host application that owns the mesh.
//!
//! The crate never reads or writes mesh data itself. A host hands over an
//! ordered boundary, optionally rebuilds curves, and receives final vertex
//! positions through these traits.

use crate::curve::PointSequence;
use crate::errors::Result;
use crate::float_types::Real;
use hashbrown::HashMap;
use nalgebra::Point3;
use std::hash::Hash;

/// An ordered boundary read from a mesh edge selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary<V> {
    /// Control points of the curve built from the edge chain.
    pub sequence: PointSequence,
    /// The chain's vertices with their positions, in chain order.
    pub vertices: Vec<(V, Point3<Real>)>,
    /// Number of selected edges.
    pub edge_count: usize,
}

/// Converts a mesh edge selection into an ordered, deduplicated boundary and
/// reports whether it is closed.
pub trait BoundarySource<V> {
    fn ordered_boundary(&self) -> Result<Boundary<V>>;
}

/// Rebuilds a sequence with evenly spaced control points of the same
/// closedness.
pub trait SequenceRebuilder {
    fn rebuild(&self, sequence: &PointSequence, spans: usize) -> PointSequence;
}

/// Receives final vertex positions.
pub trait PositionSink<V> {
    fn write_back(&mut self, updates: &[(V, Point3<Real>)]);
}

impl<V: Clone> PositionSink<V> for Vec<(V, Point3<Real>)> {
    fn write_back(&mut self, updates: &[(V, Point3<Real>)]) {
        self.extend_from_slice(updates);
    }
}

impl<V: Clone + Eq + Hash> PositionSink<V> for HashMap<V, Point3<Real>> {
    fn write_back(&mut self, updates: &[(V, Point3<Real>)]) {
        for (vertex, position) in updates {
            self.insert(vertex.clone(), *position);
        }
    }
}
