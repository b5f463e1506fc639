//! Position-matched remapping of mesh vertices onto a rebuilt sequence.
//!
//! Before a sequence is rebuilt, each control point's position is rounded to a
//! fixed number of decimals and remembered with its index. Mesh vertices are
//! matched against those keys by their own rounded positions, and after the
//! rebuild each matched vertex takes the position now stored at its index.
//! Vertices without a match are skipped and reported, never treated as fatal.

use crate::curve::PointSequence;
use crate::errors::SmoothError;
use crate::float_types::{CORRESPONDENCE_DECIMALS, Real};
use hashbrown::HashMap;
use nalgebra::Point3;

/// Largest scaled coordinate a key accepts. Past 2^53 neighbouring integers
/// are no longer distinct floats, so rounding stops meaning anything.
const KEY_LIMIT: Real = 9_007_199_254_740_992.0;

/// A position rounded to a fixed number of decimals, stored as integers so
/// that equality and hashing are exact (`-0.0` and `0.0` share a key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey([i64; 3]);

impl PositionKey {
    /// `None` when a coordinate is NaN, infinite, or too large to round
    /// faithfully once scaled.
    pub fn new(position: &Point3<Real>, decimals: u32) -> Option<Self> {
        let scale = (10.0 as Real).powi(decimals as i32);
        let round = |c: Real| {
            let scaled = (c * scale).round();
            (scaled.is_finite() && scaled.abs() <= KEY_LIMIT).then_some(scaled as i64)
        };
        Some(PositionKey([
            round(position.x)?,
            round(position.y)?,
            round(position.z)?,
        ]))
    }
}

/// Rounded position → control point index, built from the sequence as it was
/// *before* a rebuild.
#[derive(Debug, Clone)]
pub struct CorrespondenceMap {
    decimals: u32,
    index_by_key: HashMap<PositionKey, usize>,
}

impl CorrespondenceMap {
    /// Key every point of `sequence` with the default 3-decimal rounding.
    pub fn from_sequence(sequence: &PointSequence) -> Self {
        Self::with_decimals(sequence, CORRESPONDENCE_DECIMALS)
    }

    /// When two points round to the same key the later index wins.
    pub fn with_decimals(sequence: &PointSequence, decimals: u32) -> Self {
        let mut index_by_key = HashMap::with_capacity(sequence.len());
        for (i, p) in sequence.points.iter().enumerate() {
            match PositionKey::new(p, decimals) {
                Some(key) => {
                    index_by_key.insert(key, i);
                },
                None => log::warn!("control point {} has no usable position key: {}", i, p),
            }
        }
        CorrespondenceMap {
            decimals,
            index_by_key,
        }
    }

    pub fn len(&self) -> usize {
        self.index_by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_by_key.is_empty()
    }

    pub const fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Index of the control point that rounds to the same key as `position`.
    /// Positions without a key never match.
    pub fn lookup(&self, position: &Point3<Real>) -> Option<usize> {
        let key = PositionKey::new(position, self.decimals)?;
        self.index_by_key.get(&key).copied()
    }

    /// Match every vertex. `vertices` is in the caller's order; the position in
    /// that slice is what [`SmoothError::NoCorrespondenceMatch`] reports.
    pub fn resolve<V: Clone>(&self, vertices: &[(V, Point3<Real>)]) -> VertexMapping<V> {
        let entries = vertices
            .iter()
            .enumerate()
            .map(|(i, (vertex, position))| MappedVertex {
                vertex: vertex.clone(),
                position: *position,
                correspondence: self
                    .lookup(position)
                    .ok_or(SmoothError::NoCorrespondenceMatch { vertex: i }),
            })
            .collect();
        VertexMapping { entries }
    }
}

/// One vertex and the control point index it was matched to, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedVertex<V> {
    pub vertex: V,
    /// Position the match was made with.
    pub position: Point3<Real>,
    pub correspondence: Result<usize, SmoothError>,
}

/// Vertex → control point index mapping. Only valid for a rebuilt sequence
/// that keeps the indexing of the one the map was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexMapping<V> {
    pub entries: Vec<MappedVertex<V>>,
}

impl<V: Clone> VertexMapping<V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(vertex, index)` for every matched vertex.
    pub fn matched(&self) -> impl Iterator<Item = (&V, usize)> + '_ {
        self.entries
            .iter()
            .filter_map(|e| e.correspondence.as_ref().ok().map(|&i| (&e.vertex, i)))
    }

    /// Look every matched index up in `rebuilt`. Unmatched vertices and indices
    /// past the end of `rebuilt` are skipped.
    pub fn apply(&self, rebuilt: &PointSequence) -> ResampleReport<V> {
        let mut report = ResampleReport {
            updates: Vec::with_capacity(self.entries.len()),
            skipped: Vec::new(),
            total: self.entries.len(),
        };

        for (i, entry) in self.entries.iter().enumerate() {
            let target = match &entry.correspondence {
                Ok(index) => rebuilt
                    .points
                    .get(*index)
                    .copied()
                    .ok_or(SmoothError::NoCorrespondenceMatch { vertex: i }),
                Err(e) => Err(e.clone()),
            };
            match target {
                Ok(position) => report.updates.push((entry.vertex.clone(), position)),
                Err(e) => {
                    log::warn!("vertex {} left in place: {}", i, e);
                    report.skipped.push((entry.vertex.clone(), e));
                },
            }
        }
        report
    }
}

/// Outcome of a correspondence remap: positions to write back and the vertices
/// that were left alone.
#[derive(Debug, Clone, PartialEq)]
pub struct ResampleReport<V> {
    pub updates: Vec<(V, Point3<Real>)>,
    pub skipped: Vec<(V, SmoothError)>,
    /// Number of vertices considered.
    pub total: usize,
}

impl<V> Default for ResampleReport<V> {
    fn default() -> Self {
        ResampleReport {
            updates: Vec::new(),
            skipped: Vec::new(),
            total: 0,
        }
    }
}

impl<V> ResampleReport<V> {
    pub fn updated(&self) -> usize {
        self.updates.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Updated share of all vertices in percent, rounded to one decimal.
    pub fn success_rate(&self) -> Real {
        if self.total == 0 {
            return 0.0;
        }
        let percent = self.updated() as Real / self.total as Real * 100.0;
        (percent * 10.0).round() / 10.0
    }
}
