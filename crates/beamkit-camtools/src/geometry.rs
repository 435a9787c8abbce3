//! Point interning and segment adjacency for a loaded drawing.
//!
//! Points are interned by exact bit-pattern identity; ids are assigned in
//! first-seen order scanning each segment's endpoints, and that order is the
//! point enumeration order used by every downstream stage. Coincident
//! endpoints must therefore arrive with identical coordinates from the
//! drawing source.

use beamkit_core::error::{PlannerError, Result};
use beamkit_core::{Point, Segment};
use std::collections::HashMap;

/// Index of an interned point.
pub type PointId = usize;

/// Index of an input segment.
pub type SegmentId = usize;

/// Interned points plus point-to-segment adjacency for one drawing.
#[derive(Debug)]
pub struct GeometryIndex {
    points: Vec<Point>,
    segments: Vec<(PointId, PointId)>,
    incident: Vec<Vec<SegmentId>>,
}

fn point_key(p: &Point) -> [u64; 3] {
    [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()]
}

impl GeometryIndex {
    /// Builds the index from an ordered segment list.
    ///
    /// Fails with [`PlannerError::MalformedGeometry`] if any coordinate is
    /// not a finite number.
    pub fn build(segments: &[Segment]) -> Result<Self> {
        let mut points: Vec<Point> = Vec::new();
        let mut ids: HashMap<[u64; 3], PointId> = HashMap::new();
        let mut indexed: Vec<(PointId, PointId)> = Vec::with_capacity(segments.len());

        let mut intern = |p: Point| -> PointId {
            *ids.entry(point_key(&p)).or_insert_with(|| {
                points.push(p);
                points.len() - 1
            })
        };

        for (i, segment) in segments.iter().enumerate() {
            if !segment.from.is_finite() || !segment.to.is_finite() {
                return Err(PlannerError::MalformedGeometry {
                    detail: format!("segment {} has a non-finite coordinate", i),
                });
            }
            let from = intern(segment.from);
            let to = intern(segment.to);
            indexed.push((from, to));
        }

        // Per point: every segment where it is the first endpoint (input
        // order), then every segment where it is the second endpoint (input
        // order). A degenerate segment contributes twice to its point.
        let mut incident: Vec<Vec<SegmentId>> = vec![Vec::new(); points.len()];
        for (seg, &(from, _)) in indexed.iter().enumerate() {
            incident[from].push(seg);
        }
        for (seg, &(_, to)) in indexed.iter().enumerate() {
            incident[to].push(seg);
        }

        Ok(Self {
            points,
            segments: indexed,
            incident,
        })
    }

    pub fn point(&self, id: PointId) -> Point {
        self.points[id]
    }

    /// All interned points, in enumeration order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn segment(&self, id: SegmentId) -> (PointId, PointId) {
        self.segments[id]
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Segments incident to a point. The list length is the point's degree.
    pub fn incident(&self, id: PointId) -> &[SegmentId] {
        &self.incident[id]
    }

    pub fn degree(&self, id: PointId) -> usize {
        self.incident[id].len()
    }

    /// True when the point is the open end of a polyline.
    pub fn is_path_start(&self, id: PointId) -> bool {
        self.degree(id) == 1
    }

    /// The endpoint of `seg` opposite to `from`.
    pub fn other_end(&self, seg: SegmentId, from: PointId) -> PointId {
        let (a, b) = self.segments[seg];
        if a == from {
            b
        } else {
            a
        }
    }

    /// Axis-aligned bounding box over all interned points, as
    /// `(min_x, min_y, max_x, max_y)`. `None` for an empty drawing.
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.points.first()?;
        let mut bounds = (first.x, first.y, first.x, first.y);
        for p in &self.points {
            bounds.0 = bounds.0.min(p.x);
            bounds.1 = bounds.1.min(p.y);
            bounds.2 = bounds.2.max(p.x);
            bounds.3 = bounds.3.max(p.y);
        }
        Some(bounds)
    }
}
