//! Greedy per-shape path tracing.
//!
//! Produces a continuous draw/travel motion sequence covering every segment
//! of a shape exactly once. The heuristic favors uninterrupted cutting runs
//! and, when a jump is unavoidable, returns to open polyline ends before
//! entering the interior of the shape, keeping the number of distinct
//! pierce points low. It is a deterministic greedy approximation, not a
//! minimal-travel solver.

use crate::geometry::{GeometryIndex, PointId};
use crate::shapes::Shape;
use beamkit_core::Motion;

/// Traces shapes of one indexed drawing.
pub struct PathTracer<'a> {
    index: &'a GeometryIndex,
}

impl<'a> PathTracer<'a> {
    pub fn new(index: &'a GeometryIndex) -> Self {
        Self { index }
    }

    /// Traces one shape into an ordered motion list.
    ///
    /// Starts at the shape's first path start (point enumeration order), or
    /// at its first point when the shape is a closed loop. Motions carry
    /// the source z of their endpoints; pass heights are assigned later.
    pub fn trace(&self, shape: &Shape) -> Vec<Motion> {
        let path_starts: Vec<PointId> = shape
            .points
            .iter()
            .copied()
            .filter(|&p| self.index.is_path_start(p))
            .collect();

        let mut undrawn = vec![false; self.index.segment_count()];
        for &seg in &shape.segments {
            undrawn[seg] = true;
        }
        let mut remaining = shape.segments.len();

        let mut current = match path_starts.first() {
            Some(&p) => p,
            None => shape.points[0],
        };

        let mut motions = Vec::new();
        loop {
            while let Some(&seg) = self
                .index
                .incident(current)
                .iter()
                .find(|&&s| undrawn[s])
            {
                undrawn[seg] = false;
                remaining -= 1;
                let next = self.index.other_end(seg, current);
                motions.push(Motion::draw(self.index.point(current), self.index.point(next)));
                current = next;
            }

            if remaining == 0 {
                break;
            }

            // No undrawn segment at the current location: jump to the
            // nearest open end that still has work, or failing that to the
            // nearest point with an undrawn segment.
            let target = self
                .nearest_with_undrawn(current, &path_starts, &undrawn)
                .or_else(|| self.nearest_with_undrawn(current, &shape.points, &undrawn));
            match target {
                Some(next) => {
                    motions.push(Motion::travel(
                        self.index.point(current),
                        self.index.point(next),
                    ));
                    current = next;
                }
                None => break,
            }
        }

        motions
    }

    /// Nearest candidate (XY distance) that still has an undrawn incident
    /// segment. Equidistant candidates resolve to the earliest-enumerated
    /// point.
    fn nearest_with_undrawn(
        &self,
        from: PointId,
        candidates: &[PointId],
        undrawn: &[bool],
    ) -> Option<PointId> {
        let origin = self.index.point(from);
        let mut best: Option<(f64, PointId)> = None;
        for &candidate in candidates {
            if !self
                .index
                .incident(candidate)
                .iter()
                .any(|&s| undrawn[s])
            {
                continue;
            }
            let distance = origin.distance_xy(&self.index.point(candidate));
            match best {
                Some((best_distance, _)) if distance >= best_distance => {}
                _ => best = Some((distance, candidate)),
            }
        }
        best.map(|(_, candidate)| candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::group_shapes;
    use beamkit_core::{MotionKind, Point, Segment};

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Point::new(x1, y1, 0.0), Point::new(x2, y2, 0.0))
    }

    fn trace_single_shape(segments: &[Segment]) -> Vec<Motion> {
        let index = GeometryIndex::build(segments).unwrap();
        let shapes = group_shapes(&index);
        assert_eq!(shapes.len(), 1);
        PathTracer::new(&index).trace(&shapes[0])
    }

    #[test]
    fn test_open_polyline_traced_without_travel() {
        let motions = trace_single_shape(&[seg(0.0, 0.0, 1.0, 0.0), seg(1.0, 0.0, 2.0, 0.0)]);
        assert_eq!(motions.len(), 2);
        assert!(motions.iter().all(Motion::is_draw));
        assert_eq!(motions[0].from, Point::new(0.0, 0.0, 0.0));
        assert_eq!(motions[1].to, Point::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_closed_loop_returns_to_start() {
        let motions = trace_single_shape(&[
            seg(0.0, 0.0, 1.0, 0.0),
            seg(1.0, 0.0, 0.0, 1.0),
            seg(0.0, 1.0, 0.0, 0.0),
        ]);
        assert_eq!(motions.len(), 3);
        assert!(motions.iter().all(Motion::is_draw));
        assert_eq!(motions[0].from, motions[2].to);
    }

    #[test]
    fn test_reversed_segment_drawn_from_current_end() {
        // Segment 1 is stored as (2,0)->(1,0); tracing arrives at (1,0) and
        // must emit it from there.
        let motions = trace_single_shape(&[seg(0.0, 0.0, 1.0, 0.0), seg(2.0, 0.0, 1.0, 0.0)]);
        assert_eq!(motions.len(), 2);
        assert_eq!(motions[1].from, Point::new(1.0, 0.0, 0.0));
        assert_eq!(motions[1].to, Point::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_jump_prefers_earlier_equidistant_path_start() {
        // A plus sign: four arms radiating from the origin. After the first
        // two arms are cut the tracer sits at (-1,0) with two open ends at
        // distance sqrt(2); the earlier-enumerated (0,1) must win.
        let motions = trace_single_shape(&[
            seg(0.0, 0.0, 1.0, 0.0),
            seg(0.0, 0.0, -1.0, 0.0),
            seg(0.0, 0.0, 0.0, 1.0),
            seg(0.0, 0.0, 0.0, -1.0),
        ]);
        let travels: Vec<&Motion> = motions.iter().filter(|m| !m.is_draw()).collect();
        assert_eq!(travels.len(), 1);
        assert_eq!(travels[0].from, Point::new(-1.0, 0.0, 0.0));
        assert_eq!(travels[0].to, Point::new(0.0, 1.0, 0.0));
        assert_eq!(motions.iter().filter(|m| m.is_draw()).count(), 4);
    }

    #[test]
    fn test_every_segment_drawn_exactly_once() {
        let segments = vec![
            seg(0.0, 0.0, 1.0, 0.0),
            seg(1.0, 0.0, 1.0, 1.0),
            seg(1.0, 1.0, 0.0, 1.0),
            seg(0.0, 1.0, 0.0, 0.0),
            seg(1.0, 0.0, 2.0, 0.0),
        ];
        let motions = trace_single_shape(&segments);
        let draws: Vec<&Motion> = motions.iter().filter(|m| m.is_draw()).collect();
        assert_eq!(draws.len(), segments.len());
        for segment in &segments {
            let hits = draws
                .iter()
                .filter(|m| {
                    (m.from == segment.from && m.to == segment.to)
                        || (m.from == segment.to && m.to == segment.from)
                })
                .count();
            assert_eq!(hits, 1, "segment {:?} drawn {} times", segment, hits);
        }
    }

    #[test]
    fn test_trace_is_continuous() {
        let motions = trace_single_shape(&[
            seg(0.0, 0.0, 1.0, 0.0),
            seg(0.0, 0.0, 0.0, 1.0),
            seg(1.0, 0.0, 1.0, 1.0),
        ]);
        for pair in motions.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
    }

    #[test]
    fn test_degenerate_segment_drawn_once() {
        let motions = trace_single_shape(&[seg(2.0, 2.0, 2.0, 2.0)]);
        assert_eq!(motions.len(), 1);
        assert_eq!(motions[0].kind, MotionKind::Draw);
        assert_eq!(motions[0].from, motions[0].to);
    }
}
