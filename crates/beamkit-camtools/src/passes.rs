//! Pass replication and shape-to-shape stitching.
//!
//! Assembles the full job from per-shape traces: each shape's path is
//! replicated once per configured pass, stepping the cut height down by
//! `depth / passes` after every pass, and travels are stitched in so the
//! assembled sequence is continuous from the park corner out and back.

use crate::geometry::GeometryIndex;
use crate::shapes::Shape;
use crate::tracer::PathTracer;
use beamkit_core::{JobSettings, Motion, Point};

/// Assembles traced shapes into a single motion sequence.
pub struct PassStacker<'a> {
    settings: &'a JobSettings,
}

impl<'a> PassStacker<'a> {
    pub fn new(settings: &'a JobSettings) -> Self {
        Self { settings }
    }

    /// Stacks all shapes across the configured passes.
    ///
    /// Every shape restarts at height 0 and steps down after each pass. A
    /// linking travel precedes every pass except the very first; the link
    /// descends to the destination pass height as it moves. The sequence
    /// starts and ends at the drawing's minimum bounding-box corner, which
    /// the coordinate transform later pins to the configured offset.
    pub fn stack(&self, index: &GeometryIndex, shapes: &[Shape]) -> Vec<Motion> {
        let park = match index.bounding_box() {
            Some((min_x, min_y, _, _)) => Point::new(min_x, min_y, 0.0),
            None => return Vec::new(),
        };

        let tracer = PathTracer::new(index);
        let step_down = self.settings.step_down();
        let mut motions: Vec<Motion> = Vec::new();
        let mut position: Option<Point> = None;

        for shape in shapes {
            let path = tracer.trace(shape);
            if path.is_empty() {
                continue;
            }

            let mut height = 0.0;
            for _pass in 0..self.settings.passes {
                let start = path[0].from.at_height(height);
                motions.push(Motion::travel(position.unwrap_or(park), start));
                for motion in &path {
                    motions.push(motion.at_height(height));
                }
                position = Some(path[path.len() - 1].to.at_height(height));
                height -= step_down;
            }
        }

        if let Some(last) = position {
            motions.push(Motion::travel(last, last.at_height(0.0)));
            motions.push(Motion::travel(last.at_height(0.0), park));
        }

        motions
    }
}
