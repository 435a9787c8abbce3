//! Unit scaling and machine-frame normalization.
//!
//! The last pipeline stage: scales drawing coordinates to millimeters and
//! translates them so the drawing's minimum bounding-box corner lands on
//! the configured machine offset. Pass heights are already in machine
//! units and pass through untouched, as does the draw/travel kind.

use beamkit_core::{DrawingUnit, JobSettings, Motion, Point, Toolpath};

/// Precomputed scale and translation for one document.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateTransformer {
    scale: f64,
    dx: f64,
    dy: f64,
}

impl CoordinateTransformer {
    /// Creates a transformer for the declared unit, anchored on the
    /// drawing's minimum bounding-box corner (in source units).
    pub fn new(unit: DrawingUnit, min_corner: (f64, f64), settings: &JobSettings) -> Self {
        let scale = unit.scale_to_mm();
        Self {
            scale,
            dx: settings.offset_x - min_corner.0 * scale,
            dy: settings.offset_y - min_corner.1 * scale,
        }
    }

    /// The unit conversion factor to millimeters.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn apply_point(&self, p: Point) -> Point {
        Point::new(p.x * self.scale + self.dx, p.y * self.scale + self.dy, p.z)
    }

    /// Transforms one motion, preserving its kind.
    pub fn apply(&self, motion: &Motion) -> Motion {
        Motion {
            from: self.apply_point(motion.from),
            to: self.apply_point(motion.to),
            kind: motion.kind,
        }
    }

    /// Transforms an assembled motion sequence into the final toolpath.
    pub fn apply_all(&self, motions: &[Motion]) -> Toolpath {
        Toolpath::from_motions(motions.iter().map(|m| self.apply(m)).collect())
    }
}
