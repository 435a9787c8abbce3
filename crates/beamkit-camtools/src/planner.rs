//! End-to-end toolpath planning.
//!
//! Wires the pipeline stages together: geometry indexing, shape grouping,
//! per-shape tracing, pass stacking, and the coordinate transform. Planning
//! is pure and single-threaded; identical input order and coordinates
//! reproduce identical output.

use crate::geometry::GeometryIndex;
use crate::passes::PassStacker;
use crate::shapes::group_shapes;
use crate::transform::CoordinateTransformer;
use beamkit_core::error::Result;
use beamkit_core::{DrawingUnit, JobSettings, Segment, Toolpath};
use tracing::{debug, info, warn};

/// Plans complete toolpaths from raw drawing segments.
#[derive(Debug, Clone)]
pub struct ToolpathPlanner {
    settings: JobSettings,
}

impl ToolpathPlanner {
    pub fn new(settings: JobSettings) -> Self {
        Self { settings }
    }

    /// Plans the toolpath for one document.
    ///
    /// Zero input segments are not an error: the result is an empty
    /// toolpath and the caller decides whether that is acceptable.
    pub fn plan(&self, segments: &[Segment], unit: DrawingUnit) -> Result<Toolpath> {
        self.settings.validate()?;

        if segments.is_empty() {
            warn!("no qualifying segments, producing an empty toolpath");
            return Ok(Toolpath::new());
        }

        let index = GeometryIndex::build(segments)?;
        let shapes = group_shapes(&index);
        debug!(
            segments = index.segment_count(),
            points = index.point_count(),
            shapes = shapes.len(),
            "indexed drawing"
        );

        let motions = PassStacker::new(&self.settings).stack(&index, &shapes);

        let (min_x, min_y, max_x, max_y) = match index.bounding_box() {
            Some(bounds) => bounds,
            None => return Ok(Toolpath::new()),
        };
        let transformer = CoordinateTransformer::new(unit, (min_x, min_y), &self.settings);
        info!(
            width_mm = (max_x - min_x) * transformer.scale(),
            height_mm = (max_y - min_y) * transformer.scale(),
            passes = self.settings.passes,
            "planned toolpath"
        );

        Ok(transformer.apply_all(&motions))
    }
}
