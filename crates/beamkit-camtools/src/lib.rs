//! # Beamkit CAM Tools
//!
//! This crate turns the line segments of a vector drawing into an ordered
//! machine motion plan for a cutting/engraving tool, and serializes that
//! plan to G-code.
//!
//! ## Pipeline
//!
//! 1. **Geometry Index**: point interning and point-to-segment adjacency
//! 2. **Shape Grouping**: connected-component partitioning via union-find
//! 3. **Path Tracing**: greedy continuous draw/travel path per shape
//! 4. **Pass Stacking**: per-shape path replication across depth passes
//! 5. **Coordinate Transform**: unit scaling and machine-frame normalization
//!
//! ## Collaborators
//!
//! - **DXF Import**: `LINE` entity extraction with cut-layer filtering
//! - **Archive Handling**: zip-of-DXF extraction
//! - **G-code Generation**: beam control, feed rates, and motion words

pub mod archive;
pub mod dxf_import;
pub mod error;
pub mod gcode;
pub mod geometry;
pub mod passes;
pub mod planner;
pub mod shapes;
pub mod tracer;
pub mod transform;

pub use archive::{extract_dxf_entries, ArchiveEntry};
pub use dxf_import::DxfDocument;
pub use error::{CamToolError, CamToolResult, FileFormatError};
pub use gcode::GcodeGenerator;
pub use geometry::{GeometryIndex, PointId, SegmentId};
pub use planner::ToolpathPlanner;
pub use shapes::Shape;
