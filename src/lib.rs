//! # Beamkit
//!
//! A Rust-based DXF to G-code toolpath planner for laser cutters and
//! engravers.
//!
//! ## Architecture
//!
//! Beamkit is organized as a workspace:
//!
//! 1. **beamkit-core** - Geometry types, drawing units, job settings, errors
//! 2. **beamkit-camtools** - Path planning pipeline, DXF import, archive
//!    handling, G-code generation
//! 3. **beamkit** - Main binary that wires the pipeline to the filesystem
//!
//! ## Pipeline
//!
//! Segments are grouped into connected shapes, each shape is traced into a
//! continuous draw/travel path covering every segment exactly once, the
//! path is replicated across the configured depth passes, and coordinates
//! are normalized into the machine frame before serialization.

pub use beamkit_camtools::{
    extract_dxf_entries, ArchiveEntry, CamToolError, CamToolResult, DxfDocument, GcodeGenerator,
    GeometryIndex, Shape, ToolpathPlanner,
};

pub use beamkit_core::{
    DrawingUnit, JobSettings, Motion, MotionKind, ParameterError, PlannerError, Point, Result,
    Segment, Toolpath,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and RUST_LOG environment
/// variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
