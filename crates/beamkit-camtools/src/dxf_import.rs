//! DXF document import.
//!
//! Collects `LINE` entities from a DXF drawing in document order, skipping
//! the annotation and frame layers, and maps the declared drawing unit.
//! Everything else in the document is ignored; curves are expected to have
//! been exported as line segments upstream.

use crate::error::{CamToolResult, FileFormatError};
use beamkit_core::error::PlannerError;
use beamkit_core::{DrawingUnit, Point, Segment};
use dxf::entities::EntityType;
use dxf::Drawing;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Layers that never contain cut geometry.
const EXCLUDED_LAYERS: [&str; 2] = ["annotation", "frame"];

/// The cut-relevant contents of one DXF document.
#[derive(Debug)]
pub struct DxfDocument {
    /// Line segments eligible for cutting, in document order.
    pub segments: Vec<Segment>,
    /// The document's declared linear unit.
    pub unit: DrawingUnit,
}

/// Loads a DXF document from a file path.
pub fn load_path(path: &Path) -> CamToolResult<DxfDocument> {
    let mut file = std::fs::File::open(path)?;
    load_reader(&mut file)
}

/// Loads a DXF document from an in-memory buffer.
pub fn load_bytes(data: &[u8]) -> CamToolResult<DxfDocument> {
    let mut cursor = std::io::Cursor::new(data);
    load_reader(&mut cursor)
}

/// Loads a DXF document from a reader.
pub fn load_reader<R: Read>(reader: &mut R) -> CamToolResult<DxfDocument> {
    let drawing =
        Drawing::load(reader).map_err(|e| FileFormatError::DxfParseError(e.to_string()))?;

    let unit = map_unit(drawing.header.default_drawing_units)?;

    let mut segments = Vec::new();
    let mut skipped = 0usize;
    for entity in drawing.entities() {
        if let EntityType::Line(line) = &entity.specific {
            if is_excluded_layer(&entity.common.layer) {
                skipped += 1;
                continue;
            }
            segments.push(Segment::new(
                Point::new(line.p1.x, line.p1.y, line.p1.z),
                Point::new(line.p2.x, line.p2.y, line.p2.z),
            ));
        }
    }

    debug!(
        segments = segments.len(),
        skipped,
        unit = %unit,
        "loaded DXF document"
    );

    Ok(DxfDocument { segments, unit })
}

fn is_excluded_layer(layer: &str) -> bool {
    EXCLUDED_LAYERS
        .iter()
        .any(|excluded| layer.eq_ignore_ascii_case(excluded))
}

fn map_unit(units: dxf::enums::Units) -> Result<DrawingUnit, PlannerError> {
    use dxf::enums::Units;
    match units {
        Units::Millimeters => Ok(DrawingUnit::Millimeters),
        Units::Meters => Ok(DrawingUnit::Meters),
        Units::Feet => Ok(DrawingUnit::Feet),
        Units::Inches => Ok(DrawingUnit::Inches),
        Units::Unitless => Ok(DrawingUnit::Unspecified),
        other => Err(PlannerError::UnsupportedUnit {
            unit: format!("{:?}", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_exclusion_is_case_insensitive() {
        assert!(is_excluded_layer("annotation"));
        assert!(is_excluded_layer("Annotation"));
        assert!(is_excluded_layer("FRAME"));
        assert!(!is_excluded_layer("cut"));
        assert!(!is_excluded_layer("0"));
    }

    #[test]
    fn test_unit_mapping() {
        use dxf::enums::Units;
        assert_eq!(
            map_unit(Units::Millimeters).unwrap(),
            DrawingUnit::Millimeters
        );
        assert_eq!(map_unit(Units::Meters).unwrap(), DrawingUnit::Meters);
        assert_eq!(map_unit(Units::Inches).unwrap(), DrawingUnit::Inches);
        assert_eq!(map_unit(Units::Feet).unwrap(), DrawingUnit::Feet);
        assert_eq!(map_unit(Units::Unitless).unwrap(), DrawingUnit::Unspecified);
        assert!(map_unit(Units::Centimeters).is_err());
    }
}
