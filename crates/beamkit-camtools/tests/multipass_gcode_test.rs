use beamkit_camtools::{GcodeGenerator, ToolpathPlanner};
use beamkit_core::{DrawingUnit, JobSettings, Point, Segment};

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
    Segment::new(Point::new(x1, y1, 0.0), Point::new(x2, y2, 0.0))
}

#[test]
fn test_multipass_gcode_lowers_z_each_pass() {
    let mut settings = JobSettings::default();
    settings.passes = 3;
    settings.depth = 1.5;

    let toolpath = ToolpathPlanner::new(settings.clone())
        .plan(&[seg(0.0, 0.0, 10.0, 0.0)], DrawingUnit::Millimeters)
        .unwrap();
    let gcode = GcodeGenerator::new(&settings)
        .generate("multipass", &toolpath)
        .unwrap();

    assert!(gcode.contains("Z0.000"), "first pass cuts at the surface");
    assert!(gcode.contains("Z-0.500"), "second pass steps down 0.5 mm");
    assert!(gcode.contains("Z-1.000"), "third pass steps down 1.0 mm");
}

#[test]
fn test_single_pass_gcode_stays_at_surface() {
    let settings = JobSettings::default();
    let toolpath = ToolpathPlanner::new(settings.clone())
        .plan(&[seg(0.0, 0.0, 10.0, 0.0)], DrawingUnit::Millimeters)
        .unwrap();
    let gcode = GcodeGenerator::new(&settings)
        .generate("single", &toolpath)
        .unwrap();

    assert!(!gcode.contains("Z-"), "no negative heights on a single pass");
}

#[test]
fn test_beam_cycles_once_per_pass_run() {
    let mut settings = JobSettings::default();
    settings.passes = 2;
    settings.depth = 1.0;

    let toolpath = ToolpathPlanner::new(settings.clone())
        .plan(&[seg(0.0, 0.0, 10.0, 0.0)], DrawingUnit::Millimeters)
        .unwrap();
    let gcode = GcodeGenerator::new(&settings)
        .generate("two-pass", &toolpath)
        .unwrap();

    // Each pass is one uninterrupted cutting run separated by a link
    // travel, so the beam turns on exactly twice.
    assert_eq!(gcode.matches("M3").count(), 2);
}
