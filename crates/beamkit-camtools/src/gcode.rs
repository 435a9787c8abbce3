//! G-code serialization of a planned toolpath.
//!
//! Emits one motion word per toolpath segment, in order. Beam power is
//! state-tracked: `M3`/`M5` appear exactly at draw/travel boundaries rather
//! than on every line, so the controller's planner never stalls on
//! redundant spindle commands.

use crate::error::{CamToolError, CamToolResult};
use beamkit_core::{JobSettings, Toolpath};

/// Serializes toolpaths to G-code text.
pub struct GcodeGenerator<'a> {
    settings: &'a JobSettings,
}

impl<'a> GcodeGenerator<'a> {
    pub fn new(settings: &'a JobSettings) -> Self {
        Self { settings }
    }

    /// Generates the G-code program for one toolpath.
    ///
    /// Fails on an empty toolpath; callers that consider empty geometry
    /// acceptable should check before serializing.
    pub fn generate(&self, project: &str, toolpath: &Toolpath) -> CamToolResult<String> {
        if toolpath.is_empty() {
            return Err(CamToolError::GenerationFailed("empty toolpath".to_string()));
        }

        let power = (self.settings.power_percent * self.settings.power_scale / 100.0) as u32;

        let mut gcode = String::new();
        gcode.push_str(&format!("; Project: {}\n", project));
        gcode.push_str(&format!(
            "; Generated: {}\n",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ));
        gcode.push_str(&format!(
            "; Passes: {}, total depth: {:.2} mm\n",
            self.settings.passes, self.settings.depth
        ));
        gcode.push_str(&format!(
            "; Draw feed: {:.0} mm/min, travel feed: {:.0} mm/min\n",
            self.settings.draw_feed, self.settings.travel_feed
        ));
        gcode.push_str(&format!(
            "; Beam power: {:.0}%\n",
            self.settings.power_percent
        ));
        gcode.push_str(";\n");
        gcode.push_str("G21 ; Set units to millimeters\n");
        gcode.push_str("G90 ; Absolute positioning\n");
        gcode.push_str("G92 X0 Y0 Z0 ; Set origin\n");
        gcode.push('\n');
        gcode.push_str("M5 ; Beam off\n");

        let mut beam_on = false;
        for motion in &toolpath.motions {
            if motion.is_draw() && !beam_on {
                gcode.push_str(&format!("M3 S{} ; Beam on\n", power));
                beam_on = true;
            } else if !motion.is_draw() && beam_on {
                gcode.push_str("M5 ; Beam off\n");
                beam_on = false;
            }

            let (word, feed) = if motion.is_draw() {
                ("G1", self.settings.draw_feed)
            } else {
                ("G0", self.settings.travel_feed)
            };
            gcode.push_str(&format!(
                "{} X{:.3} Y{:.3} Z{:.3} F{:.0}\n",
                word, motion.to.x, motion.to.y, motion.to.z, feed
            ));
        }

        gcode.push('\n');
        gcode.push_str("M5 ; Beam off\n");
        gcode.push_str("M2 ; Program end\n");

        Ok(gcode)
    }
}
