//! Drawing unit handling.
//!
//! Maps the linear unit declared by a source document to the millimeter
//! scale used in machine space.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Linear unit declared by the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingUnit {
    Millimeters,
    Meters,
    Feet,
    Inches,
    /// The document does not declare a unit; treated as millimeters.
    Unspecified,
}

impl Default for DrawingUnit {
    fn default() -> Self {
        Self::Millimeters
    }
}

impl fmt::Display for DrawingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Millimeters => write!(f, "millimeters"),
            Self::Meters => write!(f, "meters"),
            Self::Feet => write!(f, "feet"),
            Self::Inches => write!(f, "inches"),
            Self::Unspecified => write!(f, "unspecified"),
        }
    }
}

impl FromStr for DrawingUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mm" | "millimeters" => Ok(Self::Millimeters),
            "m" | "meters" => Ok(Self::Meters),
            "ft" | "feet" => Ok(Self::Feet),
            "in" | "inch" | "inches" => Ok(Self::Inches),
            "" | "unitless" | "unspecified" => Ok(Self::Unspecified),
            _ => Err(format!("Unknown drawing unit: {}", s)),
        }
    }
}

impl DrawingUnit {
    /// Conversion factor from this unit to millimeters.
    ///
    /// An unspecified unit is assumed to be millimeters; that assumption is
    /// logged as a warning rather than treated as an error.
    pub fn scale_to_mm(self) -> f64 {
        match self {
            Self::Millimeters => 1.0,
            Self::Meters => 1000.0,
            Self::Feet => 304.8,
            Self::Inches => 25.4,
            Self::Unspecified => {
                tracing::warn!(
                    "unit of measure not declared by the drawing, assuming millimeters"
                );
                1.0
            }
        }
    }
}
