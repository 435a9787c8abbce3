//! Error types for the CAM tools crate.

use beamkit_core::error::PlannerError;
use std::io;
use thiserror::Error;

/// Errors that can occur during CAM processing.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// The requested input format is not supported.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// G-code generation failed.
    #[error("G-code generation failed: {0}")]
    GenerationFailed(String),

    /// A planning error occurred.
    #[error(transparent)]
    Planner(#[from] PlannerError),

    /// A file format error occurred.
    #[error("File format error: {0}")]
    FileFormat(#[from] FileFormatError),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Errors related to file format parsing.
#[derive(Error, Debug)]
pub enum FileFormatError {
    /// The DXF document could not be parsed.
    #[error("DXF parse error: {0}")]
    DxfParseError(String),

    /// The zip archive could not be read.
    #[error("Archive error: {0}")]
    ArchiveError(String),

    /// The file extension is not recognized.
    #[error("Unknown file extension: {0}")]
    UnknownExtension(String),

    /// I/O error during file reading.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type alias for CAM operations.
pub type CamToolResult<T> = Result<T, CamToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cam_tool_error_display() {
        let err = CamToolError::UnsupportedFormat("svg".to_string());
        assert_eq!(err.to_string(), "Unsupported file format: svg");

        let err = CamToolError::GenerationFailed("empty toolpath".to_string());
        assert_eq!(err.to_string(), "G-code generation failed: empty toolpath");
    }

    #[test]
    fn test_file_format_error_display() {
        let err = FileFormatError::DxfParseError("unexpected end of input".to_string());
        assert_eq!(err.to_string(), "DXF parse error: unexpected end of input");

        let err = FileFormatError::UnknownExtension(".stp".to_string());
        assert_eq!(err.to_string(), "Unknown file extension: .stp");
    }

    #[test]
    fn test_error_conversion() {
        let fmt_err = FileFormatError::ArchiveError("bad central directory".to_string());
        let cam_err: CamToolError = fmt_err.into();
        assert!(matches!(cam_err, CamToolError::FileFormat(_)));

        let planner_err = PlannerError::UnsupportedUnit {
            unit: "Miles".to_string(),
        };
        let cam_err: CamToolError = planner_err.into();
        assert!(matches!(cam_err, CamToolError::Planner(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let cam_err: CamToolError = io_err.into();
        assert!(matches!(cam_err, CamToolError::IoError(_)));
    }
}
