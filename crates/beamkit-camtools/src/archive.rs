//! Zip-of-DXF archive handling.
//!
//! Cutting jobs often arrive as a zip of per-part DXF files. Entries are
//! yielded in archive order so the caller's output files line up with the
//! archive's listing.

use crate::error::{CamToolResult, FileFormatError};
use std::io::{Read, Seek};
use std::path::Path;
use tracing::warn;
use zip::ZipArchive;

/// One DXF file extracted from an archive.
#[derive(Debug)]
pub struct ArchiveEntry {
    /// Entry name as stored in the archive.
    pub name: String,
    /// Raw DXF bytes.
    pub data: Vec<u8>,
}

/// Extracts every `.dxf` entry from a zip archive, in archive order.
///
/// Directories and non-DXF files are skipped. An archive with no DXF
/// entries yields an empty list; the caller decides whether that matters.
pub fn extract_dxf_entries<R: Read + Seek>(reader: R) -> CamToolResult<Vec<ArchiveEntry>> {
    let mut archive =
        ZipArchive::new(reader).map_err(|e| FileFormatError::ArchiveError(e.to_string()))?;

    let mut entries = Vec::new();
    for i in 0..archive.len() {
        let mut file = archive
            .by_index(i)
            .map_err(|e| FileFormatError::ArchiveError(e.to_string()))?;
        if file.is_dir() {
            continue;
        }
        let name = file.name().to_string();
        if !has_dxf_extension(&name) {
            continue;
        }
        let mut data = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut data)
            .map_err(FileFormatError::IoError)?;
        entries.push(ArchiveEntry { name, data });
    }

    if entries.is_empty() {
        warn!("archive contains no DXF entries");
    }

    Ok(entries)
}

fn has_dxf_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("dxf"))
        .unwrap_or(false)
}
