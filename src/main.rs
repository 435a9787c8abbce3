use anyhow::{bail, Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use beamkit::init_logging;
use beamkit_camtools::{archive, dxf_import, CamToolError, GcodeGenerator, ToolpathPlanner};
use beamkit_core::JobSettings;

fn main() -> Result<()> {
    init_logging()?;

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        bail!("usage: beamkit <input.dxf|input.zip> [output-dir] [settings.json]");
    }

    let input = PathBuf::from(&args[1]);
    let output_dir = match args.get(2) {
        Some(dir) => PathBuf::from(dir),
        None => input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf(),
    };
    let settings = match args.get(3) {
        Some(path) => JobSettings::from_json_file(Path::new(path))
            .with_context(|| format!("failed to load settings from {}", path))?,
        None => JobSettings::default(),
    };
    settings.validate()?;

    run(&input, &output_dir, &settings)
}

fn run(input: &Path, output_dir: &Path, settings: &JobSettings) -> Result<()> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    let extension = input
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "zip" => process_archive(input, output_dir, settings),
        "dxf" => {
            let data = std::fs::read(input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let name = input
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("drawing.dxf");
            process_document(name, &data, output_dir, settings)
        }
        other => Err(CamToolError::UnsupportedFormat(format!(
            "{} (expected dxf or zip)",
            other
        ))
        .into()),
    }
}

fn process_archive(input: &Path, output_dir: &Path, settings: &JobSettings) -> Result<()> {
    let file =
        File::open(input).with_context(|| format!("failed to open {}", input.display()))?;
    let entries = archive::extract_dxf_entries(file)?;

    // A fatal error in one document must not abort the rest of the archive.
    for entry in &entries {
        info!(name = %entry.name, "processing archive entry");
        if let Err(err) = process_document(&entry.name, &entry.data, output_dir, settings) {
            error!(name = %entry.name, %err, "skipping document");
        }
    }

    Ok(())
}

fn process_document(
    name: &str,
    data: &[u8],
    output_dir: &Path,
    settings: &JobSettings,
) -> Result<()> {
    let document = dxf_import::load_bytes(data)?;
    let toolpath = ToolpathPlanner::new(settings.clone()).plan(&document.segments, document.unit)?;

    if toolpath.is_empty() {
        warn!(name, "document has no cuttable geometry, skipping");
        return Ok(());
    }

    let gcode = GcodeGenerator::new(settings).generate(name, &toolpath)?;

    let stem = Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let out_path = output_dir.join(format!("{}.gcode", stem));
    std::fs::write(&out_path, gcode)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    info!(
        path = %out_path.display(),
        motions = toolpath.len(),
        draw_mm = toolpath.draw_length(),
        travel_mm = toolpath.travel_length(),
        "wrote G-code"
    );

    Ok(())
}
