use crate::session::Artifact;
use crate::utils::paths::PathBuilder;
use common::Result;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Writes the artifact's document as pretty JSON into `output_dir`,
/// creating the directory when missing. Returns the written path.
pub fn write_artifact(output_dir: &str, artifact: &Artifact) -> Result<PathBuf> {
    let paths = PathBuilder::new(output_dir, &artifact.name);
    fs::create_dir_all(paths.build_dir_path())?;

    let path = paths.build_file_path();
    let json = serde_json::to_string_pretty(&artifact.document)?;
    fs::write(&path, json)?;

    info!(path = %path.display(), id = %artifact.document.id, "Wrote configuration document");
    Ok(path)
}
