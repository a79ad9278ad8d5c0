use std::path::PathBuf;

const CONFIG_SUFFIX: &str = "_config.json";
const DRAFT_STEM: &str = "draft";

pub struct PathBuilder {
    output_dir: String,
    file_name: String,
}

impl PathBuilder {
    pub fn new(output_dir: &str, file_name: &str) -> Self {
        Self {
            output_dir: output_dir.to_string(),
            file_name: file_name.to_string(),
        }
    }

    pub fn build_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }

    pub fn build_file_path(&self) -> PathBuf {
        self.build_dir_path().join(&self.file_name)
    }
}

/// `trades.csv` becomes `trades_config.json`. Only the first `.csv` is removed.
pub fn artifact_name(file_name: &str) -> String {
    format!("{}{}", file_name.replacen(".csv", "", 1), CONFIG_SUFFIX)
}

/// Drafts keep the file name as typed, or fall back to `draft`.
pub fn draft_artifact_name(file_name: &str) -> String {
    let stem = if file_name.is_empty() { DRAFT_STEM } else { file_name };
    format!("{}{}", stem, CONFIG_SUFFIX)
}
