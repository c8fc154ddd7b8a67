use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

pub(crate) const SETTINGS_FILENAME: &str = "exam_submitter.ron";

/// Machine-level settings read once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppSettings {
    /// Text file whose contents name the submission destination directory.
    pub destination_config: PathBuf,
    /// Extensions offered by the file picker, without the dot.
    pub extensions: Vec<String>,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            destination_config: PathBuf::from("./exam_destination.txt"),
            extensions: vec!["py".to_string()],
            log_destination: LogDestination::File,
            log_file: PathBuf::from("./exam_submitter.log"),
            log_level: "info".to_string(),
        }
    }
}

/// Reads settings from `path`. A missing file is `Ok(None)`.
pub(crate) fn load_settings(path: &Path) -> anyhow::Result<Option<AppSettings>> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("reading settings from {:?}", path));
        }
    };
    let settings = ron::from_str(&content)
        .with_context(|| format!("parsing settings from {:?}", path))?;
    Ok(Some(settings))
}
