use std::path::{Path, PathBuf};

use async_trait::async_trait;
use submitter_core::FileSpec;
use submitter_logging::submit_info;

use crate::SelectionError;

/// Asks the user to choose exactly one file.
#[async_trait]
pub trait FileSelector: Send + Sync {
    async fn select(&self) -> Result<FileSpec, SelectionError>;
}

/// Accepted file extensions, compared case-insensitively without the dot.
/// An empty filter accepts every file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl ExtensionFilter {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }

    pub fn accepts(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .is_some_and(|e| self.extensions.iter().any(|allowed| *allowed == e))
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// e.g. `*.py, *.txt`
    pub fn describe(&self) -> String {
        if self.extensions.is_empty() {
            return "*".to_string();
        }
        self.extensions
            .iter()
            .map(|e| format!("*.{e}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Turns a selection into a FileSpec: exactly one path, an accepted
/// extension, and UTF-8 text contents.
pub async fn open_selection(
    paths: &[PathBuf],
    filter: &ExtensionFilter,
) -> Result<FileSpec, SelectionError> {
    let path = match paths {
        [] => return Err(SelectionError::NoFile),
        [single] => single,
        many => return Err(SelectionError::MultipleFiles(many.len())),
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    if !filter.accepts(path) {
        return Err(SelectionError::WrongExtension {
            name,
            expected: filter.describe(),
        });
    }

    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SelectionError::Read {
            path: path.display().to_string(),
            source,
        })?;
    submit_info!("Selected {} ({} bytes)", name, contents.len());
    Ok(FileSpec::new(name, contents))
}
