use std::path::PathBuf;

use async_trait::async_trait;
use submitter_logging::{submit_info, submit_warn};

use crate::ConfigError;

/// Reads the destination path submissions are written to.
#[async_trait]
pub trait ConfigLoader: Send + Sync {
    async fn load_destination(&self) -> Result<String, ConfigError>;
}

/// Loads the destination from a text file; surrounding whitespace is dropped.
pub struct FsConfigLoader {
    path: PathBuf,
}

impl FsConfigLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ConfigLoader for FsConfigLoader {
    async fn load_destination(&self) -> Result<String, ConfigError> {
        let shown = self.path.display().to_string();
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| {
                submit_warn!("Reading destination config {} failed: {}", shown, source);
                ConfigError::Read {
                    path: shown.clone(),
                    source,
                }
            })?;
        let destination = text.trim();
        if destination.is_empty() {
            return Err(ConfigError::Empty { path: shown });
        }
        submit_info!("Loaded submission destination from {}", shown);
        Ok(destination.to_string())
    }
}
