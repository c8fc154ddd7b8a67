use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use submitter_logging::{submit_info, submit_warn};
use tempfile::NamedTempFile;

use crate::filename::submission_filename;
use crate::{WriteError, WriteRequest};

/// Source of the submission timestamp.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Persists a submitted file at the destination.
#[async_trait]
pub trait ExamWriter: Send + Sync {
    async fn write(&self, request: WriteRequest) -> Result<PathBuf, WriteError>;
}

/// Check that the destination is an existing, writable directory.
///
/// The directory is never created: a missing destination means the shared
/// location is unreachable.
pub fn check_destination(dir: &Path) -> Result<(), WriteError> {
    if dir.as_os_str().is_empty() {
        return Err(WriteError::NoDestination);
    }
    let meta = fs::metadata(dir).map_err(|e| WriteError::DestinationUnavailable(e.to_string()))?;
    if !meta.is_dir() {
        return Err(WriteError::DestinationUnavailable(
            "path is not a directory".into(),
        ));
    }
    // Writability probe: the temp file is removed when dropped.
    NamedTempFile::new_in(dir).map_err(|e| WriteError::DestinationUnavailable(e.to_string()))?;
    Ok(())
}

/// Writes `{dir}/{filename}` through a temp file in the same directory, then
/// moves it into place. An existing file is never replaced.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn create(&self, filename: &str, content: &str) -> Result<PathBuf, WriteError> {
        check_destination(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        tmp.persist_noclobber(&target).map_err(|e| {
            if e.error.kind() == ErrorKind::AlreadyExists {
                WriteError::AlreadyExists(target.clone())
            } else {
                WriteError::Io(e.error)
            }
        })?;
        Ok(target)
    }
}

/// Filesystem writer using the `{timestamp}__{user}__{name}.txt` convention.
pub struct FsExamWriter {
    clock: Clock,
}

impl FsExamWriter {
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    pub fn with_system_clock() -> Self {
        Self::new(Arc::new(Utc::now))
    }
}

#[async_trait]
impl ExamWriter for FsExamWriter {
    async fn write(&self, request: WriteRequest) -> Result<PathBuf, WriteError> {
        if request.destination.is_empty() {
            return Err(WriteError::NoDestination);
        }
        let filename = submission_filename((self.clock)(), &request.user_name, request.file.name());
        let writer = AtomicFileWriter::new(PathBuf::from(&request.destination));

        let result = tokio::task::spawn_blocking(move || {
            writer.create(&filename, request.file.contents())
        })
        .await
        .map_err(|e| WriteError::Task(e.to_string()))?;

        match &result {
            Ok(path) => submit_info!("Wrote submission to {:?}", path),
            Err(err) => submit_warn!("Writing submission failed: {}", err),
        }
        result
    }
}
