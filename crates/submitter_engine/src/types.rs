use std::io;
use std::path::PathBuf;

use submitter_core::FileSpec;
use thiserror::Error;

/// Everything the writer needs, captured from state at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRequest {
    pub destination: String,
    pub user_name: String,
    pub file: FileSpec,
}

#[derive(Debug)]
pub enum EngineEvent {
    ConfigLoaded(Result<String, ConfigError>),
    FileSelected(Result<FileSpec, SelectionError>),
    ExamWritten(Result<PathBuf, WriteError>),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not load submission destination from {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("Submission destination in {path} is empty")]
    Empty { path: String },
}

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("No file selected. Please choose one file.")]
    NoFile,
    #[error("{0} files selected. Please choose exactly one file.")]
    MultipleFiles(usize),
    #[error("{name} is not an accepted file type (expected {expected}).")]
    WrongExtension { name: String, expected: String },
    #[error("Could not read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("File selection was cancelled.")]
    Cancelled,
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("no submission destination configured")]
    NoDestination,
    #[error("destination unavailable: {0}")]
    DestinationUnavailable(String),
    #[error("submission already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("write task failed: {0}")]
    Task(String),
}
