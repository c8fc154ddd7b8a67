//! Submitter engine: collaborator I/O and effect execution.
mod config;
mod engine;
mod filename;
mod persist;
mod select;
mod types;

pub use config::{ConfigLoader, FsConfigLoader};
pub use engine::{EngineHandle, EngineServices, EventSink};
pub use filename::{sanitize_user_name, submission_filename, utc_timestamp};
pub use persist::{check_destination, AtomicFileWriter, Clock, ExamWriter, FsExamWriter};
pub use select::{open_selection, ExtensionFilter, FileSelector};
pub use types::{ConfigError, EngineEvent, SelectionError, WriteError, WriteRequest};
