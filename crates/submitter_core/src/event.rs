use crate::FileSpec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Config load finished; payload is the destination path.
    ConfigLoaded(String),
    /// Config load failed; payload is a human-readable message.
    ConfigLoadFailed(String),
    /// User edited the name field.
    NameChanged(String),
    /// User asked to choose a file.
    FilePickRequested,
    /// File selection produced exactly one file.
    FilePicked(FileSpec),
    /// File selection failed (nothing chosen, several chosen, unreadable).
    FilePickFailed(String),
    /// Readiness check found both a name and a file.
    BecameReady,
    /// User clicked Submit.
    SubmitRequested,
    /// Write finished with a user-facing message.
    SubmitCompleted(Result<String, String>),
    NoOp,
}

impl Event {
    /// Short variant name for logging; payloads may hold file contents.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::ConfigLoaded(_) => "ConfigLoaded",
            Event::ConfigLoadFailed(_) => "ConfigLoadFailed",
            Event::NameChanged(_) => "NameChanged",
            Event::FilePickRequested => "FilePickRequested",
            Event::FilePicked(_) => "FilePicked",
            Event::FilePickFailed(_) => "FilePickFailed",
            Event::BecameReady => "BecameReady",
            Event::SubmitRequested => "SubmitRequested",
            Event::SubmitCompleted(Ok(_)) => "SubmitCompleted(Ok)",
            Event::SubmitCompleted(Err(_)) => "SubmitCompleted(Err)",
            Event::NoOp => "NoOp",
        }
    }
}
