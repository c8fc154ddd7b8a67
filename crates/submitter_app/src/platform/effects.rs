use std::io;
use std::path::Path;
use std::sync::{mpsc, Arc};

use submitter_core::{Effect, Event};
use submitter_engine::{EngineEvent, EngineHandle, EngineServices, EventSink, WriteRequest};
use submitter_logging::{submit_error, submit_info, submit_warn};

use super::ui::input::Inbound;

pub(crate) const SUBMIT_FAILED_MESSAGE: &str =
    "Submission failed. Please try again, and contact your instructor if the problem persists.";

/// Executes effects produced by the session.
pub(crate) trait RunEffect {
    fn run(&self, effect: Effect);
}

pub(crate) struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(services: EngineServices, inbox: mpsc::Sender<Inbound>) -> io::Result<Self> {
        let sink = Arc::new(InboxSink { inbox });
        let engine = EngineHandle::new(services, sink)?;
        Ok(Self { engine })
    }
}

impl RunEffect for EffectRunner {
    fn run(&self, effect: Effect) {
        match effect {
            Effect::LoadConfig => {
                submit_info!("LoadConfig");
                self.engine.load_config();
            }
            Effect::CheckReadiness => {
                // settle() resolves this before effects leave the core.
                submit_warn!("CheckReadiness reached the effect runner; ignoring");
            }
            Effect::SelectFile => {
                submit_info!("SelectFile");
                self.engine.select_file();
            }
            Effect::WriteExam {
                destination,
                user_name,
                file,
            } => {
                submit_info!(
                    "WriteExam destination={:?} file={} bytes={}",
                    destination,
                    file.name(),
                    file.contents().len()
                );
                self.engine.write_exam(WriteRequest {
                    destination,
                    user_name,
                    file,
                });
            }
        }
    }
}

/// Posts engine outcomes back onto the session queue as core events.
struct InboxSink {
    inbox: mpsc::Sender<Inbound>,
}

impl EventSink for InboxSink {
    fn emit(&self, event: EngineEvent) {
        let event = map_engine_event(event);
        if self.inbox.send(Inbound::Event(event)).is_err() {
            submit_warn!("Session closed; dropping engine outcome");
        }
    }
}

pub(crate) fn map_engine_event(event: EngineEvent) -> Event {
    match event {
        EngineEvent::ConfigLoaded(Ok(path)) => Event::ConfigLoaded(path),
        EngineEvent::ConfigLoaded(Err(err)) => {
            submit_error!("Config load failed: {}", err);
            Event::ConfigLoadFailed(err.to_string())
        }
        EngineEvent::FileSelected(Ok(file)) => Event::FilePicked(file),
        EngineEvent::FileSelected(Err(err)) => {
            submit_warn!("File selection failed: {}", err);
            Event::FilePickFailed(err.to_string())
        }
        EngineEvent::ExamWritten(Ok(path)) => Event::SubmitCompleted(Ok(success_message(&path))),
        EngineEvent::ExamWritten(Err(err)) => {
            submit_error!("Submission write failed: {}", err);
            Event::SubmitCompleted(Err(SUBMIT_FAILED_MESSAGE.to_string()))
        }
    }
}

fn success_message(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    format!("Submission successful! Saved as {name}.")
}
