use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use submitter_logging::{submit_debug, submit_error, submit_info};

use crate::{ConfigLoader, EngineEvent, ExamWriter, FileSelector, WriteRequest};

/// The collaborators effects are executed against.
#[derive(Clone)]
pub struct EngineServices {
    pub config: Arc<dyn ConfigLoader>,
    pub selector: Arc<dyn FileSelector>,
    pub writer: Arc<dyn ExamWriter>,
}

/// Receives exactly one event per completed command.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

enum EngineCommand {
    LoadConfig,
    SelectFile,
    WriteExam(WriteRequest),
}

/// Runs commands on a tokio runtime owned by a background thread.
///
/// Commands start in the order they are sent; none are cancelled once
/// started. Dropping the handle lets in-flight commands finish and then
/// shuts the runtime down.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(services: EngineServices, sink: Arc<dyn EventSink>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("submitter-engine")
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("submitter-engine-commands".into())
            .spawn(move || {
                let mut in_flight = Vec::new();
                while let Ok(command) = cmd_rx.recv() {
                    submit_debug!("Engine command {}", command_kind(&command));
                    in_flight.retain(|task: &tokio::task::JoinHandle<()>| !task.is_finished());
                    let services = services.clone();
                    let sink = sink.clone();
                    in_flight.push(runtime.spawn(async move {
                        let event = handle_command(&services, command).await;
                        sink.emit(event);
                    }));
                }
                submit_info!("Engine command channel closed; waiting for {} task(s)", in_flight.len());
                runtime.block_on(async {
                    for task in in_flight {
                        let _ = task.await;
                    }
                });
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn load_config(&self) {
        self.send(EngineCommand::LoadConfig);
    }

    pub fn select_file(&self) {
        self.send(EngineCommand::SelectFile);
    }

    pub fn write_exam(&self, request: WriteRequest) {
        self.send(EngineCommand::WriteExam(request));
    }

    /// Returns false when the command thread is gone; no event will follow.
    fn send(&self, command: EngineCommand) -> bool {
        let kind = command_kind(&command);
        if self.cmd_tx.send(command).is_err() {
            submit_error!("Engine stopped; {} dropped without an outcome", kind);
            return false;
        }
        true
    }
}

async fn handle_command(services: &EngineServices, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::LoadConfig => {
            EngineEvent::ConfigLoaded(services.config.load_destination().await)
        }
        EngineCommand::SelectFile => EngineEvent::FileSelected(services.selector.select().await),
        EngineCommand::WriteExam(request) => {
            EngineEvent::ExamWritten(services.writer.write(request).await)
        }
    }
}

fn command_kind(command: &EngineCommand) -> &'static str {
    match command {
        EngineCommand::LoadConfig => "LoadConfig",
        EngineCommand::SelectFile => "SelectFile",
        EngineCommand::WriteExam(_) => "WriteExam",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detached_handle() -> EngineHandle {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        drop(cmd_rx);
        EngineHandle { cmd_tx }
    }

    #[test]
    fn send_reports_stopped_engine() {
        let engine = detached_handle();
        assert!(!engine.send(EngineCommand::LoadConfig));
        // Public entry points log instead of panicking.
        engine.select_file();
    }

    #[test]
    fn send_succeeds_while_receiver_lives() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let engine = EngineHandle { cmd_tx };

        assert!(engine.send(EngineCommand::SelectFile));
        assert!(matches!(cmd_rx.try_recv(), Ok(EngineCommand::SelectFile)));
    }
}
