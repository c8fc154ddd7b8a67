use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use submitter_core::Event;
use submitter_logging::submit_info;

/// A typed instruction from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UiCommand {
    SetName(String),
    Pick,
    Submit,
    Status,
    Help,
    Quit,
}

/// Everything the session loop consumes, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Inbound {
    Command(UiCommand),
    Event(Event),
    Unknown(String),
}

pub(crate) const HELP_TEXT: &str = "\
Commands:
  name <your name>   set your name (empty clears it)
  pick               choose the file to submit
  submit             submit the chosen file
  status             show the current state
  help               show this help
  quit               close the session";

pub(crate) fn parse_command(line: &str) -> Option<UiCommand> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let command = match word.to_ascii_lowercase().as_str() {
        "name" => UiCommand::SetName(rest.to_string()),
        "pick" if rest.is_empty() => UiCommand::Pick,
        "submit" if rest.is_empty() => UiCommand::Submit,
        "status" if rest.is_empty() => UiCommand::Status,
        "help" | "?" if rest.is_empty() => UiCommand::Help,
        "quit" | "exit" if rest.is_empty() => UiCommand::Quit,
        _ => return None,
    };
    Some(command)
}

/// Reads stdin on a background thread and parses each line as a command.
/// End of input quits.
pub(crate) fn spawn_reader(inbox: mpsc::Sender<Inbound>) -> io::Result<()> {
    thread::Builder::new()
        .name("submitter-input".into())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if line.trim().is_empty() {
                    continue;
                }
                let inbound = match parse_command(&line) {
                    Some(command) => Inbound::Command(command),
                    None => Inbound::Unknown(line),
                };
                if inbox.send(inbound).is_err() {
                    return;
                }
            }
            submit_info!("Input closed");
            let _ = inbox.send(Inbound::Command(UiCommand::Quit));
        })?;
    Ok(())
}
