use std::io::Write;
use std::sync::mpsc;

use submitter_core::{init, settle_observed, AppState, AppViewModel, Event};
use submitter_logging::{submit_debug, submit_info};

use super::effects::RunEffect;
use super::ui::input::{Inbound, UiCommand, HELP_TEXT};
use super::ui::render;

/// The serialized event loop: one inbound item at a time, each reduced to
/// completion (including chained readiness checks) before the next.
pub(crate) struct Session<R: RunEffect, W: Write> {
    state: AppState,
    last_view: AppViewModel,
    runner: R,
    out: W,
}

impl<R: RunEffect, W: Write> Session<R, W> {
    pub fn new(runner: R, out: W) -> Self {
        Self {
            state: AppState::new(),
            last_view: AppViewModel::default(),
            runner,
            out,
        }
    }

    /// Paints the initial view and runs the startup effect.
    pub fn start(&mut self) {
        let (state, effect) = init();
        self.state = state;
        self.paint();
        self.runner.run(effect);
    }

    pub fn run(&mut self, inbox: mpsc::Receiver<Inbound>) {
        for inbound in inbox.iter() {
            if !self.handle(inbound) {
                break;
            }
        }
        submit_info!("Session ended");
    }

    /// Returns false once the session should close.
    pub fn handle(&mut self, inbound: Inbound) -> bool {
        match inbound {
            Inbound::Event(event) => self.dispatch(event),
            Inbound::Command(UiCommand::SetName(name)) => self.dispatch(Event::NameChanged(name)),
            Inbound::Command(UiCommand::Pick) => self.dispatch(Event::FilePickRequested),
            Inbound::Command(UiCommand::Submit) => {
                let view = self.state.view();
                if view.can_submit {
                    self.dispatch(Event::SubmitRequested);
                } else {
                    let notice = render::submit_unavailable(&view);
                    self.say(&notice);
                }
            }
            Inbound::Command(UiCommand::Status) => self.paint(),
            Inbound::Command(UiCommand::Help) => self.say(HELP_TEXT),
            Inbound::Command(UiCommand::Quit) => return false,
            Inbound::Unknown(line) => {
                self.say(&format!("Unknown command {:?}. Type `help` for commands.", line));
            }
        }
        true
    }

    #[cfg(test)]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn dispatch(&mut self, event: Event) {
        // Outcomes are reported even when they repeat the current status.
        let reports_outcome = matches!(
            event,
            Event::ConfigLoadFailed(_) | Event::FilePickFailed(_) | Event::SubmitCompleted(_)
        );
        let state = std::mem::take(&mut self.state);
        let (state, effect) = settle_observed(state, event, |applied, _| {
            submit_debug!("Applied {}", applied.kind());
        });
        self.state = state;

        if reports_outcome || self.state.view() != self.last_view {
            self.paint();
        }
        if let Some(effect) = effect {
            self.runner.run(effect);
        }
    }

    fn paint(&mut self) {
        let view = self.state.view();
        for line in render::render(&view) {
            let _ = writeln!(self.out, "{line}");
        }
        let _ = self.out.flush();
        self.last_view = view;
    }

    fn say(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
        let _ = self.out.flush();
    }
}
