use crate::{
    AppState, Effect, Event, STATUS_ENTER_NAME_AND_FILE, STATUS_INPUT_FILE, STATUS_INPUT_NAME,
    STATUS_READY,
};

/// Initial state plus the effect to run at startup.
pub fn init() -> (AppState, Effect) {
    (AppState::new(), Effect::LoadConfig)
}

/// Pure update function: applies an event to state and returns the next effect.
pub fn update(mut state: AppState, event: Event) -> (AppState, Option<Effect>) {
    let effect = match event {
        Event::ConfigLoaded(path) => {
            state.set_destination_path(path);
            None
        }
        Event::ConfigLoadFailed(message) => {
            state.set_status(message);
            None
        }
        Event::NameChanged(name) => {
            if name.is_empty() {
                let status = if state.file_to_submit().is_some() {
                    STATUS_INPUT_FILE
                } else {
                    STATUS_ENTER_NAME_AND_FILE
                };
                state.set_user_name(None);
                state.set_status(status);
            } else {
                state.set_user_name(Some(name));
                state.set_status(STATUS_INPUT_FILE);
            }
            Some(Effect::CheckReadiness)
        }
        Event::FilePickRequested => Some(Effect::SelectFile),
        Event::FilePicked(file) => {
            state.set_file(file);
            state.set_status(STATUS_INPUT_NAME);
            Some(Effect::CheckReadiness)
        }
        Event::FilePickFailed(message) => {
            state.set_status(message);
            None
        }
        Event::BecameReady => {
            // Ignored unless the gate actually holds, so ready_to_submit never lies.
            if state.has_name_and_file() {
                state.mark_ready();
                state.set_status(STATUS_READY);
            }
            None
        }
        Event::SubmitRequested => write_effect(&state),
        Event::SubmitCompleted(Ok(message)) => {
            state.set_submitted(true);
            state.set_status(message);
            None
        }
        Event::SubmitCompleted(Err(message)) => {
            state.set_submitted(false);
            state.set_status(message);
            None
        }
        Event::NoOp => None,
    };

    (state, effect)
}

/// BecameReady when both a name and a file are present, NoOp otherwise.
pub fn readiness_check(state: &AppState) -> Event {
    if state.has_name_and_file() {
        Event::BecameReady
    } else {
        Event::NoOp
    }
}

/// Applies an event and every same-tick event it chains, returning the
/// first effect that has to run outside the core.
pub fn settle(state: AppState, event: Event) -> (AppState, Option<Effect>) {
    settle_observed(state, event, |_, _| {})
}

/// Like [`settle`], calling `observe` with each applied event and the state
/// it produced.
pub fn settle_observed<F>(
    mut state: AppState,
    event: Event,
    mut observe: F,
) -> (AppState, Option<Effect>)
where
    F: FnMut(&Event, &AppState),
{
    let mut next = event;
    loop {
        let applied = next.clone();
        let (updated, effect) = update(state, next);
        state = updated;
        observe(&applied, &state);
        match effect {
            Some(Effect::CheckReadiness) => next = readiness_check(&state),
            other => return (state, other),
        }
    }
}

fn write_effect(state: &AppState) -> Option<Effect> {
    let user_name = state.user_name()?;
    let file = state.file_to_submit()?;
    Some(Effect::WriteExam {
        destination: state.destination_path().to_string(),
        user_name: user_name.to_string(),
        file: file.clone(),
    })
}
