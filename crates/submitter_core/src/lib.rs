//! Submitter core: pure state machine for the exam submission workflow.
mod effect;
mod event;
mod file_spec;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use event::Event;
pub use file_spec::FileSpec;
pub use state::{
    AppState, STATUS_ENTER_NAME_AND_FILE, STATUS_INPUT_FILE, STATUS_INPUT_NAME, STATUS_READY,
};
pub use update::{init, readiness_check, settle, settle_observed, update};
pub use view_model::AppViewModel;
