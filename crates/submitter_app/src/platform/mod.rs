mod app;
mod effects;
mod logging;
mod picker;
mod session;
mod settings;
mod ui;

pub use app::run_app;
