use std::io;
use std::path::PathBuf;
use std::sync::{mpsc, Arc};

use anyhow::Context;
use submitter_engine::{EngineServices, ExtensionFilter, FsConfigLoader, FsExamWriter};
use submitter_logging::{parse_level, submit_info, submit_warn};

use super::effects::EffectRunner;
use super::logging;
use super::picker::RfdFileSelector;
use super::session::Session;
use super::settings::{load_settings, AppSettings, SETTINGS_FILENAME};
use super::ui;
use super::ui::input::Inbound;

pub fn run_app() -> anyhow::Result<()> {
    let settings_path = PathBuf::from(SETTINGS_FILENAME);
    let (settings, settings_problem) = match load_settings(&settings_path) {
        Ok(Some(settings)) => (settings, None),
        Ok(None) => (AppSettings::default(), None),
        Err(err) => (AppSettings::default(), Some(err)),
    };

    logging::initialize(
        settings.log_destination,
        parse_level(&settings.log_level),
        &settings.log_file,
    );
    if let Some(err) = settings_problem {
        submit_warn!("Using default settings: {:#}", err);
    }
    submit_info!(
        "Starting exam submitter; destination config {:?}, extensions {:?}",
        settings.destination_config,
        settings.extensions
    );

    let (inbox_tx, inbox_rx) = mpsc::channel::<Inbound>();
    let services = EngineServices {
        config: Arc::new(FsConfigLoader::new(&settings.destination_config)),
        selector: Arc::new(RfdFileSelector::new(ExtensionFilter::new(
            &settings.extensions,
        ))),
        writer: Arc::new(FsExamWriter::with_system_clock()),
    };
    let runner = EffectRunner::new(services, inbox_tx.clone()).context("starting effect runner")?;
    ui::input::spawn_reader(inbox_tx).context("starting input reader")?;

    println!("{}", ui::input::HELP_TEXT);
    let mut session = Session::new(runner, io::stdout());
    session.start();
    session.run(inbox_rx);
    Ok(())
}
