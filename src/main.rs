mod app;
mod cli;
mod config;
mod consts;
mod error;
mod msb;
mod output;
mod queue;
mod snapshot;
mod utils;

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use app::{ReferenceTime, Session, initial_selection};
use cli::Cli;
use config::Config;
use error::AppError;
use queue::{ExternalTool, OcsQueue};
use snapshot::SnapshotTree;
use utils::{Timezone, parse_time_slot};

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);

    init_logging(cli.debug);
    if let Some(path) = &config.source {
        tracing::debug!("Loaded config from {}", path.display());
    }

    if let Err(e) = run(&cli, &config) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    // Both tools must answer before anything interactive is set up
    let queue = OcsQueue::new(
        ExternalTool::translator(config.translator_program()),
        ExternalTool::queue(config.queue_program()),
    );
    queue.check()?;

    let tree = SnapshotTree::new(&cli.directory);
    let dates = tree.dates()?;
    if dates.is_empty() {
        return Err(AppError::NoDates {
            root: tree.root().to_path_buf(),
        });
    }

    let selection = initial_selection(
        &dates,
        cli.date.as_deref(),
        cli.band.as_deref(),
        cli.instrument.as_deref(),
        cli.query.as_deref(),
    )?;

    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let reference = match cli.time.as_deref() {
        Some(time) => ReferenceTime::Fixed(parse_time_slot(time)?),
        None => ReferenceTime::Clock(timezone),
    };
    tracing::debug!(
        "{} date(s) under {}, reference {:?}",
        dates.len(),
        tree.root().display(),
        reference
    );

    let mut session = Session::new(
        &tree,
        &queue,
        dates,
        selection,
        reference,
        cli.use_color(),
    );
    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
