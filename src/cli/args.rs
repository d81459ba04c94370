//! CLI argument definitions
//!
//! Startup options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};

const ABOUT: &str = "Find and observe backup MSBs while offline";

const LONG_ABOUT: &str = "\
Find and observe backup MSBs while offline

Reads a directory of backup MSBs previously fetched by fetch_backup_msbs.
This directory contains a selection of MSBs which could be observed for a
given date and time under various conditions. It can be used to keep
observing while the database is inaccessible.";

const AFTER_HELP: &str = "\
An interactive session starts in which the date, band, instrument and query
type can be chosen. The dates offered are the directories of observations
fetched for offline observation. If the database has been unavailable for
some time, the most recently fetched dates may have failed, so it might be
necessary to go back a few days.

'search' finds the next available time of day for which there are saved MSBs
and lists them with summary information. 'send <row>' translates that MSB and
adds it to the queue.

The jcmttranslator and ditscmd commands must be available, so the relevant
setup files must be sourced before using this tool.

WARNING: this tool does not update the number of observations remaining for
each MSB. It should only be used while the database has failed, and if used
for an extended period, it may be necessary to track the number of
observations remaining for each MSB ID manually.";

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "observe-backup-msbs")]
#[command(about = ABOUT, long_about = LONG_ABOUT, after_help = AFTER_HELP, version)]
pub(crate) struct Cli {
    /// Directory of backup MSBs written by fetch_backup_msbs
    #[arg(short, long, value_name = "DIR")]
    pub(crate) directory: PathBuf,

    /// Date to select at startup (YYYY-MM-DD, default: latest available)
    #[arg(long, value_name = "DATE")]
    pub(crate) date: Option<String>,

    /// Band to select at startup (e.g. "Band 2" or band_2)
    #[arg(long)]
    pub(crate) band: Option<String>,

    /// Instrument to select at startup (SCUBA-2, HARP or RxA3)
    #[arg(long)]
    pub(crate) instrument: Option<String>,

    /// Query type to select at startup (JLS, "PI projects" or "Nothing left")
    #[arg(long)]
    pub(crate) query: Option<String>,

    /// Reference time for slot selection instead of the current time
    #[arg(long, value_name = "HH-MM-SS")]
    pub(crate) time: Option<String>,

    /// Timezone in which the current time is read (e.g. "Pacific/Honolulu", "UTC")
    #[arg(long, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Color output mode
    #[arg(long, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long)]
    pub(crate) no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.band.is_none() {
            self.band = config.band.clone();
        }
        if self.instrument.is_none() {
            self.instrument = config.instrument.clone();
        }
        if self.query.is_none() {
            self.query = config.query.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
