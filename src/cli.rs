// cli.rs - Command-line interface configuration
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::settings::DEFAULT_SETTINGS_FILE;

#[derive(Parser, Debug, Clone)]
#[command(name = "wind-turbine")]
#[command(about = "Wind turbine silhouette with file-controlled rotation speed", long_about = None)]
pub struct Cli {
    /// File holding the speed level (an integer from 1 to 10)
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    pub settings: PathBuf,

    /// Milliseconds between rotation ticks
    #[arg(long = "tick-ms", default_value_t = 16, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Milliseconds between re-reads of the settings file
    #[arg(long = "poll-ms", default_value_t = 5000, value_parser = clap::value_parser!(u64).range(1..))]
    pub poll_ms: u64,
}

impl Cli {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn poll_period(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }
}
