//! Configuration and CLI argument handling

use clap::Parser;

use crate::timer::DelayUnit;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "snooze")]
#[command(about = "A terminal countdown timer that suspends the system when it expires")]
#[command(version)]
pub struct Config {
    /// Initial delay amount shown in the entry field
    #[arg(short, long, default_value = "20")]
    pub amount: String,

    /// Initial delay unit
    #[arg(short, long, value_enum, default_value = "minutes")]
    pub unit: DelayUnit,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
