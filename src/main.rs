//! Snooze - a terminal countdown timer that suspends the system
//!
//! This is the main entry point for the snooze application.

use tracing::info;

use snooze::{config::Config, power::SystemdPower, ui::App};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level. Logs go to stderr;
    // redirect it when running interactively.
    tracing_subscriber::fmt()
        .with_env_filter(format!("snooze={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting snooze");
    info!(
        "Configuration: amount={}, unit={:?}, verbose={}",
        config.amount, config.unit, config.verbose
    );

    // Suspension and hibernation control go through systemctl.
    SystemdPower::check_available()?;

    let terminal = ratatui::init();
    let result = App::new(&config, terminal).run();
    ratatui::restore();
    result
}
