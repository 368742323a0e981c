//! systemd-backed power operations

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, info};

use crate::control::{PowerError, PowerService};

/// Kernel view of the configured hibernation target
const DISK_STATE_PATH: &str = "/sys/power/disk";

/// Targets that make a suspend request end up hibernating
const HIBERNATE_TARGETS: [&str; 3] = [
    "hibernate.target",
    "hybrid-sleep.target",
    "suspend-then-hibernate.target",
];

/// Power service talking to systemd and sysfs.
///
/// Hibernation state is read from `/sys/power/disk`; disabling it masks
/// the hibernate-flavored sleep targets, and suspending shells out to
/// `systemctl suspend`.
#[derive(Debug)]
pub struct SystemdPower {
    disk_state_path: PathBuf,
}

impl SystemdPower {
    pub fn new() -> Self {
        Self {
            disk_state_path: PathBuf::from(DISK_STATE_PATH),
        }
    }

    #[cfg(test)]
    fn with_disk_state_path(path: PathBuf) -> Self {
        Self {
            disk_state_path: path,
        }
    }

    /// Check that systemctl is available. Called once at startup.
    pub fn check_available() -> Result<(), PowerError> {
        Command::new("systemctl")
            .arg("--version")
            .output()
            .map_err(|_| PowerError::Command {
                command: "systemctl --version".to_string(),
                detail: "systemctl is not available; snooze requires systemd".to_string(),
            })?;
        debug!("systemctl is available");
        Ok(())
    }
}

impl Default for SystemdPower {
    fn default() -> Self {
        Self::new()
    }
}

/// Interpret the contents of `/sys/power/disk`. The kernel reports
/// `[disabled]` when hibernation is off (e.g. `nohibernate`).
fn hibernation_available(disk_state: &str) -> bool {
    let disk_state = disk_state.trim();
    !disk_state.is_empty() && disk_state != "[disabled]"
}

impl PowerService for SystemdPower {
    fn hibernation_enabled(&mut self) -> Result<bool, PowerError> {
        match fs::read_to_string(&self.disk_state_path) {
            Ok(contents) => {
                let enabled = hibernation_available(&contents);
                debug!(
                    "hibernation state {:?}: {}",
                    contents.trim(),
                    if enabled { "enabled" } else { "disabled" }
                );
                Ok(enabled)
            }
            // No hibernation support at all on this kernel
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(PowerError::Query(e.to_string())),
        }
    }

    fn disable_hibernation(&mut self) -> Result<(), PowerError> {
        debug!("masking hibernate sleep targets");
        let output = Command::new("systemctl")
            .arg("mask")
            .args(HIBERNATE_TARGETS)
            .output()
            .map_err(|e| PowerError::Command {
                command: "systemctl mask".to_string(),
                detail: e.to_string(),
            })?;

        if !output.status.success() {
            // A refused mask is read as missing privileges. The exit status
            // does not distinguish that from other failures, so this is a
            // best-effort heuristic.
            return Err(PowerError::PrivilegeRequired);
        }

        info!("hibernate sleep targets masked");
        Ok(())
    }

    fn request_suspend(&mut self) -> Result<(), PowerError> {
        info!("requesting system suspend");
        let output = Command::new("systemctl")
            .arg("suspend")
            .output()
            .map_err(|e| PowerError::Command {
                command: "systemctl suspend".to_string(),
                detail: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PowerError::Command {
                command: "systemctl suspend".to_string(),
                detail: stderr.trim().to_string(),
            });
        }

        info!("suspend command executed");
        Ok(())
    }
}
