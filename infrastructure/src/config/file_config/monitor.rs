//! Resource monitor configuration from TOML (`[monitor]` section)

use crate::monitor::MonitorConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw resource monitor configuration from TOML
///
/// # Example
///
/// ```toml
/// [monitor]
/// enabled = true
/// poll_secs = 5
/// max_ram_percent = 85.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMonitorConfig {
    pub enabled: bool,
    pub poll_secs: u64,
    /// Warn when RAM usage goes above this percentage
    pub max_ram_percent: f64,
}

impl Default for FileMonitorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            poll_secs: 5,
            max_ram_percent: 85.0,
        }
    }
}

impl FileMonitorConfig {
    pub fn to_monitor_config(&self) -> MonitorConfig {
        MonitorConfig {
            poll_interval: Duration::from_secs(self.poll_secs.max(1)),
            max_ram_percent: self.max_ram_percent,
        }
    }
}
