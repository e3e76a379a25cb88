//! Background RAM watchdog
//!
//! Polls `/proc/meminfo` and reports through logs only. It never touches
//! the resolution engine.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

const MEMINFO_PATH: &str = "/proc/meminfo";

/// Watchdog settings
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorConfig {
    pub poll_interval: Duration,
    /// Usage above this percentage is logged as a warning
    pub max_ram_percent: f64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            max_ram_percent: 85.0,
        }
    }
}

/// One sample of system memory, in kB
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryReading {
    pub total_kb: u64,
    pub available_kb: u64,
}

impl MemoryReading {
    pub fn used_percent(&self) -> f64 {
        if self.total_kb == 0 {
            return 0.0;
        }
        let used = self.total_kb.saturating_sub(self.available_kb);
        used as f64 * 100.0 / self.total_kb as f64
    }
}

/// Parse the `MemTotal` and `MemAvailable` lines of `/proc/meminfo`
pub fn parse_meminfo(content: &str) -> Option<MemoryReading> {
    let mut total = None;
    let mut available = None;

    for line in content.lines() {
        let mut parts = line.split_whitespace();
        let (Some(name), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };
        match name {
            "MemTotal:" => total = value.parse().ok(),
            "MemAvailable:" => available = value.parse().ok(),
            _ => {}
        }
        if total.is_some() && available.is_some() {
            break;
        }
    }

    Some(MemoryReading {
        total_kb: total?,
        available_kb: available?,
    })
}

async fn read_memory() -> Option<MemoryReading> {
    let content = tokio::fs::read_to_string(MEMINFO_PATH).await.ok()?;
    parse_meminfo(&content)
}

/// Periodic RAM check running as its own tokio task
pub struct ResourceMonitor {
    config: MonitorConfig,
}

impl ResourceMonitor {
    pub fn new(config: MonitorConfig) -> Self {
        Self { config }
    }

    /// Start polling until `shutdown` is cancelled.
    ///
    /// On hosts without `/proc/meminfo` the task logs once and exits.
    pub fn spawn(self, shutdown: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(async move { self.run(shutdown).await })
    }

    async fn run(self, shutdown: CancellationToken) {
        if read_memory().await.is_none() {
            info!("RAM monitor disabled: {} is not readable", MEMINFO_PATH);
            return;
        }

        info!(
            "RAM monitor started (every {}s, ceiling {:.0}%)",
            self.config.poll_interval.as_secs(),
            self.config.max_ram_percent
        );
        let mut interval = tokio::time::interval(self.config.poll_interval);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    match read_memory().await {
                        Some(reading) => self.report(&reading),
                        None => debug!("Failed to sample {}", MEMINFO_PATH),
                    }
                }
                _ = shutdown.cancelled() => {
                    debug!("RAM monitor stopped");
                    break;
                }
            }
        }
    }

    fn report(&self, reading: &MemoryReading) {
        let percent = reading.used_percent();
        if percent > self.config.max_ram_percent {
            warn!(
                "RAM usage {:.1}% is above the {:.0}% ceiling",
                percent, self.config.max_ram_percent
            );
        } else {
            info!("RAM usage {:.1}%", percent);
        }
    }
}
