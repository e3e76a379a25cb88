//! Host resource watchdog

mod resource_monitor;

pub use resource_monitor::{MemoryReading, MonitorConfig, ResourceMonitor, parse_meminfo};
