//! Server state and configuration.

use crate::{display::DisplayConfig, worker::WorkerHandle};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Path to the display's serial device (e.g., "/dev/ttyACM0")
    pub device_path: String,
    /// Serial baud rate
    pub baud: u32,
    /// Address to listen on (e.g., "0.0.0.0:12000")
    pub listen_addr: String,
    /// Attached panel geometry
    pub display: DisplayConfig,
}

/// Application state shared across handlers.
pub struct AppState {
    /// Sender to the thread that owns the display.
    pub display: WorkerHandle,
}

impl AppState {
    pub fn new(display: WorkerHandle) -> Self {
        Self { display }
    }
}
