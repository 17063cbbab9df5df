//! Runtime settings shared by the timeline and the front end

use crate::interpreter::constants::*;
use std::time::Duration;

/// Resolved timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Quiet period before the diagnostics pass
    pub debounce: Duration,
    /// Autoplay interval, one statement per tick
    pub play_interval: Duration,
    /// Window in which identical diagnostics are shown once
    pub coalesce_window: Duration,
    /// How long a notification stays visible
    pub notification_lifetime: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            play_interval: Duration::from_millis(DEFAULT_PLAY_INTERVAL_MS),
            coalesce_window: Duration::from_millis(DEFAULT_COALESCE_WINDOW_MS),
            notification_lifetime: Duration::from_millis(DEFAULT_NOTIFICATION_LIFETIME_MS),
        }
    }
}
