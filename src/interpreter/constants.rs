// Timing defaults for the replay engine and front end

/// Quiet period before the debounced diagnostics pass runs
pub const DEFAULT_DEBOUNCE_MS: u64 = 400;

/// Autoplay executes one statement per tick
pub const DEFAULT_PLAY_INTERVAL_MS: u64 = 1000;

/// Identical diagnostics inside this window are shown once
pub const DEFAULT_COALESCE_WINDOW_MS: u64 = 3000;

/// How long a notification stays on screen
pub const DEFAULT_NOTIFICATION_LIFETIME_MS: u64 = 4000;
