/// How long a toast stays on screen, in milliseconds.
pub const TOAST_DURATION_MS: u32 = 3000;

/// Toast background for validation failures.
pub const ERROR_TOAST_BACKGROUND: &str = "rgba(211, 47, 47, 0.92)";

/// Toast background for confirmations.
pub const SUCCESS_TOAST_BACKGROUND: &str = "rgba(46, 125, 50, 0.92)";

/// Most verbose `log` level forwarded to the browser console.
pub const MAX_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Debug;
