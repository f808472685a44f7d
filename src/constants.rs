//! Application-wide constants
//!
//! Single source of truth for string literals and bounds used across
//! the client.

/// Configuration file location
pub mod config {
    /// Directory under the platform config dir
    pub const APP_DIR: &str = "hrms-lite";

    /// Config file name inside the app dir
    pub const FILENAME: &str = "config.toml";
}

/// HTTP API routes, relative to the configured base URL
pub mod api {
    /// Base URL used when neither config file, env var, nor CLI override it
    pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

    /// Employee collection route
    pub const EMPLOYEES_PATH: &str = "/api/employees";

    /// Attendance collection route
    pub const ATTENDANCE_PATH: &str = "/api/attendance";

    /// Env var overriding the configured base URL
    pub const BASE_URL_ENV: &str = "HRMS_API_URL";
}

/// Config validation bounds
pub mod validation {
    /// Smallest usable window edge in points
    pub const MIN_WINDOW_DIMENSION: u16 = 400;

    /// Largest accepted window edge in points
    pub const MAX_WINDOW_DIMENSION: u16 = 4096;
}
