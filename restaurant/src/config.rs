//! Configuration loaded from the environment
//!
//! `.env` is read by [`crate::setup_environment`] before this runs.

use std::path::PathBuf;

/// Restaurant configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Directory for daily rolling log files; stdout when unset
    pub log_dir: Option<String>,
    /// Where to export the menu as CSV after start-up
    pub export_path: Option<PathBuf>,
    /// CSV menu to load instead of the example dishes
    pub import_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            export_path: std::env::var("MENU_EXPORT_PATH")
                .ok()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            import_path: std::env::var("MENU_IMPORT_PATH")
                .ok()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
