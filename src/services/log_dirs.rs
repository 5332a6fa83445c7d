//! Log file locations
//!
//! Logs go to `$XDG_STATE_HOME/settings-kit/logs/` (typically
//! `~/.local/state/settings-kit/logs/`), one file per process.

use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "settings-kit";

/// Directory for log files, created if missing.
///
/// Falls back to the system temp directory when the state directory
/// cannot be determined or created.
pub fn log_dir() -> PathBuf {
    let state_home = std::env::var("XDG_STATE_HOME").ok();
    let home = std::env::var("HOME").ok();
    let fallback = std::env::temp_dir().join("settings-kit-logs");

    let dir = resolve_log_dir(state_home.as_deref(), home.as_deref())
        .unwrap_or_else(|| fallback.clone());
    if let Err(e) = fs::create_dir_all(&dir) {
        tracing::warn!("Failed to create log directory {:?}: {}", dir, e);
        return fallback;
    }
    dir
}

/// Relative `XDG_STATE_HOME` values are ignored
fn resolve_log_dir(state_home: Option<&str>, home: Option<&str>) -> Option<PathBuf> {
    if let Some(state_home) = state_home.map(Path::new).filter(|p| p.is_absolute()) {
        return Some(state_home.join(APP_DIR).join("logs"));
    }
    home.map(|home| {
        Path::new(home)
            .join(".local")
            .join("state")
            .join(APP_DIR)
            .join("logs")
    })
}

/// Path of the log file for this process.
///
/// Returns `{log_dir}/settings-demo-{PID}.log`
pub fn main_log_path() -> PathBuf {
    log_dir().join(format!("settings-demo-{}.log", std::process::id()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_home_wins() {
        assert_eq!(
            resolve_log_dir(Some("/state"), Some("/home/u")),
            Some(PathBuf::from("/state/settings-kit/logs"))
        );
    }

    #[test]
    fn test_relative_state_home_falls_back_to_home() {
        assert_eq!(
            resolve_log_dir(Some("state"), Some("/home/u")),
            Some(PathBuf::from("/home/u/.local/state/settings-kit/logs"))
        );
        assert_eq!(resolve_log_dir(None, None), None);
    }
}
