//! CLI configuration from environment variables.
//!
//! - `SPARKBOARD_LOG_LEVEL`: log level, defaults to the build-mode default.
//! - `SPARKBOARD_LOG_DIR`: absolute log directory, defaults to
//!   `<temp>/sparkboard-logs`.

use std::path::PathBuf;

pub const LOG_LEVEL_VAR: &str = "SPARKBOARD_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "SPARKBOARD_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let log_level = non_blank(LOG_LEVEL_VAR)
            .unwrap_or_else(|| sparkboard_core::default_log_level().to_string());
        let log_dir = non_blank(LOG_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join("sparkboard-logs"));

        Self { log_level, log_dir }
    }
}

#[cfg(test)]
mod tests {
    use super::{CliConfig, LOG_DIR_VAR, LOG_LEVEL_VAR};

    #[test]
    fn defaults_apply_when_unset_or_blank() {
        let config = CliConfig::from_lookup(|key| (key == LOG_LEVEL_VAR).then(|| "  ".to_string()));
        assert_eq!(config.log_level, sparkboard_core::default_log_level());
        assert!(config.log_dir.ends_with("sparkboard-logs"));
    }

    #[test]
    fn explicit_values_win() {
        let dir = tempfile::tempdir().unwrap();
        let dir_text = dir.path().to_str().unwrap().to_string();
        let config = CliConfig::from_lookup(|key| match key {
            LOG_LEVEL_VAR => Some("warn".to_string()),
            LOG_DIR_VAR => Some(dir_text.clone()),
            _ => None,
        });
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, dir.path());
    }
}
