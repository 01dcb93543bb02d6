// Configuration types module
// Defines the deserialized shape of config.toml plus defaults.

use std::path::PathBuf;

use chrono::FixedOffset;
use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub data: DataConfig,
    pub time: TimeConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tokio worker threads; defaults to the CPU count when unset.
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

/// Location of the persisted JSON documents. The files are provisioned
/// out-of-band; the server only reads and overwrites them.
#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub dir: String,
    pub quiz_file: String,
    pub achievements_file: String,
    pub leaked_file: String,
}

impl DataConfig {
    pub fn quiz_path(&self) -> PathBuf {
        PathBuf::from(&self.dir).join(&self.quiz_file)
    }

    pub fn achievements_path(&self) -> PathBuf {
        PathBuf::from(&self.dir).join(&self.achievements_file)
    }

    pub fn leaked_path(&self) -> PathBuf {
        PathBuf::from(&self.dir).join(&self.leaked_file)
    }
}

/// Fixed UTC offset for the date endpoint. The default of +1 matches
/// the client's Africa/Algiers zone, which observes no DST.
#[derive(Debug, Deserialize, Clone)]
pub struct TimeConfig {
    pub utc_offset_hours: i32,
}

impl TimeConfig {
    /// None when the configured offset is outside -23..=23 hours.
    pub fn fixed_offset(&self) -> Option<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_hours.checked_mul(3600)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_paths_join_dir_and_file() {
        let data = DataConfig {
            dir: "data".to_string(),
            quiz_file: "quiz.json".to_string(),
            achievements_file: "achievements.json".to_string(),
            leaked_file: "leaked.json".to_string(),
        };
        assert_eq!(data.quiz_path(), PathBuf::from("data/quiz.json"));
        assert_eq!(
            data.achievements_path(),
            PathBuf::from("data/achievements.json")
        );
        assert_eq!(data.leaked_path(), PathBuf::from("data/leaked.json"));
    }

    #[test]
    fn test_fixed_offset_range() {
        assert!(TimeConfig { utc_offset_hours: 1 }.fixed_offset().is_some());
        assert!(TimeConfig { utc_offset_hours: -23 }.fixed_offset().is_some());
        assert!(TimeConfig { utc_offset_hours: 24 }.fixed_offset().is_none());
    }
}
