// Configuration module entry point
// Layered configuration plus the shared application state.

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, DataConfig, LoggingConfig, ServerConfig, TimeConfig};

impl Config {
    /// Load configuration from the default "config.toml" location.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension).
    /// Layering: defaults, then the optional file, then `QUIZ_API_*`
    /// environment variables, then the bare `PORT` variable (the
    /// original deployment's one documented knob).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("logging.access_log", true)?
            .set_default("data.dir", "data")?
            .set_default("data.quiz_file", "quiz.json")?
            .set_default("data.achievements_file", "achievements.json")?
            .set_default("data.leaked_file", "leaked.json")?
            .set_default("time.utc_offset_hours", 1)?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("QUIZ_API")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut cfg: Self = settings.try_deserialize()?;

        if let Ok(port) = std::env::var("PORT") {
            cfg.server.port = port.parse().map_err(|_| {
                config::ConfigError::Message(format!("invalid PORT value: {port}"))
            })?;
        }

        if cfg.time.fixed_offset().is_none() {
            return Err(config::ConfigError::Message(format!(
                "time.utc_offset_hours must be within -23..=23, got {}",
                cfg.time.utc_offset_hours
            )));
        }

        Ok(cfg)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        // A name no file in the working directory matches.
        let cfg = Config::load_from("no-such-config-file").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.data.dir, "data");
        assert_eq!(cfg.time.utc_offset_hours, 1);
    }

    #[test]
    fn test_socket_addr_assembly() {
        let mut cfg = Config::load_from("no-such-config-file").unwrap();
        cfg.server.host = "0.0.0.0".to_string();
        cfg.server.port = 8080;
        assert_eq!(cfg.socket_addr().unwrap().to_string(), "0.0.0.0:8080");

        cfg.server.host = "not an address".to_string();
        assert!(cfg.socket_addr().is_err());
    }
}
