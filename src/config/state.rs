// Application state module
// Shared state handed to every request handler.

use chrono::FixedOffset;
use serde_json::Value;
use tokio::sync::Mutex;

use super::types::Config;
use crate::model::{Achievements, Catalog};
use crate::store::{DocumentStore, JsonFileStore};

/// Application state: the injected document stores plus the few config
/// values handlers read per request.
pub struct AppState {
    pub catalog: Box<dyn DocumentStore<Catalog>>,
    pub achievements: Box<dyn DocumentStore<Achievements>>,
    pub leaked: Box<dyn DocumentStore<Value>>,
    /// Serializes every read-modify-write cycle across both mutable
    /// documents, so concurrent solves cannot lose a counter bump.
    pub write_lock: Mutex<()>,
    pub access_log: bool,
    pub utc_offset: FixedOffset,
}

impl AppState {
    /// Build state backed by the configured JSON files.
    pub fn new(config: &Config) -> Result<Self, String> {
        let utc_offset = config.time.fixed_offset().ok_or_else(|| {
            format!(
                "utc_offset_hours out of range: {}",
                config.time.utc_offset_hours
            )
        })?;

        Ok(Self {
            catalog: Box::new(JsonFileStore::new(config.data.quiz_path())),
            achievements: Box::new(JsonFileStore::new(config.data.achievements_path())),
            leaked: Box::new(JsonFileStore::new(config.data.leaked_path())),
            write_lock: Mutex::new(()),
            access_log: config.logging.access_log,
            utc_offset,
        })
    }

    /// State backed by in-memory stores, for handler tests.
    #[cfg(test)]
    pub fn for_tests(catalog: Catalog, achievements: Achievements, leaked: Value) -> Self {
        use crate::store::MemoryStore;

        Self {
            catalog: Box::new(MemoryStore::new(catalog)),
            achievements: Box::new(MemoryStore::new(achievements)),
            leaked: Box::new(MemoryStore::new(leaked)),
            write_lock: Mutex::new(()),
            access_log: false,
            utc_offset: FixedOffset::east_opt(3600).expect("+1h is a valid offset"),
        }
    }
}
