//! Store configuration and the JSON file backend.
//!
//! One [`JsonStore`] owns a data directory holding `sessions.json`,
//! `analytics.json`, `saved_states.json`, a metadata file with the
//! identifier counter, and one text file per shared assembly snippet.
//! Files are created with empty defaults the first time a store opens the
//! directory.

use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::StoreError;

pub(crate) const SESSIONS_FILE: &str = "sessions.json";
pub(crate) const ANALYTICS_FILE: &str = "analytics.json";
pub(crate) const SAVED_STATES_FILE: &str = "saved_states.json";
const META_FILE: &str = "store_meta.json";

/// Immutable configuration for a [`JsonStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding every store file; created on first use.
    pub data_dir: PathBuf,
    /// Base URL prefixed to generated share links.
    pub base_url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            base_url: "http://localhost:3000".to_owned(),
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct StoreMeta {
    id_counter: u64,
}

/// The JSON file backend shared by every record kind.
#[derive(Debug, Clone)]
pub struct JsonStore {
    config: StoreConfig,
}

impl JsonStore {
    /// Opens (and if necessary initializes) the data directory.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] when the directory or a default file cannot be
    /// created.
    pub fn open(config: StoreConfig) -> Result<Self, StoreError> {
        fs::create_dir_all(&config.data_dir)?;
        let store = Self { config };
        store.init_file(SESSIONS_FILE, "{}")?;
        store.init_file(SAVED_STATES_FILE, "{}")?;
        store.init_file(
            ANALYTICS_FILE,
            r#"{"totalVisits":0,"toolUsage":{},"conversions":[]}"#,
        )?;
        store.init_file(META_FILE, r#"{"id_counter":0}"#)?;
        Ok(store)
    }

    /// The store configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Absolute path of a file inside the data directory.
    #[must_use]
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.config.data_dir.join(name)
    }

    /// Builds a share URL under the configured base.
    #[must_use]
    pub fn share_url(&self, route: &str, id: &str) -> String {
        format!("{}/api/{route}/{id}", self.config.base_url)
    }

    fn init_file(&self, name: &str, default_content: &str) -> Result<(), StoreError> {
        let path = self.file_path(name);
        if !path.exists() {
            fs::write(&path, default_content)?;
        }
        Ok(())
    }

    pub(crate) fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<T, StoreError> {
        let data = fs::read_to_string(self.file_path(name))?;
        Ok(serde_json::from_str(&data)?)
    }

    pub(crate) fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(value)?;
        fs::write(self.file_path(name), data)?;
        Ok(())
    }

    /// Issues the next 32-hex-digit record identifier.
    ///
    /// Identifiers derive from a persisted counter, so they are unique per
    /// store and reproducible for tests.
    pub(crate) fn next_id(&self) -> Result<String, StoreError> {
        let mut meta: StoreMeta = self.read_json(META_FILE)?;
        meta.id_counter += 1;
        self.write_json(META_FILE, &meta)?;
        Ok(derive_id(meta.id_counter))
    }
}

fn derive_id(counter: u64) -> String {
    let mut front = DefaultHasher::new();
    ("bitlab-store-id", counter).hash(&mut front);
    let mut back = DefaultHasher::new();
    (counter, front.finish()).hash(&mut back);
    format!("{:016x}{:016x}", front.finish(), back.finish())
}

/// Current wall-clock time as UNIX seconds (0 if the clock is before the
/// epoch).
#[must_use]
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}

/// True when `id` looks like a store-issued identifier (32 hex digits).
/// Used to keep identifiers path-safe before touching the filesystem.
#[must_use]
pub fn is_valid_id(id: &str) -> bool {
    id.len() == 32 && id.bytes().all(|b| b.is_ascii_hexdigit())
}
