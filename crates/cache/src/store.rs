//! Preference-backed storage for the resolved name.

use crate::error::{Error, Result};
use crate::policy::CachePolicy;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

/// Preference key holding the last resolved commercial name.
pub const NAME_KEY: &str = "device_name_cache";

/// Preference key holding the epoch-seconds timestamp of the last
/// successful resolution write.
pub const LAST_FETCH_KEY: &str = "device_name_last_fetch";

/// Injected key/value storage capability.
///
/// Models the platform's local-preferences area: scalar values under fixed,
/// well-known keys. Reads and writes do not fail; implementations log
/// trouble and carry on, since readers tolerate staleness by design.
pub trait PreferenceStore: Send + Sync {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<Value>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: Value);
}

/// In-memory preference store for tests and embedders without persistence.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryPreferences {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: Value) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value);
    }
}

/// Preference store persisted as one small JSON object file.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    entries: Mutex<HashMap<String, Value>>,
}

impl FilePreferences {
    /// Open the store at the user's standard preference location.
    pub fn open_default() -> Result<Self> {
        let dir = dirs::preference_dir()
            .or_else(dirs::config_dir)
            .ok_or(Error::NoPreferenceDir)?;
        Self::open(dir.join("devicename").join("preferences.json"))
    }

    /// Open the store at an explicit file path, creating parent directories.
    ///
    /// An unreadable or corrupt file starts the store empty rather than
    /// failing; only preparing the location itself can error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                source,
                path: parent.to_path_buf(),
            })?;
        }
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn flush(&self, entries: &HashMap<String, Value>) {
        match serde_json::to_string_pretty(entries) {
            Ok(raw) => {
                if let Err(err) = fs::write(&self.path, raw) {
                    warn!(path = %self.path.display(), %err, "failed to persist preferences");
                }
            }
            Err(err) => warn!(%err, "failed to serialize preferences"),
        }
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: Value) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value);
        self.flush(&entries);
    }
}

/// A resolved name together with when it was fetched, in epoch seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedResolution {
    /// Last resolved commercial name.
    pub name: String,
    /// Time of the successful write, floating-point seconds since epoch.
    pub fetched_at: f64,
}

/// The two fixed preference entries plus the policy-driven validity check.
#[derive(Clone)]
pub struct CacheStore {
    prefs: Arc<dyn PreferenceStore>,
}

impl CacheStore {
    /// Cache over the given preference store.
    #[must_use]
    pub fn new(prefs: Arc<dyn PreferenceStore>) -> Self {
        Self { prefs }
    }

    /// Last written resolution, or `None` until both fields were written.
    #[must_use]
    pub fn read(&self) -> Option<CachedResolution> {
        let name = self.prefs.get(NAME_KEY)?;
        let name = name.as_str()?.to_owned();
        let fetched_at = self.prefs.get(LAST_FETCH_KEY)?.as_f64()?;
        Some(CachedResolution { name, fetched_at })
    }

    /// Overwrite both entries with a fresh resolution.
    ///
    /// Two sequential sets, not one atomic write: this store has a single
    /// owner and racing writers all carry the same derived value.
    pub fn write(&self, name: &str, now: f64) {
        debug!(%name, fetched_at = now, "writing resolved name through to preferences");
        self.prefs.set(NAME_KEY, Value::from(name));
        self.prefs.set(LAST_FETCH_KEY, Value::from(now));
    }

    /// Last written name regardless of timestamp or policy.
    #[must_use]
    pub fn cached_name(&self) -> Option<String> {
        self.prefs
            .get(NAME_KEY)
            .and_then(|value| value.as_str().map(str::to_owned))
    }

    /// Whether a stored name may still be reused under `policy` at `now`.
    ///
    /// A never-written timestamp reads as epoch zero, so every
    /// finite-duration policy reports invalid until the first write.
    /// [`CachePolicy::Forever`] is valid at any age, which means validity
    /// does not imply presence; pair with [`read`](Self::read).
    #[must_use]
    pub fn is_valid(&self, policy: CachePolicy, now: f64) -> bool {
        let Some(max_age) = policy.max_age_secs() else {
            return false;
        };
        let fetched_at = self
            .prefs
            .get(LAST_FETCH_KEY)
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        now - fetched_at < max_age
    }
}
