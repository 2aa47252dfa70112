//! The name-resolution facade: cache check, fetch, resolve, write-through.

use crate::error::{Error, Result};
use crate::resolver::Resolver;
use devicename_cache::{CachePolicy, CacheStore, FilePreferences, PreferenceStore};
use devicename_platform::{IdentifierProvider, default_provider};
use std::sync::{Arc, Weak};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

/// Epoch seconds from the system clock; before-epoch clocks read as zero.
fn epoch_seconds() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0.0, |elapsed| elapsed.as_secs_f64())
}

/// Orchestrates identifier resolution and caching for the running device.
///
/// Every call runs the same per-call machine: check the cache under the
/// configured policy, and on a miss fetch the mapping document, resolve,
/// write through and return. Concurrent callers are not deduplicated; a
/// racing miss costs a redundant fetch and the last cache writer wins.
pub struct NameService {
    policy: CachePolicy,
    resolver: Resolver,
    cache: CacheStore,
}

impl NameService {
    /// Service for the compiled platform, persisting through the user's
    /// preference file.
    ///
    /// Fails when the compiled target has no identifier provider or the
    /// preference file location cannot be prepared. Both are configuration
    /// errors; nothing after construction is fatal.
    pub fn new(policy: CachePolicy) -> Result<Arc<Self>> {
        let provider = default_provider()?;
        let prefs = FilePreferences::open_default()?;
        Ok(Self::with_parts(policy, provider, Arc::new(prefs)))
    }

    /// Service over an explicit provider and preference store.
    #[must_use]
    pub fn with_parts(
        policy: CachePolicy,
        provider: Box<dyn IdentifierProvider>,
        prefs: Arc<dyn PreferenceStore>,
    ) -> Arc<Self> {
        Arc::new(Self {
            policy,
            resolver: Resolver::new(provider),
            cache: CacheStore::new(prefs),
        })
    }

    /// Commercial name for the running device.
    ///
    /// A cache hit within the policy window returns the stored name with no
    /// network traffic. On a miss the mapping document is fetched, the name
    /// resolved and written through. The write also happens under
    /// [`CachePolicy::NoCache`], whose validity check simply never reads
    /// the value back.
    ///
    /// On fetch or decode failure returns [`Error::Resolution`] carrying
    /// the raw identifier captured before the attempt.
    pub async fn get_name(&self) -> Result<String> {
        let now = epoch_seconds();
        if self.cache.is_valid(self.policy, now)
            && let Some(cached) = self.cache.read()
        {
            debug!(name = %cached.name, "resolved from cache");
            return Ok(cached.name);
        }

        let identifier = self.resolver.current_identifier();
        match self.refresh(now).await {
            Ok(name) => Ok(name),
            Err(source) => Err(Error::Resolution {
                identifier,
                source: Box::new(source),
            }),
        }
    }

    /// Like [`get_name`](Self::get_name) but never fails: resolution
    /// trouble is logged and the raw identifier returned instead.
    pub async fn get_name_or_fallback(&self) -> String {
        match self.get_name().await {
            Ok(name) => name,
            Err(Error::Resolution { identifier, source }) => {
                warn!(%identifier, err = %source, "resolution failed, falling back to raw identifier");
                identifier
            }
            Err(err) => {
                warn!(%err, "resolution failed before an identifier was captured");
                self.resolver.current_identifier()
            }
        }
    }

    /// Best-effort cache warm, intended to run once at process start so
    /// later calls hit the cache.
    ///
    /// No-op when caching is disabled or the stored name is still valid.
    /// The work runs on a detached task holding only a [`Weak`] reference:
    /// dropping the service turns pending work into a no-op. Failures are
    /// logged, never surfaced; the only observable outcome is the cache.
    ///
    /// # Panics
    ///
    /// Must be called within a tokio runtime.
    pub fn preload(self: &Arc<Self>) {
        if self.policy == CachePolicy::NoCache || self.cache.is_valid(self.policy, epoch_seconds())
        {
            return;
        }

        let service: Weak<Self> = Arc::downgrade(self);
        tokio::spawn(async move {
            let Some(service) = service.upgrade() else {
                return;
            };
            if let Err(err) = service.refresh(epoch_seconds()).await {
                warn!(%err, "preload fetch failed, cache left unchanged");
            }
        });
    }

    /// Last written name, if any, regardless of policy validity.
    ///
    /// Deliberately skips the expiry check [`get_name`](Self::get_name)
    /// applies, so a value the active policy already considers stale is
    /// still returned. Synchronous, no I/O beyond the preference read.
    #[must_use]
    pub fn cached_name_if_any(&self) -> Option<String> {
        self.cache.cached_name()
    }

    /// The MISS branch: fetch the table, resolve, write through.
    async fn refresh(&self, now: f64) -> Result<String> {
        self.resolver.load_mapping_table().await?;
        let name = self.resolver.resolve_name();
        self.cache.write(&name, now);
        Ok(name)
    }
}
