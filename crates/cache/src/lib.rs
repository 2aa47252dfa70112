//! Policy-driven local caching of the resolved device name.
//!
//! This crate owns the two persisted scalars of the resolution pipeline
//! (the last resolved commercial name and the epoch timestamp of the fetch
//! that produced it) plus the validity rule deciding when a stored name may
//! be reused instead of refetched.
//!
//! Storage goes through the [`PreferenceStore`] capability so embedders and
//! tests can substitute an in-memory store ([`MemoryPreferences`]) for the
//! JSON preference file ([`FilePreferences`]) used by default.

mod error;
mod policy;
mod store;

// Re-export error types at crate root
pub use error::{Error, Result};

// Re-export main types
pub use policy::CachePolicy;
pub use store::{
    CacheStore, CachedResolution, FilePreferences, LAST_FETCH_KEY, MemoryPreferences, NAME_KEY,
    PreferenceStore,
};
