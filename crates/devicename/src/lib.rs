//! Commercial device names from raw hardware identifiers.
//!
//! Platforms report hardware as an opaque model code (`iPhone17,4`); people
//! expect the marketed product name (`iPhone 15 Pro`). The mapping between
//! the two changes with every hardware release, so it lives in a remotely
//! hosted JSON document per platform family and is consumed here at
//! runtime. A resolved name is written through to a small local preference
//! store and reused under a configurable expiry policy.
//!
//! # Usage
//!
//! ```rust,ignore
//! use devicename::{CachePolicy, NameService};
//!
//! let service = NameService::new(CachePolicy::SevenDays)?;
//! service.preload(); // optional best-effort warm at startup
//!
//! // Strict: surfaces transport/decode failures.
//! let name = service.get_name().await?;
//!
//! // Forgiving: degrades to the raw identifier.
//! let name = service.get_name_or_fallback().await;
//! ```
//!
//! Resolution never invents data: an identifier missing from the mapping
//! document resolves to itself, and the fallback entry point returns the
//! raw identifier when the network is unavailable.

mod adapters;
mod error;
mod fetch;
mod resolver;
mod service;

// Re-export error types at crate root
pub use error::{Error, Result};

// Re-export main types
pub use fetch::{MappingFetcher, MappingTable};
pub use resolver::Resolver;
pub use service::NameService;

// Re-export the capability seams so embedders and tests can inject them
pub use devicename_cache::{
    CachePolicy, CacheStore, CachedResolution, FilePreferences, MemoryPreferences, PreferenceStore,
};
pub use devicename_platform::{Family, IdentifierProvider, default_provider};
