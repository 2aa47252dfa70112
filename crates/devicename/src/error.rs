//! Error types for name resolution.

use miette::Diagnostic;
use thiserror::Error;

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for resolution operations.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// Network or HTTP failure while fetching the mapping document.
    #[error("fetching mapping document failed: {url}")]
    #[diagnostic(
        code(devicename::fetch::transport),
        help("check network reachability; the mapping host may be temporarily unavailable")
    )]
    Transport {
        /// URL of the attempted fetch.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// Response body was not a flat identifier→name JSON object.
    #[error("mapping document is not a flat string-to-string object: {url}")]
    #[diagnostic(
        code(devicename::fetch::decode),
        help("the hosted document must be a single JSON object of string keys and string values")
    )]
    Decode {
        /// URL of the decoded document.
        url: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// Strict resolution failed.
    ///
    /// Carries the raw identifier captured before the failing fetch, so the
    /// caller can still display something meaningful.
    #[error("could not resolve a commercial name for {identifier}")]
    #[diagnostic(
        code(devicename::resolution),
        help("the raw identifier is still usable as a display name")
    )]
    Resolution {
        /// Raw device identifier captured before the fetch attempt.
        identifier: String,
        /// The underlying transport or decode failure.
        #[source]
        source: Box<Error>,
    },

    /// No identifier provider exists for the compiled platform.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Platform(#[from] devicename_platform::Error),

    /// The default preference store could not be prepared.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Cache(#[from] devicename_cache::Error),
}
