//! Error types for the cache crate.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for cache-store construction.
///
/// Reads and writes past construction are infallible by contract; the file
/// implementation logs and drops I/O trouble instead of surfacing it.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// No user preference directory could be located.
    #[error("no preference directory available on this platform")]
    #[diagnostic(
        code(devicename::cache::no_preference_dir),
        help("pass an explicit path to FilePreferences::open instead")
    )]
    NoPreferenceDir,

    /// I/O failure while preparing the preference file location.
    #[error("preference file I/O failed: {}", path.display())]
    #[diagnostic(code(devicename::cache::io))]
    Io {
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
        /// Path that caused the error.
        path: PathBuf,
    },
}
