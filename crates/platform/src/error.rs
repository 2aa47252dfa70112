//! Error types for provider selection.

use miette::Diagnostic;
use thiserror::Error;

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for platform operations.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The compiled target has no identifier provider.
    #[error("no identifier provider for platform: {os}")]
    #[diagnostic(
        code(devicename::platform::unsupported),
        help("identifier providers exist for ios, watchos, macos, tvos and visionos targets")
    )]
    UnsupportedPlatform {
        /// Operating system name of the compiled target.
        os: String,
    },
}
