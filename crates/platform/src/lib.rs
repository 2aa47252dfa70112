//! Platform-family identifier providers for devicename.
//!
//! Each supported platform family exposes one [`IdentifierProvider`]: it
//! knows where that family's remote mapping document lives and how to read
//! the live hardware identifier (e.g. `iPhone17,4`) from the running system.
//!
//! [`default_provider`] selects the variant matching the compiled target.
//! There is no fallback for other targets; selection failure is a
//! construction-time error, not something resolution can recover from later.

mod error;
mod family;
mod provider;
#[cfg(unix)]
mod sys;

pub use error::{Error, Result};
pub use family::Family;
pub use provider::{IdentifierProvider, default_provider};

#[cfg(target_os = "ios")]
pub use provider::IosProvider;
#[cfg(target_os = "macos")]
pub use provider::MacosProvider;
#[cfg(target_os = "tvos")]
pub use provider::TvosProvider;
#[cfg(target_os = "visionos")]
pub use provider::VisionosProvider;
#[cfg(target_os = "watchos")]
pub use provider::WatchosProvider;
