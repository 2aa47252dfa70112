//! The identifier-provider capability and its per-family variants.

use crate::error::Result;
use crate::family::Family;

/// Access to the running device's hardware identifier.
///
/// One implementation exists per platform family. Identifier retrieval has
/// no failure path: if the OS query yields nothing usable, the empty string
/// is returned and becomes the final fallback name downstream.
pub trait IdentifierProvider: Send + Sync {
    /// Platform family this provider serves.
    fn family(&self) -> Family;

    /// URL of the mapping document for this provider's family.
    fn mapping_url(&self) -> String {
        self.family().mapping_url()
    }

    /// Live hardware identifier, read fresh on every call.
    fn current_identifier(&self) -> String;
}

/// Phone/tablet-class provider; identifier from the system descriptor.
#[cfg(target_os = "ios")]
#[derive(Debug, Default)]
pub struct IosProvider;

#[cfg(target_os = "ios")]
impl IdentifierProvider for IosProvider {
    fn family(&self) -> Family {
        Family::Ios
    }

    fn current_identifier(&self) -> String {
        crate::sys::uname_machine()
    }
}

/// Wearable-class provider; identifier from the system descriptor.
#[cfg(target_os = "watchos")]
#[derive(Debug, Default)]
pub struct WatchosProvider;

#[cfg(target_os = "watchos")]
impl IdentifierProvider for WatchosProvider {
    fn family(&self) -> Family {
        Family::Watchos
    }

    fn current_identifier(&self) -> String {
        crate::sys::uname_machine()
    }
}

/// Desktop-class provider; identifier from the `hw.model` system property.
#[cfg(target_os = "macos")]
#[derive(Debug, Default)]
pub struct MacosProvider;

#[cfg(target_os = "macos")]
impl IdentifierProvider for MacosProvider {
    fn family(&self) -> Family {
        Family::Macos
    }

    fn current_identifier(&self) -> String {
        crate::sys::sysctl_str(b"hw.model\0")
    }
}

/// Living-room-class provider; identifier from the system descriptor.
#[cfg(target_os = "tvos")]
#[derive(Debug, Default)]
pub struct TvosProvider;

#[cfg(target_os = "tvos")]
impl IdentifierProvider for TvosProvider {
    fn family(&self) -> Family {
        Family::Tvos
    }

    fn current_identifier(&self) -> String {
        crate::sys::uname_machine()
    }
}

/// Head-worn-class provider; identifier from the system descriptor.
#[cfg(target_os = "visionos")]
#[derive(Debug, Default)]
pub struct VisionosProvider;

#[cfg(target_os = "visionos")]
impl IdentifierProvider for VisionosProvider {
    fn family(&self) -> Family {
        Family::Visionos
    }

    fn current_identifier(&self) -> String {
        crate::sys::uname_machine()
    }
}

/// Select the provider variant for the compiled target.
///
/// Selection happens once at service construction. A target outside the
/// supported families is a configuration error with no valid fallback.
pub fn default_provider() -> Result<Box<dyn IdentifierProvider>> {
    #[cfg(target_os = "ios")]
    return Ok(Box::new(IosProvider));

    #[cfg(target_os = "watchos")]
    return Ok(Box::new(WatchosProvider));

    #[cfg(target_os = "macos")]
    return Ok(Box::new(MacosProvider));

    #[cfg(target_os = "tvos")]
    return Ok(Box::new(TvosProvider));

    #[cfg(target_os = "visionos")]
    return Ok(Box::new(VisionosProvider));

    #[cfg(not(any(
        target_os = "ios",
        target_os = "watchos",
        target_os = "macos",
        target_os = "tvos",
        target_os = "visionos"
    )))]
    Err(crate::error::Error::UnsupportedPlatform {
        os: std::env::consts::OS.to_owned(),
    })
}
