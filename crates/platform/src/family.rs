//! Platform families and their remote mapping documents.

use std::fmt;

/// Branch-addressed base URL of the hosted mapping documents.
const MAPPING_BASE_URL: &str =
    "https://raw.githubusercontent.com/devicename/devicename-db/main/db";

/// A platform family with its own identifier namespace and mapping document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Phone/tablet-class devices.
    Ios,
    /// Wearable-class devices.
    Watchos,
    /// Desktop-class devices.
    Macos,
    /// Living-room-class devices.
    Tvos,
    /// Head-worn-class devices.
    Visionos,
}

impl Family {
    /// Lowercase token used as the remote document filename stem.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Watchos => "watchos",
            Self::Macos => "macos",
            Self::Tvos => "tvos",
            Self::Visionos => "visionos",
        }
    }

    /// URL of this family's identifier→name mapping document.
    ///
    /// Pure function of the family: fixed base path plus `<family>.json`.
    #[must_use]
    pub fn mapping_url(self) -> String {
        format!("{MAPPING_BASE_URL}/{}.json", self.token())
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
