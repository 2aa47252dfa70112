//! Cache expiry policies.

use serde::{Deserialize, Serialize};

const DAY_SECS: f64 = 86_400.0;

/// How long a resolved name may be reused before a refetch is required.
///
/// Selected once at service construction; there is no runtime
/// reconfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CachePolicy {
    /// Never reuse a stored name; every resolution refetches.
    NoCache,
    /// Reuse for one day.
    OneDay,
    /// Reuse for three days.
    ThreeDays,
    /// Reuse for seven days.
    SevenDays,
    /// Reuse for one month (30 days).
    OneMonth,
    /// A stored name never expires.
    Forever,
    /// Caller-supplied duration in seconds. Zero or negative durations make
    /// every stored name count as expired.
    Custom(i64),
}

impl CachePolicy {
    /// Maximum age in seconds a stored name may reach and still be reused.
    ///
    /// `None` means "always refetch"; [`CachePolicy::Forever`] maps to an
    /// unbounded age.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn max_age_secs(self) -> Option<f64> {
        match self {
            Self::NoCache => None,
            Self::OneDay => Some(DAY_SECS),
            Self::ThreeDays => Some(3.0 * DAY_SECS),
            Self::SevenDays => Some(7.0 * DAY_SECS),
            Self::OneMonth => Some(30.0 * DAY_SECS),
            Self::Forever => Some(f64::INFINITY),
            Self::Custom(secs) => Some(secs as f64),
        }
    }
}
