use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Candle aggregation interval.
///
/// The variants mirror the intervals the analysis pipeline consumes: levels
/// are detected on the finest interval and confirmed against the coarser ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1m")]
    M1,
    #[serde(rename = "5m")]
    M5,
    #[serde(rename = "15m")]
    M15,
    #[serde(rename = "1h")]
    H1,
}

impl Interval {
    #[must_use]
    pub fn secs(self) -> i64 {
        match self {
            Self::M1 => 60,
            Self::M5 => 300,
            Self::M15 => 900,
            Self::H1 => 3_600,
        }
    }

    #[must_use]
    pub fn duration(self) -> Duration {
        Duration::seconds(self.secs())
    }

    /// Conventional short label, identical to the serde form.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::M1 => "1m",
            Self::M5 => "5m",
            Self::M15 => "15m",
            Self::H1 => "1h",
        }
    }
}
