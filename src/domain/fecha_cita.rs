use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Appointment date-time, keeping the offset it was submitted with.
///
/// Both the wire and the `citas` table use the RFC 3339 text produced by `Display`:
/// `Z` for UTC, the submitted offset otherwise, and fractional seconds only when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FechaCita(DateTime<FixedOffset>);

impl FromStr for FechaCita {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err("Appointment date cannot be empty".into());
        }

        DateTime::parse_from_rfc3339(value)
            .map(Self)
            .map_err(|e| format!("Appointment date is not RFC 3339: {}", e))
    }
}

impl FechaCita {
    /// Whether this is the zero instant `0001-01-01T00:00:00Z`, whatever the offset
    pub fn is_zero(&self) -> bool {
        NaiveDate::from_ymd_opt(1, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map_or(false, |zero| self.0.naive_utc() == zero)
    }
}

impl From<DateTime<FixedOffset>> for FechaCita {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self(value)
    }
}

impl AsRef<DateTime<FixedOffset>> for FechaCita {
    fn as_ref(&self) -> &DateTime<FixedOffset> {
        &self.0
    }
}

impl fmt::Display for FechaCita {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl Serialize for FechaCita {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FechaCita {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
