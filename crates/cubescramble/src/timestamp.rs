use std::fmt;

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::Serialize;

/// Time at which scramble parameters were created, with millisecond
/// precision.
///
/// The RFC 3339 text of the timestamp is hashed into the scramble seed, so
/// sub-millisecond precision is discarded up front to keep the displayed and
/// hashed values identical.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl Timestamp {
    /// Reads the system clock.
    pub fn now() -> Self {
        Self(Utc::now().trunc_subsecs(3))
    }

    /// Fixed time used by seeded parameters.
    pub fn epoch() -> Self {
        Self(DateTime::UNIX_EPOCH)
    }

    /// Returns the underlying UTC time.
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}
