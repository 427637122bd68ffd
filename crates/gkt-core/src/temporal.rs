//! # Build Timestamps
//!
//! Generated files carry a "Generated on" line. Wall-clock time makes the
//! output differ on every run, so the timestamp is a policy:
//!
//! 1. `--no-timestamp` omits it entirely.
//! 2. `SOURCE_DATE_EPOCH` (reproducible-builds.org convention) pins it.
//! 3. Otherwise the current UTC time is used.
//!
//! Rendered as `YYYY-MM-DD HH:MM:SS`, seconds precision, always UTC.

use chrono::{DateTime, Timelike, Utc};
use serde::Serialize;

use crate::error::TimestampError;

/// Environment variable consulted for a pinned build time.
pub const SOURCE_DATE_EPOCH_VAR: &str = "SOURCE_DATE_EPOCH";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A UTC instant truncated to whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BuildTimestamp(DateTime<Utc>);

impl BuildTimestamp {
    /// The current UTC time.
    pub fn now() -> Self {
        let now = Utc::now();
        Self(now.with_nanosecond(0).unwrap_or(now))
    }

    /// From seconds since the Unix epoch.
    pub fn from_epoch_seconds(secs: i64) -> Result<Self, TimestampError> {
        DateTime::from_timestamp(secs, 0)
            .map(Self)
            .ok_or(TimestampError::EpochOutOfRange(secs))
    }

    /// Parse a `SOURCE_DATE_EPOCH` value.
    pub fn parse_epoch(raw: &str) -> Result<Self, TimestampError> {
        let secs: i64 = raw
            .trim()
            .parse()
            .map_err(|_| TimestampError::InvalidEpoch(raw.to_string()))?;
        if secs < 0 {
            return Err(TimestampError::InvalidEpoch(raw.to_string()));
        }
        Self::from_epoch_seconds(secs)
    }

    /// `YYYY-MM-DD HH:MM:SS`.
    pub fn to_display(&self) -> String {
        self.0.format(DISPLAY_FORMAT).to_string()
    }
}

/// How the "Generated on" value is chosen for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampPolicy {
    /// No timestamp in the output.
    Omit,
    /// A fixed instant, from `SOURCE_DATE_EPOCH`.
    Pinned(BuildTimestamp),
    /// Read the clock when the context is built.
    WallClock,
}

impl TimestampPolicy {
    /// Resolve the policy from the `--no-timestamp` flag and the process
    /// environment.
    pub fn from_env(omit: bool) -> Result<Self, TimestampError> {
        let epoch = std::env::var(SOURCE_DATE_EPOCH_VAR).ok();
        Self::resolve(omit, epoch.as_deref())
    }

    /// Resolve the policy from an explicit `SOURCE_DATE_EPOCH` value.
    ///
    /// An empty variable counts as unset.
    pub fn resolve(omit: bool, source_date_epoch: Option<&str>) -> Result<Self, TimestampError> {
        if omit {
            return Ok(Self::Omit);
        }
        match source_date_epoch.filter(|v| !v.trim().is_empty()) {
            Some(raw) => Ok(Self::Pinned(BuildTimestamp::parse_epoch(raw)?)),
            None => Ok(Self::WallClock),
        }
    }

    /// The value templates see, or `None` when omitted.
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Omit => None,
            Self::Pinned(ts) => Some(ts.to_display()),
            Self::WallClock => Some(BuildTimestamp::now().to_display()),
        }
    }
}
