// Wall clock access and fixed-offset time rendering

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Widest real-world UTC offset, either direction
const MAX_OFFSET_MINUTES: u32 = 18 * 60;

/// Named fixed UTC offset used to render timestamps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeZoneConfig {
    #[serde(default = "default_zone_name")]
    pub name: String,

    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
}

fn default_zone_name() -> String {
    "Asia/Tokyo".to_string()
}

fn default_utc_offset_minutes() -> i32 {
    9 * 60
}

impl Default for TimeZoneConfig {
    fn default() -> Self {
        Self {
            name: default_zone_name(),
            utc_offset_minutes: default_utc_offset_minutes(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("UTC offset of {0} minutes is out of range")]
pub struct InvalidOffset(pub i32);

impl TimeZoneConfig {
    /// Resolve to a chrono offset
    pub fn offset(&self) -> Result<FixedOffset, InvalidOffset> {
        if self.utc_offset_minutes.unsigned_abs() > MAX_OFFSET_MINUTES {
            return Err(InvalidOffset(self.utc_offset_minutes));
        }
        FixedOffset::east_opt(self.utc_offset_minutes * 60)
            .ok_or(InvalidOffset(self.utc_offset_minutes))
    }
}

/// Render an instant as `Y/M/D H:MM:SS` in the given offset.
///
/// Month, day and hour are not zero-padded: `2024/1/5 9:03:07`.
pub fn format_local_time(instant: DateTime<Utc>, offset: FixedOffset) -> String {
    instant
        .with_timezone(&offset)
        .format("%Y/%-m/%-d %-H:%M:%S")
        .to_string()
}
