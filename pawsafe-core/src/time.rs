//! Hour-of-day sources
//!
//! The estimator only cares about the local hour. Providers usually report
//! it; when they don't, callers fall back to one of these:
//! - Fixed hour (tests, "what if" screens)
//! - System clock shifted by a UTC offset (requires std)

/// Seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Seconds in an hour
pub const SECONDS_PER_HOUR: i64 = 3_600;

/// Source of the current local hour
pub trait HourSource {
    /// Current hour, 0-23
    fn current_hour(&self) -> u8;
}

/// Local hour for a Unix timestamp and a UTC offset, both in seconds
pub fn hour_from_unix(unix_seconds: i64, utc_offset_seconds: i32) -> u8 {
    let local = unix_seconds + i64::from(utc_offset_seconds);
    (local.rem_euclid(SECONDS_PER_DAY) / SECONDS_PER_HOUR) as u8
}

/// Fixed hour for testing
#[derive(Debug, Clone, Copy)]
pub struct FixedHour {
    hour: u8,
}

impl FixedHour {
    /// Hours past 23 wrap around the clock
    pub fn new(hour: u8) -> Self {
        Self { hour: hour % 24 }
    }

    /// Jump to an hour, wrapping past 23
    pub fn set(&mut self, hour: u8) {
        self.hour = hour % 24;
    }

    /// Move the clock forward
    pub fn advance(&mut self, hours: u8) {
        self.hour = ((u16::from(self.hour) + u16::from(hours)) % 24) as u8;
    }
}

impl HourSource for FixedHour {
    fn current_hour(&self) -> u8 {
        self.hour
    }
}

/// Wall clock with a fixed UTC offset (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    utc_offset_seconds: i32,
}

#[cfg(feature = "std")]
impl SystemClock {
    /// Clock for a zone `utc_offset_seconds` east of UTC
    pub fn new(utc_offset_seconds: i32) -> Self {
        Self { utc_offset_seconds }
    }
}

#[cfg(feature = "std")]
impl HourSource for SystemClock {
    fn current_hour(&self) -> u8 {
        use std::time::{SystemTime, UNIX_EPOCH};

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64;

        hour_from_unix(now, self.utc_offset_seconds)
    }
}
