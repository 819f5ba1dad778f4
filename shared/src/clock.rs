use std::cell::Cell;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

/// Source of wall-clock time in milliseconds since the Unix epoch.
pub trait Clock {
    fn now_ms(&self) -> i64;

    /// RFC 3339 timestamp with millisecond precision, as written into
    /// `lastUpdated` and media dates.
    fn now_rfc3339(&self) -> String {
        format_rfc3339(self.now_ms())
    }

    /// `YYYY-MM-DD` of the current UTC day.
    fn today(&self) -> String {
        to_datetime(self.now_ms()).format("%Y-%m-%d").to_string()
    }
}

/// Reads the system clock (`Date.now()` on wasm through chrono's wasmbind).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualClock {
    now: Cell<i64>,
}

impl ManualClock {
    /// Start the clock at `now_ms`.
    pub fn at(now_ms: i64) -> Self {
        Self {
            now: Cell::new(now_ms),
        }
    }

    /// Move the clock forward by `delta_ms`.
    pub fn advance(&self, delta_ms: i64) {
        self.now.set(self.now.get().saturating_add(delta_ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> i64 {
        (**self).now_ms()
    }
}

fn to_datetime(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms).single().unwrap_or_default()
}

/// RFC 3339 stamp in UTC with millisecond precision.
pub fn format_rfc3339(ms: i64) -> String {
    to_datetime(ms).to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_formats_utc() {
        let clock = ManualClock::at(1_698_192_000_000);
        assert_eq!(clock.today(), "2023-10-25");
        assert_eq!(clock.now_rfc3339(), "2023-10-25T00:00:00.000Z");
        clock.advance(1_500);
        assert_eq!(clock.now_ms(), 1_698_192_001_500);
    }
}
