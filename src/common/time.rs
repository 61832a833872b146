//! Clock abstraction so formatting can run against a fixed reading.

use chrono::{DateTime, Utc};

use crate::common::error::{NowMsecError, NowMsecResult};

/// Latest reading accepted by [`FixedClock`], `9999-12-30T23:59:59Z`.
///
/// One day short of the end of year 9999 so no zone offset can push the
/// rendered year to five digits.
pub const MAX_UNIX_SECS: i64 = 253_402_214_399;

/// Source of wall-clock readings with at least microsecond resolution.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the operating system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that always returns the same reading.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<Utc>,
}

impl FixedClock {
    /// Reading `secs` seconds plus `micros` microseconds after the epoch.
    pub fn from_unix(secs: i64, micros: u32) -> NowMsecResult<Self> {
        if micros >= 1_000_000 {
            return Err(NowMsecError::invalid(format!(
                "sub-second component {micros}us is not below one second"
            )));
        }
        if !(0..=MAX_UNIX_SECS).contains(&secs) {
            return Err(NowMsecError::invalid(format!(
                "reading {secs}s is outside the renderable range"
            )));
        }
        let at = DateTime::from_timestamp(secs, micros * 1_000)
            .ok_or_else(|| NowMsecError::invalid(format!("reading {secs}s is not representable")))?;
        Ok(Self { at })
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_keeps_microseconds() {
        let clock = FixedClock::from_unix(1_234_567, 891_234).unwrap();
        let at = clock.now();
        assert_eq!(at.timestamp(), 1_234_567);
        assert_eq!(at.timestamp_subsec_micros(), 891_234);
        assert_eq!(clock.now(), at);
    }

    #[test]
    fn fixed_clock_rejects_out_of_range() {
        assert!(FixedClock::from_unix(0, 1_000_000).is_err());
        assert!(FixedClock::from_unix(-1, 0).is_err());
        assert!(FixedClock::from_unix(MAX_UNIX_SECS + 1, 0).is_err());
        assert!(FixedClock::from_unix(MAX_UNIX_SECS, 999_999).is_ok());
    }

    #[test]
    fn system_clock_is_past_the_epoch() {
        // 2020-09-13, well before any machine running these tests.
        assert!(SystemClock.now().timestamp() > 1_600_000_000);
    }
}
