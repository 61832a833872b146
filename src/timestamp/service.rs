//! Reads a clock and renders the reading with millisecond precision.

use chrono::{DateTime, Local, Utc};

use crate::common::config::{FormatterCfg, ZonePolicy};
use crate::common::time::{Clock, SystemClock};
use crate::timestamp::domain::{FormattedTimestamp, SECONDS_FORMAT};

/// Stateless formatter over an injected clock.
///
/// Holds only immutable data, so one instance can be shared across threads;
/// every call builds its output in a fresh buffer.
#[derive(Clone, Debug, Default)]
pub struct TimestampFormatter<C = SystemClock> {
    clock: C,
    zone: ZonePolicy,
}

impl TimestampFormatter<SystemClock> {
    /// System wall clock rendered in the process local zone.
    pub fn system() -> Self {
        Self::new(SystemClock, ZonePolicy::Local)
    }
}

impl<C: Clock> TimestampFormatter<C> {
    pub fn new(clock: C, zone: ZonePolicy) -> Self {
        Self { clock, zone }
    }

    pub fn from_cfg(clock: C, cfg: &FormatterCfg) -> Self {
        Self::new(clock, cfg.zone)
    }

    pub fn zone(&self) -> ZonePolicy {
        self.zone
    }

    /// Current time as `YYYY-MM-DD HH:MM:SS.mmm`.
    pub fn now_with_milliseconds(&self) -> FormattedTimestamp {
        self.render(self.clock.now())
    }

    /// Render an explicit reading in the configured zone.
    ///
    /// Milliseconds are truncated from the microsecond component, never
    /// rounded, so the field stays within `000..=999`.
    pub fn render(&self, at: DateTime<Utc>) -> FormattedTimestamp {
        // Leap-second readings carry a sub-second part past one second.
        let millis = (at.timestamp_subsec_micros() / 1_000).min(999);

        let text = match self.zone {
            ZonePolicy::Local => format!(
                "{}.{millis:03}",
                at.with_timezone(&Local).format(SECONDS_FORMAT)
            ),
            ZonePolicy::Utc => format!("{}.{millis:03}", at.format(SECONDS_FORMAT)),
            ZonePolicy::Fixed(offset) => format!(
                "{}.{millis:03}",
                at.with_timezone(&offset).format(SECONDS_FORMAT)
            ),
        };

        FormattedTimestamp::new(text)
    }
}

/// Current local time from the system clock.
pub fn now_msec() -> FormattedTimestamp {
    TimestampFormatter::system().now_with_milliseconds()
}
