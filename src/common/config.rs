//! Formatter configuration.
//!
//! The host ABI gives the function no configuration channel, so the UDF uses
//! `FormatterCfg::default()`. Library callers may build their own snapshot.

use std::str::FromStr;

use chrono::FixedOffset;

use crate::common::error::{NowMsecError, NowMsecResult};

/// Calendar in which a clock reading is decomposed.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ZonePolicy {
    /// Process timezone rules, daylight saving included.
    #[default]
    Local,
    Utc,
    /// Constant offset east of UTC.
    Fixed(FixedOffset),
}

impl FromStr for ZonePolicy {
    type Err = NowMsecError;

    /// Accepts `local`, `utc` (any case) or an offset such as `+05:30`.
    fn from_str(raw: &str) -> NowMsecResult<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("local") {
            return Ok(Self::Local);
        }
        if raw.eq_ignore_ascii_case("utc") {
            return Ok(Self::Utc);
        }
        parse_offset(raw).map(Self::Fixed)
    }
}

fn parse_offset(raw: &str) -> NowMsecResult<FixedOffset> {
    let invalid = || NowMsecError::invalid(format!("unrecognised zone `{raw}`"));

    let (sign, rest) = match raw.as_bytes().first() {
        Some(b'+') => (1, &raw[1..]),
        Some(b'-') => (-1, &raw[1..]),
        _ => return Err(invalid()),
    };
    let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
    let two_digits = |field: &str| field.len() == 2 && field.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hours) || !two_digits(minutes) {
        return Err(invalid());
    }
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// Snapshot of configuration values consumed by a formatter.
#[derive(Clone, Debug, Default)]
pub struct FormatterCfg {
    pub zone: ZonePolicy,
}

impl FormatterCfg {
    pub fn with_zone(zone: ZonePolicy) -> Self {
        Self { zone }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_local() {
        assert_eq!(FormatterCfg::default().zone, ZonePolicy::Local);
    }

    #[test]
    fn parses_named_zones() {
        assert_eq!("local".parse::<ZonePolicy>(), Ok(ZonePolicy::Local));
        assert_eq!(" UTC ".parse::<ZonePolicy>(), Ok(ZonePolicy::Utc));
    }

    #[test]
    fn parses_offsets() {
        let east = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        let west = FixedOffset::west_opt(8 * 3600).unwrap();
        assert_eq!("+05:30".parse::<ZonePolicy>(), Ok(ZonePolicy::Fixed(east)));
        assert_eq!("-08:00".parse::<ZonePolicy>(), Ok(ZonePolicy::Fixed(west)));
    }

    #[test]
    fn rejects_garbage() {
        let inputs = [
            "", "gmt", "05:30", "+5:30", "+05:60", "+24:00", "+0a:00", "+-1:00", "-+1:00",
            "+01:-5", "+01:+5",
        ];
        for raw in inputs {
            let err = raw.parse::<ZonePolicy>().unwrap_err();
            assert!(matches!(err, NowMsecError::InvalidInput(_)), "{raw}");
        }
    }
}
