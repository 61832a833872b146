//! `NOW_MSEC()` for MySQL: the current local time as `YYYY-MM-DD HH:MM:SS.mmm`.
//!
//! The formatter is a plain library API; [`api::ffi`] adapts it to the
//! server's UDF calling convention.
pub mod api;
pub mod common;
pub mod timestamp;

pub use common::config::{FormatterCfg, ZonePolicy};
pub use common::time::{Clock, FixedClock, SystemClock};
pub use common::{NowMsecCode, NowMsecError, NowMsecResult};
pub use timestamp::{now_msec, FormattedTimestamp, TimestampFormatter, TIMESTAMP_LEN};
