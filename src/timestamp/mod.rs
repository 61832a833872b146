//! Current wall-clock time as `YYYY-MM-DD HH:MM:SS.mmm`.

pub mod domain;
pub mod service;

pub use domain::{FormattedTimestamp, TIMESTAMP_LEN};
pub use service::{now_msec, TimestampFormatter};
