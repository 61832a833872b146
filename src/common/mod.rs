//! Shared utilities used by the formatter and the host adapter.
pub mod buf;
pub mod config;
pub mod error;
pub mod log;
pub mod time;

pub use error::{NowMsecCode, NowMsecError, NowMsecResult};
