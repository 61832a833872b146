//! Structured events emitted at the host boundary.
//!
//! Events go through `tracing`; the crate never installs a subscriber, so
//! they are dropped unless the embedding process sets one up.

use crate::common::error::NowMsecCode;

/// Emit a lifecycle event for a UDF callback.
pub fn udf_event(event: &'static str, code: NowMsecCode) {
    let raw = code as u32;
    if code == NowMsecCode::Ok {
        tracing::trace!(target: "now_msec", ev = event, code = raw);
    } else {
        tracing::error!(target: "now_msec", ev = event, code = raw, "udf callback failed");
    }
}
