//! C-compatible entry points loaded by the MySQL server.
//!
//! Registered with `CREATE FUNCTION now_msec RETURNS STRING SONAME
//! "libnow_msec.so";`. Arguments are accepted and ignored.

use std::os::raw::{c_char, c_ulong};
use std::slice;

use super::abi::{MyBool, UdfArgs, UdfInit};
use crate::common::buf::{ResultBuffer, HOST_RESULT_CAPACITY};
use crate::common::config::FormatterCfg;
use crate::common::log::udf_event;
use crate::common::time::SystemClock;
use crate::common::{NowMsecCode, NowMsecError};
use crate::timestamp::{TimestampFormatter, TIMESTAMP_LEN};

/// Prepare a call. Never fails and performs no argument validation.
///
/// # Safety
/// `initid` must be null or point to a valid `UDF_INIT`.
#[no_mangle]
pub unsafe extern "C" fn now_msec_init(
    initid: *mut UdfInit,
    _args: *mut UdfArgs,
    _message: *mut c_char,
) -> MyBool {
    if let Some(init) = unsafe { initid.as_mut() } {
        init.maybe_null = false;
        init.const_item = false;
        init.max_length = TIMESTAMP_LEN as c_ulong;
    }
    udf_event("init", NowMsecCode::Ok);
    0
}

/// Write the current local time into `result`.
///
/// # Safety
/// `result` must be null or point to at least 255 writable bytes, the size
/// the server allocates for string results. `length`, `is_null` and `error`
/// must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn now_msec(
    _initid: *mut UdfInit,
    _args: *mut UdfArgs,
    result: *mut c_char,
    length: *mut c_ulong,
    is_null: *mut c_char,
    error: *mut c_char,
) -> *mut c_char {
    if let Some(flag) = unsafe { is_null.as_mut() } {
        *flag = 0;
    }

    let formatter = TimestampFormatter::from_cfg(SystemClock, &FormatterCfg::default());
    let ts = formatter.now_with_milliseconds();

    let written = if result.is_null() {
        Err(NowMsecError::BufferTooSmall {
            needed: ts.len(),
            capacity: 0,
        })
    } else {
        let raw = unsafe { slice::from_raw_parts_mut(result.cast::<u8>(), HOST_RESULT_CAPACITY) };
        ResultBuffer::new(raw).write(ts.as_bytes())
    };

    match written {
        Ok(len) => {
            if let Some(out) = unsafe { length.as_mut() } {
                *out = len as c_ulong;
            }
            if let Some(flag) = unsafe { error.as_mut() } {
                *flag = 0;
            }
            result
        }
        Err(err) => {
            udf_event("value", err.code());
            if let Some(flag) = unsafe { error.as_mut() } {
                *flag = 1;
            }
            std::ptr::null_mut()
        }
    }
}

/// Release per-call state. `now_msec_init` allocates nothing.
///
/// # Safety
/// Called by the server with the `initid` passed to `now_msec_init`.
#[no_mangle]
pub unsafe extern "C" fn now_msec_deinit(_initid: *mut UdfInit) {
    udf_event("deinit", NowMsecCode::Ok);
}
