//! `repr(C)` mirrors of the structures the MySQL server passes to UDFs.
//!
//! Layouts follow `mysql/udf_registration_types.h`. Only the fields the
//! adapter touches are read or written.

use std::os::raw::{c_char, c_int, c_uint, c_ulong, c_void};

/// `my_bool` / `bool` as seen by the server: non-zero means true.
pub type MyBool = c_char;

/// `enum Item_result`.
pub type ItemResult = c_int;

/// Per-call metadata initialised by `xxx_init` and shared with the value callback.
#[repr(C)]
#[derive(Debug)]
pub struct UdfInit {
    pub maybe_null: bool,
    pub decimals: c_uint,
    pub max_length: c_ulong,
    pub ptr: *mut c_char,
    pub const_item: bool,
    pub extension: *mut c_void,
}

/// Argument description handed to both callbacks.
#[repr(C)]
#[derive(Debug)]
pub struct UdfArgs {
    pub arg_count: c_uint,
    pub arg_type: *mut ItemResult,
    pub args: *mut *mut c_char,
    pub lengths: *mut c_ulong,
    pub maybe_null: *mut c_char,
    pub attributes: *mut *mut c_char,
    pub attribute_lengths: *mut c_ulong,
    pub extension: *mut c_void,
}
