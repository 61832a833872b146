//! Entry points for the MySQL UDF loader.

pub mod abi;
pub mod ffi;
