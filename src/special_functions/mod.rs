//! Custom implementations of special functions not
//! provided by the standard lib.

mod factorial;

pub use factorial::*;
