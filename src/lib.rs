//! Truncated Taylor series.
//!
//! The core of the crate is [`partial_sum`], which adds up the first `n`
//! terms of a series given the rule for its i-th term. On top of this are
//! evaluators for the Taylor series of the exponential, sine and cosine:
//!
//! ```
//! let e = taylor::exponential(1.0, 15).unwrap();
//! assert!((e - std::f64::consts::E).abs() < 1.0e-9);
//! ```
//!
//! The number of terms is always chosen by the caller, so the accuracy
//! of the result is entirely a matter of how many terms are requested
//! and how far the expansion point lies from the origin.

mod partial_sum;
mod special_functions;
mod series;
pub mod input;

pub use partial_sum::*;
pub use special_functions::Factorial;
pub use series::*;
