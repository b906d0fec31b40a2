//! Taylor series of the exponential, sine and cosine,
//! truncated at a given number of terms.
//!
//! Each series is defined by the rule for its i-th term:
//!
//! * exp(x) ≈ Σ_i x^i / i!
//! * cos(x) ≈ Σ_i (-1)^i x^(2i) / (2i)!
//! * sin(x) ≈ Σ_i (-1)^i x^(2i+1) / (2i+1)!
//!
//! The terms are summed by [`try_partial_sum`](crate::try_partial_sum),
//! from i = 0 up to, but not including, the requested number of terms.
//! No attempt is made to detect convergence: the accuracy for a
//! given number of terms falls off as |x| grows.

use std::convert::TryFrom;
use std::fmt;
use std::ops::{Add, Mul, Div};
use std::str::FromStr;
use num_complex::Complex64;
use num_traits::Zero;

use crate::partial_sum::try_partial_sum;
use crate::special_functions::Factorial;

mod error;

pub use error::*;

/// Number of terms used by the `*_default` evaluators.
pub const DEFAULT_TERMS: i64 = 10;

/// Types that a series may be expanded about.
pub trait ExpansionPoint:
    Copy
    + fmt::Display
    + Zero
    + Add<Output=Self>
    + Mul<f64, Output=Self>
    + Div<f64, Output=Self>
{
    /// Raises `self` to the non-negative integer power `k`.
    fn powu(self, k: usize) -> Self;

    /// Is every component of `self` neither infinite nor NaN?
    fn is_finite(self) -> bool;
}

impl ExpansionPoint for f64 {
    fn powu(self, k: usize) -> Self {
        match i32::try_from(k) {
            Ok(k) => self.powi(k),
            Err(_) => self.powf(k as f64),
        }
    }

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

impl ExpansionPoint for Complex64 {
    fn powu(self, k: usize) -> Self {
        match u32::try_from(k) {
            Ok(k) => Complex64::powu(&self, k),
            Err(_) => self.powf(k as f64),
        }
    }

    fn is_finite(self) -> bool {
        Complex64::is_finite(self)
    }
}

/// Multiplies `value` by (-1)^i.
fn alternate<T: ExpansionPoint>(i: usize, value: T) -> T {
    if i % 2 == 0 {
        value
    } else {
        value * -1.0
    }
}

/// The supported Taylor series.
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Series {
    Exponential,
    Sine,
    Cosine,
}

impl Series {
    /// Returns the `i`-th term of the series, expanded about `x`.
    pub fn term<T: ExpansionPoint>(self, x: T, i: usize) -> T {
        match self {
            Series::Exponential => x.powu(i) / i.factorial(),
            Series::Cosine => alternate(i, x.powu(2 * i)) / (2 * i).factorial(),
            Series::Sine => alternate(i, x.powu(2 * i + 1)) / (2 * i + 1).factorial(),
        }
    }

    /// Returns the sum of the first `n` terms of the series,
    /// expanded about `x`.
    ///
    /// Fails if `n` is negative, before any term is evaluated, or if
    /// `x` is not finite, when the first term is evaluated.
    pub fn evaluate<T: ExpansionPoint>(self, x: T, n: i64) -> Result<T, SeriesError> {
        let n = usize::try_from(n).map_err(|_| SeriesError::InvalidTerms(n))?;
        let term = |i| {
            if x.is_finite() {
                Ok(self.term(x, i))
            } else {
                Err(SeriesError::domain(x))
            }
        };
        try_partial_sum(term, n)
    }

    /// The value the series converges to, as given by the standard lib.
    pub fn reference(self, x: f64) -> f64 {
        match self {
            Series::Exponential => x.exp(),
            Series::Sine => x.sin(),
            Series::Cosine => x.cos(),
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Series::Exponential => "exponential",
            Series::Sine => "sine",
            Series::Cosine => "cosine",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Series {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exp" | "exponential" => Ok(Series::Exponential),
            "sin" | "sine" => Ok(Series::Sine),
            "cos" | "cosine" => Ok(Series::Cosine),
            _ => Err("series must be one of 'exponential', 'sine' or 'cosine'"),
        }
    }
}

/// Approximates e^x by the first `n` terms of its Taylor series.
pub fn exponential<T: ExpansionPoint>(x: T, n: i64) -> Result<T, SeriesError> {
    Series::Exponential.evaluate(x, n)
}

/// Approximates e^x using [`DEFAULT_TERMS`] terms.
pub fn exponential_default<T: ExpansionPoint>(x: T) -> Result<T, SeriesError> {
    exponential(x, DEFAULT_TERMS)
}

/// Approximates cos(x) by the first `n` terms of its Taylor series.
pub fn cosine<T: ExpansionPoint>(x: T, n: i64) -> Result<T, SeriesError> {
    Series::Cosine.evaluate(x, n)
}

/// Approximates cos(x) using [`DEFAULT_TERMS`] terms.
pub fn cosine_default<T: ExpansionPoint>(x: T) -> Result<T, SeriesError> {
    cosine(x, DEFAULT_TERMS)
}

/// Approximates sin(x) by the first `n` terms of its Taylor series.
pub fn sine<T: ExpansionPoint>(x: T, n: i64) -> Result<T, SeriesError> {
    Series::Sine.evaluate(x, n)
}

/// Approximates sin(x) using [`DEFAULT_TERMS`] terms.
pub fn sine_default<T: ExpansionPoint>(x: T) -> Result<T, SeriesError> {
    sine(x, DEFAULT_TERMS)
}
