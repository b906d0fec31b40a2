//! Implements the factorial

use std::sync::OnceLock;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

pub trait Factorial {
    /// Evaluates the factorial function n!, rounded to
    /// the nearest f64.
    fn factorial(&self) -> f64;
}

impl Factorial for usize {
    fn factorial(&self) -> f64 {
        // 171! > f64::MAX
        get_fcache()
            .get(*self)
            .copied()
            .unwrap_or(f64::INFINITY)
    }
}

const CACHE_SIZE: usize = 171;
static FCACHE: OnceLock<[f64; CACHE_SIZE]> = OnceLock::new();

/// The table is filled from the exact integer factorials,
/// so each entry is correctly rounded, rather than
/// accumulating rounding error in a running f64 product.
fn get_fcache() -> &'static [f64; CACHE_SIZE] {
    FCACHE.get_or_init(|| {
        let mut cache = [1.0; CACHE_SIZE];
        (1..CACHE_SIZE).fold(BigUint::from(1u32), |acc, i| {
            let fac = acc * i;
            cache[i] = fac.to_f64().unwrap_or(f64::INFINITY);
            fac
        });
        cache
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial() {
        assert!(0usize.factorial() == 1.0);
        assert!(1usize.factorial() == 1.0);
        assert!(4usize.factorial() == 24.0);
        assert!(18usize.factorial() == 6402373705728000.0);
    }

    #[test]
    fn correctly_rounded() {
        // u128 holds up to 34! exactly, and `as` rounds to nearest
        let mut exact: u128 = 1;
        for k in 0..=34usize {
            if k > 0 {
                exact *= k as u128;
            }
            assert_eq!(k.factorial(), exact as f64, "mismatch at {}!", k);
        }
    }

    #[test]
    fn overflow() {
        assert!(170usize.factorial().is_finite());
        assert!(170usize.factorial() > 7.25e306);
        assert_eq!(171usize.factorial(), f64::INFINITY);
        assert_eq!(1000usize.factorial(), f64::INFINITY);
    }
}
