//! Truncated sums of a series, given the rule for its terms

use std::ops::Add;
use num_traits::Zero;

/// Returns the sum of the first `n` terms of a series,
/// `term(0) + term(1) + ... + term(n-1)`.
///
/// Terms are evaluated in order of increasing index and
/// accumulated left to right, starting from zero. If `n` is zero,
/// `term` is never called.
pub fn partial_sum<T, F>(mut term: F, n: usize) -> T
where
    T: Zero + Add<Output=T>,
    F: FnMut(usize) -> T,
{
    (0..n).fold(T::zero(), |acc, i| acc + term(i))
}

/// Like `partial_sum`, but for terms that can fail to evaluate.
/// Evaluation stops at the first failing index and its error is
/// returned as is.
pub fn try_partial_sum<T, E, F>(mut term: F, n: usize) -> Result<T, E>
where
    T: Zero + Add<Output=T>,
    F: FnMut(usize) -> Result<T, E>,
{
    (0..n).try_fold(T::zero(), |acc, i| Ok(acc + term(i)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sum() {
        let mut calls = 0;
        let sum: f64 = partial_sum(|_| {calls += 1; 1.0}, 0);
        assert_eq!(sum, 0.0);
        assert!(sum.is_sign_positive());
        assert_eq!(calls, 0);

        let sum: Result<f64, ()> = try_partial_sum(|_| Err(()), 0);
        assert_eq!(sum, Ok(0.0));
    }

    #[test]
    fn sum_of_ones() {
        for n in 0..100 {
            let sum: f64 = partial_sum(|_| 1.0, n);
            assert_eq!(sum, n as f64);
        }
        let sum: i64 = partial_sum(|_| 1, 17);
        assert_eq!(sum, 17);
    }

    #[test]
    fn evaluation_order() {
        let mut seen = vec![];
        let sum: usize = partial_sum(|i| {seen.push(i); i}, 6);
        assert_eq!(sum, 15);
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn left_to_right() {
        // 1 + 1e-16 + 1e-16 rounds to 1 when accumulated from the left
        let terms = [1.0, 1.0e-16, 1.0e-16];
        let sum: f64 = partial_sum(|i| terms[i], 3);
        assert_eq!(sum, (1.0 + 1.0e-16) + 1.0e-16);
        assert_eq!(sum, 1.0);
    }

    #[test]
    fn errors_propagate() {
        let mut seen = vec![];
        let sum: Result<f64, String> = try_partial_sum(
            |i| {
                seen.push(i);
                if i < 3 { Ok(1.0) } else { Err(format!("bad term {}", i)) }
            },
            10
        );
        assert_eq!(sum, Err("bad term 3".to_owned()));
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }
}
