use crate::error::RuntimeError;

/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_I64_INT` in absolute
/// value.
///
/// ## Example
/// ```
/// use arithmos::util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42, "too big!"), Ok(42.0));
/// assert!(i64_to_f64_checked(MAX_SAFE_I64_INT + 1, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(error);
    }
    Ok(value as f64)
}

/// Narrows a widened intermediate back to `i64`.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the value does not fit.
pub fn narrow_i128(value: i128) -> Result<i64, RuntimeError> {
    i64::try_from(value).map_err(|_| RuntimeError::Overflow)
}

/// Greatest common divisor of the absolute values of `a` and `b`.
///
/// `gcd(0, 0)` is `0`; every other result is positive.
///
/// ## Example
/// ```
/// use arithmos::util::num::gcd;
///
/// assert_eq!(gcd(12, -18), 6);
/// assert_eq!(gcd(0, 5), 5);
/// ```
#[must_use]
pub const fn gcd(a: i128, b: i128) -> i128 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    // Callers pass magnitudes below 2^127, so the cast cannot wrap.
    #[allow(clippy::cast_possible_wrap)]
    let g = a as i128;
    g
}
