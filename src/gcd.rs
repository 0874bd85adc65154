//! Greatest common divisor by Euclidean remainder reduction
//!
//! Rust's `%` truncates toward zero, so a remainder takes the sign of the
//! dividend. [`euclidean`] reduces both operands to their magnitudes before the
//! loop. The result is the same as taking the absolute value at the end, and
//! the loop never hits the `i64::MIN % -1` overflow.

use crate::bail_invalid;
use crate::error::{AlgoError, Result};

/// Greatest common divisor of two integers.
///
/// `euclidean(a, 0) == |a|`, `euclidean(0, 0) == 0`, and the sign of either
/// operand never affects the result.
pub fn euclidean(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Greatest common divisor of two finite floating point values.
///
/// Runs the same remainder loop with `f64` truncating remainder (`fmod`).
/// Non-finite operands are rejected before any work is done.
#[tracing::instrument(level = "trace")]
pub fn euclidean_f64(a: f64, b: f64) -> Result<f64> {
    if !a.is_finite() {
        tracing::debug!(operand = a, "rejecting non-finite gcd operand");
        bail_invalid!("gcd operand", a);
    }
    if !b.is_finite() {
        tracing::debug!(operand = b, "rejecting non-finite gcd operand");
        bail_invalid!("gcd operand", b);
    }

    let (mut a, mut b) = (a, b);
    while b != 0.0 {
        (a, b) = (b, a % b);
    }
    Ok(a.abs())
}

/// Parse a single untyped operand
pub fn parse_operand(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AlgoError::invalid_argument("gcd operand", format!("{:?}", raw)))
}

/// Greatest common divisor of two untyped operands
pub fn euclidean_str(a: &str, b: &str) -> Result<u64> {
    let a = parse_operand(a)?;
    let b = parse_operand(b)?;
    Ok(euclidean(a, b))
}

/// Least common multiple, derived from [`euclidean`].
///
/// Returns `Some(0)` when either operand is zero and `None` when the result
/// does not fit in a `u64`.
pub fn lcm(a: i64, b: i64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    let divisor = euclidean(a, b);
    (a.unsigned_abs() / divisor).checked_mul(b.unsigned_abs())
}
