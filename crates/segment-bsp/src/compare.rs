//! Tolerance-aware comparison of floating-point values.

use std::str::FromStr;

use crate::BspError;

/// Default tolerance for classification.
/// Values closer than this are considered equal.
pub const DEFAULT_EPSILON: f64 = 5e-6;

/// Direction of an approximate comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `a` and `b` are within tolerance of each other
    Equal,
    /// `a` exceeds `b` by more than the tolerance
    Greater,
    /// `a` falls below `b` by more than the tolerance
    Less,
}

impl FromStr for Comparison {
    type Err = BspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" | "==" => Ok(Comparison::Equal),
            "gt" | ">" => Ok(Comparison::Greater),
            "lt" | "<" => Ok(Comparison::Less),
            other => Err(BspError::InvalidArgument(other.to_string())),
        }
    }
}

/// Returns whether `a` relates to `b` as `kind` requests, with tolerance `eps`.
///
/// - `Equal`: `|a - b| < eps`
/// - `Greater`: `a - b > eps`
/// - `Less`: `a - b < -eps`
#[inline]
pub fn approx_compare(kind: Comparison, a: f64, b: f64, eps: f64) -> bool {
    let diff = a - b;
    match kind {
        Comparison::Equal => diff < eps && diff > -eps,
        Comparison::Greater => diff > eps,
        Comparison::Less => diff < -eps,
    }
}
