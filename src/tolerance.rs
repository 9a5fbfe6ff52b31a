//! Approximate floating-point comparison and rounding helpers.
//!
//! Every predicate in this crate that compares inexact values takes an
//! explicit [`Tolerance`], with [`Tolerance::DEFAULT`] as the conventional
//! width:
//!
//! ```
//! use arithmetica::tolerance::Tolerance;
//!
//! let tol = Tolerance::DEFAULT;
//! assert!(tol.nearly_equal(0.1 + 0.2, 0.3));
//! assert!(!Tolerance::new(1e-20).nearly_equal(0.1 + 0.2, 0.3));
//! ```

use serde::{Deserialize, Serialize};

/// The comparison width used by approximate equality tests.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    eps: f64,
}

impl Tolerance {
    /// The conventional width of `1e-6`.
    pub const DEFAULT: Tolerance = Tolerance { eps: 1e-6 };

    pub const fn new(eps: f64) -> Tolerance {
        Tolerance { eps }
    }

    pub const fn epsilon(self) -> f64 {
        self.eps
    }

    /// Returns `true` if `a` and `b` differ by at most the width.
    pub fn nearly_equal(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.eps
    }

    /// Returns `true` if `a` is within the width of zero.
    pub fn is_zero(self, a: f64) -> bool {
        a.abs() <= self.eps
    }
}

impl Default for Tolerance {
    fn default() -> Tolerance {
        Tolerance::DEFAULT
    }
}

/// Rounds `x` to `digits` decimal digits.
pub fn round_to(x: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (x * scale).round() / scale
}

/// Clamps `x` into `[low, high]`.
pub fn bound(x: f64, low: f64, high: f64) -> f64 {
    if x < low {
        low
    } else if x > high {
        high
    } else {
        x
    }
}

/// Remainder of `a / b` carrying the sign of the divisor, so that
/// `modulo(a, b)` lies in `[0, b)` for positive `b`. Used to normalize
/// angles into `[0, 2π)`.
pub fn modulo(a: f64, b: f64) -> f64 {
    ((a % b) + b) % b
}
