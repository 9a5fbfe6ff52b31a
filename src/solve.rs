//! Numerical root finding by bisection.
//!
//! # Examples
//!
//! ```
//! use arithmetica::solve::bisect;
//!
//! let root = bisect(|x| x * x - 2., 4).unwrap();
//! assert_eq!(root, 1.4142);
//! ```

use std::fmt::{self, Display, Formatter};

use crate::tolerance::round_to;

/// Errors that can occur while searching for a root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolveError {
    /// No sign change was found over the search interval.
    NoRootFound { low: f64, high: f64 },
}

impl Display for SolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::NoRootFound { low, high } => {
                write!(f, "No root found between {} and {}", low, high)
            }
        }
    }
}

/// A bisection root finder.
///
/// The search starts at `low`. When no upper bound is given, one is found by
/// probing at geometrically growing offsets until the function changes sign;
/// the root is then narrowed down by halving the bracket. The result is
/// rounded to `precision` decimal digits, and the search stops as soon as
/// the function value at the midpoint drops below `10^-precision`.
#[derive(Debug, Clone, Copy)]
pub struct Bisection {
    precision: u32,
    low: f64,
    high: Option<f64>,
    max_doublings: u32,
    max_iterations: u32,
}

impl Default for Bisection {
    fn default() -> Bisection {
        Bisection {
            precision: 3,
            low: 0.,
            high: None,
            max_doublings: 64,
            max_iterations: 200,
        }
    }
}

impl Bisection {
    pub fn new() -> Bisection {
        Bisection::default()
    }

    /// The number of decimal digits of the result.
    pub fn precision(mut self, precision: u32) -> Bisection {
        self.precision = precision;
        self
    }

    /// The lower end of the search interval.
    pub fn low(mut self, low: f64) -> Bisection {
        self.low = low;
        self
    }

    /// The upper end of the search interval. Without one, the solver brackets
    /// the root itself by probing upwards from `low`.
    pub fn high(mut self, high: f64) -> Bisection {
        self.high = Some(high);
        self
    }

    /// The number of probe steps when bracketing without an upper bound. The
    /// probe offset starts at `0.5` and doubles on every step.
    pub fn max_doublings(mut self, max_doublings: u32) -> Bisection {
        self.max_doublings = max_doublings;
        self
    }

    /// The number of bracket halvings before giving up on the target value
    /// and returning the current midpoint.
    pub fn max_iterations(mut self, max_iterations: u32) -> Bisection {
        self.max_iterations = max_iterations;
        self
    }

    /// Find a root of `f`, rounded to the configured precision.
    ///
    /// A function value of exactly zero counts as a sign change, so roots on
    /// the interval ends are found as well.
    pub fn solve<F: Fn(f64) -> f64>(&self, f: F) -> Result<f64, SolveError> {
        let target = 10f64.powi(-(self.precision as i32));

        let mut lo = self.low;
        let mut f_lo = f(lo);
        if f_lo.abs() <= target {
            return Ok(round_to(lo, self.precision));
        }

        let mut hi = match self.high {
            Some(high) => {
                if f_lo * f(high) > 0. {
                    return Err(SolveError::NoRootFound {
                        low: lo,
                        high,
                    });
                }
                high
            }
            None => {
                let mut step = 0.5;
                let mut bracket = None;
                let mut probe = lo;
                for _ in 0..self.max_doublings {
                    probe = lo + step;
                    if f_lo * f(probe) <= 0. {
                        bracket = Some(probe);
                        break;
                    }
                    step *= 2.;
                }
                let Some(high) = bracket else {
                    return Err(SolveError::NoRootFound {
                        low: lo,
                        high: probe,
                    });
                };
                high
            }
        };

        let mut mid = (lo + hi) / 2.;
        for _ in 0..self.max_iterations {
            mid = (lo + hi) / 2.;
            let f_mid = f(mid);
            if f_mid.abs() <= target {
                break;
            }
            if f_lo * f_mid < 0. {
                hi = mid;
            } else {
                lo = mid;
                f_lo = f_mid;
            }
        }

        Ok(round_to(mid, self.precision))
    }
}

/// Find a root of `f` with the default search settings.
pub fn bisect<F: Fn(f64) -> f64>(f: F, precision: u32) -> Result<f64, SolveError> {
    Bisection::new().precision(precision).solve(f)
}

#[cfg(test)]
mod test {
    use super::{bisect, Bisection, SolveError};

    #[test]
    fn square_root_of_two() {
        assert_eq!(bisect(|x| x * x - 2., 4), Ok(1.4142));
        assert_eq!(bisect(|x| x * x - 2., 3), Ok(1.414));
        assert_eq!(bisect(|x| x * x - 2., 1), Ok(1.4));
    }

    #[test]
    fn explicit_interval() {
        let root = Bisection::new().low(1.).high(2.).solve(|x| x * x - 2.);
        assert_eq!(root, Ok(1.414));

        // an interval without a sign change is rejected
        let miss = Bisection::new().low(3.).high(5.).solve(|x| x * x - 2.);
        assert_eq!(miss, Err(SolveError::NoRootFound { low: 3., high: 5. }));
        assert_eq!(
            miss.unwrap_err().to_string(),
            "No root found between 3 and 5"
        );
    }

    #[test]
    fn negative_roots() {
        let root = Bisection::new().low(-3.).solve(|x| x * x - 2.);
        assert_eq!(root, Ok(-1.414));
    }

    #[test]
    fn root_at_the_start() {
        assert_eq!(bisect(|x| x.abs(), 3), Ok(0.));
        assert_eq!(Bisection::new().low(2.).solve(|x| x - 2.), Ok(2.));
    }

    #[test]
    fn descending_functions() {
        // the bracket closes in on 2 from below and stops at the target
        assert_eq!(bisect(|x| 2. - x, 3), Ok(1.999));
    }

    #[test]
    fn no_root_anywhere() {
        let err = bisect(|x| x * x + 1., 3).unwrap_err();
        assert!(matches!(err, SolveError::NoRootFound { low, .. } if low == 0.));
    }
}
