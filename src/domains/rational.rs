use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domains::integer::gcd;
use crate::tolerance::Tolerance;

/// The denominator bound used by [`Fraction::from_decimal`].
pub const MAX_DENOMINATOR: i64 = 1000;

/// A rational number `numerator / denominator` in lowest terms, with the
/// sign carried by the numerator and a denominator of at least one.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Creates the reduced fraction `numerator / denominator`.
    ///
    /// # Panics
    ///
    /// Panics when the denominator is zero.
    pub fn new(numerator: i64, denominator: i64) -> Fraction {
        assert!(denominator != 0, "Denominator cannot be zero");

        let g = gcd(numerator.unsigned_abs(), denominator.unsigned_abs()) as i64;
        let (n, d) = (numerator / g, denominator / g);
        if d < 0 {
            Fraction {
                numerator: -n,
                denominator: -d,
            }
        } else {
            Fraction {
                numerator: n,
                denominator: d,
            }
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Searches for a fraction with a denominator of at most
    /// [`MAX_DENOMINATOR`] that is within the tolerance of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arithmetica::domains::rational::Fraction;
    /// use arithmetica::tolerance::Tolerance;
    ///
    /// let r = Fraction::from_decimal(0.375, Tolerance::DEFAULT);
    /// assert_eq!(r.as_fraction(), Some(Fraction::new(3, 8)));
    /// ```
    pub fn from_decimal(value: f64, tol: Tolerance) -> Approximation {
        Fraction::from_decimal_bounded(value, MAX_DENOMINATOR, tol)
    }

    /// Walks the continued-fraction expansion of `value`, keeping the last
    /// two convergents `p0/q0` and `p1/q1`. The first convergent within the
    /// tolerance of `value` is returned; once the denominator would exceed
    /// `max_denominator`, the search gives up and the value is reported as
    /// [`Approximation::Irrational`].
    ///
    /// # Panics
    ///
    /// Panics when `max_denominator` is not positive.
    pub fn from_decimal_bounded(
        value: f64,
        max_denominator: i64,
        tol: Tolerance,
    ) -> Approximation {
        assert!(max_denominator > 0, "Denominator bound must be positive");

        if !value.is_finite() {
            return Approximation::Irrational(value);
        }

        let (mut p0, mut q0, mut p1, mut q1) = (0i64, 1i64, 1i64, 0i64);
        let mut x = value;

        loop {
            let a = x.floor();

            // Growth checks stay in f64: a near-integral remainder makes the
            // next partial quotient explode, and the casts below must not
            // overflow before the denominator bound can fire.
            let p2 = p0 as f64 + a * p1 as f64;
            let q2 = q0 as f64 + a * q1 as f64;
            if q2 > max_denominator as f64 || p2.abs() >= i64::MAX as f64 {
                return Approximation::Irrational(value);
            }

            let (p2, q2) = (p2 as i64, q2 as i64);
            if tol.nearly_equal(p2 as f64 / q2 as f64, value) {
                return Approximation::Rational(Fraction::new(p2, q2));
            }

            (p0, q0, p1, q1) = (p1, q1, p2, q2);

            x = 1. / (x - a);
        }
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            Display::fmt(&self.numerator, f)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// The outcome of a decimal-to-fraction search.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Approximation {
    /// A fraction within the requested tolerance of the input.
    Rational(Fraction),
    /// No bounded fraction was close enough; the original value is kept.
    Irrational(f64),
}

impl Approximation {
    pub fn value(&self) -> f64 {
        match self {
            Approximation::Rational(r) => r.to_f64(),
            Approximation::Irrational(v) => *v,
        }
    }

    pub fn is_rational(&self) -> bool {
        matches!(self, Approximation::Rational(_))
    }

    pub fn as_fraction(&self) -> Option<Fraction> {
        match self {
            Approximation::Rational(r) => Some(*r),
            Approximation::Irrational(_) => None,
        }
    }
}

impl Display for Approximation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Approximation::Rational(r) => Display::fmt(r, f),
            Approximation::Irrational(v) => Display::fmt(v, f),
        }
    }
}
