//! Numeric value types and number theory.
//!
//! - [Complex](complex::Complex) is a complex number over `f64` with the
//!   full operator set and real-operand promotion.
//! - [Fraction](rational::Fraction) is a reduced rational over `i64`,
//!   reachable from a decimal through a continued-fraction search.
//! - [integer] holds primality, factorization, and gcd/lcm routines over
//!   `u64`.

pub mod complex;
pub mod integer;
pub mod rational;

pub use complex::Complex;
pub use rational::{Approximation, Fraction};
