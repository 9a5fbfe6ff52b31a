//! Arithmetica is a compact numerical utility library.
//!
//! It covers everyday mathematical chores: complex arithmetic, vectors and
//! matrices, rational approximation, primes and divisibility, memoized
//! combinatorics, plane geometry with transforms and intersection, and root
//! finding, all under an explicit floating-point tolerance.
//!
//! For example:
//!
//! ```
//! use arithmetica::domains::rational::Fraction;
//! use arithmetica::solve::bisect;
//! use arithmetica::tolerance::Tolerance;
//!
//! let tol = Tolerance::DEFAULT;
//! let f = Fraction::from_decimal(0.7, tol).as_fraction().unwrap();
//! assert_eq!(f.to_string(), "7/10");
//!
//! let root = bisect(|x| x * x - 2., 4).unwrap();
//! assert_eq!(root, 1.4142);
//! ```

pub mod combinatorics;
pub mod domains;
pub mod geometry;
pub mod solve;
pub mod tensors;
pub mod tolerance;
