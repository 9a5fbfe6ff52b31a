//! Counting and generation utilities: memoized factorials and binomial
//! coefficients, permutations, and subset generation.
//!
//! # Examples
//!
//! Counting through the shared cache:
//!
//! ```rust
//! use arithmetica::combinatorics::Combinatorics;
//!
//! let c = Combinatorics::new();
//! assert_eq!(c.factorial(5), 120.0);
//! assert_eq!(c.binomial(5, 2), 10.0);
//! ```
//!
//! Subset generation:
//!
//! ```rust
//! use arithmetica::combinatorics::subsets;
//!
//! let s = subsets(&[1, 2]);
//! assert_eq!(s, vec![vec![], vec![1], vec![2], vec![1, 2]]);
//! ```

use std::sync::Mutex;

use ahash::HashMap;
use smallvec::SmallVec;

/// A shared cache for factorials and binomial coefficients.
///
/// Results are stored as `f64`, so values beyond `170!` saturate to
/// infinity. Lookups and inserts happen under a single lock acquisition,
/// making a shared instance safe to use from multiple threads.
pub struct Combinatorics {
    factorials: Mutex<HashMap<i64, f64>>,
    binomials: Mutex<HashMap<(i64, i64), f64>>,
}

impl Combinatorics {
    pub fn new() -> Combinatorics {
        Combinatorics {
            factorials: Mutex::new(HashMap::default()),
            binomials: Mutex::new(HashMap::default()),
        }
    }

    /// Computes `n!`, memoized by argument.
    ///
    /// A negative argument yields `NaN`.
    pub fn factorial(&self, n: i64) -> f64 {
        if n < 0 {
            return f64::NAN;
        }

        let mut cache = self.factorials.lock().unwrap();
        if let Some(v) = cache.get(&n) {
            return *v;
        }

        let mut res = 1.;
        for i in 2..=n {
            res *= i as f64;
        }

        cache.insert(n, res);
        res
    }

    /// Computes the binomial coefficient `n` over `k`, memoized per pair.
    ///
    /// Arguments outside `0 <= k <= n` yield `0`.
    pub fn binomial(&self, n: i64, k: i64) -> f64 {
        if k < 0 || k > n {
            return 0.;
        }

        // symmetry reduction keeps the multiplicative loop short
        let k = if k > n - k { n - k } else { k };
        if k == 0 {
            return 1.;
        }

        let mut cache = self.binomials.lock().unwrap();
        if let Some(v) = cache.get(&(n, k)) {
            return *v;
        }

        let mut res = 1.;
        for i in 1..=k {
            res *= (n - k + i) as f64;
            res /= i as f64;
        }

        cache.insert((n, k), res);
        res
    }
}

impl Default for Combinatorics {
    fn default() -> Combinatorics {
        Combinatorics::new()
    }
}

/// An iterator type for generating combinations of indices without replacement.
///
/// # Examples
///
/// Create an iterator to generate combinations of 3 elements from a total of 4:
/// ```rust
/// use arithmetica::combinatorics::CombinationIterator;
/// let mut combos = CombinationIterator::new(4, 3);
///
/// while let Some(c) = combos.next() {
///     println!("{:?}", c);
/// }
///
/// // The combinations output is:
/// // [0, 1, 2]
/// // [0, 1, 3]
/// // [0, 2, 3]
/// // [1, 2, 3]
/// ```
pub struct CombinationIterator {
    n: usize,
    indices: SmallVec<[usize; 10]>,
    init: bool,
}

impl CombinationIterator {
    /// Creates a new `CombinationIterator` over combinations of `k` elements
    /// from a set of `n` elements.
    pub fn new(n: usize, k: usize) -> CombinationIterator {
        CombinationIterator {
            indices: (0..k).collect(),
            n,
            init: false,
        }
    }

    /// Advances the iterator and returns the next combination.
    pub fn next(&mut self) -> Option<&[usize]> {
        if self.indices.is_empty() || self.indices.len() > self.n {
            return None;
        }

        if !self.init {
            self.init = true;
            return Some(&self.indices);
        }

        let k = self.indices.len();
        let mut bump = None;
        for i in (0..k).rev() {
            if self.indices[i] < self.n - k + i {
                bump = Some(i);
                break;
            }
        }

        let i = bump?;
        let a = self.indices[i] + 1;
        for (p, vv) in self.indices[i..].iter_mut().enumerate() {
            *vv = a + p;
        }

        Some(&self.indices)
    }
}

/// Generates all `n!` orderings of the `items` entries.
///
/// Entries are not deduplicated: repeated input elements produce repeated
/// permutations.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut scratch = items.to_vec();
    let mut out = vec![];
    let len = scratch.len();
    permutations_impl(&mut scratch, len, &mut out);
    out
}

fn permutations_impl<T: Clone>(scratch: &mut [T], k: usize, out: &mut Vec<Vec<T>>) {
    if k <= 1 {
        out.push(scratch.to_vec());
        return;
    }

    for i in 0..k {
        scratch.swap(i, k - 1);
        permutations_impl(scratch, k - 1, out);
        scratch.swap(i, k - 1);
    }
}

/// Generates all `2^n` subsets of the `items` entries, including the empty
/// subset and the full set. Within each subset the input order is kept.
pub fn subsets<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    match items.split_last() {
        None => vec![vec![]],
        Some((last, rest)) => {
            let mut out = subsets(rest);
            let mut with_last = out.clone();
            for s in &mut with_last {
                s.push(last.clone());
            }
            out.extend(with_last);
            out
        }
    }
}

/// Generates the subsets of `items` with exactly `len` entries, in
/// lexicographic index order.
pub fn subsets_of_length<T: Clone>(items: &[T], len: usize) -> Vec<Vec<T>> {
    if len > items.len() {
        return vec![];
    }
    if len == 0 {
        return vec![vec![]];
    }

    let mut it = CombinationIterator::new(items.len(), len);
    let mut out = vec![];
    while let Some(c) = it.next() {
        out.push(c.iter().map(|&i| items[i].clone()).collect());
    }
    out
}
