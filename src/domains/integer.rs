//! Number theory on unsigned machine integers: primality testing,
//! factorization, sieving, and gcd/lcm.

/// The primes below 101, checked by direct lookup before any trial division.
pub const SMALL_PRIMES: [u64; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// Tests whether `n` is prime by trial division up to the square root.
pub fn is_prime(n: u64) -> bool {
    if n < 101 {
        return SMALL_PRIMES.contains(&n);
    }
    if n % 2 == 0 {
        return false;
    }

    // d <= n / d instead of d * d <= n, which overflows near u64::MAX
    let mut d = 3;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// The smallest proper factor of `n`, or `None` when `n` is prime or less
/// than two.
fn smallest_factor(n: u64) -> Option<u64> {
    if n % 2 == 0 && n > 2 {
        return Some(2);
    }

    let mut d = 3;
    while d <= n / d {
        if n % d == 0 {
            return Some(d);
        }
        d += 2;
    }
    None
}

/// The prime factors of `n` in ascending order with multiplicity, so that
/// their product is `n`. `0` and `1` yield an empty list.
///
/// # Examples
///
/// ```
/// use arithmetica::domains::integer::prime_factorization;
///
/// assert_eq!(prime_factorization(12), vec![2, 2, 3]);
/// ```
pub fn prime_factorization(n: u64) -> Vec<u64> {
    if n < 2 {
        return vec![];
    }

    match smallest_factor(n) {
        None => vec![n],
        Some(f) => {
            let mut res = prime_factorization(f);
            res.extend(prime_factorization(n / f));
            res
        }
    }
}

/// All primes up to and including `n`, by the sieve of Eratosthenes.
pub fn list_primes(n: u64) -> Vec<u64> {
    if n < 2 {
        return vec![];
    }

    let n = n as usize;
    let mut composite = vec![false; n + 1];
    let mut primes = vec![];
    for p in 2..=n {
        if composite[p] {
            continue;
        }
        primes.push(p as u64);

        if p <= n / p {
            let mut m = p * p;
            while m <= n {
                composite[m] = true;
                m += p;
            }
        }
    }
    primes
}

/// The greatest common divisor by Euclid's algorithm; `gcd(0, b) = b`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    let mut c;
    while a != 0 {
        c = a;
        a = b % a;
        b = c;
    }
    b
}

/// The least common multiple; `0` when either argument is zero.
pub fn lcm(a: u64, b: u64) -> u64 {
    let g = gcd(a, b);
    if g == 0 {
        0
    } else {
        a / g * b
    }
}

/// Folds [`gcd`] over the slice; the empty slice yields `0`.
pub fn gcd_all(values: &[u64]) -> u64 {
    values.iter().fold(0, |acc, &v| gcd(acc, v))
}

/// Folds [`lcm`] over the slice; the empty slice yields `1`.
pub fn lcm_all(values: &[u64]) -> u64 {
    values.iter().fold(1, |acc, &v| lcm(acc, v))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn small_primes_table() {
        assert_eq!(SMALL_PRIMES.len(), 25);
        for p in SMALL_PRIMES {
            assert!(is_prime(p), "{} should be prime", p);
        }
    }

    #[test]
    fn primality_matches_naive_division() {
        fn naive(n: u64) -> bool {
            n >= 2 && (2..n).all(|d| n % d != 0)
        }

        for n in 0..=10_000 {
            assert_eq!(is_prime(n), naive(n), "disagreement at {}", n);
        }
    }

    #[test]
    fn larger_primes() {
        assert!(is_prime(104729));
        assert!(is_prime(2147483647));
        assert!(!is_prime(10403)); // 101 * 103
        assert!(!is_prime(104729 * 2));
    }

    #[test]
    fn factorization() {
        assert_eq!(prime_factorization(0), Vec::<u64>::new());
        assert_eq!(prime_factorization(1), Vec::<u64>::new());
        assert_eq!(prime_factorization(2), vec![2]);
        assert_eq!(prime_factorization(97), vec![97]);
        assert_eq!(prime_factorization(12), vec![2, 2, 3]);
        assert_eq!(prime_factorization(360), vec![2, 2, 2, 3, 3, 5]);
        assert_eq!(prime_factorization(1024), vec![2; 10]);

        for n in 2..500 {
            let f = prime_factorization(n);
            assert_eq!(f.iter().product::<u64>(), n);
            assert!(f.iter().all(|&p| is_prime(p)));
            assert!(f.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn sieve() {
        assert_eq!(list_primes(0), Vec::<u64>::new());
        assert_eq!(list_primes(1), Vec::<u64>::new());
        assert_eq!(list_primes(2), vec![2]);
        assert_eq!(list_primes(100), SMALL_PRIMES.to_vec());
        assert_eq!(list_primes(541).len(), 100);
    }

    #[test]
    fn gcd_lcm() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(18, 12), 6);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(17, 13), 1);

        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(0, 3), 0);
        assert_eq!(lcm(7, 7), 7);

        assert_eq!(gcd_all(&[12, 18, 24]), 6);
        assert_eq!(gcd_all(&[]), 0);
        assert_eq!(gcd_all(&[7]), 7);

        // pairwise reduction is order-independent
        for (a, b, c) in [(12, 18, 24), (9, 30, 42), (100, 75, 35)] {
            assert_eq!(gcd(gcd(a, b), c), gcd(a, gcd(b, c)));
        }

        assert_eq!(lcm_all(&[2, 3, 4]), 12);
        assert_eq!(lcm_all(&[]), 1);
        assert_eq!(lcm_all(&[5]), 5);
    }
}
