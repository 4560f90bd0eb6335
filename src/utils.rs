/// Check if `n` is a prime number.
///
/// Uses trial division up to sqrt(n). Suitable for validating
/// field characteristics at construction, not for high-performance
/// primality testing.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }

    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` such that `g = gcd(a, b)` and `a*x + b*y = g`.
/// Recurses on `(b mod a, a)`, so the argument order matters for the base
/// case: `extended_gcd(0, b) == (b, 0, 1)`.
///
/// `x` is only a modular inverse of `a` modulo `b` when `g == 1`; callers
/// must check.
///
/// # Example
///
/// ```
/// use finfield::extended_gcd;
///
/// let (g, x, _) = extended_gcd(3, 26);
/// assert_eq!(g, 1);
/// assert_eq!((3 * x).rem_euclid(26), 1);
/// ```
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    if a == 0 {
        return (b, 0, 1);
    }

    let (g, x1, y1) = extended_gcd(b % a, a);
    (g, y1 - (b / a) * x1, x1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_primes() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(6));
        assert!(is_prime(7));
        assert!(!is_prime(8));
        assert!(!is_prime(9));
        assert!(!is_prime(10));
        assert!(is_prime(11));
        assert!(is_prime(13));
    }

    #[test]
    fn composites() {
        assert!(!is_prime(15));
        assert!(!is_prime(21));
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(!is_prime(65_537 * 3));
    }

    #[test]
    fn larger_primes() {
        assert!(is_prime(101));
        assert!(is_prime(65_537));
        assert!(is_prime(104_729));
        assert!(is_prime(4_294_967_291)); // largest prime below 2^32
    }

    #[test]
    fn near_u64_max() {
        assert!(is_prime(18_446_744_073_709_551_557)); // largest prime below 2^64
        assert!(!is_prime(u64::MAX));
        assert!(!is_prime(18_446_744_073_709_551_555));
    }

    #[test]
    fn extended_gcd_3_26() {
        let (g, x, y) = extended_gcd(3, 26);
        assert_eq!(g, 1);
        assert_eq!(x, 9);
        assert_eq!(y, -1);
        assert_eq!((3 * x).rem_euclid(26), 1);
    }

    #[test]
    fn extended_gcd_base_case() {
        assert_eq!(extended_gcd(0, 7), (7, 0, 1));
    }

    #[test]
    fn extended_gcd_common_factor() {
        let (g, x, y) = extended_gcd(12, 18);
        assert_eq!(g, 6);
        assert_eq!(12 * x + 18 * y, 6);
    }

    #[test]
    fn extended_gcd_bezout_small_range() {
        for a in 0..40i64 {
            for b in 1..40i64 {
                let (g, x, y) = extended_gcd(a, b);
                assert_eq!(a * x + b * y, g, "a={} b={}", a, b);
            }
        }
    }
}
