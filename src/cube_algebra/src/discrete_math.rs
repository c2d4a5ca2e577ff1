/// Greatest common divisor by Euclid's algorithm. `gcd(a, 0)` is `a`.
#[must_use]
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple, or `None` if it does not fit in a `u64`. Zero has no
/// multiples besides itself, so any zero argument gives `Some(0)`.
#[must_use]
pub fn checked_lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }

    (a / gcd(a, b)).checked_mul(b)
}

/// Least common multiple of every value, `Some(1)` for an empty iterator and `None`
/// as soon as a partial result overflows.
pub fn checked_lcm_iter(mut values: impl Iterator<Item = u64>) -> Option<u64> {
    values.try_fold(1, checked_lcm)
}

#[cfg(test)]
mod tests {
    use super::{checked_lcm, checked_lcm_iter, gcd};

    #[test]
    fn gcd_of_small_numbers() {
        assert_eq!(gcd(3, 5), 1);
        assert_eq!(gcd(3, 6), 3);
        assert_eq!(gcd(6, 4), 2);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
    }

    #[test]
    fn lcm_of_small_numbers() {
        assert_eq!(checked_lcm(3, 5), Some(15));
        assert_eq!(checked_lcm(3, 6), Some(6));
        assert_eq!(checked_lcm(4, 6), Some(12));
        assert_eq!(checked_lcm(0, 6), Some(0));
    }

    #[test]
    fn lcm_overflow() {
        assert_eq!(checked_lcm(u64::MAX, u64::MAX), Some(u64::MAX));
        assert_eq!(checked_lcm(u64::MAX, 2), None);
        assert_eq!(checked_lcm(1 << 32, (1 << 32) + 1), None);
    }

    #[test]
    fn lcm_of_cycle_lengths() {
        assert_eq!(checked_lcm_iter(std::iter::empty()), Some(1));
        assert_eq!(checked_lcm_iter([2, 3, 4].into_iter()), Some(12));
        assert_eq!(checked_lcm_iter([5, 7, 1].into_iter()), Some(35));

        let primes = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];
        assert_eq!(
            checked_lcm_iter(primes.into_iter()),
            Some(614_889_782_588_491_410)
        );
        assert_eq!(checked_lcm_iter(primes.into_iter().chain([53])), None);
    }
}
