use cube_algebra::Permutation;
use itertools::Itertools;

fn random_permutation<const N: usize>(rng: &mut fastrand::Rng) -> Permutation<N> {
    let mut images = (1..=N).collect_vec();
    rng.shuffle(&mut images);
    Permutation::try_from_images(&images).unwrap()
}

fn random_permutations<const N: usize>(count: usize) -> Vec<Permutation<N>> {
    let mut rng = fastrand::Rng::with_seed(N as u64);
    (0..count).map(|_| random_permutation(&mut rng)).collect_vec()
}

#[test_log::test]
fn display_round_trips() {
    for a in random_permutations::<12>(100) {
        let canonical = a.to_string();
        let parsed = canonical.parse::<Permutation<12>>().unwrap();
        assert_eq!(parsed, a, "{canonical}");
        assert_eq!(parsed.to_string(), canonical);
    }
}

#[test_log::test]
fn composition_is_associative() {
    for (a, b, c) in random_permutations::<8>(60).into_iter().tuples() {
        assert_eq!((a * b) * c, a * (b * c));
    }
}

#[test_log::test]
fn identity_is_two_sided() {
    let e = Permutation::<8>::identity();

    for a in random_permutations::<8>(50) {
        assert_eq!(e * a, a);
        assert_eq!(a * e, a);
    }
}

#[test_log::test]
fn inverse_is_two_sided() {
    for a in random_permutations::<12>(50) {
        assert!((a.inverse() * a).is_identity());
        assert!((a * a.inverse()).is_identity());
        assert_eq!(a.inverse(), a.power(-1));
    }
}

#[test_log::test]
fn composition_applies_the_right_operand_first() {
    for (a, b) in random_permutations::<8>(40).into_iter().tuples() {
        let c = a * b;
        for x in 1..=8 {
            assert_eq!(c.of(x), a.of(b.of(x).unwrap()));
        }
    }
}

#[test_log::test]
fn order_is_minimal() {
    for a in random_permutations::<8>(50) {
        let order = a.order();

        assert!(a.power(0).is_identity());
        assert!(a.power(i64::try_from(order).unwrap()).is_identity());
        assert_eq!(40320 % order, 0);

        for k in 1..order {
            assert!(!a.power(i64::try_from(k).unwrap()).is_identity());
        }
    }
}

#[test_log::test]
fn power_matches_repeated_composition() {
    let mut rng = fastrand::Rng::with_seed(42);

    for a in random_permutations::<12>(30) {
        let k = rng.i64(-30..30);
        let base = if k < 0 { a.inverse() } else { a };
        let expected = (0..k.unsigned_abs()).fold(Permutation::identity(), |acc, _| acc * base);
        assert_eq!(a.power(k), expected, "{a} ^ {k}");
    }
}

#[test_log::test]
fn parity_is_a_homomorphism() {
    for (a, b) in random_permutations::<12>(60).into_iter().tuples() {
        let product_is_even = (a * b).parity() == a.parity();
        assert_eq!(product_is_even, b.parity() == cube_algebra::Parity::Even);
    }
}
