//! Leakage model: which query responses the adversary actually observes
//!
//! Two stages, applied to the raw box-response set before tokenization:
//!
//! 1. Inclusion filter: a response survives only if its cardinality is
//!    prime, with 1 counted as prime. This mirrors the reference model's
//!    inclusion criterion and has no evident security-model
//!    justification; it is preserved exactly for compatibility with
//!    reference results.
//! 2. Subsampling: each surviving response is kept independently with
//!    probability p/100, modeling an adversary that misses queries.
//!
//! Both stages are driven by a caller-supplied RNG so runs are
//! reproducible under a fixed seed.

use crate::grid::Point;
use rand::Rng;
use std::collections::BTreeSet;

/// Trial-division primality with the reference model's convention that
/// 1 is prime. 0 is not prime (and never occurs: boxes are never empty).
pub fn is_prime(n: usize) -> bool {
    match n {
        0 => false,
        1 | 2 => true,
        _ => (2..n).all(|d| n % d != 0),
    }
}

/// Apply the inclusion filter and subsampling in one pass.
///
/// `p` is an integer percentage in `[0, 100]`: 100 keeps every
/// prime-cardinality response, 0 keeps none.
pub fn filter_responses(
    responses: &BTreeSet<Vec<Point>>,
    p: u32,
    rng: &mut impl Rng,
) -> BTreeSet<Vec<Point>> {
    responses
        .iter()
        .filter(|r| is_prime(r.len()))
        .filter(|_| rng.gen_range(0..100u32) < p)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_primality_convention() {
        assert!(!is_prime(0));
        assert!(is_prime(1)); // reference-model convention
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(6));
        assert!(is_prime(7));
        assert!(!is_prime(9));
        assert!(is_prime(97));
        assert!(!is_prime(100));
    }

    #[test]
    fn test_full_retention_keeps_all_prime_responses() {
        let grid = Grid::new(4, 4, 2);
        let all = grid.box_responses(&grid.points());
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let kept = filter_responses(&all, 100, &mut rng);

        for r in &kept {
            assert!(is_prime(r.len()));
        }
        let expected: usize = all.iter().filter(|r| is_prime(r.len())).count();
        assert_eq!(kept.len(), expected);
    }

    #[test]
    fn test_zero_retention_keeps_nothing() {
        let grid = Grid::new(4, 4, 2);
        let all = grid.box_responses(&grid.points());
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(filter_responses(&all, 0, &mut rng).is_empty());
    }

    #[test]
    fn test_subsampling_is_seed_reproducible() {
        let grid = Grid::new(5, 5, 2);
        let all = grid.box_responses(&grid.points());

        let mut rng_a = ChaCha8Rng::seed_from_u64(1234);
        let mut rng_b = ChaCha8Rng::seed_from_u64(1234);
        let kept_a = filter_responses(&all, 50, &mut rng_a);
        let kept_b = filter_responses(&all, 50, &mut rng_b);
        assert_eq!(kept_a, kept_b);
    }
}
