//! Genetic operators on Lehmer-coded choices.
//!
//! Both operators act on the fixed-length gene vector of an
//! [`EncodedChoice`] and always return a valid code: every gene is pulled
//! back into its position-legal range after splicing, so decoding a child
//! can never fail or seat a person twice.
//!
//! - [`point_mutation`]: overwrite one random gene with a random legal value, O(1)
//! - [`splice`] / [`splice_crossover`]: one-point cut-and-splice of two parents, O(n)

use rand::Rng;

use crate::codec::EncodedChoice;

/// Overwrites one random gene with a uniformly drawn legal value.
///
/// A choice over zero people is left untouched.
pub fn point_mutation<R: Rng + ?Sized>(choice: &mut EncodedChoice, rng: &mut R) {
    let n = choice.people();
    if n == 0 {
        return;
    }
    let position = rng.random_range(0..n);
    let value = rng.random_range(0..EncodedChoice::bound(n, position));
    choice.set_gene_clamped(position, value);
}

/// Joins `left[..cut]` with `right[cut..]`, clamping every gene to its range.
///
/// # Panics
/// Panics if the parents have different lengths or `cut` exceeds their length.
pub fn splice(left: &EncodedChoice, right: &EncodedChoice, cut: usize) -> EncodedChoice {
    let n = left.people();
    assert_eq!(n, right.people(), "parents must have equal length");
    assert!(cut <= n, "cut point {cut} beyond length {n}");

    let mut genes = Vec::with_capacity(n);
    genes.extend_from_slice(&left.genes()[..cut]);
    genes.extend_from_slice(&right.genes()[cut..]);
    EncodedChoice::clamped(genes)
}

/// Splices two parents at a random cut point in `1..n`.
///
/// Parents shorter than two genes cannot be cut; a copy of `left` is
/// returned instead.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn splice_crossover<R: Rng + ?Sized>(
    left: &EncodedChoice,
    right: &EncodedChoice,
    rng: &mut R,
) -> EncodedChoice {
    let n = left.people();
    assert_eq!(n, right.people(), "parents must have equal length");
    if n < 2 {
        return left.clone();
    }
    let cut = rng.random_range(1..n);
    splice(left, right, cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn is_valid(choice: &EncodedChoice) -> bool {
        EncodedChoice::validate(choice.genes()).is_ok()
    }

    #[test]
    fn test_point_mutation_changes_at_most_one_gene() {
        let mut rng = create_rng(42);
        let original = EncodedChoice::random(12, &mut rng);
        for _ in 0..200 {
            let mut mutated = original.clone();
            point_mutation(&mut mutated, &mut rng);
            assert!(is_valid(&mutated));
            let diff = original
                .genes()
                .iter()
                .zip(mutated.genes())
                .filter(|(a, b)| a != b)
                .count();
            assert!(diff <= 1, "changed {diff} genes");
        }
    }

    #[test]
    fn test_point_mutation_empty_is_noop() {
        let mut rng = create_rng(1);
        let mut choice = EncodedChoice::first(0);
        point_mutation(&mut choice, &mut rng);
        assert_eq!(choice.people(), 0);
    }

    #[test]
    fn test_splice_takes_prefix_and_suffix() {
        let left = EncodedChoice::new(vec![3, 2, 1, 0]).unwrap();
        let right = EncodedChoice::new(vec![0, 0, 0, 0]).unwrap();
        assert_eq!(splice(&left, &right, 2).genes(), &[3, 2, 0, 0]);
        assert_eq!(splice(&left, &right, 0).genes(), right.genes());
        assert_eq!(splice(&left, &right, 4).genes(), left.genes());
    }

    #[test]
    fn test_splice_crossover_children_valid() {
        let mut rng = create_rng(7);
        for _ in 0..200 {
            let a = EncodedChoice::random(9, &mut rng);
            let b = EncodedChoice::random(9, &mut rng);
            let child = splice_crossover(&a, &b, &mut rng);
            assert!(is_valid(&child));
            assert_eq!(child.decode().people(), 9);
        }
    }

    #[test]
    fn test_splice_crossover_single_gene() {
        let mut rng = create_rng(7);
        let a = EncodedChoice::first(1);
        let child = splice_crossover(&a, &a, &mut rng);
        assert_eq!(child, a);
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_splice_length_mismatch_panics() {
        splice(&EncodedChoice::first(3), &EncodedChoice::first(4), 1);
    }
}
