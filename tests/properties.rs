//! Randomized property checks for the codec, queue and cost model.

use proptest::prelude::*;
use roommate_search::codec::{decode, EncodedChoice};
use roommate_search::cost::{Cost, CostModel, PreferenceTable};
use roommate_search::local::LocalSwapSearch;
use roommate_search::queue::BoundedTopKQueue;

/// Raw values folded into a legal Lehmer code.
fn lehmer_code() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(any::<usize>(), 1..40).prop_map(|raw| {
        let n = raw.len();
        raw.into_iter()
            .enumerate()
            .map(|(i, r)| r % (n - i))
            .collect()
    })
}

fn weights(people: usize) -> impl Strategy<Value = Vec<Cost>> {
    prop::collection::vec(-20i64..20, people * people)
}

fn model_from(people: usize, raw: &[Cost]) -> CostModel {
    PreferenceTable::from_fn(people, |a, b| raw[a * people + b]).into()
}

proptest! {
    #[test]
    fn test_every_legal_code_decodes_to_a_permutation(genes in lehmer_code()) {
        let n = genes.len();
        let assignment = decode(&genes).unwrap();
        let mut seats = assignment.seats().to_vec();
        seats.sort_unstable();
        prop_assert_eq!(seats, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn test_out_of_range_gene_is_rejected(genes in lehmer_code(), position in any::<prop::sample::Index>()) {
        let n = genes.len();
        let position = position.index(n);
        let mut bad = genes;
        bad[position] = n - position;
        prop_assert!(decode(&bad).is_err());
        prop_assert!(EncodedChoice::new(bad).is_err());
    }

    #[test]
    fn test_queue_keeps_exactly_the_top_k(
        items in prop::collection::vec(-1000i32..1000, 0..200),
        capacity in 1usize..20,
    ) {
        let mut queue = BoundedTopKQueue::new(capacity).unwrap();
        for &item in &items {
            queue.insert(item);
            prop_assert!(queue.len() <= capacity);
        }

        let mut expected = items.clone();
        expected.sort_unstable();
        let expected = expected[expected.len().saturating_sub(capacity)..].to_vec();
        prop_assert_eq!(queue.into_sorted_vec(), expected);
    }

    #[test]
    fn test_weights_are_symmetric(a in 0usize..50, b in 0usize..50, w in -100i64..100) {
        prop_assume!(a != b);
        let table = PreferenceTable::new().with_weight(a, b, w);
        prop_assert_eq!(table.weight(a, b), w);
        prop_assert_eq!(table.weight(b, a), w);
    }

    #[test]
    fn test_score_ignores_seat_order_within_rooms(
        genes in lehmer_code(),
        raw in weights(40),
    ) {
        let model = model_from(40, &raw);
        let assignment = decode(&genes).unwrap();
        prop_assert_eq!(model.score(&assignment), model.score(&assignment.normalized()));
        prop_assert_eq!(model.score(&assignment), model.score_seats(assignment.seats()));
    }

    #[test]
    fn test_local_pass_never_worsens(
        genes in lehmer_code(),
        raw in weights(40),
    ) {
        let model = model_from(40, &raw);
        let start = decode(&genes).unwrap();
        let start_cost = model.score(&start);
        let outcome = LocalSwapSearch::improve(&model, start);
        prop_assert!(outcome.cost <= start_cost);
        prop_assert_eq!(outcome.cost, model.score(&outcome.assignment));
    }
}
