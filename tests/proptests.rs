use proptest::prelude::*;
use radix_rs::radix::*;

fn reference(values: &[i64]) -> Vec<i64> {
    let mut sorted = values.to_vec();
    sorted.sort();
    sorted
}

proptest! {
    #[test]
    fn prop_partitioned_matches_reference(
        values in prop::collection::vec(any::<i64>(), 0..512),
        base in 2usize..=300,
    ) {
        let sorted = sort_partitioned(&values, base);
        prop_assert!(is_sorted(&sorted));
        prop_assert!(is_permutation(&sorted, &values));
        prop_assert_eq!(sorted, reference(&values));
    }

    #[test]
    fn prop_strategies_agree(
        values in prop::collection::vec(-1_000_000i32..1_000_000, 0..512),
        base in 2usize..=64,
    ) {
        prop_assert_eq!(sort_partitioned(&values, base), sort_sign_flip(&values, base));
    }

    #[test]
    fn prop_worker_count_does_not_change_output(
        values in prop::collection::vec(any::<i16>(), 0..2048),
        base in 2usize..=20,
        workers in 2usize..=8,
    ) {
        prop_assert_eq!(
            sort_sign_flip_with_workers(&values, base, 1),
            sort_sign_flip_with_workers(&values, base, workers)
        );
    }

    #[test]
    fn prop_boundary_values_included(
        mut values in prop::collection::vec(any::<i64>(), 0..64),
        base in 2usize..=16,
    ) {
        values.extend([i64::MIN, i64::MIN + 1, i64::MAX, 0, -1]);
        let expected = reference(&values);
        prop_assert_eq!(sort_partitioned(&values, base), expected.clone());
        prop_assert_eq!(sort_sign_flip(&values, base), expected);
    }

    #[test]
    fn prop_base_below_two_is_noop(
        values in prop::collection::vec(any::<i32>(), 0..64),
        base in 0usize..2,
    ) {
        prop_assert_eq!(sort_partitioned(&values, base), values.clone());
        prop_assert_eq!(sort_sign_flip(&values, base), values);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    // Large inputs drawn from a wide signed range, checked against a
    // comparison sort.
    #[test]
    fn prop_large_inputs_match_reference(
        values in prop::collection::vec(-1_000_000_000_000i64..1_000_000_000_000, 10_000),
        base in prop::sample::select(vec![2usize, 10, 16, 256]),
    ) {
        let expected = reference(&values);
        prop_assert_eq!(sort_partitioned(&values, base), expected.clone());
        prop_assert_eq!(sort_sign_flip(&values, base), expected.clone());
        prop_assert_eq!(sort_sign_flip_with_workers(&values, base, 4), expected);
    }
}
