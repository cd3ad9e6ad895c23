
use setsim::{compute_pairwise_similarities, read_record_sets_from_path, Error, IntegerSet};
use std::collections::HashMap;
use test_utils::test_file_path;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_example_scores() {
        let results = compute_pairwise_similarities(&test_file_path("pairwise_basic.tsv"))
            .expect("Failed to compute similarities");

        // Intersection {2,3} over union {1,2,3,4}, emitted in both orders.
        assert_eq!(
            results,
            vec![
                ("x".to_string(), "y".to_string(), 0.5),
                ("y".to_string(), "x".to_string(), 0.5),
            ]
        );
    }

    #[test]
    fn test_symmetry_and_range() {
        let results = compute_pairwise_similarities(&test_file_path("pairwise_mixed.tsv"))
            .expect("Failed to compute similarities");

        let scores: HashMap<(String, String), f64> = results
            .iter()
            .map(|(a, b, score)| ((a.clone(), b.clone()), *score))
            .collect();

        for ((id_a, id_b), score) in &scores {
            assert!(
                (0.0..=1.0).contains(score),
                "Score for ({}, {}) out of range: {}",
                id_a,
                id_b,
                score
            );

            let mirrored = scores
                .get(&(id_b.clone(), id_a.clone()))
                .expect("Missing mirrored pair");
            assert_eq!(
                score, mirrored,
                "Asymmetric scores for ({}, {})",
                id_a, id_b
            );
        }
    }

    #[test]
    fn test_equal_sets_score_one() {
        let results = compute_pairwise_similarities(&test_file_path("pairwise_mixed.tsv"))
            .expect("Failed to compute similarities");

        // alpha and delta carry the same value set.
        let (_, _, score) = results
            .iter()
            .find(|(a, b, _)| a == "alpha" && b == "delta")
            .expect("Missing alpha/delta pair");
        assert_eq!(*score, 1.0);
    }

    #[test]
    fn test_disjoint_sets_score_zero() {
        let results = compute_pairwise_similarities(&test_file_path("pairwise_mixed.tsv"))
            .expect("Failed to compute similarities");

        let (_, _, score) = results
            .iter()
            .find(|(a, b, _)| a == "alpha" && b == "gamma")
            .expect("Missing alpha/gamma pair");
        assert_eq!(*score, 0.0);
    }

    #[test]
    fn test_every_ordered_pair_once_and_no_self_pairs() {
        let results = compute_pairwise_similarities(&test_file_path("pairwise_mixed.tsv"))
            .expect("Failed to compute similarities");

        // 4 identifiers produce 4 * 3 ordered pairs.
        assert_eq!(results.len(), 12);

        for (id_a, id_b, _) in &results {
            assert_ne!(id_a, id_b, "Identifier paired with itself: {}", id_a);
        }
    }

    #[test]
    fn test_duplicate_identifier_last_occurrence_wins() {
        let record_sets = read_record_sets_from_path(&test_file_path("pairwise_duplicate_id.tsv"))
            .expect("Failed to load record sets");

        // The repeated identifier keeps its original position but takes the
        // later value set.
        let ids: Vec<&String> = record_sets.keys().collect();
        assert_eq!(ids, vec!["x", "y"]);

        let expected: IntegerSet = [2, 3, 4].into_iter().collect();
        assert_eq!(record_sets.get("x"), Some(&expected));

        let results = compute_pairwise_similarities(&test_file_path("pairwise_duplicate_id.tsv"))
            .expect("Failed to compute similarities");

        // {2,3,4} and {9,10} share nothing.
        assert_eq!(
            results,
            vec![
                ("x".to_string(), "y".to_string(), 0.0),
                ("y".to_string(), "x".to_string(), 0.0),
            ]
        );
    }

    #[test]
    fn test_empty_input_emits_no_pairs() {
        let results = compute_pairwise_similarities(&test_file_path("pairwise_empty.tsv"))
            .expect("Failed to compute similarities");
        assert!(results.is_empty());
    }

    #[test]
    fn test_invalid_integer_token_fails() {
        let result = compute_pairwise_similarities(&test_file_path("pairwise_bad_token.tsv"));
        assert!(matches!(result, Err(Error::ParserError(_))));
    }

    #[test]
    fn test_missing_value_field_fails() {
        let result = compute_pairwise_similarities(&test_file_path("pairwise_missing_field.tsv"));
        assert!(matches!(result, Err(Error::ParserError(_))));
    }

    #[test]
    fn test_missing_input_file_fails() {
        let result = compute_pairwise_similarities(&test_file_path("does_not_exist.tsv"));
        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let first = compute_pairwise_similarities(&test_file_path("pairwise_mixed.tsv"))
            .expect("Failed to compute similarities");
        let second = compute_pairwise_similarities(&test_file_path("pairwise_mixed.tsv"))
            .expect("Failed to compute similarities");
        assert_eq!(first, second);
    }
}
