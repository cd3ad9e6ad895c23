use crate::types::{IntegerSet, SimilarityScore};

/// Compute the Jaccard similarity between two integer sets.
///
/// Defined as `|A ∩ B| / |A ∪ B|` using exact set cardinalities. Returns 0.0
/// when both sets are empty.
pub fn jaccard_similarity(a: &IntegerSet, b: &IntegerSet) -> SimilarityScore {
    let intersection_size = a.intersection(b).count();
    let union_size = a.union(b).count();

    if union_size == 0 {
        0.0 // Avoid division by zero if both sets are empty
    } else {
        intersection_size as SimilarityScore / union_size as SimilarityScore
    }
}
