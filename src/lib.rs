mod config;
pub use config::{DEFAULT_RUN_GROUPER_CONFIG, LOSSLESS_RUN_GROUPER_CONFIG};
pub mod models;
pub use models::{Error, RunGrouper, RunGrouperConfig};
pub mod types;
mod utils;
pub use types::{
    GroupKey, IntegerSet, KeyGroup, PairwiseSimilarity, RecordId, RecordSetMap, SimilarityScore,
};
pub use utils::{jaccard_similarity, read_record_sets_from_path};

/// Load `identifier<TAB>int,int,...` records from a file and compute the
/// Jaccard similarity of every ordered pair of distinct identifiers.
pub fn compute_pairwise_similarities(file_path: &str) -> Result<Vec<PairwiseSimilarity>, Error> {
    let record_sets = read_record_sets_from_path(file_path)?;

    Ok(pairwise_similarities(&record_sets))
}

/// Compute the Jaccard similarity of every ordered pair of distinct
/// identifiers in the map. Both `(a, b)` and `(b, a)` are produced; an
/// identifier is never paired with itself. Iteration follows the map's
/// insertion order, so results are reproducible across runs.
pub fn pairwise_similarities(record_sets: &RecordSetMap) -> Vec<PairwiseSimilarity> {
    let mut results = Vec::new();

    for (id_a, set_a) in record_sets {
        for (id_b, set_b) in record_sets {
            if id_a != id_b {
                results.push((id_a.clone(), id_b.clone(), jaccard_similarity(set_a, set_b)));
            }
        }
    }

    results
}

/// Group contiguous runs of the secondary key using the compatibility
/// behavior (`DEFAULT_RUN_GROUPER_CONFIG`): run-boundary records are dropped
/// and the trailing run is never emitted.
pub fn group_records_by_key(file_path: &str) -> Result<Vec<KeyGroup>, Error> {
    let key_groups = group_records_by_key_with_custom_config(DEFAULT_RUN_GROUPER_CONFIG, file_path)?;

    Ok(key_groups)
}

/// Group contiguous runs of the secondary key with an explicit grouping
/// configuration. Records stream through a `RunGrouper`; the file is never
/// materialized in memory.
pub fn group_records_by_key_with_custom_config(
    config: &RunGrouperConfig,
    file_path: &str,
) -> Result<Vec<KeyGroup>, Error> {
    let mut run_grouper = RunGrouper::new(config);
    run_grouper.process_tsv_file(file_path)?;

    Ok(run_grouper.finish())
}
