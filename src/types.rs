use indexmap::IndexMap;
use std::collections::HashSet;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Identifier that keys a set of integers in the similarity input, represented
/// as an owned `String`.
pub type RecordId = String;

/// The set of integer values belonging to a single record. Duplicate values in
/// the input collapse here.
pub type IntegerSet = HashSet<i64>;

/// Mapping from record identifier to its integer set. An `IndexMap` keeps
/// insertion order, so pairwise output is reproducible across runs. Inserting
/// an existing identifier replaces its set but keeps its original position.
pub type RecordSetMap = IndexMap<RecordId, IntegerSet>;

/// A Jaccard similarity score in the range `[0.0, 1.0]`.
pub type SimilarityScore = f64;

/// One ordered pairwise result: `(id_a, id_b, score)` with `id_a != id_b`.
pub type PairwiseSimilarity = (RecordId, RecordId, SimilarityScore);

/// Secondary key that contiguous input runs are grouped by.
pub type GroupKey = String;

/// One completed group: the run's key and the primary keys collected for it,
/// in encounter order.
pub type KeyGroup = (GroupKey, Vec<RecordId>);
