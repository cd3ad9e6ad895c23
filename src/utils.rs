pub mod jaccard_similarity;
pub mod open_tsv_reader;
pub mod read_record_sets;

pub use jaccard_similarity::jaccard_similarity;
pub use open_tsv_reader::open_tsv_reader;
pub use read_record_sets::read_record_sets_from_path;
