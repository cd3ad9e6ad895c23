pub mod error;
pub use error::Error;

pub mod run_grouper;
pub use run_grouper::{RunGrouper, RunGrouperConfig};
