pub mod cli;
pub mod config;
pub mod license;
pub mod models;
pub mod scanner;
pub mod utils;
pub mod validation;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use models::{Candidate, RejectedFile, Rejection, SkippedFile};
pub use scanner::{ScanResult, find_targets, relicense_targets};
pub use validation::{GitHistory, HistorySource};
