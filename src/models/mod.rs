mod candidate;
mod output;

pub use candidate::{Candidate, RejectedFile, Rejection, SkippedFile};
pub use output::{ExtraData, Header, Output, REPORT_FORMAT_VERSION};
