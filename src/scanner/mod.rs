mod pipeline;
mod walk;


pub use self::pipeline::{FileVerdict, ScanResult, examine_file, find_targets, relicense_targets};
pub use self::walk::{WalkResult, walk};
