//! Legacy license boilerplate detection and replacement.

mod detector;
mod rewriter;


pub use detector::{contains_marker, marker_line_index};
pub use rewriter::{Rewrite, RewriteOutcome, rewrite_bytes, rewrite_file, rewrite_text};
