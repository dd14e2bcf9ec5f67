//! Authorship and copyright checks deciding whether a file may be relicensed.
//!
//! Both checks compare against the allow-lists in [`Config`](crate::config::Config)
//! and stop at the first identity that is not listed.

mod authorship;
mod copyright;


pub use authorship::{GitHistory, HistorySource, parse_author_lines, validate_authors};
pub use copyright::{
    CopyrightTuple, copyright_lines, extract_copyright_tuple, extract_copyright_tuples,
    validate_copyright_holders,
};
