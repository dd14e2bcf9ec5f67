use super::{Candidate, RejectedFile, SkippedFile};
use serde::Serialize;

pub const REPORT_FORMAT_VERSION: &str = "1.0.0";

#[derive(Serialize, Debug)]
pub struct Output {
    pub headers: Vec<Header>,
    pub targets: Vec<Candidate>,
    pub rejected: Vec<RejectedFile>,
    pub skipped: Vec<SkippedFile>,
}

#[derive(Serialize, Debug)]
pub struct Header {
    pub start_timestamp: String,
    pub end_timestamp: String,
    pub duration: f64,
    pub root: String,
    pub modified: bool,
    pub extra_data: ExtraData,
    pub errors: Vec<String>,
    pub output_format_version: String,
}

#[derive(Serialize, Debug)]
pub struct ExtraData {
    pub files_count: usize,
    pub candidates_count: usize,
    pub targets_count: usize,
    pub excluded_count: usize,
}
