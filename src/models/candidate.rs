use crate::validation::CopyrightTuple;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

/// A file carrying the legacy license, annotated during validation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub authors: BTreeSet<String>,
    pub copyrights: Vec<CopyrightTuple>,
}

/// Why a candidate was kept out of the target set.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", content = "identity", rename_all = "snake_case")]
pub enum Rejection {
    UnknownAuthor(String),
    UnknownCopyrightHolder(String),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::UnknownAuthor(author) => write!(f, "Did not find author: {}", author),
            Rejection::UnknownCopyrightHolder(holder) => {
                write!(f, "Did not find copyright holder: {}", holder)
            }
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RejectedFile {
    pub path: PathBuf,
    pub rejection: Rejection,
}

/// A file that could not be examined and was left alone.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}
