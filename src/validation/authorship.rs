use crate::config::Config;
use crate::models::Rejection;
use anyhow::{Context, Result, bail};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Source of the people who changed a file over its history.
pub trait HistorySource {
    /// Deduplicated `"<name> <email>"` entries, one per contributor.
    fn authors(&self, path: &Path) -> Result<BTreeSet<String>>;
}

/// Reads authorship from `git log`, run from inside the repository.
#[derive(Debug, Clone)]
pub struct GitHistory {
    repo_root: PathBuf,
}

impl GitHistory {
    pub fn new<P: Into<PathBuf>>(repo_root: P) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }
}

impl HistorySource for GitHistory {
    fn authors(&self, path: &Path) -> Result<BTreeSet<String>> {
        // The path goes in as its own argument; no shell is involved.
        let output = Command::new("git")
            .args(["log", "--pretty=format:%an %ae", "--"])
            .arg(path)
            .current_dir(&self.repo_root)
            .output()
            .with_context(|| format!("run git log for {}", path.display()))?;

        if !output.status.success() {
            bail!(
                "git log failed for {} ({}): {}",
                path.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(parse_author_lines(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Collect non-empty history lines into a sorted, deduplicated set.
pub fn parse_author_lines(output: &str) -> BTreeSet<String> {
    output
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Fail on the first author, in sorted order, missing from the allow-list.
pub fn validate_authors(authors: &BTreeSet<String>, config: &Config) -> Result<(), Rejection> {
    match authors
        .iter()
        .find(|author| !author.is_empty() && !config.is_allowed_author(author))
    {
        Some(author) => Err(Rejection::UnknownAuthor(author.clone())),
        None => Ok(()),
    }
}
