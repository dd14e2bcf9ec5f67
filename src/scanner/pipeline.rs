use crate::config::Config;
use crate::license::{RewriteOutcome, contains_marker, rewrite_file};
use crate::models::{Candidate, RejectedFile, Rejection, SkippedFile};
use crate::scanner::walk::walk;
use crate::utils::file::read_text_file;
use crate::validation::{
    HistorySource, extract_copyright_tuples, validate_authors, validate_copyright_holders,
};
use anyhow::{Context, Result};
use glob::Pattern;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Outcome of examining a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileVerdict {
    NoLegacyLicense,
    Rejected(Rejection),
    Accepted(Candidate),
}

#[derive(Debug, Default)]
pub struct ScanResult {
    pub targets: Vec<Candidate>,
    pub rejected: Vec<RejectedFile>,
    pub skipped: Vec<SkippedFile>,
    pub files_count: usize,
    pub excluded_count: usize,
}

impl ScanResult {
    pub fn target_paths(&self) -> impl Iterator<Item = &Path> {
        self.targets.iter().map(|target| target.path.as_path())
    }

    pub fn candidates_count(&self) -> usize {
        self.targets.len() + self.rejected.len()
    }
}

/// Decide whether the file at `path` may be relicensed.
///
/// Files without the legacy marker are never handed to `history`. Read and
/// history failures are returned as errors for the caller to record.
pub fn examine_file(
    path: &Path,
    config: &Config,
    history: &dyn HistorySource,
) -> Result<FileVerdict> {
    let buffer = read_text_file(path)?;
    // Markers and copyright keywords are ASCII, so a lossy decode of other
    // ASCII-compatible encodings still matches them.
    let content = String::from_utf8_lossy(&buffer);
    if !contains_marker(&content, &config.marker) {
        return Ok(FileVerdict::NoLegacyLicense);
    }

    let authors = history.authors(path)?;
    if let Err(rejection) = validate_authors(&authors, config) {
        return Ok(FileVerdict::Rejected(rejection));
    }

    let copyrights = extract_copyright_tuples(&content);
    if let Err(rejection) = validate_copyright_holders(&copyrights, config) {
        return Ok(FileVerdict::Rejected(rejection));
    }

    Ok(FileVerdict::Accepted(Candidate {
        path: path.to_path_buf(),
        authors,
        copyrights,
    }))
}

/// Walk `root` and sort every file into targets, rejections or skips.
///
/// Prints a diagnostic for each rejection and a summary block for each
/// accepted file.
pub fn find_targets<P: AsRef<Path>>(
    root: P,
    max_depth: usize,
    exclude_patterns: &[Pattern],
    config: &Config,
    history: &dyn HistorySource,
) -> Result<ScanResult> {
    let walked = walk(root, max_depth, exclude_patterns)?;
    let mut result = ScanResult {
        files_count: walked.files.len(),
        excluded_count: walked.excluded_count,
        ..ScanResult::default()
    };

    for path in walked.files {
        match examine_file(&path, config, history) {
            Ok(FileVerdict::NoLegacyLicense) => {}
            Ok(FileVerdict::Rejected(rejection)) => {
                println!("{}", rejection);
                debug!("Rejected {}: {}", path.display(), rejection);
                result.rejected.push(RejectedFile { path, rejection });
            }
            Ok(FileVerdict::Accepted(candidate)) => {
                print_candidate(&candidate);
                result.targets.push(candidate);
            }
            Err(e) => {
                warn!("Skipping {}: {:#}", path.display(), e);
                result.skipped.push(SkippedFile {
                    path,
                    reason: format!("{:#}", e),
                });
            }
        }
    }

    info!(
        "Examined {} files: {} targets, {} rejected, {} skipped",
        result.files_count,
        result.targets.len(),
        result.rejected.len(),
        result.skipped.len()
    );
    Ok(result)
}

fn print_candidate(candidate: &Candidate) {
    let authors: Vec<&str> = candidate.authors.iter().map(String::as_str).collect();
    let copyrights: Vec<String> = candidate.copyrights.iter().map(|c| c.to_string()).collect();

    println!("file {}", candidate.path.display());
    println!("authors {}", authors.join("\n"));
    println!("Copyrights [{}]", copyrights.join(", "));
}

/// Rewrite the legacy license of every target, stopping at the first failure.
pub fn relicense_targets(result: &ScanResult, config: &Config) -> Result<Vec<PathBuf>> {
    let mut rewritten = Vec::new();

    for path in result.target_paths() {
        let outcome = rewrite_file(path, config)
            .with_context(|| format!("relicense {}", path.display()))?;
        match outcome {
            RewriteOutcome::Rewritten { .. } => rewritten.push(path.to_path_buf()),
            RewriteOutcome::MarkerNotFound => {
                warn!("{} no longer carries the legacy license", path.display())
            }
        }
    }

    Ok(rewritten)
}
