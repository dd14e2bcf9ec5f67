use crate::config::{Config, LICENSE_FILE_REFERENCE};
use crate::utils::file::{find_bytes, read_text_file};
use anyhow::{Context, Result};
use log::debug;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Result of replacing the legacy paragraph in a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: Vec<u8>,
    /// 0-based index of the line that now carries the notice.
    pub marker_line: usize,
    /// Number of license-reference lines dropped after the marker line.
    pub removed_lines: usize,
}

impl Rewrite {
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOutcome {
    Rewritten {
        marker_line: usize,
        removed_lines: usize,
    },
    MarkerNotFound,
}

/// Replace the first line containing `marker` with `notice`, keeping the
/// bytes that precede the marker on that line (usually a comment prefix).
///
/// Consecutive lines right after it that mention the license file are
/// removed. Every other byte is copied through unchanged, whatever the
/// file's encoding. Returns `None` when no line contains the marker.
pub fn rewrite_bytes(content: &[u8], marker: &[u8], notice: &[u8]) -> Option<Rewrite> {
    let mut lines: Vec<&[u8]> = content.split_inclusive(|byte| *byte == b'\n').collect();
    let marker_line = lines
        .iter()
        .position(|line| find_bytes(line, marker).is_some())?;

    let original = lines[marker_line];
    let lead_text = find_bytes(original, marker)
        .map(|offset| &original[..offset])
        .unwrap_or_default();

    // A marker on the final line leaves nothing to drop.
    let removed_lines = lines[marker_line + 1..]
        .iter()
        .take_while(|line| find_bytes(line, LICENSE_FILE_REFERENCE.as_bytes()).is_some())
        .count();
    lines.drain(marker_line + 1..marker_line + 1 + removed_lines);

    let mut rewritten = Vec::with_capacity(content.len());
    for (index, line) in lines.iter().enumerate() {
        if index == marker_line {
            rewritten.extend_from_slice(lead_text);
            rewritten.extend_from_slice(notice);
        } else {
            rewritten.extend_from_slice(line);
        }
    }

    Some(Rewrite {
        content: rewritten,
        marker_line,
        removed_lines,
    })
}

pub fn rewrite_text(content: &str, marker: &str, notice: &str) -> Option<Rewrite> {
    rewrite_bytes(content.as_bytes(), marker.as_bytes(), notice.as_bytes())
}

/// Rewrite the legacy paragraph of the file at `path` in place.
pub fn rewrite_file(path: &Path, config: &Config) -> Result<RewriteOutcome> {
    let content = read_text_file(path)?;

    let Some(rewrite) = rewrite_bytes(&content, config.marker.as_bytes(), config.notice.as_bytes())
    else {
        return Ok(RewriteOutcome::MarkerNotFound);
    };

    if rewrite.content != content {
        fs::write(path, &rewrite.content)
            .with_context(|| format!("write relicensed {}", path.display()))?;
    }
    debug!(
        "Rewrote {} at line {} ({} reference lines removed)",
        path.display(),
        rewrite.marker_line + 1,
        rewrite.removed_lines
    );

    Ok(RewriteOutcome::Rewritten {
        marker_line: rewrite.marker_line,
        removed_lines: rewrite.removed_lines,
    })
}
