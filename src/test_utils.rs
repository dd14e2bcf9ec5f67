#[cfg(test)]
use crate::validation::HistorySource;
#[cfg(test)]
use anyhow::{Result, bail};
#[cfg(test)]
use std::collections::{BTreeSet, HashMap};
#[cfg(test)]
use std::fs;
#[cfg(test)]
use std::path::{Path, PathBuf};

/// History stub keyed by file name.
///
/// Files without an entry have an empty history; names listed in `failing`
/// make the lookup fail the way an unusable repository would.
#[cfg(test)]
#[derive(Default)]
pub struct StaticHistory {
    authors: HashMap<String, Vec<String>>,
    failing: Vec<String>,
}

#[cfg(test)]
impl StaticHistory {
    pub fn with_authors(mut self, file_name: &str, authors: &[&str]) -> Self {
        self.authors.insert(
            file_name.to_string(),
            authors.iter().map(|a| a.to_string()).collect(),
        );
        self
    }

    pub fn failing_for(mut self, file_name: &str) -> Self {
        self.failing.push(file_name.to_string());
        self
    }
}

#[cfg(test)]
impl HistorySource for StaticHistory {
    fn authors(&self, path: &Path) -> Result<BTreeSet<String>> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if self.failing.contains(&name) {
            bail!("no history available for {}", path.display());
        }

        Ok(self
            .authors
            .get(&name)
            .map(|authors| authors.iter().cloned().collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dirs");
    }
    fs::write(&path, content).expect("Failed to write test file");
    path
}
