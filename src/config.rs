use std::collections::BTreeSet;

/// Phrase identifying the legacy license paragraph.
pub const LEGACY_LICENSE_MARKER: &str = "The license and distribution";

/// Notice written in place of the legacy paragraph.
pub const NEW_LICENSE_NOTICE: &str =
    "This file's license is 2-clause BSD as in this distribution's LICENSE.2 file.\n";

/// Substring identifying follow-up lines of the legacy paragraph.
pub const LICENSE_FILE_REFERENCE: &str = "LICENSE";

const DEFAULT_AUTHORS: &[&str] = &["Gedare Bloom gedare@rtems.org"];

const DEFAULT_COPYRIGHT_HOLDERS: &[&str] = &["Gedare Bloom", "Eugen Leontie"];

/// Settings shared by every stage of a relicensing run.
///
/// Allow-list membership is an exact string match: authors are
/// `"<name> <email>"` as printed by the history query, holders are the text
/// following the year on a copyright line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub authors: BTreeSet<String>,
    pub copyright_holders: BTreeSet<String>,
    pub marker: String,
    pub notice: String,
}

impl Config {
    pub fn new<A, H>(authors: A, copyright_holders: H) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        H: IntoIterator,
        H::Item: Into<String>,
    {
        Self {
            authors: authors.into_iter().map(Into::into).collect(),
            copyright_holders: copyright_holders.into_iter().map(Into::into).collect(),
            marker: LEGACY_LICENSE_MARKER.to_string(),
            notice: NEW_LICENSE_NOTICE.to_string(),
        }
    }

    pub fn is_allowed_author(&self, author: &str) -> bool {
        self.authors.contains(author)
    }

    pub fn is_allowed_holder(&self, holder: &str) -> bool {
        self.copyright_holders.contains(holder)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            DEFAULT_AUTHORS.iter().copied(),
            DEFAULT_COPYRIGHT_HOLDERS.iter().copied(),
        )
    }
}
