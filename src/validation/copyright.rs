use crate::config::Config;
use crate::models::Rejection;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::Serialize;
use std::fmt;

lazy_static! {
    // Any run of four digits is taken to be a year.
    static ref YEAR_PATTERN: Regex = Regex::new(r"[0-9]{4}").expect("Invalid year regex");
}

const COPYRIGHT_KEYWORDS: &[&str] = &["Copyright", "COPYRIGHT"];

/// The year token and holder name taken from one copyright line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyrightTuple {
    pub year: String,
    pub holder: String,
}

impl fmt::Display for CopyrightTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.year, self.holder)
    }
}

/// Split a copyright line at its first year-like token.
///
/// Surrounding whitespace and periods are stripped first, then the line is
/// split on single spaces. The holder is everything after the year token,
/// re-joined with single spaces. Lines without a four-digit token yield
/// `None`.
pub fn extract_copyright_tuple(line: &str) -> Option<CopyrightTuple> {
    let tokens: Vec<&str> = line.trim().trim_matches('.').split(' ').collect();
    let year_index = tokens
        .iter()
        .position(|token| YEAR_PATTERN.is_match(token))?;

    Some(CopyrightTuple {
        year: tokens[year_index].to_string(),
        holder: tokens[year_index + 1..].join(" "),
    })
}

/// Lines of `content` mentioning a copyright, `Copyright` matches first and
/// then `COPYRIGHT` matches, each trimmed of surrounding whitespace.
pub fn copyright_lines(content: &str) -> Vec<&str> {
    COPYRIGHT_KEYWORDS
        .iter()
        .flat_map(|keyword| {
            content
                .lines()
                .filter(move |line| line.contains(keyword))
                .map(str::trim)
        })
        .collect()
}

/// Copyright tuples of every copyright line that carries a year.
pub fn extract_copyright_tuples(content: &str) -> Vec<CopyrightTuple> {
    copyright_lines(content)
        .into_iter()
        .filter_map(|line| {
            let tuple = extract_copyright_tuple(line);
            if tuple.is_none() {
                debug!("No year found in copyright line {:?}", line);
            }
            tuple
        })
        .collect()
}

/// Fail on the first tuple whose holder is not allow-listed.
pub fn validate_copyright_holders(
    tuples: &[CopyrightTuple],
    config: &Config,
) -> Result<(), Rejection> {
    match tuples
        .iter()
        .find(|tuple| !config.is_allowed_holder(&tuple.holder))
    {
        Some(tuple) => Err(Rejection::UnknownCopyrightHolder(tuple.holder.clone())),
        None => Ok(()),
    }
}
