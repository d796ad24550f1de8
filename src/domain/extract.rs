//! Locating semantic version numbers inside arbitrary text

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::Version;

/// A version number found in text
#[derive(Debug, Clone, PartialEq)]
pub struct VersionMatch {
    /// The exact substring that matched
    pub text: String,
    pub version: Version,
    /// Byte offsets of `text` within the searched string
    pub span: Range<usize>,
}

/// Why a text could not yield a single version number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    NoVersionNumber,
    MultipleVersionNumbers,
}

// The leading group keeps `01.2.3` or `pkg.1.2.3` from matching part-way
// through. Alphanumeric prerelease identifiers come before numeric ones so
// `5e3f1a` is not cut short at `5`.
const VERSION_PATTERN: &str = concat!(
    r"(?:^|[^0-9.])",
    r"(?P<version>",
    r"(?:0|[1-9][0-9]*)\.(?:0|[1-9][0-9]*)\.(?:0|[1-9][0-9]*)",
    r"(?:-(?:[0-9]*[A-Za-z-][0-9A-Za-z-]*|0|[1-9][0-9]*)(?:\.(?:[0-9]*[A-Za-z-][0-9A-Za-z-]*|0|[1-9][0-9]*))*)?",
    r"(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?",
    r")",
);

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VERSION_PATTERN).expect("version pattern is valid"))
}

fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-'
}

// A match directly followed by an identifier character, or by a dot that
// continues into one, is only part of a longer token (`1.2.3-01`, `1.2.3.4`).
fn ends_cleanly(text: &str, end: usize) -> bool {
    let rest = &text.as_bytes()[end..];
    match rest {
        [] => true,
        [b'.', next, ..] if is_identifier_byte(*next) => false,
        [next, ..] => !is_identifier_byte(*next),
    }
}

/// Find every version number in `text`, in order of appearance.
///
/// A version must stand on its own: one preceded by a digit or `.`, or
/// running straight into more identifier text, is skipped.
pub fn find_versions(text: &str) -> Vec<VersionMatch> {
    version_regex()
        .captures_iter(text)
        .filter_map(|captures| {
            let m = captures.name("version")?;
            if !ends_cleanly(text, m.end()) {
                return None;
            }
            let version = Version::parse(m.as_str()).ok()?;
            Some(VersionMatch {
                text: m.as_str().to_string(),
                version,
                span: m.range(),
            })
        })
        .collect()
}

/// Find the one version number in `text`.
pub fn find_single_version(text: &str) -> Result<VersionMatch, ExtractError> {
    let mut matches = find_versions(text).into_iter();
    match (matches.next(), matches.next()) {
        (None, _) => Err(ExtractError::NoVersionNumber),
        (Some(found), None) => Ok(found),
        (Some(_), Some(_)) => Err(ExtractError::MultipleVersionNumbers),
    }
}

/// Canonical text for a version
pub fn render(version: &Version) -> String {
    version.to_string()
}

/// Substitute the first version number in `text` with `new_version`,
/// leaving every other byte untouched. Text without a version is returned
/// unchanged.
pub fn replace_first(text: &str, new_version: &Version) -> String {
    match find_versions(text).into_iter().next() {
        Some(found) => {
            let mut replaced = String::with_capacity(text.len());
            replaced.push_str(&text[..found.span.start]);
            replaced.push_str(&render(new_version));
            replaced.push_str(&text[found.span.end..]);
            replaced
        }
        None => text.to_string(),
    }
}
