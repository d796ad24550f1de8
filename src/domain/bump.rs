//! Release and prerelease version calculation
//!
//! Everything here is pure: the same input always yields the same version.

use std::fmt;
use std::str::FromStr;

use semver::Prerelease;

use crate::domain::Version;
use crate::error::{Result, VupError};

/// Identifier written into the version that opens the next development cycle
pub const PRERELEASE_IDENTIFIER: &str = "beta";

/// Which version component a bump increments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl BumpKind {
    pub fn name(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        }
    }
}

impl FromStr for BumpKind {
    type Err = VupError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            _ => Err(VupError::BumpTypeIsInvalid(s.to_string())),
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute the release version a bump produces.
///
/// - **Major**: major += 1, minor = 0, patch = 0
/// - **Minor**: minor += 1, patch = 0
/// - **Patch**: patch += 1 on a release; on a prerelease the prerelease is
///   finalized instead, so `1.2.4-beta` releases as `1.2.4`
///
/// The result never carries prerelease or build metadata.
///
/// # Example
/// ```
/// use vup::domain::{next_release, BumpKind, Version};
///
/// let v = Version::parse("1.2.3-beta").unwrap();
/// assert_eq!(next_release(&v, BumpKind::Major).to_string(), "2.0.0");
/// assert_eq!(next_release(&v, BumpKind::Patch).to_string(), "1.2.3");
/// ```
pub fn next_release(version: &Version, kind: BumpKind) -> Version {
    match kind {
        BumpKind::Major => Version::new(version.major + 1, 0, 0),
        BumpKind::Minor => Version::new(version.major, version.minor + 1, 0),
        BumpKind::Patch if version.prerelease().is_empty() => {
            Version::new(version.major, version.minor, version.patch + 1)
        }
        BumpKind::Patch => version.to_release(),
    }
}

/// Compute the prerelease version that follows a release: the next patch,
/// labelled [`PRERELEASE_IDENTIFIER`].
pub fn next_prerelease(release: &Version) -> Version {
    let mut next = Version::new(release.major, release.minor, release.patch + 1);
    next.pre = beta();
    next
}

fn beta() -> Prerelease {
    // A fixed alphanumeric identifier always parses.
    Prerelease::new(PRERELEASE_IDENTIFIER).unwrap_or(Prerelease::EMPTY)
}
