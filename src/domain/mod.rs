//! Domain logic - pure version rules independent of files and git

pub mod bump;
pub mod extract;
pub mod version;

pub use bump::{next_prerelease, next_release, BumpKind, PRERELEASE_IDENTIFIER};
pub use extract::{find_single_version, find_versions, render, replace_first, ExtractError, VersionMatch};
pub use version::Version;
