pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod hooks;
pub mod ui;
pub mod version_file;

use std::path::Path;

pub use cli::{run_bump, BumpOutcome, BumpRequest};
pub use domain::{BumpKind, Version};
pub use error::{Result, VupError};
pub use version_file::VersionFile;

/// Bump the version held by `files` in the repository containing the
/// current directory.
///
/// Relative paths resolve against the current directory. On success the
/// files hold the next prerelease version and history has gained a release
/// commit, a release tag and a prerelease commit.
///
/// # Example
/// ```no_run
/// vup::bump(&["version.txt"], "minor", None, None, false)?;
/// # Ok::<(), vup::VupError>(())
/// ```
pub fn bump<P: AsRef<Path>>(
    files: &[P],
    kind: &str,
    prehook: Option<String>,
    posthook: Option<String>,
    dry_run: bool,
) -> Result<BumpOutcome> {
    let request = BumpRequest::new(files, kind, prehook, posthook, dry_run)?;
    let repo = git::Git2Repository::open_current_directory()?;
    run_bump(&repo, &request)
}
