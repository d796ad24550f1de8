//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the git operations a
//! version bump needs, allowing the bump itself to run against a real
//! repository or an in-memory mock.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations are:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! The bump orchestration depends on the [Repository] trait, never on a
//! concrete implementation.
//!
//! ```rust
//! # use vup::git::Repository;
//! # use std::path::Path;
//! # fn example<R: Repository>(repo: &R) -> vup::Result<()> {
//! if !repo.is_dirty()? && repo.is_file_tracked(Path::new("/work/version.txt"))? {
//!     println!("ready to bump");
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Git operations used by a version bump
///
/// ## Paths
///
/// Every path handed to a repository is absolute. Implementations resolve it
/// against their own working directory.
///
/// ## Dry runs
///
/// Mutating operations take a `dry_run` flag. A dry run computes and reports
/// everything but leaves the index, the refs and the object store alone.
pub trait Repository {
    /// Root of the working tree
    fn workdir(&self) -> &Path;

    /// Check for uncommitted changes to tracked files
    ///
    /// Untracked files do not count.
    fn is_dirty(&self) -> Result<bool>;

    /// Check whether `path` exists in the tree of the HEAD commit
    ///
    /// # Returns
    /// * `Ok(true)` - Every path component resolves through the HEAD tree
    /// * `Ok(false)` - A component is missing, the path lies outside the
    ///   working tree, or the repository has no commits yet
    fn is_file_tracked(&self, path: &Path) -> Result<bool>;

    /// Check whether a tag with this exact name exists
    fn tag_exists(&self, name: &str) -> Result<bool>;

    /// Stage exactly `files` and record one commit with `message`
    fn stage_and_commit(&self, files: &[PathBuf], message: &str, dry_run: bool) -> Result<()>;

    /// Create an annotated tag on HEAD
    fn create_tag(&self, name: &str, message: &str, dry_run: bool) -> Result<()>;
}
