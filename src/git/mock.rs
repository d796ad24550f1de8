use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::git::Repository;

/// A commit recorded by [MockRepository]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCommit {
    pub message: String,
    pub files: Vec<PathBuf>,
}

/// A tag recorded by [MockRepository]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedTag {
    pub name: String,
    pub message: String,
}

/// Mock repository for testing without actual git operations
///
/// Commits and tags are recorded instead of written so tests can assert on
/// what a bump did.
pub struct MockRepository {
    workdir: PathBuf,
    dirty: bool,
    tracked: HashSet<PathBuf>,
    existing_tags: HashSet<String>,
    commits: RefCell<Vec<RecordedCommit>>,
    tags: RefCell<Vec<RecordedTag>>,
}

impl MockRepository {
    /// Create a new clean mock repository rooted at `workdir`
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        MockRepository {
            workdir: workdir.into(),
            dirty: false,
            tracked: HashSet::new(),
            existing_tags: HashSet::new(),
            commits: RefCell::new(Vec::new()),
            tags: RefCell::new(Vec::new()),
        }
    }

    /// Mark the working tree as having uncommitted changes
    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    /// Add a path to the HEAD tree
    pub fn track(&mut self, path: impl Into<PathBuf>) {
        self.tracked.insert(path.into());
    }

    /// Add a tag that existed before any bump
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.existing_tags.insert(name.into());
    }

    /// Commits created so far, oldest first
    pub fn commits(&self) -> Vec<RecordedCommit> {
        self.commits.borrow().clone()
    }

    /// Tags created so far, oldest first
    pub fn tags(&self) -> Vec<RecordedTag> {
        self.tags.borrow().clone()
    }
}

impl Repository for MockRepository {
    fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn is_dirty(&self) -> Result<bool> {
        Ok(self.dirty)
    }

    fn is_file_tracked(&self, path: &Path) -> Result<bool> {
        Ok(self.tracked.contains(path))
    }

    fn tag_exists(&self, name: &str) -> Result<bool> {
        Ok(self.existing_tags.contains(name) || self.tags.borrow().iter().any(|t| t.name == name))
    }

    fn stage_and_commit(&self, files: &[PathBuf], message: &str, dry_run: bool) -> Result<()> {
        if !dry_run {
            self.commits.borrow_mut().push(RecordedCommit {
                message: message.to_string(),
                files: files.to_vec(),
            });
        }
        Ok(())
    }

    fn create_tag(&self, name: &str, message: &str, dry_run: bool) -> Result<()> {
        if !dry_run {
            self.tags.borrow_mut().push(RecordedTag {
                name: name.to_string(),
                message: message.to_string(),
            });
        }
        Ok(())
    }
}
