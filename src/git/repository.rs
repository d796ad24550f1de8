use std::path::{Component, Path, PathBuf};

use git2::{ObjectType, Repository as Git2Repo, StatusOptions, Tree};

use crate::error::{Result, VupError};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
    workdir: PathBuf,
}

impl Git2Repository {
    /// Discover the repository containing the current directory
    pub fn open_current_directory() -> Result<Self> {
        Self::open(".")
    }

    /// Open or discover a git repository containing `path`
    ///
    /// Bare repositories have no working tree to bump and are rejected too.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)
            .map_err(|_| VupError::CurrentDirectoryIsNotAGitRepository)?;
        Self::from_git2(repo)
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Result<Self> {
        let workdir = repo
            .workdir()
            .ok_or(VupError::CurrentDirectoryIsNotAGitRepository)?;
        let workdir = workdir.canonicalize()?;
        tracing::debug!(workdir = %workdir.display(), "opened repository");

        Ok(Git2Repository { repo, workdir })
    }

    /// Path of `path` relative to the working tree, if it lies inside it
    fn relative_path(&self, path: &Path) -> Option<PathBuf> {
        let absolute = path.canonicalize().ok()?;
        absolute
            .strip_prefix(&self.workdir)
            .ok()
            .map(Path::to_path_buf)
    }

    fn head_tree(&self) -> Option<Tree<'_>> {
        let head = self.repo.head().ok()?;
        head.peel_to_tree().ok()
    }
}

impl super::Repository for Git2Repository {
    fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn is_dirty(&self) -> Result<bool> {
        let mut options = StatusOptions::new();
        options
            .include_untracked(false)
            .include_ignored(false)
            .exclude_submodules(true);

        let statuses = self.repo.statuses(Some(&mut options))?;
        let dirty = statuses.iter().any(|entry| {
            let status = entry.status();
            !status.is_empty() && !status.is_ignored()
        });

        Ok(dirty)
    }

    fn is_file_tracked(&self, path: &Path) -> Result<bool> {
        let Some(relative) = self.relative_path(path) else {
            return Ok(false);
        };
        let Some(mut tree) = self.head_tree() else {
            return Ok(false);
        };

        let components: Vec<_> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(name) => name.to_str(),
                _ => None,
            })
            .collect();
        let Some((file_name, dirs)) = components.split_last() else {
            return Ok(false);
        };

        for dir in dirs {
            let subtree = match tree.get_name(dir) {
                Some(entry) if entry.kind() == Some(ObjectType::Tree) => {
                    entry.to_object(&self.repo)?.peel_to_tree()?
                }
                _ => return Ok(false),
            };
            tree = subtree;
        }

        Ok(tree
            .get_name(file_name)
            .is_some_and(|entry| entry.kind() == Some(ObjectType::Blob)))
    }

    fn tag_exists(&self, name: &str) -> Result<bool> {
        let reference_name = format!("refs/tags/{}", name);

        match self.repo.find_reference(&reference_name) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(false),
            Err(e) if e.code() == git2::ErrorCode::InvalidSpec => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn stage_and_commit(&self, files: &[PathBuf], message: &str, dry_run: bool) -> Result<()> {
        if dry_run {
            return Ok(());
        }

        let mut index = self.repo.index()?;
        for file in files {
            let relative = self
                .relative_path(file)
                .ok_or_else(|| VupError::FileIsNotUnderRevisionControl(file.clone()))?;
            index.add_path(&relative)?;
        }
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;
        let signature = self.repo.signature()?;
        let parent = self.repo.head()?.peel_to_commit()?;

        let oid = self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &[&parent],
        )?;
        tracing::debug!(%oid, "created commit");

        Ok(())
    }

    fn create_tag(&self, name: &str, message: &str, dry_run: bool) -> Result<()> {
        if dry_run {
            return Ok(());
        }

        let head = self.repo.head()?.peel_to_commit()?;
        let signature = self.repo.signature()?;
        let oid = self
            .repo
            .tag(name, head.as_object(), &signature, message, false)?;
        tracing::debug!(%oid, tag = name, "created annotated tag");

        Ok(())
    }
}
