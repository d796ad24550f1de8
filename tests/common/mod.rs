// Shared helpers for integration tests
#![allow(dead_code)]

use git2::Repository;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary git repository holding `other.txt` and one or more version files
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
    pub version_files: Vec<PathBuf>,
}

impl TestRepo {
    /// Initialize an empty repository with a configured committer
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(dir.path()).expect("Could not init git repo");
        {
            let mut config = repo.config().expect("Could not get config");
            config
                .set_str("user.name", "Test User")
                .expect("Could not set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Could not set user.email");
        }

        TestRepo {
            dir,
            repo,
            version_files: Vec::new(),
        }
    }

    /// Initial commit with `other.txt`, then a commit adding each version file
    pub fn init(version: &str, names: &[&str]) -> Self {
        let mut test_repo = Self::new();
        test_repo.write("other.txt", "other");
        test_repo.commit(&["other.txt"], "Initial Commit");

        for name in names {
            test_repo.write(name, version);
            test_repo.version_files.push(test_repo.dir.path().join(name));
        }
        test_repo.commit(names, "Version Commit");
        test_repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn version_file(&self) -> PathBuf {
        self.version_files[0].clone()
    }

    pub fn write(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Could not create parent dir");
        }
        fs::write(path, content).expect("Could not write file");
    }

    pub fn append(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        let mut existing = fs::read_to_string(&path).unwrap_or_default();
        existing.push_str(content);
        fs::write(path, existing).expect("Could not append to file");
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).expect("Could not read file")
    }

    pub fn commit(&self, names: &[&str], message: &str) {
        let mut index = self.repo.index().expect("Could not get index");
        for name in names {
            index
                .add_path(Path::new(name))
                .expect("Could not add file to index");
        }
        index.write().expect("Could not write index");

        let tree_id = index.write_tree().expect("Could not write tree");
        let tree = self.repo.find_tree(tree_id).expect("Could not find tree");
        let sig = self.repo.signature().expect("Could not get sig");

        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Could not create commit");
    }

    /// Commit messages from HEAD backwards
    pub fn history(&self) -> Vec<String> {
        let mut revwalk = self.repo.revwalk().expect("Could not walk");
        revwalk
            .set_sorting(git2::Sort::TOPOLOGICAL)
            .expect("Could not sort");
        if revwalk.push_head().is_err() {
            return Vec::new();
        }
        revwalk
            .map(|oid| {
                let commit = self.repo.find_commit(oid.unwrap()).unwrap();
                commit.message().unwrap_or_default().to_string()
            })
            .collect()
    }

    pub fn tags(&self) -> Vec<String> {
        self.repo
            .tag_names(None)
            .expect("Could not list tags")
            .iter()
            .flatten()
            .map(str::to_string)
            .collect()
    }
}
