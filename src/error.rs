use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for vup operations
///
/// Every variant raised while bumping names the offending data so the message
/// can be shown to the user as-is.
#[derive(Error, Debug)]
pub enum VupError {
    #[error("vup bump error: no version files provided")]
    NoVersionFilesProvided,

    #[error("vup bump error: version file {} does not exist", .0.display())]
    VersionFileDoesNotExist(PathBuf),

    #[error("vup bump error: {} is not under revision control", .0.display())]
    FileIsNotUnderRevisionControl(PathBuf),

    #[error("vup bump error: the current directory is not a Git repository")]
    CurrentDirectoryIsNotAGitRepository,

    #[error("vup bump error: repository has uncommited changes")]
    RepositoryHasUncommitedChanges,

    #[error("vup bump error: {} does not have a version number", .0.display())]
    NoVersionNumber(PathBuf),

    #[error("vup bump error: {} contains multiple version numbers", .0.display())]
    MultipleVersionNumbers(PathBuf),

    #[error("vup bump error: version numbers in {} don't match", display_paths(.0))]
    FilesDontHaveMatchingVersions(Vec<PathBuf>),

    #[error("vup bump error: bump type {0} is invalid")]
    BumpTypeIsInvalid(String),

    #[error("vup bump error: tag version {0} already exists")]
    VersionTagAlreadyExists(String),

    #[error("vup bump error: prehook {0} failed")]
    PrehookFailed(String),

    #[error("vup bump error: posthook {0} failed")]
    PosthookFailed(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in vup
pub type Result<T> = std::result::Result<T, VupError>;

impl VupError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VupError::Config(msg.into())
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    let names: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    format!("[{}]", names.join(", "))
}
