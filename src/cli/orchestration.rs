//! Version bump orchestration
//!
//! This module contains the bump transaction, kept apart from command-line
//! parsing so it can be driven programmatically against any [Repository].
//!
//! A bump walks through [BumpPhase]s in order. Any error stops it where it
//! is. Nothing is rolled back: an error after the release commit leaves that
//! commit (and possibly the tag) in place.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{next_prerelease, next_release, BumpKind, Version};
use crate::error::{Result, VupError};
use crate::git::Repository;
use crate::hooks::{HookContext, HookExecutor};
use crate::ui;
use crate::version_file::VersionFile;

/// Arguments for one bump
///
/// Built once per invocation and never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpRequest {
    /// Files holding the version, distinct, in the order given
    pub files: Vec<PathBuf>,

    /// Component to increment
    pub kind: BumpKind,

    /// Command run before anything changes
    pub prehook: Option<String>,

    /// Command run after both commits and the tag exist
    pub posthook: Option<String>,

    /// Preview mode - report every step without touching files or git
    pub dry_run: bool,
}

impl BumpRequest {
    /// Build a request from loosely typed input.
    ///
    /// The file list is checked before the bump type so an empty list always
    /// reports [VupError::NoVersionFilesProvided]. Repeated paths keep their
    /// first position.
    pub fn new<P: AsRef<Path>>(
        files: &[P],
        kind: &str,
        prehook: Option<String>,
        posthook: Option<String>,
        dry_run: bool,
    ) -> Result<Self> {
        if files.is_empty() {
            return Err(VupError::NoVersionFilesProvided);
        }
        let kind = kind.parse::<BumpKind>()?;

        let mut seen = HashSet::new();
        let files = files
            .iter()
            .map(|p| p.as_ref().to_path_buf())
            .filter(|p| seen.insert(p.clone()))
            .collect();

        Ok(BumpRequest {
            files,
            kind,
            prehook,
            posthook,
            dry_run,
        })
    }
}

/// Result of a successful bump
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    /// Version the files held before the bump
    pub previous: Version,

    /// Version committed and tagged
    pub release: Version,

    /// Version the files hold afterwards
    pub prerelease: Version,

    /// Files that were rewritten, in commit order
    pub files: Vec<PathBuf>,
}

/// Stages of a bump, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpPhase {
    Validating,
    PreHook,
    Releasing,
    Tagging,
    Prereleasing,
    PostHook,
    Done,
}

impl fmt::Display for BumpPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpPhase::Validating => "validating",
            BumpPhase::PreHook => "prehook",
            BumpPhase::Releasing => "releasing",
            BumpPhase::Tagging => "tagging",
            BumpPhase::Prereleasing => "prereleasing",
            BumpPhase::PostHook => "posthook",
            BumpPhase::Done => "done",
        };
        f.write_str(name)
    }
}

fn enter(phase: BumpPhase) {
    tracing::debug!(%phase, "entering bump phase");
}

/// Run a complete bump against `repo`.
///
/// 1. Validate: clean tree, every file exists, is tracked in HEAD and holds
///    one version, and all versions match
/// 2. Run the prehook
/// 3. Write the release version, commit
/// 4. Tag the release
/// 5. Write the next prerelease version, commit
/// 6. Run the posthook
///
/// # Arguments
/// * `repo` - Repository the files belong to
/// * `request` - What to bump and how
///
/// # Returns
/// * `Ok(BumpOutcome)` - Versions involved and the files rewritten
/// * `Err` - The first error hit; see the module docs for what it leaves behind
pub fn run_bump<R: Repository>(repo: &R, request: &BumpRequest) -> Result<BumpOutcome> {
    enter(BumpPhase::Validating);
    let (mut files, current) = validate(repo, request)?;

    enter(BumpPhase::PreHook);
    if let Some(ref command) = request.prehook {
        let context = HookContext::prehook(request.kind, &current);
        if !HookExecutor::run(command, &context, request.dry_run) {
            return Err(VupError::PrehookFailed(command.clone()));
        }
    }

    enter(BumpPhase::Releasing);
    let release = next_release(&current, request.kind);
    if repo.tag_exists(&release.to_string())? {
        return Err(VupError::VersionTagAlreadyExists(release.to_string()));
    }
    rewrite_and_commit(repo, &mut files, &current, &release, request.dry_run)?;

    enter(BumpPhase::Tagging);
    let tag = release.to_string();
    ui::display_tag(&tag, request.dry_run);
    repo.create_tag(&tag, &ui::tag_message(&release), request.dry_run)?;

    enter(BumpPhase::Prereleasing);
    let prerelease = next_prerelease(&release);
    rewrite_and_commit(repo, &mut files, &release, &prerelease, request.dry_run)?;

    enter(BumpPhase::PostHook);
    if let Some(ref command) = request.posthook {
        let context = HookContext::posthook(request.kind, &current, &release, &prerelease);
        if !HookExecutor::run(command, &context, request.dry_run) {
            return Err(VupError::PosthookFailed(command.clone()));
        }
    }

    enter(BumpPhase::Done);
    ui::display_summary(&release, &prerelease, request.dry_run);

    Ok(BumpOutcome {
        previous: current,
        release,
        prerelease,
        files: files.iter().map(|f| f.path().to_path_buf()).collect(),
    })
}

/// Check every precondition without changing anything.
///
/// Returns the loaded files in request order and their shared version.
fn validate<R: Repository>(repo: &R, request: &BumpRequest) -> Result<(Vec<VersionFile>, Version)> {
    if request.files.is_empty() {
        return Err(VupError::NoVersionFilesProvided);
    }

    if repo.is_dirty()? {
        return Err(VupError::RepositoryHasUncommitedChanges);
    }

    let mut files: Vec<VersionFile> = Vec::with_capacity(request.files.len());
    for path in &request.files {
        if !path.is_file() {
            return Err(VupError::VersionFileDoesNotExist(path.clone()));
        }
        let absolute = path.canonicalize()?;
        if files.iter().any(|f| f.path() == absolute.as_path()) {
            continue;
        }
        if !absolute.starts_with(repo.workdir()) || !repo.is_file_tracked(&absolute)? {
            return Err(VupError::FileIsNotUnderRevisionControl(path.clone()));
        }
        files.push(VersionFile::load(&absolute)?);
    }

    // `request.files` is non-empty and every path either loads or errors.
    let Some(first) = files.first() else {
        return Err(VupError::NoVersionFilesProvided);
    };
    let current = first.version().clone();
    if files.iter().any(|f| f.version() != &current) {
        return Err(VupError::FilesDontHaveMatchingVersions(
            request.files.clone(),
        ));
    }

    tracing::debug!(%current, count = files.len(), "version files validated");
    Ok((files, current))
}

fn rewrite_and_commit<R: Repository>(
    repo: &R,
    files: &mut [VersionFile],
    from: &Version,
    to: &Version,
    dry_run: bool,
) -> Result<()> {
    for file in files.iter_mut() {
        file.replace_version(to, dry_run)?;
    }

    let message = ui::commit_message(from, to);
    ui::display_commit(&message, dry_run);

    let paths: Vec<PathBuf> = files.iter().map(|f| f.path().to_path_buf()).collect();
    repo.stage_and_commit(&paths, &message, dry_run)
}
