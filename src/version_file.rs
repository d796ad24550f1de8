use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::{self, ExtractError, Version};
use crate::error::{Result, VupError};

/// A text file holding exactly one semantic version number.
///
/// The parsed version is derived from `content` whenever content is read or
/// replaced, so it always describes the text this value holds.
#[derive(Debug, Clone)]
pub struct VersionFile {
    path: PathBuf,
    content: String,
    version: Version,
}

impl VersionFile {
    /// Read `path` and parse its version number.
    ///
    /// # Returns
    /// * `Ok(VersionFile)` - The file holds exactly one version number
    /// * `Err(VersionFileDoesNotExist)` - The path is not a regular file
    /// * `Err(NoVersionNumber | MultipleVersionNumbers)` - The content is unusable
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(VupError::VersionFileDoesNotExist(path));
        }

        let content = fs::read_to_string(&path)?;
        let version = parse_content(&path, &content)?;
        tracing::debug!(path = %path.display(), %version, "loaded version file");

        Ok(VersionFile {
            path,
            content,
            version,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The version held by this file's current content
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Replace the version number with `new_version`.
    ///
    /// Unless `dry_run` is set the whole file is rewritten. The in-memory
    /// content and version are updated either way, so a dry run still
    /// reports the intended post-bump state.
    pub fn replace_version(&mut self, new_version: &Version, dry_run: bool) -> Result<()> {
        let new_content = domain::replace_first(&self.content, new_version);

        if dry_run {
            tracing::debug!(path = %self.path.display(), %new_version, "dry run, file left untouched");
        } else {
            write_atomically(&self.path, &new_content)?;
            tracing::debug!(path = %self.path.display(), %new_version, "rewrote version file");
        }

        self.version = parse_content(&self.path, &new_content)?;
        self.content = new_content;
        Ok(())
    }
}

fn parse_content(path: &Path, content: &str) -> Result<Version> {
    match domain::find_single_version(content) {
        Ok(found) => Ok(found.version),
        Err(ExtractError::NoVersionNumber) => Err(VupError::NoVersionNumber(path.to_path_buf())),
        Err(ExtractError::MultipleVersionNumbers) => {
            Err(VupError::MultipleVersionNumbers(path.to_path_buf()))
        }
    }
}

/// Write through a sibling temporary file and rename it over `path`,
/// keeping the original permissions.
fn write_atomically(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let permissions = fs::metadata(path)?.permissions();

    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(content.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.as_file().set_permissions(permissions)?;
    temp.persist(path).map_err(|e| VupError::Io(e.error))?;

    Ok(())
}
