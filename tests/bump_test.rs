// tests/bump_test.rs
mod common;

use common::TestRepo;
use std::env;
use std::path::PathBuf;

use serial_test::serial;
use vup::cli::{run_bump, BumpRequest};
use vup::git::Git2Repository;
use vup::{VersionFile, VupError};

const DEFAULT_INPUT_VERSION: &str = "1.2.3-beta";
const DEFAULT_OUTPUT_VERSION_MAJOR: &str = "2.0.1-beta";
const DEFAULT_OUTPUT_VERSION_MINOR: &str = "1.3.1-beta";
const DEFAULT_OUTPUT_VERSION_PATCH: &str = "1.2.4-beta";

fn bump_in(
    test_repo: &TestRepo,
    files: &[PathBuf],
    kind: &str,
    prehook: Option<&str>,
    posthook: Option<&str>,
) -> vup::Result<vup::BumpOutcome> {
    let request = BumpRequest::new(
        files,
        kind,
        prehook.map(str::to_string),
        posthook.map(str::to_string),
        false,
    )?;
    let repo = Git2Repository::open(test_repo.path())?;
    run_bump(&repo, &request)
}

fn file_version(path: &PathBuf) -> String {
    VersionFile::load(path).unwrap().version().to_string()
}

#[test]
fn test_bump_major_from_prerelease() {
    let test_repo = TestRepo::init(DEFAULT_INPUT_VERSION, &["version.txt"]);
    let file = test_repo.version_file();

    bump_in(&test_repo, &[file.clone()], "major", None, None).unwrap();

    assert_eq!(file_version(&file), DEFAULT_OUTPUT_VERSION_MAJOR);
    assert_eq!(test_repo.tags(), vec!["2.0.0".to_string()]);

    let history = test_repo.history();
    assert_eq!(history[0], "Increment version from 2.0.0 to 2.0.1-beta");
    assert_eq!(history[1], "Increment version from 1.2.3-beta to 2.0.0");
    assert_eq!(history[2], "Version Commit");
}

#[test]
fn test_bump_major_from_release() {
    let test_repo = TestRepo::init("1.2.3", &["version.txt"]);
    let file = test_repo.version_file();

    bump_in(&test_repo, &[file.clone()], "major", None, None).unwrap();

    assert_eq!(file_version(&file), "2.0.1-beta");
}

#[test]
fn test_bump_minor() {
    let test_repo = TestRepo::init(DEFAULT_INPUT_VERSION, &["version.txt"]);
    let file = test_repo.version_file();

    bump_in(&test_repo, &[file.clone()], "minor", None, None).unwrap();

    assert_eq!(file_version(&file), DEFAULT_OUTPUT_VERSION_MINOR);
    assert_eq!(test_repo.tags(), vec!["1.3.0".to_string()]);
}

#[test]
fn test_bump_patch_from_release() {
    let test_repo = TestRepo::init("1.2.3", &["version.txt"]);
    let file = test_repo.version_file();

    bump_in(&test_repo, &[file.clone()], "patch", None, None).unwrap();

    assert_eq!(file_version(&file), DEFAULT_OUTPUT_VERSION_PATCH);
    assert_eq!(test_repo.tags(), vec!["1.2.4".to_string()]);
}

#[test]
fn test_bump_patch_finalizes_prerelease() {
    let test_repo = TestRepo::init(DEFAULT_INPUT_VERSION, &["version.txt"]);
    let file = test_repo.version_file();

    bump_in(&test_repo, &[file.clone()], "patch", None, None).unwrap();

    assert_eq!(test_repo.tags(), vec!["1.2.3".to_string()]);
    assert_eq!(file_version(&file), DEFAULT_OUTPUT_VERSION_PATCH);
}

#[test]
fn test_bump_prerelease_identifier_starting_with_digit() {
    let test_repo = TestRepo::init("version = 0.1.0-dev.5e3f1a\n", &["version.txt"]);
    let file = test_repo.version_file();

    bump_in(&test_repo, &[file.clone()], "patch", None, None).unwrap();

    assert_eq!(test_repo.tags(), vec!["0.1.0".to_string()]);
    assert_eq!(test_repo.read(&file), "version = 0.1.1-beta\n");
}

#[test]
fn test_versions_differing_after_leading_digit_do_not_match() {
    let test_repo = TestRepo::init("1.0.0-dev.5a", &["a.txt", "b.txt"]);
    test_repo.write("b.txt", "1.0.0-dev.5b");
    test_repo.commit(&["b.txt"], "Diverge");

    let err = bump_in(&test_repo, &test_repo.version_files, "major", None, None).unwrap_err();
    assert!(matches!(err, VupError::FilesDontHaveMatchingVersions(_)));
}

#[test]
fn test_repeated_bumps_keep_releasing() {
    let test_repo = TestRepo::init("0.1.0", &["version.txt"]);
    let file = test_repo.version_file();

    bump_in(&test_repo, &[file.clone()], "patch", None, None).unwrap();
    bump_in(&test_repo, &[file.clone()], "patch", None, None).unwrap();

    let mut tags = test_repo.tags();
    tags.sort();
    assert_eq!(tags, vec!["0.1.1".to_string(), "0.1.2".to_string()]);
    assert_eq!(file_version(&file), "0.1.3-beta");
}

#[test]
fn test_dirty_bump() {
    let test_repo = TestRepo::init(DEFAULT_INPUT_VERSION, &["version.txt"]);
    let file = test_repo.version_file();
    test_repo.append("version.txt", "modifications");

    let err = bump_in(&test_repo, &[file.clone()], "major", None, None).unwrap_err();

    assert!(matches!(err, VupError::RepositoryHasUncommitedChanges));
    assert_eq!(
        test_repo.read(&file),
        format!("{}modifications", DEFAULT_INPUT_VERSION)
    );
    assert!(test_repo.tags().is_empty());
}

#[test]
fn test_dirty_unrelated_file_blocks_bump() {
    let test_repo = TestRepo::init(DEFAULT_INPUT_VERSION, &["version.txt"]);
    let file = test_repo.version_file();
    test_repo.append("other.txt", " changed");

    let err = bump_in(&test_repo, &[file.clone()], "major", None, None).unwrap_err();

    assert!(matches!(err, VupError::RepositoryHasUncommitedChanges));
    assert_eq!(test_repo.read(&file), DEFAULT_INPUT_VERSION);
}

#[test]
fn test_with_a_version_file_that_isnt_under_git() {
    let test_repo = TestRepo::init(DEFAULT_INPUT_VERSION, &["version.txt"]);
    test_repo.write("uncommitted.txt", DEFAULT_INPUT_VERSION);
    let file = test_repo.path().join("uncommitted.txt");

    let err = bump_in(&test_repo, &[file], "major", None, None).unwrap_err();
    assert!(matches!(err, VupError::FileIsNotUnderRevisionControl(_)));
}

#[test]
fn test_repository_without_commits() {
    let test_repo = TestRepo::new();
    test_repo.write("version.txt", DEFAULT_INPUT_VERSION);
    let file = test_repo.path().join("version.txt");

    let err = bump_in(&test_repo, &[file], "major", None, None).unwrap_err();
    assert!(matches!(err, VupError::FileIsNotUnderRevisionControl(_)));
}

#[test]
fn test_empty_version_file() {
    let test_repo = TestRepo::init("", &["version.txt"]);
    let file = test_repo.version_file();

    let err = bump_in(&test_repo, &[file], "major", None, None).unwrap_err();
    assert!(matches!(err, VupError::NoVersionNumber(_)));
}

#[test]
fn test_multiple_version_numbers_in_file() {
    let test_repo = TestRepo::init("1.2.3-beta\ndepends on 4.5.6\n", &["version.txt"]);
    let file = test_repo.version_file();

    let err = bump_in(&test_repo, &[file.clone()], "major", None, None).unwrap_err();

    assert!(matches!(err, VupError::MultipleVersionNumbers(_)));
    assert_eq!(test_repo.read(&file), "1.2.3-beta\ndepends on 4.5.6\n");
    assert_eq!(test_repo.history().len(), 2);
}

#[test]
fn test_multi_line_file_bump() {
    let content = "[package]\nname = \"demo\"\nversion = \"1.2.3-beta\"\nedition = \"2021\"\n";
    let test_repo = TestRepo::init(content, &["Cargo.toml"]);
    let file = test_repo.version_file();

    bump_in(&test_repo, &[file.clone()], "minor", None, None).unwrap();

    assert_eq!(
        test_repo.read(&file),
        "[package]\nname = \"demo\"\nversion = \"1.3.1-beta\"\nedition = \"2021\"\n"
    );
}

#[test]
fn test_multiple_version_files() {
    let test_repo = TestRepo::init(DEFAULT_INPUT_VERSION, &["version.txt", "pkg/VERSION"]);
    let files = test_repo.version_files.clone();

    bump_in(&test_repo, &files, "major", None, None).unwrap();

    for file in &files {
        assert_eq!(file_version(file), DEFAULT_OUTPUT_VERSION_MAJOR);
    }
    assert_eq!(test_repo.history().len(), 4);
    assert_eq!(test_repo.tags(), vec!["2.0.0".to_string()]);
}

#[test]
fn test_multiple_version_files_where_one_does_not_exist() {
    let test_repo = TestRepo::init(DEFAULT_INPUT_VERSION, &["version.txt"]);
    let files = vec![test_repo.version_file(), test_repo.path().join("missing.txt")];

    let err = bump_in(&test_repo, &files, "major", None, None).unwrap_err();

    assert!(matches!(err, VupError::VersionFileDoesNotExist(_)));
    assert_eq!(test_repo.read(&files[0]), DEFAULT_INPUT_VERSION);
}

#[test]
fn test_multiple_version_files_where_versions_dont_match() {
    let test_repo = TestRepo::init(DEFAULT_INPUT_VERSION, &["version.txt"]);
    test_repo.write("other_version.txt", "1.2.4");
    test_repo.commit(&["other_version.txt"], "Other Version Commit");
    let files = vec![
        test_repo.version_file(),
        test_repo.path().join("other_version.txt"),
    ];

    let err = bump_in(&test_repo, &files, "major", None, None).unwrap_err();

    assert!(matches!(err, VupError::FilesDontHaveMatchingVersions(_)));
    assert_eq!(test_repo.read(&files[0]), DEFAULT_INPUT_VERSION);
    assert_eq!(test_repo.read(&files[1]), "1.2.4");
}

#[test]
fn test_passing_in_empty_list_of_version_files() {
    let test_repo = TestRepo::init(DEFAULT_INPUT_VERSION, &["version.txt"]);

    let err = bump_in(&test_repo, &[], "major", None, None).unwrap_err();
    assert!(matches!(err, VupError::NoVersionFilesProvided));
}

#[test]
fn test_invalid_bump_type() {
    let test_repo = TestRepo::init(DEFAULT_INPUT_VERSION, &["version.txt"]);
    let file = test_repo.version_file();

    let err = bump_in(&test_repo, &[file.clone()], "mega", None, None).unwrap_err();

    assert!(matches!(err, VupError::BumpTypeIsInvalid(_)));
    assert_eq!(test_repo.read(&file), DEFAULT_INPUT_VERSION);
}

#[test]
fn test_existing_release_tag() {
    let test_repo = TestRepo::init(DEFAULT_INPUT_VERSION, &["version.txt"]);
    let file = test_repo.version_file();
    let head = test_repo.repo.head().unwrap().peel_to_commit().unwrap();
    test_repo
        .repo
        .tag_lightweight("2.0.0", head.as_object(), false)
        .unwrap();

    let err = bump_in(&test_repo, &[file.clone()], "major", None, None).unwrap_err();

    assert!(matches!(err, VupError::VersionTagAlreadyExists(_)));
    assert_eq!(test_repo.read(&file), DEFAULT_INPUT_VERSION);
    assert_eq!(test_repo.history().len(), 2);
}

#[test]
fn test_pre_bump_hook() {
    let test_repo = TestRepo::init(DEFAULT_INPUT_VERSION, &["version.txt"]);
    let file = test_repo.version_file();

    bump_in(&test_repo, &[file.clone()], "major", Some("echo success"), None).unwrap();

    assert_eq!(file_version(&file), DEFAULT_OUTPUT_VERSION_MAJOR);
}

#[test]
fn test_failed_prehook() {
    let test_repo = TestRepo::init(DEFAULT_INPUT_VERSION, &["version.txt"]);
    let file = test_repo.version_file();

    let err = bump_in(
        &test_repo,
        &[file.clone()],
        "major",
        Some("not_a_real_command"),
        None,
    )
    .unwrap_err();

    assert!(matches!(err, VupError::PrehookFailed(_)));
    assert_eq!(file_version(&file), DEFAULT_INPUT_VERSION);
    assert!(test_repo.tags().is_empty());
    assert_eq!(test_repo.history().len(), 2);
}

#[test]
fn test_posthook() {
    let test_repo = TestRepo::init(DEFAULT_INPUT_VERSION, &["version.txt"]);
    let file = test_repo.version_file();

    bump_in(&test_repo, &[file.clone()], "major", None, Some("echo success")).unwrap();

    assert_eq!(file_version(&file), DEFAULT_OUTPUT_VERSION_MAJOR);
}

#[test]
fn test_failed_posthook() {
    let test_repo = TestRepo::init(DEFAULT_INPUT_VERSION, &["version.txt"]);
    let file = test_repo.version_file();

    let err = bump_in(
        &test_repo,
        &[file.clone()],
        "major",
        None,
        Some("not_a_real_command"),
    )
    .unwrap_err();

    assert!(matches!(err, VupError::PosthookFailed(_)));
    assert_eq!(file_version(&file), DEFAULT_OUTPUT_VERSION_MAJOR);
    assert_eq!(test_repo.tags(), vec!["2.0.0".to_string()]);
    assert_eq!(test_repo.history().len(), 4);
}

#[test]
fn test_dry_run_leaves_repository_untouched() {
    let test_repo = TestRepo::init(DEFAULT_INPUT_VERSION, &["version.txt"]);
    let file = test_repo.version_file();
    let request = BumpRequest::new(&[file.clone()], "major", None, None, true).unwrap();
    let repo = Git2Repository::open(test_repo.path()).unwrap();

    let outcome = run_bump(&repo, &request).unwrap();

    assert_eq!(outcome.release.to_string(), "2.0.0");
    assert_eq!(outcome.prerelease.to_string(), DEFAULT_OUTPUT_VERSION_MAJOR);
    assert_eq!(test_repo.read(&file), DEFAULT_INPUT_VERSION);
    assert!(test_repo.tags().is_empty());
    assert_eq!(test_repo.history().len(), 2);
}

#[test]
#[serial]
fn test_bump_from_current_directory() {
    let test_repo = TestRepo::init(DEFAULT_INPUT_VERSION, &["version.txt"]);
    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(test_repo.path()).expect("Could not change to temp dir");

    let result = vup::bump(&["version.txt"], "major", None, None, false);

    env::set_current_dir(original_dir).unwrap();
    let outcome = result.unwrap();
    assert_eq!(outcome.release.to_string(), "2.0.0");
    assert_eq!(file_version(&test_repo.version_file()), DEFAULT_OUTPUT_VERSION_MAJOR);
}

#[test]
#[serial]
fn test_not_in_a_git_repository() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("version.txt"), DEFAULT_INPUT_VERSION).unwrap();
    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).expect("Could not change to temp dir");

    let result = vup::bump(&["version.txt"], "major", None, None, false);

    env::set_current_dir(original_dir).unwrap();
    assert!(matches!(
        result.unwrap_err(),
        VupError::CurrentDirectoryIsNotAGitRepository
    ));
}
