//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic for a bump.
//! Progress goes to stdout, errors to stderr.

use console::style;

use crate::domain::Version;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Text of the commit recorded when files move from `from` to `to`.
pub fn commit_message(from: &Version, to: &Version) -> String {
    format!("Increment version from {} to {}", from, to)
}

/// Text of the annotated release tag.
pub fn tag_message(version: &Version) -> String {
    format!("Version {}", version)
}

/// Print a commit message, marked when it is only previewed.
pub fn display_commit(message: &str, dry_run: bool) {
    if dry_run {
        println!("{} {}", style("[dry run]").dim(), message);
    } else {
        println!("{}", message);
    }
}

/// Print the tag about to be created.
pub fn display_tag(name: &str, dry_run: bool) {
    let line = format!("Creating tag {}", style(name).cyan());
    if dry_run {
        println!("{} {}", style("[dry run]").dim(), line);
    } else {
        display_status(&line);
    }
}

/// Echo a hook command before it runs.
pub fn display_hook(hook: &str, command: &str, dry_run: bool) {
    let line = format!("Running {}: {}", hook, style(command).bold());
    if dry_run {
        println!("{} {}", style("[dry run]").dim(), line);
    } else {
        display_status(&line);
    }
}

/// Print captured hook output, indented.
pub fn display_hook_output(output: &str) {
    for line in output.lines() {
        println!("  {}", line);
    }
}

/// Summarize a finished bump.
pub fn display_summary(release: &Version, prerelease: &Version, dry_run: bool) {
    if dry_run {
        display_status(&format!(
            "Dry run complete: would release {} and continue at {}",
            release, prerelease
        ));
    } else {
        display_success(&format!(
            "Released {} and continued at {}",
            style(release).green(),
            prerelease
        ));
    }
}
