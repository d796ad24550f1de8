//! User interface module - terminal output for a bump.
//!
//! `formatter` holds the display functions; they are re-exported here so
//! callers can write `ui::display_error(..)`.

pub mod formatter;

pub use formatter::{
    commit_message, display_commit, display_error, display_hook, display_hook_output,
    display_status, display_success, display_summary, display_tag, tag_message,
};
