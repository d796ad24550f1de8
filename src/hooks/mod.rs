//! Hook commands for extensibility
//!
//! Allows users to run a shell command at two points of a bump:
//! - prehook: before any file or repository change, gating the bump
//! - posthook: after the release commit, tag and prerelease commit

pub mod executor;
pub mod lifecycle;

pub use executor::HookExecutor;
pub use lifecycle::{HookContext, HookType};
