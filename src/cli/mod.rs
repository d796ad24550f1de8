//! Command-line facing workflow

pub mod orchestration;

pub use orchestration::{run_bump, BumpOutcome, BumpPhase, BumpRequest};
