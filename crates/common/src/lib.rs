//! Shared building blocks for the workspace: response envelopes and logging setup.

pub mod types;
pub mod utils;
