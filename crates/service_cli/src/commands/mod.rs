//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write to the
//! supplied writer so output can be captured.

pub mod analyze;
pub mod bench;
pub mod check;
pub mod generate;
