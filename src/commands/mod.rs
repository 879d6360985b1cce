//! Command handlers.
//!
//! This module contains handlers for the generate and verify commands.

pub mod generate;
pub mod verify;

pub use generate::run_generate;
pub use verify::run_verify;
