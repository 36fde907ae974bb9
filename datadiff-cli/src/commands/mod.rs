//! Command implementations for the datadiff CLI
//!
//! Each command module provides a `run` function that executes the command logic.

pub mod compare;
pub mod show;
