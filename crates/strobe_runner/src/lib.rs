//! Build/run glue over external HDL simulator backends.
//!
//! This crate performs no verification: it resolves the HDL sources named
//! by the project configuration, synthesizes the backend-specific build and
//! run command lines (including the per-{backend, language} extra flags and
//! the output-style arguments), and hands them to the external tools. Tool
//! failures are propagated unmodified and never retried.
//!
//! Command synthesis is split from process execution so the planned argv
//! can be inspected and tested without a simulator installed.

#![warn(missing_docs)]

pub mod backend;
pub mod error;
pub mod invoke;
pub mod style;

pub use backend::{build_commands, check_combination, extra_build_args, run_command, CommandSpec};
pub use error::RunnerError;
pub use invoke::{execute, plan, SimPlan};
pub use style::OutputStyle;
