//! Stimulus-and-check verification harness for simulated digital circuits.
//!
//! The harness drives named input pins on a device under test, waits for a
//! settle quantum of simulated time, and compares observed outputs against a
//! pure software reference model. It knows nothing about how the circuit is
//! evaluated — that lives behind the [`Dut`](strobe_dut::Dut) boundary.
//!
//! # Execution modes
//!
//! A [`Harness`] is constructed with an explicit [`ExecMode`]: `Live`
//! attaches to an externally provided device (a running simulator session),
//! `Model` drives an in-process double evaluating the reference model
//! itself. The second mode is what makes suites runnable — and the crate
//! importable — without a simulator installation.
//!
//! # Modules
//!
//! - `model` — the [`ReferenceModel`] seam
//! - `adder` — the canonical adder model and its two-case suite
//! - `stimulus` — validated pin writes and settle waits
//! - `check` — output comparison and mismatch records
//! - `suite` — case sequencing, randomized trials, reporting

#![warn(missing_docs)]

pub mod adder;
pub mod check;
pub mod error;
pub mod model;
pub mod stimulus;
pub mod suite;

pub use adder::{adder_suite, AdderModel};
pub use check::Mismatch;
pub use error::HarnessError;
pub use model::{model_dut, ReferenceModel};
pub use stimulus::Stimulus;
pub use suite::{CaseKind, CaseOutcome, ExecMode, Harness, Suite, SuiteReport, TestCase};
