//! Device-under-test boundary for the Strobe verification harness.
//!
//! The external simulator is an opaque collaborator: the harness only sees a
//! set of named, width-bounded pins and a simulated-time-advance primitive.
//! This crate defines that boundary as the [`Dut`] trait, the pin metadata
//! that travels across it, and the error taxonomy for misuse of the
//! boundary. It also provides [`ModelDut`], an in-process implementation
//! backed by a pure combinational function, which the harness uses for its
//! standalone execution mode and its own tests.

#![warn(missing_docs)]

pub mod dut;
pub mod error;
pub mod model;
pub mod pin;

pub use dut::Dut;
pub use error::DutError;
pub use model::ModelDut;
pub use pin::{PinDirection, PinSpec};
