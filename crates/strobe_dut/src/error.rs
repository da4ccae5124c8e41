//! Error types for the device-under-test boundary.
//!
//! Every misuse of the boundary is caught on the harness side, before the
//! external simulator sees anything — out-of-range or misdirected writes are
//! undefined behavior in the simulator and must never be issued.

use strobe_common::ValueError;

/// Errors that can occur when crossing the DUT boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DutError {
    /// The named pin is not declared by the device under test.
    #[error("no pin named '{0}' on the device under test")]
    UnknownPin(String),

    /// Attempted to drive a pin the circuit owns.
    #[error("pin '{0}' is an output and cannot be driven")]
    NotAnInput(String),

    /// The value's width does not match the pin's declared width.
    #[error("pin '{pin}' is {declared} bit(s) wide, got a {got}-bit value")]
    WidthMismatch {
        /// The pin name.
        pin: String,
        /// The pin's declared width.
        declared: u32,
        /// The width of the offending value.
        got: u32,
    },

    /// A pin value failed its range invariant.
    #[error(transparent)]
    Value(#[from] ValueError),
}
