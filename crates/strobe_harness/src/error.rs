//! Harness error types.
//!
//! A checker mismatch is *not* an error — it is recorded data in the suite
//! report, and execution continues to the next case. Errors here are the
//! fail-fast conditions: boundary misuse and model/pin disagreements that
//! make a run meaningless.

use strobe_dut::DutError;

/// Errors that abort a harness run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HarnessError {
    /// The DUT boundary rejected an operation.
    #[error(transparent)]
    Dut(#[from] DutError),

    /// The reference model did not produce a value for a checked output pin.
    #[error("reference model produced no value for output pin '{0}'")]
    MissingExpected(String),

    /// A live-mode run was started without an attached device.
    #[error("live mode requires an attached device under test")]
    NotAttached,
}
