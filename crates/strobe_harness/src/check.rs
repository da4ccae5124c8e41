//! Output checking and mismatch records.
//!
//! The checker is the sole point where a test case can fail. It samples an
//! output pin and compares by exact equality against the precomputed
//! expected value; a disagreement produces a [`Mismatch`] carrying enough
//! context to diagnose the trial without re-running it.

use crate::error::HarnessError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use strobe_common::{PinValue, SimTime};
use strobe_dut::Dut;

/// A recorded disagreement between the device and the reference model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// The checked output pin.
    pub pin: String,
    /// What the reference model predicted.
    pub expected: PinValue,
    /// What the device actually showed.
    pub actual: PinValue,
    /// The input assignments that produced this trial.
    pub inputs: BTreeMap<String, PinValue>,
    /// Simulated time of the check.
    pub at: SimTime,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} at {}, expected {} (inputs:",
            self.pin, self.actual, self.at, self.expected
        )?;
        for (name, value) in &self.inputs {
            write!(f, " {name}={value}")?;
        }
        write!(f, ")")
    }
}

/// Samples `pin` and compares it against `expected`.
///
/// Returns `Ok(None)` on agreement, `Ok(Some(mismatch))` on disagreement.
/// Only boundary misuse is an error; a mismatch is recorded data.
pub fn check_output(
    dut: &dyn Dut,
    pin: &str,
    expected: PinValue,
    inputs: &BTreeMap<String, PinValue>,
) -> Result<Option<Mismatch>, HarnessError> {
    let actual = dut.sample(pin)?;
    if actual == expected {
        return Ok(None);
    }
    Ok(Some(Mismatch {
        pin: pin.to_string(),
        expected,
        actual,
        inputs: inputs.clone(),
        at: dut.now(),
    }))
}
