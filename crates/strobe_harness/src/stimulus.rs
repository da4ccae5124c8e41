//! Validated stimulus application.
//!
//! The stimulus driver is the only component that writes through the DUT
//! boundary. Every write is validated against the pin's declared width
//! before the device sees it — an out-of-range write is undefined in the
//! external simulator, so it must die here.

use crate::error::HarnessError;
use strobe_common::{PinValue, SimDuration, SimTime};
use strobe_dut::Dut;

/// Applies input values to a device under test.
pub struct Stimulus<'d> {
    dut: &'d mut dyn Dut,
}

impl<'d> Stimulus<'d> {
    /// Wraps a device for stimulus application.
    pub fn new(dut: &'d mut dyn Dut) -> Self {
        Self { dut }
    }

    /// Validates `raw` against the pin's declared width and drives it.
    ///
    /// The write takes effect immediately in the device's input state; a
    /// [`settle`](Stimulus::settle) must follow before any dependent check.
    /// Returns the validated value for the trial record.
    pub fn drive(&mut self, pin: &str, raw: u64) -> Result<PinValue, HarnessError> {
        let width = self.dut.pin(pin)?.width;
        let value = PinValue::new(raw, width).map_err(strobe_dut::DutError::from)?;
        self.dut.drive(pin, value)?;
        Ok(value)
    }

    /// Advances simulated time by `quantum`, letting the circuit propagate.
    pub fn settle(&mut self, quantum: SimDuration) -> Result<SimTime, HarnessError> {
        Ok(self.dut.advance(quantum)?)
    }
}
