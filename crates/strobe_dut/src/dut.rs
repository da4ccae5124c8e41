//! The [`Dut`] trait — the seam between the harness and a simulator.

use crate::error::DutError;
use crate::pin::PinSpec;
use strobe_common::{PinValue, SimDuration, SimTime};

/// A simulated device under test.
///
/// Implementations wrap whatever actually evaluates the circuit — an
/// attached external simulator session, or the in-process
/// [`ModelDut`](crate::ModelDut) used in standalone mode. The contract:
///
/// - Writes through [`drive`](Dut::drive) take effect immediately in the
///   device's input state, but combinational propagation is not
///   instantaneous in simulated time. A call to [`advance`](Dut::advance)
///   must separate a drive from any sample that depends on it.
/// - Simulated time is monotonic and moves only through `advance`.
pub trait Dut {
    /// Returns the pins declared by the device's toplevel.
    fn pins(&self) -> &[PinSpec];

    /// Drives an input pin to `value` immediately (no queuing).
    fn drive(&mut self, pin: &str, value: PinValue) -> Result<(), DutError>;

    /// Samples the current value of a pin.
    fn sample(&self, pin: &str) -> Result<PinValue, DutError>;

    /// Advances simulated time by `quantum` and returns the new instant.
    fn advance(&mut self, quantum: SimDuration) -> Result<SimTime, DutError>;

    /// Returns the current simulated time without advancing it.
    fn now(&self) -> SimTime;

    /// Looks up a declared pin by name.
    fn pin(&self, name: &str) -> Result<&PinSpec, DutError> {
        self.pins()
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| DutError::UnknownPin(name.to_string()))
    }
}
