//! Pin descriptors for the device-under-test boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a DUT pin as seen from the harness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinDirection {
    /// Driven by the harness, read by the circuit.
    Input,
    /// Driven by the circuit, sampled by the harness.
    Output,
}

/// A named, width-bounded pin exposed by the device under test.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinSpec {
    /// The pin name as declared in the HDL toplevel.
    pub name: String,
    /// Bit width of the pin.
    pub width: u32,
    /// Direction relative to the harness.
    pub direction: PinDirection,
}

impl PinSpec {
    /// Creates an input pin descriptor.
    pub fn input(name: impl Into<String>, width: u32) -> Self {
        Self {
            name: name.into(),
            width,
            direction: PinDirection::Input,
        }
    }

    /// Creates an output pin descriptor.
    pub fn output(name: impl Into<String>, width: u32) -> Self {
        Self {
            name: name.into(),
            width,
            direction: PinDirection::Output,
        }
    }

    /// Returns true if the harness may drive this pin.
    pub fn is_input(&self) -> bool {
        self.direction == PinDirection::Input
    }
}

impl fmt::Display for PinSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.direction {
            PinDirection::Input => "in",
            PinDirection::Output => "out",
        };
        write!(f, "{} {}[{}]", dir, self.name, self.width)
    }
}
