//! In-process DUT backed by a pure combinational function.
//!
//! [`ModelDut`] is the device used by the harness's standalone execution
//! mode: instead of an attached simulator session, outputs are computed by a
//! software function of the current inputs. Propagation happens only when
//! simulated time advances, so the wait-before-check contract of the
//! [`Dut`] trait is observable here exactly as it is against real hardware
//! simulation: a sample taken before any advance sees the reset value.

use crate::dut::Dut;
use crate::error::DutError;
use crate::pin::PinSpec;
use std::collections::BTreeMap;
use strobe_common::{PinValue, SimDuration, SimTime};

/// A pure function from input assignments to raw output values.
///
/// Keys of the returned map are output pin names; values are truncated to
/// each pin's declared width when latched, mirroring what the hardware's
/// output port would show.
pub type CombinationalFn = dyn Fn(&BTreeMap<String, PinValue>) -> BTreeMap<String, u64>;

/// An in-process device under test evaluating a combinational function.
pub struct ModelDut {
    pins: Vec<PinSpec>,
    inputs: BTreeMap<String, PinValue>,
    outputs: BTreeMap<String, PinValue>,
    time: SimTime,
    eval: Box<CombinationalFn>,
}

impl ModelDut {
    /// Creates a model DUT with all pins reset to zero.
    ///
    /// Pin widths are validated up front; a declaration the value type
    /// cannot represent is rejected here rather than at first use.
    pub fn new(pins: Vec<PinSpec>, eval: Box<CombinationalFn>) -> Result<Self, DutError> {
        let mut inputs = BTreeMap::new();
        let mut outputs = BTreeMap::new();
        for pin in &pins {
            let zero = PinValue::zero(pin.width)?;
            if pin.is_input() {
                inputs.insert(pin.name.clone(), zero);
            } else {
                outputs.insert(pin.name.clone(), zero);
            }
        }
        Ok(Self {
            pins,
            inputs,
            outputs,
            time: SimTime::zero(),
            eval,
        })
    }
}

impl Dut for ModelDut {
    fn pins(&self) -> &[PinSpec] {
        &self.pins
    }

    fn drive(&mut self, pin: &str, value: PinValue) -> Result<(), DutError> {
        let spec = self.pin(pin)?;
        if !spec.is_input() {
            return Err(DutError::NotAnInput(pin.to_string()));
        }
        if value.width() != spec.width {
            return Err(DutError::WidthMismatch {
                pin: pin.to_string(),
                declared: spec.width,
                got: value.width(),
            });
        }
        self.inputs.insert(pin.to_string(), value);
        Ok(())
    }

    fn sample(&self, pin: &str) -> Result<PinValue, DutError> {
        let spec = self.pin(pin)?;
        let table = if spec.is_input() {
            &self.inputs
        } else {
            &self.outputs
        };
        table
            .get(pin)
            .copied()
            .ok_or_else(|| DutError::UnknownPin(pin.to_string()))
    }

    fn advance(&mut self, quantum: SimDuration) -> Result<SimTime, DutError> {
        self.time = self.time.after(quantum);
        let produced = (self.eval)(&self.inputs);
        for (name, raw) in produced {
            let Some(spec) = self.pins.iter().find(|p| p.name == name && !p.is_input()) else {
                return Err(DutError::UnknownPin(name));
            };
            self.outputs
                .insert(name, PinValue::truncated(raw, spec.width)?);
        }
        Ok(self.time)
    }

    fn now(&self) -> SimTime {
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adder_dut() -> ModelDut {
        let pins = vec![
            PinSpec::input("A", 4),
            PinSpec::input("B", 4),
            PinSpec::output("X", 5),
        ];
        ModelDut::new(
            pins,
            Box::new(|inputs| {
                let a = inputs["A"].bits();
                let b = inputs["B"].bits();
                BTreeMap::from([("X".to_string(), a + b)])
            }),
        )
        .unwrap()
    }

    #[test]
    fn resets_to_zero() {
        let dut = adder_dut();
        assert!(dut.sample("A").unwrap().is_zero());
        assert!(dut.sample("X").unwrap().is_zero());
        assert_eq!(dut.now(), SimTime::zero());
    }

    #[test]
    fn output_holds_until_advance() {
        let mut dut = adder_dut();
        dut.drive("A", PinValue::new(5, 4).unwrap()).unwrap();
        dut.drive("B", PinValue::new(10, 4).unwrap()).unwrap();
        // No advance yet: output still at reset value.
        assert_eq!(dut.sample("X").unwrap().bits(), 0);
        dut.advance(SimDuration::from_ns(2)).unwrap();
        assert_eq!(dut.sample("X").unwrap().bits(), 15);
    }

    #[test]
    fn advance_moves_time() {
        let mut dut = adder_dut();
        let t = dut.advance(SimDuration::from_ns(2)).unwrap();
        assert_eq!(t.fs, 2_000_000);
        let t = dut.advance(SimDuration::from_ns(2)).unwrap();
        assert_eq!(t.fs, 4_000_000);
        assert_eq!(dut.now(), t);
    }

    #[test]
    fn drive_unknown_pin() {
        let mut dut = adder_dut();
        let err = dut.drive("C", PinValue::new(1, 4).unwrap()).unwrap_err();
        assert_eq!(err, DutError::UnknownPin("C".into()));
    }

    #[test]
    fn drive_output_rejected() {
        let mut dut = adder_dut();
        let err = dut.drive("X", PinValue::new(1, 5).unwrap()).unwrap_err();
        assert_eq!(err, DutError::NotAnInput("X".into()));
    }

    #[test]
    fn drive_wrong_width_rejected() {
        let mut dut = adder_dut();
        let err = dut.drive("A", PinValue::new(1, 8).unwrap()).unwrap_err();
        assert_eq!(
            err,
            DutError::WidthMismatch {
                pin: "A".into(),
                declared: 4,
                got: 8,
            }
        );
    }

    #[test]
    fn sample_unknown_pin() {
        let dut = adder_dut();
        assert_eq!(dut.sample("C").unwrap_err(), DutError::UnknownPin("C".into()));
    }

    #[test]
    fn sample_input_reads_back_driven_value() {
        let mut dut = adder_dut();
        dut.drive("A", PinValue::new(9, 4).unwrap()).unwrap();
        assert_eq!(dut.sample("A").unwrap().bits(), 9);
    }

    #[test]
    fn output_truncates_to_declared_width() {
        let pins = vec![PinSpec::input("A", 4), PinSpec::output("X", 3)];
        let mut dut = ModelDut::new(
            pins,
            Box::new(|inputs| BTreeMap::from([("X".to_string(), inputs["A"].bits() + 1)])),
        )
        .unwrap();
        dut.drive("A", PinValue::new(15, 4).unwrap()).unwrap();
        dut.advance(SimDuration::from_ns(1)).unwrap();
        // 16 truncated to 3 bits.
        assert_eq!(dut.sample("X").unwrap().bits(), 0);
    }

    #[test]
    fn identical_stimulus_is_idempotent() {
        let mut dut = adder_dut();
        let a = PinValue::new(7, 4).unwrap();
        let b = PinValue::new(8, 4).unwrap();
        dut.drive("A", a).unwrap();
        dut.drive("B", b).unwrap();
        dut.advance(SimDuration::from_ns(2)).unwrap();
        let first = dut.sample("X").unwrap();
        dut.drive("A", a).unwrap();
        dut.drive("B", b).unwrap();
        dut.advance(SimDuration::from_ns(2)).unwrap();
        assert_eq!(dut.sample("X").unwrap(), first);
    }

    #[test]
    fn model_producing_unknown_output_errors() {
        let pins = vec![PinSpec::input("A", 4), PinSpec::output("X", 5)];
        let mut dut = ModelDut::new(
            pins,
            Box::new(|_| BTreeMap::from([("Y".to_string(), 1)])),
        )
        .unwrap();
        let err = dut.advance(SimDuration::from_ns(1)).unwrap_err();
        assert_eq!(err, DutError::UnknownPin("Y".into()));
    }
}
