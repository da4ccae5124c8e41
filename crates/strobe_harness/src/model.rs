//! The reference-model seam.
//!
//! A reference model is the pure software mirror of the circuit: given the
//! current input assignments it produces the value every output pin is
//! expected to show after propagation. It declares the same pin interface
//! as the HDL toplevel so the orchestrator can derive stimulus bounds and
//! the standalone mode can stand up an in-process double.

use std::collections::BTreeMap;
use std::sync::Arc;
use strobe_common::PinValue;
use strobe_dut::{DutError, ModelDut, PinSpec};

/// A pure software model of the device under test.
///
/// Implementations must be deterministic and free of side effects: the
/// expected outputs are a function of the current inputs and nothing else.
pub trait ReferenceModel: Send + Sync {
    /// The model's name, used in reports.
    fn name(&self) -> &str;

    /// The pin interface of the modeled toplevel.
    fn pins(&self) -> Vec<PinSpec>;

    /// Computes the raw expected value of each output pin.
    ///
    /// Values wider than the output pin are truncated to its declared width
    /// when compared, mirroring what the hardware port would latch. Inputs
    /// are pre-validated against the declared pin widths by the caller.
    fn expected(&self, inputs: &BTreeMap<String, PinValue>) -> BTreeMap<String, u64>;
}

/// Builds an in-process DUT double evaluating the given model.
///
/// The double declares the model's pin interface and computes outputs at
/// advance time, so it honors the same wait-before-check contract as a live
/// simulator session.
pub fn model_dut(model: Arc<dyn ReferenceModel>) -> Result<ModelDut, DutError> {
    let pins = model.pins();
    ModelDut::new(pins, Box::new(move |inputs| model.expected(inputs)))
}
