//! The adder example: reference model and canonical suite.
//!
//! Mirrors the `adder` HDL toplevel shipped by `strobe init`: two 4-bit
//! inputs `A` and `B`, one 5-bit output `X = A + B`. The widest case,
//! 15 + 15 = 30, fits the output exactly.

use crate::model::ReferenceModel;
use crate::suite::{Suite, TestCase};
use std::collections::BTreeMap;
use strobe_common::{PinValue, SimDuration};
use strobe_dut::PinSpec;

/// Width of each adder input pin.
pub const INPUT_WIDTH: u32 = 4;
/// Width of the adder output pin.
pub const OUTPUT_WIDTH: u32 = 5;

/// Pure software model of the 4-bit adder.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdderModel;

impl ReferenceModel for AdderModel {
    fn name(&self) -> &str {
        "adder"
    }

    fn pins(&self) -> Vec<PinSpec> {
        vec![
            PinSpec::input("A", INPUT_WIDTH),
            PinSpec::input("B", INPUT_WIDTH),
            PinSpec::output("X", OUTPUT_WIDTH),
        ]
    }

    fn expected(&self, inputs: &BTreeMap<String, PinValue>) -> BTreeMap<String, u64> {
        let a = inputs.get("A").map(|v| v.bits()).unwrap_or(0);
        let b = inputs.get("B").map(|v| v.bits()).unwrap_or(0);
        BTreeMap::from([("X".to_string(), a.wrapping_add(b))])
    }
}

/// Builds the canonical two-case adder suite.
///
/// One deterministic case driving A=5, B=10 and expecting X=15, then a
/// randomized case of `trials` independent draws over the full input range.
/// Both wait `settle` between stimulus and check.
pub fn adder_suite(trials: usize, settle: SimDuration) -> Suite {
    Suite::new("adder")
        .case(TestCase::deterministic(
            "adder_basic",
            vec![("A".to_string(), 5), ("B".to_string(), 10)],
            settle,
        ))
        .case(TestCase::randomized("adder_randomised", trials, settle))
}
