//! Test case orchestration.
//!
//! A [`Suite`] is an ordered list of [`TestCase`]s run strictly
//! sequentially against one device. Each trial follows the same shape:
//! apply validated stimulus, wait the settle quantum, compare every output
//! pin against the reference model. Mismatches are recorded per case and
//! never abort the run unless stop-on-first-failure is configured.

use crate::check::{check_output, Mismatch};
use crate::error::HarnessError;
use crate::model::{model_dut, ReferenceModel};
use crate::stimulus::Stimulus;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use strobe_common::{PinValue, SimDuration, SimTime};
use strobe_dut::{Dut, DutError};

/// How a test case chooses its stimulus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseKind {
    /// Fixed input assignments, applied once.
    Deterministic {
        /// Raw (pin, value) assignments, validated at run time.
        inputs: Vec<(String, u64)>,
    },
    /// Independent uniform draws over each input pin's full range.
    Randomized {
        /// Number of trials to run.
        trials: usize,
    },
}

/// One (stimulus, wait, check) sequence with a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Case name, used in reports.
    pub name: String,
    /// Stimulus selection strategy.
    pub kind: CaseKind,
    /// Simulated time to wait between stimulus and check.
    pub settle: SimDuration,
}

impl TestCase {
    /// Creates a deterministic case from fixed input assignments.
    pub fn deterministic(
        name: impl Into<String>,
        inputs: Vec<(String, u64)>,
        settle: SimDuration,
    ) -> Self {
        Self {
            name: name.into(),
            kind: CaseKind::Deterministic { inputs },
            settle,
        }
    }

    /// Creates a randomized case of `trials` independent draws.
    pub fn randomized(name: impl Into<String>, trials: usize, settle: SimDuration) -> Self {
        Self {
            name: name.into(),
            kind: CaseKind::Randomized { trials },
            settle,
        }
    }
}

/// An ordered collection of test cases.
#[derive(Debug, Clone)]
pub struct Suite {
    name: String,
    cases: Vec<TestCase>,
}

impl Suite {
    /// Creates an empty suite.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cases: Vec::new(),
        }
    }

    /// Appends a case, preserving execution order.
    pub fn case(mut self, case: TestCase) -> Self {
        self.cases.push(case);
        self
    }

    /// The suite name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cases in execution order.
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }
}

/// Execution context selection for a harness.
///
/// Replaces the original dual-mode import guard with an explicit parameter:
/// `Live` attaches to a running simulator session through its [`Dut`]
/// implementation, `Model` stands up the in-process double so suites run
/// without any simulator installed.
pub enum ExecMode<'a> {
    /// Drive an externally provided device.
    Live(&'a mut dyn Dut),
    /// Drive the in-process model double.
    Model,
}

/// Outcome of one executed test case.
#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    /// The case name.
    pub name: String,
    /// Number of trials actually executed.
    pub trials: usize,
    /// Every recorded mismatch, in trial order.
    pub mismatches: Vec<Mismatch>,
    /// Simulated time when the case finished.
    pub finished_at: SimTime,
}

impl CaseOutcome {
    /// True if no trial mismatched.
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Aggregate result of a suite run.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    /// The suite name.
    pub suite: String,
    /// The reference model name.
    pub model: String,
    /// Per-case outcomes in execution order.
    pub cases: Vec<CaseOutcome>,
}

impl SuiteReport {
    /// True if every case passed.
    pub fn passed(&self) -> bool {
        self.cases.iter().all(CaseOutcome::passed)
    }

    /// Total number of recorded mismatches across all cases.
    pub fn mismatch_count(&self) -> usize {
        self.cases.iter().map(|c| c.mismatches.len()).sum()
    }
}

/// Runs suites against a reference model in a chosen execution mode.
pub struct Harness<'a> {
    model: Arc<dyn ReferenceModel>,
    mode: ExecMode<'a>,
    stop_on_failure: bool,
    seed: Option<u64>,
}

impl<'a> Harness<'a> {
    /// Creates a harness for `model` in the given execution mode.
    pub fn new(model: Arc<dyn ReferenceModel>, mode: ExecMode<'a>) -> Self {
        Self {
            model,
            mode,
            stop_on_failure: false,
            seed: None,
        }
    }

    /// Stops at the first mismatching trial instead of recording and
    /// continuing.
    pub fn stop_on_failure(mut self, stop: bool) -> Self {
        self.stop_on_failure = stop;
        self
    }

    /// Fixes the randomized-stimulus seed for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Executes every case of `suite` in order and reports the outcomes.
    pub fn run(&mut self, suite: &Suite) -> Result<SuiteReport, HarnessError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let model = Arc::clone(&self.model);
        match &mut self.mode {
            ExecMode::Live(dut) => {
                run_cases(&*model, suite, &mut **dut, &mut rng, self.stop_on_failure)
            }
            ExecMode::Model => {
                let mut dut = model_dut(Arc::clone(&model))?;
                run_cases(&*model, suite, &mut dut, &mut rng, self.stop_on_failure)
            }
        }
    }
}

fn run_cases(
    model: &dyn ReferenceModel,
    suite: &Suite,
    dut: &mut dyn Dut,
    rng: &mut StdRng,
    stop_on_failure: bool,
) -> Result<SuiteReport, HarnessError> {
    let mut cases = Vec::new();
    for case in suite.cases() {
        let outcome = run_case(model, case, dut, rng, stop_on_failure)?;
        let failed = !outcome.passed();
        cases.push(outcome);
        if failed && stop_on_failure {
            break;
        }
    }
    Ok(SuiteReport {
        suite: suite.name().to_string(),
        model: model.name().to_string(),
        cases,
    })
}

fn run_case(
    model: &dyn ReferenceModel,
    case: &TestCase,
    dut: &mut dyn Dut,
    rng: &mut StdRng,
    stop_on_failure: bool,
) -> Result<CaseOutcome, HarnessError> {
    let mut mismatches = Vec::new();
    let mut trials = 0;
    match &case.kind {
        CaseKind::Deterministic { inputs } => {
            trials = 1;
            mismatches.extend(run_trial(model, dut, inputs, case.settle)?);
        }
        CaseKind::Randomized { trials: total } => {
            for _ in 0..*total {
                let inputs = draw_inputs(model, rng);
                let found = run_trial(model, dut, &inputs, case.settle)?;
                let failed = !found.is_empty();
                mismatches.extend(found);
                trials += 1;
                if failed && stop_on_failure {
                    break;
                }
            }
        }
    }
    Ok(CaseOutcome {
        name: case.name.clone(),
        trials,
        mismatches,
        finished_at: dut.now(),
    })
}

/// Draws one independent uniform value per declared input pin.
fn draw_inputs(model: &dyn ReferenceModel, rng: &mut StdRng) -> Vec<(String, u64)> {
    model
        .pins()
        .iter()
        .filter(|p| p.is_input())
        .map(|p| {
            let max = if p.width >= 64 {
                u64::MAX
            } else {
                (1u64 << p.width) - 1
            };
            (p.name.clone(), rng.gen_range(0..=max))
        })
        .collect()
}

/// One trial: stimulus, settle, check every output pin.
fn run_trial(
    model: &dyn ReferenceModel,
    dut: &mut dyn Dut,
    raw_inputs: &[(String, u64)],
    settle: SimDuration,
) -> Result<Vec<Mismatch>, HarnessError> {
    let mut stim = Stimulus::new(&mut *dut);
    let mut inputs = BTreeMap::new();
    for (pin, raw) in raw_inputs {
        let value = stim.drive(pin, *raw)?;
        inputs.insert(pin.clone(), value);
    }
    stim.settle(settle)?;

    let raw_expected = model.expected(&inputs);
    let mut found = Vec::new();
    for spec in model.pins().iter().filter(|p| !p.is_input()) {
        let raw = raw_expected
            .get(&spec.name)
            .copied()
            .ok_or_else(|| HarnessError::MissingExpected(spec.name.clone()))?;
        let expected = PinValue::truncated(raw, spec.width).map_err(DutError::from)?;
        if let Some(m) = check_output(dut, &spec.name, expected, &inputs)? {
            found.push(m);
        }
    }
    Ok(found)
}
