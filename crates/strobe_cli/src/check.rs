//! `strobe check` — run the built-in suite against the software model.
//!
//! This is the standalone execution context: the adder suite runs against
//! the in-process model double, so it works without any simulator
//! installed. Test settings come from `strobe.toml` when present, with CLI
//! flags taking precedence. Reports per-case pass/fail status and a
//! summary line, or a JSON report with `--format json`.

use std::path::PathBuf;
use std::sync::Arc;

use strobe_common::SimDuration;
use strobe_harness::{adder_suite, AdderModel, ExecMode, Harness, SuiteReport};

use crate::{CheckArgs, GlobalArgs, ReportFormat};

/// Test settings resolved from `strobe.toml` and CLI flags.
struct CheckSettings {
    settle: SimDuration,
    trials: usize,
    seed: Option<u64>,
    stop_on_failure: bool,
}

/// Runs the `strobe check` command.
///
/// Returns exit code 0 if every case passes, 1 otherwise.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let settings = resolve_settings(args, global)?;
    let suite = adder_suite(settings.trials, settings.settle);

    let mut harness = Harness::new(Arc::new(AdderModel), ExecMode::Model)
        .stop_on_failure(settings.stop_on_failure);
    if let Some(seed) = settings.seed {
        harness = harness.seed(seed);
    }

    let report = harness.run(&suite)?;

    match args.format {
        ReportFormat::Text => {
            if !global.quiet {
                print_report(&report);
            }
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if report.passed() {
        Ok(0)
    } else {
        Ok(1)
    }
}

/// Merges `strobe.toml` test settings (when present) with CLI overrides.
fn resolve_settings(
    args: &CheckArgs,
    global: &GlobalArgs,
) -> Result<CheckSettings, Box<dyn std::error::Error>> {
    let project_dir = resolve_project_dir(global)?;
    let mut settings = if project_dir.join("strobe.toml").is_file() {
        let config = strobe_config::load_config(&project_dir)?;
        CheckSettings {
            settle: config.test.settle()?,
            trials: config.test.trials,
            seed: config.test.seed,
            stop_on_failure: config.test.stop_on_failure,
        }
    } else {
        CheckSettings {
            settle: SimDuration::from_ns(2),
            trials: 10,
            seed: None,
            stop_on_failure: false,
        }
    };

    if let Some(trials) = args.trials {
        settings.trials = trials;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    if args.stop_on_failure {
        settings.stop_on_failure = true;
    }
    Ok(settings)
}

/// Resolves the project directory from the global flags.
pub fn resolve_project_dir(global: &GlobalArgs) -> std::io::Result<PathBuf> {
    match &global.project {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => std::env::current_dir(),
    }
}

/// Prints per-case status lines and a summary.
fn print_report(report: &SuiteReport) {
    for case in &report.cases {
        if case.passed() {
            eprintln!(
                "   PASS  {name} ({trials} trial(s), {time})",
                name = case.name,
                trials = case.trials,
                time = case.finished_at,
            );
        } else {
            eprintln!(
                "   FAIL  {name}: {count} mismatch(es)",
                name = case.name,
                count = case.mismatches.len(),
            );
            for mismatch in &case.mismatches {
                eprintln!("         {mismatch}");
            }
        }
    }
    let passed = report.cases.iter().filter(|c| c.passed()).count();
    let failed = report.cases.len() - passed;
    eprintln!();
    eprintln!(
        "   Result: {passed} passed, {failed} failed out of {} case(s)",
        report.cases.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn check_args() -> CheckArgs {
        CheckArgs {
            trials: None,
            seed: None,
            stop_on_failure: false,
            format: ReportFormat::Text,
        }
    }

    #[test]
    fn check_passes_without_project_file() {
        let tmp = TempDir::new().unwrap();
        let global = GlobalArgs {
            quiet: true,
            project: Some(tmp.path().to_str().unwrap().to_string()),
        };
        let code = run(&check_args(), &global).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn check_reads_project_settings() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("strobe.toml"),
            r#"
[project]
name = "demo"
toplevel = "adder"

[test]
settle = "1ns"
trials = 3
seed = 9
"#,
        )
        .unwrap();
        let global = GlobalArgs {
            quiet: true,
            project: Some(tmp.path().to_str().unwrap().to_string()),
        };
        let args = check_args();
        let settings = resolve_settings(&args, &global).unwrap();
        assert_eq!(settings.settle, SimDuration::from_ns(1));
        assert_eq!(settings.trials, 3);
        assert_eq!(settings.seed, Some(9));
    }

    #[test]
    fn cli_flags_override_project_settings() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("strobe.toml"),
            r#"
[project]
name = "demo"
toplevel = "adder"

[test]
trials = 3
"#,
        )
        .unwrap();
        let global = GlobalArgs {
            quiet: true,
            project: Some(tmp.path().to_str().unwrap().to_string()),
        };
        let mut args = check_args();
        args.trials = Some(50);
        args.seed = Some(1);
        let settings = resolve_settings(&args, &global).unwrap();
        assert_eq!(settings.trials, 50);
        assert_eq!(settings.seed, Some(1));
    }

    #[test]
    fn defaults_without_project_file() {
        let tmp = TempDir::new().unwrap();
        let global = GlobalArgs {
            quiet: true,
            project: Some(tmp.path().to_str().unwrap().to_string()),
        };
        let settings = resolve_settings(&check_args(), &global).unwrap();
        assert_eq!(settings.settle, SimDuration::from_ns(2));
        assert_eq!(settings.trials, 10);
        assert_eq!(settings.seed, None);
        assert!(!settings.stop_on_failure);
    }
}
