//! `strobe run` — build and launch the external simulator.
//!
//! Resolves the output style, the environment-derived backend/language
//! selection, and the project configuration, then plans and executes the
//! backend's build and run steps. All validation happens before the first
//! process spawns; tool failures are propagated unmodified.

use strobe_config::HarnessConfig;
use strobe_runner::OutputStyle;

use crate::check::resolve_project_dir;
use crate::{GlobalArgs, RunArgs};

/// Runs the `strobe run` command.
///
/// Returns exit code 0 when the simulator session succeeds.
pub fn run(args: &RunArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let style: OutputStyle = match &args.style {
        Some(s) => s.parse()?,
        None => OutputStyle::default(),
    };
    let harness = HarnessConfig::resolve(args.lang.as_deref(), args.sim.as_deref())?;

    let project_dir = resolve_project_dir(global)?;
    let config = strobe_config::load_config(&project_dir)?;

    let plan = strobe_runner::plan(&project_dir, &config, &harness, style)?;

    if !global.quiet {
        eprintln!(
            "   Building {} ({} via {})",
            config.project.name, harness.language, harness.backend
        );
        for cmd in &plan.build {
            eprintln!("   {cmd}");
        }
        eprintln!("   Running {}", plan.run);
    }

    strobe_runner::execute(&plan)?;
    Ok(0)
}
