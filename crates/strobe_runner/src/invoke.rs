//! Plan resolution and external process execution.

use crate::backend::{build_commands, check_combination, run_command, CommandSpec};
use crate::error::RunnerError;
use crate::style::OutputStyle;
use std::path::{Path, PathBuf};
use std::process::Command;
use strobe_config::{HarnessConfig, HdlLanguage, ProjectConfig};

/// A resolved simulator invocation: build steps, then one run step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimPlan {
    /// Build commands, in execution order.
    pub build: Vec<CommandSpec>,
    /// The run command.
    pub run: CommandSpec,
}

/// Resolves a project into a concrete simulator plan.
///
/// Validates the backend/language combination, resolves and existence-checks
/// the HDL sources for the selected language, and synthesizes the backend
/// command lines. Everything that can be rejected is rejected here, before
/// any process spawns.
pub fn plan(
    project_dir: &Path,
    config: &ProjectConfig,
    harness: &HarnessConfig,
    style: OutputStyle,
) -> Result<SimPlan, RunnerError> {
    check_combination(harness.backend, harness.language)?;
    let sources = resolve_sources(project_dir, config, harness.language)?;
    let toplevel = &config.project.toplevel;
    Ok(SimPlan {
        build: build_commands(
            harness.backend,
            harness.language,
            &sources,
            toplevel,
            project_dir,
        ),
        run: run_command(harness.backend, toplevel, style, project_dir),
    })
}

/// Resolves the source list for `language`, falling back to the
/// conventional `hdl/<toplevel>.<ext>` path when none is configured.
fn resolve_sources(
    project_dir: &Path,
    config: &ProjectConfig,
    language: HdlLanguage,
) -> Result<Vec<PathBuf>, RunnerError> {
    let configured = match language {
        HdlLanguage::Verilog => &config.sources.verilog,
        HdlLanguage::Vhdl => &config.sources.vhdl,
    };
    let relative: Vec<PathBuf> = if configured.is_empty() {
        let conventional = Path::new("hdl").join(format!(
            "{}.{}",
            config.project.toplevel,
            language.file_extension()
        ));
        if !project_dir.join(&conventional).is_file() {
            return Err(RunnerError::MissingSources(language));
        }
        vec![conventional]
    } else {
        configured.iter().map(PathBuf::from).collect()
    };

    for path in &relative {
        if !project_dir.join(path).is_file() {
            return Err(RunnerError::SourceNotFound(path.clone()));
        }
    }
    Ok(relative)
}

/// Executes a plan: every build step, then the run step.
///
/// The first failing step aborts the sequence; its error is propagated
/// unmodified and nothing is retried.
pub fn execute(plan: &SimPlan) -> Result<(), RunnerError> {
    for spec in &plan.build {
        run_spec(spec)?;
    }
    run_spec(&plan.run)
}

fn run_spec(spec: &CommandSpec) -> Result<(), RunnerError> {
    let status = Command::new(&spec.program)
        .args(&spec.args)
        .current_dir(&spec.cwd)
        .status()
        .map_err(|source| RunnerError::ToolLaunch {
            tool: spec.program.clone(),
            source,
        })?;
    if status.success() {
        Ok(())
    } else {
        Err(RunnerError::ToolFailed {
            tool: spec.program.clone(),
            status,
        })
    }
}
