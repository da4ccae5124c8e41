//! Backend-specific command synthesis.
//!
//! Each supported backend maps to concrete build and run command lines.
//! The `{backend, language}` pairs a backend cannot compile are rejected
//! here, before any process is spawned, and the pairs needing extra build
//! flags (Xcelium compiling VHDL wants its legacy `-v93` switch) get them
//! from a single table.

use crate::error::RunnerError;
use crate::style::OutputStyle;
use std::fmt;
use std::path::{Path, PathBuf};
use strobe_config::{Backend, HdlLanguage};

/// Questa's waveform-visualizer run arguments.
const QUESTA_VIS_ARGS: [&str; 2] = ["-visualizer", "-qwavedb=+signal+memory+vhdlvariable"];

/// A fully resolved external command: program, arguments, working directory.
///
/// Kept as data rather than a live `std::process::Command` so plans can be
/// inspected and tested without any simulator installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// The program to invoke.
    pub program: String,
    /// Arguments, in order.
    pub args: Vec<String>,
    /// Working directory for the invocation.
    pub cwd: PathBuf,
}

impl CommandSpec {
    fn new(cwd: &Path, program: &str, args: Vec<String>) -> Self {
        Self {
            program: program.to_string(),
            args,
            cwd: cwd.to_path_buf(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Rejects backend/language pairs the backend cannot compile.
pub fn check_combination(backend: Backend, language: HdlLanguage) -> Result<(), RunnerError> {
    let supported = match backend {
        Backend::Questa | Backend::Xcelium => true,
        Backend::Icarus => language == HdlLanguage::Verilog,
        Backend::Ghdl => language == HdlLanguage::Vhdl,
    };
    if supported {
        Ok(())
    } else {
        Err(RunnerError::UnsupportedCombination { backend, language })
    }
}

/// Extra build flags required by specific backend/language pairs.
pub fn extra_build_args(backend: Backend, language: HdlLanguage) -> &'static [&'static str] {
    match (backend, language) {
        (Backend::Xcelium, HdlLanguage::Vhdl) => &["-v93"],
        _ => &[],
    }
}

/// Synthesizes the build step(s) for a backend.
///
/// Sources are passed through in configuration order. GHDL needs two steps
/// (analyze, then elaborate); every other backend builds in one.
pub fn build_commands(
    backend: Backend,
    language: HdlLanguage,
    sources: &[PathBuf],
    toplevel: &str,
    project_dir: &Path,
) -> Vec<CommandSpec> {
    let extra = extra_build_args(backend, language);
    let source_args = || sources.iter().map(|p| p.display().to_string());
    match backend {
        Backend::Questa => {
            let compiler = match language {
                HdlLanguage::Verilog => "vlog",
                HdlLanguage::Vhdl => "vcom",
            };
            let mut args: Vec<String> = extra.iter().map(|s| s.to_string()).collect();
            args.extend(source_args());
            vec![CommandSpec::new(project_dir, compiler, args)]
        }
        Backend::Xcelium => {
            let mut args = vec!["-elaborate".to_string()];
            args.extend(extra.iter().map(|s| s.to_string()));
            args.extend(source_args());
            args.push("-top".to_string());
            args.push(toplevel.to_string());
            vec![CommandSpec::new(project_dir, "xrun", args)]
        }
        Backend::Icarus => {
            let mut args = vec![
                "-g2012".to_string(),
                "-o".to_string(),
                format!("{toplevel}.vvp"),
            ];
            args.extend(source_args());
            vec![CommandSpec::new(project_dir, "iverilog", args)]
        }
        Backend::Ghdl => {
            let mut analyze = vec!["-a".to_string()];
            analyze.extend(source_args());
            vec![
                CommandSpec::new(project_dir, "ghdl", analyze),
                CommandSpec::new(
                    project_dir,
                    "ghdl",
                    vec!["-e".to_string(), toplevel.to_string()],
                ),
            ]
        }
    }
}

/// Synthesizes the run step for a backend in the given output style.
pub fn run_command(
    backend: Backend,
    toplevel: &str,
    style: OutputStyle,
    project_dir: &Path,
) -> CommandSpec {
    match backend {
        Backend::Questa => {
            let mut args = vec![if style.is_interactive() {
                "-gui".to_string()
            } else {
                "-c".to_string()
            }];
            args.push(toplevel.to_string());
            if style == OutputStyle::Vis {
                args.extend(QUESTA_VIS_ARGS.iter().map(|s| s.to_string()));
            }
            args.push("-do".to_string());
            args.push(if style.is_interactive() {
                "run -all".to_string()
            } else {
                "run -all; quit -f".to_string()
            });
            CommandSpec::new(project_dir, "vsim", args)
        }
        Backend::Xcelium => {
            let mut args = vec!["-R".to_string()];
            if style.is_interactive() {
                args.push("-gui".to_string());
            }
            CommandSpec::new(project_dir, "xrun", args)
        }
        // Icarus has no interactive mode; the style is ignored.
        Backend::Icarus => {
            CommandSpec::new(project_dir, "vvp", vec![format!("{toplevel}.vvp")])
        }
        Backend::Ghdl => {
            let mut args = vec!["-r".to_string(), toplevel.to_string()];
            if style.is_interactive() {
                args.push(format!("--wave={toplevel}.ghw"));
            }
            CommandSpec::new(project_dir, "ghdl", args)
        }
    }
}
