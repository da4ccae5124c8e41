//! Strobe CLI — the command-line interface for the Strobe test harness.
//!
//! Provides `strobe init` for scaffolding a demo project, `strobe check`
//! for running the built-in suite against the software reference model,
//! and `strobe run` for building and launching the external simulator.

#![warn(missing_docs)]

mod check;
mod init;
mod run;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Strobe — a stimulus-and-check harness for HDL simulators.
#[derive(Parser, Debug)]
#[command(name = "strobe", version, about = "Strobe HDL test harness")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the project directory (default: current directory).
    #[arg(long, global = true)]
    pub project: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Strobe demo project.
    Init {
        /// Project name (creates a subdirectory). If omitted, initializes
        /// in the current directory.
        name: Option<String>,

        /// HDL language for the template files.
        #[arg(short, long, value_enum, default_value_t = CliLanguage::Verilog)]
        lang: CliLanguage,
    },
    /// Run the built-in suite against the software reference model.
    Check(CheckArgs),
    /// Build and launch the external simulator.
    Run(RunArgs),
}

/// Arguments for the `strobe check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Number of randomized trials (overrides `strobe.toml`).
    #[arg(long)]
    pub trials: Option<usize>,

    /// Fixed seed for randomized stimulus.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop at the first mismatching trial.
    #[arg(long)]
    pub stop_on_failure: bool,

    /// Report output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `strobe run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Output style: `text`, `gui` or `vis`.
    pub style: Option<String>,

    /// HDL language override (otherwise `HDL_TOPLEVEL_LANG`, default verilog).
    #[arg(long)]
    pub lang: Option<String>,

    /// Simulator backend override (otherwise `SIM`, default questa).
    #[arg(long)]
    pub sim: Option<String>,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// HDL language selection for project scaffolding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CliLanguage {
    /// SystemVerilog sources.
    Verilog,
    /// VHDL sources.
    Vhdl,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Optional project directory override.
    pub project: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        project: cli.project,
    };

    let result = match cli.command {
        Command::Init { name, lang } => init::run(name, lang),
        Command::Check(ref args) => check::run(args, &global),
        Command::Run(ref args) => run::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
