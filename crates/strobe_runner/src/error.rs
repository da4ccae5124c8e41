//! Runner error types.

use std::path::PathBuf;
use std::process::ExitStatus;
use strobe_config::{Backend, ConfigError, HdlLanguage};

/// Errors that can occur while planning or executing a simulator run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The output style name is not one of `text`, `gui`, `vis`.
    #[error("unknown output style '{0}' (expected 'text', 'gui' or 'vis')")]
    UnknownStyle(String),

    /// The selected backend cannot compile the selected language.
    #[error("backend '{backend}' does not support {language} sources")]
    UnsupportedCombination {
        /// The selected backend.
        backend: Backend,
        /// The selected language.
        language: HdlLanguage,
    },

    /// No source files are configured for the selected language.
    #[error("no {0} sources configured")]
    MissingSources(HdlLanguage),

    /// A configured source file does not exist.
    #[error("source file not found: {0}")]
    SourceNotFound(PathBuf),

    /// An external tool could not be launched (missing binary, permissions).
    #[error("failed to launch '{tool}': {source}")]
    ToolLaunch {
        /// The tool that failed to start.
        tool: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An external tool ran and exited unsuccessfully.
    #[error("'{tool}' exited with {status}")]
    ToolFailed {
        /// The tool that failed.
        tool: String,
        /// The tool's exit status.
        status: ExitStatus,
    },

    /// A configuration error surfaced during planning.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_style_display() {
        let e = RunnerError::UnknownStyle("fancy".into());
        assert_eq!(
            e.to_string(),
            "unknown output style 'fancy' (expected 'text', 'gui' or 'vis')"
        );
    }

    #[test]
    fn unsupported_combination_display() {
        let e = RunnerError::UnsupportedCombination {
            backend: Backend::Icarus,
            language: HdlLanguage::Vhdl,
        };
        assert_eq!(e.to_string(), "backend 'icarus' does not support vhdl sources");
    }

    #[test]
    fn missing_sources_display() {
        let e = RunnerError::MissingSources(HdlLanguage::Verilog);
        assert_eq!(e.to_string(), "no verilog sources configured");
    }

    #[test]
    fn source_not_found_display() {
        let e = RunnerError::SourceNotFound(PathBuf::from("hdl/adder.sv"));
        assert_eq!(e.to_string(), "source file not found: hdl/adder.sv");
    }
}
