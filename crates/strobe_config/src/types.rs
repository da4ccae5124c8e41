//! Configuration types deserialized from `strobe.toml`.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strobe_common::SimDuration;

/// The top-level project configuration parsed from `strobe.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Core project metadata (name, HDL toplevel).
    pub project: ProjectMeta,
    /// HDL source file lists per dialect.
    #[serde(default)]
    pub sources: SourceConfig,
    /// Test settings (settle quantum, trial count, seed).
    #[serde(default)]
    pub test: TestConfig,
}

/// Core project metadata required in every `strobe.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectMeta {
    /// The project name.
    pub name: String,
    /// Name of the HDL toplevel entity/module under test.
    pub toplevel: String,
}

/// HDL source file lists, one per supported dialect.
///
/// Paths are relative to the project directory. Only the list matching the
/// selected language is used; the other is ignored for that run.
#[derive(Debug, Default, Deserialize)]
pub struct SourceConfig {
    /// Verilog/SystemVerilog source paths.
    #[serde(default)]
    pub verilog: Vec<String>,
    /// VHDL source paths.
    #[serde(default)]
    pub vhdl: Vec<String>,
}

/// Test settings for suite runs.
#[derive(Debug, Deserialize)]
pub struct TestConfig {
    /// Settle quantum between stimulus and check (e.g. `"2ns"`).
    #[serde(default = "default_settle")]
    pub settle: String,
    /// Number of randomized trials.
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// Optional fixed seed for randomized stimulus.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Stop at the first mismatching trial.
    #[serde(default)]
    pub stop_on_failure: bool,
}

fn default_settle() -> String {
    "2ns".to_string()
}

fn default_trials() -> usize {
    10
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            settle: default_settle(),
            trials: default_trials(),
            seed: None,
            stop_on_failure: false,
        }
    }
}

impl TestConfig {
    /// Parses the settle quantum into a [`SimDuration`].
    pub fn settle(&self) -> Result<SimDuration, ConfigError> {
        self.settle
            .parse()
            .map_err(|_| ConfigError::InvalidDuration {
                field: "test.settle".to_string(),
                value: self.settle.clone(),
            })
    }
}

/// HDL source dialect of the toplevel under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HdlLanguage {
    /// Verilog / SystemVerilog sources.
    Verilog,
    /// VHDL sources.
    Vhdl,
}

impl HdlLanguage {
    /// The conventional file extension for this dialect.
    pub fn file_extension(self) -> &'static str {
        match self {
            HdlLanguage::Verilog => "sv",
            HdlLanguage::Vhdl => "vhdl",
        }
    }
}

impl fmt::Display for HdlLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HdlLanguage::Verilog => f.write_str("verilog"),
            HdlLanguage::Vhdl => f.write_str("vhdl"),
        }
    }
}

impl FromStr for HdlLanguage {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "verilog" => Ok(HdlLanguage::Verilog),
            "vhdl" => Ok(HdlLanguage::Vhdl),
            _ => Err(ConfigError::UnknownLanguage(s.to_string())),
        }
    }
}

/// A supported external simulator backend, selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Siemens Questa (the default).
    Questa,
    /// Cadence Xcelium.
    Xcelium,
    /// Icarus Verilog.
    Icarus,
    /// GHDL.
    Ghdl,
}

impl Default for Backend {
    fn default() -> Self {
        Backend::Questa
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Questa => f.write_str("questa"),
            Backend::Xcelium => f.write_str("xcelium"),
            Backend::Icarus => f.write_str("icarus"),
            Backend::Ghdl => f.write_str("ghdl"),
        }
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "questa" => Ok(Backend::Questa),
            "xcelium" => Ok(Backend::Xcelium),
            "icarus" => Ok(Backend::Icarus),
            "ghdl" => Ok(Backend::Ghdl),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;
    use strobe_common::TimeUnit;

    #[test]
    fn language_roundtrip() {
        for (input, expected) in [("verilog", HdlLanguage::Verilog), ("vhdl", HdlLanguage::Vhdl)] {
            let lang: HdlLanguage = input.parse().unwrap();
            assert_eq!(lang, expected);
            assert_eq!(lang.to_string(), input);
        }
    }

    #[test]
    fn language_case_insensitive() {
        assert_eq!("VHDL".parse::<HdlLanguage>().unwrap(), HdlLanguage::Vhdl);
    }

    #[test]
    fn language_unknown() {
        let err = "chisel".parse::<HdlLanguage>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownLanguage(_)));
    }

    #[test]
    fn language_extensions() {
        assert_eq!(HdlLanguage::Verilog.file_extension(), "sv");
        assert_eq!(HdlLanguage::Vhdl.file_extension(), "vhdl");
    }

    #[test]
    fn backend_all_variants() {
        for (input, expected) in [
            ("questa", Backend::Questa),
            ("xcelium", Backend::Xcelium),
            ("icarus", Backend::Icarus),
            ("ghdl", Backend::Ghdl),
        ] {
            let b: Backend = input.parse().unwrap();
            assert_eq!(b, expected);
            assert_eq!(b.to_string(), input);
        }
    }

    #[test]
    fn backend_default_is_questa() {
        assert_eq!(Backend::default(), Backend::Questa);
    }

    #[test]
    fn backend_unknown() {
        let err = "spice".parse::<Backend>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownBackend(_)));
    }

    #[test]
    fn test_config_defaults() {
        let config = load_config_from_str(
            r#"
[project]
name = "adder_demo"
toplevel = "adder"
"#,
        )
        .unwrap();
        assert_eq!(config.test.trials, 10);
        assert_eq!(config.test.seed, None);
        assert!(!config.test.stop_on_failure);
        assert_eq!(
            config.test.settle().unwrap(),
            SimDuration::new(2, TimeUnit::Ns)
        );
    }

    #[test]
    fn settle_parses_other_units() {
        let config = load_config_from_str(
            r#"
[project]
name = "t"
toplevel = "adder"

[test]
settle = "500ps"
"#,
        )
        .unwrap();
        assert_eq!(
            config.test.settle().unwrap(),
            SimDuration::new(500, TimeUnit::Ps)
        );
    }

    #[test]
    fn sources_default_empty() {
        let config = load_config_from_str(
            r#"
[project]
name = "t"
toplevel = "adder"
"#,
        )
        .unwrap();
        assert!(config.sources.verilog.is_empty());
        assert!(config.sources.vhdl.is_empty());
    }
}
