//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use std::path::Path;

/// Loads and validates a `strobe.toml` configuration from a project directory.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let config_path = project_dir.join("strobe.toml");
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `strobe.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates required fields and value formats.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.project.name.is_empty() {
        return Err(ConfigError::MissingField("project.name".to_string()));
    }
    if config.project.toplevel.is_empty() {
        return Err(ConfigError::MissingField("project.toplevel".to_string()));
    }
    config.test.settle()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
[project]
name = "adder_demo"
toplevel = "adder"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.project.name, "adder_demo");
        assert_eq!(config.project.toplevel, "adder");
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[project]
name = "adder_demo"
toplevel = "adder"

[sources]
verilog = ["hdl/adder.sv"]
vhdl = ["hdl/adder.vhdl"]

[test]
settle = "2ns"
trials = 25
seed = 42
stop_on_failure = true
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.sources.verilog, vec!["hdl/adder.sv"]);
        assert_eq!(config.sources.vhdl, vec!["hdl/adder.vhdl"]);
        assert_eq!(config.test.trials, 25);
        assert_eq!(config.test.seed, Some(42));
        assert!(config.test.stop_on_failure);
    }

    #[test]
    fn missing_name_errors() {
        let toml = r#"
[project]
name = ""
toplevel = "adder"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn missing_toplevel_errors() {
        let toml = r#"
[project]
name = "t"
toplevel = ""
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_config_from_str("this is not valid toml {{{}}}").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn bad_settle_errors() {
        let toml = r#"
[project]
name = "t"
toplevel = "adder"

[test]
settle = "soon"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDuration { .. }));
    }

    #[test]
    fn io_error_from_nonexistent_dir() {
        let err = load_config(Path::new("/nonexistent/dir")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
