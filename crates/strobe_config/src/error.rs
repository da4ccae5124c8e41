//! Error types for configuration loading and resolution.

/// Errors that can occur when loading or resolving Strobe configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A required field is missing from the configuration.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// The HDL language name is not recognized.
    #[error("unknown HDL language '{0}' (expected 'verilog' or 'vhdl')")]
    UnknownLanguage(String),

    /// The simulator backend name is not recognized.
    #[error("unknown simulator backend '{0}'")]
    UnknownBackend(String),

    /// A duration field failed to parse.
    #[error("invalid duration '{value}' in field {field}")]
    InvalidDuration {
        /// The configuration field holding the bad value.
        field: String,
        /// The unparseable value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_missing_field() {
        let err = ConfigError::MissingField("project.toplevel".to_string());
        assert_eq!(format!("{err}"), "missing required field: project.toplevel");
    }

    #[test]
    fn display_unknown_language() {
        let err = ConfigError::UnknownLanguage("chisel".to_string());
        assert_eq!(
            format!("{err}"),
            "unknown HDL language 'chisel' (expected 'verilog' or 'vhdl')"
        );
    }

    #[test]
    fn display_unknown_backend() {
        let err = ConfigError::UnknownBackend("spice".to_string());
        assert_eq!(format!("{err}"), "unknown simulator backend 'spice'");
    }

    #[test]
    fn display_invalid_duration() {
        let err = ConfigError::InvalidDuration {
            field: "test.settle".to_string(),
            value: "soon".to_string(),
        };
        assert_eq!(format!("{err}"), "invalid duration 'soon' in field test.settle");
    }

    #[test]
    fn display_parse_error() {
        let err = ConfigError::ParseError("expected '=' at line 3".to_string());
        assert_eq!(
            format!("{err}"),
            "failed to parse configuration: expected '=' at line 3"
        );
    }
}
