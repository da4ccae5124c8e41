//! Environment-derived harness settings.
//!
//! The original harness read its backend and language selection from the
//! process environment at arbitrary points. Here the environment is
//! consulted exactly once, at startup, and the result lives in an explicit
//! [`HarnessConfig`] threaded through the program.

use crate::error::ConfigError;
use crate::types::{Backend, HdlLanguage};

/// Environment variable selecting the HDL dialect of the toplevel.
pub const ENV_LANG: &str = "HDL_TOPLEVEL_LANG";

/// Environment variable selecting the simulator backend.
pub const ENV_SIM: &str = "SIM";

/// Backend and language selection, resolved once at startup.
///
/// Precedence per setting: explicit override (CLI flag), then environment,
/// then the documented default (`verilog` / `questa`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Selected HDL dialect.
    pub language: HdlLanguage,
    /// Selected simulator backend.
    pub backend: Backend,
}

impl HarnessConfig {
    /// Resolves settings from the process environment and optional overrides.
    pub fn resolve(
        lang_override: Option<&str>,
        backend_override: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Self::resolve_with(lang_override, backend_override, |name| {
            std::env::var(name).ok()
        })
    }

    /// Resolves settings against an arbitrary variable lookup.
    ///
    /// Useful for testing without touching the process environment.
    pub fn resolve_with(
        lang_override: Option<&str>,
        backend_override: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let language = match lang_override.map(str::to_string).or_else(|| lookup(ENV_LANG)) {
            Some(raw) => raw.parse()?,
            None => HdlLanguage::Verilog,
        };
        let backend = match backend_override
            .map(str::to_string)
            .or_else(|| lookup(ENV_SIM))
        {
            Some(raw) => raw.parse()?,
            None => Backend::default(),
        };
        Ok(Self { language, backend })
    }
}
