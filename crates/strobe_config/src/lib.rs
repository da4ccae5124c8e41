//! Configuration for the Strobe harness.
//!
//! Two sources of configuration exist and are resolved exactly once, at
//! startup, into explicit structs threaded through the program:
//!
//! - `strobe.toml`, the per-project file naming the HDL toplevel, its
//!   source files, and test settings ([`ProjectConfig`]).
//! - The environment: `HDL_TOPLEVEL_LANG` and `SIM` select the source
//!   dialect and simulator backend ([`HarnessConfig`]), with CLI overrides
//!   taking precedence.
//!
//! Nothing outside this crate reads an environment variable.

#![warn(missing_docs)]

pub mod env;
pub mod error;
pub mod loader;
pub mod types;

pub use env::{HarnessConfig, ENV_LANG, ENV_SIM};
pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::{Backend, HdlLanguage, ProjectConfig, ProjectMeta, SourceConfig, TestConfig};
