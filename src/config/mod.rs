//! Configuration module for menucli
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (MENUCLI_*)
//! 3. Project config (./menucli.toml)
//! 4. User config (<config dir>/menucli/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{report_warnings, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, InputConfig, MenuConfig, OutputConfig};
