//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MenuResult;

use super::loader::{self, ConfigWarning};

/// `[menu]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub root_title: String,

    /// Blank inputs in a row before the menu is shown again; 0 disables it
    #[serde(default = "default_blank_lines")]
    pub blank_lines_before_menu: u32,

    #[serde(default = "default_prompt")]
    pub prompt: String,

    #[serde(default = "default_farewell")]
    pub farewell: String,

    #[serde(default = "default_not_found")]
    pub not_found_message: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            root_title: String::new(),
            blank_lines_before_menu: default_blank_lines(),
            prompt: default_prompt(),
            farewell: default_farewell(),
            not_found_message: default_not_found(),
        }
    }
}

fn default_blank_lines() -> u32 {
    3
}

fn default_prompt() -> String {
    "->".to_string()
}

fn default_farewell() -> String {
    "Bye bye, true believer".to_string()
}

fn default_not_found() -> String {
    "Command not found".to_string()
}

/// `[input]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Separates path segments inside one batch command (`2-1`)
    #[serde(default = "default_separator")]
    pub submenu_separator: char,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            submenu_separator: default_separator(),
        }
    }
}

fn default_separator() -> char {
    '-'
}

/// `[output]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" | "true" | "1" => Some(Self::Always),
            "never" | "false" | "0" => Some(Self::Never),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub menu: MenuConfig,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MenuResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MenuResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (MENUCLI_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }
}
