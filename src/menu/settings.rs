//! Engine settings derived from configuration

use crate::config::Config;

/// Presentation and input knobs the engine reads at runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSettings {
    /// First element of the breadcrumb line
    pub root_title: String,
    /// Consecutive blank inputs that trigger a re-render (0 disables it)
    pub blank_lines_before_menu: u32,
    /// Colour the breadcrumb line
    pub use_colors: bool,
    pub prompt: String,
    pub farewell: String,
    pub not_found_message: String,
    /// Splits a batch token into path segments (`2-1`)
    pub submenu_separator: char,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            root_title: String::new(),
            blank_lines_before_menu: 3,
            use_colors: false,
            prompt: "->".to_string(),
            farewell: "Bye bye, true believer".to_string(),
            not_found_message: "Command not found".to_string(),
            submenu_separator: '-',
        }
    }
}

impl MenuSettings {
    /// Build settings from a loaded config; `use_colors` is resolved by the
    /// caller against the terminal.
    pub fn from_config(config: &Config, use_colors: bool) -> Self {
        Self {
            root_title: config.menu.root_title.clone(),
            blank_lines_before_menu: config.menu.blank_lines_before_menu,
            use_colors,
            prompt: config.menu.prompt.clone(),
            farewell: config.menu.farewell.clone(),
            not_found_message: config.menu.not_found_message.clone(),
            submenu_separator: config.input.submenu_separator,
        }
    }

    pub fn with_root_title(mut self, title: impl Into<String>) -> Self {
        self.root_title = title.into();
        self
    }

    pub fn with_blank_lines(mut self, threshold: u32) -> Self {
        self.blank_lines_before_menu = threshold;
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }
}
