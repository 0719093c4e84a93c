//! Error types for menucli
//!
//! Registration problems are configuration errors: the host is expected to
//! treat them as fatal. Runtime resolution failures never surface here, they
//! travel through [`crate::Response`] instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for menucli operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for menucli operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// Two entries share a selector under the same parent
    #[error("duplicate selector '{selector}' under {parent}")]
    DuplicateSelector { selector: String, parent: String },

    /// An entry was registered with an empty selector
    #[error("entry '{title}' has an empty selector")]
    EmptySelector { title: String },

    /// An entry's parent is not an earlier caller-registered entry
    #[error("entry '{selector}' refers to parent #{parent}, which is not an earlier menu entry")]
    UnknownParent { selector: String, parent: usize },

    /// A selector contains the sub-menu separator and could not be reached
    /// from batch commands
    #[error("selector '{selector}' contains the sub-menu separator '{separator}'")]
    SelectorContainsSeparator { selector: String, separator: char },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
