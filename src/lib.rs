//! menucli - hierarchical command-menu dispatcher
//!
//! Register a tree of selectable entries, then drive it either interactively
//! (prompt, read a selector, run it) or in batch from pre-supplied commands
//! such as `2-1 3`.

pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod menu;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use config::Config;
pub use error::{MenuError, MenuResult};
pub use menu::{Action, Entry, EntryId, MenuSettings, MenuTree, Response};
