//! Command-line surface of the `menucli` binary

pub mod cli;

pub use cli::{Cli, ColorWhen};
