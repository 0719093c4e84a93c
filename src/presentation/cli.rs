//! CLI Argument Parsing
//!
//! With `--run` the given commands execute as a batch and the process exits;
//! without it the interactive menu starts.

use std::path::PathBuf;

use clap::Parser;

use crate::config::ColorMode;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// menucli - hierarchical command menu
#[derive(Parser, Debug)]
#[command(name = "menucli")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run without --run for the interactive menu. Use '-' to reach sub-menus, e.g. --run 2-1 3")]
pub struct Cli {
    /// Print credits and exit
    #[arg(short, long)]
    pub credits: bool,

    /// Execute commands instantly instead of prompting
    #[arg(short, long, num_args = 1..)]
    pub run: Vec<String>,

    /// Config file (defaults to ./menucli.toml, then the user config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Breadcrumb root title
    #[arg(long)]
    pub title: Option<String>,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Batch tokens with every `--run` value split on whitespace
    pub fn batch_commands(&self) -> Vec<&str> {
        self.run.iter().flat_map(|r| r.split_whitespace()).collect()
    }
}
