//! menucli - hierarchical command menu
//!
//! Usage: menucli [--credits] [--run <CMD>...]

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use menucli::presentation::Cli;
use menucli::ui::context::UiContext;
use menucli::{demo, logging, Config, MenuSettings, MenuTree};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.credits {
        println!("{}", demo::CREDITS);
        return Ok(());
    }

    let config = load_config(&cli)?;
    let ui = UiContext::new(cli.color.map(Into::into), &config);

    let mut settings = MenuSettings::from_config(&config, ui.color);
    if let Some(title) = &cli.title {
        settings.root_title = title.clone();
    } else if settings.root_title.is_empty() {
        settings.root_title = demo::DEFAULT_TITLE.to_string();
    }

    let mut tree = MenuTree::new(settings);
    let out: demo::SharedOutput = Rc::new(RefCell::new(io::stdout()));
    demo::register_demo(&mut tree, &out).context("invalid menu definition")?;

    let commands = cli.batch_commands();
    if commands.is_empty() {
        debug!("starting interactive mode");
        tree.run_interactive(io::stdin().lock())?;
    } else {
        debug!(count = commands.len(), "running batch");
        tree.run_batch(commands)?;
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            menucli::config::report_warnings(&warnings);
            Ok(config.with_env_overrides())
        }
        None => {
            let cwd = std::env::current_dir().context("cannot read working directory")?;
            Ok(Config::load_or_default(Some(&cwd)))
        }
    }
}
