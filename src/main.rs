mod cli;
mod config;
mod domain;
mod error;
mod logging;
mod storage;

use crate::cli::args::{Cli, Options};
use crate::cli::commands::Context;
use crate::cli::output::OutputFormat;
use crate::cli::router::{self, CommandName};
use crate::config::Config;
use crate::error::TodoError;
use crate::storage::store::TodoStore;
use clap::Parser;
use std::error::Error as _;
use std::process;

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    logging::init();

    match run(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  Caused by: {cause}");
                source = cause.source();
            }
            process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<String, TodoError> {
    let config = Config::from_env()?;
    let format = OutputFormat::from_flags(cli.json, cli.no_color, &config);

    let store = TodoStore::new(config.data_file());
    tracing::debug!(path = %store.path().display(), "using todo file");
    store.ensure_exists()?;
    let mut todos = store.load()?;

    let command = CommandName::resolve(cli.command.as_deref())?;
    let options = Options::from(&cli);
    let ctx = Context {
        config: &config,
        store: &store,
        format,
    };

    router::dispatch(command, &cli.args, &options, &mut todos, &ctx)
}
