//! appwrap - configure and preview the mobile-app wrapper of a storefront.
//!
//! Settings are read (or created) before anything else so the log level they
//! carry applies to the whole run. A broken settings file falls back to the
//! defaults rather than blocking the command.

use std::{error::Error, process};

use appwrap::{
    cli::{Cli, CliService, formatting::format_error},
    settings::Settings,
    tracing_config,
};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let settings = match Settings::load_or_create() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", format_error(&format!("{e}; using default settings")));
            Settings::default()
        }
    };

    tracing_config::init(settings.general.log_level)?;
    info!(command = ?cli.command, "running command");

    let result = match CliService::new(&settings) {
        Ok(service) => service.execute(cli.command).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}
