//! Sunburst CLI Binary
//!
//! Command-line interface for the sunburst hierarchy and arc layout.

use clap::Parser;
use std::process;
use sunburst::logging;
use sunburst::tooling::cli::{Cli, CliContext};

fn main() {
    let cli = Cli::parse();

    let context = match CliContext::new(cli.config.clone(), cli.separator.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    // CLI logging flags override the loaded configuration.
    let mut logging_config = context.config().logging.clone();
    if let Some(level) = &cli.log_level {
        logging_config.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        logging_config.format = format.clone();
    }
    if let Some(output) = &cli.log_output {
        logging_config.output = output.clone();
    }
    if let Some(file) = &cli.log_file {
        logging_config.file = Some(file.clone());
    }

    if let Err(e) = logging::init_logging(Some(&logging_config)) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
