// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use docpage::cli::Cli;
use docpage::config::ConfigBuilder;
use docpage::errors::Error;
use docpage::output::write_format_list;
use docpage::registry::TypeRegistry;
use docpage::run;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. RUST_LOG directives are extended with the crate default.
    let default_directive = if cli.quiet {
        "docpage=warn"
    } else if cli.verbose || cfg!(debug_assertions) {
        "docpage=debug"
    } else {
        "docpage=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_directive.parse().unwrap()),
        )
        .init();

    log::debug!("Starting docpage v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Configuration ---
    let config = ConfigBuilder::from_cli(cli)
        .build()
        .context("Failed to build configuration")?;
    log::debug!("Configuration built successfully.");

    if config.list_formats {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write_format_list(&TypeRegistry::new(), &mut handle)
            .context("Failed to print the format list")?;
        return Ok(());
    }

    // --- Execution & Error Handling ---
    match run(&config) {
        Ok(summary) if summary.has_failures() => std::process::exit(1),
        Ok(_) => Ok(()),
        Err(Error::NoFilesFound) => {
            eprintln!("docpage: No files found to process.");
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
