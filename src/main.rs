// src/main.rs

use anyhow::Result;
#[cfg(feature = "progress")]
use to_llm_view::progress::IndicatifProgress;
use std::sync::Arc;
use to_llm_view::cli::parse_invocation;
use to_llm_view::config::ConfigBuilder;
use to_llm_view::errors::Error;
use to_llm_view::output::ConverterKind;
use to_llm_view::progress::ProgressReporter;
use to_llm_view::run;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "to_llm_view=debug".parse()?
                } else {
                    "to_llm_view=info".parse()?
                },
            ),
        )
        .init();

    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Setup ---
    let invocation = match parse_invocation(std::env::args_os()) {
        Ok(invocation) => invocation,
        // Help, version and usage errors: clap prints and picks the exit code.
        Err(Error::Cli(e)) => e.exit(),
        Err(Error::UnknownConverter(name)) => {
            eprintln!("Invalid converter: '{}'", name);
            eprintln!("Available converters:");
            for kind in ConverterKind::ALL {
                eprintln!(" - {}", kind.name());
                eprintln!("    {}", kind.help());
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("Starting To LLM View v{}...", env!("CARGO_PKG_VERSION"));

    // Decide whether to show a progress bar. Show it if stderr is a TTY.
    let progress_reporter: Option<Arc<dyn ProgressReporter>> = {
        #[cfg(feature = "progress")]
        {
            if atty::is(atty::Stream::Stderr) {
                Some(Arc::new(IndicatifProgress::new()))
            } else {
                None
            }
        }
        #[cfg(not(feature = "progress"))]
        {
            None
        }
    };

    // --- Configuration & Execution ---
    let config = match ConfigBuilder::from_cli(invocation).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    match run(&config, progress_reporter) {
        Ok(stats) => {
            println!("Conversion completed successfully!");
            println!("   Processed files: {}", stats.processed_files);
            println!("   Skipped files:   {}", stats.skipped_files);
            println!("   Result saved to: {}", config.output_path.display());
            if !stats.errors.is_empty() {
                eprintln!("   Errors found: {} (details in file)", stats.errors.len());
            }
        }
        Err(Error::NoFilesToProcess) => {
            eprintln!("No files to process after filtering");
        }
        Err(e @ Error::NotAGitRepository(_)) => {
            eprintln!("Error: {}", e);
            eprintln!("   Navigate to the Git repository root and run the program again");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
