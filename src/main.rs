use std::process;

use clap::Parser;
use merge_checks::utils::get_env_var;
use merge_checks::Cli;

fn main() {
    // RUST_LOG may also come from the settings file; default to "info" so
    // stage progress shows up in CI logs. Logs go to stderr, results to stdout.
    let filter = get_env_var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(filter)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.execute() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");

            // Print the full error chain if available
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("  Caused by: {err}");
                source = err.source();
            }

            process::exit(1);
        }
    }
}
