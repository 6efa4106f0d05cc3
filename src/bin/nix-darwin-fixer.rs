use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use nix_darwin_fixer::cli::Cli;

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("nix_darwin_fixer=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("nix_darwin_fixer=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Running {:?}", cli.command);

    match cli.command.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
