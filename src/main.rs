mod cli;
mod commands;
mod config;
mod deps;
mod env;
mod error;
mod fs;
mod http;
mod install;
mod manifest;
mod output;
mod primitives;
mod process;
mod registry;
mod rewrite;
mod scaffold;
mod serde_ext;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                return;
            }
            _ => {
                let _ = err.print();
                cli::print_usage();
                std::process::exit(1);
            }
        },
    };

    if cli.version {
        println!("{}", cli::version());
        return;
    }

    let Some(command) = cli.command else {
        cli::print_usage();
        std::process::exit(1);
    };

    init_tracing(cli.verbose);

    if let Err(err) = commands::dispatch(command, cli.verbose).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

/// RUST_LOG を優先し、無ければ --verbose で debug、既定は warn
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
