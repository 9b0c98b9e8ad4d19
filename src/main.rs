use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::ListArgs;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Commands::List {
            path,
            python,
            format,
            output,
            from,
            no_normalize,
            no_license_files,
            no_notice_files,
        } => commands::handle_list(ListArgs {
            path,
            python,
            format,
            output,
            from,
            no_normalize,
            no_license_files,
            no_notice_files,
            quiet: cli.quiet,
            verbose: cli.verbose,
        }),
        Commands::Init => commands::handle_init(cli.quiet),
        Commands::Config { show, validate } => commands::handle_config(show, validate, cli.quiet),
    }
}

/// Log to stderr. `RUST_LOG` wins over the command line flags.
fn init_tracing(verbose: bool, quiet: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("py_license_inventory={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}
