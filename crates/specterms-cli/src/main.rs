mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod utils;

use crate::cli::{Cli, Commands};
use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!(
        "🚀 specterms CLI v{} starting up.",
        env!("CARGO_PKG_VERSION")
    );
    debug!("Full CLI arguments parsed: {:?}", &cli);

    if let Some(num_threads) = cli.threads {
        info!(
            "Setting Rayon global thread pool to {} threads.",
            num_threads
        );
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| {
                CliError::Other(anyhow::anyhow!("Failed to build global thread pool: {}", e))
            })?;
    }

    let app = config::build_config(cli.config.as_deref(), &cli.set_values, cli.format)?;
    debug!("Resolved configuration: {:?}", &app);
    let progress = CliProgressHandler::new(!cli.quiet && app.format == OutputFormat::Text);

    let command_result = match cli.command {
        Commands::Terms(args) => {
            info!("Dispatching to 'terms' command.");
            commands::terms::run(args, &app, &progress)
        }
        Commands::Rows(args) => {
            info!("Dispatching to 'rows' command.");
            commands::rows::run(args, &app, &progress)
        }
        Commands::Table(args) => {
            info!("Dispatching to 'table' command.");
            commands::table::run(args, &app, &progress)
        }
        Commands::Export(args) => {
            info!("Dispatching to 'export' command.");
            commands::export::run(args, &app, &progress)
        }
    };

    match &command_result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }
    command_result
}
