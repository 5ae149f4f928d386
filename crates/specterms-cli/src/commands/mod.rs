pub mod export;
pub mod rows;
pub mod table;
pub mod terms;

use crate::config::{AppConfig, builder};
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use specterms::core::models::configuration::ElectronConfiguration;
use specterms::engine::progress::ProgressReporter;
use specterms::workflows::analyze::{self, Analysis};
use tracing::info;

/// Runs one analysis, reporting its phases through `progress`.
pub fn analyze_one(
    app: &AppConfig,
    configuration: ElectronConfiguration,
    progress: &CliProgressHandler,
) -> Result<Analysis> {
    let config = builder::analysis_config(app, configuration)?;
    let reporter = ProgressReporter::with_callback(progress.get_callback());
    info!("Invoking the analysis workflow for {}...", configuration);
    Ok(analyze::run(&config, &reporter)?)
}
