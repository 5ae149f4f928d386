use super::analyze_one;
use crate::cli::ExportArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use specterms::core::io::export::{write_rows_to_path, write_terms_to_path};
use specterms::workflows::analyze::Analysis;
use std::path::Path;
use tracing::info;

pub fn run(args: ExportArgs, app: &AppConfig, progress: &CliProgressHandler) -> Result<()> {
    let analysis = analyze_one(app, args.configuration, progress)?;
    write_outputs(&analysis, &args.rows, &args.terms)?;

    println!(
        "✓ {} microstates written to: {}",
        analysis.rows.len(),
        args.rows.display()
    );
    println!(
        "✓ {} terms written to: {}",
        analysis.terms.len(),
        args.terms.display()
    );
    Ok(())
}

fn write_outputs(analysis: &Analysis, rows_path: &Path, terms_path: &Path) -> Result<()> {
    info!("Writing {} rows to {:?}", analysis.rows.len(), rows_path);
    write_rows_to_path(analysis.rows.as_slice(), rows_path).map_err(|e| CliError::Export {
        path: rows_path.to_path_buf(),
        source: e,
    })?;

    info!("Writing {} terms to {:?}", analysis.terms.len(), terms_path);
    write_terms_to_path(&analysis.terms, terms_path).map_err(|e| CliError::Export {
        path: terms_path.to_path_buf(),
        source: e,
    })
}
