use super::analyze_one;
use crate::cli::TableArgs;
use crate::config::{AppConfig, OutputFormat};
use crate::error::Result;
use crate::output::{json, text};
use crate::utils::progress::CliProgressHandler;

pub fn run(args: TableArgs, app: &AppConfig, progress: &CliProgressHandler) -> Result<()> {
    let analysis = analyze_one(app, args.configuration, progress)?;
    let output = match app.format {
        OutputFormat::Text => text::render_table(&analysis),
        OutputFormat::Json => json::render_table(&analysis)?,
    };
    println!("{}", output);
    Ok(())
}
