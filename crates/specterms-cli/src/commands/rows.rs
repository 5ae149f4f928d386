use super::analyze_one;
use crate::cli::RowsArgs;
use crate::config::{AppConfig, OutputFormat};
use crate::error::Result;
use crate::output::{json, text};
use crate::utils::progress::CliProgressHandler;
use specterms::core::models::term::TermSymbol;
use specterms::engine::filter::filter_rows;
use specterms::workflows::analyze::Analysis;
use tracing::{debug, warn};

pub fn run(args: RowsArgs, app: &AppConfig, progress: &CliProgressHandler) -> Result<()> {
    let analysis = analyze_one(app, args.configuration, progress)?;

    for symbol in &args.terms {
        if !analysis.terms.iter().any(|term| term.symbol() == *symbol) {
            warn!(
                "Term {} does not occur in configuration {}; its block is still applied.",
                symbol, analysis.configuration
            );
        }
    }

    let length = if args.all {
        None
    } else {
        Some(args.length.unwrap_or(app.page_size))
    };
    println!(
        "{}",
        render(&analysis, &args.terms, args.start, length, app.format)?
    );
    Ok(())
}

fn render(
    analysis: &Analysis,
    terms: &[TermSymbol],
    start: usize,
    length: Option<usize>,
    format: OutputFormat,
) -> Result<String> {
    let rows = analysis.rows.as_slice();
    let matched = filter_rows(rows, terms, 0, None).len();
    let page = filter_rows(rows, terms, start, length);
    debug!(matched, shown = page.len(), "Selected rows.");

    match format {
        OutputFormat::Text => Ok(text::render_rows(analysis, &page, start, matched)),
        OutputFormat::Json => json::render_rows(analysis, &page, start, matched),
    }
}
