use super::analyze_one;
use crate::cli::TermsArgs;
use crate::config::{AppConfig, OutputFormat, builder};
use crate::error::{CliError, Result};
use crate::output::{json, text};
use crate::utils::progress::CliProgressHandler;
use rayon::prelude::*;
use specterms::core::models::configuration::ElectronConfiguration;
use specterms::engine::progress::{Progress, ProgressReporter};
use specterms::workflows::analyze::{self, TermSummary};
use tracing::info;

pub fn run(args: TermsArgs, app: &AppConfig, progress: &CliProgressHandler) -> Result<()> {
    let summaries = analyze_all(&args.configurations, app, progress)?;
    info!("Analysed {} configuration(s).", summaries.len());
    println!("{}", render(&summaries, app.format)?);
    Ok(())
}

/// Analyses every configuration; several are processed in parallel, results keep input order.
///
/// Each row table is dropped as soon as its terms are known.
fn analyze_all(
    configurations: &[ElectronConfiguration],
    app: &AppConfig,
    progress: &CliProgressHandler,
) -> Result<Vec<TermSummary>> {
    if let [configuration] = configurations {
        return Ok(vec![
            analyze_one(app, *configuration, progress)?.into_summary(),
        ]);
    }

    let report = progress.get_callback();
    report(Progress::TaskStart {
        total_steps: configurations.len() as u64,
    });

    let results: Vec<Result<TermSummary>> = configurations
        .par_iter()
        .map(|&configuration| {
            let config = builder::analysis_config(app, configuration)?;
            let result = analyze::run(&config, &ProgressReporter::new())
                .map(|analysis| analysis.into_summary())
                .map_err(CliError::from);
            report(Progress::TaskIncrement);
            result
        })
        .collect();

    report(Progress::TaskFinish);
    results.into_iter().collect()
}

fn render(summaries: &[TermSummary], format: OutputFormat) -> Result<String> {
    match (format, summaries) {
        (OutputFormat::Json, [summary]) => json::render_terms(summary),
        (OutputFormat::Json, _) => json::render_terms_batch(summaries),
        (OutputFormat::Text, _) => Ok(summaries
            .iter()
            .map(text::render_terms)
            .collect::<Vec<_>>()
            .join("\n\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specterms::engine::error::EngineError;

    fn app(max_rows: u64) -> AppConfig {
        AppConfig {
            max_rows,
            format: OutputFormat::Text,
            page_size: 50,
        }
    }

    fn configurations(notations: &[&str]) -> Vec<ElectronConfiguration> {
        notations.iter().map(|n| n.parse().unwrap()).collect()
    }

    #[test]
    fn batch_results_keep_input_order() {
        let handler = CliProgressHandler::new(false);
        let summaries =
            analyze_all(&configurations(&["d2", "p1", "s2", "p3"]), &app(1_000_000), &handler)
                .unwrap();
        let names: Vec<String> = summaries.iter().map(|s| s.configuration.to_string()).collect();
        assert_eq!(names, ["d2", "p1", "s2", "p3"]);
        assert_eq!(summaries[3].terms.len(), 3);
    }

    #[test]
    fn batch_returns_row_counts_and_terms_only() {
        let handler = CliProgressHandler::new(false);
        let summaries =
            analyze_all(&configurations(&["d2", "p2"]), &app(1_000), &handler).unwrap();
        assert_eq!(summaries[0].microstates, 45);
        assert_eq!(summaries[0].combinations.total(), Some(45));
        assert_eq!(summaries[1].microstates, 15);
        let symbols: Vec<String> = summaries[1]
            .terms
            .iter()
            .map(|term| term.symbol().to_string())
            .collect();
        assert_eq!(symbols, ["1D", "3P", "1S"]);

        let single = analyze_all(&configurations(&["s1"]), &app(1_000), &handler).unwrap();
        assert_eq!(single[0].microstates, 2);
    }

    #[test]
    fn any_failing_configuration_fails_the_batch() {
        let handler = CliProgressHandler::new(false);
        let result = analyze_all(&configurations(&["p1", "d5"]), &app(100), &handler);
        assert!(matches!(
            result,
            Err(CliError::Engine(EngineError::AllocationFailure { requested: 252, .. }))
        ));
    }

    #[test]
    fn text_output_separates_configurations_with_blank_lines() {
        let handler = CliProgressHandler::new(false);
        let summaries = analyze_all(&configurations(&["p1", "s2"]), &app(1_000), &handler).unwrap();
        let output = render(&summaries, OutputFormat::Text).unwrap();
        assert_eq!(output.split("\n\n").count(), 2);
        assert!(output.starts_with("Configuration p1"));
    }

    #[test]
    fn json_output_is_an_object_for_one_configuration_and_an_array_for_many() {
        let handler = CliProgressHandler::new(false);
        let one = analyze_all(&configurations(&["p1"]), &app(1_000), &handler).unwrap();
        let many = analyze_all(&configurations(&["p1", "p2"]), &app(1_000), &handler).unwrap();
        assert!(render(&one, OutputFormat::Json).unwrap().starts_with('{'));
        assert!(render(&many, OutputFormat::Json).unwrap().starts_with('['));
    }
}
