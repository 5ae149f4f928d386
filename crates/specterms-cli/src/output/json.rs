use super::diagram;
use crate::error::{CliError, Result};
use serde::Serialize;
use specterms::core::models::term::Term;
use specterms::engine::compression::MlMsTable;
use specterms::engine::rows::Row;
use specterms::workflows::analyze::{Analysis, TermSummary};

#[derive(Serialize)]
struct TermsReport<'a> {
    configuration: String,
    microstates: usize,
    combinations: [u64; 4],
    terms: &'a [Term],
}

#[derive(Serialize)]
struct RowEntry {
    position: usize,
    occupation: String,
    ml: i32,
    ms: f64,
    diagram: String,
}

#[derive(Serialize)]
struct RowsReport {
    configuration: String,
    matched: usize,
    start: usize,
    rows: Vec<RowEntry>,
}

#[derive(Serialize)]
struct TableReport<'a> {
    configuration: String,
    max_ml: Option<i32>,
    max_ms: Option<f64>,
    table: &'a MlMsTable,
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::Other(e.into()))
}

fn terms_report(summary: &TermSummary) -> TermsReport<'_> {
    TermsReport {
        configuration: summary.configuration.to_string(),
        microstates: summary.microstates,
        combinations: summary.combinations.as_array(),
        terms: &summary.terms,
    }
}

pub fn render_terms(summary: &TermSummary) -> Result<String> {
    to_json(&terms_report(summary))
}

/// One JSON array covering several configurations, in input order.
pub fn render_terms_batch(summaries: &[TermSummary]) -> Result<String> {
    let reports: Vec<TermsReport<'_>> = summaries.iter().map(terms_report).collect();
    to_json(&reports)
}

pub fn render_rows(analysis: &Analysis, page: &[&Row], start: usize, matched: usize) -> Result<String> {
    let rows = page
        .iter()
        .enumerate()
        .map(|(offset, row)| RowEntry {
            position: start + offset + 1,
            occupation: format!("{:032b}", row.occupation),
            ml: row.ml,
            ms: row.ms,
            diagram: diagram::render_row(&analysis.configuration, row),
        })
        .collect();
    to_json(&RowsReport {
        configuration: analysis.configuration.to_string(),
        matched,
        start,
        rows,
    })
}

pub fn render_table(analysis: &Analysis) -> Result<String> {
    to_json(&TableReport {
        configuration: analysis.configuration.to_string(),
        max_ml: analysis.rows.max_ml(),
        max_ms: analysis.rows.max_ms(),
        table: &analysis.population,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use specterms::engine::config::AnalysisConfigBuilder;
    use specterms::engine::progress::ProgressReporter;
    use specterms::workflows::analyze;

    fn analysis(notation: &str) -> Analysis {
        let config = AnalysisConfigBuilder::new()
            .configuration(notation.parse().unwrap())
            .build()
            .unwrap();
        analyze::run(&config, &ProgressReporter::new()).unwrap()
    }

    #[test]
    fn terms_report_lists_terms_with_levels() {
        let json: Value = serde_json::from_str(&render_terms(&analysis("p1").into_summary()).unwrap()).unwrap();
        assert_eq!(json["configuration"], "p1");
        assert_eq!(json["microstates"], 6);
        assert_eq!(json["combinations"], serde_json::json!([1, 6, 1, 1]));
        assert_eq!(json["terms"][0]["letter"], "P");
        assert_eq!(json["terms"][0]["multiplicity"], 2);
        assert_eq!(json["terms"][0]["levels"][1]["j"], 1.5);
    }

    #[test]
    fn batch_preserves_input_order() {
        let summaries = vec![analysis("d2").into_summary(), analysis("s2").into_summary()];
        let json: Value = serde_json::from_str(&render_terms_batch(&summaries).unwrap()).unwrap();
        assert_eq!(json[0]["configuration"], "d2");
        assert_eq!(json[1]["configuration"], "s2");
        assert_eq!(json[0]["terms"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn rows_report_includes_diagrams() {
        let analysis = analysis("s1");
        let page: Vec<&Row> = analysis.rows.iter().collect();
        let json: Value = serde_json::from_str(&render_rows(&analysis, &page, 0, 2).unwrap()).unwrap();
        assert_eq!(json["matched"], 2);
        assert_eq!(json["rows"][0]["diagram"], "s [↿]");
        assert_eq!(json["rows"][1]["ms"], -0.5);
    }

    #[test]
    fn table_report_carries_maxima() {
        let json: Value = serde_json::from_str(&render_table(&analysis("p2")).unwrap()).unwrap();
        assert_eq!(json["max_ml"], 2);
        assert_eq!(json["max_ms"], 1.0);
        assert_eq!(json["table"]["counts"][2][1], 3);
    }
}
