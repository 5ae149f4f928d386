use super::diagram;
use specterms::core::models::term::{Term, format_half_integer};
use specterms::engine::rows::Row;
use specterms::core::models::configuration::ElectronConfiguration;
use specterms::workflows::analyze::{Analysis, TermSummary};

fn header(configuration: &ElectronConfiguration, microstates: usize) -> String {
    format!("Configuration {} ({} microstates)", configuration, microstates)
}

fn levels(term: &Term) -> String {
    term.levels
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_terms(summary: &TermSummary) -> String {
    let mut lines = vec![
        header(&summary.configuration, summary.microstates),
        format!("{:>4}  {:<6}{:>6}  Levels", "#", "Term", "Count"),
    ];
    lines.extend(summary.terms.iter().map(|term| {
        format!(
            "{:>4}  {:<6}{:>6}  {}",
            term.id,
            term.symbol().to_string(),
            term.count,
            levels(term)
        )
    }));
    lines.join("\n")
}

/// Lists a page of rows; `start` is the position of the first row among all `matched` rows.
pub fn render_rows(analysis: &Analysis, page: &[&Row], start: usize, matched: usize) -> String {
    let mut lines = vec![header(&analysis.configuration, analysis.rows.len())];
    if page.is_empty() {
        lines.push(format!("No microstates to show ({} matched).", matched));
        return lines.join("\n");
    }
    lines.push(format!(
        "Showing {}-{} of {} matching microstates",
        start + 1,
        start + page.len(),
        matched
    ));
    lines.push(format!("{:>8}  {:>4}  {:>5}  Diagram", "#", "Ml", "Ms"));
    lines.extend(page.iter().enumerate().map(|(offset, row)| {
        format!(
            "{:>8}  {:>4}  {:>5}  {}",
            start + offset + 1,
            row.ml,
            format_half_integer(row.two_ms()),
            diagram::render_row(&analysis.configuration, row)
        )
    }));
    lines.join("\n")
}

pub fn render_table(analysis: &Analysis) -> String {
    let table = &analysis.population;
    let mut lines = vec![header(&analysis.configuration, analysis.rows.len())];

    let mut heading = format!("{:>8}", "Ml \\ Ms");
    for ms in &table.ms_values {
        heading.push_str(&format!("{:>8}", format_half_integer((ms * 2.0).round() as i32)));
    }
    lines.push(heading);

    for (ml, counts) in table.ml_values.iter().zip(&table.counts) {
        let mut line = format!("{:>8}", ml);
        for count in counts {
            line.push_str(&format!("{:>8}", count));
        }
        lines.push(line);
    }
    lines.join("\n")
}
