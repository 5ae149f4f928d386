use crate::core::models::configuration::{Combinations, ElectronConfiguration};
use crate::core::models::term::Term;
use crate::engine::compression::{self, MlMsTable};
use crate::engine::config::AnalysisConfig;
use crate::engine::error::EngineError;
use crate::engine::extraction;
use crate::engine::microstates::SubshellMicrostates;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::rows::{self, RowTable};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct Analysis {
    pub configuration: ElectronConfiguration,
    pub combinations: Combinations,
    pub microstates: SubshellMicrostates,
    pub rows: RowTable,
    /// Population of the `Ml >= 0, Ms >= 0` quadrant before extraction.
    pub population: MlMsTable,
    /// Terms in extraction order.
    pub terms: Vec<Term>,
}

/// Term list of an analysis without its row tables.
#[derive(Debug, Clone, PartialEq)]
pub struct TermSummary {
    pub configuration: ElectronConfiguration,
    pub combinations: Combinations,
    pub microstates: usize,
    pub terms: Vec<Term>,
}

impl Analysis {
    /// Drops the row tables, keeping what a term listing needs.
    pub fn into_summary(self) -> TermSummary {
        TermSummary {
            configuration: self.configuration,
            combinations: self.combinations,
            microstates: self.rows.len(),
            terms: self.terms,
        }
    }
}

#[instrument(skip_all, name = "analysis_workflow")]
pub fn run(config: &AnalysisConfig, reporter: &ProgressReporter) -> Result<Analysis, EngineError> {
    let configuration = config.configuration;
    info!("Starting term analysis of configuration {}.", configuration);
    if configuration.total_electrons() == 0 {
        warn!("Configuration has no electrons; the only term is 1S.");
    }

    let combinations = configuration.combinations();
    let total = combinations.total().ok_or(EngineError::AllocationFailure {
        requested: u64::MAX,
        limit: config.max_rows,
    })?;
    if total > config.max_rows {
        return Err(EngineError::AllocationFailure {
            requested: total,
            limit: config.max_rows,
        });
    }
    reporter.report(Progress::Message(format!(
        "{} microstates to enumerate",
        total
    )));

    // === Phase 1: Subshell microstates ===
    let microstates = reporter.phase("Generating Microstates", || {
        SubshellMicrostates::generate(&configuration)
    })?;

    // === Phase 2: Full-configuration rows ===
    let rows = reporter.phase("Building Rows", || {
        rows::build_rows(&configuration, &microstates)
    })?;
    info!(rows = rows.len(), "Row table materialised.");

    // === Phase 3: (Ml, Ms) multiset ===
    let mut compressed = reporter.phase("Compressing Rows", || {
        compression::compress(rows.as_slice())
    });
    let population = compressed.population_table();

    // === Phase 4: Term extraction ===
    let terms = reporter.phase("Extracting Terms", || {
        extraction::extract_terms(&mut compressed)
    })?;

    info!(
        "Analysis complete. Extracted {} distinct term(s).",
        terms.len()
    );
    Ok(Analysis {
        configuration,
        combinations,
        microstates,
        rows,
        population,
        terms,
    })
}
