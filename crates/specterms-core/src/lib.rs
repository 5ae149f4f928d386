//! # specterms Core Library
//!
//! Derives the Russell–Saunders term symbols of an atomic electron configuration by
//! enumerating its microstates and decomposing their `(Ml, Ms)` distribution.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear separation of concerns,
//! making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`ElectronConfiguration`,
//!   `Microstate`, `Term`), combinatorics, and export utilities.
//!
//! - **[`engine`]: The Logic Core.** The pipeline stages: microstate generation, row
//!   building, `(Ml, Ms)` compression and greedy term extraction, together with the
//!   analysis configuration and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Ties the `engine` and `core` together into a single
//!   call that analyses a configuration end to end.
//!
//! ## Example
//!
//! ```
//! use specterms::engine::config::AnalysisConfigBuilder;
//! use specterms::engine::progress::ProgressReporter;
//! use specterms::workflows::analyze;
//!
//! let config = AnalysisConfigBuilder::new()
//!     .configuration("2p2".parse().unwrap())
//!     .build()
//!     .unwrap();
//! let analysis = analyze::run(&config, &ProgressReporter::new()).unwrap();
//! let symbols: Vec<String> = analysis.terms.iter().map(|t| t.symbol().to_string()).collect();
//! assert_eq!(symbols, ["1D", "3P", "1S"]);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
