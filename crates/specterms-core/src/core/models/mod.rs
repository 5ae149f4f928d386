//! # Core Models Module
//!
//! Plain data types describing electron configurations and the objects derived
//! from them during term analysis.
//!
//! ## Key Components
//!
//! - [`subshell`] - Subshell kinds (s, p, d, f), their capacities, bit layout and
//!   the slot-to-`ml` convention shared by every computation
//! - [`configuration`] - Validated electron counts, the configuration notation
//!   parser and the per-subshell combination counts
//! - [`microstate`] - A single subshell arrangement and its slot occupations
//! - [`term`] - Extracted Russell–Saunders terms, their J levels and term symbols
//!
//! ## Usage
//!
//! ```
//! use specterms::core::models::configuration::ElectronConfiguration;
//!
//! let config: ElectronConfiguration = "2p2".parse().unwrap();
//! assert_eq!(config.combinations().total(), Some(15));
//! ```

pub mod configuration;
pub mod microstate;
pub mod subshell;
pub mod term;
