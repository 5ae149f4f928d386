//! # Core Module
//!
//! Stateless building blocks of the term-symbol engine.
//!
//! ## Architecture
//!
//! - **Combinatorics** ([`combinatorics`]) - Factorials and binomial coefficients
//!   used to size every microstate table
//! - **Models** ([`models`]) - Subshells, configurations, microstates and terms
//! - **I/O** ([`io`]) - Export of row tables and term lists
//!
//! Nothing in this module holds mutable state between calls; the pipeline stages
//! that build and consume tables live in [`crate::engine`].

pub mod combinatorics;
pub mod io;
pub mod models;
