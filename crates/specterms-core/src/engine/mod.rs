//! # Engine Module
//!
//! This module implements the term-extraction engine: the stateful pipeline that turns
//! an electron configuration into its Russell–Saunders terms.
//!
//! ## Overview
//!
//! Each stage consumes the output of the previous one and runs strictly in order:
//!
//! 1. [`microstates`] enumerates every electron arrangement of each subshell.
//! 2. [`rows`] combines one arrangement per subshell into full-configuration rows and
//!    derives their total `Ml` and `Ms`.
//! 3. [`compression`] folds the rows into an `(Ml, Ms)` multiset.
//! 4. [`extraction`] repeatedly removes the largest rectangular block from that multiset,
//!    emitting one term per block.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Analysis parameters and their builder
//! - **Row Selection** ([`filter`]) - Paging and term-based filtering of row tables
//! - **Progress Monitoring** ([`progress`]) - Phase reporting for front ends
//! - **Error Handling** ([`error`]) - Engine-specific error types and error propagation

pub mod compression;
pub mod config;
pub mod error;
pub mod extraction;
pub mod filter;
pub mod microstates;
pub mod progress;
pub mod rows;
