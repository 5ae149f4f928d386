//! # Workflows Module
//!
//! High-level entry points that run the complete term analysis of an electron
//! configuration.
//!
//! ## Overview
//!
//! A workflow validates its configuration, drives the engine stages strictly in order,
//! reports each phase through a [`ProgressReporter`](crate::engine::progress::ProgressReporter)
//! and returns every intermediate result alongside the extracted terms.
//!
//! ## Architecture
//!
//! - **Analysis Workflow** ([`analyze`]) - Microstate generation, row building,
//!   compression and term extraction for one configuration.

pub mod analyze;
