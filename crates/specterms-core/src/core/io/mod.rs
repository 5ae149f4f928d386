//! Provides output functionality for analysis results.
//!
//! This module writes row tables and term lists to tabular file formats. Formats share
//! the [`traits::TableFile`] interface, which adds path-based helpers on top of
//! writer-based serialization.

pub mod export;
pub mod traits;
