//! Rendering of analysis results for the terminal.
//!
//! Text output draws every occupied subshell as a row of orbital boxes holding `↿`
//! (spin up), `⇂` (spin down) or `⥮` (paired). JSON output carries the same data
//! in a machine-readable form.

pub mod diagram;
pub mod json;
pub mod text;
