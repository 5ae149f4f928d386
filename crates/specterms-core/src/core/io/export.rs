use super::traits::TableFile;
use crate::core::models::term::Term;
use crate::engine::rows::Row;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Serialize)]
struct RowRecord {
    index: usize,
    occupation: String,
    ml: i32,
    ms: f64,
}

#[derive(Debug, Serialize)]
struct TermRecord {
    id: u32,
    symbol: String,
    l: u32,
    s: f64,
    multiplicity: u32,
    letter: char,
    count: u32,
    levels: String,
}

/// Rows as CSV: `index,occupation,ml,ms`, with the occupation word as 32 binary digits.
pub struct RowsCsv;

impl TableFile for RowsCsv {
    type Data = [Row];
    type Error = ExportError;

    fn write_to(rows: &[Row], writer: &mut impl Write) -> Result<(), ExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for (index, row) in rows.iter().enumerate() {
            csv_writer.serialize(RowRecord {
                index,
                occupation: format!("{:032b}", row.occupation),
                ml: row.ml,
                ms: row.ms,
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Terms as CSV: `id,symbol,l,s,multiplicity,letter,count,levels`.
pub struct TermsCsv;

impl TableFile for TermsCsv {
    type Data = [Term];
    type Error = ExportError;

    fn write_to(terms: &[Term], writer: &mut impl Write) -> Result<(), ExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for term in terms {
            let levels: Vec<String> = term.levels.iter().map(ToString::to_string).collect();
            csv_writer.serialize(TermRecord {
                id: term.id,
                symbol: term.symbol().to_string(),
                l: term.l,
                s: term.s,
                multiplicity: term.multiplicity,
                letter: term.letter,
                count: term.count,
                levels: levels.join(" "),
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

pub fn write_rows(rows: &[Row], writer: &mut impl Write) -> Result<(), ExportError> {
    RowsCsv::write_to(rows, writer)
}

pub fn write_terms(terms: &[Term], writer: &mut impl Write) -> Result<(), ExportError> {
    TermsCsv::write_to(terms, writer)
}

pub fn write_rows_to_path<P: AsRef<Path>>(rows: &[Row], path: P) -> Result<(), ExportError> {
    RowsCsv::write_to_path(rows, path)
}

pub fn write_terms_to_path<P: AsRef<Path>>(terms: &[Term], path: P) -> Result<(), ExportError> {
    TermsCsv::write_to_path(terms, path)
}
