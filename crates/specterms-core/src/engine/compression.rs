use crate::engine::rows::Row;
use serde::Serialize;
use std::collections::HashMap;

/// Number of rows sharing one `(Ml, Ms)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompressedRow {
    pub ml: i32,
    pub ms: f64,
    pub count: u64,
}

impl CompressedRow {
    #[inline]
    pub fn two_ms(&self) -> i32 {
        doubled(self.ms)
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.count > 0
    }
}

#[inline]
fn doubled(ms: f64) -> i32 {
    (ms * 2.0).round() as i32
}

/// Multiset of `(Ml, Ms)` pairs built from a row table.
///
/// Entries keep the order in which their pair was first seen. Counts only ever
/// decrease after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompressedRows {
    entries: Vec<CompressedRow>,
    index: HashMap<(i32, i32), usize>,
}

impl CompressedRows {
    pub fn entries(&self) -> &[CompressedRow] {
        &self.entries
    }

    /// Number of distinct `(Ml, Ms)` pairs, including exhausted ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn count_of(&self, ml: i32, ms: f64) -> u64 {
        self.index
            .get(&(ml, doubled(ms)))
            .map_or(0, |&i| self.entries[i].count)
    }

    /// `true` once every count has reached zero.
    pub fn is_exhausted(&self) -> bool {
        self.entries.iter().all(|entry| entry.count == 0)
    }

    /// Removes one occurrence of `(ml, ms)`. Returns `false` if none is left.
    pub fn decrement(&mut self, ml: i32, ms: f64) -> bool {
        match self.index.get(&(ml, doubled(ms))) {
            Some(&i) if self.entries[i].count > 0 => {
                self.entries[i].count -= 1;
                true
            }
            _ => false,
        }
    }

    fn add(&mut self, ml: i32, ms: f64) {
        let key = (ml, doubled(ms));
        match self.index.get(&key) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(CompressedRow { ml, ms, count: 1 });
            }
        }
    }

    /// Population of the non-negative quadrant `Ml >= 0, Ms >= 0`.
    pub fn population_table(&self) -> MlMsTable {
        let max_ml = self
            .entries
            .iter()
            .filter(|e| e.is_live())
            .map(|e| e.ml)
            .max()
            .unwrap_or(0)
            .max(0);
        let max_two_ms = self
            .entries
            .iter()
            .filter(|e| e.is_live())
            .map(CompressedRow::two_ms)
            .max()
            .unwrap_or(0)
            .max(0);
        // All rows share the parity of 2Ms, so the columns start at 0 or 1/2.
        let min_two_ms = max_two_ms % 2;

        let ml_values: Vec<i32> = (0..=max_ml).rev().collect();
        let two_ms_values: Vec<i32> = (min_two_ms..=max_two_ms).rev().step_by(2).collect();
        let counts = ml_values
            .iter()
            .map(|&ml| {
                two_ms_values
                    .iter()
                    .map(|&two_ms| self.count_of(ml, f64::from(two_ms) / 2.0))
                    .collect()
            })
            .collect();

        MlMsTable {
            ml_values,
            ms_values: two_ms_values
                .into_iter()
                .map(|two_ms| f64::from(two_ms) / 2.0)
                .collect(),
            counts,
        }
    }
}

/// Compresses rows into their `(Ml, Ms)` multiset.
pub fn compress(rows: &[Row]) -> CompressedRows {
    let mut compressed = CompressedRows::default();
    for row in rows {
        compressed.add(row.ml, row.ms);
    }
    compressed
}

/// Row counts per `(Ml, Ms)` with `Ml` and `Ms` both non-negative.
///
/// Rows of the table run from the highest `Ml` down to zero; columns from the
/// highest `Ms` down to the lowest non-negative value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MlMsTable {
    pub ml_values: Vec<i32>,
    pub ms_values: Vec<f64>,
    pub counts: Vec<Vec<u64>>,
}

impl MlMsTable {
    pub fn get(&self, ml: i32, ms: f64) -> Option<u64> {
        let row = self.ml_values.iter().position(|&v| v == ml)?;
        let col = self
            .ms_values
            .iter()
            .position(|&v| doubled(v) == doubled(ms))?;
        Some(self.counts[row][col])
    }
}
