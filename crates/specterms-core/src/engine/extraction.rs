use crate::core::models::term::{MAX_L, Term};
use crate::engine::compression::CompressedRows;
use crate::engine::error::EngineError;
use tracing::{debug, instrument, trace};

/// Extracts Russell–Saunders terms by repeatedly removing the largest `(Ml, Ms)` block.
///
/// Each pass picks `L` as the largest `|Ml|` still populated and `S` as the largest
/// `|Ms|` populated at that `|Ml|`, then removes one row for every cell of the
/// `(2L+1) x (2S+1)` block. A repeated `(L, S)` increments the count of the term
/// already emitted. The multiset is left exhausted on success.
///
/// # Errors
///
/// Returns `EngineError::InconsistentState` if a block cell has no row left, which
/// cannot happen for a multiset produced by [`compress`](super::compression::compress).
/// The block is checked before anything is removed, so on error the multiset still
/// holds every row that was left when the failing block was chosen.
#[instrument(skip_all, name = "extract_terms")]
pub fn extract_terms(compressed: &mut CompressedRows) -> Result<Vec<Term>, EngineError> {
    let mut terms: Vec<Term> = Vec::new();

    while let Some((l, two_s)) = find_block(compressed) {
        check_block(compressed, l, two_s)?;
        match terms
            .iter_mut()
            .find(|term| term.l == l && term.two_s() == two_s)
        {
            Some(term) => term.count += 1,
            None => {
                let id = terms.len() as u32 + 1;
                let term = Term::new(id, l, two_s).ok_or_else(|| {
                    EngineError::InvalidArgument(format!(
                        "orbital angular momentum L = {} exceeds the supported maximum of {}",
                        l, MAX_L
                    ))
                })?;
                terms.push(term);
            }
        }

        remove_block(compressed, l, two_s)?;
        debug!(
            l,
            s = f64::from(two_s) / 2.0,
            removed = (2 * l + 1) * (two_s + 1),
            remaining = compressed.total_count(),
            "Removed term block."
        );
    }

    Ok(terms)
}

/// Returns `(L, 2S)` of the next block, or `None` once nothing is left.
fn find_block(compressed: &CompressedRows) -> Option<(u32, u32)> {
    let live = || compressed.entries().iter().filter(|entry| entry.is_live());

    let l = live().map(|entry| entry.ml.unsigned_abs()).max()?;
    let two_s = live()
        .filter(|entry| entry.ml.unsigned_abs() == l)
        .map(|entry| entry.two_ms().unsigned_abs())
        .max()?;
    Some((l, two_s))
}

/// Cells `(Ml, Ms)` of the `(2L+1) x (2S+1)` block, `Ml` outermost.
fn block_cells(l: u32, two_s: u32) -> impl Iterator<Item = (i32, f64)> {
    let l = l as i32;
    let two_s = two_s as i32;
    (-l..=l).flat_map(move |ml| {
        (-two_s..=two_s)
            .step_by(2)
            .map(move |two_ms| (ml, f64::from(two_ms) / 2.0))
    })
}

fn check_block(compressed: &CompressedRows, l: u32, two_s: u32) -> Result<(), EngineError> {
    match block_cells(l, two_s).find(|&(ml, ms)| compressed.count_of(ml, ms) == 0) {
        Some((ml, ms)) => Err(EngineError::InconsistentState { ml, ms }),
        None => Ok(()),
    }
}

fn remove_block(compressed: &mut CompressedRows, l: u32, two_s: u32) -> Result<(), EngineError> {
    for (ml, ms) in block_cells(l, two_s) {
        if !compressed.decrement(ml, ms) {
            return Err(EngineError::InconsistentState { ml, ms });
        }
        trace!(ml, ms, "Consumed block cell.");
    }
    Ok(())
}
