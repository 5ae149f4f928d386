use crate::core::models::term::TermSymbol;
use crate::engine::rows::Row;

/// Returns `true` if the row lies inside the `(Ml, Ms)` block of `symbol`.
pub fn row_in_block(row: &Row, symbol: &TermSymbol) -> bool {
    row.ml.unsigned_abs() <= symbol.l && row.two_ms().unsigned_abs() <= symbol.two_s()
}

/// Selects a page of rows, optionally restricted to the blocks of some terms.
///
/// With a non-empty `terms`, a row is kept when it falls inside at least one of
/// their blocks. The first `start` kept rows are skipped and at most `length` are
/// returned (`None` returns the rest). Table order is preserved.
pub fn filter_rows<'a>(
    rows: &'a [Row],
    terms: &[TermSymbol],
    start: usize,
    length: Option<usize>,
) -> Vec<&'a Row> {
    let kept = rows
        .iter()
        .filter(|row| terms.is_empty() || terms.iter().any(|symbol| row_in_block(row, symbol)))
        .skip(start);
    match length {
        Some(length) => kept.take(length).collect(),
        None => kept.collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rows::build_rows_from_counts;

    fn p2_rows() -> Vec<Row> {
        build_rows_from_counts([0, 2, 0, 0], [2, 6, 10, 14])
            .unwrap()
            .as_slice()
            .to_vec()
    }

    #[test]
    fn empty_term_list_pages_the_whole_table() {
        let rows = p2_rows();
        assert_eq!(filter_rows(&rows, &[], 0, None).len(), 15);
        let page = filter_rows(&rows, &[], 10, Some(3));
        assert_eq!(page.len(), 3);
        assert_eq!(*page[0], rows[10]);
    }

    #[test]
    fn singlet_s_keeps_only_zero_projection_rows() {
        let rows = p2_rows();
        let kept = filter_rows(&rows, &["1S".parse().unwrap()], 0, None);
        assert_eq!(kept.len(), 3);
        assert!(kept.iter().all(|r| r.ml == 0 && r.ms == 0.0));
    }

    #[test]
    fn triplet_p_keeps_its_nine_cells() {
        let rows = p2_rows();
        let kept = filter_rows(&rows, &["3P".parse().unwrap()], 0, None);
        // Every row with |Ml| <= 1, i.e. all but the two Ml = +-2 rows.
        assert_eq!(kept.len(), 13);
        assert!(kept.iter().all(|r| r.ml.abs() <= 1));
    }

    #[test]
    fn multiple_terms_take_the_union_in_table_order() {
        let rows = p2_rows();
        let terms: Vec<TermSymbol> = vec!["1D".parse().unwrap(), "1S".parse().unwrap()];
        let kept = filter_rows(&rows, &terms, 0, None);
        assert!(kept.iter().all(|r| r.ms == 0.0));
        assert_eq!(kept.len(), 9);
        let positions: Vec<usize> = kept
            .iter()
            .map(|k| rows.iter().position(|r| r == *k).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn start_beyond_end_yields_nothing() {
        let rows = p2_rows();
        assert!(filter_rows(&rows, &[], 100, Some(5)).is_empty());
    }
}
