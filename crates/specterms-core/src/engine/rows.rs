use crate::core::models::configuration::ElectronConfiguration;
use crate::core::models::microstate::Microstate;
use crate::core::models::subshell::SubshellKind;
use crate::engine::error::EngineError;
use crate::engine::microstates::SubshellMicrostates;
use serde::Serialize;
use tracing::{debug, instrument};

/// One microstate of the complete configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Row {
    /// Concatenated subshell patterns: `s << 30 | p << 24 | d << 14 | f`.
    pub occupation: u32,
    pub ml: i32,
    pub ms: f64,
}

impl Row {
    pub fn from_occupation(occupation: u32) -> Self {
        let (ml, two_ms) = decode_row(occupation);
        Self {
            occupation,
            ml,
            ms: f64::from(two_ms) / 2.0,
        }
    }

    #[inline]
    pub fn two_ms(&self) -> i32 {
        (self.ms * 2.0).round() as i32
    }

    /// The microstate of one subshell within this row.
    pub fn microstate(&self, kind: SubshellKind) -> Microstate {
        let bits = (self.occupation >> kind.bit_offset()) & kind.mask();
        // The mask guarantees the pattern fits the subshell.
        Microstate::new(kind, bits as u16).unwrap_or_else(|| unreachable!())
    }

    pub fn split(&self) -> [Microstate; 4] {
        SubshellKind::ALL.map(|kind| self.microstate(kind))
    }
}

/// Computes `(Ml, 2·Ms)` of an occupation word.
///
/// Subshells are walked from the lowest-order one (f) upwards. Within a subshell,
/// slot `k` (from the least significant bit pair) carries `ml = l - k`; bit 0 of a
/// slot is the spin-down spin-orbital and bit 1 the spin-up one.
pub fn decode_row(occupation: u32) -> (i32, i32) {
    let mut ml = 0;
    let mut two_ms = 0;
    for kind in SubshellKind::ALL.into_iter().rev() {
        let bits = (occupation >> kind.bit_offset()) & kind.mask();
        if bits == 0 {
            continue;
        }
        for slot in 0..kind.slot_count() {
            let down = ((bits >> (2 * slot)) & 1) as i32;
            let up = ((bits >> (2 * slot + 1)) & 1) as i32;
            ml += kind.slot_ml(slot) * (down + up);
            two_ms += up - down;
        }
    }
    (ml, two_ms)
}

/// Materialised row table of a configuration, in mixed-radix order (s slowest, f fastest).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowTable {
    rows: Vec<Row>,
}

impl RowTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    pub fn as_slice(&self) -> &[Row] {
        &self.rows
    }

    pub fn max_ml(&self) -> Option<i32> {
        self.rows.iter().map(|row| row.ml).max()
    }

    pub fn max_ms(&self) -> Option<f64> {
        self.rows
            .iter()
            .map(Row::two_ms)
            .max()
            .map(|two_ms| f64::from(two_ms) / 2.0)
    }
}

impl<'a> IntoIterator for &'a RowTable {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Builds every row of `configuration` from its subshell microstates.
///
/// # Errors
///
/// Returns `EngineError::InvalidArgument` if `microstates` were not generated for
/// this configuration, and `EngineError::AllocationFailure` if the table cannot be
/// reserved.
#[instrument(skip_all, name = "build_rows")]
pub fn build_rows(
    configuration: &ElectronConfiguration,
    microstates: &SubshellMicrostates,
) -> Result<RowTable, EngineError> {
    let combinations = configuration.combinations();
    let lengths = microstates.lengths();
    for kind in SubshellKind::ALL {
        if lengths[kind.index()] as u64 != combinations.of(kind) {
            return Err(EngineError::InvalidArgument(format!(
                "{} microstates given for the {} subshell, expected {}",
                lengths[kind.index()],
                kind,
                combinations.of(kind)
            )));
        }
    }

    let total = combinations.total().ok_or(EngineError::AllocationFailure {
        requested: u64::MAX,
        limit: usize::MAX as u64,
    })?;
    let capacity = usize::try_from(total).map_err(|_| EngineError::AllocationFailure {
        requested: total,
        limit: usize::MAX as u64,
    })?;

    let mut rows = Vec::new();
    rows.try_reserve_exact(capacity)
        .map_err(|_| EngineError::AllocationFailure {
            requested: total,
            limit: usize::MAX as u64,
        })?;

    let [_, p_len, d_len, f_len] = lengths;
    let f_stride = f_len;
    let d_stride = d_len * f_stride;
    let p_stride = p_len * d_stride;

    let s_states = microstates.of(SubshellKind::S);
    let p_states = microstates.of(SubshellKind::P);
    let d_states = microstates.of(SubshellKind::D);
    let f_states = microstates.of(SubshellKind::F);

    for index in 0..capacity {
        let s = s_states[index / p_stride];
        let p = p_states[(index % p_stride) / d_stride];
        let d = d_states[(index % d_stride) / f_stride];
        let f = f_states[index % f_stride];

        let occupation = compose([s, p, d, f]);
        rows.push(Row::from_occupation(occupation));
    }

    debug!(rows = rows.len(), "Row table built.");
    Ok(RowTable { rows })
}

/// Concatenates one microstate per subshell into an occupation word.
pub fn compose(states: [Microstate; 4]) -> u32 {
    states
        .iter()
        .fold(0u32, |word, state| {
            word | (u32::from(state.bits()) << state.kind.bit_offset())
        })
}

/// Builds rows from raw electron counts and subshell capacities.
///
/// Capacities must be exactly `[2, 6, 10, 14]`; they are accepted as input so that
/// callers holding both arrays can pass them through unchanged.
pub fn build_rows_from_counts(counts: [u32; 4], capacities: [u32; 4]) -> Result<RowTable, EngineError> {
    let expected = SubshellKind::ALL.map(SubshellKind::capacity);
    if capacities != expected {
        return Err(EngineError::InvalidArgument(format!(
            "subshell capacities must be {:?}, got {:?}",
            expected, capacities
        )));
    }
    let configuration = ElectronConfiguration::from_counts(counts)
        .map_err(|e| EngineError::InvalidArgument(e.to_string()))?;
    let microstates = SubshellMicrostates::generate(&configuration)?;
    build_rows(&configuration, &microstates)
}
