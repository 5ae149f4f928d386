use crate::core::combinatorics::CombinatoricsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cannot allocate storage for {requested} rows (limit {limit})")]
    AllocationFailure { requested: u64, limit: u64 },

    #[error("No remaining microstate with Ml = {ml}, Ms = {ms} while removing a term block")]
    InconsistentState { ml: i32, ms: f64 },

    #[error("Combinatorics error: {source}")]
    Combinatorics {
        #[from]
        source: CombinatoricsError,
    },
}
