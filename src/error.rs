use thiserror::Error;
use transform::TransformError;

#[derive(Debug, Clone, Error)]
pub enum TriplesError {
    #[error("Invalid symbol `{ch}` at index `{idx}`, only `0` and `1` are accepted")]
    InvalidSymbol { idx: usize, ch: char },

    #[error("Input length `{len}` exceeds the limit `{max}`")]
    InputTooLong { len: usize, max: usize },

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error("{0}")]
    ConfigFailed(String),
}
