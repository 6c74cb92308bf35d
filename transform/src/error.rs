use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("NTT length `{0}` is not a power of two")]
    NotPowerOfTwo(usize),

    #[error("transform length `{len}` exceeds the supported maximum `{max}`")]
    TooLong { len: usize, max: usize },
}
