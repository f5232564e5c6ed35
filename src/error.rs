//! Error types for the library.

/// Errors raised at the call boundary before any `dist`/`pred` mutation begins.
///
/// The core itself has no partial-failure mode (see the algorithm's error-handling
/// design): once `bmssp` starts running it either completes and leaves `dist`/`pred`
/// consistent, or a latent bug manifests as an unreachable vertex that should have
/// been reachable. That class of failure is not representable here — it is caught by
/// the oracle-equivalence tests, not by a `Result`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("vertex count n must be representable, got {0}")]
    InvalidVertexCount(usize),

    #[error("row_ptr has length {actual}, expected {expected} (n+1)")]
    InvalidRowPtrLength { actual: usize, expected: usize },

    #[error("row_ptr is not monotonically non-decreasing at index {0}")]
    RowPtrNotMonotone(usize),

    #[error("row_ptr[0] = {0}, expected 0")]
    RowPtrStartNonZero(usize),

    #[error("row_ptr[n] = {actual}, expected m = {expected}")]
    RowPtrEndMismatch { actual: usize, expected: usize },

    #[error("edge endpoint {0} is out of range for n = {1}")]
    InvalidEndpoint(usize, usize),

    #[error("edge weight {0} is negative")]
    NegativeWeight(f64),

    #[error("edge weight is not finite")]
    NonFiniteWeight,

    #[error("source vertex {source} is out of range for n = {n}")]
    InvalidSource { source: usize, n: usize },

    #[error("malformed input graph: {0}")]
    MalformedGraph(String),
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
