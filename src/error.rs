use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The adjacency matrix is not square, or a weight vector does not match
    /// the number of nodes or edges.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A strength value that cannot be mixed, caused by zero, negative or
    /// non-finite weights.
    #[error("degenerate strength: {0}")]
    DegenerateStrength(String),
}

pub type Result<T> = std::result::Result<T, Error>;
