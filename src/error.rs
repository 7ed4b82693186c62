use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GraphError {
    #[error("node index {index} is out of range for a graph with {len} nodes")]
    InvalidNode { index: usize, len: usize },

    #[error("edge between {src} and {dst} already exists")]
    DuplicateEdge { src: usize, dst: usize },

    #[error("edge probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("edges per step must satisfy 1 <= m < n, got m = {m} and n = {n}")]
    InvalidEdgesPerStep { m: usize, n: usize },
}

pub type GraphResult<T> = Result<T, GraphError>;
