/// Errors raised while resolving an index tuple against an array.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("too many indices for array: got {given}, expected at most {rank}")]
    TooManyIndices { given: usize, rank: usize },

    #[error("index {index} is out of bounds for axis {axis} with size {size}")]
    OutOfBounds {
        axis: usize,
        index: usize,
        size: usize,
    },
}

/// Errors raised by [`NdArray::arange`](crate::NdArray::arange) for range
/// parameters no array can be built from.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ArgError {
    #[error("step must be non-zero")]
    ZeroStep,

    #[error("empty range: start and stop are both {bound}")]
    EqualBounds { bound: f64 },
}

/// Crate-wide error, unifying the indexing and argument taxonomies.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Arg(#[from] ArgError),

    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
