use snafu::prelude::*;

/// Error type for range-cache operations.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum RangeError {
    #[snafu(display("invalid index: {}", msg))]
    InvalidIndex { msg: String },

    #[snafu(display("backing read failed: {}", source))]
    BackingRead {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[snafu(display("update_range re-entered from a range-change listener"))]
    Reentrancy,

    #[snafu(display("array shape must have at least one dimension"))]
    EmptyShape,

    #[snafu(display("dimension {} has zero length", dim))]
    ZeroLengthDim { dim: usize },

    #[snafu(display(
        "volume axis {} out of bounds for {}-dimensional shape",
        axis,
        ndim
    ))]
    VolumeAxisOutOfBounds { axis: usize, ndim: usize },
}

pub type Result<T> = std::result::Result<T, RangeError>;
