//! Read-request descriptions: raw per-dimension indexing and its
//! normalized half-open form.

mod normalize;
mod raw;
mod types;

pub use raw::RawDim;
pub use types::{DimRange, SliceSpec};
