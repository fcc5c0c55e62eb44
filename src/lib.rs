//! Incremental min/max range cache for large N-dimensional arrays.
//!
//! Full scans of an out-of-core array are expensive, so the cache tracks
//! which regions have already been folded into the running `(min, max)`
//! and never re-reads data it has already seen. Coverage is recorded
//! independently per "volume" (a designated axis, typically time or
//! batch), as a single axis-aligned bounding box per volume.
//!
//! The update pipeline:
//! 1. Normalize the caller's indexing to a [`SliceSpec`] (no I/O)
//! 2. [`plan()`] the request against current coverage (no I/O)
//! 3. Read only the planned regions, fold finite values into the range,
//!    expand coverage, and notify listeners if the pair changed
//!
//! A partially covered box is re-scanned whole rather than decomposed
//! into the uncovered remainder; see [`plan()`] for the tradeoff.

mod cache;
mod coverage;
mod error;
mod fold;
mod plan;
mod spec;

pub use cache::{
    ListenerId, OnRangeChanged, RangeCache, SharedRangeCache, SourceError, VolumeSource,
};
pub use coverage::{CoverageBox, CoverageState};
pub use error::{RangeError, Result};
pub use fold::{DataRange, RangeScalar};
pub use plan::{plan, PlanResult, ScanRegion};
pub use spec::{DimRange, RawDim, SliceSpec};
