//! The range cache itself: owns the running `(min, max)` and the
//! coverage state, reads only the sub-regions the planner says are
//! missing, and notifies listeners on committed changes.

mod notify;
mod range_cache;
mod shared;
mod source;

pub use notify::{ListenerId, OnRangeChanged};
pub use range_cache::RangeCache;
pub use shared::SharedRangeCache;
pub use source::{SourceError, VolumeSource};
