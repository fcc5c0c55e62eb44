//! Per-volume coverage geometry: which regions have already been folded
//! into the cached range.

mod bounds;
mod state;

pub use bounds::CoverageBox;
pub use state::CoverageState;
