//! Expansion planning: decide which volume sub-regions a request
//! actually needs scanned, given what coverage already exists.

mod planner;
mod types;

pub use planner::plan;
pub use types::{PlanResult, ScanRegion};
