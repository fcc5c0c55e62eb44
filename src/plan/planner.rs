use super::types::{PlanResult, ScanRegion};
use crate::coverage::CoverageState;
use crate::spec::SliceSpec;

/// Decide what must be scanned to bring the cached range up to date for
/// `spec`.
///
/// The request decomposes into one sub-problem per addressed volume,
/// since coverage is tracked independently per volume. A volume whose
/// requested box lies inside its recorded coverage emits nothing. For
/// any other volume the whole requested box is emitted: overlap with
/// existing coverage is resolved by conservative whole-box re-scan, not
/// by geometric set subtraction, so a scan never exceeds the single
/// requested box and never under-scans.
///
/// Pure and non-blocking; performs no I/O.
pub fn plan(spec: &SliceSpec, state: &CoverageState) -> PlanResult {
    let (volumes, target) = state.split_spec(spec);

    let regions: Vec<ScanRegion> = (volumes.low..volumes.high)
        .filter(|&v| !state.is_covered(v, &target))
        .map(|v| ScanRegion {
            volume: v,
            target: target.clone(),
        })
        .collect();

    if regions.is_empty() {
        PlanResult::FullyCovered
    } else {
        PlanResult::NeedsScan(regions)
    }
}
