use smallvec::SmallVec;

use crate::coverage::CoverageBox;
use crate::spec::{DimRange, SliceSpec};

/// One sub-region that must be scanned: a single volume plus the
/// requested box over the non-volume dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRegion {
    pub volume: u64,
    pub target: CoverageBox,
}

impl ScanRegion {
    /// Reassemble the full-dimensional spec for this region, with the
    /// volume axis pinned to `[volume, volume + 1)`.
    pub fn to_spec(&self, volume_axis: usize) -> SliceSpec {
        let mut dims: SmallVec<[DimRange; 4]> =
            SmallVec::with_capacity(self.target.ndim() + 1);
        let mut rest = self.target.dims().iter();
        for d in 0..=self.target.ndim() {
            if d == volume_axis {
                dims.push(DimRange::new(self.volume, self.volume + 1));
            } else {
                dims.push(*rest.next().expect("box ndim matches spec ndim - 1"));
            }
        }
        SliceSpec(dims)
    }
}

/// Outcome of planning a request against the current coverage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanResult {
    /// Every addressed volume already covers the requested box; the
    /// cached range is already up to date for this request.
    FullyCovered,
    /// These regions must be read and folded in, one entry per
    /// not-yet-covered volume.
    NeedsScan(Vec<ScanRegion>),
}
