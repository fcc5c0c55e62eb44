use smallvec::SmallVec;

use crate::spec::DimRange;

/// Axis-aligned bounding box over the non-volume dimensions of one
/// volume, describing the region already folded into the cached range.
///
/// Always a single contiguous rectangle. Unioning two boxes yields their
/// bounding box, so coverage only ever grows and may include gaps that
/// were never scanned directly; the planner compensates by re-scanning a
/// whole requested box whenever it is not fully inside the recorded one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageBox {
    dims: SmallVec<[DimRange; 4]>,
}

impl CoverageBox {
    pub fn new(dims: impl Into<SmallVec<[DimRange; 4]>>) -> Self {
        Self { dims: dims.into() }
    }

    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    pub fn dims(&self) -> &[DimRange] {
        &self.dims
    }

    /// True if `other` lies entirely within `self`, per dimension.
    pub fn contains(&self, other: &CoverageBox) -> bool {
        debug_assert_eq!(self.dims.len(), other.dims.len());
        self.dims
            .iter()
            .zip(other.dims.iter())
            .all(|(a, b)| a.contains_range(b))
    }

    /// Smallest box containing both `self` and `other`. Monotonic: the
    /// result always contains `self`.
    pub fn union(&self, other: &CoverageBox) -> CoverageBox {
        debug_assert_eq!(self.dims.len(), other.dims.len());
        CoverageBox {
            dims: self
                .dims
                .iter()
                .zip(other.dims.iter())
                .map(|(a, b)| a.union(b))
                .collect(),
        }
    }
}
