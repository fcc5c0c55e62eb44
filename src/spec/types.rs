use smallvec::SmallVec;

/// Half-open index range `[low, high)` along a single dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DimRange {
    pub low: u64,
    pub high: u64,
}

impl DimRange {
    pub fn new(low: u64, high: u64) -> Self {
        Self { low, high }
    }

    pub fn is_empty(&self) -> bool {
        self.low >= self.high
    }

    pub fn len(&self) -> u64 {
        self.high.saturating_sub(self.low)
    }

    /// True if `other` lies entirely within `self`.
    pub fn contains_range(&self, other: &DimRange) -> bool {
        self.low <= other.low && other.high <= self.high
    }

    /// Smallest range containing both `self` and `other`.
    pub fn union(&self, other: &DimRange) -> DimRange {
        DimRange {
            low: self.low.min(other.low),
            high: self.high.max(other.high),
        }
    }
}

/// Normalized description of a read request: one half-open `(low, high)`
/// pair per array dimension, clamped to the array shape.
///
/// Built via [`SliceSpec::normalize`]; every dimension satisfies
/// `low < high <= shape[d]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SliceSpec(pub(crate) SmallVec<[DimRange; 4]>);

impl SliceSpec {
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    pub fn dims(&self) -> &[DimRange] {
        &self.0
    }

    pub fn dim(&self, d: usize) -> DimRange {
        self.0[d]
    }

    /// Total number of elements addressed.
    pub fn num_elements(&self) -> u64 {
        self.0.iter().map(DimRange::len).product()
    }
}

impl From<&[DimRange]> for SliceSpec {
    fn from(dims: &[DimRange]) -> Self {
        Self(dims.iter().copied().collect())
    }
}
