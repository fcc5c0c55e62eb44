/// Caller-supplied indexing for a single dimension, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawDim {
    /// A single index `i`, normalized to `[i, i + 1)`.
    Index(u64),
    /// A half-open range with possibly-missing bounds. A missing start
    /// means `0`, a missing end means the dimension length.
    Range {
        start: Option<u64>,
        end: Option<u64>,
    },
    /// The whole dimension, `[0, len)`.
    All,
}

impl RawDim {
    pub fn range(start: u64, end: u64) -> Self {
        RawDim::Range {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn from_start(start: u64) -> Self {
        RawDim::Range {
            start: Some(start),
            end: None,
        }
    }

    pub fn to_end(end: u64) -> Self {
        RawDim::Range {
            start: None,
            end: Some(end),
        }
    }
}

impl From<u64> for RawDim {
    fn from(i: u64) -> Self {
        RawDim::Index(i)
    }
}

impl From<std::ops::Range<u64>> for RawDim {
    fn from(r: std::ops::Range<u64>) -> Self {
        RawDim::range(r.start, r.end)
    }
}

impl From<std::ops::RangeFull> for RawDim {
    fn from(_: std::ops::RangeFull) -> Self {
        RawDim::All
    }
}

impl From<std::ops::RangeFrom<u64>> for RawDim {
    fn from(r: std::ops::RangeFrom<u64>) -> Self {
        RawDim::from_start(r.start)
    }
}

impl From<std::ops::RangeTo<u64>> for RawDim {
    fn from(r: std::ops::RangeTo<u64>) -> Self {
        RawDim::to_end(r.end)
    }
}
