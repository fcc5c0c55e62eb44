use smallvec::SmallVec;

use super::raw::RawDim;
use super::types::{DimRange, SliceSpec};
use crate::error::{InvalidIndexSnafu, Result};

impl SliceSpec {
    /// Normalize caller-supplied indexing against `shape`.
    ///
    /// `raw` may be shorter than `shape`; trailing dimensions are treated
    /// as [`RawDim::All`]. Range bounds are clamped to the dimension
    /// length. Fails if `raw` has more entries than `shape`, if a single
    /// index lies outside `[0, shape[d])`, or if any dimension normalizes
    /// to an empty range.
    pub fn normalize(raw: &[RawDim], shape: &[u64]) -> Result<SliceSpec> {
        if raw.len() > shape.len() {
            return InvalidIndexSnafu {
                msg: format!(
                    "{} index entries for a {}-dimensional array",
                    raw.len(),
                    shape.len()
                ),
            }
            .fail();
        }

        let mut dims: SmallVec<[DimRange; 4]> = SmallVec::with_capacity(shape.len());
        for (d, &len) in shape.iter().enumerate() {
            let r = match raw.get(d).copied().unwrap_or(RawDim::All) {
                RawDim::Index(i) => {
                    if i >= len {
                        return InvalidIndexSnafu {
                            msg: format!(
                                "index {} out of bounds for dimension {} of length {}",
                                i, d, len
                            ),
                        }
                        .fail();
                    }
                    DimRange::new(i, i + 1)
                }
                RawDim::Range { start, end } => DimRange::new(
                    start.unwrap_or(0).min(len),
                    end.unwrap_or(len).min(len),
                ),
                RawDim::All => DimRange::new(0, len),
            };
            if r.is_empty() {
                return InvalidIndexSnafu {
                    msg: format!(
                        "empty slice [{}, {}) for dimension {} of length {}",
                        r.low, r.high, d, len
                    ),
                }
                .fail();
            }
            dims.push(r);
        }

        Ok(SliceSpec(dims))
    }
}
