use tracing::{debug, trace, warn};

use super::notify::{ListenerId, ListenerSet, OnRangeChanged};
use super::source::VolumeSource;
use crate::coverage::{CoverageBox, CoverageState};
use crate::error::{
    BackingReadSnafu, EmptyShapeSnafu, RangeError, Result, VolumeAxisOutOfBoundsSnafu,
    ZeroLengthDimSnafu,
};
use crate::fold::{DataRange, RangeScalar};
use crate::plan::{plan, PlanResult};
use crate::spec::{RawDim, SliceSpec};
use snafu::prelude::*;

/// Incremental min/max cache over an N-dimensional backing array.
///
/// Tracks, per volume along the designated axis, which region has
/// already been folded into the running `(min, max)`, and on each
/// request scans only the volumes whose requested box is not yet
/// covered. Re-scanning of a partially covered box is conservative: the
/// whole requested box is read again rather than the geometric
/// difference (see [`crate::plan::plan`]).
///
/// Not internally thread-safe; wrap in [`super::shared::SharedRangeCache`]
/// to share across threads.
pub struct RangeCache<T, S> {
    shape: Vec<u64>,
    volume_axis: usize,
    source: S,
    coverage: CoverageState,
    range: DataRange<T>,
    listeners: ListenerSet<T>,
    notifying: bool,
}

impl<T, S> RangeCache<T, S>
where
    T: RangeScalar,
    S: VolumeSource<T>,
{
    /// Create a cache over an array of the given shape, with coverage
    /// tracked independently per index along `volume_axis`. `source` is
    /// the only path through which array data is ever read.
    pub fn new(shape: Vec<u64>, volume_axis: usize, source: S) -> Result<Self> {
        ensure!(!shape.is_empty(), EmptyShapeSnafu);
        for (dim, &len) in shape.iter().enumerate() {
            ensure!(len > 0, ZeroLengthDimSnafu { dim });
        }
        ensure!(
            volume_axis < shape.len(),
            VolumeAxisOutOfBoundsSnafu {
                axis: volume_axis,
                ndim: shape.len(),
            }
        );

        let coverage = CoverageState::new(shape[volume_axis], volume_axis);
        Ok(Self {
            shape,
            volume_axis,
            source,
            coverage,
            range: DataRange::default(),
            listeners: ListenerSet::default(),
            notifying: false,
        })
    }

    pub fn shape(&self) -> &[u64] {
        &self.shape
    }

    pub fn volume_axis(&self) -> usize {
        self.volume_axis
    }

    pub fn num_volumes(&self) -> u64 {
        self.coverage.num_volumes()
    }

    /// Last committed `(min, max)`. Never performs I/O.
    pub fn current_range(&self) -> (Option<T>, Option<T>) {
        self.range.as_pair()
    }

    /// Pure coverage query: would `update_range(raw)` hit the fast path?
    pub fn is_covered(&self, raw: &[RawDim]) -> Result<bool> {
        let spec = SliceSpec::normalize(raw, &self.shape)?;
        Ok(self.coverage.spec_covered(&spec))
    }

    /// Bring the cached range up to date for the requested region and
    /// return it.
    ///
    /// Volumes whose requested box is already covered cost no I/O; a
    /// fully covered request returns without touching the backing array
    /// at all. Otherwise each planned region is read, its finite values
    /// are folded into the range, and coverage is expanded. All reads
    /// complete before anything is committed, so a failed read leaves
    /// the cache exactly as it was. Listeners fire at most once, only
    /// if the pair's value actually changed.
    pub fn update_range(&mut self, raw: &[RawDim]) -> Result<(Option<T>, Option<T>)> {
        if self.notifying {
            debug_assert!(
                false,
                "update_range re-entered from a range-change listener"
            );
            warn!("rejecting reentrant update_range call from a listener");
            return Err(RangeError::Reentrancy);
        }

        let spec = SliceSpec::normalize(raw, &self.shape)?;
        let regions = match plan(&spec, &self.coverage) {
            PlanResult::FullyCovered => {
                trace!(?spec, "request fully covered, no scan needed");
                return Ok(self.range.as_pair());
            }
            PlanResult::NeedsScan(regions) => regions,
        };
        trace!(?spec, num_regions = regions.len(), "scanning uncovered regions");

        // Read and fold everything before committing anything, so a
        // failed read cannot leave coverage claiming unfolded data.
        let mut folded = self.range;
        let mut scanned: Vec<(u64, CoverageBox)> = Vec::with_capacity(regions.len());
        for region in regions {
            let read_spec = region.to_spec(self.volume_axis);
            let data = self
                .source
                .read(&read_spec)
                .context(BackingReadSnafu)?;
            folded.fold_values(data.iter().copied());
            scanned.push((region.volume, region.target));
        }

        let old = self.range.as_pair();
        for (volume, target) in scanned {
            self.coverage.union(volume, &target);
        }
        self.range = folded;
        let new = self.range.as_pair();

        if new != old {
            debug!(?old, ?new, "data range adjusted");
            self.notifying = true;
            self.listeners.notify_all(old, new);
            self.notifying = false;
        }

        Ok(new)
    }

    /// Forget all coverage and the cached range, e.g. after the backing
    /// array has been mutated externally.
    pub fn reset(&mut self) {
        debug!("resetting coverage and cached range");
        self.coverage.clear();
        self.range = DataRange::default();
    }

    /// Register a listener for committed range changes; returns a stable
    /// id for removal.
    pub fn add_listener(&mut self, listener: Box<dyn OnRangeChanged<T> + Send>) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Returns false if the id was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}
