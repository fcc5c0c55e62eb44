use smallvec::SmallVec;

use super::bounds::CoverageBox;
use crate::spec::{DimRange, SliceSpec};

/// Per-volume coverage: one optional bounding box per volume index.
///
/// The volume count is fixed by the array shape at construction, so
/// volumes are indexed directly into a vector rather than keyed through
/// a map.
#[derive(Debug, Clone)]
pub struct CoverageState {
    volume_axis: usize,
    boxes: Vec<Option<CoverageBox>>,
}

impl CoverageState {
    pub fn new(num_volumes: u64, volume_axis: usize) -> Self {
        Self {
            volume_axis,
            boxes: vec![None; num_volumes as usize],
        }
    }

    pub fn volume_axis(&self) -> usize {
        self.volume_axis
    }

    pub fn num_volumes(&self) -> u64 {
        self.boxes.len() as u64
    }

    pub fn volume_box(&self, volume: u64) -> Option<&CoverageBox> {
        self.boxes[volume as usize].as_ref()
    }

    /// Split a full-dimensional spec into its volume-axis range and the
    /// box over the remaining dimensions, in dimension order.
    pub fn split_spec(&self, spec: &SliceSpec) -> (DimRange, CoverageBox) {
        let volumes = spec.dim(self.volume_axis);
        let dims: SmallVec<[DimRange; 4]> = spec
            .dims()
            .iter()
            .enumerate()
            .filter(|(d, _)| *d != self.volume_axis)
            .map(|(_, r)| *r)
            .collect();
        (volumes, CoverageBox::new(dims))
    }

    /// True only if the volume has recorded coverage and `target` lies
    /// entirely within it.
    pub fn is_covered(&self, volume: u64, target: &CoverageBox) -> bool {
        match &self.boxes[volume as usize] {
            Some(cover) => cover.contains(target),
            None => false,
        }
    }

    /// True if every volume addressed by `spec` covers its requested box.
    pub fn spec_covered(&self, spec: &SliceSpec) -> bool {
        let (volumes, target) = self.split_spec(spec);
        (volumes.low..volumes.high).all(|v| self.is_covered(v, &target))
    }

    /// Expand the volume's box to the smallest box containing both the
    /// old box (if any) and `target`. Coverage never shrinks.
    pub fn union(&mut self, volume: u64, target: &CoverageBox) {
        let slot = &mut self.boxes[volume as usize];
        *slot = Some(match slot.take() {
            Some(old) => old.union(target),
            None => target.clone(),
        });
    }

    pub fn clear(&mut self) {
        for b in &mut self.boxes {
            *b = None;
        }
    }
}
