use ndarray::ArrayD;

use crate::spec::SliceSpec;

/// Error surface of a backing read; propagated verbatim by the cache.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Read access to the backing array.
///
/// `spec` is always fully normalized and addresses exactly one volume
/// along the cache's volume axis. The returned array's shape must match
/// the per-dimension lengths of `spec`. The source may be slow (out of
/// core); the cache only calls it from `update_range`.
pub trait VolumeSource<T> {
    fn read(&self, spec: &SliceSpec) -> Result<ArrayD<T>, SourceError>;
}

impl<T, F> VolumeSource<T> for F
where
    F: Fn(&SliceSpec) -> Result<ArrayD<T>, SourceError>,
{
    fn read(&self, spec: &SliceSpec) -> Result<ArrayD<T>, SourceError> {
        self(spec)
    }
}
