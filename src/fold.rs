//! Scalar min/max folding, monomorphized over the array's element type.

use std::fmt;

/// Element types whose min/max can be tracked by the cache.
///
/// `is_finite_value` filters values out of the fold entirely; NaN and
/// infinities never participate in the range. Integer types are always
/// finite.
pub trait RangeScalar: Copy + PartialOrd + fmt::Debug + 'static {
    fn is_finite_value(self) -> bool;
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(impl RangeScalar for $t {
            fn is_finite_value(self) -> bool {
                self.is_finite()
            }
        })*
    };
}

macro_rules! impl_int_scalar {
    ($($t:ty),*) => {
        $(impl RangeScalar for $t {
            fn is_finite_value(self) -> bool {
                true
            }
        })*
    };
}

impl_float_scalar!(f32, f64);
impl_int_scalar!(i8, i16, i32, i64, u8, u16, u32, u64);

/// Running `(min, max)` pair, undefined until the first finite value is
/// folded in. `min` only ever decreases and `max` only ever increases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataRange<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Default for DataRange<T> {
    fn default() -> Self {
        Self { min: None, max: None }
    }
}

impl<T: RangeScalar> DataRange<T> {
    pub fn is_unset(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn as_pair(&self) -> (Option<T>, Option<T>) {
        (self.min, self.max)
    }

    pub fn fold_value(&mut self, v: T) {
        if !v.is_finite_value() {
            return;
        }
        self.min = Some(match self.min {
            Some(m) if m <= v => m,
            _ => v,
        });
        self.max = Some(match self.max {
            Some(m) if m >= v => m,
            _ => v,
        });
    }

    pub fn fold_values(&mut self, values: impl IntoIterator<Item = T>) {
        for v in values {
            self.fold_value(v);
        }
    }
}
