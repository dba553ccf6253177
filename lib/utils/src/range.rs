//! Extensions for inclusive ranges as used by hardware resource descriptors.
//!
//! Resource windows (IRQ lines, register addresses) are described by their
//! first and last element, so the helpers here work on [RangeInclusive].

use core::ops::RangeInclusive;

pub trait RangeExt<T>
where
    Self: Sized,
    T: Copy + Ord,
{
    /// Check if this range shares at least one element with another range.
    ///
    /// Always return false if either range is empty (`start > end`).
    fn overlap(&self, another: &Self) -> bool;
}

impl<T> RangeExt<T> for RangeInclusive<T>
where
    T: Copy + Ord,
{
    #[inline(always)]
    fn overlap(&self, another: &RangeInclusive<T>) -> bool {
        if self.is_empty() || another.is_empty() {
            return false;
        }
        // [  self  ]
        //        [  another  ]
        *self.start() <= *another.end() && *another.start() <= *self.end()
    }
}
