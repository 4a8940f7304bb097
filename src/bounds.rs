use core::cmp::Ordering;
use core::fmt;
use core::ops::Bound;

use crate::order::Compare;

/// Which endpoints of a [`SteppedRange`](crate::SteppedRange) belong to it.
///
/// The first word of each variant names the minimum end, the second the
/// maximum end. `Open` excludes the endpoint, `Closed` includes it.
///
/// | Variant        | Interval     | Minimum  | Maximum  |
/// |----------------|--------------|----------|----------|
/// | `OpenClosed`   | `(min, max]` | excluded | included |
/// | `OpenOpen`     | `(min, max)` | excluded | excluded |
/// | `ClosedClosed` | `[min, max]` | included | included |
/// | `ClosedOpen`   | `[min, max)` | included | excluded |
///
/// `OpenClosed` is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Bounds {
    #[default]
    OpenClosed,
    OpenOpen,
    ClosedClosed,
    ClosedOpen,
}

impl Bounds {
    /// All four policies, in declaration order.
    pub const ALL: [Bounds; 4] = [
        Bounds::OpenClosed,
        Bounds::OpenOpen,
        Bounds::ClosedClosed,
        Bounds::ClosedOpen,
    ];

    /// Returns the policy with the given endpoint inclusion.
    ///
    /// # Examples
    /// ```
    /// use stepped_range::Bounds;
    ///
    /// assert_eq!(Bounds::from_inclusion(true, false), Bounds::ClosedOpen);
    /// assert_eq!(Bounds::from_inclusion(false, true), Bounds::OpenClosed);
    /// ```
    #[inline]
    pub const fn from_inclusion(min_included: bool, max_included: bool) -> Self {
        match (min_included, max_included) {
            (false, true) => Bounds::OpenClosed,
            (false, false) => Bounds::OpenOpen,
            (true, true) => Bounds::ClosedClosed,
            (true, false) => Bounds::ClosedOpen,
        }
    }

    /// Returns `true` if the minimum endpoint belongs to the range.
    #[inline]
    pub const fn includes_min(self) -> bool {
        matches!(self, Bounds::ClosedClosed | Bounds::ClosedOpen)
    }

    /// Returns `true` if the maximum endpoint belongs to the range.
    #[inline]
    pub const fn includes_max(self) -> bool {
        matches!(self, Bounds::OpenClosed | Bounds::ClosedClosed)
    }

    /// Returns `true` if `value` lies outside the range on the low side.
    ///
    /// With an excluded minimum, `min` itself is "before"; with an included
    /// minimum only values strictly below it are.
    #[inline]
    pub fn is_before<T, C: Compare<T>>(self, min: &T, value: &T, comparator: &C) -> bool {
        match comparator.compare(value, min) {
            Ordering::Less => true,
            Ordering::Equal => !self.includes_min(),
            Ordering::Greater => false,
        }
    }

    /// Returns `true` if `value` lies at or past the point where the range
    /// stops on the high side.
    #[inline]
    pub fn is_after<T, C: Compare<T>>(self, max: &T, value: &T, comparator: &C) -> bool {
        match comparator.compare(value, max) {
            Ordering::Less => false,
            Ordering::Equal => !self.includes_max(),
            Ordering::Greater => true,
        }
    }

    /// Converts `min` into the matching [`Bound`] for this policy.
    #[inline]
    pub fn start_bound<T>(self, min: &T) -> Bound<&T> {
        if self.includes_min() {
            Bound::Included(min)
        } else {
            Bound::Excluded(min)
        }
    }

    /// Converts `max` into the matching [`Bound`] for this policy.
    #[inline]
    pub fn end_bound<T>(self, max: &T) -> Bound<&T> {
        if self.includes_max() {
            Bound::Included(max)
        } else {
            Bound::Excluded(max)
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.includes_min() { '[' } else { '(' };
        let close = if self.includes_max() { ']' } else { ')' };
        write!(f, "{open}{close}")
    }
}
