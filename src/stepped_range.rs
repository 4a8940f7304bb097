use core::fmt;
use core::iter::FusedIterator;
use core::ops::{Bound, RangeBounds};

use crate::bounds::Bounds;
use crate::order::{AddStep, Compare, NaturalOrder, Numeric, NumericOrder, Step};

/// An interval over `T` that is walked with a stepping function.
///
/// A `SteppedRange` holds its two endpoints, a [`Step`] that produces the
/// successor of a value, a [`Compare`] that orders values and a [`Bounds`]
/// policy deciding whether each endpoint belongs to the range.
///
/// The value is immutable once built. Iteration happens through [`Iter`],
/// a separate cursor created fresh by every call to [`iter`](Self::iter).
///
/// # Type Parameters
/// - `T`: The value type.
/// - `S`: The stepper.
/// - `C`: The comparator. Defaults to [`NaturalOrder`].
///
/// # Constraints
/// - `min <= max` is not checked. A range whose minimum lies past its maximum
///   is empty for every policy.
/// - The stepper must move values towards `max`, otherwise iteration never
///   ends.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SteppedRange<T, S, C = NaturalOrder> {
    min: T,
    max: T,
    stepper: S,
    comparator: C,
    bounds: Bounds,
}

impl<T, S, C> SteppedRange<T, S, C>
where
    S: Step<T>,
    C: Compare<T>,
{
    /// Creates a range from every part spelled out.
    ///
    /// # Examples
    /// ```
    /// use core::cmp::Ordering;
    /// use stepped_range::{Bounds, SteppedRange};
    ///
    /// fn halve(x: &u32) -> u32 {
    ///     x / 2
    /// }
    ///
    /// fn descending(a: &u32, b: &u32) -> Ordering {
    ///     b.cmp(a)
    /// }
    ///
    /// let range = SteppedRange::new(64u32, 4, halve, descending, Bounds::ClosedClosed);
    /// assert_eq!(range.iter().collect::<Vec<_>>(), vec![64, 32, 16, 8, 4]);
    /// ```
    #[inline]
    pub fn new(min: T, max: T, stepper: S, comparator: C, bounds: Bounds) -> Self {
        Self {
            min,
            max,
            stepper,
            comparator,
            bounds,
        }
    }

    /// Returns the same range with a different boundary policy.
    #[inline]
    pub fn with_bounds(self, bounds: Bounds) -> Self {
        Self { bounds, ..self }
    }

    /// Returns the minimum endpoint.
    #[inline]
    pub fn min(&self) -> &T {
        &self.min
    }

    /// Returns the maximum endpoint.
    #[inline]
    pub fn max(&self) -> &T {
        &self.max
    }

    /// Returns the boundary policy.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Returns `true` if `value` lies below the range.
    #[inline]
    pub fn is_before_range(&self, value: &T) -> bool {
        self.bounds.is_before(&self.min, value, &self.comparator)
    }

    /// Returns `true` if `value` lies above the range.
    #[inline]
    pub fn is_after_range(&self, value: &T) -> bool {
        self.bounds.is_after(&self.max, value, &self.comparator)
    }

    /// Returns `true` if `value` lies within the range under its policy.
    ///
    /// Membership is decided by the comparator alone; `value` does not have
    /// to be reachable by stepping from `min`.
    ///
    /// # Examples
    /// ```
    /// use stepped_range::{Bounds, SteppedRange};
    ///
    /// let range = SteppedRange::unit(5, 10).with_bounds(Bounds::ClosedOpen);
    /// assert!(range.contains(&5));   // min is included
    /// assert!(range.contains(&9));
    /// assert!(!range.contains(&10)); // max is excluded
    /// assert!(!range.contains(&4));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        !(self.is_before_range(value) || self.is_after_range(value))
    }
}

impl<T, S, C> SteppedRange<T, S, C>
where
    T: Clone,
    S: Step<T>,
    C: Compare<T>,
{
    /// Returns a fresh iterator over the values of the range.
    ///
    /// Each call starts from the beginning again; iterators never share
    /// state with each other or with the range.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, S, C> {
        Iter {
            range: self,
            cursor: Cursor::NotStarted,
        }
    }
}

impl<T: Ord, S> SteppedRange<T, S, NaturalOrder> {
    /// Creates a range over an [`Ord`] type with the default
    /// [`Bounds::OpenClosed`] policy.
    ///
    /// # Examples
    /// ```
    /// use stepped_range::{Bounds, SteppedRange};
    ///
    /// let range = SteppedRange::of('a', 'e', |c| (*c as u8 + 2) as char)
    ///     .with_bounds(Bounds::ClosedClosed);
    /// assert_eq!(range.iter().collect::<String>(), "ace");
    /// ```
    #[inline]
    pub fn of(min: T, max: T, stepper: S) -> Self
    where
        S: Fn(&T) -> T,
    {
        Self::new(min, max, stepper, NaturalOrder, Bounds::default())
    }
}

impl<T: Numeric> SteppedRange<T, AddStep<T>, NumericOrder> {
    /// Creates a numeric range that advances by adding `step`, with the
    /// default [`Bounds::OpenClosed`] policy.
    ///
    /// Works for the primitive integers as well as `f32` and `f64`; floats
    /// are ordered with their IEEE 754 total order.
    ///
    /// # Examples
    /// ```
    /// use stepped_range::{Bounds, SteppedRange};
    ///
    /// let range = SteppedRange::stepped(0.0, 1.0, 0.25).with_bounds(Bounds::ClosedOpen);
    /// assert_eq!(range.iter().collect::<Vec<_>>(), vec![0.0, 0.25, 0.5, 0.75]);
    /// ```
    #[inline]
    pub fn stepped(min: T, max: T, step: T) -> Self {
        Self::new(min, max, AddStep(step), NumericOrder, Bounds::default())
    }

    /// Creates a numeric range that advances by one.
    ///
    /// # Examples
    /// ```
    /// use stepped_range::SteppedRange;
    ///
    /// // (0, 5]
    /// assert_eq!(SteppedRange::unit(0, 5).iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    /// ```
    #[inline]
    pub fn unit(min: T, max: T) -> Self {
        Self::stepped(min, max, T::one())
    }

    /// Returns the step size.
    #[inline]
    pub fn step(&self) -> T {
        self.stepper.0
    }
}

impl<T: fmt::Debug, S, C> fmt::Debug for SteppedRange<T, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SteppedRange")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("bounds", &self.bounds)
            .finish()
    }
}

/// Exposes the endpoints as std bounds.
///
/// `min` always maps to the start bound and `max` to the end bound, so this
/// is only meaningful when the range's comparator agrees with [`PartialOrd`].
/// [`RangeBounds::contains`] orders with [`PartialOrd`]; under a reversed
/// comparator it rejects values that [`SteppedRange::contains`] accepts.
impl<T, S, C> RangeBounds<T> for SteppedRange<T, S, C> {
    fn start_bound(&self) -> Bound<&T> {
        self.bounds.start_bound(&self.min)
    }

    fn end_bound(&self) -> Bound<&T> {
        self.bounds.end_bound(&self.max)
    }
}

impl<'a, T, S, C> IntoIterator for &'a SteppedRange<T, S, C>
where
    T: Clone,
    S: Step<T>,
    C: Compare<T>,
{
    type Item = T;
    type IntoIter = Iter<'a, T, S, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Position of an [`Iter`] within its range.
#[derive(Clone, Debug)]
enum Cursor<T> {
    NotStarted,
    Positioned(T),
    Exhausted,
}

/// Single-pass iterator over a [`SteppedRange`].
///
/// Created by [`SteppedRange::iter`]. Once it returns `None` it keeps doing
/// so; ask the range for a new iterator to walk it again.
pub struct Iter<'a, T, S, C> {
    range: &'a SteppedRange<T, S, C>,
    cursor: Cursor<T>,
}

impl<T, S, C> Iterator for Iter<'_, T, S, C>
where
    T: Clone,
    S: Step<T>,
    C: Compare<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let range = self.range;
        let candidate = match &self.cursor {
            Cursor::NotStarted if range.is_before_range(&range.min) => {
                range.stepper.try_step(&range.min)
            }
            Cursor::NotStarted => Some(range.min.clone()),
            Cursor::Positioned(current) => range.stepper.try_step(current),
            Cursor::Exhausted => return None,
        };

        let candidate = match candidate {
            Some(candidate) if !range.is_after_range(&candidate) => candidate,
            _ => {
                self.cursor = Cursor::Exhausted;
                return None;
            }
        };

        self.cursor = Cursor::Positioned(candidate.clone());
        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cursor {
            Cursor::Exhausted => (0, Some(0)),
            _ => (0, None),
        }
    }
}

impl<T, S, C> FusedIterator for Iter<'_, T, S, C>
where
    T: Clone,
    S: Step<T>,
    C: Compare<T>,
{
}

impl<T: fmt::Debug, S, C> fmt::Debug for Iter<'_, T, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("range", self.range)
            .field("cursor", &self.cursor)
            .finish()
    }
}
