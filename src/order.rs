use core::cmp::Ordering;

use num_traits::{CheckedAdd, Num};

/// Sealed trait module to prevent external implementations.
mod private {
    pub trait Sealed {}

    macro_rules! sealed {
        ($($ty:ty),*) => { $(impl Sealed for $ty {})* };
    }

    sealed!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
}

/// A total order over `T`.
///
/// Implemented for every `Fn(&T, &T) -> Ordering`, so a closure or a plain
/// function can be passed wherever a comparator is expected.
pub trait Compare<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Produces the next candidate value of a range from the current one.
///
/// Iteration only terminates if the stepper moves values towards the range's
/// maximum under the range's comparator.
pub trait Step<T> {
    fn step(&self, value: &T) -> T;

    /// Like [`step`](Step::step), but returns `None` when no successor can be
    /// represented. Iteration ends there.
    #[inline]
    fn try_step(&self, value: &T) -> Option<T> {
        Some(self.step(value))
    }
}

impl<T, F> Step<T> for F
where
    F: Fn(&T) -> T,
{
    #[inline]
    fn step(&self, value: &T) -> T {
        self(value)
    }
}

/// Orders values by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord> Compare<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders values by [`Numeric::total_order`], which is also defined for
/// floating-point types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NumericOrder;

impl<T: Numeric> Compare<T> for NumericOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.total_order(b)
    }
}

/// Steps by adding a fixed amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AddStep<T>(pub T);

impl<T: Numeric> Step<T> for AddStep<T> {
    #[inline]
    fn step(&self, value: &T) -> T {
        *value + self.0
    }

    #[inline]
    fn try_step(&self, value: &T) -> Option<T> {
        value.checked_step(self.0)
    }
}

/// Primitive numbers usable with the numeric range constructors.
///
/// This trait is sealed and only implemented for the primitive integer types,
/// `f32` and `f64`.
pub trait Numeric: private::Sealed + Num + Copy {
    /// Total order over all values of the type.
    ///
    /// Integers use [`Ord`]. Floats use the IEEE 754 `totalOrder` predicate,
    /// so `-0.0 < 0.0` and NaNs sort after infinities.
    fn total_order(&self, other: &Self) -> Ordering;

    /// Adds `step`, returning `None` if the sum overflows.
    ///
    /// Floats never overflow; they saturate at infinity.
    fn checked_step(&self, step: Self) -> Option<Self>;
}

macro_rules! numeric_int {
    ($($ty:ty),*) => {
        $(
            impl Numeric for $ty {
                #[inline]
                fn total_order(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                #[inline]
                fn checked_step(&self, step: Self) -> Option<Self> {
                    CheckedAdd::checked_add(self, &step)
                }
            }
        )*
    };
}

numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Numeric for f32 {
    #[inline]
    fn total_order(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }

    #[inline]
    fn checked_step(&self, step: Self) -> Option<Self> {
        Some(*self + step)
    }
}

impl Numeric for f64 {
    #[inline]
    fn total_order(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }

    #[inline]
    fn checked_step(&self, step: Self) -> Option<Self> {
        Some(*self + step)
    }
}
