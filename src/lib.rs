#![no_std]
#![doc = include_str!("../README.md")]
//!
//! # Quick Start
//!
//! ```rust
//! use stepped_range::{Bounds, SteppedRange};
//!
//! // [0, 5) counting by one
//! let range = SteppedRange::unit(0, 5).with_bounds(Bounds::ClosedOpen);
//!
//! assert_eq!(*range.min(), 0);
//! assert_eq!(*range.max(), 5);
//! assert!(range.contains(&0));
//! assert!(!range.contains(&5));
//!
//! // Iterate over the range
//! for i in &range {
//!     println!("{}", i);
//! }
//! ```
//!
//! # Boundary Policies
//!
//! Every range carries one of four [`Bounds`]. The default is
//! [`Bounds::OpenClosed`], which skips the minimum and keeps the maximum:
//!
//! ```rust
//! use stepped_range::{Bounds, SteppedRange};
//!
//! let collect = |bounds| SteppedRange::unit(0, 5).with_bounds(bounds).iter().collect::<Vec<_>>();
//!
//! assert_eq!(collect(Bounds::ClosedOpen), [0, 1, 2, 3, 4]);
//! assert_eq!(collect(Bounds::ClosedClosed), [0, 1, 2, 3, 4, 5]);
//! assert_eq!(collect(Bounds::OpenClosed), [1, 2, 3, 4, 5]);
//! assert_eq!(collect(Bounds::OpenOpen), [1, 2, 3, 4]);
//! ```
//!
//! # Custom Steppers and Orders
//!
//! Any [`Ord`] type can be walked with a closure, and any type at all with an
//! explicit comparator:
//!
//! ```rust
//! use stepped_range::{Bounds, SteppedRange};
//!
//! // Powers of two up to and including 64
//! let powers = SteppedRange::of(1u32, 64, |x| x * 2).with_bounds(Bounds::ClosedClosed);
//! assert_eq!(powers.iter().collect::<Vec<_>>(), [1, 2, 4, 8, 16, 32, 64]);
//!
//! // Counting down with a reversed comparator
//! let countdown = SteppedRange::new(
//!     3i32,
//!     0,
//!     |x: &i32| x - 1,
//!     |a: &i32, b: &i32| b.cmp(a),
//!     Bounds::ClosedClosed,
//! );
//! assert_eq!(countdown.iter().collect::<Vec<_>>(), [3, 2, 1, 0]);
//! ```

mod bounds;
mod order;
mod stepped_range;

pub use bounds::Bounds;
pub use order::{AddStep, Compare, NaturalOrder, Numeric, NumericOrder, Step};
pub use stepped_range::{Iter, SteppedRange};

#[cfg(test)]
#[path = "tests/bounds_tests.rs"]
mod bounds_tests;

#[cfg(test)]
#[path = "tests/stepped_range_tests.rs"]
mod tests;
