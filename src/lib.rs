//! This crate provides [`Interval`], a range whose two endpoints are each
//! independently open or closed, and [`OrderedSet`], a Data Structure
//! for storing non-overlapping intervals in a canonical, merged form
//! along with the set algebra over them.
//!
//! ## Example
//!
//! ```rust
//! use ordered_intervals::interval::{ee, ei, ie, ii};
//! use ordered_intervals::OrderedSet;
//!
//! let mut set = OrderedSet::new();
//!
//! set.add(ie(0, 5));
//! set.add(ii(5, 10));
//! set.add(ee(20, 30));
//!
//! assert_eq!(set.as_slice(), [ii(0, 10), ee(20, 30)]);
//!
//! set.remove(&ii(3, 4));
//! assert_eq!(set.as_slice(), [ie(0, 3), ei(4, 10), ee(20, 30)]);
//!
//! assert_eq!(set.contains(&ii(5, 10)), true);
//! assert_eq!(set.contains(&ii(2, 5)), false);
//!
//! let other = OrderedSet::from_slice_strict([ii(8, 25)]).unwrap();
//! assert_eq!((&set & &other).as_slice(), [ii(8, 10), ei(20, 25)]);
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Emptiness
//!
//! An [`Interval`] has no separate "empty" flag. It is empty when its
//! begin lies after its end, or when both endpoints are the same value
//! and at least one of them is exclusive. All empty intervals compare
//! equal, and operations that produce nothing return the canonical empty
//! interval from [`Interval::empty()`].
//!
//! ### Touching
//!
//! Two intervals touch when one ends exactly where the other begins and
//! at least one of those two endpoints is inclusive, so `[0, 5)` touches
//! `[5, 8]` but `[0, 5)` does not touch `(5, 8]` since the point `5`
//! belongs to neither.
//!
//! Points are only compared, never stepped, so `[0, 4]` does **not**
//! touch `[5, 8]` even for integers.
//!
//! ### Canonical Form
//!
//! An [`OrderedSet`] merges every interval it is given with every
//! interval it overlaps or touches, and never stores empty intervals.
//! Two sets covering the same points therefore always hold the same
//! intervals and compare equal.
//!
//! ### Logging
//!
//! Mutations of an [`OrderedSet`] emit `TRACE` level events through
//! [`tracing`](https://docs.rs/tracing). Nothing is recorded unless the
//! application installs a subscriber.
//!
//! ## Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for [`Interval`]
//!   and [`OrderedSet`]. Deserializing a set rejects input that is not
//!   already in canonical form.

#![no_std]
#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::needless_return)]

extern crate alloc;

pub mod coordinate;
pub mod interval;
pub mod ordered_set;

pub(crate) mod utils;

pub use crate::coordinate::Coordinate;
pub use crate::interval::Interval;
pub use crate::ordered_set::algebra::{difference, intersect, subtract, union};
pub use crate::ordered_set::set::{IntoIter, Iter, OrderedSet, OverlapError};
