//! A module containing [`Interval`] and it's various constructor functions.

use core::cmp::Ordering;
use core::fmt;

use crate::Coordinate;

/// A range over a [`Coordinate`] type whose two endpoints are each
/// independently inclusive or exclusive.
///
/// There is no separate emptiness flag: an interval is empty when
/// `begin > end`, or when `begin == end` and either endpoint is
/// exclusive. Every empty interval compares equal to every other empty
/// interval, regardless of the stored fields.
///
/// # Examples
/// ```
/// use ordered_intervals::interval::{ie, ii};
///
/// let a = ie(0, 10);
/// let b = ie(10, 20);
///
/// assert_eq!(a.adjoin(&b), Some(ie(0, 20)));
/// assert_eq!(a.intersect(&ii(5, 15)), ie(5, 10));
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T> {
	/// The begin of the interval.
	pub begin: T,
	/// Whether `begin` belongs to the interval.
	pub inc_begin: bool,
	/// The end of the interval.
	pub end: T,
	/// Whether `end` belongs to the interval.
	pub inc_end: bool,
}

impl<T> Interval<T> {
	/// Makes an interval from its four fields.
	pub const fn new(begin: T, inc_begin: bool, end: T, inc_end: bool) -> Self {
		Interval {
			begin,
			inc_begin,
			end,
			inc_end,
		}
	}
}

impl<T> Interval<T>
where
	T: Coordinate,
{
	/// Returns the canonical empty interval, both endpoints at
	/// `T::default()` and both exclusive.
	pub fn empty() -> Self {
		Interval::new(T::default(), false, T::default(), false)
	}

	/// Returns `true` if the interval contains no values.
	///
	/// # Examples
	/// ```
	/// use ordered_intervals::interval::{ee, ie, ii};
	///
	/// assert_eq!(ii(4, 4).is_empty(), false);
	/// assert_eq!(ie(4, 4).is_empty(), true);
	/// assert_eq!(ee(4, 5).is_empty(), false);
	/// assert_eq!(ii(9, 8).is_empty(), true);
	/// ```
	pub fn is_empty(&self) -> bool {
		match self.begin.cmp(&self.end) {
			Ordering::Less => false,
			Ordering::Equal => !self.inc_begin || !self.inc_end,
			Ordering::Greater => true,
		}
	}

	/// Returns `true` if both intervals have identical fields or are both
	/// empty. This is also what [`PartialEq`] uses.
	pub fn equal(&self, other: &Self) -> bool {
		(self.begin == other.begin
			&& self.end == other.end
			&& self.inc_begin == other.inc_begin
			&& self.inc_end == other.inc_end)
			|| (self.is_empty() && other.is_empty())
	}

	/// Returns `true` if `self` lies entirely before the begin of `other`.
	///
	/// Returns `false` if either interval is empty.
	///
	/// # Examples
	/// ```
	/// use ordered_intervals::interval::{ie, ii};
	///
	/// assert_eq!(ie(0, 5).lt_begin_of(&ii(5, 8)), true);
	/// assert_eq!(ii(0, 5).lt_begin_of(&ii(5, 8)), false);
	/// ```
	pub fn lt_begin_of(&self, other: &Self) -> bool {
		if other.is_empty() || self.is_empty() {
			return false;
		}
		match self.end.cmp(&other.begin) {
			Ordering::Less => true,
			Ordering::Equal => !self.inc_end || !other.inc_begin,
			Ordering::Greater => false,
		}
	}

	/// Returns `true` if the end of `self` does not exceed the end of
	/// `other`.
	///
	/// Returns `false` if either interval is empty.
	pub fn le_end_of(&self, other: &Self) -> bool {
		if other.is_empty() || self.is_empty() {
			return false;
		}
		match self.end.cmp(&other.end) {
			Ordering::Less => true,
			Ordering::Equal => !self.inc_end || other.inc_end,
			Ordering::Greater => false,
		}
	}

	/// Returns `true` if `other` is completely covered by `self`.
	///
	/// An empty `other` is covered by everything, and an empty `self`
	/// covers nothing else.
	///
	/// # Examples
	/// ```
	/// use ordered_intervals::interval::{ee, ie, ii};
	///
	/// assert_eq!(ii(0, 10).contains(&ie(0, 10)), true);
	/// assert_eq!(ie(0, 10).contains(&ii(0, 10)), false);
	/// assert_eq!(ee(0, 10).contains(&ii(2, 3)), true);
	/// ```
	pub fn contains(&self, other: &Self) -> bool {
		if other.is_empty() {
			return true;
		}
		if self.is_empty() {
			return false;
		}
		let begin_covered = match self.begin.cmp(&other.begin) {
			Ordering::Less => true,
			Ordering::Equal => self.inc_begin || !other.inc_begin,
			Ordering::Greater => false,
		};
		let end_covered = match self.end.cmp(&other.end) {
			Ordering::Greater => true,
			Ordering::Equal => self.inc_end || !other.inc_end,
			Ordering::Less => false,
		};
		begin_covered && end_covered
	}

	/// Returns the overlap of the two intervals, or the canonical empty
	/// interval if they do not overlap.
	///
	/// # Examples
	/// ```
	/// use ordered_intervals::interval::{ei, ie, ii};
	///
	/// assert_eq!(ii(0, 5).intersect(&ei(3, 8)), ei(3, 5));
	/// assert!(ie(0, 5).intersect(&ii(5, 8)).is_empty());
	/// ```
	pub fn intersect(&self, other: &Self) -> Self {
		if other.is_empty() || self.is_empty() {
			return Self::empty();
		}
		let mut result = *other;
		match self.begin.cmp(&other.begin) {
			Ordering::Greater => {
				result.begin = self.begin;
				result.inc_begin = self.inc_begin;
			}
			Ordering::Equal if !self.inc_begin => result.inc_begin = false,
			_ => {}
		}
		match self.end.cmp(&other.end) {
			Ordering::Less => {
				result.end = self.end;
				result.inc_end = self.inc_end;
			}
			Ordering::Equal if !self.inc_end => result.inc_end = false,
			_ => {}
		}
		result.or_empty()
	}

	/// Returns the interval shifted by `delta`. Endpoints saturate at the
	/// limits of `T`.
	///
	/// Empty intervals move to the canonical empty interval.
	pub fn move_by(&self, delta: T) -> Self {
		if self.is_empty() {
			return Self::empty();
		}
		Interval {
			begin: self.begin.translate(delta),
			inc_begin: self.inc_begin,
			end: self.end.translate(delta),
			inc_end: self.inc_end,
		}
	}

	/// Splits `self` into the part before its overlap with `other` and the
	/// part after it. Both parts always lie within `self`.
	///
	/// If there is no overlap, `self` is returned on whichever side of
	/// `other` it lies and the other side is empty.
	///
	/// # Examples
	/// ```
	/// use ordered_intervals::interval::{ei, ie, ii};
	/// use ordered_intervals::Interval;
	///
	/// assert_eq!(ii(0, 10).bisect(&ii(3, 5)), (ie(0, 3), ei(5, 10)));
	/// assert_eq!(ii(3, 5).bisect(&ii(1, 4)), (Interval::empty(), ei(4, 5)));
	/// ```
	pub fn bisect(&self, other: &Self) -> (Self, Self) {
		let overlap = self.intersect(other);
		if overlap.is_empty() {
			if self.lt_begin_of(other) {
				return (*self, Self::empty());
			}
			return (Self::empty(), *self);
		}
		let before = Interval {
			begin: self.begin,
			inc_begin: self.inc_begin,
			end: overlap.begin,
			inc_end: !overlap.inc_begin,
		};
		let after = Interval {
			begin: overlap.end,
			inc_begin: !overlap.inc_end,
			end: self.end,
			inc_end: self.inc_end,
		};
		(before.or_empty(), after.or_empty())
	}

	/// Returns the union of the two intervals if one begins exactly where
	/// the other ends and at least one of the two touching endpoints is
	/// inclusive, and `None` otherwise.
	///
	/// # Examples
	/// ```
	/// use ordered_intervals::interval::{ee, ie, ii};
	///
	/// assert_eq!(ie(0, 10).adjoin(&ie(10, 20)), Some(ie(0, 20)));
	/// assert_eq!(ie(0, 10).adjoin(&ee(10, 20)), None);
	/// assert_eq!(ii(0, 5).adjoin(&ii(7, 9)), None);
	/// ```
	pub fn adjoin(&self, other: &Self) -> Option<Self> {
		if other.is_empty() || self.is_empty() {
			return None;
		}
		if self.begin == other.end && (self.inc_begin || other.inc_end) {
			return Some(Interval {
				begin: other.begin,
				inc_begin: other.inc_begin,
				end: self.end,
				inc_end: self.inc_end,
			});
		}
		if self.end == other.begin && (self.inc_end || other.inc_begin) {
			return Some(Interval {
				begin: self.begin,
				inc_begin: self.inc_begin,
				end: other.end,
				inc_end: other.inc_end,
			});
		}
		None
	}

	/// Returns the smallest interval covering both intervals, gaps
	/// included. An empty operand leaves the other unchanged.
	///
	/// # Examples
	/// ```
	/// use ordered_intervals::interval::{ei, ie, ii};
	///
	/// assert_eq!(ie(0, 2).encompass(&ei(5, 8)), ii(0, 8));
	/// ```
	pub fn encompass(&self, other: &Self) -> Self {
		if other.is_empty() {
			return *self;
		}
		if self.is_empty() {
			return *other;
		}
		let mut result = *other;
		match self.begin.cmp(&other.begin) {
			Ordering::Less => {
				result.begin = self.begin;
				result.inc_begin = self.inc_begin;
			}
			Ordering::Equal if self.inc_begin => result.inc_begin = true,
			_ => {}
		}
		match self.end.cmp(&other.end) {
			Ordering::Greater => {
				result.end = self.end;
				result.inc_end = self.inc_end;
			}
			Ordering::Equal if self.inc_end => result.inc_end = true,
			_ => {}
		}
		result
	}

	fn or_empty(self) -> Self {
		if self.is_empty() {
			Self::empty()
		} else {
			self
		}
	}
}

// Trait Impls ==========================

impl<T> PartialEq for Interval<T>
where
	T: Coordinate,
{
	fn eq(&self, other: &Self) -> bool {
		self.equal(other)
	}
}
impl<T> Eq for Interval<T> where T: Coordinate {}

impl<T> Default for Interval<T>
where
	T: Coordinate,
{
	fn default() -> Self {
		Self::empty()
	}
}

impl<T> fmt::Display for Interval<T>
where
	T: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let open = if self.inc_begin { '[' } else { '(' };
		let close = if self.inc_end { ']' } else { ')' };
		write!(f, "{open}{}, {}{close}", self.begin, self.end)
	}
}

// Constructors ==========================

/// An included-included interval
pub fn ii<T>(begin: T, end: T) -> Interval<T> {
	Interval::new(begin, true, end, true)
}
/// An included-excluded interval
pub fn ie<T>(begin: T, end: T) -> Interval<T> {
	Interval::new(begin, true, end, false)
}
/// An excluded-included interval
pub fn ei<T>(begin: T, end: T) -> Interval<T> {
	Interval::new(begin, false, end, true)
}
/// An excluded-excluded interval
pub fn ee<T>(begin: T, end: T) -> Interval<T> {
	Interval::new(begin, false, end, false)
}
