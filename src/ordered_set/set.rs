//! A module containing [`OrderedSet`] and its iterator.

use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::Range;

use smallvec::SmallVec;
use tracing::trace;

use crate::utils::{adjoin_or_push, is_canonical};
use crate::{Coordinate, Interval};

/// Number of intervals an [`OrderedSet`] holds before it allocates.
const INLINE_INTERVALS: usize = 4;

pub(crate) type Intervals<T> = SmallVec<[Interval<T>; INLINE_INTERVALS]>;

/// An ordered set of non-overlapping, non-touching intervals.
///
/// Adding an interval merges it with every interval it overlaps or
/// touches, and removing an interval trims or splits the intervals it
/// overlaps, so the set always describes the points it covers in exactly
/// one way.
///
/// # Examples
/// ```
/// use ordered_intervals::interval::{ee, ie, ii};
/// use ordered_intervals::OrderedSet;
///
/// let mut set = OrderedSet::new();
///
/// assert_eq!(set.add(ii(0, 3)), true);
/// assert_eq!(set.add(ii(5, 8)), true);
/// assert_eq!(set.add(ii(3, 5)), true);
/// assert_eq!(set.as_slice(), [ii(0, 8)]);
///
/// assert_eq!(set.remove(&ee(2, 4)), true);
/// assert_eq!(set.as_slice(), [ii(0, 2), ii(4, 8)]);
///
/// assert_eq!(set.contains(&ie(4, 6)), true);
/// assert_eq!(set.contains(&ii(1, 5)), false);
/// ```
#[derive(Debug, Clone)]
pub struct OrderedSet<T> {
	pub(crate) intervals: Intervals<T>,
}

/// The error returned when strictly inserting an interval that overlaps
/// or touches an interval already in the set, or that is empty and so
/// could never be stored. Contains the interval that was not inserted.
#[derive(PartialEq, Debug)]
pub struct OverlapError<T>
where
	T: Coordinate,
{
	/// The interval which was not inserted.
	pub interval: Interval<T>,
}

impl<T> OrderedSet<T> {
	/// Makes a new, empty `OrderedSet`.
	///
	/// # Examples
	/// ```
	/// use ordered_intervals::OrderedSet;
	///
	/// let set: OrderedSet<i64> = OrderedSet::new();
	/// assert!(set.is_empty());
	/// ```
	pub fn new() -> Self {
		OrderedSet {
			intervals: SmallVec::new(),
		}
	}
	/// Returns the number of intervals in the set.
	pub fn len(&self) -> usize {
		self.intervals.len()
	}
	/// Returns `true` if the set contains no intervals.
	pub fn is_empty(&self) -> bool {
		self.intervals.is_empty()
	}
	/// Returns the intervals of the set in ascending order.
	pub fn as_slice(&self) -> &[Interval<T>] {
		&self.intervals
	}
	/// Returns the first interval in the set, if any.
	pub fn first(&self) -> Option<&Interval<T>> {
		self.intervals.first()
	}
	/// Returns the last interval in the set, if any.
	pub fn last(&self) -> Option<&Interval<T>> {
		self.intervals.last()
	}
}

impl<T> OrderedSet<T>
where
	T: Coordinate,
{
	/// Returns an owned snapshot of the intervals in the set in ascending
	/// order.
	pub fn intervals(&self) -> Vec<Interval<T>> {
		self.intervals.to_vec()
	}

	/// Returns the smallest interval enclosing every interval in the set,
	/// or the canonical empty interval if the set is empty.
	///
	/// # Examples
	/// ```
	/// use ordered_intervals::interval::{ee, ie};
	/// use ordered_intervals::OrderedSet;
	///
	/// let set = OrderedSet::from_slice_strict([ee(0, 2), ie(4, 6)]).unwrap();
	///
	/// assert_eq!(set.bound(), ee(0, 6));
	/// ```
	pub fn bound(&self) -> Interval<T> {
		match self.intervals.as_slice() {
			[] => Interval::empty(),
			[only] => *only,
			[first, .., last] => first.encompass(last),
		}
	}

	// Index of the first stored interval that is not entirely before `x`.
	fn search_low(&self, x: &Interval<T>) -> usize {
		self.intervals
			.partition_point(|stored| stored.lt_begin_of(x))
	}

	// Index of the first stored interval that is entirely after `x`.
	fn search_high(&self, x: &Interval<T>) -> usize {
		self.intervals
			.partition_point(|stored| !x.lt_begin_of(stored))
	}

	/// Returns `true` if `x` is completely covered by one interval of the
	/// set.
	///
	/// An empty `x` is covered by any non-empty set.
	pub fn contains(&self, x: &Interval<T>) -> bool {
		self.intervals
			.get(self.search_low(x))
			.is_some_and(|stored| stored.contains(x))
	}

	/// Returns an iterator over every interval in the set that overlaps or
	/// lies between the ends of `bound`, in ascending order if `forward`
	/// and descending order otherwise.
	///
	/// The iterator is empty if `bound` is empty.
	///
	/// # Examples
	/// ```
	/// use ordered_intervals::interval::{ie, ii};
	/// use ordered_intervals::OrderedSet;
	///
	/// let set =
	/// 	OrderedSet::from_slice_strict([ii(0, 2), ii(4, 6), ii(8, 10), ii(12, 14)])
	/// 		.unwrap();
	///
	/// assert_eq!(
	/// 	set.iterator(&ie(5, 12), true).collect::<Vec<_>>(),
	/// 	[ii(4, 6), ii(8, 10)]
	/// );
	/// assert_eq!(
	/// 	set.iterator(&ii(5, 12), false).collect::<Vec<_>>(),
	/// 	[ii(12, 14), ii(8, 10), ii(4, 6)]
	/// );
	/// ```
	pub fn iterator(&self, bound: &Interval<T>, forward: bool) -> Iter<'_, T> {
		let run = match bound.is_empty() {
			true => 0..0,
			false => {
				let low = self.search_low(bound);
				low..self.search_high(bound).max(low)
			}
		};
		Iter {
			inner: self.intervals[run].iter(),
			forward,
		}
	}

	/// Returns an iterator over every interval in the set in ascending
	/// order.
	pub fn iter(&self) -> Iter<'_, T> {
		Iter {
			inner: self.intervals.iter(),
			forward: true,
		}
	}

	/// Adds `x` to the set, merging it with every interval it overlaps or
	/// touches. Returns `true` if the set changed.
	///
	/// Adding an empty interval, or one that is already covered, changes
	/// nothing.
	///
	/// # Examples
	/// ```
	/// use ordered_intervals::interval::{ie, ii};
	/// use ordered_intervals::OrderedSet;
	///
	/// let mut set = OrderedSet::from_slice_strict([ii(0, 3), ii(5, 8)]).unwrap();
	///
	/// assert_eq!(set.add(ii(1, 2)), false);
	/// assert_eq!(set.add(ie(8, 10)), true);
	/// assert_eq!(set.as_slice(), [ii(0, 3), ie(5, 10)]);
	/// ```
	pub fn add(&mut self, x: Interval<T>) -> bool {
		let changed = self.add_unlogged(x);
		trace!(interval = ?x, changed, len = self.len(), "add");
		debug_assert!(is_canonical(&self.intervals));
		changed
	}

	fn add_unlogged(&mut self, x: Interval<T>) -> bool {
		if x.is_empty() {
			return false;
		}

		let low = self.search_low(&x);
		match self.intervals.get(low).copied() {
			None => self.splice(low..low, x),
			Some(stored) if stored.contains(&x) => return false,
			Some(stored) if x.lt_begin_of(&stored) => self.splice(low..low, x),
			Some(stored) => {
				let high = self.search_high(&x);
				let merged = x
					.encompass(&stored)
					.encompass(&self.intervals[high - 1]);
				self.splice(low..high, merged);
			}
		}
		true
	}

	/// Replaces the intervals in `run` with `x` and merges `x` with its
	/// new neighbours where they touch.
	fn splice(&mut self, run: Range<usize>, x: Interval<T>) {
		let mut index = run.start;
		self.intervals.drain(run);
		self.intervals.insert(index, x);

		if let Some(previous) = index.checked_sub(1) {
			if let Some(merged) =
				self.intervals[previous].adjoin(&self.intervals[index])
			{
				self.intervals[previous] = merged;
				self.intervals.remove(index);
				index = previous;
			}
		}

		let merged = self
			.intervals
			.get(index + 1)
			.and_then(|next| self.intervals[index].adjoin(next));
		if let Some(merged) = merged {
			self.intervals[index] = merged;
			self.intervals.remove(index + 1);
		}
	}

	/// Removes every point of `x` from the set, trimming or splitting the
	/// intervals it overlaps. Returns `true` if the set changed.
	///
	/// # Examples
	/// ```
	/// use ordered_intervals::interval::{ei, ie, ii};
	/// use ordered_intervals::OrderedSet;
	///
	/// let mut set = OrderedSet::from_slice_strict([ii(0, 10)]).unwrap();
	///
	/// assert_eq!(set.remove(&ii(3, 5)), true);
	/// assert_eq!(set.as_slice(), [ie(0, 3), ei(5, 10)]);
	///
	/// assert_eq!(set.remove(&ii(20, 30)), false);
	/// ```
	pub fn remove(&mut self, x: &Interval<T>) -> bool {
		let changed = self.remove_unlogged(x);
		trace!(interval = ?x, changed, len = self.len(), "remove");
		debug_assert!(is_canonical(&self.intervals));
		changed
	}

	fn remove_unlogged(&mut self, x: &Interval<T>) -> bool {
		if self.is_empty() || x.is_empty() {
			return false;
		}

		let low = self.search_low(x);
		let Some(&stored) = self.intervals.get(low) else {
			return false;
		};

		let (before, after) = stored.bisect(x);
		if x.le_end_of(&stored) {
			match (before.is_empty(), after.is_empty()) {
				(true, true) => {
					self.intervals.remove(low);
				}
				(true, false) => {
					if stored == after {
						// x lies entirely before the stored interval
						return false;
					}
					self.intervals[low] = after;
				}
				(false, true) => self.intervals[low] = before,
				(false, false) => {
					self.intervals[low] = before;
					self.intervals.insert(low + 1, after);
				}
			}
			return true;
		}

		let high = self.search_high(x);
		let (_, after) = self.intervals[high - 1].bisect(x);
		self.intervals.drain(low..high);
		self.intervals.insert_many(
			low,
			[before, after]
				.into_iter()
				.filter(|remnant| !remnant.is_empty()),
		);
		true
	}

	/// Adds `x` to the set without modifying other intervals.
	///
	/// If `x` overlaps or touches an interval already in the set, or is
	/// empty, an [`OverlapError`] is returned and the set is not updated.
	///
	/// # Examples
	/// ```
	/// use ordered_intervals::interval::{ee, ie, ii};
	/// use ordered_intervals::{OrderedSet, OverlapError};
	///
	/// let mut set = OrderedSet::new();
	///
	/// assert_eq!(set.insert_strict(ie(0, 5)), Ok(()));
	/// assert_eq!(set.insert_strict(ee(5, 7)), Ok(()));
	/// assert_eq!(
	/// 	set.insert_strict(ii(7, 9)),
	/// 	Err(OverlapError { interval: ii(7, 9) })
	/// );
	/// ```
	pub fn insert_strict(
		&mut self,
		x: Interval<T>,
	) -> Result<(), OverlapError<T>> {
		let low = self.search_low(&x);
		let touches_previous = low
			.checked_sub(1)
			.and_then(|previous| self.intervals[previous].adjoin(&x))
			.is_some();
		let hits_next = self.intervals.get(low).is_some_and(|next| {
			!x.lt_begin_of(next) || x.adjoin(next).is_some()
		});

		let accepted = !(x.is_empty() || touches_previous || hits_next);
		trace!(interval = ?x, accepted, "insert_strict");
		if !accepted {
			return Err(OverlapError { interval: x });
		}

		self.intervals.insert(low, x);
		debug_assert!(is_canonical(&self.intervals));
		Ok(())
	}

	/// Allocates an `OrderedSet` and fills it with the intervals from the
	/// given slice using [`OrderedSet::insert_strict()`].
	///
	/// # Examples
	/// ```
	/// use ordered_intervals::interval::ii;
	/// use ordered_intervals::OrderedSet;
	///
	/// let set = OrderedSet::from_slice_strict([ii(1, 4), ii(6, 8)]).unwrap();
	/// assert!(OrderedSet::from_slice_strict([ii(1, 4), ii(4, 8)]).is_err());
	/// ```
	pub fn from_slice_strict<const N: usize>(
		slice: [Interval<T>; N],
	) -> Result<OrderedSet<T>, OverlapError<T>> {
		OrderedSet::from_iter_strict(slice.into_iter())
	}

	/// Collects an `OrderedSet` from an iterator of intervals using
	/// [`OrderedSet::insert_strict()`].
	pub fn from_iter_strict(
		iter: impl Iterator<Item = Interval<T>>,
	) -> Result<OrderedSet<T>, OverlapError<T>> {
		let mut set = OrderedSet::new();
		for interval in iter {
			set.insert_strict(interval)?;
		}
		return Ok(set);
	}

	/// Appends `x` after the last interval, merging the two if they touch.
	///
	/// `x` must not lie before the last interval; the set algebra only
	/// ever emits intervals in ascending order.
	pub(crate) fn push_adjoin(&mut self, x: Interval<T>) {
		adjoin_or_push(&mut self.intervals, x);
	}
}

// Iterators ==========================

/// A bounded iterator over the intervals of an [`OrderedSet`].
///
/// This `struct` is created by [`OrderedSet::iterator()`] and
/// [`OrderedSet::iter()`]. See their documentation for more.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
	inner: core::slice::Iter<'a, Interval<T>>,
	forward: bool,
}
impl<'a, T> Iterator for Iter<'a, T>
where
	T: Copy,
{
	type Item = Interval<T>;
	fn next(&mut self) -> Option<Self::Item> {
		match self.forward {
			true => self.inner.next().copied(),
			false => self.inner.next_back().copied(),
		}
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}
impl<'a, T> DoubleEndedIterator for Iter<'a, T>
where
	T: Copy,
{
	fn next_back(&mut self) -> Option<Self::Item> {
		match self.forward {
			true => self.inner.next_back().copied(),
			false => self.inner.next().copied(),
		}
	}
}
impl<'a, T> ExactSizeIterator for Iter<'a, T> where T: Copy {}
impl<'a, T> FusedIterator for Iter<'a, T> where T: Copy {}

/// An owning iterator over the intervals of an [`OrderedSet`].
///
/// This `struct` is created by the [`into_iter`] method on
/// [`OrderedSet`] (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
pub struct IntoIter<T> {
	inner: smallvec::IntoIter<[Interval<T>; INLINE_INTERVALS]>,
}
impl<T> Iterator for IntoIter<T> {
	type Item = Interval<T>;
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next()
	}
}

// Trait Impls ==========================

impl<T> IntoIterator for OrderedSet<T> {
	type Item = Interval<T>;
	type IntoIter = IntoIter<T>;
	fn into_iter(self) -> Self::IntoIter {
		return IntoIter {
			inner: self.intervals.into_iter(),
		};
	}
}
impl<'a, T> IntoIterator for &'a OrderedSet<T>
where
	T: Coordinate,
{
	type Item = Interval<T>;
	type IntoIter = Iter<'a, T>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<T> FromIterator<Interval<T>> for OrderedSet<T>
where
	T: Coordinate,
{
	fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
		let mut set = OrderedSet::new();
		set.extend(iter);
		set
	}
}
impl<T> Extend<Interval<T>> for OrderedSet<T>
where
	T: Coordinate,
{
	fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
		for interval in iter {
			self.add(interval);
		}
	}
}

impl<T> PartialEq for OrderedSet<T>
where
	T: Coordinate,
{
	fn eq(&self, other: &Self) -> bool {
		self.intervals == other.intervals
	}
}
impl<T> Eq for OrderedSet<T> where T: Coordinate {}

impl<T> Default for OrderedSet<T> {
	fn default() -> Self {
		OrderedSet::new()
	}
}

impl<T> fmt::Display for OrderedSet<T>
where
	T: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("{")?;
		for (index, interval) in self.intervals.iter().enumerate() {
			if index > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{interval}")?;
		}
		f.write_str("}")
	}
}

#[cfg(feature = "serde")]
mod serde {
	use core::marker::PhantomData;

	use serde::de::{SeqAccess, Visitor};
	use serde::ser::SerializeSeq;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use super::OrderedSet;
	use crate::{Coordinate, Interval};

	impl<T> Serialize for OrderedSet<T>
	where
		T: Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut seq = serializer.serialize_seq(Some(self.len()))?;
			for interval in self.intervals.iter() {
				seq.serialize_element(interval)?;
			}
			seq.end()
		}
	}

	impl<'de, T> Deserialize<'de> for OrderedSet<T>
	where
		T: Coordinate + Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_seq(OrderedSetVisitor {
				t: PhantomData,
			})
		}
	}

	struct OrderedSetVisitor<T> {
		t: PhantomData<T>,
	}

	impl<'de, T> Visitor<'de> for OrderedSetVisitor<T>
	where
		T: Coordinate + Deserialize<'de>,
	{
		type Value = OrderedSet<T>;

		fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
			formatter.write_str("an OrderedSet")
		}

		fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: SeqAccess<'de>,
		{
			let mut set = OrderedSet::new();
			while let Some(interval) = access.next_element::<Interval<T>>()? {
				set.insert_strict(interval).map_err(|_| {
					serde::de::Error::custom("intervals are empty, overlap or touch")
				})?;
			}
			Ok(set)
		}
	}
}
