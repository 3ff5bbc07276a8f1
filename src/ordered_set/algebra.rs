//! A module containing the set algebra over [`OrderedSet`]s.
//!
//! Each function reads its two operands and returns a newly built set;
//! neither operand is modified. The same functions are also available as
//! the operators `|`, `&`, `-` and `^` on references to sets.

use core::ops::{BitAnd, BitOr, BitXor, Sub};

use crate::{Coordinate, OrderedSet};

/// Returns a set covering every point covered by `a` or `b`.
///
/// # Examples
/// ```
/// use ordered_intervals::interval::{ie, ii};
/// use ordered_intervals::{union, OrderedSet};
///
/// let a = OrderedSet::from_slice_strict([ie(0, 5), ii(10, 15)]).unwrap();
/// let b = OrderedSet::from_slice_strict([ii(5, 7)]).unwrap();
///
/// assert_eq!(union(&a, &b).as_slice(), [ii(0, 7), ii(10, 15)]);
/// ```
pub fn union<T>(a: &OrderedSet<T>, b: &OrderedSet<T>) -> OrderedSet<T>
where
	T: Coordinate,
{
	let (larger, smaller) = match a.len() < b.len() {
		true => (b, a),
		false => (a, b),
	};
	let mut result = larger.clone();
	for interval in smaller.iterator(&smaller.bound(), true) {
		result.add(interval);
	}
	result
}

/// Returns a set covering every point covered by both `a` and `b`.
///
/// # Examples
/// ```
/// use ordered_intervals::interval::ii;
/// use ordered_intervals::{intersect, OrderedSet};
///
/// let a = OrderedSet::from_slice_strict([ii(0, 5), ii(10, 15)]).unwrap();
/// let b = OrderedSet::from_slice_strict([ii(3, 12)]).unwrap();
///
/// assert_eq!(intersect(&a, &b).as_slice(), [ii(3, 5), ii(10, 12)]);
/// ```
pub fn intersect<T>(a: &OrderedSet<T>, b: &OrderedSet<T>) -> OrderedSet<T>
where
	T: Coordinate,
{
	let mut result = OrderedSet::new();
	let mut xs = a.iterator(&b.bound(), true);
	let mut ys = b.iterator(&a.bound(), true);
	let (mut x, mut y) = (xs.next(), ys.next());

	while let (Some(xi), Some(yi)) = (x, y) {
		if xi.lt_begin_of(&yi) {
			x = xs.next();
		} else if yi.lt_begin_of(&xi) {
			y = ys.next();
		} else {
			result.push_adjoin(xi.intersect(&yi));
			let (_, after) = xi.bisect(&yi);
			x = match after.is_empty() {
				true => xs.next(),
				false => Some(after),
			};
		}
	}
	result
}

/// Returns a set covering every point covered by `a` but not by `b`.
///
/// # Examples
/// ```
/// use ordered_intervals::interval::{ee, ie, ii};
/// use ordered_intervals::{subtract, OrderedSet};
///
/// let a = OrderedSet::from_slice_strict([ii(0, 10)]).unwrap();
/// let b = OrderedSet::from_slice_strict([ii(2, 3), ii(6, 12)]).unwrap();
///
/// assert_eq!(subtract(&a, &b).as_slice(), [ie(0, 2), ee(3, 6)]);
/// ```
pub fn subtract<T>(a: &OrderedSet<T>, b: &OrderedSet<T>) -> OrderedSet<T>
where
	T: Coordinate,
{
	let mut result = OrderedSet::new();
	let bound = a.bound();
	let mut xs = a.iterator(&bound, true);
	let mut ys = b.iterator(&bound, true);
	let (mut x, mut y) = (xs.next(), ys.next());

	while let Some(xi) = x {
		let Some(yi) = y else {
			result.push_adjoin(xi);
			x = xs.next();
			continue;
		};

		let (before, after) = xi.bisect(&yi);
		if !before.is_empty() {
			result.push_adjoin(before);
		}
		if after.is_empty() {
			x = xs.next();
		} else {
			x = Some(after);
			y = ys.next();
		}
	}
	result
}

/// Returns a set covering every point covered by exactly one of `a` and
/// `b`.
///
/// # Examples
/// ```
/// use ordered_intervals::interval::{ei, ie, ii};
/// use ordered_intervals::{difference, OrderedSet};
///
/// let a = OrderedSet::from_slice_strict([ii(0, 5)]).unwrap();
/// let b = OrderedSet::from_slice_strict([ii(3, 8)]).unwrap();
///
/// assert_eq!(difference(&a, &b).as_slice(), [ie(0, 3), ei(5, 8)]);
/// ```
pub fn difference<T>(a: &OrderedSet<T>, b: &OrderedSet<T>) -> OrderedSet<T>
where
	T: Coordinate,
{
	let mut result = OrderedSet::new();
	let mut xs = a.iterator(&a.bound(), true);
	let mut ys = b.iterator(&b.bound(), true);
	let (mut x, mut y) = (xs.next(), ys.next());

	loop {
		match (x, y) {
			(None, None) => break,
			(None, Some(yi)) => {
				result.push_adjoin(yi);
				y = ys.next();
			}
			(Some(xi), None) => {
				result.push_adjoin(xi);
				x = xs.next();
			}
			(Some(xi), Some(yi)) if xi.lt_begin_of(&yi) => {
				result.push_adjoin(xi);
				x = xs.next();
			}
			(Some(xi), Some(yi)) if yi.lt_begin_of(&xi) => {
				result.push_adjoin(yi);
				y = ys.next();
			}
			(Some(xi), Some(yi)) => {
				let (before_x, after_x) = xi.bisect(&yi);
				let (before_y, after_y) = yi.bisect(&xi);
				if !before_x.is_empty() {
					result.push_adjoin(before_x);
				}
				if !before_y.is_empty() {
					result.push_adjoin(before_y);
				}
				x = match after_x.is_empty() {
					true => xs.next(),
					false => Some(after_x),
				};
				y = match after_y.is_empty() {
					true => ys.next(),
					false => Some(after_y),
				};
			}
		}
	}
	result
}

// Operator Impls ==========================

impl<T> BitOr<&OrderedSet<T>> for &OrderedSet<T>
where
	T: Coordinate,
{
	type Output = OrderedSet<T>;
	/// See [`union()`].
	fn bitor(self, rhs: &OrderedSet<T>) -> OrderedSet<T> {
		union(self, rhs)
	}
}
impl<T> BitAnd<&OrderedSet<T>> for &OrderedSet<T>
where
	T: Coordinate,
{
	type Output = OrderedSet<T>;
	/// See [`intersect()`].
	fn bitand(self, rhs: &OrderedSet<T>) -> OrderedSet<T> {
		intersect(self, rhs)
	}
}
impl<T> Sub<&OrderedSet<T>> for &OrderedSet<T>
where
	T: Coordinate,
{
	type Output = OrderedSet<T>;
	/// See [`subtract()`].
	fn sub(self, rhs: &OrderedSet<T>) -> OrderedSet<T> {
		subtract(self, rhs)
	}
}
impl<T> BitXor<&OrderedSet<T>> for &OrderedSet<T>
where
	T: Coordinate,
{
	type Output = OrderedSet<T>;
	/// See [`difference()`].
	fn bitxor(self, rhs: &OrderedSet<T>) -> OrderedSet<T> {
		difference(self, rhs)
	}
}
