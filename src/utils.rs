use itertools::Itertools;

use crate::ordered_set::set::Intervals;
use crate::{Coordinate, Interval};

/// Whether `intervals` could be the contents of an
/// [`OrderedSet`](crate::OrderedSet): no empty members, sorted, no two
/// overlapping and no two neighbours mergeable.
pub(crate) fn is_canonical<T>(intervals: &[Interval<T>]) -> bool
where
	T: Coordinate,
{
	intervals.iter().all(|interval| !interval.is_empty())
		&& intervals.iter().tuple_windows().all(|(first, second)| {
			first.lt_begin_of(second) && first.adjoin(second).is_none()
		})
}

/// Appends `interval`, merging it into the last interval instead if the
/// two touch.
pub(crate) fn adjoin_or_push<T>(intervals: &mut Intervals<T>, interval: Interval<T>)
where
	T: Coordinate,
{
	match intervals.last().and_then(|last| last.adjoin(&interval)) {
		Some(merged) => {
			let last = intervals.len() - 1;
			intervals[last] = merged;
		}
		None => intervals.push(interval),
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use smallvec::smallvec;

	use super::*;
	use crate::interval::{ee, ei, ie, ii};

	#[test]
	fn is_canonical_tests() {
		assert_eq!(is_canonical::<i64>(&[]), true);
		assert_eq!(is_canonical(&[ie(0, 3), ii(3, 5)]), false);
		assert_eq!(is_canonical(&[ie(0, 3), ei(3, 5)]), true);
		assert_eq!(is_canonical(&[ie(0, 3), ee(3, 5)]), true);
		assert_eq!(is_canonical(&[ii(0, 3), ii(3, 5)]), false);
		assert_eq!(is_canonical(&[ii(4, 5), ii(0, 2)]), false);
		assert_eq!(is_canonical(&[ii(0, 2), ii(5, 4)]), false);
	}

	#[test]
	fn adjoin_or_push_tests() {
		let mut intervals: Intervals<i64> = smallvec![];
		adjoin_or_push(&mut intervals, ie(0, 3));
		adjoin_or_push(&mut intervals, ii(3, 5));
		adjoin_or_push(&mut intervals, ee(5, 7));
		adjoin_or_push(&mut intervals, ii(9, 9));

		assert_eq!(intervals.as_slice(), &[ie(0, 7), ii(9, 9)]);
	}
}
