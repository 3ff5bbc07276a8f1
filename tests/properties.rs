//! Property tests checking [`OrderedSet`] against a model that simply
//! asks, point by point, whether a value is covered.
//!
//! Endpoints are small integers and the model probes every half-integer
//! between them (stored doubled), so an exclusive endpoint is always
//! distinguishable from an inclusive one.

use itertools::Itertools;
use ordered_intervals::{difference, intersect, subtract, union, Interval, OrderedSet};
use proptest::prelude::*;

const LIMIT: i64 = 6;

fn holds(interval: &Interval<i64>, doubled: i64) -> bool {
	let begin = interval.begin * 2;
	let end = interval.end * 2;
	let after_begin = doubled > begin || (doubled == begin && interval.inc_begin);
	let before_end = doubled < end || (doubled == end && interval.inc_end);
	after_begin && before_end
}

fn covers(set: &OrderedSet<i64>, doubled: i64) -> bool {
	set.iter().any(|interval| holds(&interval, doubled))
}

fn doubled_points() -> impl Iterator<Item = i64> {
	(-LIMIT * 2 - 2)..=(LIMIT * 2 + 2)
}

fn check_canonical(set: &OrderedSet<i64>) {
	for interval in set.iter() {
		assert!(!interval.is_empty(), "{set} stores an empty interval");
	}
	for (first, second) in set.iter().tuple_windows() {
		assert!(first.lt_begin_of(&second), "{set} is unsorted or overlapping");
		assert!(first.adjoin(&second).is_none(), "{set} holds touching neighbours");
	}
}

prop_compose! {
	fn arbitrary_interval()(
		begin in -LIMIT..=LIMIT,
		end in -LIMIT..=LIMIT,
		inc_begin in any::<bool>(),
		inc_end in any::<bool>()
	) -> Interval<i64> {
		Interval::new(begin, inc_begin, end, inc_end)
	}
}

prop_compose! {
	fn arbitrary_set()(
		intervals in prop::collection::vec(arbitrary_interval(), 0..8)
	) -> OrderedSet<i64> {
		intervals.into_iter().collect()
	}
}

proptest! {
	#[test]
	fn add_keeps_canonical_form(mut set in arbitrary_set(), x in arbitrary_interval()) {
		let before = set.clone();
		let changed = set.add(x);
		check_canonical(&set);

		for p in doubled_points() {
			prop_assert_eq!(covers(&set, p), covers(&before, p) || holds(&x, p));
		}
		prop_assert_eq!(changed, set != before);
		if !x.is_empty() {
			prop_assert!(set.contains(&x));
		}
	}

	#[test]
	fn remove_keeps_canonical_form(mut set in arbitrary_set(), x in arbitrary_interval()) {
		let before = set.clone();
		let changed = set.remove(&x);
		check_canonical(&set);

		for p in doubled_points() {
			prop_assert_eq!(covers(&set, p), covers(&before, p) && !holds(&x, p));
		}
		prop_assert_eq!(changed, set != before);
	}

	#[test]
	fn contains_matches_model(set in arbitrary_set(), x in arbitrary_interval()) {
		let expected = match x.is_empty() {
			true => !set.is_empty(),
			false => doubled_points().filter(|p| holds(&x, *p)).all(|p| covers(&set, p)),
		};
		prop_assert_eq!(set.contains(&x), expected);
	}

	#[test]
	fn insertion_order_does_not_matter(
		intervals in prop::collection::vec(arbitrary_interval(), 0..8)
	) {
		let forwards: OrderedSet<i64> = intervals.iter().copied().collect();
		let backwards: OrderedSet<i64> = intervals.iter().rev().copied().collect();
		prop_assert_eq!(forwards, backwards);
	}

	#[test]
	fn algebra_matches_model(a in arbitrary_set(), b in arbitrary_set()) {
		let either = union(&a, &b);
		let both = intersect(&a, &b);
		let only_a = subtract(&a, &b);
		let exactly_one = difference(&a, &b);

		for set in [&either, &both, &only_a, &exactly_one] {
			check_canonical(set);
		}
		for p in doubled_points() {
			let (in_a, in_b) = (covers(&a, p), covers(&b, p));
			prop_assert_eq!(covers(&either, p), in_a || in_b);
			prop_assert_eq!(covers(&both, p), in_a && in_b);
			prop_assert_eq!(covers(&only_a, p), in_a && !in_b);
			prop_assert_eq!(covers(&exactly_one, p), in_a != in_b);
		}
	}

	#[test]
	fn algebra_identities(a in arbitrary_set(), b in arbitrary_set()) {
		prop_assert_eq!(union(&a, &b), union(&b, &a));
		prop_assert_eq!(union(&a, &a), a.clone());
		prop_assert_eq!(intersect(&a, &b), intersect(&b, &a));
		prop_assert_eq!(intersect(&a, &a), a.clone());
		prop_assert_eq!(difference(&a, &b), difference(&b, &a));
		prop_assert!(difference(&a, &a).is_empty());
		prop_assert!(subtract(&a, &a).is_empty());
		prop_assert_eq!(
			difference(&a, &b),
			union(&subtract(&a, &b), &subtract(&b, &a))
		);
		prop_assert_eq!(union(&intersect(&a, &b), &subtract(&a, &b)), a);
	}

	#[test]
	fn bounded_iterator_matches_filter(
		set in arbitrary_set(),
		bound in arbitrary_interval(),
		forward in any::<bool>()
	) {
		let mut expected = match bound.is_empty() {
			true => Vec::new(),
			false => set
				.iter()
				.filter(|interval| !interval.lt_begin_of(&bound) && !bound.lt_begin_of(interval))
				.collect::<Vec<_>>(),
		};
		if !forward {
			expected.reverse();
		}
		prop_assert_eq!(set.iterator(&bound, forward).collect::<Vec<_>>(), expected);
	}
}
