//! A module containing [`OrderedSet`](set::OrderedSet) and the set
//! algebra over it.
//!
//! An [`OrderedSet`](set::OrderedSet) keeps its intervals in a canonical
//! form after every operation:
//!
//! 1. sorted ascending,
//! 2. no two intervals overlap,
//! 3. no two neighbouring intervals touch (they would have been merged),
//! 4. no interval is empty.
//!
//! Because of this form, two sets covering the same points always compare
//! equal, and [`union`](algebra::union), [`intersect`](algebra::intersect),
//! [`subtract`](algebra::subtract) and
//! [`difference`](algebra::difference) can be computed in a single sweep
//! over both operands.

pub mod algebra;
pub mod set;
