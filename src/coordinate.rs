//! A module containing the [`Coordinate`] trait and trait impls for the
//! primitive integer datatypes.

use core::fmt::Debug;

/// A trait for the discrete, totally ordered point types that an
/// [`Interval`](crate::Interval) ranges over.
///
/// `Default::default()` supplies the endpoints of the canonical empty
/// interval, so for the primitive integers that is `0`.
pub trait Coordinate: Ord + Copy + Default + Debug {
	/// Returns `self + delta`, clamped to the limits of the type instead
	/// of overflowing.
	fn translate(self, delta: Self) -> Self;
}

macro_rules! coordinate {
	() => {};
	($ident:ident, $($t:tt)*) => {
		impl Coordinate for $ident {
			fn translate(self, delta: Self) -> Self {
				self.saturating_add(delta)
			}
		}

		coordinate!($($t)*);
	};
}

coordinate!(
	u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize,
);
