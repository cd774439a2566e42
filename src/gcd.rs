//! The greatest-common-divisor kernel.
//!
//! Three tiers, chosen by operand size: binary GCD on machine words for
//! pairs that fit 64 bits, Lehmer's algorithm (64-bit leading-bit
//! approximations batching several Euclidean steps) for mid-sized operands,
//! and the subquadratic half-GCD recursion above that. Every tier reduces a
//! pair without changing its GCD, so the tiers compose freely.
//!
//! The half-GCD transforms are 2×2 matrices with non-negative entries and a
//! parity flag carrying the alternating Euclidean signs; in that normalised
//! form every transform has determinant exactly 1, which is asserted
//! unconditionally. A reduction step whose leading-bit approximation cannot
//! be validated against the full-precision operands is discarded in favour
//! of one exact Euclidean step, so the assertions only ever see states the
//! algebra guarantees.

#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Indices are derived from the lengths of the arrays they index"
)]



//		Modules

#[cfg(test)]
#[path = "tests/gcd.rs"]
mod tests;



//		Packages

use crate::bigint::BigInt;
use crate::divide;
use crate::magnitude::{self, DIGIT_BITS};
use core::mem::swap;



//		Constants

/// Largest word count (of the larger operand) handled by Lehmer's
/// algorithm; beyond it the half-GCD recursion takes over.
pub(crate) const LEHMER_GCD_LIMIT: usize = 12;

/// Word count at or below which a magnitude fits one `u64`.
const WORDS_PER_U64: usize = (64 / DIGIT_BITS) as usize;



//		Functions

//		gcd
/// Computes the greatest common divisor of two values.
///
/// The result is always non-negative; `gcd(0, x) == |x|` and
/// `gcd(x, 0) == |x|`.
///
/// # Parameters
///
/// * `a` - The first operand.
/// * `b` - The second operand.
///
pub(crate) fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
	if a.is_zero() {
		return b.abs();
	}
	if b.is_zero() {
		return a.abs();
	}

	let mut x = a.abs();
	let mut y = b.abs();
	if x < y {
		swap(&mut x, &mut y);
	}

	if x.digits.len() <= WORDS_PER_U64 {
		let reduced = gcd_words(
			magnitude::to_u64(&x.digits).unwrap_or_default(),
			magnitude::to_u64(&y.digits).unwrap_or_default(),
		);
		return BigInt::from(reduced);
	}
	if x.digits.len() < LEHMER_GCD_LIMIT {
		return lehmer(x, y);
	}
	subquadratic(x, y)
}

//		gcd_words
/// Binary GCD on machine words: repeated halving and subtraction.
fn gcd_words(mut a: u64, mut b: u64) -> u64 {
	if a == 0 {
		return b;
	}
	if b == 0 {
		return a;
	}

	let shift = (a | b).trailing_zeros();
	a >>= a.trailing_zeros();
	loop {
		b >>= b.trailing_zeros();
		if a > b {
			swap(&mut a, &mut b);
		}
		b -= a;
		if b == 0 {
			return a << shift;
		}
	}
}

//		lehmer
/// Lehmer's algorithm: batched Euclidean steps from 64-bit approximations.
///
/// Each round approximates the leading bits of both operands as machine
/// words, runs the Euclidean algorithm on the approximation for as long as
/// its quotients are provably those of the full operands, and applies the
/// accumulated 2×2 transform to the full operands in one pass. A round
/// whose approximation yields no usable step falls back to one exact
/// division.
fn lehmer(mut x: BigInt, mut y: BigInt) -> BigInt {
	while y.digits.len() > WORDS_PER_U64 {
		if x < y {
			swap(&mut x, &mut y);
		}
		let (u0, u1, v0, v1, even) = simulate(&x, &y);
		if v0 != 0 {
			let transform = Transform::from_words(u0, u1, v0, v1, even);
			let (rx, ry)  = transform
				.apply_checked(&x, &y)
				.unwrap_or_else(|| euclid_step(&x, &y));
			x = rx;
			y = ry;
		} else {
			let (rx, ry) = euclid_step(&x, &y);
			x = rx;
			y = ry;
		}
	}
	finish_words(&x, &y)
}

//		finish_words
/// Final GCD step once the smaller operand fits a machine word pair.
fn finish_words(x: &BigInt, y: &BigInt) -> BigInt {
	if y.is_zero() {
		return x.clone();
	}
	if x.digits.len() > WORDS_PER_U64 {
		//	One exact reduction brings the larger operand into range too
		let (_, remainder) = divide::div_rem(x, y)
			.unwrap_or_else(|_| unreachable!("the divisor was checked to be nonzero"));
		let y_word = magnitude::to_u64(&y.digits).unwrap_or_default();
		let r_word = magnitude::to_u64(&remainder.digits).unwrap_or_default();
		return BigInt::from(gcd_words(y_word, r_word));
	}
	let x_word = magnitude::to_u64(&x.digits).unwrap_or_default();
	let y_word = magnitude::to_u64(&y.digits).unwrap_or_default();
	BigInt::from(gcd_words(x_word, y_word))
}

//		euclid_step
/// One exact Euclidean reduction: `(x, y) -> (y, x mod y)`.
fn euclid_step(x: &BigInt, y: &BigInt) -> (BigInt, BigInt) {
	let (_, remainder) = divide::div_rem(x, y)
		.unwrap_or_else(|_| unreachable!("the divisor was checked to be nonzero"));
	(y.clone(), remainder)
}

//		simulate
/// Approximates the leading bits of both operands and batches Euclidean
/// steps on the approximation.
///
/// Returns the accumulated single-word transform `(u0, u1, v0, v1, even)`.
/// The loop guard is Knuth's validity window: a quotient is only taken
/// while it is provably the quotient of the full-precision operands, so the
/// transform can be applied in bulk without re-checking each step.
fn simulate(x: &BigInt, y: &BigInt) -> (u64, u64, u64, u64, bool) {
	let shift = magnitude::bit_length(&x.digits).saturating_sub(64);
	let mut a1 = approximate(&x.digits, shift);
	let mut a2 = approximate(&y.digits, shift);

	let mut even = false;

	let mut u0: u64 = 0;
	let mut u1: u64 = 1;
	let mut u2: u64 = 0;

	let mut v0: u64 = 0;
	let mut v1: u64 = 0;
	let mut v2: u64 = 1;

	loop {
		let Some(guard) = v1.checked_add(v2) else {
			break;
		};
		if a2 < v2 || a1.wrapping_sub(a2) < guard {
			break;
		}
		let q = a1 / a2;
		let r = a1 % a2;

		//	An overflowing coefficient ends the batch; the steps taken so
		//	far remain valid
		let (Some(step_u), Some(step_v)) = (
			q.checked_mul(u2).and_then(|p| p.checked_add(u1)),
			q.checked_mul(v2).and_then(|p| p.checked_add(v1)),
		) else {
			break;
		};

		a1 = a2;
		a2 = r;

		u0 = u1;
		u1 = u2;
		u2 = step_u;

		v0 = v1;
		v1 = v2;
		v2 = step_v;

		even = !even;
	}

	(u0, u1, v0, v1, even)
}

//		approximate
/// Packs the bits of a magnitude above `shift` into one machine word.
fn approximate(digits: &[magnitude::Digit], shift: u64) -> u64 {
	if shift == 0 {
		return magnitude::to_u64(digits).unwrap_or_default();
	}
	let shifted = magnitude::shr_bits(digits, shift);
	magnitude::to_u64(&shifted).unwrap_or_default()
}

//		subquadratic
/// The half-GCD tier: repeated half-bit-length reductions.
///
/// Each round either halves the pair's bit length through [`half_gcd`] or,
/// when the smaller operand has already fallen past the half-way point,
/// closes the gap with one exact Euclidean step. Once the pair is small
/// enough, Lehmer's algorithm finishes.
fn subquadratic(mut x: BigInt, mut y: BigInt) -> BigInt {
	loop {
		if x < y {
			swap(&mut x, &mut y);
		}
		if y.is_zero() {
			return x;
		}
		if x.digits.len() < LEHMER_GCD_LIMIT {
			return lehmer(x, y);
		}

		match half_gcd(&x, &y) {
			Some((_, rx, ry)) => {
				x = rx;
				y = ry;
			},
			None => {
				let (rx, ry) = euclid_step(&x, &y);
				x = rx;
				y = ry;
			},
		}
	}
}

//		half_gcd
/// Reduces a pair to roughly half its bit length, returning the transform.
///
/// Contract: for `x >= y >= 0` with `y` reaching above the half-bit-length
/// point of `x`, returns `(t, x', y')` where `(x', y') == t(x, y)`, both
/// results are non-negative with `x' >= y'`, the pair's GCD is unchanged,
/// and `y'` has been driven to (or just below) the half-way point. Returns
/// [`None`] when `y` is already at or below that point.
///
/// The recursive case computes a transform from the operands' high halves
/// and validates it against the full operands before committing; a failed
/// validation — the leading-bit approximation diverging from the full
/// values — falls back to one exact Euclidean step, mirroring the posture
/// of Lehmer's algorithm one tier down.
fn half_gcd(x: &BigInt, y: &BigInt) -> Option<(Transform, BigInt, BigInt)> {
	let target = x.bit_length() / 2 + 1;
	if y.bit_length() <= target {
		return None;
	}

	let mut transform = Transform::identity();
	let mut a = x.clone();
	let mut b = y.clone();

	while b.bit_length() > target {
		if a.digits.len() <= WORDS_PER_U64 {
			//	Machine-word variant: the whole remaining reduction runs on
			//	one u64 pair
			let (t, ra, rb) = half_gcd_words(
				magnitude::to_u64(&a.digits).unwrap_or_default(),
				magnitude::to_u64(&b.digits).unwrap_or_default(),
				target,
			);
			transform = transform.compose(&t);
			a = BigInt::from(ra);
			b = BigInt::from(rb);
			break;
		}

		if a.digits.len() < LEHMER_GCD_LIMIT {
			//	Lehmer-style batch from the leading bits
			let (u0, u1, v0, v1, even) = simulate(&a, &b);
			if v0 != 0 {
				let batch = Transform::from_words(u0, u1, v0, v1, even);
				if let Some((ra, rb)) = batch.apply_checked(&a, &b) {
					transform = transform.compose(&batch);
					a = ra;
					b = rb;
					continue;
				}
			}
			let (ra, rb, step) = euclid_step_transform(&a, &b);
			transform = transform.compose(&step);
			a = ra;
			b = rb;
			continue;
		}

		//	Recursive case: reduce via a transform computed on the high
		//	halves, validated against the full operands
		let split     = a.bit_length() / 2;
		let committed = half_gcd(&a.shift_right(split), &b.shift_right(split))
			.and_then(|(t, _, _)| {
				t.apply_checked(&a, &b).and_then(|(ra, rb)| {
					//	Progress check: the reduction must have shrunk the pair
					if ra.bit_length() < a.bit_length() && ra >= rb {
						Some((t, ra, rb))
					} else {
						None
					}
				})
			});
		match committed {
			Some((t, ra, rb)) => {
				transform = transform.compose(&t);
				a = ra;
				b = rb;
			},
			None => {
				if b.is_zero() {
					break;
				}
				let (ra, rb, step) = euclid_step_transform(&a, &b);
				transform = transform.compose(&step);
				a = ra;
				b = rb;
			},
		}
	}

	if a < b {
		swap(&mut a, &mut b);
		transform = transform.swapped();
	}
	Some((transform, a, b))
}

//		half_gcd_words
/// The machine-word half-GCD variant.
///
/// Runs exact Euclidean steps on a `u64` pair, accumulating the transform,
/// until the smaller value's bit length falls to the target.
fn half_gcd_words(mut a: u64, mut b: u64, target: u64) -> (Transform, u64, u64) {
	let mut u0: u64 = 1;
	let mut v0: u64 = 0;
	let mut u1: u64 = 0;
	let mut v1: u64 = 1;
	let mut even    = true;

	while b != 0 && u64::from(64 - b.leading_zeros()) > target {
		let q = a / b;
		let r = a % b;

		//	Stop rather than overflow a coefficient; the steps so far stand
		let (Some(next_u), Some(next_v)) = (
			q.checked_mul(u1).and_then(|p| p.checked_add(u0)),
			q.checked_mul(v1).and_then(|p| p.checked_add(v0)),
		) else {
			break;
		};

		a = b;
		b = r;
		u0 = u1;
		v0 = v1;
		u1 = next_u;
		v1 = next_v;
		even = !even;
	}

	(Transform::from_words(u0, u1, v0, v1, even), a, b)
}

//		euclid_step_transform
/// One exact Euclidean step together with its elementary transform.
fn euclid_step_transform(x: &BigInt, y: &BigInt) -> (BigInt, BigInt, Transform) {
	let (quotient, remainder) = divide::div_rem(x, y)
		.unwrap_or_else(|_| unreachable!("the divisor was checked to be nonzero"));
	(y.clone(), remainder, Transform::from_quotient(&quotient))
}



//		Structs

//		Transform
/// A 2×2 half-GCD transform in sign-normalised form.
///
/// The entries are non-negative; `even` carries the alternating signs of
/// the underlying Euclidean steps. Applied to a pair `(x, y)`:
///
/// ```text
/// even:  x' = u0*x - v0*y      odd:  x' = v0*y - u0*x
///        y' = v1*y - u1*x            y' = u1*x - v1*y
/// ```
///
/// In this normalised form the determinant of every transform is exactly 1,
/// and that invariant is asserted unconditionally at every construction:
/// a violation is an implementation defect, never an input condition.
#[derive(Clone, Debug)]
struct Transform {
	/// Coefficient of `x` in the first row.
	u0:   BigInt,
	/// Coefficient of `x` in the second row.
	u1:   BigInt,
	/// Coefficient of `y` in the first row.
	v0:   BigInt,
	/// Coefficient of `y` in the second row.
	v1:   BigInt,
	/// Sign parity: `true` when an even number of steps is folded in.
	even: bool,
}

//󰭅		Transform
impl Transform {
	//		identity
	/// The identity transform.
	fn identity() -> Self {
		Self {
			u0:   BigInt::one(),
			u1:   BigInt::zero(),
			v0:   BigInt::zero(),
			v1:   BigInt::one(),
			even: true,
		}
	}

	//		from_words
	/// Builds a transform from single-word coefficients.
	fn from_words(u0: u64, u1: u64, v0: u64, v1: u64, even: bool) -> Self {
		let transform = Self {
			u0:   BigInt::from(u0),
			u1:   BigInt::from(u1),
			v0:   BigInt::from(v0),
			v1:   BigInt::from(v1),
			even,
		};
		transform.assert_unimodular();
		transform
	}

	//		from_quotient
	/// The elementary transform of one Euclidean step with quotient `q`:
	/// `(x, y) -> (y, x - q*y)`.
	fn from_quotient(q: &BigInt) -> Self {
		let transform = Self {
			u0:   BigInt::zero(),
			u1:   BigInt::one(),
			v0:   BigInt::one(),
			v1:   q.clone(),
			even: false,
		};
		transform.assert_unimodular();
		transform
	}

	//		compose
	/// Composes two transforms: apply `self` first, then `other`.
	fn compose(&self, other: &Self) -> Self {
		let composed = Self {
			u0:   &(&other.u0 * &self.u0) + &(&other.v0 * &self.u1),
			v0:   &(&other.u0 * &self.v0) + &(&other.v0 * &self.v1),
			u1:   &(&other.u1 * &self.u0) + &(&other.v1 * &self.u1),
			v1:   &(&other.u1 * &self.v0) + &(&other.v1 * &self.v1),
			even: self.even == other.even,
		};
		composed.assert_unimodular();
		composed
	}

	//		swapped
	/// The transform with its output rows exchanged.
	fn swapped(&self) -> Self {
		let swapped = Self {
			u0:   self.u1.clone(),
			v0:   self.v1.clone(),
			u1:   self.u0.clone(),
			v1:   self.v0.clone(),
			even: !self.even,
		};
		swapped.assert_unimodular();
		swapped
	}

	//		apply_checked
	/// Applies the transform to a pair, validating the result.
	///
	/// Returns [`None`] when either output is negative — the signature of a
	/// leading-bit approximation that does not hold for the full operands.
	/// Callers fall back to an exact Euclidean step in that case.
	fn apply_checked(&self, x: &BigInt, y: &BigInt) -> Option<(BigInt, BigInt)> {
		let first  = &(&self.u0 * x) - &(&self.v0 * y);
		let second = &(&self.v1 * y) - &(&self.u1 * x);

		let (rx, ry) = if self.even {
			(first, second)
		} else {
			(first.negate(), second.negate())
		};

		if rx.is_negative() || ry.is_negative() {
			return None;
		}
		Some((rx, ry))
	}

	//		assert_unimodular
	/// Asserts the sign-normalised determinant is exactly 1.
	fn assert_unimodular(&self) {
		let main = &self.u0 * &self.v1;
		let anti = &self.v0 * &self.u1;
		let det  = if self.even {
			&main - &anti
		} else {
			&anti - &main
		};
		assert!(det == BigInt::one(), "a half-GCD transform must have determinant 1");
	}
}
