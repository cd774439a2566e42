//! Integer square roots and n-th roots with exact remainders.
//!
//! Square roots of four words and more go through a divide-and-conquer
//! quarter split; smaller values and the recursion's base case use machine
//! arithmetic. General n-th roots run an integer Newton iteration from a
//! bit-length-derived over-estimate, which decreases monotonically to the
//! floor root.

#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Indices are derived from the lengths of the arrays they index"
)]



//		Modules

#[cfg(test)]
#[path = "tests/root.rs"]
mod tests;



//		Packages

use crate::bigint::BigInt;
use crate::divide;
use crate::errors::NumericError;
use crate::magnitude;



//		Constants

/// Word count below which a square root is taken in machine arithmetic.
const SQRT_WORD_LIMIT: usize = 4;



//		Functions

//		sqrt_rem
/// Computes the floor square root and the exact remainder.
///
/// Returns `(s, r)` with `s² + r == a` and `s² <= a < (s + 1)²`.
///
/// # Parameters
///
/// * `a` - The radicand.
///
/// # Errors
///
/// Returns [`NumericError::InvalidArgument`] for a negative radicand.
///
pub(crate) fn sqrt_rem(a: &BigInt) -> Result<(BigInt, BigInt), NumericError> {
	if a.is_negative() {
		return Err(NumericError::InvalidArgument("square root of a negative value"));
	}
	if a.is_zero() {
		return Ok((BigInt::zero(), BigInt::zero()));
	}

	let (root, remainder) = sqrt_rem_parts(a);
	debug_assert!(!remainder.is_negative(), "the floor root never overshoots");
	Ok((root, remainder))
}

//		sqrt_core
/// Floor square root of a non-negative value, dispatching by size.
fn sqrt_core(a: &BigInt) -> BigInt {
	if a.digits.len() < SQRT_WORD_LIMIT {
		let value = magnitude::to_u64(&a.digits).unwrap_or_default();
		return BigInt::from(sqrt_word(value));
	}

	//	Quarter split: root the high half, then derive the low digits from
	//	one division
	let bits    = a.bit_length();
	let quarter = bits.div_ceil(4);

	let high          = a.shift_right(2 * quarter);
	let mid           = a.shift_right(quarter).low_bits(quarter);
	let low           = a.low_bits(quarter);
	let (s_high, r_high) = sqrt_rem_parts(&high);

	let dividend = &r_high.shift_left(quarter) + &mid;
	let divisor  = s_high.shift_left(1);
	let (q, u)   = divide::div_rem(&dividend, &divisor)
		.unwrap_or_else(|_| unreachable!("the high root of a normalised radicand is nonzero"));

	let mut root      = &s_high.shift_left(quarter) + &q;
	let mut remainder = &(&u.shift_left(quarter) + &low) - &q.square_value();

	while remainder.is_negative() {
		remainder = &remainder + &(&root.shift_left(1) - &BigInt::one());
		root      = &root - &BigInt::one();
	}
	root
}

//		sqrt_rem_parts
/// Floor square root with remainder, at any recursion level.
///
/// Normalises by an even shift so the quarter split always leaves at least
/// two significant bits in the top quarter, which keeps the recursive
/// estimate from undershooting; the root is shifted back and the remainder
/// recomputed exactly.
fn sqrt_rem_parts(a: &BigInt) -> (BigInt, BigInt) {
	if a.is_zero() {
		return (BigInt::zero(), BigInt::zero());
	}
	let bits  = a.bit_length();
	let shift = if bits % 4 == 1 || bits % 4 == 2 { 2 } else { 0 };
	let root  = if shift == 0 {
		sqrt_core(a)
	} else {
		sqrt_core(&a.shift_left(shift)).shift_right(1)
	};
	let remainder = a - &root.square_value();
	(root, remainder)
}

//		sqrt_word
/// Floor square root of a machine word value.
fn sqrt_word(value: u64) -> u64 {
	if value == 0 {
		return 0;
	}
	#[expect(clippy::cast_precision_loss,      reason = "The float seed is corrected below")]
	#[expect(clippy::cast_possible_truncation, reason = "A square root of a u64 fits u32")]
	#[expect(clippy::cast_sign_loss,           reason = "Square roots are non-negative")]
	let mut root = (value as f64).sqrt() as u64;

	//	The float seed can be off by one in either direction
	while root.checked_mul(root).map_or(true, |sq| sq > value) {
		root -= 1;
	}
	while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= value) {
		root += 1;
	}
	root
}

//		nth_root_rem
/// Computes the floor `r`-th root and the exact remainder.
///
/// Returns `(s, rem)` with `s^r + rem == a`. Odd roots of negative values
/// negate the root of the magnitude (the remainder is then non-positive);
/// even roots of negative values are rejected.
///
/// # Parameters
///
/// * `a` - The radicand.
/// * `r` - The root order; must be at least 1.
///
/// # Errors
///
/// Returns [`NumericError::InvalidArgument`] for a zero root order, and for
/// an even root of a negative radicand.
///
pub(crate) fn nth_root_rem(a: &BigInt, r: u32) -> Result<(BigInt, BigInt), NumericError> {
	if r == 0 {
		return Err(NumericError::InvalidArgument("zeroth root"));
	}
	if a.is_negative() {
		if r % 2 == 0 {
			return Err(NumericError::InvalidArgument("even root of a negative value"));
		}
		let (root, _) = nth_root_rem(&a.abs(), r)?;
		let signed    = root.negate();
		let remainder = a - &signed.pow(r);
		return Ok((signed, remainder));
	}
	if r == 1 {
		return Ok((a.clone(), BigInt::zero()));
	}
	if r == 2 {
		return sqrt_rem(a);
	}
	if a.is_zero() {
		return Ok((BigInt::zero(), BigInt::zero()));
	}

	//	A root order at or past the bit length makes 2^r exceed the radicand,
	//	so the floor root is 1; this also keeps the Newton powers bounded
	if a.bit_length() <= u64::from(r) {
		return Ok((BigInt::one(), a - &BigInt::one()));
	}

	//	Newton iteration from an over-estimate: x' = ((r-1)x + a/x^(r-1))/r,
	//	strictly decreasing until it crosses the floor root
	let seed_bits = a.bit_length().div_ceil(u64::from(r)) + 1;
	let mut root  = BigInt::one().shift_left(seed_bits);

	loop {
		let power         = root.pow(r - 1);
		let (quotient, _) = divide::div_rem(a, &power)
			.unwrap_or_else(|_| unreachable!("a Newton iterate is never zero"));
		let numerator     = &(&root * &BigInt::from(i64::from(r) - 1)) + &quotient;
		let (next, _)     = divide::div_rem(&numerator, &BigInt::from(i64::from(r)))
			.unwrap_or_else(|_| unreachable!("the root order was checked to be nonzero"));
		if next >= root {
			break;
		}
		root = next;
	}

	//	The iteration can land one above the floor root
	while root.pow(r) > *a {
		root = &root - &BigInt::one();
	}

	let remainder = a - &root.pow(r);
	debug_assert!(!remainder.is_negative(), "the floor root never overshoots");
	Ok((root, remainder))
}
