//! Magnitude-level primitives shared by every arithmetic kernel.
//!
//! A magnitude is a base-65536 digit array, least-significant word first,
//! with no trailing zero words. Everything in this module is sign-free:
//! signs live on [`BigInt`](crate::bigint::BigInt) and are resolved by the
//! callers before the digit arrays get here.

//	Digit arrays are indexed throughout by positions derived from their own
//	lengths, so the slicing lints add nothing but noise here.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Indices are derived from the lengths of the arrays they index"
)]



//		Modules

#[cfg(test)]
#[path = "tests/magnitude.rs"]
mod tests;



//		Packages

use crate::bigint::BigInt;
use core::cmp::Ordering;
use lazy_static::lazy_static;



//		Type aliases

/// A single magnitude word: one base-65536 digit.
pub(crate) type Digit = u16;

/// A double-width word, wide enough for any product or carry of two digits.
pub(crate) type Wide = u32;



//		Constants

/// Number of bits in one magnitude word.
pub(crate) const DIGIT_BITS: u32 = 16;

/// Mask selecting the low word of a [`Wide`].
pub(crate) const DIGIT_MASK: Wide = 0xFFFF;

/// Smallest value held in the small-value cache.
pub(crate) const SMALL_CACHE_MIN: i64 = -24;

/// Largest value held in the small-value cache.
pub(crate) const SMALL_CACHE_MAX: i64 = 128;



//		Statics

lazy_static! {
	//	Pre-built values for the contiguous range -24..=128. Read-only after
	//	initialisation; cache hits are cloned out, so the table itself is never
	//	observable by callers.
	static ref SMALL_VALUES: Vec<BigInt> = (SMALL_CACHE_MIN..=SMALL_CACHE_MAX)
		.map(BigInt::from_i64_uncached)
		.collect()
	;
}



//		Functions

//		cached_small
/// Looks up a value in the small-value cache.
///
/// Returns a clone of the cached value, or [`None`] when the value lies
/// outside the cached range. Callers must treat a miss as "construct
/// normally", never as an error.
///
/// # Parameters
///
/// * `value` - The value to look up.
///
pub(crate) fn cached_small(value: i64) -> Option<BigInt> {
	if (SMALL_CACHE_MIN..=SMALL_CACHE_MAX).contains(&value) {
		#[expect(clippy::cast_sign_loss, reason = "Offset into the table is non-negative by the range check")]
		let index = value.wrapping_sub(SMALL_CACHE_MIN) as usize;
		Some(SMALL_VALUES[index].clone())
	} else {
		None
	}
}

//		trim
/// Strips trailing (most-significant) zero words, restoring canonical form.
///
/// # Parameters
///
/// * `digits` - The digit array to canonicalise in place.
///
pub(crate) fn trim(digits: &mut Vec<Digit>) {
	while digits.last() == Some(&0) {
		drop(digits.pop());
	}
}

//		is_canonical
/// Checks the canonical-form invariant: no trailing zero word.
pub(crate) fn is_canonical(digits: &[Digit]) -> bool {
	digits.last() != Some(&0)
}

//		compare
/// Compares two canonical magnitudes.
///
/// A longer array is always the greater magnitude; equal lengths compare
/// word-by-word from the most-significant end.
///
/// # Parameters
///
/// * `a` - The left-hand magnitude.
/// * `b` - The right-hand magnitude.
///
pub(crate) fn compare(a: &[Digit], b: &[Digit]) -> Ordering {
	debug_assert!(is_canonical(a) && is_canonical(b), "compare requires canonical magnitudes");
	if a.len() != b.len() {
		return a.len().cmp(&b.len());
	}
	for i in (0..a.len()).rev() {
		if a[i] != b[i] {
			return a[i].cmp(&b[i]);
		}
	}
	Ordering::Equal
}

//		add
/// Adds two magnitudes.
///
/// Word-by-word ripple-carry addition. The result grows beyond the longer
/// operand by at most one word, so this can never overflow. Operands of one
/// or two words take a machine-arithmetic fast path that skips the carry
/// loop entirely.
///
/// # Parameters
///
/// * `a` - The left-hand magnitude.
/// * `b` - The right-hand magnitude.
///
pub(crate) fn add(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
	//	Fast path: both operands fit one u64, and so does their sum
	if a.len() <= 2 && b.len() <= 2 {
		return digits_from_u64(to_u64_unchecked(a) + to_u64_unchecked(b));
	}

	let (longer, shorter) = if a.len() >= b.len() { (a, b) } else { (b, a) };
	let mut result        = Vec::with_capacity(longer.len() + 1);
	let mut carry: Wide   = 0;

	for i in 0..longer.len() {
		let mut sum = Wide::from(longer[i]) + carry;
		if i < shorter.len() {
			sum += Wide::from(shorter[i]);
		}
		#[expect(clippy::cast_possible_truncation, reason = "Masked to the low word")]
		result.push((sum & DIGIT_MASK) as Digit);
		carry = sum >> DIGIT_BITS;
	}
	if carry != 0 {
		#[expect(clippy::cast_possible_truncation, reason = "A ripple carry is at most 1")]
		result.push(carry as Digit);
	}
	result
}

//		sub
/// Subtracts magnitude `b` from magnitude `a`, which must not be smaller.
///
/// Word-by-word borrow propagation; the result is canonicalised before
/// return. Operands of one or two words take a machine-arithmetic fast
/// path. Callers are responsible for having compared the operands: a
/// negative difference is unrepresentable here.
///
/// # Parameters
///
/// * `a` - The minuend; must satisfy `a >= b`.
/// * `b` - The subtrahend.
///
pub(crate) fn sub(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
	debug_assert!(compare(a, b) != Ordering::Less, "sub requires a >= b");

	//	Fast path: both operands fit one u64
	if a.len() <= 2 && b.len() <= 2 {
		return digits_from_u64(to_u64_unchecked(a) - to_u64_unchecked(b));
	}

	let mut result       = Vec::with_capacity(a.len());
	let mut borrow: Wide = 0;

	for i in 0..a.len() {
		let mut subtrahend = borrow;
		if i < b.len() {
			subtrahend += Wide::from(b[i]);
		}
		let minuend = Wide::from(a[i]);
		if minuend >= subtrahend {
			#[expect(clippy::cast_possible_truncation, reason = "Difference of words fits a word")]
			result.push((minuend - subtrahend) as Digit);
			borrow = 0;
		} else {
			#[expect(clippy::cast_possible_truncation, reason = "Masked to the low word")]
			result.push(((minuend + (1 << DIGIT_BITS)) - subtrahend) as Digit);
			borrow = 1;
		}
	}
	trim(&mut result);
	result
}

//		add_shifted
/// Adds `addend << (offset words)` into `acc` in place.
///
/// The accumulator is grown as needed. This is the recombination primitive
/// of the divide-and-conquer multipliers, which assemble their results from
/// limb-shifted partial products.
///
/// # Parameters
///
/// * `acc`    - The accumulator to add into.
/// * `addend` - The magnitude to add.
/// * `offset` - The word offset at which `addend` is aligned.
///
pub(crate) fn add_shifted(acc: &mut Vec<Digit>, addend: &[Digit], offset: usize) {
	if addend.is_empty() {
		return;
	}
	if acc.len() < offset + addend.len() {
		acc.resize(offset + addend.len(), 0);
	}

	let mut carry: Wide = 0;
	for (i, &word) in addend.iter().enumerate() {
		let sum = Wide::from(acc[offset + i]) + Wide::from(word) + carry;
		#[expect(clippy::cast_possible_truncation, reason = "Masked to the low word")]
		{ acc[offset + i] = (sum & DIGIT_MASK) as Digit; }
		carry = sum >> DIGIT_BITS;
	}
	let mut i = offset + addend.len();
	while carry != 0 {
		if i == acc.len() {
			acc.push(0);
		}
		let sum = Wide::from(acc[i]) + carry;
		#[expect(clippy::cast_possible_truncation, reason = "Masked to the low word")]
		{ acc[i] = (sum & DIGIT_MASK) as Digit; }
		carry = sum >> DIGIT_BITS;
		i    += 1;
	}
	trim(acc);
}

//		shl_bits
/// Shifts a magnitude left by an arbitrary bit count.
///
/// # Parameters
///
/// * `digits` - The magnitude to shift.
/// * `bits`   - The number of bit positions to shift by.
///
pub(crate) fn shl_bits(digits: &[Digit], bits: u64) -> Vec<Digit> {
	if digits.is_empty() {
		return Vec::new();
	}
	#[expect(clippy::cast_possible_truncation, reason = "Word offsets beyond memory limits are unreachable")]
	let words = (bits / u64::from(DIGIT_BITS)) as usize;
	#[expect(clippy::cast_possible_truncation, reason = "Remainder of division by 16")]
	let rest  = (bits % u64::from(DIGIT_BITS)) as u32;

	let mut result = vec![0; words];
	if rest == 0 {
		result.extend_from_slice(digits);
		return result;
	}

	let mut carry: Wide = 0;
	for &word in digits {
		let shifted = (Wide::from(word) << rest) | carry;
		#[expect(clippy::cast_possible_truncation, reason = "Masked to the low word")]
		result.push((shifted & DIGIT_MASK) as Digit);
		carry = shifted >> DIGIT_BITS;
	}
	if carry != 0 {
		#[expect(clippy::cast_possible_truncation, reason = "Shift residue fits a word")]
		result.push(carry as Digit);
	}
	result
}

//		shr_bits
/// Shifts a magnitude right by an arbitrary bit count, discarding low bits.
///
/// Shifting by the full bit length or more yields the empty (zero)
/// magnitude.
///
/// # Parameters
///
/// * `digits` - The magnitude to shift.
/// * `bits`   - The number of bit positions to shift by.
///
pub(crate) fn shr_bits(digits: &[Digit], bits: u64) -> Vec<Digit> {
	if bits >= bit_length(digits) {
		return Vec::new();
	}
	#[expect(clippy::cast_possible_truncation, reason = "Bounded by the digit count after the length check")]
	let words = (bits / u64::from(DIGIT_BITS)) as usize;
	#[expect(clippy::cast_possible_truncation, reason = "Remainder of division by 16")]
	let rest  = (bits % u64::from(DIGIT_BITS)) as u32;

	let remaining = &digits[words..];
	if rest == 0 {
		return remaining.to_vec();
	}

	let mut result = Vec::with_capacity(remaining.len());
	for i in 0..remaining.len() {
		let high = if i + 1 < remaining.len() { Wide::from(remaining[i + 1]) } else { 0 };
		let word = (Wide::from(remaining[i]) >> rest) | ((high << (DIGIT_BITS - rest)) & DIGIT_MASK);
		#[expect(clippy::cast_possible_truncation, reason = "Masked to the low word")]
		result.push(word as Digit);
	}
	trim(&mut result);
	result
}

//		bit_length
/// Returns the number of significant bits in a canonical magnitude.
///
/// Zero (the empty array) has bit length 0.
pub(crate) fn bit_length(digits: &[Digit]) -> u64 {
	match digits.last() {
		None        => 0,
		Some(&high) => {
			let full_words = (digits.len() - 1) as u64;
			full_words * u64::from(DIGIT_BITS) + u64::from(DIGIT_BITS - high.leading_zeros())
		},
	}
}

//		digits_from_u64
/// Builds a canonical magnitude from a machine integer.
pub(crate) fn digits_from_u64(mut value: u64) -> Vec<Digit> {
	let mut digits = Vec::with_capacity(4);
	while value != 0 {
		#[expect(clippy::cast_possible_truncation, reason = "Masked to the low word")]
		digits.push((value & u64::from(DIGIT_MASK)) as Digit);
		value >>= DIGIT_BITS;
	}
	digits
}

//		digits_from_u128
/// Builds a canonical magnitude from a double-width machine integer.
pub(crate) fn digits_from_u128(mut value: u128) -> Vec<Digit> {
	let mut digits = Vec::with_capacity(8);
	while value != 0 {
		#[expect(clippy::cast_possible_truncation, reason = "Masked to the low word")]
		digits.push((value & u128::from(DIGIT_MASK)) as Digit);
		value >>= DIGIT_BITS;
	}
	digits
}

//		to_u64
/// Packs a magnitude into a `u64` if it fits.
///
/// # Parameters
///
/// * `digits` - The magnitude to pack; at most four words may be set.
///
pub(crate) fn to_u64(digits: &[Digit]) -> Option<u64> {
	if digits.len() > 4 {
		return None;
	}
	Some(to_u64_unchecked(digits))
}

//		to_u64_unchecked
/// Packs a magnitude of at most four words into a `u64`.
fn to_u64_unchecked(digits: &[Digit]) -> u64 {
	debug_assert!(digits.len() <= 4, "magnitude does not fit a u64");
	let mut value = 0_u64;
	for (i, &word) in digits.iter().enumerate() {
		value |= u64::from(word) << (i as u32 * DIGIT_BITS);
	}
	value
}

//		to_u128
/// Packs a magnitude into a `u128` if it fits.
pub(crate) fn to_u128(digits: &[Digit]) -> Option<u128> {
	if digits.len() > 8 {
		return None;
	}
	let mut value = 0_u128;
	for (i, &word) in digits.iter().enumerate() {
		value |= u128::from(word) << (i as u32 * DIGIT_BITS);
	}
	Some(value)
}
