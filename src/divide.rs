//! The division kernel.
//!
//! Division dispatches on the divisor's word count: single-word short
//! division (with dedicated divide-by-2 and divide-by-10 paths), normalised
//! schoolbook division for mid-sized divisors (Knuth's Algorithm D), and
//! recursive block division in the Burnikel-Ziegler manner above that. The
//! quotient truncates toward zero and the remainder takes the dividend's
//! sign, so `a == b*q + r` with `|r| < |b|` always holds.

#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Indices are derived from the lengths of the arrays they index"
)]



//		Modules

#[cfg(test)]
#[path = "tests/divide.rs"]
mod tests;



//		Packages

use crate::bigint::BigInt;
use crate::errors::NumericError;
use crate::magnitude::{self, Digit, DIGIT_BITS, DIGIT_MASK, Wide};
use crate::multiply::TOOM3_THRESHOLD;
use core::cmp::Ordering;



//		Constants

/// Divisor word count at which division switches from the normalised
/// schoolbook algorithm to the recursive block algorithm. Recursive division
/// only pays off once its internal multiplications are subquadratic, so the
/// crossover is tied to the Toom-3 threshold.
pub(crate) const RECURSIVE_DIVISION_LIMIT: usize = TOOM3_THRESHOLD;



//		Functions

//		div_rem
/// Divides one value by another, returning quotient and remainder.
///
/// The quotient truncates toward zero; the remainder has the dividend's
/// sign and satisfies `a == b*q + r` with `|r| < |b|`.
///
/// # Parameters
///
/// * `a` - The dividend.
/// * `b` - The divisor.
///
/// # Errors
///
/// Returns [`NumericError::DivideByZero`] if the divisor is zero.
///
pub(crate) fn div_rem(a: &BigInt, b: &BigInt) -> Result<(BigInt, BigInt), NumericError> {
	if b.is_zero() {
		return Err(NumericError::DivideByZero);
	}
	if a.is_zero() {
		return Ok((BigInt::zero(), BigInt::zero()));
	}

	let (q_mag, r_mag) = div_rem_magnitude(&a.digits, &b.digits);
	let quotient  = BigInt::from_raw_parts(a.negative != b.negative, q_mag);
	let remainder = BigInt::from_raw_parts(a.negative, r_mag);
	Ok((quotient, remainder))
}

//		div_rem_magnitude
/// Divides two canonical magnitudes, dispatching by divisor size.
pub(crate) fn div_rem_magnitude(a: &[Digit], b: &[Digit]) -> (Vec<Digit>, Vec<Digit>) {
	debug_assert!(!b.is_empty(), "zero divisors are rejected by the caller");

	//	A smaller dividend divides to zero with itself as remainder
	if magnitude::compare(a, b) == Ordering::Less {
		return (Vec::new(), a.to_vec());
	}

	if b.len() == 1 {
		let (quotient, remainder) = div_rem_word(a, b[0]);
		return (quotient, if remainder == 0 { Vec::new() } else { vec![remainder] });
	}
	if b.len() < RECURSIVE_DIVISION_LIMIT {
		return knuth(a, b);
	}
	block_divide(a, b)
}

//		div_rem_word
/// Divides a magnitude by a single word.
///
/// Word-at-a-time long division, with dedicated paths for the two divisors
/// the rest of the crate leans on constantly: 2 (a one-bit shift) and 10
/// (an unrolled two-words-per-step loop used by decimal formatting).
///
/// # Parameters
///
/// * `a`       - The dividend magnitude.
/// * `divisor` - The divisor word; must be nonzero.
///
pub(crate) fn div_rem_word(a: &[Digit], divisor: Digit) -> (Vec<Digit>, Digit) {
	debug_assert!(divisor != 0, "zero divisors are rejected by the caller");
	match divisor {
		2  => return div_rem_by_2(a),
		10 => return div_rem_by_10(a),
		_  => {},
	}

	let mut quotient        = vec![0; a.len()];
	let mut remainder: Wide = 0;
	for i in (0..a.len()).rev() {
		let chunk = (remainder << DIGIT_BITS) | Wide::from(a[i]);
		#[expect(clippy::cast_possible_truncation, reason = "Quotient word of a word division fits a word")]
		{ quotient[i] = (chunk / Wide::from(divisor)) as Digit; }
		remainder = chunk % Wide::from(divisor);
	}
	magnitude::trim(&mut quotient);
	#[expect(clippy::cast_possible_truncation, reason = "Remainder is smaller than the divisor word")]
	(quotient, remainder as Digit)
}

//		div_rem_by_2
/// Halves a magnitude: a one-bit right shift plus the dropped bit.
fn div_rem_by_2(a: &[Digit]) -> (Vec<Digit>, Digit) {
	let remainder = match a.first() {
		Some(&low) => low & 1,
		None       => 0,
	};
	(magnitude::shr_bits(a, 1), remainder)
}

//		div_rem_by_10
/// Divides a magnitude by ten, two words per step.
///
/// Pairs of words are divided as one 32-bit chunk, halving the loop trips
/// of the generic path for the hot decimal-conversion case.
fn div_rem_by_10(a: &[Digit]) -> (Vec<Digit>, Digit) {
	let mut quotient       = vec![0; a.len()];
	let mut remainder: u64 = 0;
	let mut i              = a.len();

	//	Leading odd word, if any
	if i % 2 == 1 {
		i -= 1;
		let chunk   = (remainder << DIGIT_BITS) | u64::from(a[i]);
		#[expect(clippy::cast_possible_truncation, reason = "Quotient word of a word division fits a word")]
		{ quotient[i] = (chunk / 10) as Digit; }
		remainder   = chunk % 10;
	}

	//	Two words per trip
	while i >= 2 {
		i -= 2;
		let chunk = (remainder << (2 * DIGIT_BITS))
		          | (u64::from(a[i + 1]) << DIGIT_BITS)
		          | u64::from(a[i]);
		let q     = chunk / 10;
		#[expect(clippy::cast_possible_truncation, reason = "Masked to the low word")]
		{ quotient[i + 1] = ((q >> DIGIT_BITS) & u64::from(DIGIT_MASK)) as Digit; }
		#[expect(clippy::cast_possible_truncation, reason = "Masked to the low word")]
		{ quotient[i]     = (q & u64::from(DIGIT_MASK)) as Digit; }
		remainder = chunk % 10;
	}

	magnitude::trim(&mut quotient);
	#[expect(clippy::cast_possible_truncation, reason = "Remainder is below ten")]
	(quotient, remainder as Digit)
}

//		knuth
/// Normalised schoolbook division (Knuth's Algorithm D).
///
/// Both operands are shifted left until the divisor's top word has its high
/// bit set; each quotient word is then estimated from the divisor's top two
/// words and corrected by at most two after the multiply-subtract step.
///
/// # Parameters
///
/// * `a` - The dividend magnitude; must not be smaller than `b`.
/// * `b` - The divisor magnitude; at least two words.
///
fn knuth(a: &[Digit], b: &[Digit]) -> (Vec<Digit>, Vec<Digit>) {
	let n = b.len();
	let m = a.len() - n;

	//	Normalise so the divisor's top word has its high bit set
	let shift = b[n - 1].leading_zeros();
	let mut u = magnitude::shl_bits(a, u64::from(shift));
	let v     = magnitude::shl_bits(b, u64::from(shift));
	while u.len() <= m + n {
		u.push(0);
	}

	let mut q = vec![0; m + 1];
	for j in (0..=m).rev() {
		//	Estimate the quotient word from the top two divisor words
		let u_high   = (Wide::from(u[j + n]) << DIGIT_BITS) | Wide::from(u[j + n - 1]);
		let mut qhat = u_high / Wide::from(v[n - 1]);
		let mut rhat = u_high % Wide::from(v[n - 1]);

		while qhat >= (1 << DIGIT_BITS)
			|| u64::from(qhat) * u64::from(v[n - 2])
				> ((u64::from(rhat) << DIGIT_BITS) | u64::from(u[j + n - 2]))
		{
			qhat -= 1;
			rhat += Wide::from(v[n - 1]);
			if rhat >= (1 << DIGIT_BITS) {
				break;
			}
		}

		//	Multiply and subtract
		let mut borrow: i64 = 0;
		for i in 0..n {
			let product = u64::from(qhat) * u64::from(v[i]);
			let sub     = i64::from(u[j + i])
			            - ((product & u64::from(DIGIT_MASK)) as i64)
			            - borrow;
			#[expect(clippy::cast_possible_truncation, reason = "Masked to the low word")]
			#[expect(clippy::cast_sign_loss,           reason = "Masked to the low word")]
			{ u[j + i] = (sub & i64::from(DIGIT_MASK)) as Digit; }
			#[expect(clippy::cast_possible_wrap, reason = "High half of a 32-bit product fits i64")]
			{ borrow = (product >> DIGIT_BITS) as i64 - (sub >> DIGIT_BITS); }
		}
		let sub = i64::from(u[j + n]) - borrow;
		#[expect(clippy::cast_possible_truncation, reason = "Masked to the low word")]
		#[expect(clippy::cast_sign_loss,           reason = "Masked to the low word")]
		{ u[j + n] = (sub & i64::from(DIGIT_MASK)) as Digit; }

		#[expect(clippy::cast_possible_truncation, reason = "The estimate loop leaves qhat below the base")]
		{ q[j] = qhat as Digit; }

		//	The estimate overshot: add one divisor row back
		if sub < 0 {
			q[j] -= 1;
			let mut carry: Wide = 0;
			for i in 0..n {
				let sum = Wide::from(u[j + i]) + Wide::from(v[i]) + carry;
				#[expect(clippy::cast_possible_truncation, reason = "Masked to the low word")]
				{ u[j + i] = (sum & DIGIT_MASK) as Digit; }
				carry = sum >> DIGIT_BITS;
			}
			#[expect(clippy::cast_possible_truncation, reason = "A ripple carry is at most 1")]
			{ u[j + n] = u[j + n].wrapping_add(carry as Digit); }
		}
	}

	u.truncate(n);
	magnitude::trim(&mut u);
	let remainder = magnitude::shr_bits(&u, u64::from(shift));
	magnitude::trim(&mut q);
	(q, remainder)
}

//		block_divide
/// Recursive block division for very large divisors.
///
/// The divisor is padded to a power-of-two multiple of a block size derived
/// from [`RECURSIVE_DIVISION_LIMIT`], both operands are normalised so the
/// padded divisor's top bit is set, and the dividend is consumed two blocks
/// at a time by [`divide_two_blocks_by_one`]. Every recursive call sees
/// balanced shapes; the recursion bottoms out in the schoolbook path.
///
/// # Parameters
///
/// * `a` - The dividend magnitude; must not be smaller than `b`.
/// * `b` - The divisor magnitude; at least [`RECURSIVE_DIVISION_LIMIT`] words.
///
fn block_divide(a: &[Digit], b: &[Digit]) -> (Vec<Digit>, Vec<Digit>) {
	let divisor_len = b.len();

	//	Pad the divisor to a power-of-two multiple of the base block size
	let mut block_count = 1_usize;
	while divisor_len.div_ceil(block_count) > RECURSIVE_DIVISION_LIMIT {
		block_count <<= 1;
	}
	let block  = divisor_len.div_ceil(block_count);
	let padded = block * block_count;

	//	Normalise: after the shift the divisor fills exactly `padded` words
	//	with its top bit set
	let sigma = u64::from(DIGIT_BITS) * (padded as u64) - magnitude::bit_length(b);
	let a_norm = BigInt::from_raw_parts(false, magnitude::shl_bits(a, sigma));
	let b_norm = BigInt::from_raw_parts(false, magnitude::shl_bits(b, sigma));
	debug_assert!(b_norm.digits.len() == padded, "normalised divisor fills its padding");

	//	Cut the dividend into blocks of the padded size, leaving the top
	//	block strictly smaller than the divisor
	let mut t = a_norm.digits.len().div_ceil(padded).max(2);
	if magnitude::compare(trim_block(&a_norm.digits, (t - 1) * padded), &b_norm.digits)
		!= Ordering::Less
	{
		t += 1;
	}

	let mut partial = high_blocks(&a_norm, padded, t - 2);
	let mut quotient_blocks: Vec<BigInt> = Vec::with_capacity(t - 1);
	let mut index = t - 2;
	loop {
		let (q_block, r_block) = divide_two_blocks_by_one(&partial, &b_norm, padded);
		quotient_blocks.push(q_block);
		if index == 0 {
			partial = r_block;
			break;
		}
		index  -= 1;
		partial = &shift_words(&r_block, padded) + &block_at(&a_norm, padded, index);
	}

	//	Reassemble the quotient from its blocks, most significant first
	let mut quotient = BigInt::zero();
	for q_block in quotient_blocks {
		quotient = &shift_words(&quotient, padded) + &q_block;
	}

	let remainder = BigInt::from_raw_parts(false, magnitude::shr_bits(&partial.digits, sigma));
	(quotient.digits, remainder.digits)
}

//		divide_two_blocks_by_one
/// Divides a dividend of at most `2n` words by an `n`-word divisor.
///
/// Splits the divisor in half and reduces the problem to two
/// three-halves-by-two divisions, recursing until the block is odd-sized or
/// small enough for the schoolbook path.
fn divide_two_blocks_by_one(a: &BigInt, b: &BigInt, n: usize) -> (BigInt, BigInt) {
	if n % 2 != 0 || n <= RECURSIVE_DIVISION_LIMIT {
		let (q, r) = div_rem_base(&a.digits, &b.digits);
		return (
			BigInt::from_raw_parts(false, q),
			BigInt::from_raw_parts(false, r),
		);
	}
	let half = n / 2;

	let a_high = shift_words_down(a, half);
	let a_low  = low_words(a, half);

	let (q_high, r_high) = divide_three_halves_by_two(&a_high, b, half);
	let low_dividend     = &shift_words(&r_high, half) + &a_low;
	let (q_low, r_low)   = divide_three_halves_by_two(&low_dividend, b, half);

	(&shift_words(&q_high, half) + &q_low, r_low)
}

//		divide_three_halves_by_two
/// Divides a dividend of at most `3h` words by a `2h`-word divisor.
///
/// Estimates the quotient from the dividend's top `2h` words and the
/// divisor's top half, then corrects downward — at most twice — after
/// subtracting the estimate times the divisor's low half.
fn divide_three_halves_by_two(a: &BigInt, b: &BigInt, h: usize) -> (BigInt, BigInt) {
	let b_high = shift_words_down(b, h);
	let b_low  = low_words(b, h);

	let a_top  = shift_words_down(a, h);
	let a_tail = low_words(a, h);

	let (mut q, c) = if magnitude::compare(&shift_words_down(&a_top, h).digits, &b_high.digits)
		== Ordering::Less
	{
		divide_two_blocks_by_one(&a_top, &b_high, h)
	} else {
		//	The estimate saturates at β^h - 1: subtract (β^h - 1)·b_high,
		//	which is b_high·β^h - b_high
		let q_max = &shift_words(&BigInt::one(), h) - &BigInt::one();
		let c     = &(&a_top - &shift_words(&b_high, h)) + &b_high;
		(q_max, c)
	};

	let mut remainder = &(&shift_words(&c, h) + &a_tail) - &(&q * &b_low);
	while remainder.is_negative() {
		remainder = &remainder + b;
		q         = &q - &BigInt::one();
	}
	(q, remainder)
}

//		div_rem_base
/// Schoolbook base case shared by the block recursion.
fn div_rem_base(a: &[Digit], b: &[Digit]) -> (Vec<Digit>, Vec<Digit>) {
	if magnitude::compare(a, b) == Ordering::Less {
		return (Vec::new(), a.to_vec());
	}
	if b.len() == 1 {
		let (q, r) = div_rem_word(a, b[0]);
		return (q, if r == 0 { Vec::new() } else { vec![r] });
	}
	knuth(a, b)
}

//		block_at
/// Extracts block `index` (of `size` words) of a value as a non-negative value.
fn block_at(value: &BigInt, size: usize, index: usize) -> BigInt {
	let start = size * index;
	if start >= value.digits.len() {
		return BigInt::zero();
	}
	let end = (start + size).min(value.digits.len());
	BigInt::from_raw_parts(false, trim_to_vec(&value.digits[start..end]))
}

//		high_blocks
/// Extracts every block from `from_block` upward as one value.
fn high_blocks(value: &BigInt, size: usize, from_block: usize) -> BigInt {
	shift_words_down(value, size * from_block)
}

//		low_words
/// Extracts the low `count` words of a value.
fn low_words(value: &BigInt, count: usize) -> BigInt {
	if value.digits.len() <= count {
		return value.clone();
	}
	BigInt::from_raw_parts(false, trim_to_vec(&value.digits[..count]))
}

//		shift_words_down
/// Divides a value by the base raised to a word count, discarding low words.
fn shift_words_down(value: &BigInt, words: usize) -> BigInt {
	if value.digits.len() <= words {
		return BigInt::zero();
	}
	BigInt::from_raw_parts(false, value.digits[words..].to_vec())
}

//		shift_words
/// Multiplies a value by the base raised to a word count.
fn shift_words(value: &BigInt, words: usize) -> BigInt {
	if value.is_zero() {
		return BigInt::zero();
	}
	let mut digits = vec![0; words];
	digits.extend_from_slice(&value.digits);
	BigInt::from_raw_parts(value.negative, digits)
}

//		trim_block
/// Returns the canonical digits of the block starting at `start`.
fn trim_block(digits: &[Digit], start: usize) -> &[Digit] {
	if start >= digits.len() {
		return &[];
	}
	let mut end = digits.len();
	while end > start && digits[end - 1] == 0 {
		end -= 1;
	}
	&digits[start..end]
}

//		trim_to_vec
/// Copies a sub-slice into a canonical digit vector.
fn trim_to_vec(digits: &[Digit]) -> Vec<Digit> {
	let mut result = digits.to_vec();
	magnitude::trim(&mut result);
	result
}
