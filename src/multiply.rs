//! The multiplicative kernel.
//!
//! Multiplication dispatches on the larger operand's word count: a direct
//! word multiply, a schoolbook tier with unrolled fixed-size routines, a
//! balanced half-splitting recursion, an asymmetric chunking path, and the
//! Toom-3 and Toom-4 divide-and-conquer tiers. Every tier produces results
//! bit-identical to the schoolbook definition; the choice is purely a
//! performance matter.

#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Indices are derived from the lengths of the arrays they index"
)]



//		Modules

#[cfg(test)]
#[path = "tests/multiply.rs"]
mod tests;



//		Packages

use crate::bigint::BigInt;
use crate::magnitude::{self, Digit, DIGIT_BITS, DIGIT_MASK, Wide};



//		Constants

/// Largest operand word count handled by the schoolbook tier.
pub(crate) const MUL_RECURSION_THRESHOLD: usize = 10;

/// Smallest larger-operand word count at which Toom-3 takes over.
pub(crate) const TOOM3_THRESHOLD: usize = 100;

/// Smallest larger-operand word count at which Toom-4 takes over.
pub(crate) const TOOM4_THRESHOLD: usize = 400;

/// Size ratio beyond which the asymmetric path stops chunking and falls
/// back to a single schoolbook pass.
const CHUNKING_RATIO: usize = 4;



//		Functions

//		multiply
/// Multiplies two values.
///
/// The product's sign is the exclusive-or of the operand signs; a zero
/// operand short-circuits to zero. Squaring is detected when both operands
/// are the same value.
///
/// # Parameters
///
/// * `a` - The left-hand factor.
/// * `b` - The right-hand factor.
///
pub(crate) fn multiply(a: &BigInt, b: &BigInt) -> BigInt {
	if a.is_zero() || b.is_zero() {
		return BigInt::zero();
	}
	if a.digits == b.digits {
		let product = square_magnitude(&a.digits);
		return BigInt::from_raw_parts(a.negative != b.negative, product);
	}
	let product = multiply_magnitude(&a.digits, &b.digits);
	BigInt::from_raw_parts(a.negative != b.negative, product)
}

//		square
/// Squares a value.
///
/// Always non-negative; zero short-circuits.
///
/// # Parameters
///
/// * `a` - The value to square.
///
pub(crate) fn square(a: &BigInt) -> BigInt {
	if a.is_zero() {
		return BigInt::zero();
	}
	BigInt::from_raw_parts(false, square_magnitude(&a.digits))
}

//		multiply_magnitude
/// Multiplies two canonical non-empty magnitudes, dispatching by size.
pub(crate) fn multiply_magnitude(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
	debug_assert!(!a.is_empty() && !b.is_empty(), "zero operands are handled by the caller");
	let larger = a.len().max(b.len());

	//	Single-word operands multiply directly
	if a.len() == 1 {
		return scale(b, a[0]);
	}
	if b.len() == 1 {
		return scale(a, b[0]);
	}

	if larger <= MUL_RECURSION_THRESHOLD {
		return schoolbook_tier(a, b);
	}
	if larger >= TOOM4_THRESHOLD {
		return toom4(a, b);
	}
	if larger >= TOOM3_THRESHOLD {
		return toom3(a, b);
	}
	if a.len() == b.len() {
		let mut scratch = Vec::new();
		return balanced(a, b, &mut scratch);
	}
	unbalanced(a, b)
}

//		square_magnitude
/// Squares a canonical non-empty magnitude, dispatching by size.
pub(crate) fn square_magnitude(a: &[Digit]) -> Vec<Digit> {
	debug_assert!(!a.is_empty(), "zero operands are handled by the caller");
	let n = a.len();

	if n == 1 {
		return scale(a, a[0]);
	}
	if n <= MUL_RECURSION_THRESHOLD {
		return schoolbook_square_tier(a);
	}
	if n >= TOOM4_THRESHOLD {
		return toom4_square(a);
	}
	if n >= TOOM3_THRESHOLD {
		return toom3_square(a);
	}
	let mut scratch = Vec::new();
	balanced_square(a, &mut scratch)
}

//		scale
/// Multiplies a magnitude by a single word.
pub(crate) fn scale(a: &[Digit], factor: Digit) -> Vec<Digit> {
	if factor == 0 {
		return Vec::new();
	}
	let mut result      = Vec::with_capacity(a.len() + 1);
	let mut carry: Wide = 0;
	for &word in a {
		let product = Wide::from(word) * Wide::from(factor) + carry;
		#[expect(clippy::cast_possible_truncation, reason = "Masked to the low word")]
		result.push((product & DIGIT_MASK) as Digit);
		carry = product >> DIGIT_BITS;
	}
	if carry != 0 {
		#[expect(clippy::cast_possible_truncation, reason = "Carry out of a word product fits a word")]
		result.push(carry as Digit);
	}
	magnitude::trim(&mut result);
	result
}

//		schoolbook_tier
/// Schoolbook multiplication with unrolled routines for the fixed sizes.
fn schoolbook_tier(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
	if a.len() == b.len() {
		match a.len() {
			2 => return fixed_mul_2(a, b),
			4 => return fixed_mul_4(a, b),
			8 => return fixed_mul_8(a, b),
			_ => {},
		}
	}
	let mut scratch = Vec::new();
	schoolbook(a, b, &mut scratch)
}

//		schoolbook_square_tier
/// Schoolbook squaring with unrolled routines for the fixed sizes.
fn schoolbook_square_tier(a: &[Digit]) -> Vec<Digit> {
	match a.len() {
		2 => fixed_square_2(a),
		4 => fixed_square_4(a),
		8 => fixed_square_8(a),
		_ => {
			let mut scratch = Vec::new();
			schoolbook_square(a, &mut scratch)
		},
	}
}

//		schoolbook
/// The O(n²) multiply-accumulate base case.
///
/// The scratch buffer is the accumulation area; recursion levels above this
/// one pass a single pre-allocated buffer down so the leaves never
/// reallocate.
///
/// # Parameters
///
/// * `a`       - The left-hand magnitude.
/// * `b`       - The right-hand magnitude.
/// * `scratch` - Reusable accumulation buffer; contents are overwritten.
///
fn schoolbook(a: &[Digit], b: &[Digit], scratch: &mut Vec<Digit>) -> Vec<Digit> {
	scratch.clear();
	scratch.resize(a.len() + b.len(), 0);

	for (j, &multiplier) in b.iter().enumerate() {
		if multiplier == 0 {
			continue;
		}
		let mut carry: Wide = 0;
		for (i, &word) in a.iter().enumerate() {
			let t = Wide::from(word) * Wide::from(multiplier)
			      + Wide::from(scratch[i + j])
			      + carry;
			#[expect(clippy::cast_possible_truncation, reason = "Masked to the low word")]
			{ scratch[i + j] = (t & DIGIT_MASK) as Digit; }
			carry = t >> DIGIT_BITS;
		}
		#[expect(clippy::cast_possible_truncation, reason = "Final carry of a row fits a word")]
		{ scratch[j + a.len()] = carry as Digit; }
	}

	let mut result = scratch.clone();
	magnitude::trim(&mut result);
	result
}

//		schoolbook_square
/// The O(n²) squaring base case, sharing the symmetric cross terms.
///
/// Cross products above the diagonal are accumulated once, doubled with a
/// single one-bit shift, and the diagonal squares are added last — half the
/// word multiplies of the general routine.
///
/// # Parameters
///
/// * `a`       - The magnitude to square.
/// * `scratch` - Reusable accumulation buffer; contents are overwritten.
///
fn schoolbook_square(a: &[Digit], scratch: &mut Vec<Digit>) -> Vec<Digit> {
	let n = a.len();
	scratch.clear();
	scratch.resize(2 * n, 0);

	//	Off-diagonal cross products, each counted once
	for i in 0..n {
		if a[i] == 0 {
			continue;
		}
		let mut carry: Wide = 0;
		for j in (i + 1)..n {
			let t = Wide::from(a[i]) * Wide::from(a[j])
			      + Wide::from(scratch[i + j])
			      + carry;
			#[expect(clippy::cast_possible_truncation, reason = "Masked to the low word")]
			{ scratch[i + j] = (t & DIGIT_MASK) as Digit; }
			carry = t >> DIGIT_BITS;
		}
		let mut k = i + n;
		while carry != 0 {
			let t = Wide::from(scratch[k]) + carry;
			#[expect(clippy::cast_possible_truncation, reason = "Masked to the low word")]
			{ scratch[k] = (t & DIGIT_MASK) as Digit; }
			carry = t >> DIGIT_BITS;
			k    += 1;
		}
	}

	//	Double the cross products with a one-bit left shift
	let mut shift_carry: Wide = 0;
	for word in scratch.iter_mut() {
		let t = (Wide::from(*word) << 1) | shift_carry;
		#[expect(clippy::cast_possible_truncation, reason = "Masked to the low word")]
		{ *word = (t & DIGIT_MASK) as Digit; }
		shift_carry = t >> DIGIT_BITS;
	}
	debug_assert!(shift_carry == 0, "doubled cross products fit 2n words");

	//	Add the diagonal squares
	let mut carry: Wide = 0;
	for i in 0..n {
		let t = Wide::from(a[i]) * Wide::from(a[i])
		      + Wide::from(scratch[2 * i])
		      + carry;
		#[expect(clippy::cast_possible_truncation, reason = "Masked to the low word")]
		{ scratch[2 * i] = (t & DIGIT_MASK) as Digit; }
		carry = t >> DIGIT_BITS;
		let t = Wide::from(scratch[2 * i + 1]) + carry;
		#[expect(clippy::cast_possible_truncation, reason = "Masked to the low word")]
		{ scratch[2 * i + 1] = (t & DIGIT_MASK) as Digit; }
		carry = t >> DIGIT_BITS;
	}
	debug_assert!(carry == 0, "a square fits 2n words");

	let mut result = scratch.clone();
	magnitude::trim(&mut result);
	result
}

//		fixed_mul_2
/// Unrolled 2×2-word multiply: one native 32×32→64 multiplication.
fn fixed_mul_2(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
	let left  = u64::from(a[0]) | (u64::from(a[1]) << DIGIT_BITS);
	let right = u64::from(b[0]) | (u64::from(b[1]) << DIGIT_BITS);
	magnitude::digits_from_u64(left * right)
}

//		fixed_mul_4
/// Unrolled 4×4-word multiply: one native 64×64→128 multiplication.
fn fixed_mul_4(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
	magnitude::digits_from_u128(u128::from(pack_4(a)) * u128::from(pack_4(b)))
}

//		fixed_mul_8
/// Unrolled 8×8-word multiply: four 64×64→128 partial products.
fn fixed_mul_8(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
	let (a_lo, a_hi) = (pack_4(&a[..4]), pack_4(&a[4..]));
	let (b_lo, b_hi) = (pack_4(&b[..4]), pack_4(&b[4..]));

	let low    = u128::from(a_lo) * u128::from(b_lo);
	let mid_1  = u128::from(a_lo) * u128::from(b_hi);
	let mid_2  = u128::from(a_hi) * u128::from(b_lo);
	let high   = u128::from(a_hi) * u128::from(b_hi);

	let mut result = magnitude::digits_from_u128(low);
	result.resize(result.len().max(16), 0);
	magnitude::add_shifted(&mut result, &magnitude::digits_from_u128(mid_1), 4);
	magnitude::add_shifted(&mut result, &magnitude::digits_from_u128(mid_2), 4);
	magnitude::add_shifted(&mut result, &magnitude::digits_from_u128(high),  8);
	magnitude::trim(&mut result);
	result
}

//		fixed_square_2
/// Unrolled 2-word squaring.
fn fixed_square_2(a: &[Digit]) -> Vec<Digit> {
	let value = u64::from(a[0]) | (u64::from(a[1]) << DIGIT_BITS);
	magnitude::digits_from_u64(value * value)
}

//		fixed_square_4
/// Unrolled 4-word squaring.
fn fixed_square_4(a: &[Digit]) -> Vec<Digit> {
	let value = u128::from(pack_4(a));
	magnitude::digits_from_u128(value * value)
}

//		fixed_square_8
/// Unrolled 8-word squaring: three partial products, the cross term shared.
fn fixed_square_8(a: &[Digit]) -> Vec<Digit> {
	let (lo, hi) = (pack_4(&a[..4]), pack_4(&a[4..]));

	let low   = u128::from(lo) * u128::from(lo);
	let cross = u128::from(lo) * u128::from(hi);
	let high  = u128::from(hi) * u128::from(hi);

	let mut result = magnitude::digits_from_u128(low);
	result.resize(result.len().max(16), 0);
	let cross_digits = magnitude::digits_from_u128(cross);
	magnitude::add_shifted(&mut result, &cross_digits, 4);
	magnitude::add_shifted(&mut result, &cross_digits, 4);
	magnitude::add_shifted(&mut result, &magnitude::digits_from_u128(high), 8);
	magnitude::trim(&mut result);
	result
}

//		pack_4
/// Packs exactly four words into a `u64`.
fn pack_4(words: &[Digit]) -> u64 {
	u64::from(words[0])
		| (u64::from(words[1]) << DIGIT_BITS)
		| (u64::from(words[2]) << (2 * DIGIT_BITS))
		| (u64::from(words[3]) << (3 * DIGIT_BITS))
}

//		balanced
/// Recursive same-size multiply: three sub-products of the halves.
///
/// Splits both operands at the midpoint and reduces the four half-products
/// to three using the absolute differences of the halves:
/// `ah*bl + al*bh  ==  ah*bh + al*bl - (ah - al)*(bh - bl)`, where the last
/// term's sign follows the signs of the two differences. The scratch buffer
/// rides down the recursion for the schoolbook leaves.
///
/// # Parameters
///
/// * `a`       - The left-hand magnitude.
/// * `b`       - The right-hand magnitude; must be the same length as `a`.
/// * `scratch` - Reusable base-case accumulation buffer.
///
fn balanced(a: &[Digit], b: &[Digit], scratch: &mut Vec<Digit>) -> Vec<Digit> {
	let n = a.len();
	debug_assert!(n == b.len(), "balanced multiply requires equal lengths");
	if n <= MUL_RECURSION_THRESHOLD {
		return schoolbook(a, b, scratch);
	}

	let half = n / 2;
	let (a_low, a_high) = split(a, half);
	let (b_low, b_high) = split(b, half);

	let low  = product_of(a_low, b_low, scratch);
	let high = product_of(a_high, b_high, scratch);

	let (a_diff, a_sign) = abs_diff(a_high, a_low);
	let (b_diff, b_sign) = abs_diff(b_high, b_low);
	let cross = product_of(&a_diff, &b_diff, scratch);

	//	mid = low + high -/+ cross, negative only if the difference signs differ
	let mut mid = magnitude::add(&low, &high);
	if a_sign == b_sign {
		mid = magnitude::sub(&mid, &cross);
	} else {
		mid = magnitude::add(&mid, &cross);
	}

	let mut result = low;
	magnitude::add_shifted(&mut result, &mid,  half);
	magnitude::add_shifted(&mut result, &high, 2 * half);
	result
}

//		balanced_square
/// Recursive same-size squaring: two half-squares plus one difference square.
///
/// `(ah*B + al)²  ==  ah²*B² + (ah² + al² - (ah - al)²)*B + al²`, so the
/// cross term costs one squaring of the halves' absolute difference instead
/// of a general multiply.
///
/// # Parameters
///
/// * `a`       - The magnitude to square.
/// * `scratch` - Reusable base-case accumulation buffer.
///
fn balanced_square(a: &[Digit], scratch: &mut Vec<Digit>) -> Vec<Digit> {
	let n = a.len();
	if n <= MUL_RECURSION_THRESHOLD {
		return schoolbook_square(a, scratch);
	}

	let half = n / 2;
	let (a_low, a_high) = split(a, half);

	let low  = square_of(a_low, scratch);
	let high = square_of(a_high, scratch);

	let (diff, _) = abs_diff(a_high, a_low);
	let cross = square_of(&diff, scratch);

	//	mid = low + high - (ah - al)²; a square is non-negative either way
	let mid = magnitude::sub(&magnitude::add(&low, &high), &cross);

	let mut result = low;
	magnitude::add_shifted(&mut result, &mid,  half);
	magnitude::add_shifted(&mut result, &high, 2 * half);
	result
}

//		product_of
/// Multiplies two trimmed sub-magnitudes inside the balanced recursion.
fn product_of(a: &[Digit], b: &[Digit], scratch: &mut Vec<Digit>) -> Vec<Digit> {
	if a.is_empty() || b.is_empty() {
		return Vec::new();
	}
	if a.len() == b.len() {
		return balanced(a, b, scratch);
	}
	if a.len() == 1 {
		return scale(b, a[0]);
	}
	if b.len() == 1 {
		return scale(a, b[0]);
	}
	if a.len().max(b.len()) <= MUL_RECURSION_THRESHOLD {
		return schoolbook(a, b, scratch);
	}
	unbalanced(a, b)
}

//		square_of
/// Squares a trimmed sub-magnitude inside the balanced recursion.
fn square_of(a: &[Digit], scratch: &mut Vec<Digit>) -> Vec<Digit> {
	if a.is_empty() {
		return Vec::new();
	}
	if a.len() == 1 {
		return scale(a, a[0]);
	}
	if a.len() <= MUL_RECURSION_THRESHOLD {
		return schoolbook_square(a, scratch);
	}
	balanced_square(a, scratch)
}

//		split
/// Splits a magnitude at a word boundary into trimmed low and high parts.
fn split(digits: &[Digit], at: usize) -> (&[Digit], &[Digit]) {
	let (low, high) = digits.split_at(at);
	(trimmed(low), trimmed(high))
}

//		trimmed
/// Shrinks a sub-slice to canonical form without copying.
fn trimmed(digits: &[Digit]) -> &[Digit] {
	let mut len = digits.len();
	while len > 0 && digits[len - 1] == 0 {
		len -= 1;
	}
	&digits[..len]
}

//		abs_diff
/// Computes `|a - b|` and whether the difference is non-negative.
fn abs_diff(a: &[Digit], b: &[Digit]) -> (Vec<Digit>, bool) {
	match magnitude::compare(a, b) {
		core::cmp::Ordering::Less => (magnitude::sub(b, a), false),
		_                         => (magnitude::sub(a, b), true),
	}
}

//		unbalanced
/// Multiplies operands of unequal size by chunking the larger one.
///
/// The larger operand is cut into blocks the size of the smaller one, each
/// block multiplied with the balanced routine, and the partial products
/// summed at their block offsets. When the size ratio is extreme the
/// chunking bookkeeping costs more than it saves and a single schoolbook
/// pass wins instead.
///
/// # Parameters
///
/// * `a` - The left-hand magnitude.
/// * `b` - The right-hand magnitude.
///
fn unbalanced(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
	let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
	let chunk          = small.len();
	let mut scratch    = Vec::new();

	if large.len() / chunk >= CHUNKING_RATIO {
		return schoolbook(small, large, &mut scratch);
	}

	let mut result = vec![0; small.len() + large.len()];
	let mut offset = 0;
	while offset < large.len() {
		let end   = (offset + chunk).min(large.len());
		let block = trimmed(&large[offset..end]);
		if !block.is_empty() {
			let partial = product_of(small, block, &mut scratch);
			magnitude::add_shifted(&mut result, &partial, offset);
		}
		offset = end;
	}
	magnitude::trim(&mut result);
	result
}

//		limb
/// Extracts the `index`-th limb of `k` words as a non-negative value.
fn limb(digits: &[Digit], k: usize, index: usize) -> BigInt {
	let start = k * index;
	if start >= digits.len() {
		return BigInt::zero();
	}
	let end = (start + k).min(digits.len());
	BigInt::from_raw_parts(false, trimmed(&digits[start..end]).to_vec())
}

//		shift_words
/// Multiplies a value by the base raised to a word count.
fn shift_words(value: &BigInt, words: usize) -> BigInt {
	value.shift_left(words as u64 * u64::from(DIGIT_BITS))
}

//		exact_div_word
/// Divides a value by a small word, asserting the division is exact.
///
/// The Toom interpolation steps divide by fixed constants that the algebra
/// guarantees divide evenly; a remainder here is an implementation defect.
fn exact_div_word(value: &BigInt, divisor: Digit) -> BigInt {
	let (quotient, remainder) = crate::divide::div_rem_word(&value.digits, divisor);
	debug_assert!(remainder == 0, "Toom interpolation division must be exact");
	BigInt::from_raw_parts(value.negative, quotient)
}

//		toom3
/// Toom-3 multiplication of large magnitudes.
///
/// Splits each operand into 3 limbs, evaluates the limb polynomials at the
/// points {0, 1, -1, 2, ∞}, multiplies pointwise (recursing through the
/// dispatcher), interpolates with exact divisions by 2 and 3, and recombines
/// with limb-shifted adds.
fn toom3(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
	let k = (a.len().max(b.len()) + 2) / 3;

	let a0 = limb(a, k, 0);
	let a1 = limb(a, k, 1);
	let a2 = limb(a, k, 2);
	let b0 = limb(b, k, 0);
	let b1 = limb(b, k, 1);
	let b2 = limb(b, k, 2);

	let (w0, w1, wm1, w2, winf) = toom3_pointwise(&a0, &a1, &a2, &b0, &b1, &b2);
	toom3_interpolate(&w0, &w1, &wm1, &w2, &winf, k)
}

//		toom3_square
/// Toom-3 squaring: the same scheme with pointwise squares.
fn toom3_square(a: &[Digit]) -> Vec<Digit> {
	let k = (a.len() + 2) / 3;

	let a0 = limb(a, k, 0);
	let a1 = limb(a, k, 1);
	let a2 = limb(a, k, 2);

	let e1  = &(&a0 + &a2) + &a1;
	let em1 = &(&a0 + &a2) - &a1;
	let e2  = &(&a2.shift_left(2) + &a1.shift_left(1)) + &a0;

	let w0   = a0.square_value();
	let w1   = e1.square_value();
	let wm1  = em1.square_value();
	let w2   = e2.square_value();
	let winf = a2.square_value();

	toom3_interpolate(&w0, &w1, &wm1, &w2, &winf, k)
}

//		toom3_pointwise
/// Evaluates both operands at the Toom-3 points and multiplies pointwise.
#[expect(clippy::similar_names, reason = "The evaluation points are conventionally named")]
fn toom3_pointwise(
	a0: &BigInt, a1: &BigInt, a2: &BigInt,
	b0: &BigInt, b1: &BigInt, b2: &BigInt,
) -> (BigInt, BigInt, BigInt, BigInt, BigInt) {
	let a02 = a0 + a2;
	let b02 = b0 + b2;

	let ea1  = &a02 + a1;
	let eam1 = &a02 - a1;
	let eb1  = &b02 + b1;
	let ebm1 = &b02 - b1;
	let ea2  = &(&a2.shift_left(2) + &a1.shift_left(1)) + a0;
	let eb2  = &(&b2.shift_left(2) + &b1.shift_left(1)) + b0;

	let w0   = a0 * b0;
	let w1   = &ea1 * &eb1;
	let wm1  = &eam1 * &ebm1;
	let w2   = &ea2 * &eb2;
	let winf = a2 * b2;

	(w0, w1, wm1, w2, winf)
}

//		toom3_interpolate
/// Recovers the five product coefficients and recombines them.
///
/// The divisions by 2 and 3 are exact by construction.
fn toom3_interpolate(
	w0: &BigInt, w1: &BigInt, wm1: &BigInt, w2: &BigInt, winf: &BigInt,
	k: usize,
) -> Vec<Digit> {
	let c0 = w0.clone();
	let c4 = winf.clone();

	//	(W1 + W-1)/2 - c0 - c4  ==  c2
	let even = (w1 + wm1).shift_right(1);
	let c2   = &(&even - &c0) - &c4;

	//	(W1 - W-1)/2  ==  c1 + c3
	let odd = (w1 - wm1).shift_right(1);

	//	(W2 - c0 - 4c2 - 16c4)/2  ==  c1 + 4c3
	let reduced = (&(&(w2 - &c0) - &c2.shift_left(2)) - &c4.shift_left(4)).shift_right(1);

	//	(reduced - odd)/3  ==  c3
	let c3 = exact_div_word(&(&reduced - &odd), 3);
	let c1 = &odd - &c3;

	let mut result = BigInt::zero();
	result = &result + &c0;
	result = &result + &shift_words(&c1, k);
	result = &result + &shift_words(&c2, 2 * k);
	result = &result + &shift_words(&c3, 3 * k);
	result = &result + &shift_words(&c4, 4 * k);
	debug_assert!(!result.negative, "a product of magnitudes is non-negative");
	result.digits
}

//		toom4
/// Toom-4 multiplication of very large magnitudes.
///
/// Splits each operand into 4 limbs, evaluates at the seven points
/// {0, 1, -1, 2, -2, 3, ∞}, multiplies pointwise, and interpolates with the
/// fixed exact divisor table {2, 3, 4, 5, 8}.
fn toom4(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
	let k = (a.len().max(b.len()) + 3) / 4;

	let a_limbs = [limb(a, k, 0), limb(a, k, 1), limb(a, k, 2), limb(a, k, 3)];
	let b_limbs = [limb(b, k, 0), limb(b, k, 1), limb(b, k, 2), limb(b, k, 3)];

	let ea = toom4_evaluate(&a_limbs);
	let eb = toom4_evaluate(&b_limbs);

	let w: Vec<BigInt> = ea.iter().zip(eb.iter()).map(|(x, y)| x * y).collect();
	toom4_interpolate(&w, k)
}

//		toom4_square
/// Toom-4 squaring: the same scheme with pointwise squares.
fn toom4_square(a: &[Digit]) -> Vec<Digit> {
	let k = (a.len() + 3) / 4;

	let limbs = [limb(a, k, 0), limb(a, k, 1), limb(a, k, 2), limb(a, k, 3)];
	let e     = toom4_evaluate(&limbs);

	let w: Vec<BigInt> = e.iter().map(BigInt::square_value).collect();
	toom4_interpolate(&w, k)
}

//		toom4_evaluate
/// Evaluates a 4-limb polynomial at {0, 1, -1, 2, -2, 3, ∞}.
fn toom4_evaluate(limbs: &[BigInt; 4]) -> [BigInt; 7] {
	let [l0, l1, l2, l3] = limbs;

	let even = l0 + l2;
	let odd  = l1 + l3;

	let at_1  = &even + &odd;
	let at_m1 = &even - &odd;

	//	l(2) = l0 + 2l1 + 4l2 + 8l3, split into even/odd halves for ±2
	let even_2 = l0 + &l2.shift_left(2);
	let odd_2  = &l1.shift_left(1) + &l3.shift_left(3);
	let at_2   = &even_2 + &odd_2;
	let at_m2  = &even_2 - &odd_2;

	//	l(3) = l0 + 3l1 + 9l2 + 27l3
	let at_3 = &(&(l0 + &(l1 * &BigInt::from(3))) + &(l2 * &BigInt::from(9)))
	         + &(l3 * &BigInt::from(27));

	[l0.clone(), at_1, at_m1, at_2, at_m2, at_3, l3.clone()]
}

//		toom4_interpolate
/// Recovers the seven product coefficients and recombines them.
///
/// Point order in `w`: {0, 1, -1, 2, -2, 3, ∞}. Every division below is
/// exact by the interpolation algebra; the divisors are 2, 3, 4, 5, and 8.
fn toom4_interpolate(w: &[BigInt], k: usize) -> Vec<Digit> {
	let (w0, w1, wm1, w2, wm2, w3, winf) =
		(&w[0], &w[1], &w[2], &w[3], &w[4], &w[5], &w[6]);

	let c0 = w0.clone();
	let c6 = winf.clone();

	//	Even system: c2 + c4 and c2 + 4c4
	let sum_1 = &(w1 + wm1).shift_right(1) - &(&c0 + &c6);
	let sum_2 = &(&(w2 + wm2).shift_right(1) - &c0) - &c6.shift_left(6);
	let sum_2 = sum_2.shift_right(2);
	let c4    = exact_div_word(&(&sum_2 - &sum_1), 3);
	let c2    = &sum_1 - &c4;

	//	Odd system: three equations in c1, c3, c5
	let t1 = (w1 - wm1).shift_right(1);
	let t2 = (w2 - wm2).shift_right(2);
	let t3 = &(&(&(w3 - &c0) - &(&c2 * &BigInt::from(9))) - &(&c4 * &BigInt::from(81)))
	       - &(&c6 * &BigInt::from(729));
	let t3 = exact_div_word(&t3, 3);

	let u  = exact_div_word(&(&t2 - &t1), 3);
	let v  = exact_div_word(&(&t3 - &t2), 5);
	let c5 = (&v - &u).shift_right(3);
	let c3 = &u - &(&c5 * &BigInt::from(5));
	let c1 = &(&t1 - &c3) - &c5;

	let mut result = c0;
	result = &result + &shift_words(&c1, k);
	result = &result + &shift_words(&c2, 2 * k);
	result = &result + &shift_words(&c3, 3 * k);
	result = &result + &shift_words(&c4, 4 * k);
	result = &result + &shift_words(&c5, 5 * k);
	result = &result + &shift_words(&c6, 6 * k);
	debug_assert!(!result.negative, "a product of magnitudes is non-negative");
	result.digits
}
