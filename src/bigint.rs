//! The signed arbitrary-precision integer type.

//	The arithmetic kernels behind this type index digit arrays by positions
//	derived from their own lengths; the public surface in this module adds
//	nothing riskier, so the slicing lints are disabled wholesale rather than
//	annotated case by case.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Indices are derived from the lengths of the arrays they index"
)]



//		Modules

#[cfg(test)]
#[path = "tests/bigint.rs"]
mod tests;



//		Packages

use crate::bits;
use crate::divide;
use crate::errors::NumericError;
use crate::gcd;
use crate::magnitude::{self, Digit};
use crate::multiply;
use crate::radix;
use crate::root;
use bytes::BytesMut;
use core::{
	cmp::Ordering,
	error::Error,
	fmt::{Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex, self},
	iter::{Product, Sum},
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign},
	str::FromStr,
};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
};
use serde_json::Error as JsonError;
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};



//		Enums

//		Endian
/// Byte order for two's-complement byte conversions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Endian {
	/// Most-significant byte first.
	Big,

	/// Least-significant byte first.
	Little,
}



//		Structs

//		BigInt
/// A signed integer of unbounded magnitude.
///
/// # Representation
///
/// The value is stored sign-magnitude: a negative flag plus a base-65536
/// digit array, least-significant word first, with no leading (that is,
/// most-significant) zero words. Zero is the empty digit array and is never
/// negative, so every value has exactly one representation and `-0 == 0`
/// holds by construction.
///
/// # Immutability
///
/// No operation mutates an operand: every operation returns a fresh value.
/// Values can therefore be shared freely between threads — the only mutable
/// companion type, [`ShiftAccumulator`](crate::ShiftAccumulator), is
/// single-owner by design.
///
/// # Arithmetic
///
/// Arithmetic is exact and never overflows; the digit array simply grows.
/// The operator impls follow the standard library's integer behaviour where
/// a failure mode exists: division and remainder by zero panic, and the
/// checked variants ([`checked_div`](BigInt::checked_div),
/// [`checked_rem`](BigInt::checked_rem), [`div_rem`](BigInt::div_rem))
/// return the failure instead. Division truncates toward zero and the
/// remainder takes the dividend's sign, exactly as for the primitive
/// integer types.
///
/// # Algorithm selection
///
/// Multiplication, division, and GCD each dispatch internally over several
/// algorithm tiers by operand size (schoolbook through Toom-4, schoolbook
/// through recursive block division, binary GCD through half-GCD). The
/// choice is invisible: every tier produces bit-identical results.
///
/// # Conversion
///
/// This type converts from every native integer type via [`From`], and to
/// every native integer type via checked [`TryFrom`] (for `&BigInt`) or the
/// truncating `low_*` methods. Strings parse via [`FromStr`] (with `0x`,
/// `0o` and `0b` prefixes) or [`from_str_radix`](BigInt::from_str_radix)
/// (bases 2 to 36, strict); bytes convert via
/// [`from_bytes`](BigInt::from_bytes)/[`to_bytes`](BigInt::to_bytes) in
/// two's-complement form with explicit [`Endian`]ness.
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct BigInt {
	/// True only for strictly negative values; zero is never negative.
	pub(crate) negative: bool,

	/// The magnitude, base-65536, least-significant word first, canonical.
	pub(crate) digits:   Vec<Digit>,
}

//󰭅		BigInt
impl BigInt {
	//		Constructors

	//		zero
	/// The value 0.
	#[must_use]
	pub fn zero() -> Self {
		Self { negative: false, digits: Vec::new() }
	}

	//		one
	/// The value 1.
	#[must_use]
	pub fn one() -> Self {
		Self { negative: false, digits: vec![1] }
	}

	//		ten
	/// The value 10.
	#[must_use]
	pub fn ten() -> Self {
		Self { negative: false, digits: vec![10] }
	}

	//		from_digits
	/// Creates a value from a raw digit array, least-significant word first.
	///
	/// The array must be in canonical form already: a most-significant zero
	/// word is rejected rather than silently trimmed, since a caller
	/// handing over raw digits is asserting it produced them correctly.
	///
	/// # Parameters
	///
	/// * `negative` - Whether the value is negative; ignored for zero.
	/// * `digits`   - The magnitude words; must carry no leading zero word.
	///
	/// # Errors
	///
	/// Returns [`NumericError::InvalidArgument`] if the most-significant
	/// word is zero.
	///
	pub fn from_digits(negative: bool, digits: Vec<u16>) -> Result<Self, NumericError> {
		if digits.last() == Some(&0) {
			return Err(NumericError::InvalidArgument("leading zero word in digit array"));
		}
		Ok(Self::from_raw_parts(negative, digits))
	}

	//		from_bytes
	/// Creates a value from two's-complement bytes.
	///
	/// The most-significant bit of the most-significant byte is the sign
	/// bit, exactly as for the primitive integer types.
	///
	/// # Parameters
	///
	/// * `bytes`  - The two's-complement byte representation.
	/// * `endian` - The byte order of `bytes`.
	///
	/// # Errors
	///
	/// Returns [`NumericError::EmptyValue`] for an empty byte slice, which
	/// has no sign bit to read.
	///
	pub fn from_bytes(bytes: &[u8], endian: Endian) -> Result<Self, NumericError> {
		if bytes.is_empty() {
			return Err(NumericError::EmptyValue);
		}
		let mut little: Vec<u8> = match endian {
			Endian::Little => bytes.to_vec(),
			Endian::Big    => bytes.iter().rev().copied().collect(),
		};

		let negative = little[little.len() - 1] & 0x80 != 0;
		if negative {
			//	Two's complement to magnitude: invert every byte, add one
			let mut carry = true;
			for byte in &mut little {
				*byte = !*byte;
				if carry {
					let (sum, overflow) = byte.overflowing_add(1);
					*byte = sum;
					carry = overflow;
				}
			}
		}

		Ok(Self::from_raw_parts(negative, digits_from_le_bytes(&little)))
	}

	//		from_le_bytes
	/// Creates a value from little-endian two's-complement bytes.
	///
	/// # Parameters
	///
	/// * `bytes` - The two's-complement byte representation.
	///
	/// # Errors
	///
	/// Returns [`NumericError::EmptyValue`] for an empty byte slice.
	///
	pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, NumericError> {
		Self::from_bytes(bytes, Endian::Little)
	}

	//		from_be_bytes
	/// Creates a value from big-endian two's-complement bytes.
	///
	/// # Parameters
	///
	/// * `bytes` - The two's-complement byte representation.
	///
	/// # Errors
	///
	/// Returns [`NumericError::EmptyValue`] for an empty byte slice.
	///
	pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, NumericError> {
		Self::from_bytes(bytes, Endian::Big)
	}

	//		from_str_radix
	/// Parses a digit string in the given base.
	///
	/// The strict grammar: an optional single leading minus sign, then one
	/// or more digits of the base's alphabet (`0-9` then `a-z`,
	/// case-insensitive). No whitespace, no plus sign, no separators — for
	/// the relaxed surface grammar, parse via [`FromStr`] instead.
	///
	/// # Parameters
	///
	/// * `text`  - The string to parse.
	/// * `radix` - The base, 2 to 36.
	///
	/// # Errors
	///
	/// Returns [`NumericError::InvalidRadix`] for an unsupported base,
	/// [`NumericError::EmptyValue`] for an empty or sign-only string, and
	/// [`NumericError::InvalidDigit`] for any invalid character.
	///
	pub fn from_str_radix(text: &str, radix: u8) -> Result<Self, NumericError> {
		radix::parse(text, radix)
	}

	//		from_json
	/// Deserialises a value from a JSON fragment.
	///
	/// # Parameters
	///
	/// * `json` - The JSON fragment: a number or a base-10 string.
	///
	/// # Errors
	///
	/// Returns a [`serde_json`] error if the fragment cannot be parsed.
	///
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}

	//		Internal constructors

	//		from_raw_parts
	/// Builds a value from a sign and digit array, canonicalising both.
	pub(crate) fn from_raw_parts(negative: bool, mut digits: Vec<Digit>) -> Self {
		magnitude::trim(&mut digits);
		let negative = negative && !digits.is_empty();
		Self { negative, digits }
	}

	//		from_i64_uncached
	/// Builds a value from a machine integer, bypassing the small-value
	/// cache (which this constructor itself populates).
	pub(crate) fn from_i64_uncached(value: i64) -> Self {
		Self {
			negative: value < 0,
			digits:   magnitude::digits_from_u64(value.unsigned_abs()),
		}
	}

	//		Public methods

	//		abs
	/// The absolute value.
	#[must_use]
	pub fn abs(&self) -> Self {
		Self { negative: false, digits: self.digits.clone() }
	}

	//		and_not
	/// Bitwise AND with the complement of `other`, over the
	/// two's-complement view.
	///
	/// # Parameters
	///
	/// * `other` - The value whose complement is combined in.
	///
	#[must_use]
	pub fn and_not(&self, other: &Self) -> Self {
		bits::and_not(self, other)
	}

	//		bit
	/// Reads one bit of the two's-complement view.
	///
	/// Negative values sign-extend: every bit of `-1` is set.
	///
	/// # Parameters
	///
	/// * `index` - The zero-based bit position.
	///
	#[must_use]
	pub fn bit(&self, index: u64) -> bool {
		bits::bit(self, index)
	}

	//		bit_length
	/// The number of significant bits in the magnitude (the unsigned
	/// view). Zero has bit length 0.
	#[must_use]
	pub fn bit_length(&self) -> u64 {
		magnitude::bit_length(&self.digits)
	}

	//		checked_div
	/// Checked division.
	///
	/// Computes `self / rhs`, returning [`None`] if `rhs` is zero. The
	/// quotient truncates toward zero.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
		divide::div_rem(self, rhs).ok().map(|(quotient, _)| quotient)
	}

	//		checked_rem
	/// Checked remainder.
	///
	/// Computes `self % rhs`, returning [`None`] if `rhs` is zero. The
	/// remainder has the dividend's sign.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_rem(&self, rhs: &Self) -> Option<Self> {
		divide::div_rem(self, rhs).ok().map(|(_, remainder)| remainder)
	}

	//		div_rem
	/// Division and remainder in one pass.
	///
	/// The quotient truncates toward zero and the remainder takes the
	/// dividend's sign, so `self == rhs * quotient + remainder` with
	/// `|remainder| < |rhs|`.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	/// # Errors
	///
	/// Returns [`NumericError::DivideByZero`] if `rhs` is zero.
	///
	pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), NumericError> {
		divide::div_rem(self, rhs)
	}

	//		gcd
	/// The greatest common divisor, always non-negative.
	///
	/// `gcd(0, x) == |x|` and `gcd(x, 0) == |x|`.
	///
	/// # Parameters
	///
	/// * `other` - The other operand.
	///
	#[must_use]
	pub fn gcd(&self, other: &Self) -> Self {
		gcd::gcd(self, other)
	}

	//		is_even
	/// Whether the value is even. Zero is even.
	#[must_use]
	pub fn is_even(&self) -> bool {
		match self.digits.first() {
			Some(&low) => low & 1 == 0,
			None       => true,
		}
	}

	//		is_negative
	/// Whether the value is strictly negative.
	#[must_use]
	pub fn is_negative(&self) -> bool {
		self.negative
	}

	//		is_positive
	/// Whether the value is strictly positive.
	#[must_use]
	pub fn is_positive(&self) -> bool {
		!self.negative && !self.digits.is_empty()
	}

	//		is_power_of_two
	/// Whether the value is a power of two. Zero and negative values are
	/// not.
	#[must_use]
	pub fn is_power_of_two(&self) -> bool {
		if self.negative || self.digits.is_empty() {
			return false;
		}
		match bits::trailing_zero_bits(&self.digits) {
			Some(zeros) => zeros + 1 == self.bit_length(),
			None        => false,
		}
	}

	//		is_zero
	/// Whether the value is zero.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.digits.is_empty()
	}

	//		low_bits
	/// Extracts the low `n` bits as a non-negative value.
	///
	/// Equivalent to `self & (2^n - 1)` over the two's-complement view,
	/// without materialising the mask for non-negative inputs.
	///
	/// # Parameters
	///
	/// * `n` - The number of low bits to keep.
	///
	#[must_use]
	pub fn low_bits(&self, n: u64) -> Self {
		bits::low_bits(self, n)
	}

	//		magnitude_bit
	/// Reads one bit of the magnitude (the unsigned view).
	///
	/// # Parameters
	///
	/// * `index` - The zero-based bit position.
	///
	#[must_use]
	pub fn magnitude_bit(&self, index: u64) -> bool {
		bits::magnitude_bit(&self.digits, index)
	}

	//		mod_pow
	/// Modular exponentiation: `self^exponent mod modulus`, non-negative.
	///
	/// # Parameters
	///
	/// * `exponent` - The exponent; must be non-negative.
	/// * `modulus`  - The modulus; must be strictly positive.
	///
	/// # Errors
	///
	/// Returns [`NumericError::InvalidArgument`] for a negative exponent or
	/// a negative modulus, and [`NumericError::DivideByZero`] for a zero
	/// modulus.
	///
	pub fn mod_pow(&self, exponent: &Self, modulus: &Self) -> Result<Self, NumericError> {
		if exponent.is_negative() {
			return Err(NumericError::InvalidArgument("negative exponent"));
		}
		let mut base   = self.modulo(modulus)?;
		let mut result = Self::one().modulo(modulus)?;

		let total_bits = exponent.bit_length();
		for index in 0..total_bits {
			if exponent.magnitude_bit(index) {
				result = (&result * &base).modulo(modulus)?;
			}
			if index + 1 < total_bits {
				base = base.square_value().modulo(modulus)?;
			}
		}
		Ok(result)
	}

	//		modulo
	/// The non-negative remainder of division by a positive modulus.
	///
	/// Unlike the `%` operator, whose result takes the dividend's sign,
	/// this adds the modulus back when the raw remainder is negative.
	///
	/// # Parameters
	///
	/// * `modulus` - The modulus; must be strictly positive.
	///
	/// # Errors
	///
	/// Returns [`NumericError::InvalidArgument`] for a negative modulus and
	/// [`NumericError::DivideByZero`] for a zero modulus.
	///
	pub fn modulo(&self, modulus: &Self) -> Result<Self, NumericError> {
		if modulus.is_negative() {
			return Err(NumericError::InvalidArgument("negative modulus"));
		}
		let (_, remainder) = divide::div_rem(self, modulus)?;
		if remainder.is_negative() {
			Ok(&remainder + modulus)
		} else {
			Ok(remainder)
		}
	}

	//		negate
	/// The additive inverse. Zero negates to itself.
	#[must_use]
	pub fn negate(&self) -> Self {
		Self {
			negative: !self.negative && !self.digits.is_empty(),
			digits:   self.digits.clone(),
		}
	}

	//		nth_root
	/// The floor `r`-th root.
	///
	/// # Parameters
	///
	/// * `r` - The root order; must be at least 1.
	///
	/// # Errors
	///
	/// Returns [`NumericError::InvalidArgument`] for a zero root order, and
	/// for an even root of a negative value.
	///
	pub fn nth_root(&self, r: u32) -> Result<Self, NumericError> {
		root::nth_root_rem(self, r).map(|(value, _)| value)
	}

	//		nth_root_rem
	/// The floor `r`-th root together with the exact remainder
	/// `self - root^r`.
	///
	/// # Parameters
	///
	/// * `r` - The root order; must be at least 1.
	///
	/// # Errors
	///
	/// Returns [`NumericError::InvalidArgument`] for a zero root order, and
	/// for an even root of a negative value.
	///
	pub fn nth_root_rem(&self, r: u32) -> Result<(Self, Self), NumericError> {
		root::nth_root_rem(self, r)
	}

	//		or_not
	/// Bitwise OR with the complement of `other`, over the
	/// two's-complement view.
	///
	/// # Parameters
	///
	/// * `other` - The value whose complement is combined in.
	///
	#[must_use]
	pub fn or_not(&self, other: &Self) -> Self {
		bits::or_not(self, other)
	}

	//		pow
	/// Raises the value to a power by binary exponentiation.
	///
	/// `pow(0)` is 1 for every value, including zero.
	///
	/// # Parameters
	///
	/// * `exponent` - The power to raise to.
	///
	#[must_use]
	pub fn pow(&self, exponent: u32) -> Self {
		if exponent == 0 {
			return Self::one();
		}
		if self.is_zero() {
			return Self::zero();
		}

		let mut base      = self.clone();
		let mut result    = Self::one();
		let mut remaining = exponent;
		while remaining > 0 {
			if remaining & 1 == 1 {
				result = &result * &base;
			}
			remaining >>= 1_u8;
			if remaining > 0 {
				base = base.square_value();
			}
		}
		result
	}

	//		shift_left
	/// Shifts left by an arbitrary bit count, preserving sign.
	///
	/// # Parameters
	///
	/// * `bits` - The number of bit positions to shift by.
	///
	#[must_use]
	pub fn shift_left(&self, bits: u64) -> Self {
		bits::shl(self, bits)
	}

	//		shift_right
	/// Shifts right arithmetically by an arbitrary bit count.
	///
	/// Negative values sign-extend, so the result rounds toward negative
	/// infinity and `-1 >> n == -1` for every `n`.
	///
	/// # Parameters
	///
	/// * `bits` - The number of bit positions to shift by.
	///
	#[must_use]
	pub fn shift_right(&self, bits: u64) -> Self {
		bits::shr(self, bits)
	}

	//		signed_bit_length
	/// The minimal two's-complement width, excluding the sign bit.
	///
	/// For non-negative values this equals
	/// [`bit_length`](BigInt::bit_length); for negative values it is the
	/// bit length of `|self| - 1`.
	#[must_use]
	pub fn signed_bit_length(&self) -> u64 {
		bits::signed_bit_length(self)
	}

	//		signum
	/// The sign of the value: `-1`, `0`, or `1`.
	#[must_use]
	pub fn signum(&self) -> i8 {
		if self.digits.is_empty() {
			0
		} else if self.negative {
			-1
		} else {
			1
		}
	}

	//		sqrt
	/// The floor square root.
	///
	/// # Errors
	///
	/// Returns [`NumericError::InvalidArgument`] for a negative value.
	///
	pub fn sqrt(&self) -> Result<Self, NumericError> {
		root::sqrt_rem(self).map(|(value, _)| value)
	}

	//		sqrt_rem
	/// The floor square root together with the exact remainder
	/// `self - root²`.
	///
	/// # Errors
	///
	/// Returns [`NumericError::InvalidArgument`] for a negative value.
	///
	pub fn sqrt_rem(&self) -> Result<(Self, Self), NumericError> {
		root::sqrt_rem(self)
	}

	//		to_bytes
	/// The minimal two's-complement byte representation.
	///
	/// The most-significant bit of the most-significant byte is the sign
	/// bit; an extension byte (`0x00` or `0xff`) is appended only when the
	/// value bits would otherwise be misread as the opposite sign. Zero is
	/// the single byte `0x00`.
	///
	/// # Parameters
	///
	/// * `endian` - The byte order of the result.
	///
	#[must_use]
	pub fn to_bytes(&self, endian: Endian) -> Vec<u8> {
		if self.is_zero() {
			return vec![0];
		}

		let mut little = le_bytes_from_digits(&self.digits);
		if self.negative {
			//	Magnitude to two's complement: invert every byte, add one
			let mut carry = true;
			for byte in &mut little {
				*byte = !*byte;
				if carry {
					let (sum, overflow) = byte.overflowing_add(1);
					*byte = sum;
					carry = overflow;
				}
			}
			if little[little.len() - 1] & 0x80 == 0 {
				little.push(0xFF);
			}
		} else if little[little.len() - 1] & 0x80 != 0 {
			little.push(0x00);
		}

		match endian {
			Endian::Little => little,
			Endian::Big    => {
				little.reverse();
				little
			},
		}
	}

	//		to_le_bytes
	/// The minimal two's-complement representation, least-significant byte
	/// first.
	#[must_use]
	pub fn to_le_bytes(&self) -> Vec<u8> {
		self.to_bytes(Endian::Little)
	}

	//		to_be_bytes
	/// The minimal two's-complement representation, most-significant byte
	/// first.
	#[must_use]
	pub fn to_be_bytes(&self) -> Vec<u8> {
		self.to_bytes(Endian::Big)
	}

	//		to_json
	/// Serialises the value to a JSON fragment: a number when it fits
	/// `i64`/`u64`, a base-10 string otherwise.
	///
	/// # Errors
	///
	/// Returns a [`serde_json`] error if serialisation fails.
	///
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}

	//		to_string_radix
	/// Formats the value in the given base, lowercase, with a `-` prefix
	/// for negative values.
	///
	/// # Parameters
	///
	/// * `radix` - The base, 2 to 36.
	///
	/// # Errors
	///
	/// Returns [`NumericError::InvalidRadix`] for an unsupported base.
	///
	pub fn to_string_radix(&self, radix: u8) -> Result<String, NumericError> {
		radix::format(self, radix)
	}

	//		trailing_zeros
	/// The number of trailing zero bits of the magnitude; [`None`] for
	/// zero, which has no set bit to count up to.
	#[must_use]
	pub fn trailing_zeros(&self) -> Option<u64> {
		bits::trailing_zero_bits(&self.digits)
	}

	//		xor_not
	/// Bitwise XOR with the complement of `other`, over the
	/// two's-complement view.
	///
	/// # Parameters
	///
	/// * `other` - The value whose complement is combined in.
	///
	#[must_use]
	pub fn xor_not(&self, other: &Self) -> Self {
		bits::xor_not(self, other)
	}

	//		Truncating narrowing conversions

	//		low_u128
	/// The low 128 bits of the two's-complement view, as `u128`. Never
	/// fails; high bits are simply discarded.
	#[must_use]
	pub fn low_u128(&self) -> u128 {
		let mut value = 0_u128;
		for (index, &word) in self.digits.iter().take(8).enumerate() {
			value |= u128::from(word) << (index * 16);
		}
		if self.negative {
			value.wrapping_neg()
		} else {
			value
		}
	}

	//		low_u64
	/// The low 64 bits of the two's-complement view, as `u64`.
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is this method's purpose")]
	#[must_use]
	pub fn low_u64(&self) -> u64 {
		self.low_u128() as u64
	}

	//		low_u32
	/// The low 32 bits of the two's-complement view, as `u32`.
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is this method's purpose")]
	#[must_use]
	pub fn low_u32(&self) -> u32 {
		self.low_u128() as u32
	}

	//		low_u16
	/// The low 16 bits of the two's-complement view, as `u16`.
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is this method's purpose")]
	#[must_use]
	pub fn low_u16(&self) -> u16 {
		self.low_u128() as u16
	}

	//		low_u8
	/// The low 8 bits of the two's-complement view, as `u8`.
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is this method's purpose")]
	#[must_use]
	pub fn low_u8(&self) -> u8 {
		self.low_u128() as u8
	}

	//		low_usize
	/// The low pointer-width bits of the two's-complement view, as `usize`.
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is this method's purpose")]
	#[must_use]
	pub fn low_usize(&self) -> usize {
		self.low_u128() as usize
	}

	//		low_i128
	/// The low 128 bits of the two's-complement view, as `i128`.
	#[expect(clippy::cast_possible_wrap, reason = "Two's-complement reinterpretation is this method's purpose")]
	#[must_use]
	pub fn low_i128(&self) -> i128 {
		self.low_u128() as i128
	}

	//		low_i64
	/// The low 64 bits of the two's-complement view, as `i64`.
	#[expect(clippy::cast_possible_wrap, reason = "Two's-complement reinterpretation is this method's purpose")]
	#[must_use]
	pub fn low_i64(&self) -> i64 {
		self.low_u64() as i64
	}

	//		low_i32
	/// The low 32 bits of the two's-complement view, as `i32`.
	#[expect(clippy::cast_possible_wrap, reason = "Two's-complement reinterpretation is this method's purpose")]
	#[must_use]
	pub fn low_i32(&self) -> i32 {
		self.low_u32() as i32
	}

	//		low_i16
	/// The low 16 bits of the two's-complement view, as `i16`.
	#[expect(clippy::cast_possible_wrap, reason = "Two's-complement reinterpretation is this method's purpose")]
	#[must_use]
	pub fn low_i16(&self) -> i16 {
		self.low_u16() as i16
	}

	//		low_i8
	/// The low 8 bits of the two's-complement view, as `i8`.
	#[expect(clippy::cast_possible_wrap, reason = "Two's-complement reinterpretation is this method's purpose")]
	#[must_use]
	pub fn low_i8(&self) -> i8 {
		self.low_u8() as i8
	}

	//		low_isize
	/// The low pointer-width bits of the two's-complement view, as `isize`.
	#[expect(clippy::cast_possible_wrap, reason = "Two's-complement reinterpretation is this method's purpose")]
	#[must_use]
	pub fn low_isize(&self) -> isize {
		self.low_usize() as isize
	}

	//		Internal methods

	//		square_value
	/// Squares the value through the squaring tiers of the multiplicative
	/// kernel.
	pub(crate) fn square_value(&self) -> Self {
		multiply::square(self)
	}
}



//		Functions

//		digits_from_le_bytes
/// Packs little-endian bytes into a digit array, two bytes per word.
fn digits_from_le_bytes(bytes: &[u8]) -> Vec<Digit> {
	let mut digits = Vec::with_capacity(bytes.len().div_ceil(2));
	for pair in bytes.chunks(2) {
		let low  = u16::from(pair[0]);
		let high = if pair.len() > 1 { u16::from(pair[1]) << 8 } else { 0 };
		digits.push(low | high);
	}
	digits
}

//		le_bytes_from_digits
/// Unpacks a digit array into little-endian bytes, dropping the top zero
/// byte of an odd-length magnitude.
fn le_bytes_from_digits(digits: &[Digit]) -> Vec<u8> {
	let mut bytes = Vec::with_capacity(digits.len() * 2);
	for &word in digits {
		#[expect(clippy::cast_possible_truncation, reason = "Masked to the low byte")]
		bytes.push((word & 0xFF) as u8);
		#[expect(clippy::cast_possible_truncation, reason = "The high byte of a word")]
		bytes.push((word >> 8) as u8);
	}
	while bytes.len() > 1 && bytes[bytes.len() - 1] == 0 {
		drop(bytes.pop());
	}
	bytes
}

//󰭅		Add
impl Add<&BigInt> for &BigInt {
	type Output = BigInt;

	//		add
	fn add(self, rhs: &BigInt) -> Self::Output {
		if self.is_zero() {
			return rhs.clone();
		}
		if rhs.is_zero() {
			return self.clone();
		}

		//	Same-sign operands add magnitudes; opposite signs subtract the
		//	smaller magnitude from the larger, which keeps its sign
		if self.negative == rhs.negative {
			return BigInt::from_raw_parts(
				self.negative,
				magnitude::add(&self.digits, &rhs.digits),
			);
		}
		match magnitude::compare(&self.digits, &rhs.digits) {
			Ordering::Equal   => BigInt::zero(),
			Ordering::Greater => BigInt::from_raw_parts(
				self.negative,
				magnitude::sub(&self.digits, &rhs.digits),
			),
			Ordering::Less    => BigInt::from_raw_parts(
				rhs.negative,
				magnitude::sub(&rhs.digits, &self.digits),
			),
		}
	}
}

//󰭅		Add: BigInt + BigInt
impl Add for BigInt {
	type Output = Self;

	//		add
	fn add(self, rhs: Self) -> Self::Output {
		&self + &rhs
	}
}

//󰭅		Add: BigInt + &BigInt
impl Add<&Self> for BigInt {
	type Output = Self;

	//		add
	fn add(self, rhs: &Self) -> Self::Output {
		&self + rhs
	}
}

//󰭅		Add: &BigInt + BigInt
impl Add<BigInt> for &BigInt {
	type Output = BigInt;

	//		add
	fn add(self, rhs: BigInt) -> Self::Output {
		self + &rhs
	}
}

//󰭅		AddAssign
impl AddAssign for BigInt {
	//		add_assign
	fn add_assign(&mut self, rhs: Self) {
		*self = &*self + &rhs;
	}
}

//󰭅		AddAssign<&>
impl AddAssign<&Self> for BigInt {
	//		add_assign
	fn add_assign(&mut self, rhs: &Self) {
		*self = &*self + rhs;
	}
}

//󰭅		Binary
impl Binary for BigInt {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let digits = radix::format(&self.abs(), 2).map_err(|_| fmt::Error)?;
		if self.negative {
			write!(f, "-")?;
		}
		if f.alternate() {
			write!(f, "0b")?;
		}
		f.write_str(&digits)
	}
}

//󰭅		BitAnd
impl BitAnd<&BigInt> for &BigInt {
	type Output = BigInt;

	//		bitand
	fn bitand(self, rhs: &BigInt) -> Self::Output {
		bits::and(self, rhs)
	}
}

//󰭅		BitAnd: BigInt & BigInt
impl BitAnd for BigInt {
	type Output = Self;

	//		bitand
	fn bitand(self, rhs: Self) -> Self::Output {
		&self & &rhs
	}
}

//󰭅		BitAnd: BigInt & &BigInt
impl BitAnd<&Self> for BigInt {
	type Output = Self;

	//		bitand
	fn bitand(self, rhs: &Self) -> Self::Output {
		&self & rhs
	}
}

//󰭅		BitAnd: &BigInt & BigInt
impl BitAnd<BigInt> for &BigInt {
	type Output = BigInt;

	//		bitand
	fn bitand(self, rhs: BigInt) -> Self::Output {
		self & &rhs
	}
}

//󰭅		BitAndAssign
impl BitAndAssign for BigInt {
	//		bitand_assign
	fn bitand_assign(&mut self, rhs: Self) {
		*self = &*self & &rhs;
	}
}

//󰭅		BitAndAssign<&>
impl BitAndAssign<&Self> for BigInt {
	//		bitand_assign
	fn bitand_assign(&mut self, rhs: &Self) {
		*self = &*self & rhs;
	}
}

//󰭅		BitOr
impl BitOr<&BigInt> for &BigInt {
	type Output = BigInt;

	//		bitor
	fn bitor(self, rhs: &BigInt) -> Self::Output {
		bits::or(self, rhs)
	}
}

//󰭅		BitOr: BigInt | BigInt
impl BitOr for BigInt {
	type Output = Self;

	//		bitor
	fn bitor(self, rhs: Self) -> Self::Output {
		&self | &rhs
	}
}

//󰭅		BitOr: BigInt | &BigInt
impl BitOr<&Self> for BigInt {
	type Output = Self;

	//		bitor
	fn bitor(self, rhs: &Self) -> Self::Output {
		&self | rhs
	}
}

//󰭅		BitOr: &BigInt | BigInt
impl BitOr<BigInt> for &BigInt {
	type Output = BigInt;

	//		bitor
	fn bitor(self, rhs: BigInt) -> Self::Output {
		self | &rhs
	}
}

//󰭅		BitOrAssign
impl BitOrAssign for BigInt {
	//		bitor_assign
	fn bitor_assign(&mut self, rhs: Self) {
		*self = &*self | &rhs;
	}
}

//󰭅		BitOrAssign<&>
impl BitOrAssign<&Self> for BigInt {
	//		bitor_assign
	fn bitor_assign(&mut self, rhs: &Self) {
		*self = &*self | rhs;
	}
}

//󰭅		BitXor
impl BitXor<&BigInt> for &BigInt {
	type Output = BigInt;

	//		bitxor
	fn bitxor(self, rhs: &BigInt) -> Self::Output {
		bits::xor(self, rhs)
	}
}

//󰭅		BitXor: BigInt ^ BigInt
impl BitXor for BigInt {
	type Output = Self;

	//		bitxor
	fn bitxor(self, rhs: Self) -> Self::Output {
		&self ^ &rhs
	}
}

//󰭅		BitXor: BigInt ^ &BigInt
impl BitXor<&Self> for BigInt {
	type Output = Self;

	//		bitxor
	fn bitxor(self, rhs: &Self) -> Self::Output {
		&self ^ rhs
	}
}

//󰭅		BitXor: &BigInt ^ BigInt
impl BitXor<BigInt> for &BigInt {
	type Output = BigInt;

	//		bitxor
	fn bitxor(self, rhs: BigInt) -> Self::Output {
		self ^ &rhs
	}
}

//󰭅		BitXorAssign
impl BitXorAssign for BigInt {
	//		bitxor_assign
	fn bitxor_assign(&mut self, rhs: Self) {
		*self = &*self ^ &rhs;
	}
}

//󰭅		BitXorAssign<&>
impl BitXorAssign<&Self> for BigInt {
	//		bitxor_assign
	fn bitxor_assign(&mut self, rhs: &Self) {
		*self = &*self ^ rhs;
	}
}

//󰭅		Debug
impl Debug for BigInt {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "BigInt({self})")
	}
}

//󰭅		Deserialize
impl<'de> Deserialize<'de> for BigInt {
	//		deserialize
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			deserializer.deserialize_any(BigIntVisitor)
		} else {
			deserializer.deserialize_bytes(BigIntVisitor)
		}
	}
}

//		BigIntVisitor
/// Serde visitor accepting numbers, base-10 strings, and byte arrays.
struct BigIntVisitor;

//󰭅		Visitor for BigIntVisitor
impl Visitor<'_> for BigIntVisitor {
	type Value = BigInt;

	//		expecting
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter.write_str("an integer, a base-10 string, or two's-complement bytes")
	}

	//		visit_i64
	fn visit_i64<E: SerdeError>(self, v: i64) -> Result<Self::Value, E> {
		Ok(BigInt::from(v))
	}

	//		visit_u64
	fn visit_u64<E: SerdeError>(self, v: u64) -> Result<Self::Value, E> {
		Ok(BigInt::from(v))
	}

	//		visit_i128
	fn visit_i128<E: SerdeError>(self, v: i128) -> Result<Self::Value, E> {
		Ok(BigInt::from(v))
	}

	//		visit_u128
	fn visit_u128<E: SerdeError>(self, v: u128) -> Result<Self::Value, E> {
		Ok(BigInt::from(v))
	}

	//		visit_str
	fn visit_str<E: SerdeError>(self, v: &str) -> Result<Self::Value, E> {
		v.parse().map_err(E::custom)
	}

	//		visit_bytes
	fn visit_bytes<E: SerdeError>(self, v: &[u8]) -> Result<Self::Value, E> {
		BigInt::from_le_bytes(v).map_err(E::custom)
	}
}

//󰭅		Display
impl Display for BigInt {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let formatted = radix::format(self, 10).map_err(|_| fmt::Error)?;
		f.write_str(&formatted)
	}
}

//󰭅		Div
impl Div<&BigInt> for &BigInt {
	type Output = BigInt;

	//		div
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn div(self, rhs: &BigInt) -> Self::Output {
		assert!(!rhs.is_zero(), "Attempt to divide by zero");
		self.checked_div(rhs).expect("Attempt to divide by zero")
	}
}

//󰭅		Div: BigInt / BigInt
impl Div for BigInt {
	type Output = Self;

	//		div
	fn div(self, rhs: Self) -> Self::Output {
		&self / &rhs
	}
}

//󰭅		Div: BigInt / &BigInt
impl Div<&Self> for BigInt {
	type Output = Self;

	//		div
	fn div(self, rhs: &Self) -> Self::Output {
		&self / rhs
	}
}

//󰭅		Div: &BigInt / BigInt
impl Div<BigInt> for &BigInt {
	type Output = BigInt;

	//		div
	fn div(self, rhs: BigInt) -> Self::Output {
		self / &rhs
	}
}

//󰭅		DivAssign
impl DivAssign for BigInt {
	//		div_assign
	fn div_assign(&mut self, rhs: Self) {
		*self = &*self / &rhs;
	}
}

//󰭅		DivAssign<&>
impl DivAssign<&Self> for BigInt {
	//		div_assign
	fn div_assign(&mut self, rhs: &Self) {
		*self = &*self / rhs;
	}
}

//󰭅		From: i8 -> BigInt
impl From<i8> for BigInt {
	//		from
	fn from(v: i8) -> Self {
		Self::from(i64::from(v))
	}
}

//󰭅		From: i16 -> BigInt
impl From<i16> for BigInt {
	//		from
	fn from(v: i16) -> Self {
		Self::from(i64::from(v))
	}
}

//󰭅		From: i32 -> BigInt
impl From<i32> for BigInt {
	//		from
	fn from(v: i32) -> Self {
		Self::from(i64::from(v))
	}
}

//󰭅		From: i64 -> BigInt
impl From<i64> for BigInt {
	//		from
	fn from(v: i64) -> Self {
		//	Common small constants come straight from the cache
		match magnitude::cached_small(v) {
			Some(cached) => cached,
			None         => Self::from_i64_uncached(v),
		}
	}
}

//󰭅		From: i128 -> BigInt
impl From<i128> for BigInt {
	//		from
	fn from(v: i128) -> Self {
		match i64::try_from(v) {
			Ok(narrow) => Self::from(narrow),
			Err(_)     => Self {
				negative: v < 0,
				digits:   magnitude::digits_from_u128(v.unsigned_abs()),
			},
		}
	}
}

//󰭅		From: isize -> BigInt
impl From<isize> for BigInt {
	//		from
	fn from(v: isize) -> Self {
		Self::from(v as i128)
	}
}

//󰭅		From: u8 -> BigInt
impl From<u8> for BigInt {
	//		from
	fn from(v: u8) -> Self {
		Self::from(i64::from(v))
	}
}

//󰭅		From: u16 -> BigInt
impl From<u16> for BigInt {
	//		from
	fn from(v: u16) -> Self {
		Self::from(i64::from(v))
	}
}

//󰭅		From: u32 -> BigInt
impl From<u32> for BigInt {
	//		from
	fn from(v: u32) -> Self {
		Self::from(i64::from(v))
	}
}

//󰭅		From: u64 -> BigInt
impl From<u64> for BigInt {
	//		from
	fn from(v: u64) -> Self {
		match i64::try_from(v) {
			Ok(narrow) => Self::from(narrow),
			Err(_)     => Self { negative: false, digits: magnitude::digits_from_u64(v) },
		}
	}
}

//󰭅		From: u128 -> BigInt
impl From<u128> for BigInt {
	//		from
	fn from(v: u128) -> Self {
		match u64::try_from(v) {
			Ok(narrow) => Self::from(narrow),
			Err(_)     => Self { negative: false, digits: magnitude::digits_from_u128(v) },
		}
	}
}

//󰭅		From: usize -> BigInt
impl From<usize> for BigInt {
	//		from
	fn from(v: usize) -> Self {
		Self::from(v as u128)
	}
}

//󰭅		FromSql
impl<'a> FromSql<'a> for BigInt {
	//		from_sql
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2 => Ok(Self::from(i16::from_sql(ty, raw)?)),
			&Type::INT4 => Ok(Self::from(i32::from_sql(ty, raw)?)),
			&Type::INT8 => Ok(Self::from(i64::from_sql(ty, raw)?)),
			&Type::TEXT => Ok(
				String::from_utf8(raw.to_vec()).map_err(Box::new)?.parse::<Self>().map_err(Box::new)?
			),
			unknown     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for BigInt: {unknown}"),
			))),
		}
	}

	//		accepts
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT)
	}
}

//󰭅		FromStr
impl FromStr for BigInt {
	type Err = NumericError;

	//		from_str
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		radix::parse_lenient(s)
	}
}

//󰭅		LowerHex
impl LowerHex for BigInt {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let digits = radix::format(&self.abs(), 16).map_err(|_| fmt::Error)?;
		if self.negative {
			write!(f, "-")?;
		}
		if f.alternate() {
			write!(f, "0x")?;
		}
		f.write_str(&digits)
	}
}

//󰭅		Mul
impl Mul<&BigInt> for &BigInt {
	type Output = BigInt;

	//		mul
	fn mul(self, rhs: &BigInt) -> Self::Output {
		multiply::multiply(self, rhs)
	}
}

//󰭅		Mul: BigInt * BigInt
impl Mul for BigInt {
	type Output = Self;

	//		mul
	fn mul(self, rhs: Self) -> Self::Output {
		&self * &rhs
	}
}

//󰭅		Mul: BigInt * &BigInt
impl Mul<&Self> for BigInt {
	type Output = Self;

	//		mul
	fn mul(self, rhs: &Self) -> Self::Output {
		&self * rhs
	}
}

//󰭅		Mul: &BigInt * BigInt
impl Mul<BigInt> for &BigInt {
	type Output = BigInt;

	//		mul
	fn mul(self, rhs: BigInt) -> Self::Output {
		self * &rhs
	}
}

//󰭅		MulAssign
impl MulAssign for BigInt {
	//		mul_assign
	fn mul_assign(&mut self, rhs: Self) {
		*self = &*self * &rhs;
	}
}

//󰭅		MulAssign<&>
impl MulAssign<&Self> for BigInt {
	//		mul_assign
	fn mul_assign(&mut self, rhs: &Self) {
		*self = &*self * rhs;
	}
}

//󰭅		Neg
impl Neg for BigInt {
	type Output = Self;

	//		neg
	fn neg(self) -> Self::Output {
		self.negate()
	}
}

//󰭅		Neg: -&BigInt
impl Neg for &BigInt {
	type Output = BigInt;

	//		neg
	fn neg(self) -> Self::Output {
		self.negate()
	}
}

//󰭅		Not
impl Not for BigInt {
	type Output = Self;

	//		not
	fn not(self) -> Self::Output {
		bits::not(&self)
	}
}

//󰭅		Not: !&BigInt
impl Not for &BigInt {
	type Output = BigInt;

	//		not
	fn not(self) -> Self::Output {
		bits::not(self)
	}
}

//󰭅		Octal
impl Octal for BigInt {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let digits = radix::format(&self.abs(), 8).map_err(|_| fmt::Error)?;
		if self.negative {
			write!(f, "-")?;
		}
		if f.alternate() {
			write!(f, "0o")?;
		}
		f.write_str(&digits)
	}
}

//󰭅		Ord
impl Ord for BigInt {
	//		cmp
	fn cmp(&self, other: &Self) -> Ordering {
		match (self.negative, other.negative) {
			(false, true)  => Ordering::Greater,
			(true, false)  => Ordering::Less,
			(false, false) => magnitude::compare(&self.digits, &other.digits),
			(true, true)   => magnitude::compare(&other.digits, &self.digits),
		}
	}
}

//󰭅		PartialOrd
impl PartialOrd for BigInt {
	//		partial_cmp
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

//󰭅		Product
impl Product for BigInt {
	//		product
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::one(), |acc, x| &acc * &x)
	}
}

//󰭅		Product<&>
impl<'a> Product<&'a Self> for BigInt {
	//		product
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::one(), |acc, x| &acc * x)
	}
}

//󰭅		Rem
impl Rem<&BigInt> for &BigInt {
	type Output = BigInt;

	//		rem
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn rem(self, rhs: &BigInt) -> Self::Output {
		assert!(!rhs.is_zero(), "Attempt to calculate the remainder with a divisor of zero");
		self.checked_rem(rhs).expect("Attempt to calculate the remainder with a divisor of zero")
	}
}

//󰭅		Rem: BigInt % BigInt
impl Rem for BigInt {
	type Output = Self;

	//		rem
	fn rem(self, rhs: Self) -> Self::Output {
		&self % &rhs
	}
}

//󰭅		Rem: BigInt % &BigInt
impl Rem<&Self> for BigInt {
	type Output = Self;

	//		rem
	fn rem(self, rhs: &Self) -> Self::Output {
		&self % rhs
	}
}

//󰭅		Rem: &BigInt % BigInt
impl Rem<BigInt> for &BigInt {
	type Output = BigInt;

	//		rem
	fn rem(self, rhs: BigInt) -> Self::Output {
		self % &rhs
	}
}

//󰭅		RemAssign
impl RemAssign for BigInt {
	//		rem_assign
	fn rem_assign(&mut self, rhs: Self) {
		*self = &*self % &rhs;
	}
}

//󰭅		RemAssign<&>
impl RemAssign<&Self> for BigInt {
	//		rem_assign
	fn rem_assign(&mut self, rhs: &Self) {
		*self = &*self % rhs;
	}
}

//󰭅		Serialize
impl Serialize for BigInt {
	//		serialize
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			//	For JSON and similar formats, serialise as number if it fits
			if let Ok(v) = i64::try_from(self) {
				return serializer.serialize_i64(v);
			}
			if let Ok(v) = u64::try_from(self) {
				return serializer.serialize_u64(v);
			}
			//	Fall back to string for larger numbers
			serializer.serialize_str(&self.to_string())
		} else {
			//	For binary formats, serialise two's-complement bytes
			serializer.serialize_bytes(&self.to_le_bytes())
		}
	}
}

//󰭅		Shl
impl Shl<u32> for BigInt {
	type Output = Self;

	//		shl
	fn shl(self, rhs: u32) -> Self::Output {
		self.shift_left(u64::from(rhs))
	}
}

//󰭅		Shl: &BigInt << u32
impl Shl<u32> for &BigInt {
	type Output = BigInt;

	//		shl
	fn shl(self, rhs: u32) -> Self::Output {
		self.shift_left(u64::from(rhs))
	}
}

//󰭅		ShlAssign
impl ShlAssign<u32> for BigInt {
	//		shl_assign
	fn shl_assign(&mut self, rhs: u32) {
		*self = self.shift_left(u64::from(rhs));
	}
}

//󰭅		Shr
impl Shr<u32> for BigInt {
	type Output = Self;

	//		shr
	fn shr(self, rhs: u32) -> Self::Output {
		self.shift_right(u64::from(rhs))
	}
}

//󰭅		Shr: &BigInt >> u32
impl Shr<u32> for &BigInt {
	type Output = BigInt;

	//		shr
	fn shr(self, rhs: u32) -> Self::Output {
		self.shift_right(u64::from(rhs))
	}
}

//󰭅		ShrAssign
impl ShrAssign<u32> for BigInt {
	//		shr_assign
	fn shr_assign(&mut self, rhs: u32) {
		*self = self.shift_right(u64::from(rhs));
	}
}

//󰭅		Sub
impl Sub<&BigInt> for &BigInt {
	type Output = BigInt;

	//		sub
	fn sub(self, rhs: &BigInt) -> Self::Output {
		if rhs.is_zero() {
			return self.clone();
		}
		if self.is_zero() {
			return rhs.negate();
		}

		//	Opposite-sign operands add magnitudes under the left sign;
		//	same-sign operands subtract the smaller magnitude from the larger
		if self.negative != rhs.negative {
			return BigInt::from_raw_parts(
				self.negative,
				magnitude::add(&self.digits, &rhs.digits),
			);
		}
		match magnitude::compare(&self.digits, &rhs.digits) {
			Ordering::Equal   => BigInt::zero(),
			Ordering::Greater => BigInt::from_raw_parts(
				self.negative,
				magnitude::sub(&self.digits, &rhs.digits),
			),
			Ordering::Less    => BigInt::from_raw_parts(
				!self.negative,
				magnitude::sub(&rhs.digits, &self.digits),
			),
		}
	}
}

//󰭅		Sub: BigInt - BigInt
impl Sub for BigInt {
	type Output = Self;

	//		sub
	fn sub(self, rhs: Self) -> Self::Output {
		&self - &rhs
	}
}

//󰭅		Sub: BigInt - &BigInt
impl Sub<&Self> for BigInt {
	type Output = Self;

	//		sub
	fn sub(self, rhs: &Self) -> Self::Output {
		&self - rhs
	}
}

//󰭅		Sub: &BigInt - BigInt
impl Sub<BigInt> for &BigInt {
	type Output = BigInt;

	//		sub
	fn sub(self, rhs: BigInt) -> Self::Output {
		self - &rhs
	}
}

//󰭅		SubAssign
impl SubAssign for BigInt {
	//		sub_assign
	fn sub_assign(&mut self, rhs: Self) {
		*self = &*self - &rhs;
	}
}

//󰭅		SubAssign<&>
impl SubAssign<&Self> for BigInt {
	//		sub_assign
	fn sub_assign(&mut self, rhs: &Self) {
		*self = &*self - rhs;
	}
}

//󰭅		Sum
impl Sum for BigInt {
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::zero(), |acc, x| &acc + &x)
	}
}

//󰭅		Sum<&>
impl<'a> Sum<&'a Self> for BigInt {
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::zero(), |acc, x| &acc + x)
	}
}

//󰭅		ToSql
impl ToSql for BigInt {
	//		to_sql
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2 => i16::try_from(self)?.to_sql(ty, out),
			&Type::INT4 => i32::try_from(self)?.to_sql(ty, out),
			&Type::INT8 => i64::try_from(self)?.to_sql(ty, out),
			&Type::TEXT => self.to_string().to_sql(ty, out),
			unknown     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for BigInt: {unknown}"),
			))),
		}
	}

	//		accepts
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT)
	}

	to_sql_checked!();
}

//󰭅		TryFrom: &BigInt -> i8
impl TryFrom<&BigInt> for i8 {
	type Error = NumericError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		Self::try_from(i128::try_from(v)?).map_err(|_| NumericError::ValueTooLarge)
	}
}

//󰭅		TryFrom: &BigInt -> i16
impl TryFrom<&BigInt> for i16 {
	type Error = NumericError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		Self::try_from(i128::try_from(v)?).map_err(|_| NumericError::ValueTooLarge)
	}
}

//󰭅		TryFrom: &BigInt -> i32
impl TryFrom<&BigInt> for i32 {
	type Error = NumericError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		Self::try_from(i128::try_from(v)?).map_err(|_| NumericError::ValueTooLarge)
	}
}

//󰭅		TryFrom: &BigInt -> i64
impl TryFrom<&BigInt> for i64 {
	type Error = NumericError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		Self::try_from(i128::try_from(v)?).map_err(|_| NumericError::ValueTooLarge)
	}
}

//󰭅		TryFrom: &BigInt -> i128
impl TryFrom<&BigInt> for i128 {
	type Error = NumericError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		let magnitude = magnitude::to_u128(&v.digits).ok_or(NumericError::ValueTooLarge)?;
		if v.negative {
			if magnitude > Self::MIN.unsigned_abs() {
				return Err(NumericError::ValueTooLarge);
			}
			#[expect(clippy::cast_possible_wrap, reason = "The bound check keeps the wrap exact")]
			Ok(magnitude.wrapping_neg() as Self)
		} else {
			Self::try_from(magnitude).map_err(|_| NumericError::ValueTooLarge)
		}
	}
}

//󰭅		TryFrom: &BigInt -> isize
impl TryFrom<&BigInt> for isize {
	type Error = NumericError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		Self::try_from(i128::try_from(v)?).map_err(|_| NumericError::ValueTooLarge)
	}
}

//󰭅		TryFrom: &BigInt -> u8
impl TryFrom<&BigInt> for u8 {
	type Error = NumericError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		Self::try_from(u128::try_from(v)?).map_err(|_| NumericError::ValueTooLarge)
	}
}

//󰭅		TryFrom: &BigInt -> u16
impl TryFrom<&BigInt> for u16 {
	type Error = NumericError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		Self::try_from(u128::try_from(v)?).map_err(|_| NumericError::ValueTooLarge)
	}
}

//󰭅		TryFrom: &BigInt -> u32
impl TryFrom<&BigInt> for u32 {
	type Error = NumericError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		Self::try_from(u128::try_from(v)?).map_err(|_| NumericError::ValueTooLarge)
	}
}

//󰭅		TryFrom: &BigInt -> u64
impl TryFrom<&BigInt> for u64 {
	type Error = NumericError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		Self::try_from(u128::try_from(v)?).map_err(|_| NumericError::ValueTooLarge)
	}
}

//󰭅		TryFrom: &BigInt -> u128
impl TryFrom<&BigInt> for u128 {
	type Error = NumericError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		if v.negative {
			return Err(NumericError::ValueIsNegative);
		}
		magnitude::to_u128(&v.digits).ok_or(NumericError::ValueTooLarge)
	}
}

//󰭅		TryFrom: &BigInt -> usize
impl TryFrom<&BigInt> for usize {
	type Error = NumericError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		Self::try_from(u128::try_from(v)?).map_err(|_| NumericError::ValueTooLarge)
	}
}

//󰭅		UpperHex
impl UpperHex for BigInt {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let digits = radix::format(&self.abs(), 16).map_err(|_| fmt::Error)?;
		if self.negative {
			write!(f, "-")?;
		}
		if f.alternate() {
			write!(f, "0x")?;
		}
		f.write_str(&digits.to_uppercase())
	}
}
