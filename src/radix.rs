//! Radix conversion: parsing digit strings and formatting values.
//!
//! Parsing validates every character against the radix's digit alphabet
//! (digits then letters, case-insensitive) and accepts one optional leading
//! minus sign — nothing else. Formatting has dedicated fast paths for
//! power-of-two radices (bit-chunk extraction) and decimal (divide by 10⁴
//! per step), and a chunked divide-by-radix-power recursion for other
//! radices and very large magnitudes.

#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Indices are derived from the lengths of the arrays they index"
)]



//		Modules

#[cfg(test)]
#[path = "tests/radix.rs"]
mod tests;



//		Packages

use crate::bigint::BigInt;
use crate::divide;
use crate::errors::NumericError;
use crate::magnitude::{self, Digit};



//		Constants

/// Smallest supported base.
pub(crate) const MIN_RADIX: u8 = 2;

/// Largest supported base.
pub(crate) const MAX_RADIX: u8 = 36;

/// The digit alphabet shared by every base.
const DIGIT_CHARS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Word count above which formatting switches to the recursive
/// divide-by-radix-power scheme.
const RECURSIVE_FORMAT_LIMIT: usize = 64;



//		Functions

//		parse
/// Parses a digit string in the given base.
///
/// Accepts an optional single leading minus sign followed by one or more
/// digits of the base's alphabet, case-insensitive. Anything else — an
/// empty string, embedded whitespace, a plus sign, a digit of a larger
/// base — is rejected.
///
/// # Parameters
///
/// * `text`  - The string to parse.
/// * `radix` - The base, 2 to 36.
///
/// # Errors
///
/// Returns [`NumericError::InvalidRadix`] for an unsupported base,
/// [`NumericError::EmptyValue`] for an empty (or sign-only) string, and
/// [`NumericError::InvalidDigit`] for any invalid character.
///
pub(crate) fn parse(text: &str, radix: u8) -> Result<BigInt, NumericError> {
	if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
		return Err(NumericError::InvalidRadix(radix));
	}
	if text.is_empty() {
		return Err(NumericError::EmptyValue);
	}

	let (negative, digits_text) = match text.strip_prefix('-') {
		Some(rest) => (true, rest),
		None       => (false, text),
	};
	if digits_text.is_empty() {
		return Err(NumericError::EmptyValue);
	}

	//	Accumulate in chunks: as many digits as fit one word per round
	let (chunk_digits, chunk_factor) = chunk_shape(radix);
	let mut magnitude: Vec<Digit>    = Vec::new();
	let mut pending: u32             = 0;
	let mut pending_count            = 0;

	for c in digits_text.chars() {
		let digit = c
			.to_digit(u32::from(radix))
			.ok_or(NumericError::InvalidDigit(c, radix))?;
		pending = pending * u32::from(radix) + digit;
		pending_count += 1;
		if pending_count == chunk_digits {
			push_chunk(&mut magnitude, chunk_factor, pending);
			pending       = 0;
			pending_count = 0;
		}
	}
	if pending_count > 0 {
		let factor = u32::from(radix).pow(pending_count);
		push_chunk(&mut magnitude, factor, pending);
	}

	Ok(BigInt::from_raw_parts(negative, magnitude))
}

//		parse_lenient
/// Parses a string with the relaxed surface grammar of [`FromStr`].
///
/// On top of the strict grammar this trims surrounding whitespace, accepts
/// stacked `+`/`-` signs (parity decides), honours `0x`/`0o`/`0b` base
/// prefixes, and skips `_` digit separators.
///
/// # Parameters
///
/// * `text` - The string to parse.
///
/// # Errors
///
/// Returns [`NumericError::EmptyValue`] when no digits remain after signs
/// and prefixes, and [`NumericError::InvalidDigit`] for any invalid
/// character.
///
/// [`FromStr`]: core::str::FromStr
///
pub(crate) fn parse_lenient(text: &str) -> Result<BigInt, NumericError> {
	let trimmed = text.trim();
	if trimmed.is_empty() {
		return Err(NumericError::EmptyValue);
	}

	//	Find index after signs, scanning character by character
	let index       = trimmed.chars().position(|c| !matches!(c, '-' | '+')).unwrap_or(trimmed.len());
	let minus_count = trimmed.chars().take(index).filter(|&c| c == '-').count();
	let negative    = minus_count % 2 == 1;
	let unsigned    = &trimmed[index..];

	//	Handle different bases
	#[expect(clippy::option_if_let_else, reason = "Clearer to read as if-let-else")]
	let (digits_text, radix) =
		if        let Some(rest) = unsigned.strip_prefix("0x").or_else(|| unsigned.strip_prefix("0X")) {
			(rest, 16)
		} else if let Some(rest) = unsigned.strip_prefix("0b").or_else(|| unsigned.strip_prefix("0B")) {
			(rest, 2)
		} else if let Some(rest) = unsigned.strip_prefix("0o").or_else(|| unsigned.strip_prefix("0O")) {
			(rest, 8)
		} else {
			(unsigned, 10)
		}
	;

	let cleaned: String = digits_text.chars().filter(|&c| c != '_').collect();
	if cleaned.is_empty() {
		return Err(NumericError::EmptyValue);
	}

	let parsed = parse(&cleaned, radix)?;
	Ok(if negative { parsed.negate() } else { parsed })
}

//		chunk_shape
/// Largest digit count per accumulation chunk and its radix power.
fn chunk_shape(radix: u8) -> (u32, u32) {
	let mut count  = 0_u32;
	let mut factor = 1_u32;
	while factor * u32::from(radix) <= 0xFFFF {
		factor *= u32::from(radix);
		count  += 1;
	}
	(count, factor)
}

//		push_chunk
/// Folds one accumulated digit chunk into a magnitude:
/// `magnitude = magnitude * factor + chunk`.
fn push_chunk(magnitude: &mut Vec<Digit>, factor: u32, chunk: u32) {
	let mut carry = chunk;
	for word in magnitude.iter_mut() {
		let value = u32::from(*word) * factor + carry;
		#[expect(clippy::cast_possible_truncation, reason = "Masked to the low word")]
		{ *word = (value & 0xFFFF) as Digit; }
		carry = value >> 16;
	}
	while carry != 0 {
		#[expect(clippy::cast_possible_truncation, reason = "Masked to the low word")]
		magnitude.push((carry & 0xFFFF) as Digit);
		carry >>= 16;
	}
}

//		format
/// Formats a value in the given base, lowercase, with a `-` prefix for
/// negative values.
///
/// # Parameters
///
/// * `value` - The value to format.
/// * `radix` - The base, 2 to 36.
///
/// # Errors
///
/// Returns [`NumericError::InvalidRadix`] for an unsupported base.
///
pub(crate) fn format(value: &BigInt, radix: u8) -> Result<String, NumericError> {
	if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
		return Err(NumericError::InvalidRadix(radix));
	}
	if value.is_zero() {
		return Ok(String::from("0"));
	}

	let mut out = String::new();
	if value.is_negative() {
		out.push('-');
	}

	if radix.is_power_of_two() {
		format_power_of_two(&value.digits, radix, &mut out);
	} else if value.digits.len() > RECURSIVE_FORMAT_LIMIT {
		let estimated = estimate_digits(&value.digits, radix);
		format_recursive(
			&BigInt::from_raw_parts(false, value.digits.clone()),
			radix,
			estimated,
			false,
			&mut out,
		);
	} else {
		format_simple(&value.digits, radix, 0, &mut out);
	}
	Ok(out)
}

//		format_power_of_two
/// Bit-chunk extraction for the power-of-two bases (2, 4, 8, 16, 32).
fn format_power_of_two(digits: &[Digit], radix: u8, out: &mut String) {
	let bits_per_digit = u64::from(radix.trailing_zeros());
	let total_bits     = magnitude::bit_length(digits);
	let digit_count    = total_bits.div_ceil(bits_per_digit);

	for index in (0..digit_count).rev() {
		let start     = index * bits_per_digit;
		let mut digit = 0_usize;
		for bit in (0..bits_per_digit).rev() {
			digit <<= 1_u8;
			if crate::bits::magnitude_bit(digits, start + bit) {
				digit |= 1;
			}
		}
		out.push(char::from(DIGIT_CHARS[digit]));
	}
}

//		format_simple
/// Repeated division by the largest in-word radix power.
///
/// For decimal this divides by 10⁴ per step, yielding four digits per
/// division through the unrolled divide-by-10-family path.
fn format_simple(digits: &[Digit], radix: u8, pad_to: usize, out: &mut String) {
	let (chunk_digits, chunk_factor) = chunk_shape(radix);
	#[expect(clippy::cast_possible_truncation, reason = "The chunk factor was bounded to a word")]
	let divisor = chunk_factor as Digit;

	let mut chunks    = Vec::new();
	let mut remaining = digits.to_vec();
	while !remaining.is_empty() {
		let (quotient, remainder) = divide::div_rem_word(&remaining, divisor);
		chunks.push(remainder);
		remaining = quotient;
	}

	//	Emit most-significant chunk without leading zeros, the rest padded
	let mut formatted = String::new();
	for (i, &chunk) in chunks.iter().rev().enumerate() {
		let digits_here = if i == 0 { count_digits(chunk, radix) } else { chunk_digits };
		emit_chunk(chunk, radix, digits_here, &mut formatted);
	}
	for _ in formatted.len()..pad_to {
		out.push('0');
	}
	out.push_str(&formatted);
}

//		format_recursive
/// Divide-and-conquer formatting for very large magnitudes.
///
/// Splits the value by a radix power of roughly half its digit count and
/// recurses on quotient and remainder, so the expensive divisions happen on
/// balanced halves.
fn format_recursive(value: &BigInt, radix: u8, digit_count: u64, pad: bool, out: &mut String) {
	if value.digits.len() <= RECURSIVE_FORMAT_LIMIT {
		#[expect(clippy::cast_possible_truncation, reason = "Printable digit counts fit usize")]
		let pad_to = if pad { digit_count as usize } else { 0 };
		format_simple(&value.digits, radix, pad_to, out);
		return;
	}

	let half = digit_count / 2;
	#[expect(clippy::cast_possible_truncation, reason = "Printable digit counts fit u32")]
	let power = BigInt::from(i64::from(radix)).pow(half as u32);
	let (quotient, remainder) = divide::div_rem(value, &power)
		.unwrap_or_else(|_| unreachable!("a radix power is never zero"));

	format_recursive(&quotient, radix, digit_count - half, pad, out);
	format_recursive(&remainder, radix, half, true, out);
}

//		estimate_digits
/// Upper estimate of the digit count of a magnitude in a base.
#[expect(clippy::cast_possible_truncation, reason = "Printable digit counts are small")]
#[expect(clippy::cast_sign_loss,           reason = "Bit counts are non-negative")]
fn estimate_digits(digits: &[Digit], radix: u8) -> u64 {
	#[expect(clippy::cast_precision_loss, reason = "An estimate only; padding corrects the rest")]
	let bits = magnitude::bit_length(digits) as f64;
	(bits / f64::from(radix).log2()).ceil() as u64 + 1
}

//		count_digits
/// Number of digits of a single word value in a base, at least one.
fn count_digits(value: Digit, radix: u8) -> u32 {
	let mut count     = 1;
	let mut remaining = u32::from(value) / u32::from(radix);
	while remaining != 0 {
		count     += 1;
		remaining /= u32::from(radix);
	}
	count
}

//		emit_chunk
/// Emits one chunk as exactly `width` digits, most significant first.
fn emit_chunk(chunk: Digit, radix: u8, width: u32, out: &mut String) {
	let mut buffer    = [0_u8; 16];
	let mut remaining = u32::from(chunk);
	for slot in buffer.iter_mut().take(width as usize) {
		*slot      = DIGIT_CHARS[(remaining % u32::from(radix)) as usize];
		remaining /= u32::from(radix);
	}
	for i in (0..width as usize).rev() {
		out.push(char::from(buffer[i]));
	}
}
