//! The shift accumulator: rounding support for truncated magnitudes.
//!
//! A [`ShiftAccumulator`] owns one non-negative value and shifts it right,
//! remembering just enough about the discarded bits — the most recent one,
//! and the OR of all older ones — for a caller to apply round-half-even and
//! similar rounding rules without retaining the bits themselves. It is a
//! transient, single-owner helper: created for one rounding computation,
//! mutated only by its shift operations, then dropped.



//		Modules

#[cfg(test)]
#[path = "tests/accumulator.rs"]
mod tests;



//		Packages

use crate::bigint::BigInt;
use crate::errors::NumericError;



//		Structs

//		ShiftAccumulator
/// A value being progressively shifted right, with sticky rounding state.
///
/// After any shift, [`last_discarded_bit`](ShiftAccumulator::last_discarded_bit)
/// holds the bit immediately below the new least-significant bit and
/// [`sticky_bit`](ShiftAccumulator::sticky_bit) holds the OR of every older
/// discarded bit. The total number of discarded bits is tracked as a full
/// value of its own, since shift amounts are unbounded.
///
/// Not for sharing: the accumulator is mutable and belongs to exactly one
/// rounding computation on one thread.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShiftAccumulator {
	/// The current value.
	value:               BigInt,

	/// The most recently discarded bit.
	last_discarded_bit:  bool,

	/// OR-accumulation of every discarded bit older than the last one.
	sticky_bit:          bool,

	/// Total number of bits discarded so far.
	discarded_bit_count: BigInt,

	/// Lazily computed bit length of the current value, dropped whenever
	/// the value changes.
	cached_bit_length:   Option<u64>,
}

//󰭅		ShiftAccumulator
impl ShiftAccumulator {
	//		Constructors

	//		new
	/// Creates an accumulator over a non-negative value.
	///
	/// # Parameters
	///
	/// * `value` - The starting value.
	///
	/// # Errors
	///
	/// Returns [`NumericError::ValueIsNegative`] for a negative value.
	///
	pub fn new(value: BigInt) -> Result<Self, NumericError> {
		Self::with_discarded(value, false, false)
	}

	//		with_discarded
	/// Creates an accumulator with already-known discarded-bit state.
	///
	/// Used when the caller has itself dropped bits before handing the
	/// value over, e.g. after an exact division that was known inexact.
	///
	/// # Parameters
	///
	/// * `value`  - The starting value.
	/// * `last`   - The most recently discarded bit.
	/// * `sticky` - The OR of all older discarded bits.
	///
	/// # Errors
	///
	/// Returns [`NumericError::ValueIsNegative`] for a negative value.
	///
	pub fn with_discarded(value: BigInt, last: bool, sticky: bool) -> Result<Self, NumericError> {
		if value.is_negative() {
			return Err(NumericError::ValueIsNegative);
		}
		Ok(Self {
			value,
			last_discarded_bit:  last,
			sticky_bit:          sticky,
			discarded_bit_count: BigInt::zero(),
			cached_bit_length:   None,
		})
	}

	//		Public methods

	//		bit_length
	/// The bit length of the current value, computed lazily and cached.
	pub fn bit_length(&mut self) -> u64 {
		match self.cached_bit_length {
			Some(length) => length,
			None         => {
				let length = self.value.bit_length();
				self.cached_bit_length = Some(length);
				length
			},
		}
	}

	//		discarded_bit_count
	/// Total number of bits discarded so far.
	#[must_use]
	pub fn discarded_bit_count(&self) -> &BigInt {
		&self.discarded_bit_count
	}

	//		last_discarded_bit
	/// The most recently discarded bit.
	#[must_use]
	pub fn last_discarded_bit(&self) -> bool {
		self.last_discarded_bit
	}

	//		shift_right
	/// Shifts the value right, folding discarded bits into the rounding
	/// state.
	///
	/// The amount may be arbitrarily large; anything beyond the value's
	/// own bit length discards only zeros, which is accounted for without
	/// materialising the shifts.
	///
	/// # Parameters
	///
	/// * `amount` - The number of bits to discard.
	///
	/// # Errors
	///
	/// Returns [`NumericError::ValueIsNegative`] for a negative amount.
	///
	pub fn shift_right(&mut self, amount: &BigInt) -> Result<(), NumericError> {
		if amount.is_negative() {
			return Err(NumericError::ValueIsNegative);
		}

		let mut remaining = amount.clone();
		while !remaining.is_zero() {
			if self.value.is_zero() {
				//	Only zeros left to discard: the old last bit joins the
				//	sticky accumulation and the count absorbs the rest
				self.sticky_bit         |= self.last_discarded_bit;
				self.last_discarded_bit  = false;
				self.discarded_bit_count = &self.discarded_bit_count + &remaining;
				break;
			}

			//	Bounded chunk: one more than the value's bit length empties it
			let chunk_limit = self.bit_length() + 1;
			let chunk       = if remaining > BigInt::from(chunk_limit) {
				chunk_limit
			} else {
				remaining.low_u64()
			};
			self.shift_right_bounded(chunk);
			remaining = &remaining - &BigInt::from(chunk);
		}
		Ok(())
	}

	//		shift_to_bit_length
	/// Shifts right exactly enough to reach a target bit length.
	///
	/// A no-op if the value is already at or below the target.
	///
	/// # Parameters
	///
	/// * `target_bits` - The bit length to shrink to.
	///
	pub fn shift_to_bit_length(&mut self, target_bits: u64) {
		let current = self.bit_length();
		if current > target_bits {
			self.shift_right_bounded(current - target_bits);
		}
	}

	//		sticky_bit
	/// OR-accumulation of every discarded bit below the last one.
	#[must_use]
	pub fn sticky_bit(&self) -> bool {
		self.sticky_bit
	}

	//		value
	/// The current value.
	#[must_use]
	pub fn value(&self) -> &BigInt {
		&self.value
	}

	//		Private methods

	//		shift_right_bounded
	/// Shifts right by a machine-word amount, updating the rounding state.
	fn shift_right_bounded(&mut self, amount: u64) {
		if amount == 0 {
			return;
		}

		//	Everything strictly below the new last-discarded position joins
		//	the sticky accumulation, including the previous last bit
		let lower_nonzero = match self.value.trailing_zeros() {
			Some(zeros) => zeros < amount - 1,
			None        => false,
		};
		self.sticky_bit        |= self.last_discarded_bit | lower_nonzero;
		self.last_discarded_bit = self.value.magnitude_bit(amount - 1);

		self.value               = self.value.shift_right(amount);
		self.discarded_bit_count = &self.discarded_bit_count + &BigInt::from(amount);
		self.cached_bit_length   = None;
	}
}
