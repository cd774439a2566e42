//		Packages

use super::*;
use claims::{assert_err_eq, assert_ok};
use crate::bigint::BigInt;



//		Tests

mod constructors {
	use super::*;

	//		new
	#[test]
	fn new__valid() {
		let acc = assert_ok!(ShiftAccumulator::new(BigInt::from(42)));
		assert_eq!(acc.value(),               &BigInt::from(42));
		assert!(!acc.last_discarded_bit());
		assert!(!acc.sticky_bit());
		assert_eq!(acc.discarded_bit_count(), &BigInt::zero());
	}
	#[test]
	fn new__negative() {
		assert_err_eq!(
			ShiftAccumulator::new(BigInt::from(-1)),
			NumericError::ValueIsNegative,
		);
	}

	//		with_discarded
	#[test]
	fn with_discarded__carries_known_state() {
		let acc = assert_ok!(ShiftAccumulator::with_discarded(BigInt::from(3), true, false));
		assert!( acc.last_discarded_bit());
		assert!(!acc.sticky_bit());
	}
}

mod shifting {
	use super::*;

	//		shift_right
	#[test]
	fn shift_right__spec_scenario() {
		//	0b1011 >> 2 leaves 0b10 with last-discarded 1 and sticky 1
		let mut acc = ShiftAccumulator::new(BigInt::from(0b1011)).unwrap();
		acc.shift_right(&BigInt::from(2)).unwrap();
		assert_eq!(acc.value(),               &BigInt::from(0b10));
		assert!(acc.last_discarded_bit());
		assert!(acc.sticky_bit());
		assert_eq!(acc.discarded_bit_count(), &BigInt::from(2));
	}
	#[test]
	fn shift_right__by_own_bit_length() {
		//	The last discarded bit is the original top bit; sticky is the OR
		//	of everything below it
		let mut acc = ShiftAccumulator::new(BigInt::from(0b1011)).unwrap();
		acc.shift_right(&BigInt::from(4)).unwrap();
		assert_eq!(acc.value(), &BigInt::zero());
		assert!(acc.last_discarded_bit());
		assert!(acc.sticky_bit());
	}
	#[test]
	fn shift_right__power_of_two_has_clean_sticky() {
		let mut acc = ShiftAccumulator::new(BigInt::from(0b1000)).unwrap();
		acc.shift_right(&BigInt::from(4)).unwrap();
		assert_eq!(acc.value(), &BigInt::zero());
		assert!( acc.last_discarded_bit());
		assert!(!acc.sticky_bit());
	}
	#[test]
	fn shift_right__zero_amount_is_a_no_op() {
		let mut acc = ShiftAccumulator::new(BigInt::from(7)).unwrap();
		acc.shift_right(&BigInt::zero()).unwrap();
		assert_eq!(acc.value(),               &BigInt::from(7));
		assert_eq!(acc.discarded_bit_count(), &BigInt::zero());
	}
	#[test]
	fn shift_right__negative_amount() {
		let mut acc = ShiftAccumulator::new(BigInt::from(7)).unwrap();
		assert_err_eq!(acc.shift_right(&BigInt::from(-1)), NumericError::ValueIsNegative);
	}
	#[test]
	fn shift_right__sticky_accumulates_across_calls() {
		let mut acc = ShiftAccumulator::new(BigInt::from(0b1101)).unwrap();
		acc.shift_right(&BigInt::one()).unwrap();
		assert!( acc.last_discarded_bit());
		assert!(!acc.sticky_bit());
		acc.shift_right(&BigInt::one()).unwrap();
		assert!(!acc.last_discarded_bit());
		assert!( acc.sticky_bit());
		acc.shift_right(&BigInt::one()).unwrap();
		assert!( acc.last_discarded_bit());
		assert!( acc.sticky_bit());
		assert_eq!(acc.value(), &BigInt::one());
		assert_eq!(acc.discarded_bit_count(), &BigInt::from(3));
	}
	#[test]
	fn shift_right__unbounded_amount() {
		//	Shift amounts far past the value's own width are absorbed
		//	without materialising the intermediate shifts
		let mut acc   = ShiftAccumulator::new(BigInt::from(0b101)).unwrap();
		let amount    = BigInt::one().shift_left(100);
		acc.shift_right(&amount).unwrap();
		assert_eq!(acc.value(),               &BigInt::zero());
		assert!(!acc.last_discarded_bit());
		assert!( acc.sticky_bit());
		assert_eq!(acc.discarded_bit_count(), &amount);
	}
	#[test]
	fn shift_right__zero_value_discards_only_zeros() {
		let mut acc = ShiftAccumulator::new(BigInt::zero()).unwrap();
		acc.shift_right(&BigInt::from(1000)).unwrap();
		assert_eq!(acc.value(), &BigInt::zero());
		assert!(!acc.last_discarded_bit());
		assert!(!acc.sticky_bit());
		assert_eq!(acc.discarded_bit_count(), &BigInt::from(1000));
	}

	//		shift_to_bit_length
	#[test]
	fn shift_to_bit_length__shrinks_to_target() {
		let mut acc = ShiftAccumulator::new(BigInt::from(0b1111_0000)).unwrap();
		acc.shift_to_bit_length(4);
		assert_eq!(acc.value(),               &BigInt::from(0b1111));
		assert_eq!(acc.discarded_bit_count(), &BigInt::from(4));
		assert!(!acc.last_discarded_bit());
		assert!(!acc.sticky_bit());
	}
	#[test]
	fn shift_to_bit_length__no_op_at_or_below_target() {
		let mut acc = ShiftAccumulator::new(BigInt::from(0b111)).unwrap();
		acc.shift_to_bit_length(3);
		assert_eq!(acc.value(),               &BigInt::from(0b111));
		assert_eq!(acc.discarded_bit_count(), &BigInt::zero());
		acc.shift_to_bit_length(10);
		assert_eq!(acc.value(),               &BigInt::from(0b111));
	}
}

mod bit_length_cache {
	use super::*;

	//		bit_length
	#[test]
	fn bit_length__tracks_the_value() {
		let mut acc = ShiftAccumulator::new(BigInt::from(0b1_0000_0000)).unwrap();
		assert_eq!(acc.bit_length(), 9);
		assert_eq!(acc.bit_length(), 9);
		acc.shift_right(&BigInt::from(3)).unwrap();
		assert_eq!(acc.bit_length(), 6);
	}
	#[test]
	fn bit_length__zero() {
		let mut acc = ShiftAccumulator::new(BigInt::zero()).unwrap();
		assert_eq!(acc.bit_length(), 0);
	}
}
