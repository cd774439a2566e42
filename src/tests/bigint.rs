//		Packages

use super::*;
use claims::{assert_err_eq, assert_none, assert_ok_eq, assert_some_eq};
use rubedo::sugar::s;
use std::collections::HashSet;



//		Helpers

//		pseudo_value
/// Deterministic pseudo-random value of the given word length.
fn pseudo_value(len: usize, seed: u64) -> BigInt {
	let mut state  = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1);
	let mut digits = Vec::with_capacity(len);
	for _ in 0..len {
		state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
		digits.push((state >> 33) as Digit);
	}
	if let Some(top) = digits.last_mut() {
		if *top == 0 {
			*top = 1;
		}
	}
	BigInt::from_raw_parts(false, digits)
}



//		Tests

mod constructors {
	use super::*;

	//		zero / one / ten
	#[test]
	fn constants__have_expected_values() {
		assert_eq!(BigInt::zero(), BigInt::from(0));
		assert_eq!(BigInt::one(),  BigInt::from(1));
		assert_eq!(BigInt::ten(),  BigInt::from(10));
		assert_eq!(BigInt::default(), BigInt::zero());
	}

	//		from_digits
	#[test]
	fn from_digits__valid() {
		assert_ok_eq!(BigInt::from_digits(false, vec![5]),    BigInt::from(5));
		assert_ok_eq!(BigInt::from_digits(true,  vec![0, 1]), BigInt::from(-65_536));
		assert_ok_eq!(BigInt::from_digits(false, vec![]),     BigInt::zero());
		assert_ok_eq!(BigInt::from_digits(true,  vec![]),     BigInt::zero());
	}
	#[test]
	fn from_digits__leading_zero_word() {
		let err = BigInt::from_digits(false, vec![1, 0]);
		assert_err_eq!(&err, &NumericError::InvalidArgument("leading zero word in digit array"));
		assert_eq!(err.unwrap_err().to_string(), s!("Invalid argument: leading zero word in digit array"));
	}

	//		from_bytes
	#[test]
	fn from_bytes__little_endian() {
		assert_ok_eq!(BigInt::from_bytes(&[42], Endian::Little),        BigInt::from(42));
		assert_ok_eq!(BigInt::from_bytes(&[0x00, 0x01], Endian::Little), BigInt::from(256));
		assert_ok_eq!(BigInt::from_bytes(&[0xFF], Endian::Little),       BigInt::from(-1));
		assert_ok_eq!(BigInt::from_bytes(&[0x80], Endian::Little),       BigInt::from(-128));
		assert_ok_eq!(BigInt::from_bytes(&[0x00, 0x80], Endian::Little), BigInt::from(-32_768));
	}
	#[test]
	fn from_bytes__big_endian() {
		assert_ok_eq!(BigInt::from_bytes(&[0x01, 0x00], Endian::Big), BigInt::from(256));
		assert_ok_eq!(BigInt::from_bytes(&[0x80, 0x00], Endian::Big), BigInt::from(-32_768));
	}
	#[test]
	fn from_bytes__sign_extension_byte() {
		//	A leading 0x00 keeps a high magnitude non-negative
		assert_ok_eq!(BigInt::from_bytes(&[0xFF, 0x00], Endian::Little), BigInt::from(255));
	}
	#[test]
	fn from_bytes__empty() {
		assert_err_eq!(BigInt::from_bytes(&[], Endian::Little), NumericError::EmptyValue);
		assert_err_eq!(BigInt::from_le_bytes(&[]),              NumericError::EmptyValue);
		assert_err_eq!(BigInt::from_be_bytes(&[]),              NumericError::EmptyValue);
	}

	//		from_str_radix
	#[test]
	fn from_str_radix__basics() {
		assert_ok_eq!(BigInt::from_str_radix("ff", 16),  BigInt::from(255));
		assert_ok_eq!(BigInt::from_str_radix("-10", 2),  BigInt::from(-2));
		assert_err_eq!(BigInt::from_str_radix("ff", 10), NumericError::InvalidDigit('f', 10));
	}
}

mod predicates {
	use super::*;

	//		is_zero
	#[test]
	fn is_zero__only_for_zero() {
		assert!( BigInt::zero().is_zero());
		assert!(!BigInt::one().is_zero());
		assert!(!BigInt::from(-1).is_zero());
	}

	//		is_even
	#[test]
	fn is_even__parity() {
		assert!( BigInt::zero().is_even());
		assert!(!BigInt::one().is_even());
		assert!( BigInt::from(-2).is_even());
		assert!(!BigInt::from(65_537).is_even());
	}

	//		is_negative / is_positive
	#[test]
	fn sign_predicates__exclude_zero() {
		assert!(!BigInt::zero().is_negative());
		assert!(!BigInt::zero().is_positive());
		assert!( BigInt::from(-5).is_negative());
		assert!( BigInt::from(5).is_positive());
	}

	//		is_power_of_two
	#[test]
	fn is_power_of_two__detection() {
		assert!(!BigInt::zero().is_power_of_two());
		assert!( BigInt::one().is_power_of_two());
		assert!( BigInt::from(65_536).is_power_of_two());
		assert!( BigInt::one().shift_left(300).is_power_of_two());
		assert!(!BigInt::from(6).is_power_of_two());
		assert!(!BigInt::from(-4).is_power_of_two());
	}

	//		signum
	#[test]
	fn signum__three_values() {
		assert_eq!(BigInt::from(-77).signum(), -1);
		assert_eq!(BigInt::zero().signum(),     0);
		assert_eq!(BigInt::from(77).signum(),   1);
	}
}

mod arithmetic {
	use super::*;

	//		add / negate
	#[test]
	fn add__identity_and_inverse() {
		for value in [-1_000_000_i64, -1, 0, 1, 65_535, 123_456_789] {
			let a = BigInt::from(value);
			assert_eq!(&a + &BigInt::zero(), a,              "a + 0 == a for {value}");
			assert_eq!(&a + &a.negate(),     BigInt::zero(), "a + (-a) == 0 for {value}");
		}
		let wide = pseudo_value(50, 1);
		assert_eq!(&wide + &BigInt::zero(), wide);
		assert_eq!(&wide + &wide.negate(),  BigInt::zero());
	}
	#[test]
	fn add__mixed_signs() {
		assert_eq!(BigInt::from(7) + BigInt::from(-3),  BigInt::from(4));
		assert_eq!(BigInt::from(3) + BigInt::from(-7),  BigInt::from(-4));
		assert_eq!(BigInt::from(-3) + BigInt::from(-7), BigInt::from(-10));
	}

	//		sub
	#[test]
	fn sub__machine_agreement() {
		for a in [-500_i64, -1, 0, 3, 70_000] {
			for b in [-70_000_i64, -3, 0, 1, 500] {
				assert_eq!(BigInt::from(a) - BigInt::from(b), BigInt::from(a - b), "{a} - {b}");
			}
		}
	}

	//		mul
	#[test]
	fn mul__machine_agreement() {
		for a in [-1_000_i64, -1, 0, 2, 65_536] {
			for b in [-65_536_i64, -2, 0, 1, 1_000] {
				assert_eq!(BigInt::from(a) * BigInt::from(b), BigInt::from(a * b), "{a} * {b}");
			}
		}
	}

	//		div / rem
	#[test]
	fn div__spec_scenario() {
		let (quotient, remainder) = BigInt::from(-7).div_rem(&BigInt::from(2)).unwrap();
		assert_eq!(quotient,  BigInt::from(-3));
		assert_eq!(remainder, BigInt::from(-1));
	}
	#[test]
	fn div__round_trip_property() {
		let a = pseudo_value(60, 3).negate();
		let b = pseudo_value(23, 5);
		let (quotient, remainder) = a.div_rem(&b).unwrap();
		assert_eq!(&(&b * &quotient) + &remainder, a);
		assert!(remainder.abs() < b.abs());
	}
	#[test]
	#[should_panic(expected = "Attempt to divide by zero")]
	fn div__by_zero_panics() {
		let _ = BigInt::one() / BigInt::zero();
	}
	#[test]
	#[should_panic(expected = "Attempt to calculate the remainder with a divisor of zero")]
	fn rem__by_zero_panics() {
		let _ = BigInt::one() % BigInt::zero();
	}

	//		checked_div / checked_rem
	#[test]
	fn checked_div__by_zero() {
		assert_none!(BigInt::one().checked_div(&BigInt::zero()));
		assert_none!(BigInt::one().checked_rem(&BigInt::zero()));
		assert_some_eq!(BigInt::from(9).checked_div(&BigInt::from(2)), BigInt::from(4));
		assert_some_eq!(BigInt::from(9).checked_rem(&BigInt::from(2)), BigInt::one());
	}

	//		modulo
	#[test]
	fn modulo__always_non_negative() {
		assert_ok_eq!(BigInt::from(7).modulo(&BigInt::from(3)),  BigInt::one());
		assert_ok_eq!(BigInt::from(-7).modulo(&BigInt::from(3)), BigInt::from(2));
		assert_ok_eq!(BigInt::from(-9).modulo(&BigInt::from(3)), BigInt::zero());
	}
	#[test]
	fn modulo__invalid_modulus() {
		assert_err_eq!(BigInt::one().modulo(&BigInt::from(-3)), NumericError::InvalidArgument("negative modulus"));
		assert_err_eq!(BigInt::one().modulo(&BigInt::zero()),   NumericError::DivideByZero);
	}

	//		pow
	#[test]
	fn pow__basics() {
		assert_eq!(BigInt::from(2).pow(10),  BigInt::from(1024));
		assert_eq!(BigInt::from(-3).pow(3),  BigInt::from(-27));
		assert_eq!(BigInt::from(-3).pow(4),  BigInt::from(81));
		assert_eq!(BigInt::zero().pow(0),    BigInt::one());
		assert_eq!(BigInt::zero().pow(9),    BigInt::zero());
		assert_eq!(BigInt::ten().pow(20),    "100000000000000000000".parse().unwrap());
	}

	//		mod_pow
	#[test]
	fn mod_pow__basics() {
		//	3^200 mod 50 == 3^(200 mod 20) mod 50 by Euler, and 3^0 == 1
		assert_ok_eq!(
			BigInt::from(3).mod_pow(&BigInt::from(200), &BigInt::from(50)),
			BigInt::one(),
		);
		assert_ok_eq!(
			BigInt::from(2).mod_pow(&BigInt::from(10), &BigInt::from(1000)),
			BigInt::from(24),
		);
		assert_ok_eq!(
			BigInt::from(-2).mod_pow(&BigInt::from(3), &BigInt::from(5)),
			BigInt::from(2),
		);
	}
	#[test]
	fn mod_pow__matches_naive_power() {
		let base    = BigInt::from(12_345);
		let modulus = BigInt::from(99_991);
		let naive   = base.pow(77).modulo(&modulus).unwrap();
		assert_ok_eq!(base.mod_pow(&BigInt::from(77), &modulus), naive);
	}
	#[test]
	fn mod_pow__invalid_arguments() {
		assert_err_eq!(
			BigInt::from(2).mod_pow(&BigInt::from(-1), &BigInt::from(5)),
			NumericError::InvalidArgument("negative exponent"),
		);
		assert_err_eq!(
			BigInt::from(2).mod_pow(&BigInt::from(3), &BigInt::zero()),
			NumericError::DivideByZero,
		);
	}

	//		abs / negate
	#[test]
	fn abs__and_negate() {
		assert_eq!(BigInt::from(-5).abs(),    BigInt::from(5));
		assert_eq!(BigInt::from(5).abs(),     BigInt::from(5));
		assert_eq!(-BigInt::from(5),          BigInt::from(-5));
		assert_eq!(-&BigInt::zero(),          BigInt::zero());
	}

	//		gcd
	#[test]
	fn gcd__method_delegates() {
		assert_eq!(BigInt::from(270).gcd(&BigInt::from(192)), BigInt::from(6));
	}

	//		sqrt / nth_root
	#[test]
	fn roots__surface() {
		assert_ok_eq!(BigInt::from(99).sqrt(),            BigInt::from(9));
		assert_ok_eq!(BigInt::from(-27).nth_root(3),      BigInt::from(-3));
		let (root, remainder) = BigInt::from(10).sqrt_rem().unwrap();
		assert_eq!(root,      BigInt::from(3));
		assert_eq!(remainder, BigInt::one());
	}
}

mod bit_operations {
	use super::*;

	//		operators
	#[test]
	fn bitwise_operators__machine_agreement() {
		for a in [-300_i64, -1, 0, 5, 70_000] {
			for b in [-70_000_i64, -5, 0, 1, 300] {
				let (big_a, big_b) = (BigInt::from(a), BigInt::from(b));
				assert_eq!(&big_a & &big_b, BigInt::from(a & b), "{a} & {b}");
				assert_eq!(&big_a | &big_b, BigInt::from(a | b), "{a} | {b}");
				assert_eq!(&big_a ^ &big_b, BigInt::from(a ^ b), "{a} ^ {b}");
			}
			assert_eq!(!BigInt::from(a), BigInt::from(!a), "!{a}");
		}
	}
	#[test]
	fn shift_operators__match_methods() {
		let a = BigInt::from(0b1011);
		assert_eq!(&a << 4,  a.shift_left(4));
		assert_eq!(&a >> 2,  a.shift_right(2));
		let mut b = a.clone();
		b <<= 3;
		assert_eq!(b, a.shift_left(3));
		b >>= 3;
		assert_eq!(b, a);
	}

	//		assign forms
	#[test]
	fn assign_operators__apply_in_place() {
		let mut value = BigInt::from(10);
		value += BigInt::from(5);
		assert_eq!(value, BigInt::from(15));
		value -= &BigInt::from(6);
		assert_eq!(value, BigInt::from(9));
		value *= BigInt::from(3);
		assert_eq!(value, BigInt::from(27));
		value /= &BigInt::from(4);
		assert_eq!(value, BigInt::from(6));
		value %= BigInt::from(4);
		assert_eq!(value, BigInt::from(2));
		value &= BigInt::from(3);
		assert_eq!(value, BigInt::from(2));
		value |= &BigInt::from(5);
		assert_eq!(value, BigInt::from(7));
		value ^= BigInt::from(1);
		assert_eq!(value, BigInt::from(6));
	}
}

mod conversions {
	use super::*;

	//		From
	#[test]
	fn from__every_native_width() {
		assert_eq!(BigInt::from(-5_i8),             BigInt::from(-5_i64));
		assert_eq!(BigInt::from(-5_i16),            BigInt::from(-5_i64));
		assert_eq!(BigInt::from(-5_i32),            BigInt::from(-5_i64));
		assert_eq!(BigInt::from(-5_isize),          BigInt::from(-5_i64));
		assert_eq!(BigInt::from(5_u8),              BigInt::from(5_i64));
		assert_eq!(BigInt::from(5_u16),             BigInt::from(5_i64));
		assert_eq!(BigInt::from(5_u32),             BigInt::from(5_i64));
		assert_eq!(BigInt::from(5_usize),           BigInt::from(5_i64));
		assert_eq!(BigInt::from(u64::MAX).to_string(),  s!("18446744073709551615"));
		assert_eq!(BigInt::from(i64::MIN).to_string(),  s!("-9223372036854775808"));
		assert_eq!(BigInt::from(u128::MAX).to_string(), s!("340282366920938463463374607431768211455"));
		assert_eq!(BigInt::from(i128::MIN).to_string(), s!("-170141183460469231731687303715884105728"));
	}

	//		TryFrom
	#[test]
	fn try_from__checked_narrowing() {
		assert_ok_eq!(i8::try_from(&BigInt::from(-128)),  -128_i8);
		assert_err_eq!(i8::try_from(&BigInt::from(-129)), NumericError::ValueTooLarge);
		assert_ok_eq!(u8::try_from(&BigInt::from(255)),   255_u8);
		assert_err_eq!(u8::try_from(&BigInt::from(256)),  NumericError::ValueTooLarge);
		assert_err_eq!(u8::try_from(&BigInt::from(-1)),   NumericError::ValueIsNegative);
		assert_ok_eq!(i64::try_from(&BigInt::from(i64::MIN)), i64::MIN);
		assert_ok_eq!(u128::try_from(&BigInt::from(u128::MAX)), u128::MAX);
		assert_err_eq!(
			i128::try_from(&(BigInt::from(i128::MIN) - BigInt::one())),
			NumericError::ValueTooLarge,
		);
	}

	//		TryFrom, full ladder
	#[test]
	fn try_from__i16() {
		assert_ok_eq!(i16::try_from(&BigInt::from(i16::MIN)), i16::MIN);
		assert_ok_eq!(i16::try_from(&BigInt::from(i16::MAX)), i16::MAX);
		assert_err_eq!(i16::try_from(&BigInt::from(32_768)),  NumericError::ValueTooLarge);
		assert_err_eq!(i16::try_from(&BigInt::from(-32_769)), NumericError::ValueTooLarge);
	}
	#[test]
	fn try_from__i32() {
		assert_ok_eq!(i32::try_from(&BigInt::from(i32::MIN)), i32::MIN);
		assert_ok_eq!(i32::try_from(&BigInt::from(i32::MAX)), i32::MAX);
		assert_err_eq!(i32::try_from(&BigInt::from(1_i64 << 31)), NumericError::ValueTooLarge);
	}
	#[test]
	fn try_from__i64_boundaries() {
		assert_ok_eq!(i64::try_from(&BigInt::from(i64::MAX)), i64::MAX);
		assert_err_eq!(
			i64::try_from(&(BigInt::from(i64::MAX) + BigInt::one())),
			NumericError::ValueTooLarge,
		);
		assert_err_eq!(
			i64::try_from(&(BigInt::from(i64::MIN) - BigInt::one())),
			NumericError::ValueTooLarge,
		);
	}
	#[test]
	fn try_from__i128_boundaries() {
		assert_ok_eq!(i128::try_from(&BigInt::from(i128::MIN)), i128::MIN);
		assert_ok_eq!(i128::try_from(&BigInt::from(i128::MAX)), i128::MAX);
		assert_err_eq!(
			i128::try_from(&(BigInt::from(i128::MAX) + BigInt::one())),
			NumericError::ValueTooLarge,
		);
	}
	#[test]
	fn try_from__unsigned_family() {
		assert_ok_eq!(u16::try_from(&BigInt::from(65_535)),   65_535_u16);
		assert_err_eq!(u16::try_from(&BigInt::from(65_536)),  NumericError::ValueTooLarge);
		assert_ok_eq!(u32::try_from(&BigInt::from(u32::MAX)), u32::MAX);
		assert_ok_eq!(u64::try_from(&BigInt::from(u64::MAX)), u64::MAX);
		assert_err_eq!(
			u128::try_from(&(BigInt::from(u128::MAX) + BigInt::one())),
			NumericError::ValueTooLarge,
		);
		for negative in [-1_i64, -65_536, i64::MIN] {
			assert_err_eq!(u16::try_from(&BigInt::from(negative)),  NumericError::ValueIsNegative);
			assert_err_eq!(u32::try_from(&BigInt::from(negative)),  NumericError::ValueIsNegative);
			assert_err_eq!(u64::try_from(&BigInt::from(negative)),  NumericError::ValueIsNegative);
			assert_err_eq!(u128::try_from(&BigInt::from(negative)), NumericError::ValueIsNegative);
		}
	}
	#[test]
	fn try_from__pointer_widths() {
		assert_ok_eq!(usize::try_from(&BigInt::from(42)),  42_usize);
		assert_ok_eq!(isize::try_from(&BigInt::from(-42)), -42_isize);
		assert_err_eq!(usize::try_from(&BigInt::from(-1)), NumericError::ValueIsNegative);
		assert_err_eq!(
			isize::try_from(&BigInt::one().shift_left(200)),
			NumericError::ValueTooLarge,
		);
	}
	#[test]
	fn try_from__round_trips_every_width() {
		assert_ok_eq!(i8::try_from(&BigInt::from(-5_i8)),      -5_i8);
		assert_ok_eq!(i16::try_from(&BigInt::from(-500_i16)),  -500_i16);
		assert_ok_eq!(i32::try_from(&BigInt::from(-5_i32)),    -5_i32);
		assert_ok_eq!(i64::try_from(&BigInt::from(-5_i64)),    -5_i64);
		assert_ok_eq!(i128::try_from(&BigInt::from(-5_i128)),  -5_i128);
		assert_ok_eq!(u8::try_from(&BigInt::from(5_u8)),       5_u8);
		assert_ok_eq!(u16::try_from(&BigInt::from(500_u16)),   500_u16);
		assert_ok_eq!(u32::try_from(&BigInt::from(5_u32)),     5_u32);
		assert_ok_eq!(u64::try_from(&BigInt::from(5_u64)),     5_u64);
		assert_ok_eq!(u128::try_from(&BigInt::from(5_u128)),   5_u128);
	}

	//		low_*
	#[test]
	fn low__every_width() {
		let value = BigInt::from(-2);
		assert_eq!(value.low_u8(),    0xFE);
		assert_eq!(value.low_u16(),   0xFFFE);
		assert_eq!(value.low_u32(),   0xFFFF_FFFE);
		assert_eq!(value.low_u64(),   0xFFFF_FFFF_FFFF_FFFE);
		assert_eq!(value.low_u128(),  u128::MAX - 1);
		assert_eq!(value.low_usize(), usize::MAX - 1);
		assert_eq!(value.low_i8(),    -2);
		assert_eq!(value.low_i16(),   -2);
		assert_eq!(value.low_i32(),   -2);
		assert_eq!(value.low_i64(),   -2);
		assert_eq!(value.low_i128(),  -2);
		assert_eq!(value.low_isize(), -2);
	}
	#[test]
	fn low__truncates_in_twos_complement() {
		assert_eq!(BigInt::from(-1).low_u8(),    0xFF);
		assert_eq!(BigInt::from(-1).low_u64(),   u64::MAX);
		assert_eq!(BigInt::from(-1).low_i32(),   -1);
		assert_eq!(BigInt::from(0x1_0002).low_u16(), 2);
		assert_eq!(BigInt::from(i64::MIN).low_i64(), i64::MIN);
		let wide = BigInt::one().shift_left(200) + BigInt::from(7);
		assert_eq!(wide.low_u32(), 7);
		assert_eq!(wide.low_i8(),  7);
	}

	//		to_bytes
	#[test]
	fn to_bytes__round_trips() {
		for value in [-65_536_i64, -32_768, -256, -255, -128, -1, 0, 1, 127, 128, 255, 256, 65_535] {
			let big = BigInt::from(value);
			for endian in [Endian::Little, Endian::Big] {
				let bytes = big.to_bytes(endian);
				assert_ok_eq!(BigInt::from_bytes(&bytes, endian), big.clone(), "{value} {endian:?}");
			}
		}
		let wide = pseudo_value(33, 9).negate();
		assert_ok_eq!(BigInt::from_le_bytes(&wide.to_le_bytes()), wide.clone());
		assert_ok_eq!(BigInt::from_be_bytes(&wide.to_be_bytes()), wide);
	}
	#[test]
	fn to_bytes__minimal_representation() {
		assert_eq!(BigInt::zero().to_le_bytes(),       vec![0x00]);
		assert_eq!(BigInt::from(127).to_le_bytes(),    vec![0x7F]);
		assert_eq!(BigInt::from(128).to_le_bytes(),    vec![0x80, 0x00]);
		assert_eq!(BigInt::from(-128).to_le_bytes(),   vec![0x80]);
		assert_eq!(BigInt::from(-129).to_le_bytes(),   vec![0x7F, 0xFF]);
		assert_eq!(BigInt::from(256).to_be_bytes(),    vec![0x01, 0x00]);
	}
}

mod string_conversion {
	use super::*;

	//		FromStr
	#[test]
	fn from_str__lenient_grammar() {
		assert_ok_eq!("42".parse::<BigInt>(),     BigInt::from(42));
		assert_ok_eq!(" -42 ".parse::<BigInt>(),  BigInt::from(-42));
		assert_ok_eq!("0xff".parse::<BigInt>(),   BigInt::from(255));
		assert_ok_eq!("1_000".parse::<BigInt>(),  BigInt::from(1000));
		assert_err_eq!("".parse::<BigInt>(),      NumericError::EmptyValue);
		assert_err_eq!("4x2".parse::<BigInt>(),   NumericError::InvalidDigit('x', 10));
	}

	//		to_string_radix
	#[test]
	fn to_string_radix__spec_scenario() {
		assert_ok_eq!(BigInt::from(-255).to_string_radix(16), s!("-ff"));
	}
	#[test]
	fn to_string_radix__round_trips() {
		let value = pseudo_value(25, 13).negate();
		for radix in 2..=36 {
			let text = value.to_string_radix(radix).unwrap();
			assert_ok_eq!(BigInt::from_str_radix(&text, radix), value.clone(), "radix {radix}");
		}
	}

	//		Display
	#[test]
	fn display__decimal() {
		assert_eq!(BigInt::from(123_456).to_string(),  s!("123456"));
		assert_eq!(BigInt::from(-123_456).to_string(), s!("-123456"));
		assert_eq!(BigInt::zero().to_string(),         s!("0"));
	}

	//		Debug
	#[test]
	fn debug__wraps_display() {
		assert_eq!(format!("{:?}", BigInt::from(-7)), s!("BigInt(-7)"));
	}

	//		formatting traits
	#[test]
	fn fmt__radix_traits() {
		let value = BigInt::from(255);
		assert_eq!(format!("{value:x}"),  s!("ff"));
		assert_eq!(format!("{value:X}"),  s!("FF"));
		assert_eq!(format!("{value:#x}"), s!("0xff"));
		assert_eq!(format!("{value:o}"),  s!("377"));
		assert_eq!(format!("{value:b}"),  s!("11111111"));
		assert_eq!(format!("{:#b}", BigInt::from(-5)), s!("-0b101"));
	}
}

mod ordering_and_iteration {
	use super::*;
	use core::cmp::Ordering;

	//		Ord
	#[test]
	fn cmp__across_signs_and_magnitudes() {
		let ordered = [
			BigInt::from(-100_000),
			BigInt::from(-2),
			BigInt::from(-1),
			BigInt::zero(),
			BigInt::one(),
			BigInt::from(65_536),
			pseudo_value(9, 21),
		];
		for (i, left) in ordered.iter().enumerate() {
			for (j, right) in ordered.iter().enumerate() {
				assert_eq!(left.cmp(right), i.cmp(&j), "{left} vs {right}");
			}
		}
		assert_eq!(BigInt::zero().cmp(&BigInt::zero()), Ordering::Equal);
	}

	//		Hash
	#[test]
	fn hash__consistent_with_eq() {
		let mut set = HashSet::new();
		let _ = set.insert(BigInt::from(42));
		let _ = set.insert(BigInt::from(42));
		let _ = set.insert(BigInt::from(-42));
		assert_eq!(set.len(), 2);
		assert!(set.contains(&BigInt::from(42)));
	}

	//		Sum / Product
	#[test]
	fn sum__and_product() {
		let values = [BigInt::from(1), BigInt::from(2), BigInt::from(3), BigInt::from(4)];
		assert_eq!(values.iter().sum::<BigInt>(),     BigInt::from(10));
		assert_eq!(values.iter().product::<BigInt>(), BigInt::from(24));
		assert_eq!(values.clone().into_iter().sum::<BigInt>(),     BigInt::from(10));
		assert_eq!(values.into_iter().product::<BigInt>(),         BigInt::from(24));
	}
}

mod bit_queries {
	use super::*;

	//		bit_length
	#[test]
	fn bit_length__zero() {
		assert_eq!(BigInt::zero().bit_length(), 0);
	}
	#[test]
	fn bit_length__ignores_sign() {
		assert_eq!(BigInt::from(255).bit_length(),  8);
		assert_eq!(BigInt::from(-255).bit_length(), 8);
		assert_eq!(BigInt::from(256).bit_length(),  9);
	}
	#[test]
	fn bit_length__wide_values() {
		assert_eq!(BigInt::one().shift_left(1000).bit_length(), 1001);
	}

	//		signed_bit_length
	#[test]
	fn signed_bit_length__excludes_the_sign_bit() {
		assert_eq!(BigInt::from(i16::MAX).signed_bit_length(), 15);
		assert_eq!(BigInt::from(i16::MIN).signed_bit_length(), 15);
		assert_eq!(BigInt::from(i64::MIN).signed_bit_length(), 63);
	}

	//		trailing_zeros
	#[test]
	fn trailing_zeros__counts_magnitude_bits() {
		assert_eq!(BigInt::zero().trailing_zeros(),           None);
		assert_eq!(BigInt::one().trailing_zeros(),            Some(0));
		assert_eq!(BigInt::from(-96).trailing_zeros(),        Some(5));
		assert_eq!(BigInt::one().shift_left(77).trailing_zeros(), Some(77));
	}

	//		low_bits
	#[test]
	fn low_bits__is_never_negative() {
		assert_eq!(BigInt::from(0xABCD).low_bits(8), BigInt::from(0xCD));
		assert_eq!(BigInt::from(-1).low_bits(16),    BigInt::from(0xFFFF));
		assert!(!BigInt::from(-12_345).low_bits(10).is_negative());
	}

	//		bit / magnitude_bit
	#[test]
	fn bit__two_views_differ_for_negatives() {
		let value = BigInt::from(-6);
		//	Two's complement of 6 is ...11111010
		assert!(!value.bit(0));
		assert!( value.bit(1));
		assert!(!value.bit(2));
		assert!( value.bit(3));
		assert!( value.bit(99));
		//	The magnitude 6 is 110
		assert!(!value.magnitude_bit(0));
		assert!( value.magnitude_bit(1));
		assert!( value.magnitude_bit(2));
		assert!(!value.magnitude_bit(3));
	}

	//		and_not family
	#[test]
	fn complement_combinations__machine_agreement() {
		let (a, b) = (0b1100_i64, 0b1010_i64);
		let (big_a, big_b) = (BigInt::from(a), BigInt::from(b));
		assert_eq!(big_a.and_not(&big_b), BigInt::from(a & !b));
		assert_eq!(big_a.or_not(&big_b),  BigInt::from(a | !b));
		assert_eq!(big_a.xor_not(&big_b), BigInt::from(a ^ !b));
	}
}

mod shift_methods {
	use super::*;

	//		shift_left
	#[test]
	fn shift_left__grows_without_bound() {
		let value = BigInt::from(3).shift_left(500);
		assert_eq!(value.bit_length(), 502);
		assert_eq!(value.shift_right(500), BigInt::from(3));
	}
	#[test]
	fn shift_left__zero_stays_zero() {
		assert_eq!(BigInt::zero().shift_left(10_000), BigInt::zero());
	}

	//		shift_right
	#[test]
	fn shift_right__negative_saturates_at_minus_one() {
		assert_eq!(BigInt::from(-5).shift_right(100_000), BigInt::from(-1));
		assert_eq!(BigInt::from(5).shift_right(100_000),  BigInt::zero());
	}
}

mod algebraic_properties {
	use super::*;

	//		distributivity
	#[test]
	fn mul__distributes_over_add() {
		let a = pseudo_value(30, 41);
		let b = pseudo_value(28, 43).negate();
		let c = pseudo_value(25, 47);
		assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
	}

	//		associativity
	#[test]
	fn mul__associates() {
		let a = pseudo_value(15, 53);
		let b = pseudo_value(18, 59);
		let c = pseudo_value(12, 61).negate();
		assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
	}

	//		binomial identity
	#[test]
	fn square__binomial_identity() {
		let a = pseudo_value(22, 67);
		let b = pseudo_value(22, 71);
		let lhs = (&a + &b).pow(2);
		let rhs = &(&a.pow(2) + &(&(&a * &b) << 1)) + &b.pow(2);
		assert_eq!(lhs, rhs);
	}

	//		shift versus arithmetic
	#[test]
	fn shift_left__is_multiplication_by_power_of_two() {
		let a = pseudo_value(9, 73).negate();
		assert_eq!(a.shift_left(21), &a * &BigInt::from(1_i64 << 21));
	}
}

mod error_display {
	use super::*;

	//		NumericError
	#[test]
	fn numeric_error__display_strings() {
		assert_eq!(NumericError::DivideByZero.to_string(),          s!("Division by zero"));
		assert_eq!(NumericError::EmptyValue.to_string(),            s!("Empty value"));
		assert_eq!(NumericError::InvalidArgument("negative modulus").to_string(),
			s!("Invalid argument: negative modulus"));
		assert_eq!(NumericError::InvalidDigit('x', 10).to_string(), s!("Invalid digit for base 10: x"));
		assert_eq!(NumericError::InvalidRadix(37).to_string(),      s!("Invalid base: 37"));
		assert_eq!(NumericError::ValueIsNegative.to_string(),       s!("Value is negative"));
		assert_eq!(NumericError::ValueTooLarge.to_string(),         s!("Value too large"));
	}
}

mod endian {
	use super::*;

	//		Endian
	#[test]
	fn endian__derived_traits() {
		assert_eq!(Endian::Big,    Endian::Big);
		assert_ne!(Endian::Big,    Endian::Little);
		assert_eq!(format!("{:?}", Endian::Little), s!("Little"));
		let copy = Endian::Big;
		let same = copy;
		assert_eq!(copy, same);
	}
}

mod serialization {
	use super::*;

	//		Serialize
	#[test]
	fn to_json__number_when_it_fits() {
		assert_ok_eq!(BigInt::from(42).to_json(),          s!("42"));
		assert_ok_eq!(BigInt::from(-42).to_json(),         s!("-42"));
		assert_ok_eq!(BigInt::from(u64::MAX).to_json(),    s!("18446744073709551615"));
	}
	#[test]
	fn to_json__string_when_it_does_not() {
		let value = BigInt::from(u128::MAX);
		assert_ok_eq!(value.to_json(), s!("\"340282366920938463463374607431768211455\""));
	}

	//		Deserialize
	#[test]
	fn from_json__number_and_string() {
		assert_ok_eq!(BigInt::from_json("42"),      BigInt::from(42));
		assert_ok_eq!(BigInt::from_json("-42"),     BigInt::from(-42));
		assert_ok_eq!(BigInt::from_json("\"-99\""), BigInt::from(-99));
		assert_ok_eq!(
			BigInt::from_json("\"340282366920938463463374607431768211455\""),
			BigInt::from(u128::MAX),
		);
	}
	#[test]
	fn from_json__round_trips_large_values() {
		let value = pseudo_value(40, 31).negate();
		let json  = value.to_json().unwrap();
		assert_ok_eq!(BigInt::from_json(&json), value);
	}
}

mod postgres {
	use super::*;
	use tokio_postgres::types::{FromSql, IsNull, ToSql, Type};

	//		to_sql
	#[test]
	fn to_sql__int8() {
		let mut buffer = BytesMut::new();
		let result = BigInt::from(42).to_sql(&Type::INT8, &mut buffer);
		assert!(matches!(result, Ok(IsNull::No)));
		assert_eq!(buffer.as_ref(), &42_i64.to_be_bytes()[..]);
	}
	#[test]
	fn to_sql__text() {
		let mut buffer = BytesMut::new();
		let value  = pseudo_value(10, 4).negate();
		let result = value.to_sql(&Type::TEXT, &mut buffer);
		assert!(matches!(result, Ok(IsNull::No)));
		assert_eq!(buffer.as_ref(), value.to_string().as_bytes());
	}
	#[test]
	fn to_sql__too_large_for_column() {
		let mut buffer = BytesMut::new();
		let result = BigInt::from(65_536).to_sql(&Type::INT2, &mut buffer);
		assert!(result.is_err());
	}
	#[test]
	fn to_sql__accepts() {
		assert!( <BigInt as ToSql>::accepts(&Type::INT2));
		assert!( <BigInt as ToSql>::accepts(&Type::INT8));
		assert!( <BigInt as ToSql>::accepts(&Type::TEXT));
		assert!(!<BigInt as ToSql>::accepts(&Type::FLOAT8));
	}

	//		from_sql
	#[test]
	fn from_sql__int8() {
		let raw   = (-7_i64).to_be_bytes();
		let value = BigInt::from_sql(&Type::INT8, &raw).unwrap();
		assert_eq!(value, BigInt::from(-7));
	}
	#[test]
	fn from_sql__text() {
		let value = BigInt::from_sql(&Type::TEXT, b"123456789012345678901234567890").unwrap();
		assert_eq!(value.to_string(), s!("123456789012345678901234567890"));
	}
	#[test]
	fn from_sql__rejected_type() {
		assert!(BigInt::from_sql(&Type::FLOAT8, &[0; 8]).is_err());
	}
}
