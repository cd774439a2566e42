//! The Widenum crate is a library of integers that are exactly as wide as
//! they need to be: a signed arbitrary-precision integer type with exact
//! arithmetic, two's-complement bit operations, radix conversion, roots,
//! and a rounding-support shift accumulator.



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_precision_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::print_stdout,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod accumulator;
mod bigint;
mod bits;
mod divide;
mod errors;
mod gcd;
mod magnitude;
mod multiply;
mod radix;
mod root;



//		Packages

pub use accumulator::ShiftAccumulator;
pub use bigint::{BigInt, Endian};
pub use errors::NumericError;
