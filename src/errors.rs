//! Contains error types used throughout the library.



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		NumericError
/// Represents all possible numeric errors that can occur.
///
/// The variants group into four families: invalid arguments (a caller passed
/// a value that a documented precondition rules out), division by zero,
/// format errors (input text or bytes that cannot be parsed), and overflow
/// (a checked narrowing conversion whose value does not fit the destination
/// type).
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum NumericError {
	/// Division, remainder, or modulo with a zero divisor.
	#[error("Division by zero")]
	DivideByZero,

	/// The incoming value is empty, e.g. an empty string or byte slice.
	#[error("Empty value")]
	EmptyValue,

	/// A precondition on an argument was violated, e.g. a negative modulus
	/// where a non-negative one is required.
	#[error("Invalid argument: {0}")]
	InvalidArgument(&'static str),

	/// The incoming value contains a character invalid for the given base.
	#[error("Invalid digit for base {1}: {0}")]
	InvalidDigit(char, u8),

	/// The requested base is outside the supported range of 2 to 36.
	#[error("Invalid base: {0}")]
	InvalidRadix(u8),

	/// The incoming value is negative, which is not allowed by the destination
	/// type.
	#[error("Value is negative")]
	ValueIsNegative,

	/// The incoming value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,
}


