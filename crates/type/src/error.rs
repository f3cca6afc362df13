// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use thiserror::Error;

use crate::value::Type;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure raised by a block operation or by builtin dispatch.
///
/// Errors are always reported to the caller; no operation retries or
/// partially commits a result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
	#[error("{operation}: length mismatch, expected {expected} elements but got {actual}")]
	LengthMismatch {
		operation: &'static str,
		expected: usize,
		actual: usize,
	},

	#[error("{operation}: argument {argument} has type {actual}, expected {expected}")]
	TypeMismatch {
		operation: &'static str,
		argument: usize,
		expected: &'static str,
		actual: Type,
	},

	#[error("{operation}: invalid argument: {reason}")]
	InvalidArgument {
		operation: &'static str,
		reason: String,
	},

	#[error("unknown builtin function '{name}'")]
	UnknownFunction {
		name: String,
	},

	#[error("builtin function '{name}' expects {expected} arguments, got {actual}")]
	ArityMismatch {
		name: String,
		expected: usize,
		actual: usize,
	},

	#[error("{operation}: no element qualified")]
	EmptyAggregate {
		operation: &'static str,
	},

	#[error("lambda evaluation failed: {message}")]
	Lambda {
		message: String,
	},
}

impl Error {
	pub fn type_mismatch(operation: &'static str, argument: usize, expected: &'static str, actual: Type) -> Self {
		Error::TypeMismatch {
			operation,
			argument,
			expected,
			actual,
		}
	}

	pub fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
		Error::InvalidArgument {
			operation,
			reason: reason.into(),
		}
	}

	/// Fails with [`Error::LengthMismatch`] unless both lengths agree.
	pub fn check_len(operation: &'static str, expected: usize, actual: usize) -> Result<()> {
		if expected != actual {
			return Err(Error::LengthMismatch {
				operation,
				expected,
				actual,
			});
		}
		Ok(())
	}
}
