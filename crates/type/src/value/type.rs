// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Tag of a [`Value`](crate::Value).
///
/// The tag alone decides how the paired payload is interpreted, copied and
/// released.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// Absence of a value at a position (distinct from null)
	Missing,
	/// A boolean: true or false.
	Boolean,
	/// A 4-byte signed integer
	Int32,
	/// An 8-byte signed integer
	Int64,
	/// An 8-byte floating point
	Double,
	/// An exact decimal, heap backed
	Decimal,
	/// A UTF-8 string stored inline
	SmallString,
	/// A heap allocated UTF-8 string
	BigString,
	/// A nested value block
	ValueBlock,
	/// A nested cell block
	CellBlock,
}

impl Type {
	pub fn is_number(&self) -> bool {
		matches!(self, Type::Int32 | Type::Int64 | Type::Double | Type::Decimal)
	}

	pub fn is_string(&self) -> bool {
		matches!(self, Type::SmallString | Type::BigString)
	}

	pub fn is_bool(&self) -> bool {
		matches!(self, Type::Boolean)
	}

	pub fn is_block(&self) -> bool {
		matches!(self, Type::ValueBlock | Type::CellBlock)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Missing => f.write_str("Missing"),
			Type::Boolean => f.write_str("Boolean"),
			Type::Int32 => f.write_str("Int32"),
			Type::Int64 => f.write_str("Int64"),
			Type::Double => f.write_str("Double"),
			Type::Decimal => f.write_str("Decimal"),
			Type::SmallString => f.write_str("SmallString"),
			Type::BigString => f.write_str("BigString"),
			Type::ValueBlock => f.write_str("ValueBlock"),
			Type::CellBlock => f.write_str("CellBlock"),
		}
	}
}
