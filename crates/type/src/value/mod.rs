// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::Serialize;

pub mod block;
pub mod compare;
mod decimal;
pub mod number;
mod small_string;
mod r#type;

pub use block::{BitsetBlock, CellBlock, ValueBlock};
pub use decimal::Decimal;
pub use r#type::Type;
pub use small_string::{SMALL_STRING_CAPACITY, SmallString};

/// A dynamically typed value, represented as a native Rust type.
///
/// Shallow variants are plain data. Deep variants own their payload; cloning
/// a value deep copies it and dropping it releases it.
#[derive(Clone, Debug, Serialize)]
pub enum Value {
	/// No value at this position
	Missing,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 4-byte signed integer
	Int32(i32),
	/// An 8-byte signed integer
	Int64(i64),
	/// An 8-byte floating point
	Double(f64),
	/// An exact decimal
	Decimal(Decimal),
	/// A string of at most seven bytes, stored inline
	SmallString(SmallString),
	/// A heap allocated string
	BigString(String),
	/// A nested value block
	ValueBlock(Box<ValueBlock>),
	/// A nested cell block
	CellBlock(Box<CellBlock>),
}

impl Value {
	pub fn missing() -> Self {
		Value::Missing
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn int32(v: impl Into<i32>) -> Self {
		Value::Int32(v.into())
	}

	pub fn int64(v: impl Into<i64>) -> Self {
		Value::Int64(v.into())
	}

	pub fn double(v: impl Into<f64>) -> Self {
		Value::Double(v.into())
	}

	pub fn decimal(v: impl Into<Decimal>) -> Self {
		Value::Decimal(v.into())
	}

	/// Builds a string value, inline when it fits.
	pub fn string(v: impl AsRef<str>) -> Self {
		let s = v.as_ref();
		match SmallString::new(s) {
			Some(small) => Value::SmallString(small),
			None => Value::BigString(s.to_string()),
		}
	}

	pub fn block(v: impl Into<ValueBlock>) -> Self {
		Value::ValueBlock(Box::new(v.into()))
	}

	pub fn cell_block(v: CellBlock) -> Self {
		Value::CellBlock(Box::new(v))
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Missing => Type::Missing,
			Value::Boolean(_) => Type::Boolean,
			Value::Int32(_) => Type::Int32,
			Value::Int64(_) => Type::Int64,
			Value::Double(_) => Type::Double,
			Value::Decimal(_) => Type::Decimal,
			Value::SmallString(_) => Type::SmallString,
			Value::BigString(_) => Type::BigString,
			Value::ValueBlock(_) => Type::ValueBlock,
			Value::CellBlock(_) => Type::CellBlock,
		}
	}

	pub fn is_missing(&self) -> bool {
		matches!(self, Value::Missing)
	}

	pub fn is_true(&self) -> bool {
		matches!(self, Value::Boolean(true))
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Boolean(b) => Some(*b),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::SmallString(s) => Some(s.as_str()),
			Value::BigString(s) => Some(s.as_str()),
			_ => None,
		}
	}

	/// Integral value of an Int32/Int64, or of a Double without fraction.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Value::Int32(v) => Some(*v as i64),
			Value::Int64(v) => Some(*v),
			Value::Double(v) if v.fract() == 0.0 && *v >= i64::MIN as f64 && *v < i64::MAX as f64 => {
				Some(*v as i64)
			}
			_ => None,
		}
	}

	pub fn as_block(&self) -> Option<&ValueBlock> {
		match self {
			Value::ValueBlock(block) => Some(block),
			_ => None,
		}
	}

	pub fn as_cell_block(&self) -> Option<&CellBlock> {
		match self {
			Value::CellBlock(block) => Some(block),
			_ => None,
		}
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Value::Missing, Value::Missing) => true,
			(Value::Boolean(l), Value::Boolean(r)) => l == r,
			(Value::Int32(l), Value::Int32(r)) => l == r,
			(Value::Int64(l), Value::Int64(r)) => l == r,
			(Value::Double(l), Value::Double(r)) => l == r || (l.is_nan() && r.is_nan()),
			(Value::Decimal(l), Value::Decimal(r)) => l == r,
			(Value::SmallString(l), Value::SmallString(r)) => l == r,
			(Value::BigString(l), Value::BigString(r)) => l == r,
			(Value::ValueBlock(l), Value::ValueBlock(r)) => l == r,
			(Value::CellBlock(l), Value::CellBlock(r)) => l == r,
			_ => false,
		}
	}
}

impl Default for Value {
	fn default() -> Self {
		Value::Missing
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Boolean(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int32(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int64(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Double(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::string(v)
	}
}

impl From<Decimal> for Value {
	fn from(v: Decimal) -> Self {
		Value::Decimal(v)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		v.map(Into::into).unwrap_or(Value::Missing)
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Missing => f.write_str("Missing"),
			Value::Boolean(v) => write!(f, "{v}"),
			Value::Int32(v) => write!(f, "{v}"),
			Value::Int64(v) => write!(f, "{v}L"),
			Value::Double(v) => write!(f, "{v:?}"),
			Value::Decimal(v) => write!(f, "{v}dec"),
			Value::SmallString(v) => write!(f, "\"{v}\""),
			Value::BigString(v) => write!(f, "\"{v}\""),
			Value::ValueBlock(v) => write!(f, "{v}"),
			Value::CellBlock(v) => write!(f, "{v}"),
		}
	}
}
