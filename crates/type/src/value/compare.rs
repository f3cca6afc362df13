// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Ordering of tagged values.
//!
//! Two flavours are provided:
//! - [`canonical_cmp`] is the engine's total order across type classes and is
//!   what min/max use to pick a winner among mixed types.
//! - [`generic_cmp`] only compares values of the same class and is what the
//!   comparison operators use; comparing across classes yields Missing.

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

use crate::value::{
	Value,
	number::{Number, compare_numbers},
};

fn class_rank(value: &Value) -> Option<u8> {
	let ty = value.get_type();
	if ty.is_number() {
		Some(1)
	} else if ty.is_string() {
		Some(2)
	} else if ty.is_bool() {
		Some(3)
	} else {
		None
	}
}

/// Canonical total order: numbers < strings < booleans.
///
/// Returns `None` if either side is Missing or a nested block.
pub fn canonical_cmp(l: &Value, r: &Value) -> Option<Ordering> {
	let (lr, rr) = (class_rank(l)?, class_rank(r)?);
	if lr != rr {
		return Some(lr.cmp(&rr));
	}
	generic_cmp(l, r)
}

/// Compares two values of the same type class.
///
/// Numbers compare by value regardless of representation, strings byte-wise
/// and booleans with `false < true`. Any other pairing is incomparable.
pub fn generic_cmp(l: &Value, r: &Value) -> Option<Ordering> {
	if let (Some(ln), Some(rn)) = (Number::from_value(l), Number::from_value(r)) {
		return Some(compare_numbers(ln, rn));
	}
	if let (Some(ls), Some(rs)) = (l.as_str(), r.as_str()) {
		return Some(ls.as_bytes().cmp(rs.as_bytes()));
	}
	if let (Value::Boolean(lb), Value::Boolean(rb)) = (l, r) {
		return Some(lb.cmp(rb));
	}
	None
}

/// Binary comparison operator producing a Boolean, or Missing when the
/// operands are incomparable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOp {
	Gt,
	Gte,
	Lt,
	Lte,
	Eq,
	Neq,
}

impl CompareOp {
	pub fn matches(&self, ordering: Ordering) -> bool {
		match self {
			CompareOp::Gt => ordering == Ordering::Greater,
			CompareOp::Gte => ordering != Ordering::Less,
			CompareOp::Lt => ordering == Ordering::Less,
			CompareOp::Lte => ordering != Ordering::Greater,
			CompareOp::Eq => ordering == Ordering::Equal,
			CompareOp::Neq => ordering != Ordering::Equal,
		}
	}

	pub fn apply(&self, l: &Value, r: &Value) -> Value {
		match generic_cmp(l, r) {
			Some(ordering) => Value::Boolean(self.matches(ordering)),
			None => Value::Missing,
		}
	}
}

impl Display for CompareOp {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			CompareOp::Gt => f.write_str(">"),
			CompareOp::Gte => f.write_str(">="),
			CompareOp::Lt => f.write_str("<"),
			CompareOp::Lte => f.write_str("<="),
			CompareOp::Eq => f.write_str("=="),
			CompareOp::Neq => f.write_str("!="),
		}
	}
}
