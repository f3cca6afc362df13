// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use bigdecimal::BigDecimal;
use num_traits::FromPrimitive;

use crate::value::{Decimal, Value};

/// Borrowed view of a numeric value.
#[derive(Clone, Copy, Debug)]
pub enum Number<'a> {
	Int(i64),
	Double(f64),
	Decimal(&'a Decimal),
}

impl<'a> Number<'a> {
	pub fn from_value(value: &'a Value) -> Option<Self> {
		match value {
			Value::Int32(v) => Some(Number::Int(*v as i64)),
			Value::Int64(v) => Some(Number::Int(*v)),
			Value::Double(v) => Some(Number::Double(*v)),
			Value::Decimal(v) => Some(Number::Decimal(v)),
			_ => None,
		}
	}
}

/// Exact comparison of two numbers of any representation.
///
/// NaN sorts below every other number and is equal to itself.
pub fn compare_numbers(l: Number<'_>, r: Number<'_>) -> Ordering {
	match (l, r) {
		(Number::Int(l), Number::Int(r)) => l.cmp(&r),
		(Number::Double(l), Number::Double(r)) => compare_f64(l, r),
		(Number::Int(l), Number::Double(r)) => compare_i64_f64(l, r),
		(Number::Double(l), Number::Int(r)) => compare_i64_f64(r, l).reverse(),
		(Number::Decimal(l), Number::Decimal(r)) => l.cmp(r),
		(Number::Decimal(l), Number::Int(r)) => l.inner().cmp(&BigDecimal::from(r)),
		(Number::Int(l), Number::Decimal(r)) => BigDecimal::from(l).cmp(r.inner()),
		(Number::Decimal(l), Number::Double(r)) => compare_decimal_f64(l, r),
		(Number::Double(l), Number::Decimal(r)) => compare_decimal_f64(r, l).reverse(),
	}
}

fn compare_f64(l: f64, r: f64) -> Ordering {
	match (l.is_nan(), r.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Less,
		(false, true) => Ordering::Greater,
		// neither side is NaN
		(false, false) => l.partial_cmp(&r).unwrap_or(Ordering::Equal),
	}
}

// 2^63 is exactly representable; every finite double in [-2^63, 2^63) has an
// integral part that fits in an i64.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

fn compare_i64_f64(l: i64, r: f64) -> Ordering {
	if r.is_nan() {
		return Ordering::Greater;
	}
	if r >= TWO_POW_63 {
		return Ordering::Less;
	}
	if r < -TWO_POW_63 {
		return Ordering::Greater;
	}
	let whole = r.trunc();
	match l.cmp(&(whole as i64)) {
		Ordering::Equal => {
			if r > whole {
				Ordering::Less
			} else if r < whole {
				Ordering::Greater
			} else {
				Ordering::Equal
			}
		}
		ordering => ordering,
	}
}

fn compare_decimal_f64(l: &Decimal, r: f64) -> Ordering {
	if r.is_nan() {
		return Ordering::Greater;
	}
	if r.is_infinite() {
		return if r > 0.0 {
			Ordering::Less
		} else {
			Ordering::Greater
		};
	}
	match BigDecimal::from_f64(r) {
		Some(exact) => l.inner().cmp(&exact),
		None => compare_f64(l.to_f64(), r),
	}
}
