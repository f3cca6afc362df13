// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use bigdecimal::BigDecimal;
use tracing::{instrument, trace};
use vblock_type::{BitsetBlock, Decimal, Result, Type, Value, ValueBlock};

use crate::{BlockFunction, BlockFunctionContext, value_block::aggregate::qualifying};

/// Running sum over the Int32 -> Int64 -> Double -> Decimal lattice.
///
/// Each representation keeps its own total and the result type is chosen in
/// [`finish`](Self::finish), so the outcome does not depend on operand order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SumAccumulator {
	widest: Option<Type>,
	// a block holds fewer than 2^64 elements, so this never overflows
	integer: i128,
	double: f64,
	decimal: BigDecimal,
}

impl SumAccumulator {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds one operand; non-numeric operands leave the sum unchanged.
	pub fn add(mut self, value: &Value) -> Self {
		match value {
			Value::Int32(v) => self.integer += *v as i128,
			Value::Int64(v) => self.integer += *v as i128,
			Value::Double(v) => self.double += v,
			Value::Decimal(v) => self.decimal += v.inner(),
			_ => return self,
		}
		let ty = value.get_type();
		self.widest = Some(self.widest.map_or(ty, |widest| widest.max(ty)));
		self
	}

	pub fn finish(self) -> Value {
		let Some(widest) = self.widest else {
			return Value::Missing;
		};

		if widest == Type::Int32 {
			if let Ok(v) = i32::try_from(self.integer) {
				return Value::Int32(v);
			}
			trace!("sum overflowed int32, widening to int64");
		}
		if widest <= Type::Int64 {
			if let Ok(v) = i64::try_from(self.integer) {
				return Value::Int64(v);
			}
			trace!("sum overflowed int64, widening to double");
		}
		if widest <= Type::Double {
			return Value::Double(self.integer as f64 + self.double);
		}

		match Decimal::from_f64(self.double) {
			Some(double) => Value::Decimal(Decimal::new(
				self.decimal + double.into_inner() + BigDecimal::from(self.integer),
			)),
			None => {
				trace!("non-finite double in decimal sum, result is double");
				let decimal = Decimal::new(self.decimal).to_f64();
				Value::Double(self.double + decimal + self.integer as f64)
			}
		}
	}
}

/// Sums the elements selected by `bitset`, skipping Missing.
///
/// Missing when nothing qualifies.
#[instrument(name = "builtin::sum", level = "trace", skip(bitset, block), fields(len = block.len()))]
pub fn sum(operation: &'static str, bitset: &BitsetBlock, block: &ValueBlock) -> Result<Value> {
	let values = block.extract();
	let accumulator = qualifying(operation, bitset, &values)?
		.into_iter()
		.fold(SumAccumulator::new(), |acc, value| acc.add(value));
	Ok(accumulator.finish())
}

pub struct ValueBlockSum;

impl BlockFunction for ValueBlockSum {
	fn arity(&self) -> usize {
		2
	}

	fn call(&self, ctx: BlockFunctionContext<'_>) -> Result<Value> {
		let bitset = ctx.args[0].bitset(ctx.name, 0)?;
		let block = ctx.args[1].block(ctx.name, 1)?;
		sum(ctx.name, &bitset, block)
	}
}

#[cfg(test)]
mod tests {
	use vblock_type::Error;

	use super::*;

	fn decimal(s: &str) -> Value {
		Value::Decimal(s.parse().unwrap())
	}

	fn all_true(len: usize) -> BitsetBlock {
		BitsetBlock::repeat(len, true)
	}

	#[test]
	fn test_sum_widens_to_int64() {
		let block = ValueBlock::from(vec![
			Value::Int32(1),
			Value::Missing,
			Value::Int32(2),
			Value::Int32(3),
			Value::Missing,
			Value::Int64(4),
		]);
		let bitset = BitsetBlock::from_bools(&[false, false, true, true, false, true]);
		assert_eq!(sum("test", &bitset, &block).unwrap(), Value::Int64(9));
	}

	#[test]
	fn test_sum_order_independent() {
		let block = ValueBlock::from(vec![Value::Int64(4), Value::Int32(2), Value::Int32(3)]);
		assert_eq!(sum("test", &all_true(3), &block).unwrap(), Value::Int64(9));
	}

	#[test]
	fn test_sum_int32_stays_int32() {
		let block = ValueBlock::from(vec![Value::Int32(2), Value::Int32(3), Value::Int32(4)]);
		assert_eq!(sum("test", &all_true(3), &block).unwrap(), Value::Int32(9));
	}

	#[test]
	fn test_sum_all_missing() {
		let block = ValueBlock::from(vec![Value::Missing; 4]);
		assert_eq!(sum("test", &all_true(4), &block).unwrap(), Value::Missing);
	}

	#[test]
	fn test_sum_nothing_selected() {
		let block = ValueBlock::from(vec![Value::Int32(1), Value::Int32(2)]);
		assert_eq!(sum("test", &BitsetBlock::repeat(2, false), &block).unwrap(), Value::Missing);
	}

	#[test]
	fn test_sum_mixed_with_decimal() {
		let block = ValueBlock::from(vec![
			Value::Int32(1),
			Value::Missing,
			Value::Double(2.0),
			Value::Int32(3),
			decimal("50"),
			Value::Int32(4),
		]);
		let bitset = BitsetBlock::from_bools(&[false, false, true, true, true, true]);
		assert_eq!(sum("test", &bitset, &block).unwrap(), decimal("59"));
	}

	#[test]
	fn test_sum_decimals() {
		let block = ValueBlock::from(vec![decimal("50"); 6]);
		let bitset = BitsetBlock::from_bools(&[false, true, true, true, true, true]);
		assert_eq!(sum("test", &bitset, &block).unwrap(), decimal("250"));
	}

	#[test]
	fn test_sum_int32_overflow() {
		let block = ValueBlock::from(vec![Value::Int32(i32::MAX), Value::Int32(1)]);
		assert_eq!(sum("test", &all_true(2), &block).unwrap(), Value::Int64(i32::MAX as i64 + 1));
	}

	#[test]
	fn test_sum_int64_overflow() {
		let block = ValueBlock::from(vec![Value::Int64(i64::MAX), Value::Int64(1)]);
		assert_eq!(sum("test", &all_true(2), &block).unwrap(), Value::Double(i64::MAX as f64 + 1.0));
	}

	#[test]
	fn test_sum_ignores_non_numeric() {
		let block = ValueBlock::from(vec![Value::string("abc"), Value::Int32(1), Value::Boolean(true)]);
		assert_eq!(sum("test", &all_true(3), &block).unwrap(), Value::Int32(1));
	}

	#[test]
	fn test_sum_decimal_with_infinity() {
		let block = ValueBlock::from(vec![decimal("1.5"), Value::Double(f64::INFINITY), Value::Int32(1)]);
		assert_eq!(sum("test", &all_true(3), &block).unwrap(), Value::Double(f64::INFINITY));
	}

	#[test]
	fn test_sum_int64_overflow_twice() {
		let block = ValueBlock::from(vec![Value::Int64(i64::MAX), Value::Int64(i64::MAX)]);
		assert_eq!(sum("test", &all_true(2), &block).unwrap(), Value::Double(i64::MAX as f64 * 2.0));
	}

	fn sum_both_orders(values: Vec<Value>) -> (Value, Value) {
		let len = values.len();
		let reversed: Vec<Value> = values.iter().rev().cloned().collect();
		let forward = sum("test", &all_true(len), &ValueBlock::from(values)).unwrap();
		let backward = sum("test", &all_true(len), &ValueBlock::from(reversed)).unwrap();
		(forward, backward)
	}

	#[test]
	fn test_sum_int32_boundary_either_order() {
		let (forward, backward) = sum_both_orders(vec![Value::Int32(i32::MAX), Value::Int32(1), Value::Int32(-1)]);
		assert_eq!(forward, Value::Int32(i32::MAX));
		assert_eq!(backward, Value::Int32(i32::MAX));
	}

	#[test]
	fn test_sum_int64_boundary_either_order() {
		let (forward, backward) = sum_both_orders(vec![Value::Int64(i64::MAX), Value::Int64(1), Value::Int64(-1)]);
		assert_eq!(forward, Value::Int64(i64::MAX));
		assert_eq!(backward, Value::Int64(i64::MAX));
	}

	#[test]
	fn test_sum_doubles_around_decimal() {
		let before = ValueBlock::from(vec![Value::Double(0.1), Value::Double(0.2), decimal("0")]);
		let after = ValueBlock::from(vec![decimal("0"), Value::Double(0.1), Value::Double(0.2)]);
		let before = sum("test", &all_true(3), &before).unwrap();
		let after = sum("test", &all_true(3), &after).unwrap();
		assert_eq!(before, after);
		assert_eq!(before.get_type(), Type::Decimal);
	}

	#[test]
	fn test_sum_accumulator_new_is_missing() {
		assert_eq!(SumAccumulator::new().finish(), Value::Missing);
		assert_eq!(SumAccumulator::new().add(&Value::Boolean(true)).finish(), Value::Missing);
	}

	#[test]
	fn test_sum_length_mismatch() {
		let block = ValueBlock::from(vec![Value::Int32(1)]);
		assert!(matches!(sum("test", &all_true(2), &block), Err(Error::LengthMismatch { .. })));
	}
}
