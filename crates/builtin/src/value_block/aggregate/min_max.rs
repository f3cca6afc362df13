// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use tracing::instrument;
use vblock_type::{BitsetBlock, Error, Result, Value, ValueBlock, value::compare::canonical_cmp};

use crate::{BlockFunction, BlockFunctionContext, EmptyAggregate, value_block::aggregate::qualifying};

fn select(
	operation: &'static str,
	bitset: &BitsetBlock,
	block: &ValueBlock,
	empty: EmptyAggregate,
	wanted: Ordering,
) -> Result<Value> {
	let values = block.extract();
	let mut best: Option<&Value> = None;

	for value in qualifying(operation, bitset, &values)? {
		if value.get_type().is_block() {
			return Err(Error::type_mismatch(operation, 1, "scalar elements", value.get_type()));
		}
		best = match best {
			Some(current) if canonical_cmp(value, current) != Some(wanted) => Some(current),
			_ => Some(value),
		};
	}

	match (best, empty) {
		(Some(value), _) => Ok(value.clone()),
		(None, EmptyAggregate::Missing) => Ok(Value::Missing),
		(None, EmptyAggregate::Error) => Err(Error::EmptyAggregate {
			operation,
		}),
	}
}

/// Smallest selected element in canonical order, as a copy.
#[instrument(name = "builtin::min", level = "trace", skip(bitset, block), fields(len = block.len()))]
pub fn min(operation: &'static str, bitset: &BitsetBlock, block: &ValueBlock, empty: EmptyAggregate) -> Result<Value> {
	select(operation, bitset, block, empty, Ordering::Less)
}

/// Largest selected element in canonical order, as a copy.
#[instrument(name = "builtin::max", level = "trace", skip(bitset, block), fields(len = block.len()))]
pub fn max(operation: &'static str, bitset: &BitsetBlock, block: &ValueBlock, empty: EmptyAggregate) -> Result<Value> {
	select(operation, bitset, block, empty, Ordering::Greater)
}

pub struct ValueBlockMin;

impl BlockFunction for ValueBlockMin {
	fn arity(&self) -> usize {
		2
	}

	fn call(&self, ctx: BlockFunctionContext<'_>) -> Result<Value> {
		let bitset = ctx.args[0].bitset(ctx.name, 0)?;
		let block = ctx.args[1].block(ctx.name, 1)?;
		min(ctx.name, &bitset, block, ctx.config.empty_min_max)
	}
}

pub struct ValueBlockMax;

impl BlockFunction for ValueBlockMax {
	fn arity(&self) -> usize {
		2
	}

	fn call(&self, ctx: BlockFunctionContext<'_>) -> Result<Value> {
		let bitset = ctx.args[0].bitset(ctx.name, 0)?;
		let block = ctx.args[1].block(ctx.name, 1)?;
		max(ctx.name, &bitset, block, ctx.config.empty_min_max)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_min_max() {
		let block = ValueBlock::from(vec![
			Value::Int32(42),
			Value::Missing,
			Value::Int32(43),
			Value::Int32(40),
			Value::Missing,
			Value::Int32(41),
		]);
		let bitset = BitsetBlock::from_bools(&[true, true, false, false, true, true]);

		assert_eq!(min("test", &bitset, &block, EmptyAggregate::Missing).unwrap(), Value::Int32(41));
		assert_eq!(max("test", &bitset, &block, EmptyAggregate::Missing).unwrap(), Value::Int32(42));
	}

	#[test]
	fn test_min_max_mixed_types() {
		let block = ValueBlock::from(vec![
			Value::string("zoom"),
			Value::Int32(42),
			Value::Int32(41),
			Value::Int32(40),
			Value::string("abcdefg"),
			Value::string("abcdefgh"),
			Value::string("abcdefghi"),
			Value::Missing,
		]);
		let bitset = BitsetBlock::from_bools(&[false, true, true, false, true, true, false, true]);

		assert_eq!(min("test", &bitset, &block, EmptyAggregate::Missing).unwrap(), Value::Int32(41));
		assert_eq!(
			max("test", &bitset, &block, EmptyAggregate::Missing).unwrap(),
			Value::BigString("abcdefgh".to_string())
		);
	}

	#[test]
	fn test_min_across_numeric_types() {
		let block = ValueBlock::from(vec![Value::Int64(5), Value::Double(4.5), Value::Int32(6)]);
		let bitset = BitsetBlock::repeat(3, true);
		assert_eq!(min("test", &bitset, &block, EmptyAggregate::Missing).unwrap(), Value::Double(4.5));
		assert_eq!(max("test", &bitset, &block, EmptyAggregate::Missing).unwrap(), Value::Int32(6));
	}

	#[test]
	fn test_empty_missing() {
		let block = ValueBlock::from(vec![Value::Int32(1), Value::Missing]);
		let bitset = BitsetBlock::from_bools(&[false, true]);
		assert_eq!(min("test", &bitset, &block, EmptyAggregate::Missing).unwrap(), Value::Missing);
	}

	#[test]
	fn test_empty_error() {
		let block = ValueBlock::from(vec![Value::Int32(1)]);
		let bitset = BitsetBlock::from_bools(&[false]);
		assert_eq!(
			max("test", &bitset, &block, EmptyAggregate::Error).unwrap_err(),
			Error::EmptyAggregate {
				operation: "test"
			}
		);
	}

	#[test]
	fn test_nested_block_rejected() {
		let nested = Value::block(vec![Value::Int32(1)]);
		let block = ValueBlock::from(vec![Value::Int32(1), nested]);
		let bitset = BitsetBlock::repeat(2, true);
		assert!(matches!(
			min("test", &bitset, &block, EmptyAggregate::Missing),
			Err(Error::TypeMismatch { .. })
		));
	}
}
