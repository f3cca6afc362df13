// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::instrument;
use vblock_type::{BitsetBlock, Error, HeterogeneousBlock, Result, Value, ValueBlock};

use crate::{BlockFunction, BlockFunctionContext};

/// Replaces every Missing element with a copy of `fill`.
///
/// Filling with Missing returns an unchanged copy. A bitset filled with a
/// boolean stays a bitset.
#[instrument(name = "builtin::fill_empty", level = "trace", skip(block, fill), fields(len = block.len()))]
pub fn fill_empty(block: &ValueBlock, fill: &Value) -> ValueBlock {
	if fill.is_missing() {
		return block.clone();
	}

	if let (ValueBlock::Bitset(bitset), Value::Boolean(fill)) = (block, fill) {
		return ValueBlock::Bitset(bitset.iter().map(|v| Some(v.unwrap_or(*fill))).collect());
	}

	let mut result = HeterogeneousBlock::with_capacity(block.len());
	for value in block.iter() {
		if value.is_missing() {
			result.push_copy(fill);
		} else {
			result.push(value);
		}
	}
	ValueBlock::Heterogeneous(result)
}

/// Replaces the Missing element at position `i` with a copy of `fill[i]`.
#[instrument(name = "builtin::fill_empty_block", level = "trace", skip(block, fill), fields(len = block.len()))]
pub fn fill_empty_block(operation: &'static str, block: &ValueBlock, fill: &ValueBlock) -> Result<ValueBlock> {
	Error::check_len(operation, block.len(), fill.len())?;

	if let (ValueBlock::Bitset(block), ValueBlock::Bitset(fill)) = (block, fill) {
		let result: BitsetBlock = block.iter().zip(fill.iter()).map(|(v, f)| v.or(f)).collect();
		return Ok(ValueBlock::Bitset(result));
	}

	let block = block.extract();
	let mut result = HeterogeneousBlock::with_capacity(block.count());
	for (i, value) in block.values().iter().enumerate() {
		if value.is_missing() {
			result.push(fill.get(i));
		} else {
			result.push_copy(value);
		}
	}
	Ok(ValueBlock::Heterogeneous(result))
}

pub struct ValueBlockFillEmpty;

impl BlockFunction for ValueBlockFillEmpty {
	fn arity(&self) -> usize {
		2
	}

	fn call(&self, ctx: BlockFunctionContext<'_>) -> Result<Value> {
		let block = ctx.args[0].block(ctx.name, 0)?;
		let fill = ctx.args[1].value(ctx.name, 1)?;
		Ok(Value::block(fill_empty(block, fill)))
	}
}

pub struct ValueBlockFillEmptyBlock;

impl BlockFunction for ValueBlockFillEmptyBlock {
	fn arity(&self) -> usize {
		2
	}

	fn call(&self, ctx: BlockFunctionContext<'_>) -> Result<Value> {
		let block = ctx.args[0].block(ctx.name, 0)?;
		let fill = ctx.args[1].block(ctx.name, 1)?;
		Ok(Value::block(fill_empty_block(ctx.name, block, fill)?))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ints_with_gap() -> ValueBlock {
		ValueBlock::from(vec![Value::Int32(42), Value::Missing, Value::Int32(44), Value::Missing])
	}

	#[test]
	fn test_fill_empty_shallow() {
		let result = fill_empty(&ints_with_gap(), &Value::Int32(45));
		assert_eq!(
			result,
			ValueBlock::from(vec![Value::Int32(42), Value::Int32(45), Value::Int32(44), Value::Int32(45)])
		);
	}

	#[test]
	fn test_fill_empty_deep() {
		let fill = Value::string("Replacement for missing value");
		let result = fill_empty(&ints_with_gap(), &fill);
		assert_eq!(result.get(1), fill);
		assert_eq!(result.get(3), fill);
		assert_eq!(result.get(0), Value::Int32(42));
	}

	#[test]
	fn test_fill_empty_with_missing_is_noop() {
		let block = ints_with_gap();
		assert_eq!(fill_empty(&block, &Value::Missing), block);
	}

	#[test]
	fn test_fill_empty_bitset_stays_bitset() {
		let mut bitset = BitsetBlock::from_bools(&[true]);
		bitset.push_missing();
		let result = fill_empty(&ValueBlock::from(bitset), &Value::Boolean(false));
		assert_eq!(result, ValueBlock::from(BitsetBlock::from_bools(&[true, false])));
	}

	#[test]
	fn test_fill_empty_block() {
		let fill = ValueBlock::from(vec![Value::Int32(1), Value::Int32(2), Value::Int32(3), Value::Missing]);
		let result = fill_empty_block("test", &ints_with_gap(), &fill).unwrap();
		assert_eq!(
			result,
			ValueBlock::from(vec![Value::Int32(42), Value::Int32(2), Value::Int32(44), Value::Missing])
		);
	}

	#[test]
	fn test_fill_empty_block_length_mismatch() {
		let fill = ValueBlock::from(vec![Value::Int32(1)]);
		assert_eq!(
			fill_empty_block("test", &ints_with_gap(), &fill).unwrap_err(),
			Error::LengthMismatch {
				operation: "test",
				expected: 4,
				actual: 1
			}
		);
	}
}
