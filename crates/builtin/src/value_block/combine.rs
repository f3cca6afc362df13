// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::instrument;
use vblock_type::{BitsetBlock, Error, HeterogeneousBlock, Result, Value, ValueBlock};

use crate::{BlockFunction, BlockFunctionContext};

/// Picks `left[i]` where `mask[i]` is true and `right[i]` everywhere else.
#[instrument(name = "builtin::combine", level = "trace", skip(left, right, mask), fields(len = left.len()))]
pub fn combine(
	operation: &'static str,
	left: &ValueBlock,
	right: &ValueBlock,
	mask: &BitsetBlock,
) -> Result<ValueBlock> {
	Error::check_len(operation, left.len(), right.len())?;
	Error::check_len(operation, left.len(), mask.len())?;

	if let (ValueBlock::Bitset(left), ValueBlock::Bitset(right)) = (left, right) {
		let result: BitsetBlock =
			(0..mask.len()).map(|i| if mask.is_true(i) { left.get(i) } else { right.get(i) }).collect();
		return Ok(ValueBlock::Bitset(result));
	}

	let (left, right) = (left.extract(), right.extract());
	let mut result = HeterogeneousBlock::with_capacity(mask.len());
	for i in 0..mask.len() {
		let selected = if mask.is_true(i) { &left[i] } else { &right[i] };
		result.push_copy(selected);
	}
	Ok(ValueBlock::Heterogeneous(result))
}

pub struct ValueBlockCombine;

impl BlockFunction for ValueBlockCombine {
	fn arity(&self) -> usize {
		3
	}

	fn call(&self, ctx: BlockFunctionContext<'_>) -> Result<Value> {
		let left = ctx.args[0].block(ctx.name, 0)?;
		let right = ctx.args[1].block(ctx.name, 1)?;
		let mask = ctx.args[2].bitset(ctx.name, 2)?;
		Ok(Value::block(combine(ctx.name, left, right, &mask)?))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_combine_heterogeneous() {
		let left = ValueBlock::from(vec![
			Value::Int32(1),
			Value::Int32(2),
			Value::Int32(3),
			Value::Missing,
			Value::Int32(5),
		]);
		let right = ValueBlock::from(vec![
			Value::string("This is item #1"),
			Value::Missing,
			Value::string("This is item #3"),
			Value::string("This is item #4"),
			Value::string("This is item #5"),
		]);
		let mask = BitsetBlock::from_bools(&[true, false, true, false, true]);

		let result = combine("test", &left, &right, &mask).unwrap();
		assert_eq!(
			result,
			ValueBlock::from(vec![
				Value::Int32(1),
				Value::Missing,
				Value::Int32(3),
				Value::string("This is item #4"),
				Value::Int32(5),
			])
		);
	}

	#[test]
	fn test_combine_missing_mask_selects_right() {
		let left = ValueBlock::from(vec![Value::Int32(1)]);
		let right = ValueBlock::from(vec![Value::Int32(2)]);
		let mask: BitsetBlock = [None].into_iter().collect();
		assert_eq!(combine("test", &left, &right, &mask).unwrap().get(0), Value::Int32(2));
	}

	#[test]
	fn test_combine_bitsets() {
		let left = ValueBlock::from(BitsetBlock::from_bools(&[true, true]));
		let right = ValueBlock::from(BitsetBlock::from_bools(&[false, false]));
		let mask = BitsetBlock::from_bools(&[true, false]);
		assert_eq!(
			combine("test", &left, &right, &mask).unwrap(),
			ValueBlock::from(BitsetBlock::from_bools(&[true, false]))
		);
	}

	#[test]
	fn test_combine_length_mismatch() {
		let left = ValueBlock::from(vec![Value::Int32(1), Value::Int32(2)]);
		let right = ValueBlock::from(vec![Value::Int32(1), Value::Int32(2)]);
		let mask = BitsetBlock::from_bools(&[true]);
		assert!(matches!(combine("test", &left, &right, &mask), Err(Error::LengthMismatch { .. })));
	}
}
