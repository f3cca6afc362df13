// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::instrument;
use vblock_type::{BitsetBlock, CompareOp, Result, Value, ValueBlock};

use crate::{BlockFunction, BlockFunctionContext};

/// Compares every element against `scalar`.
///
/// Position `i` holds exactly what `op` yields for `(block[i], scalar)`:
/// Missing when either side is Missing or the two are not comparable.
#[instrument(
	name = "builtin::compare_scalar",
	level = "trace",
	skip(op, block, scalar),
	fields(len = block.len(), op = %op)
)]
pub fn compare_scalar(op: CompareOp, block: &ValueBlock, scalar: &Value) -> BitsetBlock {
	let values = block.extract();
	values.values().iter().map(|value| op.apply(value, scalar).as_bool()).collect()
}

/// Broadcast comparison builtin, one instance per operator.
pub struct ValueBlockCompareScalar {
	op: CompareOp,
}

impl ValueBlockCompareScalar {
	pub fn new(op: CompareOp) -> Self {
		Self {
			op,
		}
	}
}

impl BlockFunction for ValueBlockCompareScalar {
	fn arity(&self) -> usize {
		2
	}

	fn call(&self, ctx: BlockFunctionContext<'_>) -> Result<Value> {
		let block = ctx.args[0].block(ctx.name, 0)?;
		let scalar = ctx.args[1].value(ctx.name, 1)?;
		Ok(Value::block(compare_scalar(self.op, block, scalar)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn block() -> ValueBlock {
		ValueBlock::from(vec![
			Value::Missing,
			Value::Int32(123),
			Value::Int64(456),
			Value::Double(123.0),
			Value::string("foobar"),
		])
	}

	#[test]
	fn test_gt_scalar() {
		let result = compare_scalar(CompareOp::Gt, &block(), &Value::Int32(123));
		assert_eq!(result.iter().collect::<Vec<_>>(), vec![None, Some(false), Some(true), Some(false), None]);
	}

	#[test]
	fn test_eq_scalar_across_numeric_types() {
		let result = compare_scalar(CompareOp::Eq, &block(), &Value::Int64(123));
		assert_eq!(result.iter().collect::<Vec<_>>(), vec![None, Some(true), Some(false), Some(true), None]);
	}

	#[test]
	fn test_compare_against_missing() {
		let result = compare_scalar(CompareOp::Neq, &block(), &Value::Missing);
		assert!(result.iter().all(|v| v.is_none()));
	}

	#[test]
	fn test_lte_scalar_strings() {
		let result = compare_scalar(CompareOp::Lte, &block(), &Value::string("zzz"));
		assert_eq!(result.iter().collect::<Vec<_>>(), vec![None, None, None, None, Some(true)]);
	}
}
