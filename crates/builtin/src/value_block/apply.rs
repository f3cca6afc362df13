// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::instrument;
use vblock_type::{BitsetBlock, Error, HeterogeneousBlock, Result, Value, ValueBlock};

use crate::{BlockFunction, BlockFunctionContext, Lambda};

/// Evaluates `lambda` once per selected element.
///
/// Without a mask every element is selected. Unselected positions are
/// Missing. Missing elements are still handed to the lambda.
#[instrument(name = "builtin::apply_lambda", level = "trace", skip(mask, block, lambda), fields(len = block.len()))]
pub fn apply_lambda(
	operation: &'static str,
	mask: Option<&BitsetBlock>,
	block: &ValueBlock,
	lambda: &dyn Lambda,
) -> Result<ValueBlock> {
	if let Some(mask) = mask {
		Error::check_len(operation, block.len(), mask.len())?;
	}

	let values = block.extract();
	let mut result = HeterogeneousBlock::with_capacity(values.count());
	for (i, value) in values.values().iter().enumerate() {
		if mask.is_some_and(|mask| !mask.is_true(i)) {
			result.push(Value::Missing);
			continue;
		}
		result.push(lambda.call(value)?);
	}
	Ok(ValueBlock::Heterogeneous(result))
}

pub struct ValueBlockApplyLambda;

impl BlockFunction for ValueBlockApplyLambda {
	fn arity(&self) -> usize {
		3
	}

	fn call(&self, ctx: BlockFunctionContext<'_>) -> Result<Value> {
		let mask = match ctx.args[0].value(ctx.name, 0)? {
			Value::Missing => None,
			_ => Some(ctx.args[0].bitset(ctx.name, 0)?),
		};
		let block = ctx.args[1].block(ctx.name, 1)?;
		let lambda = ctx.args[2].lambda(ctx.name, 2)?;
		Ok(Value::block(apply_lambda(ctx.name, mask.as_deref(), block, lambda)?))
	}
}
