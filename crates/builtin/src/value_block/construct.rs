// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::instrument;
use vblock_type::{BitsetBlock, Error, HeterogeneousBlock, Result, Value, ValueBlock};

use crate::{BlockFunction, BlockFunctionContext, BuiltinConfig};

/// Block of `len` copies of `value`.
///
/// Booleans and Missing produce a bitset block, anything else a
/// heterogeneous block of deep copies.
#[instrument(name = "builtin::new_fill", level = "trace", skip(value, config))]
pub fn new_fill(operation: &'static str, value: &Value, len: &Value, config: &BuiltinConfig) -> Result<ValueBlock> {
	let requested = len.as_i64().ok_or_else(|| Error::type_mismatch(operation, 1, "integer", len.get_type()))?;
	if requested < 0 {
		return Err(Error::invalid_argument(operation, format!("block size must not be negative, got {requested}")));
	}
	let len = requested as usize;
	if len > config.max_fill_len {
		return Err(Error::invalid_argument(
			operation,
			format!("block size {len} exceeds the limit of {}", config.max_fill_len),
		));
	}

	Ok(match value {
		Value::Boolean(b) => ValueBlock::Bitset(BitsetBlock::repeat(len, *b)),
		Value::Missing => ValueBlock::Bitset((0..len).map(|_| None).collect()),
		value => {
			let mut block = HeterogeneousBlock::with_capacity(len);
			for _ in 0..len {
				block.push_copy(value);
			}
			ValueBlock::Heterogeneous(block)
		}
	})
}

/// Element count as an Int32.
#[instrument(name = "builtin::size", level = "trace", skip(block), fields(len = block.len()))]
pub fn size(operation: &'static str, block: &ValueBlock) -> Result<Value> {
	let len = i32::try_from(block.len())
		.map_err(|_| Error::invalid_argument(operation, format!("block size {} overflows int32", block.len())))?;
	Ok(Value::Int32(len))
}

pub struct ValueBlockNewFill;

impl BlockFunction for ValueBlockNewFill {
	fn arity(&self) -> usize {
		2
	}

	fn call(&self, ctx: BlockFunctionContext<'_>) -> Result<Value> {
		let value = ctx.args[0].value(ctx.name, 0)?;
		let len = ctx.args[1].value(ctx.name, 1)?;
		Ok(Value::block(new_fill(ctx.name, value, len, ctx.config)?))
	}
}

pub struct ValueBlockSize;

impl BlockFunction for ValueBlockSize {
	fn arity(&self) -> usize {
		1
	}

	fn call(&self, ctx: BlockFunctionContext<'_>) -> Result<Value> {
		let block = ctx.args[0].block(ctx.name, 0)?;
		size(ctx.name, block)
	}
}
