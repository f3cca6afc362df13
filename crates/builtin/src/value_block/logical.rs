// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Three-valued boolean logic over bitset blocks.
//!
//! Missing behaves as "unknown": `false and M = false`, `true or M = true`,
//! every other combination involving Missing stays Missing.

use tracing::instrument;
use vblock_type::{BitsetBlock, CompareOp, Error, Result, Value, ValueBlock};

use crate::{BlockFunction, BlockFunctionContext};

fn kleene_and(l: Option<bool>, r: Option<bool>) -> Option<bool> {
	match (l, r) {
		(Some(false), _) | (_, Some(false)) => Some(false),
		(Some(true), Some(true)) => Some(true),
		_ => None,
	}
}

fn kleene_or(l: Option<bool>, r: Option<bool>) -> Option<bool> {
	match (l, r) {
		(Some(true), _) | (_, Some(true)) => Some(true),
		(Some(false), Some(false)) => Some(false),
		_ => None,
	}
}

fn combine_with(
	operation: &'static str,
	left: &BitsetBlock,
	right: &BitsetBlock,
	dense: impl Fn(&BitsetBlock, &BitsetBlock) -> BitsetBlock,
	sparse: impl Fn(Option<bool>, Option<bool>) -> Option<bool>,
) -> Result<BitsetBlock> {
	Error::check_len(operation, left.len(), right.len())?;
	if left.is_fully_defined() && right.is_fully_defined() {
		return Ok(dense(left, right));
	}
	Ok(left.iter().zip(right.iter()).map(|(l, r)| sparse(l, r)).collect())
}

#[instrument(name = "builtin::logical_and", level = "trace", skip(left, right), fields(len = left.len()))]
pub fn and(operation: &'static str, left: &BitsetBlock, right: &BitsetBlock) -> Result<BitsetBlock> {
	combine_with(
		operation,
		left,
		right,
		|l, r| BitsetBlock::new(l.data().and(r.data()), l.defined().clone()),
		kleene_and,
	)
}

#[instrument(name = "builtin::logical_or", level = "trace", skip(left, right), fields(len = left.len()))]
pub fn or(operation: &'static str, left: &BitsetBlock, right: &BitsetBlock) -> Result<BitsetBlock> {
	combine_with(
		operation,
		left,
		right,
		|l, r| BitsetBlock::new(l.data().or(r.data()), l.defined().clone()),
		kleene_or,
	)
}

#[instrument(name = "builtin::logical_not", level = "trace", skip(block), fields(len = block.len()))]
pub fn not(block: &BitsetBlock) -> BitsetBlock {
	if block.is_fully_defined() {
		return BitsetBlock::new(block.data().not(), block.defined().clone());
	}
	block.iter().map(|v| v.map(|b| !b)).collect()
}

/// True iff no element of `block` compares equal to `flag`.
///
/// Numbers compare by value across representations; Missing equals nothing.
#[instrument(name = "builtin::none", level = "trace", skip(block, flag), fields(len = block.len()))]
pub fn none(block: &ValueBlock, flag: &Value) -> bool {
	match (block, flag) {
		(ValueBlock::Bitset(bitset), Value::Boolean(flag)) => !bitset.iter().any(|v| v == Some(*flag)),
		_ => !block.iter().any(|v| CompareOp::Eq.apply(&v, flag).is_true()),
	}
}

pub struct ValueBlockLogicalAnd;

impl BlockFunction for ValueBlockLogicalAnd {
	fn arity(&self) -> usize {
		2
	}

	fn call(&self, ctx: BlockFunctionContext<'_>) -> Result<Value> {
		let left = ctx.args[0].bitset(ctx.name, 0)?;
		let right = ctx.args[1].bitset(ctx.name, 1)?;
		Ok(Value::block(and(ctx.name, &left, &right)?))
	}
}

pub struct ValueBlockLogicalOr;

impl BlockFunction for ValueBlockLogicalOr {
	fn arity(&self) -> usize {
		2
	}

	fn call(&self, ctx: BlockFunctionContext<'_>) -> Result<Value> {
		let left = ctx.args[0].bitset(ctx.name, 0)?;
		let right = ctx.args[1].bitset(ctx.name, 1)?;
		Ok(Value::block(or(ctx.name, &left, &right)?))
	}
}

pub struct ValueBlockLogicalNot;

impl BlockFunction for ValueBlockLogicalNot {
	fn arity(&self) -> usize {
		1
	}

	fn call(&self, ctx: BlockFunctionContext<'_>) -> Result<Value> {
		let block = ctx.args[0].bitset(ctx.name, 0)?;
		Ok(Value::block(not(&block)))
	}
}

pub struct ValueBlockNone;

impl BlockFunction for ValueBlockNone {
	fn arity(&self) -> usize {
		2
	}

	fn call(&self, ctx: BlockFunctionContext<'_>) -> Result<Value> {
		let block = ctx.args[0].block(ctx.name, 0)?;
		let flag = ctx.args[1].value(ctx.name, 1)?;
		Ok(Value::Boolean(none(block, flag)))
	}
}
