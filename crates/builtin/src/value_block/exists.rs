// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::instrument;
use vblock_type::{BitsetBlock, Result, Value, ValueBlock};

use crate::{BlockFunction, BlockFunctionContext};

/// Per position, true unless the element is Missing.
#[instrument(name = "builtin::exists", level = "trace", skip(block), fields(len = block.len()))]
pub fn exists(block: &ValueBlock) -> BitsetBlock {
	match block {
		ValueBlock::Bitset(bitset) => BitsetBlock::from_bools(&bitset.defined().iter().collect::<Vec<_>>()),
		ValueBlock::Heterogeneous(block) => block.iter().map(|v| Some(!v.is_missing())).collect(),
	}
}

pub struct ValueBlockExists;

impl BlockFunction for ValueBlockExists {
	fn arity(&self) -> usize {
		1
	}

	fn call(&self, ctx: BlockFunctionContext<'_>) -> Result<Value> {
		let block = ctx.args[0].block(ctx.name, 0)?;
		Ok(Value::block(exists(block)))
	}
}
