// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::instrument;
use vblock_type::{BitsetBlock, Result, Value};

use crate::{BlockFunction, BlockFunctionContext};

/// Number of true entries; Missing counts as not true.
#[instrument(name = "builtin::count", level = "trace", skip(bitset), fields(len = bitset.len()))]
pub fn count(bitset: &BitsetBlock) -> i64 {
	bitset.count_true() as i64
}

pub struct ValueBlockCount;

impl BlockFunction for ValueBlockCount {
	fn arity(&self) -> usize {
		1
	}

	fn call(&self, ctx: BlockFunctionContext<'_>) -> Result<Value> {
		let bitset = ctx.args[0].bitset(ctx.name, 0)?;
		Ok(Value::Int64(count(&bitset)))
	}
}
