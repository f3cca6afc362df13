// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::instrument;
use vblock_type::{CellBlock, Result, Value, ValueBlock};

use crate::{BlockFunction, BlockFunctionContext};

/// Copy of the leaf values of a cell block.
#[instrument(name = "builtin::flat_values", level = "trace", skip(cell), fields(len = cell.leaf_count()))]
pub fn flat_values(cell: &CellBlock) -> ValueBlock {
	cell.values().clone()
}

pub struct CellBlockGetFlatValuesBlock;

impl BlockFunction for CellBlockGetFlatValuesBlock {
	fn arity(&self) -> usize {
		1
	}

	fn call(&self, ctx: BlockFunctionContext<'_>) -> Result<Value> {
		let cell = ctx.args[0].cell_block(ctx.name, 0)?;
		Ok(Value::block(flat_values(cell)))
	}
}
