// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::instrument;
use vblock_type::{BitsetBlock, Error, Result, Value};

use crate::{BlockFunction, BlockFunctionContext};

/// Folds boolean leaves back to one flag per source document.
///
/// A nonzero run marker opens a new group and a zero marker extends the
/// current one; each group is the OR of its leaves, Missing counting as
/// false. Empty run info is the identity.
#[instrument(name = "builtin::fold_f", level = "trace", skip(values, position_runs), fields(len = values.len()))]
pub fn fold_f(operation: &'static str, values: &BitsetBlock, position_runs: &[u8]) -> Result<BitsetBlock> {
	if position_runs.is_empty() {
		return Ok(values.clone());
	}
	Error::check_len(operation, values.len(), position_runs.len())?;

	let mut groups: Vec<bool> = Vec::new();
	for (i, &marker) in position_runs.iter().enumerate() {
		// a leading zero marker still opens the first group
		if marker != 0 || groups.is_empty() {
			groups.push(false);
		}
		if values.is_true(i) {
			if let Some(last) = groups.last_mut() {
				*last = true;
			}
		}
	}
	Ok(BitsetBlock::from_bools(&groups))
}

pub struct CellFoldValuesF;

impl BlockFunction for CellFoldValuesF {
	fn arity(&self) -> usize {
		2
	}

	fn call(&self, ctx: BlockFunctionContext<'_>) -> Result<Value> {
		let values = ctx.args[0].bitset(ctx.name, 0)?;
		let cell = ctx.args[1].cell_block(ctx.name, 1)?;
		Ok(Value::block(fold_f(ctx.name, &values, cell.position_runs())?))
	}
}
