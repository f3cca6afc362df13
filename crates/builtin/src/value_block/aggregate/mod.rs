// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use vblock_type::{BitsetBlock, DeblockedValues, Error, Result, Value};

pub mod count;
pub mod min_max;
pub mod sum;

/// Elements selected by `bitset` that are not Missing.
pub(crate) fn qualifying<'a>(
	operation: &'static str,
	bitset: &'a BitsetBlock,
	values: &'a DeblockedValues<'_>,
) -> Result<Vec<&'a Value>> {
	Error::check_len(operation, bitset.len(), values.count())?;
	Ok(values.values().iter().enumerate().filter(|(i, v)| bitset.is_true(*i) && !v.is_missing()).map(|(_, v)| v).collect())
}
