// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{
	error::{Error, Result},
	value::block::ValueBlock,
};

/// Flattened leaf values of a columnar array field, with the run markers that
/// regroup them into source documents.
///
/// A nonzero marker opens a new top-level group, a zero marker continues the
/// previous one. Empty run info means every leaf is its own group.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CellBlock {
	values: ValueBlock,
	position_runs: Vec<u8>,
}

impl CellBlock {
	pub fn new(values: impl Into<ValueBlock>, position_runs: Vec<u8>) -> Result<Self> {
		let values = values.into();
		if !position_runs.is_empty() {
			Error::check_len("CellBlock::new", values.len(), position_runs.len())?;
		}
		Ok(Self {
			values,
			position_runs,
		})
	}

	/// Cell block whose leaves map 1:1 onto source documents.
	pub fn identity(values: impl Into<ValueBlock>) -> Self {
		Self {
			values: values.into(),
			position_runs: Vec::new(),
		}
	}

	pub fn values(&self) -> &ValueBlock {
		&self.values
	}

	pub fn position_runs(&self) -> &[u8] {
		&self.position_runs
	}

	pub fn is_identity(&self) -> bool {
		self.position_runs.is_empty()
	}

	pub fn leaf_count(&self) -> usize {
		self.values.len()
	}

	/// Number of source documents described by this block.
	pub fn group_count(&self) -> usize {
		if self.is_identity() {
			return self.values.len();
		}
		let opened = self.position_runs.iter().filter(|&&marker| marker != 0).count();
		// a leading zero marker still opens the first group
		match self.position_runs.first() {
			Some(0) => opened + 1,
			_ => opened,
		}
	}
}

impl Display for CellBlock {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "cell{}{:?}", self.values, self.position_runs)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::{BitsetBlock, Value};

	#[test]
	fn test_identity() {
		let cell = CellBlock::identity(BitsetBlock::from_bools(&[true, false]));
		assert!(cell.is_identity());
		assert_eq!(cell.group_count(), 2);
	}

	#[test]
	fn test_group_count() {
		let cell = CellBlock::new(BitsetBlock::from_bools(&[true, true, false, false, true]), vec![1, 1, 1, 0, 1])
			.unwrap();
		assert_eq!(cell.group_count(), 4);
		assert_eq!(cell.leaf_count(), 5);

		let cell = CellBlock::new(BitsetBlock::from_bools(&[true, false]), vec![0, 0]).unwrap();
		assert_eq!(cell.group_count(), 1);
	}

	#[test]
	fn test_run_info_length_must_match() {
		let err = CellBlock::new(vec![Value::Int32(1), Value::Int32(2)], vec![1]).unwrap_err();
		assert_eq!(
			err,
			Error::LengthMismatch {
				operation: "CellBlock::new",
				expected: 2,
				actual: 1
			}
		);
	}
}
