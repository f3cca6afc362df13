// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	borrow::Cow,
	fmt::{Debug, Formatter},
};

use vblock_type::{BitsetBlock, CellBlock, Error, Result, Value, ValueBlock};

use crate::lambda::Lambda;

/// A positional argument handed to a builtin by the evaluator.
#[derive(Clone, Copy)]
pub enum Operand<'a> {
	Value(&'a Value),
	Lambda(&'a dyn Lambda),
}

impl Debug for Operand<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Operand::Value(value) => write!(f, "Value({value})"),
			Operand::Lambda(_) => f.write_str("Lambda"),
		}
	}
}

impl<'a> From<&'a Value> for Operand<'a> {
	fn from(value: &'a Value) -> Self {
		Operand::Value(value)
	}
}

impl<'a> Operand<'a> {
	pub fn value(&self, operation: &'static str, argument: usize) -> Result<&'a Value> {
		match self {
			Operand::Value(value) => Ok(value),
			Operand::Lambda(_) => {
				Err(Error::invalid_argument(operation, format!("argument {argument} must be a value, got a lambda")))
			}
		}
	}

	pub fn lambda(&self, operation: &'static str, argument: usize) -> Result<&'a dyn Lambda> {
		match self {
			Operand::Lambda(lambda) => Ok(*lambda),
			Operand::Value(_) => {
				Err(Error::invalid_argument(operation, format!("argument {argument} must be a lambda")))
			}
		}
	}

	pub fn block(&self, operation: &'static str, argument: usize) -> Result<&'a ValueBlock> {
		let value = self.value(operation, argument)?;
		value.as_block().ok_or_else(|| Error::type_mismatch(operation, argument, "value block", value.get_type()))
	}

	pub fn bitset(&self, operation: &'static str, argument: usize) -> Result<Cow<'a, BitsetBlock>> {
		self.block(operation, argument)?.to_bitset(operation, argument)
	}

	pub fn cell_block(&self, operation: &'static str, argument: usize) -> Result<&'a CellBlock> {
		let value = self.value(operation, argument)?;
		value.as_cell_block().ok_or_else(|| Error::type_mismatch(operation, argument, "cell block", value.get_type()))
	}
}
