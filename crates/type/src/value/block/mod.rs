// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	borrow::Cow,
	fmt::{Display, Formatter},
	ops::Index,
};

use serde::Serialize;

mod bitset;
mod cell;
mod heterogeneous;

pub use bitset::BitsetBlock;
pub use cell::CellBlock;
pub use heterogeneous::HeterogeneousBlock;

use crate::{
	error::{Error, Result},
	value::{Type, Value},
};

/// Ordered, owning columnar batch of tagged values.
///
/// The variant records which capabilities the block has: any block can be
/// read element by element, a bitset block additionally answers mask queries
/// without materialising values.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ValueBlock {
	Heterogeneous(HeterogeneousBlock),
	Bitset(BitsetBlock),
}

impl ValueBlock {
	pub fn len(&self) -> usize {
		match self {
			ValueBlock::Heterogeneous(block) => block.len(),
			ValueBlock::Bitset(block) => block.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Copy of the element at `index`, Missing when out of range.
	pub fn get(&self, index: usize) -> Value {
		match self {
			ValueBlock::Heterogeneous(block) => block.get(index).cloned().unwrap_or(Value::Missing),
			ValueBlock::Bitset(block) => block.get_value(index),
		}
	}

	pub fn get_type(&self, index: usize) -> Type {
		match self {
			ValueBlock::Heterogeneous(block) => block.get(index).map(Value::get_type).unwrap_or(Type::Missing),
			ValueBlock::Bitset(block) => match block.get(index) {
				Some(_) => Type::Boolean,
				None => Type::Missing,
			},
		}
	}

	/// Borrowing view of the block as parallel arrays of tags and values.
	///
	/// Heterogeneous blocks are viewed in place; bitset blocks are
	/// materialised once.
	pub fn extract(&self) -> DeblockedValues<'_> {
		match self {
			ValueBlock::Heterogeneous(block) => DeblockedValues {
				tags: block.iter().map(Value::get_type).collect(),
				values: Cow::Borrowed(block.values()),
			},
			ValueBlock::Bitset(block) => {
				let values: Vec<Value> = (0..block.len()).map(|i| block.get_value(i)).collect();
				DeblockedValues {
					tags: values.iter().map(Value::get_type).collect(),
					values: Cow::Owned(values),
				}
			}
		}
	}

	pub fn as_bitset(&self) -> Option<&BitsetBlock> {
		match self {
			ValueBlock::Bitset(block) => Some(block),
			ValueBlock::Heterogeneous(_) => None,
		}
	}

	/// Views the block as a mask.
	///
	/// Bitset blocks are borrowed; heterogeneous blocks are accepted when
	/// every element is Boolean or Missing.
	pub fn to_bitset(&self, operation: &'static str, argument: usize) -> Result<Cow<'_, BitsetBlock>> {
		match self {
			ValueBlock::Bitset(block) => Ok(Cow::Borrowed(block)),
			ValueBlock::Heterogeneous(block) => {
				let mut result = BitsetBlock::with_capacity(block.len());
				for value in block.iter() {
					match value {
						Value::Boolean(b) => result.push(*b),
						Value::Missing => result.push_missing(),
						other => {
							return Err(Error::type_mismatch(
								operation,
								argument,
								"boolean block",
								other.get_type(),
							));
						}
					}
				}
				Ok(Cow::Owned(result))
			}
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
		(0..self.len()).map(|i| self.get(i))
	}
}

impl From<HeterogeneousBlock> for ValueBlock {
	fn from(block: HeterogeneousBlock) -> Self {
		ValueBlock::Heterogeneous(block)
	}
}

impl From<BitsetBlock> for ValueBlock {
	fn from(block: BitsetBlock) -> Self {
		ValueBlock::Bitset(block)
	}
}

impl From<Vec<Value>> for ValueBlock {
	fn from(values: Vec<Value>) -> Self {
		ValueBlock::Heterogeneous(HeterogeneousBlock::from_values(values))
	}
}

impl Display for ValueBlock {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("[")?;
		for (i, value) in self.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{value}")?;
		}
		f.write_str("]")
	}
}

/// Parallel tag and value arrays extracted from a block.
///
/// Only valid while the source block is alive.
#[derive(Debug)]
pub struct DeblockedValues<'a> {
	tags: Vec<Type>,
	values: Cow<'a, [Value]>,
}

impl<'a> DeblockedValues<'a> {
	pub fn count(&self) -> usize {
		self.values.len()
	}

	pub fn tags(&self) -> &[Type] {
		&self.tags
	}

	pub fn values(&self) -> &[Value] {
		&self.values
	}

	pub fn get(&self, index: usize) -> Option<(Type, &Value)> {
		Some((*self.tags.get(index)?, self.values.get(index)?))
	}

	pub fn iter(&self) -> impl Iterator<Item = (Type, &Value)> + '_ {
		self.tags.iter().copied().zip(self.values.iter())
	}
}

impl Index<usize> for DeblockedValues<'_> {
	type Output = Value;

	fn index(&self, index: usize) -> &Self::Output {
		&self.values[index]
	}
}
