// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Debug};

use serde::Serialize;

use crate::{util::BitVec, value::Value};

/// Block restricted to Boolean and Missing elements, used as a selection
/// mask.
///
/// Stored as two bit vectors: the boolean payload and a mask of which
/// positions are defined (not Missing).
#[derive(Clone, Default, PartialEq, Serialize)]
pub struct BitsetBlock {
	data: BitVec,
	defined: BitVec,
}

impl Debug for BitsetBlock {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BitsetBlock").field("data", &self.data).field("defined", &self.defined).finish()
	}
}

impl BitsetBlock {
	pub fn new(data: BitVec, defined: BitVec) -> Self {
		debug_assert_eq!(data.len(), defined.len());
		Self {
			data,
			defined,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: BitVec::with_capacity(capacity),
			defined: BitVec::with_capacity(capacity),
		}
	}

	/// Block of `len` copies of `value`.
	pub fn repeat(len: usize, value: bool) -> Self {
		Self {
			data: BitVec::repeat(len, value),
			defined: BitVec::repeat(len, true),
		}
	}

	pub fn from_bools(data: &[bool]) -> Self {
		Self {
			data: BitVec::from_slice(data),
			defined: BitVec::repeat(data.len(), true),
		}
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.data.len(), self.defined.len());
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn push(&mut self, value: bool) {
		self.data.push(value);
		self.defined.push(true);
	}

	pub fn push_missing(&mut self) {
		self.data.push(false);
		self.defined.push(false);
	}

	pub fn push_option(&mut self, value: Option<bool>) {
		match value {
			Some(value) => self.push(value),
			None => self.push_missing(),
		}
	}

	pub fn get(&self, index: usize) -> Option<bool> {
		if self.is_defined(index) {
			Some(self.data.get(index))
		} else {
			None
		}
	}

	pub fn get_value(&self, index: usize) -> Value {
		match self.get(index) {
			Some(b) => Value::Boolean(b),
			None => Value::Missing,
		}
	}

	pub fn is_defined(&self, index: usize) -> bool {
		index < self.len() && self.defined.get(index)
	}

	pub fn is_fully_defined(&self) -> bool {
		self.defined.all()
	}

	/// True only for defined `true` entries; Missing is not true.
	pub fn is_true(&self, index: usize) -> bool {
		self.get(index) == Some(true)
	}

	pub fn count_true(&self) -> usize {
		self.data.and(&self.defined).count_ones()
	}

	pub fn data(&self) -> &BitVec {
		&self.data
	}

	pub fn defined(&self) -> &BitVec {
		&self.defined
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<bool>> + '_ {
		self.data.iter().zip(self.defined.iter()).map(|(v, defined)| {
			if defined {
				Some(v)
			} else {
				None
			}
		})
	}
}

impl FromIterator<Option<bool>> for BitsetBlock {
	fn from_iter<T: IntoIterator<Item = Option<bool>>>(iter: T) -> Self {
		let iter = iter.into_iter();
		let mut result = Self::with_capacity(iter.size_hint().0);
		for value in iter {
			result.push_option(value);
		}
		result
	}
}
