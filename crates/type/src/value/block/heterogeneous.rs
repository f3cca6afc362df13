// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::ops::Index;

use serde::Serialize;

use crate::value::Value;

/// Block of arbitrarily tagged values.
///
/// The block owns every value it stores; deep values are released when the
/// block is dropped.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct HeterogeneousBlock {
	values: Vec<Value>,
}

impl HeterogeneousBlock {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			values: Vec::with_capacity(capacity),
		}
	}

	pub fn from_values(values: Vec<Value>) -> Self {
		Self {
			values,
		}
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Appends a value the caller already owns.
	pub fn push(&mut self, value: Value) {
		self.values.push(value);
	}

	/// Appends a deep copy of a borrowed value.
	pub fn push_copy(&mut self, value: &Value) {
		self.values.push(value.clone());
	}

	pub fn get(&self, index: usize) -> Option<&Value> {
		self.values.get(index)
	}

	pub fn values(&self) -> &[Value] {
		&self.values
	}

	pub fn iter(&self) -> impl Iterator<Item = &Value> + '_ {
		self.values.iter()
	}
}

impl Index<usize> for HeterogeneousBlock {
	type Output = Value;

	fn index(&self, index: usize) -> &Self::Output {
		&self.values[index]
	}
}

impl FromIterator<Value> for HeterogeneousBlock {
	fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
		Self {
			values: iter.into_iter().collect(),
		}
	}
}
