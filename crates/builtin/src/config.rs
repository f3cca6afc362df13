// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// Outcome of min/max when no element qualifies after masking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyAggregate {
	/// Return Missing, like sum does.
	#[default]
	Missing,
	/// Fail with `Error::EmptyAggregate`.
	Error,
}

/// Configuration shared by every builtin of a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuiltinConfig {
	pub empty_min_max: EmptyAggregate,
	/// Largest block `valueBlockNewFill` may build.
	pub max_fill_len: usize,
}

impl Default for BuiltinConfig {
	fn default() -> Self {
		Self {
			empty_min_max: EmptyAggregate::Missing,
			max_fill_len: i32::MAX as usize,
		}
	}
}

impl BuiltinConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn empty_min_max(mut self, empty_min_max: EmptyAggregate) -> Self {
		self.empty_min_max = empty_min_max;
		self
	}

	pub fn max_fill_len(mut self, max_fill_len: usize) -> Self {
		self.max_fill_len = max_fill_len;
		self
	}
}
