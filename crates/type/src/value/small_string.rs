// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Debug, Display, Formatter};

use serde::{Serialize, Serializer};

/// Maximum number of bytes a [`SmallString`] stores inline.
pub const SMALL_STRING_CAPACITY: usize = 7;

/// Short UTF-8 string stored inline, without ownership of any allocation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SmallString {
	len: u8,
	bytes: [u8; SMALL_STRING_CAPACITY],
}

impl SmallString {
	/// Returns `None` when `s` does not fit inline.
	pub fn new(s: &str) -> Option<Self> {
		if s.len() > SMALL_STRING_CAPACITY {
			return None;
		}
		let mut bytes = [0u8; SMALL_STRING_CAPACITY];
		bytes[..s.len()].copy_from_slice(s.as_bytes());
		Some(Self {
			len: s.len() as u8,
			bytes,
		})
	}

	pub fn len(&self) -> usize {
		self.len as usize
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes[..self.len()]
	}

	pub fn as_str(&self) -> &str {
		// only ever built from a &str, so the prefix is valid UTF-8
		std::str::from_utf8(self.as_bytes()).unwrap_or_default()
	}
}

impl Debug for SmallString {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Debug::fmt(self.as_str(), f)
	}
}

impl Display for SmallString {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Serialize for SmallString {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}
