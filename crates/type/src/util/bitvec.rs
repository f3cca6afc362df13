// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Debug, Formatter};

use serde::{Deserialize, Serialize};

/// Packed vector of bits, eight per byte, least significant bit first.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitVec {
	bits: Vec<u8>,
	len: usize,
}

impl BitVec {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			bits: Vec::with_capacity(capacity.div_ceil(8)),
			len: 0,
		}
	}

	pub fn repeat(len: usize, value: bool) -> Self {
		let fill = if value {
			0xFF
		} else {
			0x00
		};
		let mut result = Self {
			bits: vec![fill; len.div_ceil(8)],
			len,
		};
		result.clear_tail();
		result
	}

	pub fn from_slice(values: &[bool]) -> Self {
		let mut result = Self::with_capacity(values.len());
		for &value in values {
			result.push(value);
		}
		result
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn push(&mut self, value: bool) {
		let byte = self.len / 8;
		if byte == self.bits.len() {
			self.bits.push(0);
		}
		if value {
			self.bits[byte] |= 1 << (self.len % 8);
		}
		self.len += 1;
	}

	pub fn get(&self, idx: usize) -> bool {
		assert!(idx < self.len, "bit index {idx} out of range for length {}", self.len);
		self.bits[idx / 8] & (1 << (idx % 8)) != 0
	}

	pub fn count_ones(&self) -> usize {
		self.bits.iter().map(|b| b.count_ones() as usize).sum()
	}

	pub fn all(&self) -> bool {
		self.count_ones() == self.len
	}

	pub fn iter(&self) -> BitVecIter<'_> {
		BitVecIter {
			inner: self,
			pos: 0,
		}
	}

	/// Bitwise AND; both vectors must have the same length.
	pub fn and(&self, other: &Self) -> Self {
		debug_assert_eq!(self.len, other.len);
		Self {
			bits: self.bits.iter().zip(&other.bits).map(|(l, r)| l & r).collect(),
			len: self.len,
		}
	}

	/// Bitwise OR; both vectors must have the same length.
	pub fn or(&self, other: &Self) -> Self {
		debug_assert_eq!(self.len, other.len);
		Self {
			bits: self.bits.iter().zip(&other.bits).map(|(l, r)| l | r).collect(),
			len: self.len,
		}
	}

	pub fn not(&self) -> Self {
		let mut result = Self {
			bits: self.bits.iter().map(|b| !b).collect(),
			len: self.len,
		};
		result.clear_tail();
		result
	}

	// Bits past `len` in the last byte must stay zero for `count_ones`.
	fn clear_tail(&mut self) {
		let rem = self.len % 8;
		if rem != 0 {
			if let Some(last) = self.bits.last_mut() {
				*last &= (1u8 << rem) - 1;
			}
		}
	}
}

impl Debug for BitVec {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("BitVec[")?;
		for bit in self.iter() {
			f.write_str(if bit {
				"1"
			} else {
				"0"
			})?;
		}
		f.write_str("]")
	}
}

pub struct BitVecIter<'a> {
	inner: &'a BitVec,
	pos: usize,
}

impl Iterator for BitVecIter<'_> {
	type Item = bool;

	fn next(&mut self) -> Option<Self::Item> {
		if self.pos >= self.inner.len {
			return None;
		}
		let bit = self.inner.get(self.pos);
		self.pos += 1;
		Some(bit)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.inner.len - self.pos;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for BitVecIter<'_> {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_repeat() {
		let bv = BitVec::repeat(10, true);
		assert_eq!(bv.len(), 10);
		assert_eq!(bv.count_ones(), 10);
		assert!(bv.all());

		let bv = BitVec::repeat(10, false);
		assert_eq!(bv.count_ones(), 0);
		assert!(!bv.all());
	}

	#[test]
	fn test_push_and_get() {
		let bv = BitVec::from_slice(&[true, false, true, true, false, false, false, false, true]);
		assert_eq!(bv.len(), 9);
		assert!(bv.get(0));
		assert!(!bv.get(1));
		assert!(bv.get(8));
		assert_eq!(bv.count_ones(), 4);
	}

	#[test]
	fn test_not_keeps_tail_clear() {
		let bv = BitVec::from_slice(&[true, false, true]).not();
		assert_eq!(bv.iter().collect::<Vec<_>>(), vec![false, true, false]);
		assert_eq!(bv.count_ones(), 1);
	}

	#[test]
	fn test_and_or() {
		let l = BitVec::from_slice(&[true, false, true, false]);
		let r = BitVec::from_slice(&[true, true, false, false]);
		assert_eq!(l.and(&r).iter().collect::<Vec<_>>(), vec![true, false, false, false]);
		assert_eq!(l.or(&r).iter().collect::<Vec<_>>(), vec![true, true, true, false]);
	}

	#[test]
	#[should_panic]
	fn test_get_out_of_range() {
		BitVec::repeat(2, true).get(2);
	}
}
