// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Tagged values and value blocks.
//!
//! Every element handled by the block kernels is a [`Value`]: a closed tagged
//! union whose tag ([`Type`]) decides how the payload is compared, copied and
//! released. Blocks ([`ValueBlock`], [`CellBlock`]) are themselves values so
//! the evaluator can pass them around through the same slots as scalars.

pub mod error;
pub mod util;
pub mod value;

pub use error::{Error, Result};
pub use value::{
	Decimal, SMALL_STRING_CAPACITY, SmallString, Type, Value,
	block::{BitsetBlock, CellBlock, DeblockedValues, HeterogeneousBlock, ValueBlock},
	compare::CompareOp,
};
