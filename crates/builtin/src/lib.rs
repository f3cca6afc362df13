// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Vectorized builtins over value blocks and cell blocks.
//!
//! Every builtin is a stateless [`BlockFunction`] registered under the name the
//! expression evaluator calls it by. Kernels borrow their operand blocks and
//! return freshly owned results.

use vblock_type::{Result, Value};

pub mod cell_block;
pub mod config;
pub mod lambda;
mod operand;
pub mod registry;
pub mod value_block;

pub use config::{BuiltinConfig, EmptyAggregate};
pub use lambda::Lambda;
pub use operand::Operand;
pub use registry::BuiltinRegistry;

pub struct BlockFunctionContext<'a> {
	pub name: &'static str,
	pub args: &'a [Operand<'a>],
	pub config: &'a BuiltinConfig,
}

pub trait BlockFunction: Send + Sync {
	/// Number of positional arguments the builtin takes.
	fn arity(&self) -> usize;

	fn call(&self, ctx: BlockFunctionContext<'_>) -> Result<Value>;
}
