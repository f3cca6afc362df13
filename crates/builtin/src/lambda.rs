// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use vblock_type::{Result, Value};

/// Single-argument scalar function owned by the expression evaluator.
///
/// The block kernels never look inside a lambda; they bind one element and
/// take back one value.
pub trait Lambda {
	fn call(&self, arg: &Value) -> Result<Value>;
}

impl<F> Lambda for F
where
	F: Fn(&Value) -> Result<Value>,
{
	fn call(&self, arg: &Value) -> Result<Value> {
		self(arg)
	}
}
