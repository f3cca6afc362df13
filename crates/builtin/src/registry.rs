// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use tracing::{debug, instrument};
use vblock_type::{CompareOp, Error, Result, Value};

use crate::{
	BlockFunction, BlockFunctionContext, BuiltinConfig, Operand,
	cell_block::{flat::CellBlockGetFlatValuesBlock, fold::CellFoldValuesF},
	value_block::{
		aggregate::{
			count::ValueBlockCount,
			min_max::{ValueBlockMax, ValueBlockMin},
			sum::ValueBlockSum,
		},
		apply::ValueBlockApplyLambda,
		combine::ValueBlockCombine,
		compare::ValueBlockCompareScalar,
		construct::{ValueBlockNewFill, ValueBlockSize},
		exists::ValueBlockExists,
		fill::{ValueBlockFillEmpty, ValueBlockFillEmptyBlock},
		logical::{ValueBlockLogicalAnd, ValueBlockLogicalNot, ValueBlockLogicalOr, ValueBlockNone},
	},
};

/// Name to builtin lookup used by the expression evaluator.
pub struct BuiltinRegistry {
	functions: HashMap<&'static str, Box<dyn BlockFunction>>,
	config: BuiltinConfig,
}

impl Default for BuiltinRegistry {
	fn default() -> Self {
		Self::new(BuiltinConfig::default())
	}
}

impl BuiltinRegistry {
	pub fn new(config: BuiltinConfig) -> Self {
		let mut result = Self {
			functions: HashMap::new(),
			config,
		};

		result.register("valueBlockExists", ValueBlockExists);
		result.register("valueBlockFillEmpty", ValueBlockFillEmpty);
		result.register("valueBlockFillEmptyBlock", ValueBlockFillEmptyBlock);
		result.register("valueBlockCount", ValueBlockCount);
		result.register("valueBlockSum", ValueBlockSum);
		result.register("valueBlockMin", ValueBlockMin);
		result.register("valueBlockMax", ValueBlockMax);
		result.register("valueBlockApplyLambda", ValueBlockApplyLambda);
		result.register("valueBlockLogicalAnd", ValueBlockLogicalAnd);
		result.register("valueBlockLogicalOr", ValueBlockLogicalOr);
		result.register("valueBlockLogicalNot", ValueBlockLogicalNot);
		result.register("valueBlockNone", ValueBlockNone);
		result.register("valueBlockNewFill", ValueBlockNewFill);
		result.register("valueBlockSize", ValueBlockSize);
		result.register("valueBlockCombine", ValueBlockCombine);
		result.register("valueBlockGtScalar", ValueBlockCompareScalar::new(CompareOp::Gt));
		result.register("valueBlockGteScalar", ValueBlockCompareScalar::new(CompareOp::Gte));
		result.register("valueBlockLtScalar", ValueBlockCompareScalar::new(CompareOp::Lt));
		result.register("valueBlockLteScalar", ValueBlockCompareScalar::new(CompareOp::Lte));
		result.register("valueBlockEqScalar", ValueBlockCompareScalar::new(CompareOp::Eq));
		result.register("valueBlockNeqScalar", ValueBlockCompareScalar::new(CompareOp::Neq));
		result.register("cellFoldValues_F", CellFoldValuesF);
		result.register("cellBlockGetFlatValuesBlock", CellBlockGetFlatValuesBlock);

		result
	}

	pub fn register<F>(&mut self, name: &'static str, function: F)
	where
		F: BlockFunction + 'static,
	{
		self.functions.insert(name, Box::new(function));
	}

	pub fn config(&self) -> &BuiltinConfig {
		&self.config
	}

	pub fn contains(&self, name: &str) -> bool {
		self.functions.contains_key(name)
	}

	/// Registered builtin names, sorted.
	pub fn names(&self) -> Vec<&'static str> {
		let mut names: Vec<_> = self.functions.keys().copied().collect();
		names.sort_unstable();
		names
	}

	/// Invokes builtin `name` with positional `args`.
	///
	/// Unknown names and wrong argument counts fail before the builtin runs.
	#[instrument(name = "builtin::call", level = "trace", skip(self, args), fields(args = args.len()))]
	pub fn call(&self, name: &str, args: &[Operand<'_>]) -> Result<Value> {
		let Some((&name, function)) = self.functions.get_key_value(name) else {
			debug!(function = name, "unknown builtin function");
			return Err(Error::UnknownFunction {
				name: name.to_string(),
			});
		};

		if args.len() != function.arity() {
			debug!(function = name, expected = function.arity(), actual = args.len(), "builtin arity mismatch");
			return Err(Error::ArityMismatch {
				name: name.to_string(),
				expected: function.arity(),
				actual: args.len(),
			});
		}

		function.call(BlockFunctionContext {
			name,
			args,
			config: &self.config,
		})
	}
}

#[cfg(test)]
mod tests {
	use vblock_type::BitsetBlock;

	use super::*;

	#[test]
	fn test_all_builtins_registered() {
		let registry = BuiltinRegistry::default();
		assert_eq!(registry.names().len(), 23);
		for name in [
			"valueBlockExists",
			"valueBlockSum",
			"valueBlockApplyLambda",
			"valueBlockNeqScalar",
			"cellFoldValues_F",
			"cellBlockGetFlatValuesBlock",
		] {
			assert!(registry.contains(name), "{name}");
		}
	}

	#[test]
	fn test_unknown_function() {
		let registry = BuiltinRegistry::default();
		assert_eq!(
			registry.call("valueBlockAvg", &[]).unwrap_err(),
			Error::UnknownFunction {
				name: "valueBlockAvg".to_string()
			}
		);
	}

	#[test]
	fn test_arity_mismatch() {
		let registry = BuiltinRegistry::default();
		let block = Value::block(BitsetBlock::from_bools(&[true]));
		assert_eq!(
			registry.call("valueBlockSum", &[Operand::Value(&block)]).unwrap_err(),
			Error::ArityMismatch {
				name: "valueBlockSum".to_string(),
				expected: 2,
				actual: 1
			}
		);
	}

	#[test]
	fn test_scalar_where_block_expected() {
		let registry = BuiltinRegistry::default();
		let scalar = Value::Int32(1);
		assert!(matches!(
			registry.call("valueBlockCount", &[Operand::Value(&scalar)]),
			Err(Error::TypeMismatch { .. })
		));
	}

	#[test]
	fn test_call_uses_config() {
		let registry = BuiltinRegistry::new(BuiltinConfig::default().max_fill_len(2));
		let value = Value::Boolean(true);
		let len = Value::Int32(3);
		assert!(matches!(
			registry.call("valueBlockNewFill", &[Operand::Value(&value), Operand::Value(&len)]),
			Err(Error::InvalidArgument { .. })
		));
	}
}
