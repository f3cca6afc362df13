// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use vblock_builtin::{BuiltinConfig, BuiltinRegistry, EmptyAggregate, Operand};
use vblock_type::{BitsetBlock, Error, Value};

#[test]
fn test_config_from_json() {
	let config: BuiltinConfig = serde_json::from_str(r#"{"empty_min_max":"error","max_fill_len":8}"#).unwrap();
	assert_eq!(config, BuiltinConfig::default().empty_min_max(EmptyAggregate::Error).max_fill_len(8));
}

#[test]
fn test_config_empty_json_is_default() {
	let config: BuiltinConfig = serde_json::from_str("{}").unwrap();
	assert_eq!(config, BuiltinConfig::default());
}

#[test]
fn test_config_round_trips_through_registry() {
	let config: BuiltinConfig = serde_json::from_str(r#"{"max_fill_len":3}"#).unwrap();
	let registry = BuiltinRegistry::new(config);
	assert_eq!(registry.config().max_fill_len, 3);

	let value = Value::Boolean(true);
	let ok_len = Value::Int32(3);
	let result = registry.call("valueBlockNewFill", &[Operand::Value(&value), Operand::Value(&ok_len)]).unwrap();
	assert_eq!(result, Value::block(BitsetBlock::repeat(3, true)));

	let too_long = Value::Int32(4);
	assert!(matches!(
		registry.call("valueBlockNewFill", &[Operand::Value(&value), Operand::Value(&too_long)]),
		Err(Error::InvalidArgument { .. })
	));
}

#[test]
fn test_serialize_result_block() {
	let value = Value::block(vec![Value::Int32(1), Value::Missing]);
	let json = serde_json::to_value(&value).unwrap();
	assert_eq!(json, serde_json::json!({"ValueBlock": {"Heterogeneous": {"values": [{"Int32": 1}, "Missing"]}}}));
}
