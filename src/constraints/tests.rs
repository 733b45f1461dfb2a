//! Constraint miner tests

use super::*;
use crate::types::{DocType, ElementType};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

// ============================================================================
// Valid Values Tests
// ============================================================================

#[test]
fn test_valid_values_block() {
    let help = "Order type.\nValid values:\n- \"market\" - Market order\n- \"limit\" - Limit order\nCase sensitive.";
    let mined = mine_parameter_constraints(help, DocType::String);

    assert_eq!(
        mined.schema.to_json(),
        json!({
            "type": "string",
            "enum": ["market", "limit"],
            "description": "Order type.\nCase sensitive."
        })
    );
    assert_eq!(mined.description.as_deref(), Some("Order type.\nCase sensitive."));
}

#[test]
fn test_malformed_bullet_discards_whole_block() {
    let help = "Valid values:\n- \"a\" - first\n- b - second";
    let mined = mine_parameter_constraints(help, DocType::String);

    assert_eq!(mined.schema.enum_values, None);
    assert_eq!(mined.description.as_deref(), Some(help));
}

#[test]
fn test_numeric_valid_values_are_typed() {
    let help = "Valid values:\n* \"1\" - one\n* \"5\" - five";
    let mined = mine_parameter_constraints(help, DocType::Numeric);

    assert_eq!(mined.schema.enum_values, Some(vec![json!(1), json!(5)]));
    assert_eq!(mined.description, None);
}

#[test]
fn test_untyped_value_discards_block() {
    let help = "Valid values:\n- \"1\" - one\n- \"many\" - several";
    let mined = mine_parameter_constraints(help, DocType::Numeric);

    assert_eq!(mined.schema.enum_values, None);
}

#[test]
fn test_header_without_bullets_is_ignored() {
    let mined = mine_parameter_constraints("Valid values:\nsee docs", DocType::String);
    assert_eq!(mined.schema.enum_values, None);
    assert_eq!(mined.description.as_deref(), Some("Valid values:\nsee docs"));
}

// ============================================================================
// Bounds and Defaults Tests
// ============================================================================

#[test]
fn test_minimum_and_maximum() {
    let help = "Number of entries. Minimum: 1. Maximum value is 100.";
    let mined = mine_parameter_constraints(help, DocType::Numeric);

    assert_eq!(
        mined.schema.to_json(),
        json!({
            "type": "integer",
            "minimum": 1,
            "maximum": 100,
            "description": "Number of entries."
        })
    );
}

#[test]
fn test_bounds_order_independent() {
    let a = mine_parameter_constraints("Maximum: 10. Minimum: 2.", DocType::Numeric);
    let b = mine_parameter_constraints("Minimum: 2. Maximum: 10.", DocType::Numeric);

    assert_eq!(a.schema, b.schema);
    assert_eq!(a.description, None);
}

#[test]
fn test_float_bounds() {
    let mined = mine_parameter_constraints("Minimum: 0.5", DocType::Float);
    assert_eq!(
        mined.schema.to_json(),
        json!({"type": "number", "format": "float", "minimum": 0.5})
    );
}

#[test_case("Page size. Default: 50.", DocType::Numeric, json!(50) ; "numeric default")]
#[test_case("Defaults to false", DocType::Boolean, json!(false) ; "boolean default")]
#[test_case("Default is \"all\".", DocType::String, json!("all") ; "quoted string default")]
#[test_case("Default value is 0.5.", DocType::Float, json!(0.5) ; "float default")]
fn test_default(help: &str, doc_type: DocType, expected: serde_json::Value) {
    let mined = mine_parameter_constraints(help, doc_type);
    assert_eq!(mined.schema.default, Some(expected));
}

#[test]
fn test_default_is_stripped_from_description() {
    let mined = mine_parameter_constraints("Page size. Default: 50.", DocType::Numeric);
    assert_eq!(mined.description.as_deref(), Some("Page size."));
}

#[test]
fn test_untyped_default_passes_through() {
    let help = "Default: abc.";
    let mined = mine_parameter_constraints(help, DocType::Numeric);

    assert_eq!(mined.schema.default, None);
    assert_eq!(mined.description.as_deref(), Some(help));
}

#[test]
fn test_returns_at_most_capped() {
    let mined = mine_parameter_constraints(
        "Returns at most 50 trades, capped at 1000.",
        DocType::Numeric,
    );

    assert_eq!(
        mined.schema.to_json(),
        json!({"type": "integer", "default": 50, "maximum": 1000})
    );
    assert_eq!(mined.description, None);
}

// ============================================================================
// Type Vocabulary Tests
// ============================================================================

#[test]
fn test_list_constraints_apply_to_items() {
    let help = "Valid values:\n- \"a\" - A\n- \"b\" - B\nDefault: a,b";
    let mined = mine_parameter_constraints(help, DocType::ListOf(ElementType::String));

    assert_eq!(
        mined.schema.to_json(),
        json!({
            "type": "array",
            "items": {"type": "string", "enum": ["a", "b"]},
            "default": ["a", "b"]
        })
    );
}

#[test_case("Default: a, b", ElementType::String, json!(["a", "b"]) ; "strings after comma space")]
#[test_case("Default: 1, 2.", ElementType::Integer, json!([1, 2]) ; "integers with trailing period")]
#[test_case("Defaults to \"x\", \"y\"", ElementType::String, json!(["x", "y"]) ; "quoted items")]
#[test_case("Default: 0.5 , 1.5", ElementType::Float, json!([0.5, 1.5]) ; "floats with spaces")]
fn test_list_default_items(help: &str, element: ElementType, expected: serde_json::Value) {
    let mined = mine_parameter_constraints(help, DocType::ListOf(element));

    assert_eq!(mined.schema.default, Some(expected));
    assert_eq!(mined.description, None);
}

#[test]
fn test_list_default_keeps_following_sentence() {
    let mined = mine_parameter_constraints(
        "Pairs to query. Default: a, b. Case sensitive.",
        DocType::ListOf(ElementType::String),
    );

    assert_eq!(mined.schema.default, Some(json!(["a", "b"])));
    assert_eq!(mined.description.as_deref(), Some("Pairs to query. Case sensitive."));
}

#[test]
fn test_timestamp_base_and_override() {
    let mined = mine_parameter_constraints("", DocType::Timestamp);
    assert_eq!(mined.schema.to_json(), json!({"type": "integer", "minimum": 0}));

    let mined = mine_parameter_constraints("Minimum: 5", DocType::Timestamp);
    assert_eq!(mined.schema.minimum, Some(5.into()));
}

#[test]
fn test_plain_text_passes_through() {
    let mined = mine_parameter_constraints("  Asset pair   to query ", DocType::String);
    assert_eq!(mined.description.as_deref(), Some("Asset pair to query"));
    assert_eq!(mined.schema.description.as_deref(), Some("Asset pair to query"));
}

#[test]
fn test_declared_tag_errors() {
    assert!(mine_declared_parameter("Minimum: 1", "decimal").is_err());

    let mined = mine_declared_parameter("Minimum: 1", "numeric").unwrap();
    assert_eq!(mined.schema.minimum, Some(1.into()));
}
