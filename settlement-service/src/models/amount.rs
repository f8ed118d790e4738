//! Raw numeric inputs and identifiers for settlement-service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// An un-coerced numeric field exactly as the caller sent it.
///
/// Callers send numbers, numeric strings, nulls and occasionally garbage; the engine
/// never rejects any of them. Use [`parse_number_or_default`] (or [`RawAmount::or_zero`])
/// to obtain a `Decimal`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAmount(Value);

impl RawAmount {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Coerce with a default of zero.
    pub fn or_zero(&self) -> Decimal {
        parse_number_or_default(self, Decimal::ZERO)
    }
}

impl From<Decimal> for RawAmount {
    fn from(d: Decimal) -> Self {
        Self(Value::String(d.to_string()))
    }
}

impl From<i64> for RawAmount {
    fn from(n: i64) -> Self {
        Self(Value::from(n))
    }
}

impl From<i32> for RawAmount {
    fn from(n: i32) -> Self {
        Self(Value::from(n))
    }
}

impl From<f64> for RawAmount {
    fn from(n: f64) -> Self {
        Self(Value::from(n))
    }
}

impl From<&str> for RawAmount {
    fn from(s: &str) -> Self {
        Self(Value::String(s.to_string()))
    }
}

/// Coerce a raw numeric field to a `Decimal`.
///
/// - JSON numbers and numeric strings (surrounding whitespace allowed, plain or
///   scientific notation) parse exactly.
/// - Null, booleans, arrays, objects, empty or non-numeric strings, and numbers outside
///   the `Decimal` range yield `default`.
/// - Negative values are returned as-is; signed fields (adjustments, payments) rely on
///   this. See [`parse_non_negative_or_default`] for the non-negative fields.
///
/// Never fails.
pub fn parse_number_or_default(raw: &RawAmount, default: Decimal) -> Decimal {
    match raw.as_value() {
        Value::Number(n) => parse_text(&n.to_string()).unwrap_or(default),
        Value::String(s) => parse_text(s.trim()).unwrap_or(default),
        _ => default,
    }
}

/// Optional-field form of [`parse_number_or_default`]; an absent field is the default.
pub fn coerce_or_default(raw: Option<&RawAmount>, default: Decimal) -> Decimal {
    raw.map_or(default, |r| parse_number_or_default(r, default))
}

/// [`parse_number_or_default`] for fields that cannot be negative (quantities, rates,
/// line discounts, tax amounts): a negative value also yields `default`.
pub fn parse_non_negative_or_default(raw: &RawAmount, default: Decimal) -> Decimal {
    match parse_number_or_default(raw, default) {
        d if d < Decimal::ZERO => default,
        d => d,
    }
}

/// Optional-field form of [`parse_non_negative_or_default`].
pub fn coerce_non_negative_or_default(raw: Option<&RawAmount>, default: Decimal) -> Decimal {
    raw.map_or(default, |r| parse_non_negative_or_default(r, default))
}

fn parse_text(s: &str) -> Option<Decimal> {
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
        .map(|d| d.normalize())
}

/// Identifier of a product, product detail or existing item row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Int(n)
    }
}

impl From<i32> for RecordId {
    fn from(n: i32) -> Self {
        RecordId::Int(i64::from(n))
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn raw(v: Value) -> RawAmount {
        RawAmount::new(v)
    }

    #[test]
    fn test_numbers_parse_exactly() {
        assert_eq!(raw(json!(2)).or_zero(), dec!(2));
        assert_eq!(raw(json!(0.1)).or_zero(), dec!(0.1));
        assert_eq!(raw(json!(-12.5)).or_zero(), dec!(-12.5));
    }

    #[test]
    fn test_numeric_strings_parse() {
        assert_eq!(raw(json!("150.00")).or_zero(), dec!(150));
        assert_eq!(raw(json!("  7 ")).or_zero(), dec!(7));
        assert_eq!(raw(json!("1e3")).or_zero(), dec!(1000));
    }

    #[test]
    fn test_malformed_values_default() {
        for v in [
            json!(null),
            json!(true),
            json!(""),
            json!("abc"),
            json!([1]),
            json!({"a": 1}),
        ] {
            assert_eq!(parse_number_or_default(&raw(v), dec!(9)), dec!(9));
        }
    }

    #[test]
    fn test_out_of_range_number_defaults() {
        assert_eq!(raw(json!(1e40)).or_zero(), Decimal::ZERO);
    }

    #[test]
    fn test_absent_field_defaults() {
        assert_eq!(coerce_or_default(None, Decimal::ZERO), Decimal::ZERO);
        let present = RawAmount::from(5);
        assert_eq!(coerce_or_default(Some(&present), Decimal::ZERO), dec!(5));
    }

    #[test]
    fn test_non_negative_rejects_negatives() {
        assert_eq!(parse_non_negative_or_default(&raw(json!(-3)), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(parse_non_negative_or_default(&raw(json!("-0.5")), dec!(1)), dec!(1));
        assert_eq!(parse_non_negative_or_default(&raw(json!("-0")), dec!(1)), Decimal::ZERO);
        assert_eq!(parse_non_negative_or_default(&raw(json!(4.25)), Decimal::ZERO), dec!(4.25));
        assert_eq!(parse_non_negative_or_default(&raw(json!("x")), dec!(2)), dec!(2));
        assert_eq!(coerce_non_negative_or_default(None, dec!(3)), dec!(3));
    }

    #[test]
    fn test_record_id_untagged() {
        let id: RecordId = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(id, RecordId::Int(42));
        let id: RecordId = serde_json::from_value(json!("p-1")).unwrap();
        assert_eq!(id, RecordId::Text("p-1".to_string()));
    }
}
