//! Lossless JSON helpers.
//!
//! Structured payload fields sent to the platform (`postDatas`, `scrapData`,
//! `chatIds`) are embedded into form bodies as JSON strings. The platform's
//! IDs are 64-bit-plus integers, so those strings must be produced by an
//! encoder that never rounds numbers through a float. `serde_json` with the
//! `arbitrary_precision` feature keeps integer literals of any width exact
//! when values pass through [`serde_json::Value`].

use serde::Serialize;

/// Serializes `value` to a JSON string without losing integer precision.
pub fn stringify_lossless<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Parses a JSON string while preserving integer literals exactly.
pub fn parse_lossless(text: &str) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LinkId;

    #[test]
    fn empty_and_null_values() {
        assert_eq!(stringify_lossless::<[i64]>(&[]).unwrap(), "[]");
        assert_eq!(stringify_lossless(&serde_json::Value::Null).unwrap(), "null");
    }

    #[test]
    fn link_ids_survive_unrounded() {
        let ids = vec![LinkId(9_007_199_254_740_993), LinkId(i64::MAX)];
        assert_eq!(
            stringify_lossless(&ids).unwrap(),
            "[9007199254740993,9223372036854775807]"
        );
    }

    #[test]
    fn oversized_integers_round_trip_through_value() {
        // Wider than u64; only exact with arbitrary precision enabled.
        let text = r#"{"id":340282366920938463463374607431768211455}"#;
        let value = parse_lossless(text).unwrap();
        assert_eq!(stringify_lossless(&value).unwrap(), text);
    }

    #[test]
    fn nested_structures_round_trip() {
        let text = r#"[{"chatIds":[18446744073709551616],"note":"a b"}]"#;
        let value = parse_lossless(text).unwrap();
        assert_eq!(stringify_lossless(&value).unwrap(), text);
    }
}
