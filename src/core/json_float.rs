//! JSON encoding for `f64` fields that may hold NaN or infinities
//!
//! Finite values stay plain JSON numbers. Non-finite values are written as the
//! strings `"NaN"`, `"Infinity"` and `"-Infinity"` (the names JS `Number()`
//! parses back). `null` reads as NaN, which is what `JSON.stringify` writes.
//!
//! Usage: `#[serde(with = "crate::core::json_float")]`

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

const NAN: &str = "NaN";
const INFINITY: &str = "Infinity";
const NEG_INFINITY: &str = "-Infinity";

pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else if value.is_nan() {
        serializer.serialize_str(NAN)
    } else if *value > 0.0 {
        serializer.serialize_str(INFINITY)
    } else {
        serializer.serialize_str(NEG_INFINITY)
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    deserializer.deserialize_any(JsonFloatVisitor)
}

struct JsonFloatVisitor;

impl<'de> Visitor<'de> for JsonFloatVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number, null, \"NaN\", \"Infinity\" or \"-Infinity\"")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        match v {
            NAN => Ok(f64::NAN),
            INFINITY => Ok(f64::INFINITY),
            NEG_INFINITY => Ok(f64::NEG_INFINITY),
            _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
        Ok(f64::NAN)
    }

    fn visit_none<E: de::Error>(self) -> Result<f64, E> {
        Ok(f64::NAN)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super")]
        v: f64,
    }

    fn encode(v: f64) -> String {
        serde_json::to_string(&Wrapper { v }).unwrap()
    }

    fn decode(json: &str) -> f64 {
        serde_json::from_str::<Wrapper>(json).unwrap().v
    }

    #[test]
    fn finite_values_stay_numbers() {
        assert_eq!(encode(0.1), r#"{"v":0.1}"#);
        assert_eq!(decode(r#"{"v":0.1}"#), 0.1);
        assert_eq!(decode(r#"{"v":-3}"#), -3.0);
    }

    #[test]
    fn non_finite_values_use_names() {
        assert_eq!(encode(f64::NAN), r#"{"v":"NaN"}"#);
        assert_eq!(encode(f64::INFINITY), r#"{"v":"Infinity"}"#);
        assert_eq!(encode(f64::NEG_INFINITY), r#"{"v":"-Infinity"}"#);

        assert!(decode(r#"{"v":"NaN"}"#).is_nan());
        assert_eq!(decode(r#"{"v":"Infinity"}"#), f64::INFINITY);
        assert_eq!(decode(r#"{"v":"-Infinity"}"#), f64::NEG_INFINITY);
    }

    #[test]
    fn null_reads_as_nan() {
        assert!(decode(r#"{"v":null}"#).is_nan());
    }

    #[test]
    fn unknown_strings_are_rejected() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"v":"big"}"#).is_err());
    }
}
