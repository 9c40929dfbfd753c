//! Wire form of prices.
//!
//! JSON has no literal for non-finite numbers, so they are written as the strings
//! `"NaN"`, `"Infinity"` and `"-Infinity"`. A `null` price, which is what JSON
//! writers without non-finite support emit, reads back as NaN.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

const NAN: &str = "NaN";
const INFINITY: &str = "Infinity";
const NEG_INFINITY: &str = "-Infinity";

pub(crate) fn serialize<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.is_finite() {
        serializer.serialize_f64(*price)
    } else if price.is_nan() {
        serializer.serialize_str(NAN)
    } else if price.is_sign_positive() {
        serializer.serialize_str(INFINITY)
    } else {
        serializer.serialize_str(NEG_INFINITY)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(f64),
    Text(String),
}

pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Option::<Repr>::deserialize(deserializer)? {
        Some(Repr::Number(price)) => Ok(price),
        Some(Repr::Text(text)) => match text.as_str() {
            NAN => Ok(f64::NAN),
            INFINITY => Ok(f64::INFINITY),
            NEG_INFINITY => Ok(f64::NEG_INFINITY),
            other => Err(D::Error::custom(format!("invalid price: {other:?}"))),
        },
        None => Ok(f64::NAN),
    }
}
