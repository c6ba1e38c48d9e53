//! Custom serde deserializers for loosely typed classification JSON
//!
//! Classification payloads come from a language model. Keys may be missing, set to
//! `null`, or spelled with unexpected casing; these helpers map such values onto the
//! documented defaults instead of rejecting the whole payload.

use std::fmt;
use std::result;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

use super::models::{ClassificationResult, Confidence};

/// Deserialize `T`, mapping an explicit `null` to `T::default()`
///
/// Combine with `#[serde(default)]` so that a missing key takes the same default.
///
/// ```
/// use pubsearch_parser::pubmed::deserializers::null_as_default;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Reply {
///     #[serde(default, deserialize_with = "null_as_default")]
///     labels: Vec<String>,
/// }
///
/// let reply: Reply = serde_json::from_str(r#"{"labels": null}"#).unwrap();
/// assert!(reply.labels.is_empty());
/// ```
pub fn null_as_default<'de, D, T>(deserializer: D) -> result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize the classification reason, mapping `null` to the placeholder text
pub(super) fn deserialize_reason<'de, D>(deserializer: D) -> result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let reason: Option<String> = Option::deserialize(deserializer)?;
    Ok(reason.unwrap_or_else(|| ClassificationResult::DEFAULT_REASON.to_string()))
}

impl<'de> Deserialize<'de> for Confidence {
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ConfidenceVisitor;

        impl Visitor<'_> for ConfidenceVisitor {
            type Value = Confidence;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a confidence level (high, medium or low) or a scalar")
            }

            fn visit_str<E>(self, value: &str) -> result::Result<Confidence, E>
            where
                E: de::Error,
            {
                Ok(match value.trim().to_ascii_lowercase().as_str() {
                    "high" => Confidence::High,
                    "medium" => Confidence::Medium,
                    _ => Confidence::Low,
                })
            }

            fn visit_bool<E>(self, _: bool) -> result::Result<Confidence, E>
            where
                E: de::Error,
            {
                Ok(Confidence::Low)
            }

            fn visit_i64<E>(self, _: i64) -> result::Result<Confidence, E>
            where
                E: de::Error,
            {
                Ok(Confidence::Low)
            }

            fn visit_u64<E>(self, _: u64) -> result::Result<Confidence, E>
            where
                E: de::Error,
            {
                Ok(Confidence::Low)
            }

            fn visit_f64<E>(self, _: f64) -> result::Result<Confidence, E>
            where
                E: de::Error,
            {
                Ok(Confidence::Low)
            }

            fn visit_unit<E>(self) -> result::Result<Confidence, E>
            where
                E: de::Error,
            {
                Ok(Confidence::Low)
            }

            fn visit_none<E>(self) -> result::Result<Confidence, E>
            where
                E: de::Error,
            {
                Ok(Confidence::Low)
            }
        }

        deserializer.deserialize_any(ConfidenceVisitor)
    }
}
