pub mod auth;
pub mod banners;
pub mod products;
pub mod top_offers;

use serde::{Deserialize, Deserializer};

/// Tells an explicit `null` apart from a missing field.
///
/// Use together with `#[serde(default)]`: a missing field stays `None`,
/// `null` becomes `Some(None)`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// `Some` only for a value with non-whitespace content.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
