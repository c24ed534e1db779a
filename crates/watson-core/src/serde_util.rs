//! Field-level serde helpers for response DTOs.

use serde::{Deserialize, Deserializer};

/// Read `null` the same as a missing field. Services send `null` for empty
/// lists and maps. Use with
/// `#[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]`.
pub fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}
