//! serde 補助

use serde::{Deserialize, Deserializer};

/// JSON の `null` をデフォルト値として読む
///
/// `#[serde(default, deserialize_with = "null_as_default")]` と組み合わせて、
/// キーが無い場合と `null` の場合を同じ扱いにする。
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
