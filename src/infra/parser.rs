use crate::types::{UpdateError, UpdateResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// JSON文字列をSerdeでDeserializeできる型に変換する
///
/// # 引数
/// - `json_str`: 解析対象のJSON文字列
/// - `context`: エラーメッセージに含める解析対象の説明
pub fn parse_json_str<T: DeserializeOwned>(json_str: &str, context: &str) -> UpdateResult<T> {
    serde_json::from_str(json_str).map_err(|e| UpdateError::parse(context, e))
}

/// `null`を型の既定値として読み込む
///
/// `#[serde(default)]`と組み合わせ、欠落と`null`の両方を既定値にする。
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
