//! 宽松的 Serde 反序列化工具
//!
//! Porkbun 对同一字段有时返回 JSON 数字，有时返回数字字符串（例如 `"ttl": "600"`
//! 与 `"TTL": 10` 并存）。这里的函数统一接受两种形式：
//! - 数字字段：JSON 数字 或 可解析的字符串
//! - 字符串字段：JSON 字符串 或 数字（记录 ID）
//! - 映射字段：对象，`null` 或空数组视为空映射

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    String(String),
}

/// Deserializes a number given either as a JSON number or a numeric string.
pub fn number_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match NumberOrString::<T>::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse()
            .map_err(|e| Error::custom(format!("invalid numeric string '{s}': {e}"))),
    }
}

/// Like [`number_or_string`], but `null`, a missing field, or `""` become `None`.
pub fn opt_number_or_string<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<NumberOrString<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::String(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrString::String(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| Error::custom(format!("invalid numeric string '{s}': {e}"))),
    }
}

/// Deserializes an identifier that may arrive as a string or a bare number.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        String(String),
        U64(u64),
        I64(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::String(s) => s,
        Id::U64(n) => n.to_string(),
        Id::I64(n) => n.to_string(),
    })
}

/// Deserializes a map that the API reports as `null` or `[]` when empty.
pub fn map_or_empty<'de, D, M>(deserializer: D) -> Result<M, D::Error>
where
    D: Deserializer<'de>,
    M: DeserializeOwned + Default,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(M::default()),
        Some(serde_json::Value::Array(items)) if items.is_empty() => Ok(M::default()),
        Some(other) => serde_json::from_value(other).map_err(Error::custom),
    }
}

/// Decodes an optional field, treating a value of the wrong shape as absent.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}
