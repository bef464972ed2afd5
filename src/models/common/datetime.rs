//! 时间解析与序列化辅助

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::errors::Result;

/// 解析时间点：支持 RFC 3339，或 `YYYY-MM-DD`（按 UTC 零点）
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

/// 毫秒时间戳转换为时间点（数据库存储格式）
pub fn from_millis(ms: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(ms).unwrap_or_default()
}

pub fn deserialize_instant<'de, D>(
    deserializer: D,
) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_instant(&s)
        .map_err(|e| serde::de::Error::custom(format!("invalid date '{s}': {}", e.message())))
}

/// 空字符串视为未提供
pub fn deserialize_optional_instant<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.trim().is_empty() => parse_instant(&s).map(Some).map_err(|e| {
            serde::de::Error::custom(format!("invalid date '{s}': {}", e.message()))
        }),
        _ => Ok(None),
    }
}
