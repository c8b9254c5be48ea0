/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::Deserialize;
use serde_json::Value;

// Parses an error code that may arrive as a number or a numeric string
pub fn from_lenient_code<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v: Option<Value> = Deserialize::deserialize(deserializer)?;
    Ok(match v {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

// Parses a string field, treating "" and non-string values as None
pub fn from_lenient_str<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v: Option<Value> = Deserialize::deserialize(deserializer)?;
    Ok(match v {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}
