//! Shapes shared by the API responses.
//!
//! The API converts XML to JSON, so numbers arrive as strings and a pool with
//! a single element carries an object instead of an array.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{ "data": ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(|v| serde_json::from_value(v).map_err(de::Error::custom))
            .collect(),
        single => serde_json::from_value(single)
            .map(|v| vec![v])
            .map_err(de::Error::custom),
    }
}

pub fn number_from_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| de::Error::custom(format!("not an unsigned id: {}", n))),
        Value::String(s) => s.trim().parse().map_err(de::Error::custom),
        other => Err(de::Error::custom(format!("expected a number, got {}", other))),
    }
}

pub fn optional_number_from_string<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::Number(n) => Ok(n.as_u64()),
        Value::String(s) => s.trim().parse().map(Some).map_err(de::Error::custom),
        other => Err(de::Error::custom(format!("expected a number, got {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Pool {
        #[serde(rename = "ITEM", default, deserialize_with = "one_or_many")]
        items: Vec<Item>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        #[serde(rename = "ID", deserialize_with = "number_from_string")]
        id: u64,
    }

    #[test]
    fn test_single_element_pool() {
        let pool: Pool = serde_json::from_value(json!({ "ITEM": { "ID": "4" } })).unwrap();
        assert_eq!(pool.items, vec![Item { id: 4 }]);
    }

    #[test]
    fn test_array_and_missing_pool() {
        let pool: Pool = serde_json::from_value(json!({ "ITEM": [{ "ID": 1 }, { "ID": "2" }] })).unwrap();
        assert_eq!(pool.items.len(), 2);
        let empty: Pool = serde_json::from_value(json!({})).unwrap();
        assert!(empty.items.is_empty());
    }
}
