// tests/common/mod.rs
//! Shared records and reducers for the integration suites.

use chrono::NaiveDate;
use group_reduce::{FieldAccess, GroupKey};
use serde::Serialize;
use serde_json::{Value, json};

/// Per-key total produced by [`id_sum`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdSum {
    pub id: i64,
    pub sum: i64,
}

#[allow(dead_code)]
pub fn simple_1a() -> Value {
    json!({ "id": 1, "count": 1 })
}

#[allow(dead_code)]
pub fn simple_1b() -> Value {
    json!({ "id": 1, "count": 2 })
}

#[allow(dead_code)]
pub fn simple_2a() -> Value {
    json!({ "id": 2, "count": 3 })
}

#[allow(dead_code)]
pub fn simple() -> Vec<Value> {
    vec![simple_1a(), simple_1b(), simple_2a()]
}

#[allow(dead_code)]
pub fn count_of(record: &Value) -> i64 {
    record["count"].as_i64().unwrap_or_default()
}

/// Turns a bucket of `{ id, count }` records back into a typed total.
#[allow(dead_code)]
pub fn id_sum(key: GroupKey, rows: Vec<Value>) -> IdSum {
    IdSum { id: key.parse().expect("numeric id key"), sum: rows.iter().map(count_of).sum() }
}

#[allow(dead_code)]
pub fn expected_simple() -> Vec<IdSum> {
    vec![IdSum { id: 1, sum: 3 }, IdSum { id: 2, sum: 3 }]
}

/// One day of usage for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyUsage {
    pub id: u32,
    pub date: NaiveDate,
    pub count: u32,
}

impl FieldAccess for DailyUsage {
    fn field_key(&self, name: &str) -> Option<GroupKey> {
        match name {
            "id" => Some(self.id.into()),
            "date" => Some(self.date.to_string().into()),
            "count" => Some(self.count.into()),
            _ => None,
        }
    }
}

/// Users with their usage history, as nested JSON.
#[allow(dead_code)]
pub fn usage_history() -> Value {
    json!([
        {
            "id": 1,
            "usage": [
                { "date": "2014-01-01", "count": 1 },
                { "date": "2014-01-02", "count": 2 },
                { "date": "2014-01-03", "count": 3 }
            ]
        },
        { "id": 1, "usage": [ { "date": "2016-02-01", "count": 5 } ] },
        {
            "id": 2,
            "usage": [
                { "date": "2014-01-01", "count": 1 },
                { "date": "2015-01-01", "count": 7 }
            ]
        }
    ])
}

/// Flattens [`usage_history`] into one record per user and day.
#[allow(dead_code)]
pub fn daily_usage() -> Vec<DailyUsage> {
    let history = usage_history();
    let users = history.as_array().cloned().unwrap_or_default();
    users
        .iter()
        .flat_map(|user| {
            let id = user["id"].as_u64().unwrap_or_default() as u32;
            user["usage"].as_array().cloned().unwrap_or_default().into_iter().map(move |day| DailyUsage {
                id,
                date: NaiveDate::parse_from_str(day["date"].as_str().unwrap_or_default(), "%Y-%m-%d")
                    .expect("fixture dates are valid"),
                count: day["count"].as_u64().unwrap_or_default() as u32,
            })
        })
        .collect()
}
