use chrono::{Datelike, NaiveDate};
use group_reduce::{GroupOptionsBuilder, KeyOrder, group, group_with};
use serde::Serialize;
use serde_json::{Value, json};

use crate::common::{DailyUsage, IdSum, daily_usage, usage_history};

#[derive(Debug, PartialEq, Serialize)]
struct YearUsage {
    year: i32,
    users: Vec<IdSum>,
}

fn per_user(rows: Vec<DailyUsage>) -> Vec<IdSum> {
    group(rows)
        .by_field("id")
        .reduce(|key, rows| IdSum { id: key.parse().expect("numeric id"), sum: rows.iter().map(|r| i64::from(r.count)).sum() })
}

#[test]
fn groups_by_year_then_by_user() {
    let options = GroupOptionsBuilder::default().key_order(KeyOrder::IndexFirst).build().expect("valid options");
    let result = group_with(daily_usage(), options)
        .by(|usage: &DailyUsage| usage.date.year())
        .reduce(|key, rows| YearUsage { year: key.parse().expect("numeric year"), users: per_user(rows) });

    let expected = json!([
        { "year": 2014, "users": [ { "id": 1, "sum": 6 }, { "id": 2, "sum": 1 } ] },
        { "year": 2015, "users": [ { "id": 2, "sum": 7 } ] },
        { "year": 2016, "users": [ { "id": 1, "sum": 5 } ] }
    ]);
    assert_eq!(serde_json::to_value(&result).expect("serializes"), expected);
}

#[test]
fn default_order_follows_first_seen_years() {
    let years: Vec<i32> = group(daily_usage())
        .by(|usage: &DailyUsage| usage.date.year())
        .reduce(|key, _| key.parse().expect("numeric year"));
    assert_eq!(years, vec![2014, 2016, 2015]);
}

#[test]
fn nested_grouping_over_raw_json_with_fallible_selector() {
    let history = usage_history();
    let days: Vec<Value> = history
        .as_array()
        .into_iter()
        .flatten()
        .flat_map(|user| {
            let id = user["id"].clone();
            user["usage"].as_array().cloned().unwrap_or_default().into_iter().map(move |day| {
                json!({ "id": id, "date": day["date"], "count": day["count"] })
            })
        })
        .collect();

    let result = group(days)
        .try_by(|day: &Value| {
            NaiveDate::parse_from_str(day["date"].as_str().unwrap_or_default(), "%Y-%m-%d").map(|d| d.year())
        })
        .expect("fixture dates parse")
        .map(|_, rows| group(rows).by_field("id").map(|_, rows| rows.len()));

    assert_eq!(result.len(), 3);
    assert_eq!(result["2014"].get("1"), Some(&3));
    assert_eq!(result["2014"].get("2"), Some(&1));
    assert_eq!(result["2015"].get("2"), Some(&1));
    assert_eq!(result["2016"].get("1"), Some(&1));
}

#[test]
fn unparsable_date_aborts_grouping_with_callers_error() {
    let days = vec![json!({ "date": "2014-01-01" }), json!({ "date": "yesterday" })];
    let result = group(days).try_by(|day: &Value| {
        NaiveDate::parse_from_str(day["date"].as_str().unwrap_or_default(), "%Y-%m-%d").map(|d| d.year())
    });
    let err: chrono::ParseError = result.expect_err("second date is invalid");
    assert!(!err.to_string().is_empty());
}

#[test]
fn reducer_failure_surfaces_unchanged() {
    let result = group(daily_usage()).by_field("id").try_reduce(|key, rows| {
        if rows.len() > 3 {
            anyhow::bail!("user {key} has too many days");
        }
        Ok(rows.len())
    });
    assert_eq!(result.expect_err("user 1 has four days").to_string(), "user 1 has too many days");
}
