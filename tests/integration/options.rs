use group_reduce::{GroupOptions, GroupOptionsBuilder, GroupReduceError, RegroupPolicy, group, group_with};
use serde_json::{Value, json};

use crate::common::simple;

#[test]
fn default_options_rebuild_on_every_by() {
    let grouper = group(simple()).by_field("id").by_field("count");
    let keys: Vec<&str> = grouper.buckets().iter().map(|b| b.key.as_str()).collect();
    assert_eq!(keys, ["1", "2", "3"]);
}

#[test]
fn accumulate_options_loaded_from_json() {
    let options = GroupOptions::from_json_str(r#"{ "regroup": "accumulate" }"#).expect("valid options");
    let sizes = group_with(simple(), options).by_field("id").by_field("id").reduce(|_, rows| rows.len());
    assert_eq!(sizes, vec![4, 2]);
}

#[test]
fn missing_key_is_configurable() {
    let options = GroupOptionsBuilder::default().missing_key("(anonymous)").build().expect("valid options");
    let records: Vec<Value> = vec![json!({ "user": "a" }), json!({})];
    let keys = group_with(records, options).by_field("user").reduce(|key, _| key.into_string());
    assert_eq!(keys, ["a", "(anonymous)"]);
}

#[test]
fn policy_parses_from_text() {
    assert_eq!("accumulate".parse::<RegroupPolicy>().expect("parses"), RegroupPolicy::Accumulate);
    assert!(matches!("sideways".parse::<RegroupPolicy>(), Err(GroupReduceError::UnknownPolicy { .. })));
}

#[test]
fn invalid_json_options_are_rejected() {
    let err = GroupOptions::from_json_str("not json").expect_err("malformed");
    assert!(err.to_string().starts_with("Failed to parse JSON options"));
}
