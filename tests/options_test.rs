// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Option parsing, schema checks and field selection

use fieldstats::options::{validate_options, DEFAULT_METRIC};
use fieldstats::{find_conflicts, should_include, AggregateOptions, Code, MetricKind};
use serde_json::json;

fn expect_invalid(value: serde_json::Value, needle: &str) {
    let err = AggregateOptions::from_value(&value).unwrap_err();
    assert_eq!(err.code(), Code::Validation, "{}", err);
    assert!(
        err.to_string().contains(needle),
        "'{}' does not mention '{}'",
        err,
        needle
    );
}

// =============================================================================
// Schema
// =============================================================================

#[test]
fn test_empty_object_is_valid() {
    let options = AggregateOptions::from_value(&json!({})).unwrap();
    assert_eq!(options, AggregateOptions::default());
}

#[test]
fn test_full_options_parse() {
    let options = AggregateOptions::from_value(&json!({
        "includes": ["volume", "price"],
        "excludes": ["fee"],
        "aggregationTypes": {"volume": ["sum", "median"]},
        "alias": {"volume": "vol"}
    }))
    .unwrap();

    let expected = AggregateOptions::new()
        .with_includes(["volume", "price"])
        .with_excludes(["fee"])
        .with_metrics("volume", [MetricKind::Sum, MetricKind::Median])
        .with_alias("volume", "vol");
    assert_eq!(options, expected);
}

#[test]
fn test_options_must_be_object() {
    expect_invalid(json!([]), "options must be an object");
    expect_invalid(json!(null), "options must be an object");
}

#[test]
fn test_unknown_key_rejected() {
    expect_invalid(json!({"groupBy": "day"}), "groupBy");
}

#[test]
fn test_includes_must_be_string_array() {
    expect_invalid(json!({"includes": "volume"}), "includes");
    expect_invalid(json!({"includes": ["volume", 3]}), "includes[1]");
    expect_invalid(json!({"excludes": null}), "excludes");
}

#[test]
fn test_aggregation_types_must_be_object_of_arrays() {
    expect_invalid(json!({"aggregationTypes": ["sum"]}), "aggregationTypes");
    expect_invalid(
        json!({"aggregationTypes": {"volume": "sum"}}),
        "aggregationTypes.volume",
    );
}

#[test]
fn test_unknown_metric_names_pass_schema() {
    // unsupported kinds are reported when computed, not when parsed
    let options = AggregateOptions::from_value(&json!({
        "aggregationTypes": {"volume": ["mode"]}
    }))
    .unwrap();
    assert_eq!(options.metrics_for("volume"), vec!["mode"]);
}

#[test]
fn test_alias_values_must_be_strings() {
    expect_invalid(json!({"alias": "vol"}), "alias");
    expect_invalid(json!({"alias": {"volume": 1}}), "alias.volume");
}

#[test]
fn test_empty_alias_is_accepted() {
    let options = AggregateOptions::from_value(&json!({"alias": {"volume": ""}})).unwrap();
    assert_eq!(options.output_name("volume"), "");
}

#[test]
fn test_validate_options_helper() {
    assert!(validate_options(&json!({"includes": []})).is_ok());
    assert!(validate_options(&json!({"include": []})).is_err());
}

#[test]
fn test_from_json_str() {
    let options = AggregateOptions::from_json_str(r#"{"excludes": ["volume"]}"#).unwrap();
    assert_eq!(options.excludes, vec!["volume".to_string()]);

    let err = AggregateOptions::from_json_str("{excludes").unwrap_err();
    assert_eq!(err.code(), Code::Serialization);
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn test_metrics_default_to_sum() {
    let options = AggregateOptions::new().with_metrics("volume", [MetricKind::Average]);
    assert_eq!(options.metrics_for("price"), vec![DEFAULT_METRIC]);
    assert_eq!(options.metrics_for("volume"), vec!["average"]);
}

#[test]
fn test_output_name() {
    let options = AggregateOptions::new().with_alias("volume", "vol");
    assert_eq!(options.output_name("volume"), "vol");
    assert_eq!(options.output_name("price"), "price");
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn test_should_include_without_lists() {
    let options = AggregateOptions::default();
    assert!(should_include("anything", &options));
}

#[test]
fn test_should_include_whitelist() {
    let options = AggregateOptions::new().with_includes(["volume"]);
    assert!(should_include("volume", &options));
    assert!(!should_include("price", &options));
}

#[test]
fn test_should_include_blacklist() {
    let options = AggregateOptions::new().with_excludes(["volume"]);
    assert!(!should_include("volume", &options));
    assert!(should_include("price", &options));
}

#[test]
fn test_includes_ignore_excludes() {
    let options = AggregateOptions::new()
        .with_includes(["volume"])
        .with_excludes(["volume", "price"]);
    assert!(should_include("volume", &options));
    assert!(!should_include("price", &options));
}

#[test]
fn test_empty_includes_fall_back_to_excludes() {
    let options = AggregateOptions::new()
        .with_includes(Vec::<String>::new())
        .with_excludes(["price"]);
    assert!(should_include("volume", &options));
    assert!(!should_include("price", &options));
}

#[test]
fn test_find_conflicts() {
    let options = AggregateOptions::new()
        .with_includes(["c", "a", "b"])
        .with_excludes(["a", "c", "z"]);
    assert_eq!(find_conflicts(&options), vec!["c".to_string(), "a".to_string()]);

    let options = AggregateOptions::new().with_includes(["a"]);
    assert!(find_conflicts(&options).is_empty());
}
