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

//! Option schema checks
//!
//! The accepted shape is:
//!
//! ```text
//! {
//!   "includes":         [string, ...],
//!   "excludes":         [string, ...],
//!   "aggregationTypes": { field: [string, ...], ... },
//!   "alias":            { field: string, ... }
//! }
//! ```
//!
//! Every key is optional and no other key is allowed.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::{AggregateError, AggregateResult};

use super::AggregateOptions;

const INCLUDES: &str = "includes";
const EXCLUDES: &str = "excludes";
const AGGREGATION_TYPES: &str = "aggregationTypes";
const ALIAS: &str = "alias";

const KNOWN_KEYS: [&str; 4] = [INCLUDES, EXCLUDES, AGGREGATION_TYPES, ALIAS];

/// Check `value` against the option schema without keeping the result
pub fn validate_options(value: &Value) -> AggregateResult<()> {
    parse_options(value).map(|_| ())
}

/// Check `value` against the option schema and convert it
pub fn parse_options(value: &Value) -> AggregateResult<AggregateOptions> {
    let object = value
        .as_object()
        .ok_or_else(|| AggregateError::validation("options must be an object"))?;

    if let Some(unknown) = object.keys().find(|k| !KNOWN_KEYS.contains(&k.as_str())) {
        return Err(AggregateError::validation(format!(
            "\"{}\" is not allowed",
            unknown
        )));
    }

    let includes = match object.get(INCLUDES) {
        Some(v) => string_array(v, INCLUDES)?,
        None => Vec::new(),
    };
    let excludes = match object.get(EXCLUDES) {
        Some(v) => string_array(v, EXCLUDES)?,
        None => Vec::new(),
    };

    let mut aggregation_types = IndexMap::new();
    if let Some(v) = object.get(AGGREGATION_TYPES) {
        for (field, metrics) in plain_object(v, AGGREGATION_TYPES)? {
            let path = format!("{}.{}", AGGREGATION_TYPES, field);
            aggregation_types.insert(field.clone(), string_array(metrics, &path)?);
        }
    }

    let mut alias = IndexMap::new();
    if let Some(v) = object.get(ALIAS) {
        for (field, output) in plain_object(v, ALIAS)? {
            let output = output.as_str().ok_or_else(|| {
                AggregateError::validation(format!("\"{}.{}\" must be a string", ALIAS, field))
            })?;
            alias.insert(field.clone(), output.to_string());
        }
    }

    Ok(AggregateOptions {
        includes,
        excludes,
        aggregation_types,
        alias,
    })
}

fn string_array(value: &Value, path: &str) -> AggregateResult<Vec<String>> {
    let items = value
        .as_array()
        .ok_or_else(|| AggregateError::validation(format!("\"{}\" must be an array", path)))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                AggregateError::validation(format!("\"{}[{}]\" must be a string", path, i))
            })
        })
        .collect()
}

fn plain_object<'a>(value: &'a Value, path: &str) -> AggregateResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| AggregateError::validation(format!("\"{}\" must be an object", path)))
}
