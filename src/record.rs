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

//! Record and dataset types
//!
//! A record is a flat JSON object. Only JSON numbers take part in numeric
//! reductions; every other value (bool, string, null, nested) is skipped.

use indexmap::IndexSet;
use serde_json::{Map, Value};

use crate::error::{AggregateError, AggregateResult};

/// A single flat record: field name -> value
pub type Record = Map<String, Value>;

/// Numeric view of a value, `None` unless it is a JSON number
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Numeric view of `field` on `record`, `None` when absent or non-numeric
pub fn field_number(record: &Record, field: &str) -> Option<f64> {
    record.get(field).and_then(numeric_value)
}

/// Field names across all records, in first-seen order
pub fn discover_fields(dataset: &[Record]) -> IndexSet<&str> {
    let mut fields = IndexSet::new();
    for record in dataset {
        for key in record.keys() {
            fields.insert(key.as_str());
        }
    }
    fields
}

/// Build a dataset from a dynamic JSON value, which must be an array of objects
pub fn dataset_from_value(value: &Value) -> AggregateResult<Vec<Record>> {
    let items = value
        .as_array()
        .ok_or_else(|| AggregateError::validation("dataset must be an array of objects"))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_object().cloned().ok_or_else(|| {
                AggregateError::validation(format!("dataset[{}] must be an object", i))
            })
        })
        .collect()
}
