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

//! Aggregation entry points
//!
//! An aggregation runs in four steps:
//! 1. Validate the options (fail fast). Dynamic options are checked when
//!    parsed; typed options are well-formed by construction
//! 2. Reject fields named in both `includes` and `excludes`
//! 3. Discover field names across all records, in first-seen order
//! 4. For each selected field, compute every requested metric and store it
//!    under the field's output name
//!
//! Fields are driven by what the records actually carry, so an empty dataset
//! always yields an empty report.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::compute::{FieldScan, MetricKind};
use crate::error::AggregateResult;
use crate::options::AggregateOptions;
use crate::record::{dataset_from_value, discover_fields, Record};
use crate::select::{check_conflicts, should_include};
use crate::{fieldstats_debug, fieldstats_trace, fieldstats_warn};

/// Metric values of one output field, in requested order
pub type FieldReport = IndexMap<MetricKind, f64>;

// ============================================================================
// Report
// ============================================================================

/// Result of an aggregation: output field name -> metric -> value
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AggregateReport {
    fields: IndexMap<String, FieldReport>,
}

impl AggregateReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` for `metric` under `output`, creating the entry if needed
    pub fn insert(&mut self, output: &str, metric: MetricKind, value: f64) {
        self.fields
            .entry(output.to_string())
            .or_default()
            .insert(metric, value);
    }

    /// All metrics recorded for an output field
    pub fn field(&self, output: &str) -> Option<&FieldReport> {
        self.fields.get(output)
    }

    /// A single metric value
    pub fn get(&self, output: &str, metric: MetricKind) -> Option<f64> {
        self.fields.get(output).and_then(|m| m.get(&metric)).copied()
    }

    /// Whether an output field is present
    pub fn contains(&self, output: &str) -> bool {
        self.fields.contains_key(output)
    }

    /// Output field names, in report order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Output fields with their metrics, in report order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldReport)> {
        self.fields.iter()
    }

    /// Number of output fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_inner(self) -> IndexMap<String, FieldReport> {
        self.fields
    }

    /// JSON form of the report; non-finite values become `null`
    pub fn to_value(&self) -> AggregateResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_string(&self) -> AggregateResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// ============================================================================
// Orchestration
// ============================================================================

/// Summarize `dataset` according to `options`
pub fn aggregate(dataset: &[Record], options: &AggregateOptions) -> AggregateResult<AggregateReport> {
    check_conflicts(options)?;

    let mut report = AggregateReport::new();
    let fields = discover_fields(dataset);
    fieldstats_debug!(
        "Aggregating {} records, {} distinct fields",
        dataset.len(),
        fields.len()
    );

    for field in fields {
        if !should_include(field, options) {
            fieldstats_trace!("Skipping field '{}'", field);
            continue;
        }

        let output = options.output_name(field);
        let mut scan: Option<FieldScan> = None;

        for name in options.metrics_for(field) {
            let metric: MetricKind = name.parse()?;
            let state = scan.get_or_insert_with(|| FieldScan::scan(dataset, field));
            let value = state.finalize(metric);

            if !value.is_finite() {
                fieldstats_warn!(
                    "Metric {} for field '{}' is not finite ({}); {} numeric values",
                    metric,
                    field,
                    value,
                    state.count()
                );
            }
            fieldstats_trace!("{}.{} = {}", output, metric, value);
            report.insert(output, metric, value);
        }
    }

    fieldstats_debug!("Aggregation produced {} output fields", report.len());
    Ok(report)
}

/// Summarize a dynamic JSON dataset with dynamic JSON options.
///
/// Options are checked before the dataset is looked at; the dataset must be
/// an array of objects.
pub fn aggregate_value(dataset: &Value, options: &Value) -> AggregateResult<AggregateReport> {
    let options = AggregateOptions::from_value(options)?;
    let records = dataset_from_value(dataset)?;
    aggregate(&records, &options)
}

/// Summarize a dataset given as JSON text with options given as JSON text
pub fn aggregate_json(dataset: &str, options: &str) -> AggregateResult<AggregateReport> {
    let options: Value = serde_json::from_str(options)?;
    let options = AggregateOptions::from_value(&options)?;
    let dataset: Value = serde_json::from_str(dataset)?;
    let records = dataset_from_value(&dataset)?;
    aggregate(&records, &options)
}
