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

//! Aggregation options
//!
//! Options can be built in code with the `with_*` builder methods or parsed
//! from a dynamic JSON value, in which case they pass through the schema
//! checks in [`validate`] first.

pub mod validate;

use indexmap::IndexMap;
use serde_json::Value;

use crate::compute::MetricKind;
use crate::error::AggregateResult;

pub use validate::{parse_options, validate_options};

/// Metric requested for a field that has no `aggregationTypes` entry
pub const DEFAULT_METRIC: &str = "sum";

/// Declarative description of which fields to summarize and how
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateOptions {
    /// Whitelist of fields; takes precedence over `excludes` when non-empty
    pub includes: Vec<String>,
    /// Blacklist of fields, used only when `includes` is empty
    pub excludes: Vec<String>,
    /// Metric names per field, in output order.
    ///
    /// Names are kept as text; unknown ones are rejected when computed.
    pub aggregation_types: IndexMap<String, Vec<String>>,
    /// Output key per field
    pub alias: IndexMap<String, String>,
}

impl AggregateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a dynamic JSON value, enforcing the option schema
    pub fn from_value(value: &Value) -> AggregateResult<Self> {
        parse_options(value)
    }

    /// Parse options from JSON text
    pub fn from_json_str(json: &str) -> AggregateResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Restrict aggregation to exactly these fields
    pub fn with_includes<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includes = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Aggregate every field except these
    pub fn with_excludes<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Set the metric names computed for `field`
    pub fn with_aggregation_types<I, S>(mut self, field: impl Into<String>, metrics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aggregation_types
            .insert(field.into(), metrics.into_iter().map(Into::into).collect());
        self
    }

    /// Typed form of [`with_aggregation_types`](Self::with_aggregation_types)
    pub fn with_metrics<I>(self, field: impl Into<String>, metrics: I) -> Self
    where
        I: IntoIterator<Item = MetricKind>,
    {
        self.with_aggregation_types(field, metrics.into_iter().map(|m| m.name()))
    }

    /// Report `field` under `output` instead of its own name
    pub fn with_alias(mut self, field: impl Into<String>, output: impl Into<String>) -> Self {
        self.alias.insert(field.into(), output.into());
        self
    }

    /// Metric names to compute for `field`, defaulting to `["sum"]`
    pub fn metrics_for(&self, field: &str) -> Vec<&str> {
        match self.aggregation_types.get(field) {
            Some(metrics) => metrics.iter().map(String::as_str).collect(),
            None => vec![DEFAULT_METRIC],
        }
    }

    /// Key under which `field` appears in the report
    pub fn output_name<'a>(&'a self, field: &'a str) -> &'a str {
        self.alias.get(field).map(String::as_str).unwrap_or(field)
    }
}
