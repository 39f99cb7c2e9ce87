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

//! Per-field aggregate calculation
//!
//! A calculation is a single sequential scan of the dataset for one field:
//! 1. Accumulate - fold every numeric value into the running state
//! 2. Collect - keep one entry per record for the median list
//! 3. Finalize - derive the requested metric from the accumulated state
//!
//! Degenerate inputs (no numeric values, a single value, a zero first value)
//! are not guarded: results follow IEEE-754 arithmetic and may be NaN or
//! infinite.

use crate::error::AggregateResult;
use crate::record::{field_number, Record};

use super::metric::MetricKind;

// ============================================================================
// Field Scan
// ============================================================================

/// Accumulated state of one field over a dataset, in record order
#[derive(Debug, Clone)]
pub struct FieldScan {
    sum: f64,
    product: f64,
    count: usize,
    min: f64,
    max: f64,
    first: Option<f64>,
    last: Option<f64>,
    /// One entry per record: the numeric value, or NaN when absent or non-numeric
    values: Vec<f64>,
}

impl Default for FieldScan {
    fn default() -> Self {
        Self {
            sum: 0.0,
            product: 1.0,
            count: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            first: None,
            last: None,
            values: Vec::new(),
        }
    }
}

impl FieldScan {
    /// Scan `field` across every record of `dataset`
    pub fn scan(dataset: &[Record], field: &str) -> Self {
        let mut state = Self {
            values: Vec::with_capacity(dataset.len()),
            ..Default::default()
        };
        for record in dataset {
            state.push(field_number(record, field));
        }
        state
    }

    /// Fold one record's value for the field into the state
    pub fn push(&mut self, value: Option<f64>) {
        match value {
            Some(v) => {
                self.sum += v;
                self.product *= v;
                self.count += 1;
                self.min = self.min.min(v);
                self.max = self.max.max(v);
                if self.first.is_none() {
                    self.first = Some(v);
                }
                self.last = Some(v);
                self.values.push(v);
            }
            None => self.values.push(f64::NAN),
        }
    }

    /// Number of numeric values seen
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn product(&self) -> f64 {
        self.product
    }

    /// Smallest numeric value, `+inf` when none was seen
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest numeric value, `-inf` when none was seen
    pub fn max(&self) -> f64 {
        self.max
    }

    /// First numeric value in record order, NaN when none was seen
    pub fn first(&self) -> f64 {
        self.first.unwrap_or(f64::NAN)
    }

    /// Last numeric value in record order, NaN when none was seen
    pub fn last(&self) -> f64 {
        self.last.unwrap_or(f64::NAN)
    }

    pub fn average(&self) -> f64 {
        self.sum / self.count as f64
    }

    /// Middle of the per-record value list.
    ///
    /// Records without a numeric value contribute NaN entries; these sort after
    /// every number and still count towards the list length, so they can shift
    /// or poison the result.
    pub fn median(&self) -> f64 {
        let mut sorted = self.values.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let len = sorted.len();
        if len == 0 {
            f64::NAN
        } else if len % 2 == 0 {
            (sorted[len / 2 - 1] + sorted[len / 2]) / 2.0
        } else {
            sorted[len / 2]
        }
    }

    /// Percentage change from the first value to the average of the rest.
    ///
    /// Returns 0 when the first value is exactly zero.
    pub fn change_percentage(&self) -> f64 {
        let first = self.first();
        let avg_excluding_first = (self.sum - first) / (self.count as f64 - 1.0);
        let change = avg_excluding_first - first;

        if first != 0.0 {
            (change / first) * 100.0
        } else {
            0.0
        }
    }

    /// Read one metric from the accumulated state
    pub fn finalize(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::Sum => self.sum(),
            MetricKind::Average => self.average(),
            MetricKind::Median => self.median(),
            MetricKind::Product => self.product(),
            MetricKind::Count => self.count as f64,
            MetricKind::Min => self.min(),
            MetricKind::Max => self.max(),
            MetricKind::ChangePercentage => self.change_percentage(),
            MetricKind::First => self.first(),
            MetricKind::Last => self.last(),
        }
    }
}

// ============================================================================
// Calculator entry points
// ============================================================================

/// Compute one metric for `field` over `dataset`
pub fn calculate_metric(dataset: &[Record], field: &str, kind: MetricKind) -> f64 {
    FieldScan::scan(dataset, field).finalize(kind)
}

/// Compute one metric by its wire name.
///
/// Fails with `UnsupportedAggregation` when `metric` names no known kind.
pub fn calculate(dataset: &[Record], field: &str, metric: &str) -> AggregateResult<f64> {
    let kind: MetricKind = metric.parse()?;
    Ok(calculate_metric(dataset, field, kind))
}
