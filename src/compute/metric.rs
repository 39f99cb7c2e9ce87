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

//! Metric kinds
//!
//! The closed set of reductions a field can be summarized with. Each kind
//! has a canonical wire name used both in options and in the report.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AggregateError;

/// Statistical reduction applied to one field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    Sum,
    Average,
    Median,
    Product,
    Count,
    Min,
    Max,
    ChangePercentage,
    First,
    Last,
}

impl MetricKind {
    /// Every supported kind, in canonical order
    pub const ALL: [MetricKind; 10] = [
        MetricKind::Sum,
        MetricKind::Average,
        MetricKind::Median,
        MetricKind::Product,
        MetricKind::Count,
        MetricKind::Min,
        MetricKind::Max,
        MetricKind::ChangePercentage,
        MetricKind::First,
        MetricKind::Last,
    ];

    /// Wire name of this kind, as accepted in `aggregationTypes`
    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Sum => "sum",
            MetricKind::Average => "average",
            MetricKind::Median => "median",
            MetricKind::Product => "product",
            MetricKind::Count => "count",
            MetricKind::Min => "min",
            MetricKind::Max => "max",
            MetricKind::ChangePercentage => "changePercentage",
            MetricKind::First => "first",
            MetricKind::Last => "last",
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricKind {
    type Err = AggregateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| AggregateError::UnsupportedAggregation(s.to_string()))
    }
}
