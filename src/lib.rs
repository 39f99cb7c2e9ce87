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

//! fieldstats: per-field summary statistics over flat records
//!
//! Given a list of flat JSON records and a declarative options object,
//! fieldstats selects which fields to summarize (include/exclude lists),
//! applies the requested reductions to each one (sum, average, median,
//! product, count, min, max, changePercentage, first, last) and returns a
//! single report keyed by output field name, with optional aliasing.
//!
//! The computation is synchronous, deterministic and holds no state between
//! calls.

pub mod aggregate;
pub mod compute;
pub mod error;
pub mod options;
pub mod record;
pub mod select;
pub mod util;

// Re-export commonly used types
pub use crate::aggregate::{aggregate, aggregate_json, aggregate_value, AggregateReport, FieldReport};
pub use crate::compute::{calculate, calculate_metric, FieldScan, MetricKind};
pub use crate::error::{AggregateError, AggregateResult, Code};
pub use crate::options::AggregateOptions;
pub use crate::record::Record;
pub use crate::select::{find_conflicts, should_include};

/// The main entry point and version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
