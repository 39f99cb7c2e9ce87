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

//! Field selection
//!
//! A non-empty `includes` list is a whitelist and wins outright; otherwise a
//! non-empty `excludes` list is a blacklist; otherwise every field is kept.

use crate::error::{AggregateError, AggregateResult};
use crate::options::AggregateOptions;

/// Whether `field` takes part in aggregation under `options`
pub fn should_include(field: &str, options: &AggregateOptions) -> bool {
    if !options.includes.is_empty() {
        options.includes.iter().any(|f| f == field)
    } else if !options.excludes.is_empty() {
        !options.excludes.iter().any(|f| f == field)
    } else {
        true
    }
}

/// Fields named in both `includes` and `excludes`, in `includes` order
pub fn find_conflicts(options: &AggregateOptions) -> Vec<String> {
    options
        .includes
        .iter()
        .filter(|f| options.excludes.contains(f))
        .cloned()
        .collect()
}

/// Fail with a conflict error when `includes` and `excludes` overlap
pub fn check_conflicts(options: &AggregateOptions) -> AggregateResult<()> {
    let fields = find_conflicts(options);
    if fields.is_empty() {
        Ok(())
    } else {
        Err(AggregateError::Conflict { fields })
    }
}
