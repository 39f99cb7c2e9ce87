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

//! Error handling for aggregation calls
//!
//! Every failure aborts the whole call; no partial report is ever returned.

use std::fmt;

/// Error classification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    /// Options (or the dataset shape) failed schema checks
    Validation,
    /// A field was named in both `includes` and `excludes`
    Conflict,
    /// A requested metric kind is not one of the supported reductions
    UnsupportedAggregation,
    /// JSON text could not be parsed
    Serialization,
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Code::Validation => write!(f, "Validation error"),
            Code::Conflict => write!(f, "Conflict error"),
            Code::UnsupportedAggregation => write!(f, "Unsupported aggregation"),
            Code::Serialization => write!(f, "Serialization error"),
        }
    }
}

/// Main error type for aggregation calls
#[derive(thiserror::Error, Debug)]
pub enum AggregateError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflicting fields in includes and excludes: {}", .fields.join(", "))]
    Conflict { fields: Vec<String> },

    #[error("Unsupported aggregation type: {0}")]
    UnsupportedAggregation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AggregateError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        AggregateError::Validation(message.into())
    }

    /// Get the error code
    pub fn code(&self) -> Code {
        match self {
            AggregateError::Validation(_) => Code::Validation,
            AggregateError::Conflict { .. } => Code::Conflict,
            AggregateError::UnsupportedAggregation(_) => Code::UnsupportedAggregation,
            AggregateError::Serialization(_) => Code::Serialization,
        }
    }

    /// Field names reported by a conflict error, empty for every other kind
    pub fn conflicting_fields(&self) -> &[String] {
        match self {
            AggregateError::Conflict { fields } => fields,
            _ => &[],
        }
    }
}

/// Type alias for Results using AggregateError
pub type AggregateResult<T> = Result<T, AggregateError>;
