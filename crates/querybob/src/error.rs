//! Error types for querybob

use crate::dialect::Dialect;
use thiserror::Error;

/// Result type alias for statement generation
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors raised while generating a statement.
///
/// Every variant is fatal to the generate call that produced it: no partial
/// SQL is ever returned next to an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Column and value counts differ (projection, INSERT, UPDATE or RETURNING)
    #[error("columns count ({columns}) must be equal to values count ({values})")]
    ColumnValueMismatch { columns: usize, values: usize },

    /// Filter operator outside the supported set
    #[error("operator '{0}' is an invalid SQL operator")]
    InvalidOperator(String),

    /// The first filter criterion was added with OR
    #[error("the first criterion is an OR")]
    FirstCriterionIsOr,

    /// RETURNING requested for an engine without RETURNING support
    #[error("database engine {0} does not support RETURNING clause")]
    UnsupportedReturning(Dialect),

    /// Wrong number of values supplied to a filter operator
    #[error("operator '{operator}' expects {expected} value(s), got {got}")]
    OperandCount {
        operator: String,
        expected: &'static str,
        got: usize,
    },
}

impl BuildError {
    /// Create a column/value arity error
    pub fn arity(columns: usize, values: usize) -> Self {
        Self::ColumnValueMismatch { columns, values }
    }

    /// Create an invalid operator error
    pub fn invalid_operator(operator: impl Into<String>) -> Self {
        Self::InvalidOperator(operator.into())
    }

    /// Check if this is a column/value arity error
    pub fn is_arity_mismatch(&self) -> bool {
        matches!(self, Self::ColumnValueMismatch { .. })
    }

    /// Check if this is an invalid operator error
    pub fn is_invalid_operator(&self) -> bool {
        matches!(self, Self::InvalidOperator(_))
    }

    /// Check if this is an unsupported RETURNING error
    pub fn is_unsupported_returning(&self) -> bool {
        matches!(self, Self::UnsupportedReturning(_))
    }
}
