//! Inline checks run by the clause generator before it emits a clause.

use crate::error::{BuildError, BuildResult};
use std::str::FromStr;

/// The supported filter operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Gt,
    Lt,
    Gte,
    Lte,
    Ne,
    In,
    Between,
    Like,
}

impl Operator {
    pub const ALL: [Operator; 9] = [
        Operator::Eq,
        Operator::Gt,
        Operator::Lt,
        Operator::Gte,
        Operator::Lte,
        Operator::Ne,
        Operator::In,
        Operator::Between,
        Operator::Like,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Gte => ">=",
            Operator::Lte => "<=",
            Operator::Ne => "<>",
            Operator::In => "IN",
            Operator::Between => "BETWEEN",
            Operator::Like => "LIKE",
        }
    }

    /// Whether the operator is written as a keyword (`col IN ...`) rather
    /// than a symbol glued to the column (`col=...`).
    pub fn is_keyword(self) -> bool {
        matches!(self, Operator::In | Operator::Between | Operator::Like)
    }
}

/// Exact match against the whitelist; callers upper-case first.
impl FromStr for Operator {
    type Err = BuildError;

    fn from_str(s: &str) -> BuildResult<Self> {
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| BuildError::invalid_operator(s))
    }
}

/// Column and value counts must match.
pub fn check_arity(columns: usize, values: usize) -> BuildResult<()> {
    if columns != values {
        return Err(BuildError::arity(columns, values));
    }
    Ok(())
}

/// BETWEEN takes exactly two values, IN at least one, everything else one.
pub fn check_operands(operator: Operator, got: usize) -> BuildResult<()> {
    let (ok, expected) = match operator {
        Operator::Between => (got == 2, "2"),
        Operator::In => (got >= 1, "at least 1"),
        _ => (got == 1, "1"),
    };
    if !ok {
        return Err(BuildError::OperandCount {
            operator: operator.as_str().to_string(),
            expected,
            got,
        });
    }
    Ok(())
}
