//! Optional `tracing` events for generated statements.
//!
//! Enable via the crate feature: `querybob = { features = ["tracing"] }`.
//! Events use target `querybob.sql` at DEBUG level.

use crate::builder::StatementKind;
use crate::dialect::Dialect;
use crate::error::BuildResult;

#[cfg(feature = "tracing")]
pub(crate) fn statement_built(
    kind: StatementKind,
    dialect: Dialect,
    rendered: &BuildResult<String>,
    param_count: usize,
) {
    match rendered {
        Ok(sql) => tracing::debug!(
            target: "querybob.sql",
            kind = kind.as_str(),
            dialect = %dialect,
            param_count,
            sql = %sql,
            "statement built",
        ),
        Err(err) => tracing::debug!(
            target: "querybob.sql",
            kind = kind.as_str(),
            dialect = %dialect,
            error = %err,
            "statement rejected",
        ),
    }
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn statement_built(
    _kind: StatementKind,
    _dialect: Dialect,
    _rendered: &BuildResult<String>,
    _param_count: usize,
) {
}
