//! Clause renderers.
//!
//! Each function renders one clause from builder state. Checks run before any
//! text is produced, so an `Err` never comes with partial output. Every clause
//! after the leading one starts with a space.

use super::validate::{Operator, check_arity, check_operands};
use super::{Builder, Combinator, Criterion, OrderBy, Placeholders};
use crate::error::{BuildError, BuildResult};

/// `SELECT a,b,c`
pub(super) fn projection(qb: &Builder) -> BuildResult<String> {
    check_arity(qb.columns.len(), qb.targets.len())?;
    Ok(format!("SELECT {}", qb.columns.join(",")))
}

/// ` FROM t [<type> JOIN t2 ON a=b]...`
pub(super) fn source(qb: &Builder) -> String {
    let mut sql = format!(" FROM {}", qb.table);
    for join in &qb.joins {
        sql.push(' ');
        sql.push_str(&join.join_type);
        sql.push_str(" JOIN ");
        sql.push_str(&join.table);
        sql.push_str(" ON ");
        sql.push_str(&join.local_column);
        sql.push('=');
        sql.push_str(&join.foreign_column);
    }
    sql
}

/// ` WHERE ...`, or nothing without criteria.
pub(super) fn filter(criteria: &[Criterion], placeholders: &mut Placeholders) -> BuildResult<String> {
    let Some(first) = criteria.first() else {
        return Ok(String::new());
    };
    if first.combinator == Combinator::Or {
        return Err(BuildError::FirstCriterionIsOr);
    }

    let mut sql = String::from(" WHERE ");
    for (i, criterion) in criteria.iter().enumerate() {
        if i > 0 {
            sql.push_str(criterion.combinator.to_sql());
        }
        let operator: Operator = criterion.operator.parse()?;
        check_operands(operator, criterion.values.len())?;

        sql.push_str(&criterion.column);
        if operator.is_keyword() {
            sql.push(' ');
        }
        sql.push_str(operator.as_str());
        let values = &criterion.values;
        match operator {
            Operator::Like => {
                sql.push(' ');
                sql.push_str(&placeholders.bind(&values[0]));
            }
            Operator::Between => {
                sql.push(' ');
                sql.push_str(&placeholders.bind(&values[0]));
                sql.push_str(" AND ");
                sql.push_str(&placeholders.bind(&values[1]));
            }
            Operator::In => {
                sql.push_str(" (");
                sql.push_str(&placeholders.bind_all(values));
                sql.push(')');
            }
            _ => sql.push_str(&placeholders.bind(&values[0])),
        }
    }
    Ok(sql)
}

/// ` ORDER BY a ASC,b DESC`, or nothing.
pub(super) fn order_by(items: &[OrderBy]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let items: Vec<String> = items
        .iter()
        .map(|o| format!("{} {}", o.column, o.direction.to_sql()))
        .collect();
    format!(" ORDER BY {}", items.join(","))
}

/// ` LIMIT n[,offset]`, or nothing when the limit is 0.
pub(super) fn pagination(limit: u64, offset: u64) -> String {
    if limit == 0 {
        return String::new();
    }
    if offset > 0 {
        format!(" LIMIT {limit},{offset}")
    } else {
        format!(" LIMIT {limit}")
    }
}

/// `INSERT INTO t (a,b) VALUES (?,?)`
pub(super) fn insert(qb: &Builder, placeholders: &mut Placeholders) -> BuildResult<String> {
    check_arity(qb.columns.len(), qb.values.len())?;
    Ok(format!(
        "INSERT INTO {} ({}) VALUES ({})",
        qb.table,
        qb.columns.join(","),
        placeholders.bind_all(&qb.values)
    ))
}

/// `UPDATE t SET a=?,b=?`
pub(super) fn update(qb: &Builder, placeholders: &mut Placeholders) -> BuildResult<String> {
    check_arity(qb.columns.len(), qb.values.len())?;
    let assignments: Vec<String> = qb
        .columns
        .iter()
        .zip(&qb.values)
        .map(|(col, value)| format!("{col}={}", placeholders.bind(value)))
        .collect();
    Ok(format!("UPDATE {} SET {}", qb.table, assignments.join(",")))
}

/// ` RETURNING a,b`, or nothing without returning columns.
pub(super) fn returning(qb: &Builder) -> BuildResult<String> {
    if qb.returning_columns.is_empty() {
        return Ok(String::new());
    }
    if !qb.dialect.supports_returning() {
        return Err(BuildError::UnsupportedReturning(qb.dialect));
    }
    check_arity(qb.returning_columns.len(), qb.returning_targets.len())?;
    Ok(format!(" RETURNING {}", qb.returning_columns.join(",")))
}
