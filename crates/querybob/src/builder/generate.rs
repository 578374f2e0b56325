//! Statement assembly: runs the clause renderers in per-kind order.

use super::{Builder, Placeholders, StatementKind, clause};
use crate::error::BuildResult;
use crate::value::{Target, Value};

/// A generated statement: SQL text plus everything the driver needs.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltStatement {
    sql: String,
    params: Vec<Value>,
    targets: Vec<Target>,
}

impl BuiltStatement {
    /// Generated SQL text.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Bound parameters in placeholder order: INSERT/UPDATE values first,
    /// then filter values in criterion order.
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// SELECT targets for a SELECT, RETURNING targets otherwise.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Split into `(sql, params, targets)`.
    pub fn into_parts(self) -> (String, Vec<Value>, Vec<Target>) {
        (self.sql, self.params, self.targets)
    }

    /// Parameters as references compatible with tokio-postgres.
    #[cfg(feature = "postgres")]
    pub fn params_ref(&self) -> Vec<&(dyn tokio_postgres::types::ToSql + Sync)> {
        self.params
            .iter()
            .map(|v| v as &(dyn tokio_postgres::types::ToSql + Sync))
            .collect()
    }
}

impl Builder {
    /// Render the SQL text.
    ///
    /// Placeholder numbering restarts at 1 on every call, so rendering the
    /// same builder twice gives the same text.
    pub fn generate(&self) -> BuildResult<String> {
        self.build().map(|built| built.sql)
    }

    /// Render the SQL text and collect the parameters in placeholder order.
    ///
    /// Parameters are recorded as each placeholder is emitted, so only values
    /// that appear in the SQL are returned.
    pub fn build(&self) -> BuildResult<BuiltStatement> {
        let mut placeholders = Placeholders::new(self.dialect);
        let rendered = self.render(&mut placeholders);
        crate::trace::statement_built(self.kind, self.dialect, &rendered, placeholders.count());
        let sql = rendered?;

        let targets = match self.kind {
            StatementKind::Select => self.targets.clone(),
            _ => self.returning_targets.clone(),
        };
        Ok(BuiltStatement {
            sql,
            params: placeholders.into_params(),
            targets,
        })
    }

    fn render(&self, placeholders: &mut Placeholders) -> BuildResult<String> {
        match self.kind {
            StatementKind::Select => self.render_select(placeholders),
            StatementKind::Insert => self.render_insert(placeholders),
            StatementKind::Update => self.render_update(placeholders),
            StatementKind::Delete => self.render_delete(placeholders),
        }
    }

    fn render_select(&self, placeholders: &mut Placeholders) -> BuildResult<String> {
        let mut sql = clause::projection(self)?;
        sql.push_str(&clause::source(self));
        sql.push_str(&clause::filter(&self.criteria, placeholders)?);
        sql.push_str(&clause::order_by(&self.order_by));
        sql.push_str(&clause::pagination(self.limit, self.offset));
        Ok(sql)
    }

    /// INSERT has no WHERE clause; registered filters are not rendered or bound.
    fn render_insert(&self, placeholders: &mut Placeholders) -> BuildResult<String> {
        let mut sql = clause::insert(self, placeholders)?;
        sql.push_str(&clause::returning(self)?);
        Ok(sql)
    }

    fn render_update(&self, placeholders: &mut Placeholders) -> BuildResult<String> {
        let mut sql = clause::update(self, placeholders)?;
        sql.push_str(&clause::filter(&self.criteria, placeholders)?);
        sql.push_str(&clause::returning(self)?);
        Ok(sql)
    }

    fn render_delete(&self, placeholders: &mut Placeholders) -> BuildResult<String> {
        let mut sql = String::from("DELETE");
        sql.push_str(&clause::source(self));
        sql.push_str(&clause::filter(&self.criteria, placeholders)?);
        sql.push_str(&clause::returning(self)?);
        Ok(sql)
    }
}
