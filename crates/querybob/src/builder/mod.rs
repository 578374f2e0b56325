//! Statement builder.
//!
//! A [`Builder`] accumulates declarative intent (table, columns, values,
//! joins, filters, ordering, pagination) through chained calls. Nothing is
//! validated while configuring; [`Builder::generate`] and [`Builder::build`]
//! render the statement and report the first problem they hit.
//!
//! ```ignore
//! use querybob::{Builder, Dialect, Value};
//!
//! let sql = Builder::insert("users")
//!     .dialect(Dialect::Postgres)
//!     .set(&["name", "age"])
//!     .to([Value::from("alice"), Value::from(30)])
//!     .returning(&["id"])
//!     .returning_into(["id"])
//!     .generate()?;
//! assert_eq!(sql, "INSERT INTO users (name,age) VALUES ($1,$2) RETURNING users.id");
//! ```

mod clause;
mod generate;
mod placeholder;
mod validate;

pub use generate::BuiltStatement;
pub use placeholder::Placeholders;
pub use validate::{Operator, check_arity, check_operands};

use crate::dialect::Dialect;
use crate::value::{Target, Value};

/// The four DML statement kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
}

impl StatementKind {
    /// Leading SQL keyword of the statement.
    pub fn as_str(self) -> &'static str {
        match self {
            StatementKind::Select => "SELECT",
            StatementKind::Insert => "INSERT",
            StatementKind::Update => "UPDATE",
            StatementKind::Delete => "DELETE",
        }
    }
}

/// One JOIN: `<join_type> JOIN <table> ON <local>=<foreign>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub join_type: String,
    pub table: String,
    pub local_column: String,
    pub foreign_column: String,
}

/// How a criterion attaches to the ones before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Combinator {
    #[default]
    And,
    Or,
}

impl Combinator {
    fn to_sql(self) -> &'static str {
        match self {
            Combinator::And => " AND ",
            Combinator::Or => " OR ",
        }
    }
}

/// One WHERE condition. The operator is stored upper-cased and checked
/// against the whitelist only at generation time.
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    pub column: String,
    pub operator: String,
    pub values: Vec<Value>,
    pub combinator: Combinator,
}

/// Sort direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    fn to_sql(self) -> &'static str {
        match self {
            SortDir::Asc => "ASC",
            SortDir::Desc => "DESC",
        }
    }
}

/// A single ORDER BY item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: String,
    pub direction: SortDir,
}

/// Accumulates one statement's intent. Single-owner and single-threaded.
#[derive(Debug, Clone)]
pub struct Builder {
    kind: StatementKind,
    dialect: Dialect,
    table: String,
    joins: Vec<Join>,
    /// SELECT projection, or INSERT/UPDATE columns
    columns: Vec<String>,
    /// INSERT/UPDATE values
    values: Vec<Value>,
    /// SELECT result targets
    targets: Vec<Target>,
    returning_columns: Vec<String>,
    returning_targets: Vec<Target>,
    criteria: Vec<Criterion>,
    order_by: Vec<OrderBy>,
    /// 0 = no LIMIT clause
    limit: u64,
    offset: u64,
}

impl Builder {
    fn new(kind: StatementKind, table: &str) -> Self {
        Self {
            kind,
            dialect: Dialect::default(),
            table: table.to_string(),
            joins: Vec::new(),
            columns: Vec::new(),
            values: Vec::new(),
            targets: Vec::new(),
            returning_columns: Vec::new(),
            returning_targets: Vec::new(),
            criteria: Vec::new(),
            order_by: Vec::new(),
            limit: 0,
            offset: 0,
        }
    }

    /// Create a SELECT builder for `table`.
    pub fn select(table: &str) -> Self {
        Self::new(StatementKind::Select, table)
    }

    /// Create an INSERT builder for `table`.
    pub fn insert(table: &str) -> Self {
        Self::new(StatementKind::Insert, table)
    }

    /// Create an UPDATE builder for `table`.
    pub fn update(table: &str) -> Self {
        Self::new(StatementKind::Update, table)
    }

    /// Create a DELETE builder for `table`.
    pub fn delete(table: &str) -> Self {
        Self::new(StatementKind::Delete, table)
    }

    // ==================== Dialect ====================

    /// Set the target engine. Last call wins.
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Target MySQL (`?` placeholders, no RETURNING).
    pub fn for_mysql(self) -> Self {
        self.dialect(Dialect::MySql)
    }

    /// Target SQLite (`?` placeholders, no RETURNING).
    pub fn for_sqlite(self) -> Self {
        self.dialect(Dialect::Sqlite)
    }

    /// Target Postgres (`$n` placeholders).
    pub fn for_postgres(self) -> Self {
        self.dialect(Dialect::Postgres)
    }

    /// Target Oracle (`:n` placeholders).
    pub fn for_oracle(self) -> Self {
        self.dialect(Dialect::Oracle)
    }

    // ==================== Columns & values ====================

    /// Append SELECT columns.
    ///
    /// Unqualified names are prefixed with the builder's table:
    /// `Builder::select("t1").columns(&["a", "t2.b"])` projects `t1.a,t2.b`.
    pub fn columns(mut self, names: &[&str]) -> Self {
        for name in names {
            let column = self.qualify(name);
            self.columns.push(column);
        }
        self
    }

    /// Append RETURNING columns, qualified the same way as [`Builder::columns`].
    pub fn returning(mut self, names: &[&str]) -> Self {
        for name in names {
            let column = self.qualify(name);
            self.returning_columns.push(column);
        }
        self
    }

    /// Append INSERT/UPDATE columns, stored verbatim.
    pub fn set(mut self, names: &[&str]) -> Self {
        self.columns.extend(names.iter().map(|s| s.to_string()));
        self
    }

    /// Append INSERT/UPDATE values, paired with [`Builder::set`] columns by position.
    pub fn to<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    /// Append a single INSERT/UPDATE value.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Append SELECT result targets, paired with the projection by position.
    pub fn into_targets<I>(mut self, targets: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Target>,
    {
        self.targets.extend(targets.into_iter().map(Into::into));
        self
    }

    /// Append RETURNING result targets, paired with [`Builder::returning`] by position.
    pub fn returning_into<I>(mut self, targets: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Target>,
    {
        self.returning_targets
            .extend(targets.into_iter().map(Into::into));
        self
    }

    // ==================== JOIN ====================

    /// Add a JOIN. The join type is emitted as given (`LEFT`, `INNER`, ...).
    pub fn join(mut self, join_type: &str, table: &str, local_column: &str, foreign_column: &str) -> Self {
        self.joins.push(Join {
            join_type: join_type.to_string(),
            table: table.to_string(),
            local_column: local_column.to_string(),
            foreign_column: foreign_column.to_string(),
        });
        self
    }

    /// Add INNER JOIN.
    pub fn inner_join(self, table: &str, local_column: &str, foreign_column: &str) -> Self {
        self.join("INNER", table, local_column, foreign_column)
    }

    /// Add LEFT JOIN.
    pub fn left_join(self, table: &str, local_column: &str, foreign_column: &str) -> Self {
        self.join("LEFT", table, local_column, foreign_column)
    }

    /// Add RIGHT JOIN.
    pub fn right_join(self, table: &str, local_column: &str, foreign_column: &str) -> Self {
        self.join("RIGHT", table, local_column, foreign_column)
    }

    // ==================== WHERE ====================

    fn push_criterion<I>(&mut self, column: &str, operator: &str, values: I, combinator: Combinator)
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.criteria.push(Criterion {
            column: column.to_string(),
            operator: operator.to_uppercase(),
            values: values.into_iter().map(Into::into).collect(),
            combinator,
        });
    }

    /// Add an AND criterion: `column <operator> values`.
    ///
    /// The operator is upper-cased; it is checked when the statement is generated.
    pub fn filter<I>(mut self, column: &str, operator: &str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.push_criterion(column, operator, values, Combinator::And);
        self
    }

    /// Add an OR criterion. Must not be the first criterion.
    pub fn or_filter<I>(mut self, column: &str, operator: &str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.push_criterion(column, operator, values, Combinator::Or);
        self
    }

    /// Add WHERE: column = value
    pub fn eq(self, column: &str, value: impl Into<Value>) -> Self {
        self.filter(column, "=", [value.into()])
    }

    /// Add WHERE: column <> value
    pub fn ne(self, column: &str, value: impl Into<Value>) -> Self {
        self.filter(column, "<>", [value.into()])
    }

    /// Add WHERE: column > value
    pub fn gt(self, column: &str, value: impl Into<Value>) -> Self {
        self.filter(column, ">", [value.into()])
    }

    /// Add WHERE: column >= value
    pub fn gte(self, column: &str, value: impl Into<Value>) -> Self {
        self.filter(column, ">=", [value.into()])
    }

    /// Add WHERE: column < value
    pub fn lt(self, column: &str, value: impl Into<Value>) -> Self {
        self.filter(column, "<", [value.into()])
    }

    /// Add WHERE: column <= value
    pub fn lte(self, column: &str, value: impl Into<Value>) -> Self {
        self.filter(column, "<=", [value.into()])
    }

    /// Add WHERE: column LIKE pattern
    pub fn like(self, column: &str, pattern: impl Into<Value>) -> Self {
        self.filter(column, "LIKE", [pattern.into()])
    }

    /// Add WHERE: column IN (values...)
    pub fn in_list<I>(self, column: &str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.filter(column, "IN", values)
    }

    /// Add WHERE: column BETWEEN from AND to
    pub fn between(self, column: &str, from: impl Into<Value>, to: impl Into<Value>) -> Self {
        self.filter(column, "BETWEEN", [from.into(), to.into()])
    }

    // ==================== Ordering & pagination ====================

    /// Add ORDER BY column ASC.
    pub fn order_by(mut self, column: &str) -> Self {
        self.order_by.push(OrderBy {
            column: column.to_string(),
            direction: SortDir::Asc,
        });
        self
    }

    /// Add ORDER BY column DESC.
    pub fn order_by_desc(mut self, column: &str) -> Self {
        self.order_by.push(OrderBy {
            column: column.to_string(),
            direction: SortDir::Desc,
        });
        self
    }

    /// Set LIMIT and offset. `limit == 0` disables the clause, offset included.
    pub fn limit(mut self, limit: u64, offset: u64) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }

    /// Pagination helper.
    ///
    /// `page` is 1-based (clamped to >= 1), `per_page` is clamped to >= 1.
    pub fn paginate(self, page: u64, per_page: u64) -> Self {
        let page = page.max(1);
        let size = per_page.max(1);
        self.limit(size, (page - 1).saturating_mul(size))
    }

    // ==================== Accessors ====================

    /// Statement kind fixed by the constructor.
    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    /// Primary table.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Dialect used for the next generation.
    pub fn current_dialect(&self) -> Dialect {
        self.dialect
    }

    /// INSERT/UPDATE values, in column order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// SELECT result targets, in projection order.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// RETURNING result targets, in RETURNING column order.
    pub fn returning_targets(&self) -> &[Target] {
        &self.returning_targets
    }

    /// All filter values, flattened in criterion order.
    pub fn criteria(&self) -> Vec<Value> {
        self.criteria
            .iter()
            .flat_map(|c| c.values.iter().cloned())
            .collect()
    }

    fn qualify(&self, name: &str) -> String {
        if name.contains('.') {
            name.to_string()
        } else {
            format!("{}.{}", self.table, name)
        }
    }
}

/// Create a SELECT builder for the given table.
pub fn select(table: &str) -> Builder {
    Builder::select(table)
}

/// Create an INSERT builder for the given table.
pub fn insert(table: &str) -> Builder {
    Builder::insert(table)
}

/// Create an UPDATE builder for the given table.
pub fn update(table: &str) -> Builder {
    Builder::update(table)
}

/// Create a DELETE builder for the given table.
pub fn delete(table: &str) -> Builder {
    Builder::delete(table)
}
