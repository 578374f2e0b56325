//! # querybob
//!
//! A fluent, in-memory SQL statement assembler.
//!
//! A [`Builder`] collects a table, columns, joins, filters, ordering and
//! pagination, then renders one SELECT, INSERT, UPDATE or DELETE statement
//! together with its bound parameters. Nothing is executed: the SQL text and
//! parameter list are handed to whatever driver the caller uses.
//!
//! ## Features
//!
//! - **Dialect-aware placeholders**: `$n` (Postgres), `:n` (Oracle), `?` (MySQL, SQLite, generic)
//! - **Deferred validation**: configuration never fails; generation reports the first problem
//! - **Fail-fast**: an error never comes with partial SQL
//! - **Ordered parameters**: the n-th placeholder always pairs with the n-th parameter
//!
//! ## Example
//!
//! ```ignore
//! use querybob::{select, Dialect};
//!
//! let built = select("users")
//!     .dialect(Dialect::Postgres)
//!     .columns(&["id", "name"])
//!     .into_targets(["id", "name"])
//!     .eq("users.status", "active")
//!     .filter("users.role", "in", ["admin", "owner"])
//!     .order_by_desc("users.created_at")
//!     .limit(20, 0)
//!     .build()?;
//!
//! assert_eq!(
//!     built.sql(),
//!     "SELECT users.id,users.name FROM users \
//!      WHERE users.status=$1 AND users.role IN ($2,$3) \
//!      ORDER BY users.created_at DESC LIMIT 20"
//! );
//! assert_eq!(built.params().len(), 3);
//! ```
//!
//! ## Cargo features
//!
//! - `postgres`: `tokio_postgres::types::ToSql` for [`Value`] and
//!   [`BuiltStatement::params_ref`].
//! - `tracing`: emit each built statement as a DEBUG event on `querybob.sql`.

pub mod builder;
pub mod dialect;
pub mod error;
pub mod value;

mod trace;

pub use builder::{
    Builder, BuiltStatement, Combinator, Criterion, Join, Operator, OrderBy, SortDir,
    StatementKind, delete, insert, select, update,
};
pub use dialect::{Dialect, ParseDialectError};
pub use error::{BuildError, BuildResult};
pub use value::{Target, Value};
