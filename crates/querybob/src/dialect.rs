//! Target database engines.
//!
//! The dialect only affects two things: how placeholders are rendered and
//! whether a RETURNING clause may be emitted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Database engine a statement is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dialect {
    /// Unset: `?` placeholders, no RETURNING.
    #[default]
    Generic,
    MySql,
    Sqlite,
    Postgres,
    Oracle,
}

impl Dialect {
    /// Lowercase engine name used in messages and configuration.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Generic => "generic",
            Dialect::MySql => "mysql",
            Dialect::Sqlite => "sqlite",
            Dialect::Postgres => "postgres",
            Dialect::Oracle => "oracle",
        }
    }

    /// Render the placeholder for the `n`-th (1-based) bound value.
    pub fn placeholder(self, n: usize) -> String {
        match self {
            Dialect::Postgres => format!("${n}"),
            Dialect::Oracle => format!(":{n}"),
            Dialect::Generic | Dialect::MySql | Dialect::Sqlite => "?".to_string(),
        }
    }

    /// Whether placeholders embed their position.
    pub fn numbered_placeholders(self) -> bool {
        matches!(self, Dialect::Postgres | Dialect::Oracle)
    }

    /// Whether INSERT/UPDATE/DELETE may carry a RETURNING clause.
    pub fn supports_returning(self) -> bool {
        matches!(self, Dialect::Postgres | Dialect::Oracle)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown dialect name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dialect '{0}' (expected generic, mysql, sqlite, postgres or oracle)")]
pub struct ParseDialectError(pub String);

impl FromStr for Dialect {
    type Err = ParseDialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generic" | "default" => Ok(Dialect::Generic),
            "mysql" | "mariadb" => Ok(Dialect::MySql),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "oracle" => Ok(Dialect::Oracle),
            _ => Err(ParseDialectError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Dialect {
    type Error = ParseDialectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Dialect> for String {
    fn from(dialect: Dialect) -> Self {
        dialect.name().to_string()
    }
}
