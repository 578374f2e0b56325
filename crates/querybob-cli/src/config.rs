use querybob::Dialect;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub config_path: PathBuf,
    pub file: ConfigFile,
}

impl ProjectConfig {
    pub fn load(config_path: PathBuf) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(&config_path).map_err(|e| {
            anyhow::anyhow!(
                "failed to read config file {}: {e}",
                config_path.display()
            )
        })?;

        let file = ConfigFile::parse(&raw).map_err(|e| {
            anyhow::anyhow!("invalid config file {}: {e:#}", config_path.display())
        })?;

        Ok(Self { config_path, file })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    /// Default dialect for statements that do not name one.
    #[serde(default)]
    pub dialect: Option<Dialect>,
    #[serde(default)]
    pub statements: Vec<StatementConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindConfig {
    Select,
    Insert,
    Update,
    Delete,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatementConfig {
    pub name: String,
    pub kind: KindConfig,
    pub table: String,
    #[serde(default)]
    pub dialect: Option<Dialect>,

    /// Projection for SELECT, assignment columns for INSERT/UPDATE.
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub values: Vec<serde_json::Value>,
    /// Defaults to `columns` for SELECT.
    #[serde(default)]
    pub targets: Option<Vec<String>>,

    #[serde(default)]
    pub returning: Vec<String>,
    /// Defaults to `returning`.
    #[serde(default)]
    pub returning_into: Option<Vec<String>>,

    #[serde(default)]
    pub joins: Vec<JoinConfig>,
    #[serde(default)]
    pub filters: Vec<FilterConfig>,
    #[serde(default)]
    pub order_by: Vec<OrderConfig>,

    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JoinConfig {
    #[serde(default = "default_join_kind")]
    pub kind: String,
    pub table: String,
    /// `[local_column, foreign_column]`
    pub on: [String; 2],
}

fn default_join_kind() -> String {
    "INNER".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    pub column: String,
    #[serde(default = "default_op")]
    pub op: String,
    #[serde(default)]
    pub values: Vec<serde_json::Value>,
    #[serde(default)]
    pub or: bool,
}

fn default_op() -> String {
    "=".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderConfig {
    pub column: String,
    #[serde(default)]
    pub desc: bool,
}

impl ConfigFile {
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let file: ConfigFile = toml::from_str(raw)?;
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.version.trim() != "1" {
            anyhow::bail!("unsupported config version: {}", self.version);
        }

        let mut names = HashSet::new();
        for s in &self.statements {
            if s.name.trim().is_empty() {
                anyhow::bail!("statements.name must not be empty");
            }
            if !names.insert(s.name.as_str()) {
                anyhow::bail!("duplicate statements.name: {}", s.name);
            }
            if s.table.trim().is_empty() {
                anyhow::bail!("statements.table must not be empty (statement: {})", s.name);
            }
            let mutates = matches!(s.kind, KindConfig::Insert | KindConfig::Update);
            if !mutates && !s.values.is_empty() {
                anyhow::bail!(
                    "statements.values is only allowed for insert and update (statement: {})",
                    s.name
                );
            }
        }

        Ok(())
    }

    pub fn statement(&self, name: &str) -> Option<&StatementConfig> {
        self.statements.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_statement() {
        let file = ConfigFile::parse(
            r#"
version = "1"
dialect = "postgres"

[[statements]]
name = "active_users"
kind = "select"
table = "users"
columns = ["id", "name"]
limit = 20

[[statements.joins]]
kind = "LEFT"
table = "teams"
on = ["teams.id", "users.team_id"]

[[statements.filters]]
column = "users.status"
values = ["active"]

[[statements.filters]]
column = "users.role"
op = "in"
values = ["admin", "owner"]
or = true

[[statements.order_by]]
column = "users.name"
desc = true
"#,
        )
        .unwrap();

        assert_eq!(file.dialect, Some(Dialect::Postgres));
        let s = file.statement("active_users").unwrap();
        assert_eq!(s.kind, KindConfig::Select);
        assert_eq!(s.joins[0].on, ["teams.id".to_string(), "users.team_id".to_string()]);
        assert_eq!(s.filters[0].op, "=");
        assert!(s.filters[1].or);
        assert!(s.order_by[0].desc);
        assert_eq!((s.limit, s.offset), (20, 0));
        assert!(s.targets.is_none());
    }

    #[test]
    fn rejects_bad_version() {
        let err = ConfigFile::parse("version = \"2\"").unwrap_err();
        assert!(err.to_string().contains("unsupported config version"));
    }

    #[test]
    fn rejects_duplicate_names() {
        let raw = r#"
version = "1"

[[statements]]
name = "a"
kind = "delete"
table = "t"

[[statements]]
name = "a"
kind = "select"
table = "t"
"#;
        let err = ConfigFile::parse(raw).unwrap_err();
        assert!(err.to_string().contains("duplicate statements.name: a"));
    }

    #[test]
    fn rejects_values_on_select() {
        let raw = r#"
version = "1"

[[statements]]
name = "a"
kind = "select"
table = "t"
values = [1]
"#;
        assert!(ConfigFile::parse(raw).is_err());
    }

    #[test]
    fn rejects_unknown_kind_and_dialect() {
        let kind = r#"
version = "1"

[[statements]]
name = "a"
kind = "merge"
table = "t"
"#;
        assert!(ConfigFile::parse(kind).is_err());
        assert!(ConfigFile::parse("version = \"1\"\ndialect = \"db2\"").is_err());
    }
}
