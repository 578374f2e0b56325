use crate::cli::InitArgs;
use std::path::Path;

pub fn run(args: InitArgs) -> anyhow::Result<()> {
    write_template(&args.config)
}

const TEMPLATE: &str = r#"
version = "1"
dialect = "postgres" # generic | mysql | sqlite | postgres | oracle

[[statements]]
name = "find_active_users"
kind = "select"
table = "users"
columns = ["id", "name", "teams.name"]
targets = ["id", "name", "team"]
limit = 20

[[statements.joins]]
kind = "LEFT"
table = "teams"
on = ["teams.id", "users.team_id"]

[[statements.filters]]
column = "users.status"
op = "="
values = ["active"]

[[statements.order_by]]
column = "users.created_at"
desc = true

[[statements]]
name = "create_user"
kind = "insert"
table = "users"
columns = ["name", "status"]
values = ["ada", "active"]
returning = ["id"]

[[statements]]
name = "deactivate_user"
kind = "update"
table = "users"
dialect = "oracle"
columns = ["status"]
values = ["inactive"]

[[statements.filters]]
column = "users.id"
values = [42]
"#;

fn write_template(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("refusing to overwrite existing file: {}", path.display());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!("failed to create directory {}: {e}", parent.display())
            })?;
        }
    }

    std::fs::write(path, TEMPLATE.trim_start_matches('\n'))
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?;

    println!("wrote {}", path.display());
    Ok(())
}
