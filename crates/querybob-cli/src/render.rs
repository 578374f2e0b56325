use crate::cli::{OutputFormat, RenderArgs};
use crate::config::{ConfigFile, KindConfig, ProjectConfig, StatementConfig};
use anyhow::Context;
use querybob::{Builder, Dialect, Target, Value};
use serde::Serialize;

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let project = ProjectConfig::load(args.config)?;
    let rendered = render_all(&project.file, &args.names)
        .with_context(|| format!("config {}", project.config_path.display()))?;

    match args.format {
        OutputFormat::Text => print!("{}", format_text(&rendered)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rendered)?),
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct Rendered {
    pub name: String,
    pub dialect: Dialect,
    pub sql: String,
    pub params: Vec<Value>,
    pub targets: Vec<Target>,
}

/// Render the named statements in request order, or all of them in file order.
pub fn render_all(file: &ConfigFile, names: &[String]) -> anyhow::Result<Vec<Rendered>> {
    let selected: Vec<&StatementConfig> = if names.is_empty() {
        file.statements.iter().collect()
    } else {
        names
            .iter()
            .map(|n| {
                file.statement(n)
                    .ok_or_else(|| anyhow::anyhow!("unknown statement: {n}"))
            })
            .collect::<anyhow::Result<_>>()?
    };

    selected
        .into_iter()
        .map(|stmt| render_one(stmt, file.dialect.unwrap_or_default()))
        .collect()
}

fn render_one(stmt: &StatementConfig, default_dialect: Dialect) -> anyhow::Result<Rendered> {
    let qb = to_builder(stmt, default_dialect);
    let built = qb
        .build()
        .with_context(|| format!("statement '{}'", stmt.name))?;
    let (sql, params, targets) = built.into_parts();
    Ok(Rendered {
        name: stmt.name.clone(),
        dialect: qb.current_dialect(),
        sql,
        params,
        targets,
    })
}

pub fn to_builder(stmt: &StatementConfig, default_dialect: Dialect) -> Builder {
    let table = stmt.table.as_str();
    let mut qb = match stmt.kind {
        KindConfig::Select => Builder::select(table),
        KindConfig::Insert => Builder::insert(table),
        KindConfig::Update => Builder::update(table),
        KindConfig::Delete => Builder::delete(table),
    }
    .dialect(stmt.dialect.unwrap_or(default_dialect));

    let columns = as_strs(&stmt.columns);
    qb = match stmt.kind {
        KindConfig::Select => {
            let targets = stmt.targets.as_ref().unwrap_or(&stmt.columns);
            qb.columns(&columns).into_targets(targets.iter().map(String::as_str))
        }
        KindConfig::Insert | KindConfig::Update => qb
            .set(&columns)
            .to(stmt.values.iter().cloned().map(Value::from_json)),
        KindConfig::Delete => qb,
    };

    for j in &stmt.joins {
        qb = qb.join(&j.kind.to_uppercase(), &j.table, &j.on[0], &j.on[1]);
    }

    for f in &stmt.filters {
        let values = f.values.iter().cloned().map(Value::from_json);
        qb = if f.or {
            qb.or_filter(&f.column, &f.op, values)
        } else {
            qb.filter(&f.column, &f.op, values)
        };
    }

    for o in &stmt.order_by {
        qb = if o.desc {
            qb.order_by_desc(&o.column)
        } else {
            qb.order_by(&o.column)
        };
    }

    if !stmt.returning.is_empty() {
        let targets = stmt.returning_into.as_ref().unwrap_or(&stmt.returning);
        qb = qb
            .returning(&as_strs(&stmt.returning))
            .returning_into(targets.iter().map(String::as_str));
    }

    qb.limit(stmt.limit, stmt.offset)
}

fn as_strs(v: &[String]) -> Vec<&str> {
    v.iter().map(String::as_str).collect()
}

/// `$2`/`:2` for numbered dialects, `?2` where every token is a bare `?`.
fn param_label(dialect: Dialect, n: usize) -> String {
    if dialect.numbered_placeholders() {
        dialect.placeholder(n)
    } else {
        format!("?{n}")
    }
}

fn describe(value: &Value) -> String {
    if value.is_null() {
        value.to_string()
    } else {
        format!("{value} ({})", value.kind_name())
    }
}

fn format_text(rendered: &[Rendered]) -> String {
    let mut out = String::new();
    for r in rendered {
        out.push_str(&format!("-- {} ({})\n", r.name, r.dialect));
        out.push_str(&r.sql);
        out.push('\n');
        for (i, p) in r.params.iter().enumerate() {
            out.push_str(&format!("--   {} = {}\n", param_label(r.dialect, i + 1), describe(p)));
        }
        if !r.targets.is_empty() {
            let names: Vec<&str> = r.targets.iter().map(Target::name).collect();
            out.push_str(&format!("--   into {}\n", names.join(", ")));
        }
        out.push('\n');
    }
    out
}
