use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    Root,
    Render,
    Init,
}

#[derive(Debug, Clone)]
pub enum Command {
    Help(HelpTopic),
    Render(RenderArgs),
    Init(InitArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct RenderArgs {
    pub config: PathBuf,
    pub format: OutputFormat,
    /// Statement names to render; empty means all.
    pub names: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct InitArgs {
    pub config: PathBuf,
}

const DEFAULT_CONFIG: &str = "querybob.toml";

pub fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let mut it = args.iter().skip(1);
    let Some(first) = it.next() else {
        return Ok(Command::Help(HelpTopic::Root));
    };

    match first.as_str() {
        "-h" | "--help" | "help" => Ok(Command::Help(HelpTopic::Root)),
        "render" => parse_render(it.map(|s| s.as_str())),
        "init" => parse_init(it.map(|s| s.as_str())),
        _ => anyhow::bail!("unknown command: {first}"),
    }
}

fn parse_render<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut config = PathBuf::from(DEFAULT_CONFIG);
    let mut format = OutputFormat::Text;
    let mut names = Vec::new();

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => return Ok(Command::Help(HelpTopic::Render)),
            "--config" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--config requires a value");
                };
                config = PathBuf::from(v);
            }
            _ if token.starts_with("--config=") => {
                config = PathBuf::from(token.trim_start_matches("--config="));
            }
            "--format" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--format requires a value");
                };
                format = parse_format(v)?;
            }
            _ if token.starts_with("--format=") => {
                format = parse_format(token.trim_start_matches("--format="))?;
            }
            "--json" => format = OutputFormat::Json,
            other if other.starts_with('-') => anyhow::bail!("unknown argument: {other}"),
            name => names.push(name.to_string()),
        }
    }

    Ok(Command::Render(RenderArgs {
        config,
        format,
        names,
    }))
}

fn parse_format(v: &str) -> anyhow::Result<OutputFormat> {
    match v {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }
}

fn parse_init<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut config = PathBuf::from(DEFAULT_CONFIG);

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => return Ok(Command::Help(HelpTopic::Init)),
            "--config" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--config requires a value");
                };
                config = PathBuf::from(v);
            }
            _ if token.starts_with("--config=") => {
                config = PathBuf::from(token.trim_start_matches("--config="));
            }
            other => anyhow::bail!("unknown argument: {other}"),
        }
    }

    Ok(Command::Init(InitArgs { config }))
}

pub fn print_help(topic: HelpTopic) {
    match topic {
        HelpTopic::Root => {
            println!(
                "\
querybob - render SQL statements described in a TOML file

USAGE:
  querybob <COMMAND> [OPTIONS]

COMMANDS:
  render        Print the SQL and parameters of configured statements
  init          Write a template config file

Run `querybob <command> --help` for more."
            );
        }
        HelpTopic::Render => {
            println!(
                "\
USAGE:
  querybob render [OPTIONS] [NAME...]

OPTIONS:
  --config <FILE>       Config file path (default: querybob.toml)
  --format <FORMAT>     text | json (default: text)
  --json                Same as --format json
  -h, --help            Print help

With no NAME, every statement in the config is rendered."
            );
        }
        HelpTopic::Init => {
            println!(
                "\
USAGE:
  querybob init [OPTIONS]

OPTIONS:
  --config <FILE>       Config file path (default: querybob.toml)
  -h, --help            Print help"
            );
        }
    }
}
