use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use cortex_agent_ddl::{AgentTarget, AnalystViewField, RenderOptions, StatementRenderer};

#[derive(Parser)]
#[command(
    name = "cortex-agent-ddl",
    about = "Generate a CREATE AGENT statement from a Cortex Agent JSON specification",
    version
)]
struct Cli {
    /// Database name
    #[arg(short, long)]
    database: String,

    /// Schema name
    #[arg(short, long)]
    schema: String,

    /// Agent name
    #[arg(short, long)]
    agent: String,

    /// Path to the specification JSON; "-" reads stdin
    #[arg(long, default_value = "-")]
    spec: PathBuf,

    /// COMMENT clause text
    #[arg(long, default_value = "")]
    comment: String,

    /// Keep description fields at full length
    #[arg(long)]
    no_truncate: bool,

    /// Escape embedded double quotes in quoted values
    #[arg(long)]
    escape_quotes: bool,

    /// Omit the profile section
    #[arg(long)]
    skip_profile: bool,

    /// Key emitted for semantic-view analyst resources
    #[arg(long, value_enum, default_value_t = AnalystViewField::SemanticView)]
    analyst_view_field: AnalystViewField,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_filter = if std::env::var("CORTEX_AGENT_DDL_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_env("CORTEX_AGENT_DDL_LOG")
    } else {
        tracing_subscriber::EnvFilter::new("cortex_agent_ddl=warn")
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr) // log to stderr so stdout carries only the statement
        .with_env_filter(env_filter)
        .init();

    let target = AgentTarget::new(&cli.database, &cli.schema, &cli.agent)?;
    let spec_text = read_spec(&cli.spec)?;
    tracing::debug!("specification: {} bytes", spec_text.len());

    let options = RenderOptions {
        truncate_descriptions: !cli.no_truncate,
        escape_embedded_quotes: cli.escape_quotes,
        include_profile_section: !cli.skip_profile,
        analyst_view_field: cli.analyst_view_field,
    };

    let sql = StatementRenderer::with_options(options).render(&target, &spec_text, &cli.comment);
    if sql.starts_with("--") {
        tracing::warn!("specification did not parse; emitting error comment");
    }
    println!("{}", sql);
    Ok(())
}

fn read_spec(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read specification from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("read specification file '{}'", path.display()))
    }
}
