//! `kube-role-finder` command line entry point.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use rolefinder_cli::{run, FinderConfig, KubeRoleSource};
use rolefinder_output::{FixedTerminal, SttyProbe, TerminalInfo};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = FinderConfig::parse();
    if config.wants_usage() {
        // Usage goes to stderr; stdout carries only the report
        eprint!("{}", FinderConfig::command().render_help());
        return Ok(());
    }

    let query = config.query()?;
    let source = KubeRoleSource::connect(&config.cluster_access()?).await?;

    let terminal: Box<dyn TerminalInfo> = match config.width {
        Some(columns) => Box::new(FixedTerminal::with_columns(columns)),
        None => Box::new(SttyProbe::new()),
    };

    let output = run(&source, terminal.as_ref(), &query).await?;
    print!("{output}");
    Ok(())
}
