use anyhow::Result;
use clap::Parser;
use jar_audit::audit;
use jar_audit::cli::Cli;
use jar_audit::config::AuditConfig;
use jar_audit::report::render;
use std::io::Write;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AuditConfig::from_cli(&cli)?;
    let report = audit::run(&config)?;
    let content = render(&report, config.mode, config.format)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    if !content.is_empty() && !content.ends_with('\n') {
        writeln!(stdout)?;
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
