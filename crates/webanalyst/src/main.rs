mod cli;
mod commands;
mod prompt;
mod report;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

const CRATE_TARGETS: [&str; 3] = ["webanalyst", "webanalyst_core", "webanalyst_source"];

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the report
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(cli.verbose, rust_log.as_deref()))
        .init();

    match cli.command {
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Version => commands::version::run(),
    }
}

/// `RUST_LOG` (or `warn`) as the base; each `-v` raises only our own crates
fn env_filter(verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    let base = rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    let level = match verbose {
        0 => return base,
        1 => "debug",
        _ => "trace",
    };
    CRATE_TARGETS.iter().fold(base, |filter, target| {
        match format!("{target}={level}").parse() {
            Ok(directive) => filter.add_directive(directive),
            Err(_) => filter,
        }
    })
}
