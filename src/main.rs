use anyhow::{Context, Result};
use clap::Parser;

use searchdomain::app::{Cli, collect_inputs, count_failures, parse_all, write_reports};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("CLI: Failed to initialize thread pool")?;
    }

    let (domains, parser) = collect_inputs(&cli)?;
    tracing::info!(
        "Parsing {} domains (max depth {})",
        domains.len(),
        parser.max_depth
    );

    let start = std::time::Instant::now();
    let reports = parse_all(&domains, &parser);
    write_reports(&reports, cli.format, &mut std::io::stdout().lock())?;

    let failures = count_failures(&reports);
    tracing::info!(
        "Done! Parsed {} domains in {:.2}ms ({} failed)",
        reports.len(),
        start.elapsed().as_secs_f64() * 1000.0,
        failures
    );

    if failures > 0 {
        anyhow::bail!("{} of {} domains failed to parse", failures, reports.len());
    }

    Ok(())
}
