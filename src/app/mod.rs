use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use std::io::Write;
use std::path::PathBuf;

use crate::config::{ParserConfig, PatternsConfig};
use crate::domain::{DomainError, Expression, parse_with};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Domain strings to parse, e.g. "[('name','=','My Name')]"
    pub domains: Vec<String>,

    /// YAML file with a `patterns` list of domains
    #[arg(short, long)]
    pub patterns: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Maximum bracket nesting depth (overrides the patterns file)
    #[arg(long, env = "SEARCHDOMAIN_MAX_DEPTH")]
    pub max_depth: Option<usize>,

    /// Number of threads (default: all cores)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum OutputFormat {
    #[value(name = "text")]
    Text,
    #[value(name = "json", alias = "jsonl")]
    Json,
}

/// Outcome of parsing one domain string.
#[derive(Debug)]
pub struct ParseReport {
    pub domain: String,
    pub result: Result<Expression, DomainError>,
}

/// Gather the domains to parse and the parser settings from the CLI.
///
/// Domains from the patterns file come first, then positional ones.
pub fn collect_inputs(cli: &Cli) -> Result<(Vec<String>, ParserConfig)> {
    let mut domains = Vec::new();
    let mut parser = ParserConfig::default();

    if let Some(path) = &cli.patterns {
        let loaded = PatternsConfig::load(path)
            .with_context(|| format!("Config: Failed to load patterns from {:?}", path))?;
        tracing::info!("Loaded {} patterns from {:?}", loaded.patterns.len(), path);
        domains.extend(loaded.patterns);
        parser = loaded.parser;
    }
    domains.extend(cli.domains.iter().cloned());

    if let Some(max_depth) = cli.max_depth {
        parser.max_depth = max_depth;
    }

    if domains.is_empty() {
        anyhow::bail!("CLI: No domains given; pass them as arguments or use --patterns");
    }

    Ok((domains, parser))
}

/// Parse every domain in parallel, keeping input order.
pub fn parse_all(domains: &[String], config: &ParserConfig) -> Vec<ParseReport> {
    domains
        .par_iter()
        .map(|domain| ParseReport {
            domain: domain.clone(),
            result: parse_with(domain, config),
        })
        .collect()
}

pub fn write_reports<W: Write>(
    reports: &[ParseReport],
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    for report in reports {
        match format {
            OutputFormat::Text => match &report.result {
                Ok(expression) => writeln!(
                    out,
                    "Parsed domain '{}' to filter: {}",
                    report.domain, expression
                )?,
                Err(e) => writeln!(out, "Error parsing domain '{}': {}", report.domain, e)?,
            },
            OutputFormat::Json => {
                let line = match &report.result {
                    Ok(expression) => serde_json::json!({
                        "domain": report.domain,
                        "filter": expression,
                    }),
                    Err(e) => serde_json::json!({
                        "domain": report.domain,
                        "error": e.to_string(),
                    }),
                };
                serde_json::to_writer(&mut *out, &line)
                    .context("Output: Failed to serialize report")?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

pub fn count_failures(reports: &[ParseReport]) -> usize {
    reports.iter().filter(|r| r.result.is_err()).count()
}
