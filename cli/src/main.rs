use std::sync::Once;

use clap::Parser;
use yaso_bench_core::{ConsoleSink, Registry};
use yaso_bench_stdlib::{process, suites};


static TRACE_INIT: Once = Once::new();
const DEFAULT_TRACE_FILTER: &str = "yaso::bench=debug,yaso::suites=debug,yaso::process=debug,yaso::cli=info";

#[derive(Debug, Parser)]
#[command(
    name = "yaso-bench",
    author,
    version,
    about = "Time yaso runtime library calls",
    long_about = None,
    after_help = "Set YASO_BENCH_TRACE=1 (or a filter such as yaso::bench=trace) to log to stderr."
)]
struct CliArgs {
    /// Suites to run, in order (events, os, path, process). All suites when omitted.
    #[arg(value_name = "SUITE")]
    suites: Vec<String>,

    /// Print `category<TAB>title` for every benchmark instead of running them
    #[arg(long)]
    list: bool,
}

fn env_toggle_enabled(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }
    !(trimmed.eq_ignore_ascii_case("0") || trimmed.eq_ignore_ascii_case("false") || trimmed.eq_ignore_ascii_case("off"))
}

fn filter_expr_from(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("1")
        || trimmed.eq_ignore_ascii_case("true")
        || trimmed.eq_ignore_ascii_case("on")
    {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn maybe_init_tracing() {
    let raw = match std::env::var("YASO_BENCH_TRACE") {
        Ok(value) => value,
        Err(_) => return,
    };

    if !env_toggle_enabled(&raw) {
        return;
    }

    TRACE_INIT.call_once(|| {
        let filter = trace_filter(&raw, std::env::var("RUST_LOG").ok());
        let _ = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .try_init();
    });
}

/// Filter from the toggle value, then `RUST_LOG`, then the default. Expressions
/// that do not parse fall back to the default.
fn trace_filter(raw: &str, rust_log: Option<String>) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    filter_expr_from(raw)
        .or(rust_log)
        .and_then(|expr| EnvFilter::try_new(expr).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_TRACE_FILTER))
}

/// Register the requested suites, each at most once, in the order given.
fn build_registry(names: &[String]) -> anyhow::Result<Registry> {
    let mut registry = Registry::new();
    if names.is_empty() {
        suites::register_all(&mut registry);
        return Ok(registry);
    }

    let mut seen: Vec<&str> = Vec::with_capacity(names.len());
    for name in names {
        if seen.contains(&name.as_str()) {
            continue;
        }
        suites::register_suite(&mut registry, name)?;
        seen.push(name);
    }
    Ok(registry)
}

fn list_lines(registry: &Registry) -> Vec<String> {
    registry
        .entries()
        .map(|entry| format!("{}\t{}", entry.category(), entry.title()))
        .collect()
}

fn main() -> anyhow::Result<()> {
    maybe_init_tracing();
    process::start_clock();

    let CliArgs { suites, list } = CliArgs::parse();
    let mut registry = build_registry(&suites)?;
    tracing::info!(target: "yaso::cli", entries = registry.len(), categories = ?registry.categories(), "benchmarks registered");

    if list {
        for line in list_lines(&registry) {
            println!("{}", line);
        }
        return Ok(());
    }

    registry.run_all(&mut ConsoleSink)
}
