use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{display, open_engine, Cli, Commands};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search {
            corpus,
            query,
            limit,
            engine: args,
        } => {
            let engine = open_engine(&corpus, &args)?;
            let results = engine.search(&query);
            let shown = &results[..results.len().min(limit)];
            if args.json {
                print_json(shown)?;
            } else {
                display::print_results(&query, shown, results.len());
            }
        }
        Commands::Suggest {
            corpus,
            prefix,
            limit,
            engine: args,
        } => {
            let engine = open_engine(&corpus, &args)?;
            let suggestions = engine.suggestions(&prefix, limit);
            if args.json {
                print_json(&suggestions)?;
            } else {
                display::print_suggestions(&prefix, &suggestions);
            }
        }
        Commands::Stats {
            corpus,
            engine: args,
        } => {
            let engine = open_engine(&corpus, &args)?;
            let stats = engine.stats();
            if args.json {
                print_json(&stats)?;
            } else {
                display::print_stats(&stats);
            }
        }
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
