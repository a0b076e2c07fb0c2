//! Example: Discover approximate functional dependencies in a data file.
//!
//! Usage:
//!   cargo run --example discover -- <file_path> [depth_limit] [minimum_support]
//!
//! Example:
//!   cargo run --example discover -- orders.csv 2 0.95

use std::env;
use std::path::Path;

use fdscout::{Miner, MinerConfig};

fn main() -> fdscout::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example discover -- <file_path> [depth_limit] [minimum_support]");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example discover -- orders.csv 2 0.95");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let depth_limit = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(2);
    let minimum_support = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(0.9);

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Dependency discovery: {}", file_path);
    println!("{}", separator);
    println!();

    let miner = Miner::with_config(MinerConfig::new(depth_limit, minimum_support));
    let result = miner.discover_file(path)?;

    println!("## Source Metadata");
    println!("  File: {}", result.source.file);
    println!("  Format: {}", result.source.format);
    println!("  Rows: {}", result.source.row_count);
    println!("  Columns: {}", result.source.column_count);
    println!();

    println!(
        "## Dependencies (depth <= {}, support >= {})",
        depth_limit, minimum_support
    );
    println!();
    for fd in &result.dependencies {
        let marker = if fd.is_exact() { "exact" } else { "" };
        println!(
            "  {:40} {:>8.4} {}",
            format!("{} -> {}", fd.lhs.join(", "), fd.rhs),
            fd.support,
            marker
        );
    }
    println!();

    println!("## Summary");
    println!("  Candidates: {}", result.summary.candidate_count);
    println!("  Pairs scored: {}", result.summary.pairs_evaluated);
    println!("  Dependencies: {}", result.summary.dependency_count);
    println!("  Exact: {}", result.summary.exact_count);
    println!("  Elapsed: {:.2} ms", result.summary.elapsed_ms);

    Ok(())
}
