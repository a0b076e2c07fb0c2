//! Discover command - find approximate functional dependencies in a data file.

use colored::Colorize;
use fdscout::report::{self, TITLE};
use fdscout::{DiscoveryResult, Miner, MinerConfig, ParserConfig, TimingHarness};

use crate::cli::{Cli, OutputFormat};

pub fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.file.exists() {
        return Err(format!("File not found: {}", cli.file.display()).into());
    }

    let mut parser = ParserConfig::default();
    if let Some(delimiter) = cli.delimiter_byte()? {
        parser = parser.with_delimiter(delimiter);
    }

    let config = MinerConfig::new(cli.depth_limit, cli.minimum_support)
        .with_parser(parser)
        .with_parallel(cli.parallel);
    config.validate()?;
    let miner = Miner::with_config(config);

    let text = cli.format == OutputFormat::Text;
    if text {
        println!(
            "{} {} (depth {}, minimum support {})",
            "Discovering".cyan().bold(),
            cli.file.display().to_string().white(),
            cli.depth_limit,
            cli.minimum_support
        );
    }

    // The file is loaded once; timed trials only cover discovery.
    let (table, source) = miner.load(&cli.file)?;

    let (outcome, timing) = match cli.trials {
        Some(trials) => {
            let harness = TimingHarness::new(trials)?;
            let (outcome, timing) = harness.run(|| miner.discover(&table))?;
            (outcome, Some(timing))
        }
        None => (miner.discover(&table)?, None),
    };
    let result = DiscoveryResult::from_outcome(source, miner.config(), outcome);

    if !text {
        println!("{}", report::render_json(&result, timing.as_ref())?);
        return Ok(());
    }

    if cli.verbose {
        println!();
        println!("{}", "Summary:".yellow().bold());
        println!("  {:12} {}", "attributes", result.summary.attribute_count);
        println!("  {:12} {}", "rows", result.summary.row_count);
        println!("  {:12} {}", "candidates", result.summary.candidate_count);
        println!("  {:12} {}", "pairs", result.summary.pairs_evaluated);
        println!("  {:12} {}", "source hash", result.source.hash);
    }

    let listing = report::render_text(&result.dependencies);
    println!();
    print!(
        "{}",
        listing.replacen(TITLE, &TITLE.green().bold().to_string(), 1)
    );

    println!();
    println!(
        "Found {} dependencies ({} exact)",
        result.summary.dependency_count.to_string().white().bold(),
        result.summary.exact_count.to_string().green()
    );

    if let Some(timing) = timing {
        println!();
        print!("{}", report::render_timing(&timing));
    }

    Ok(())
}
