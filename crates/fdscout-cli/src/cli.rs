//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// fdscout: discover approximate functional dependencies in a delimited file
#[derive(Parser, Debug)]
#[command(name = "fdscout")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the data file (CSV/TSV)
    #[arg(value_name = "DATA_FILE")]
    pub file: PathBuf,

    /// Maximum number of attributes on the left-hand side
    #[arg(value_name = "DEPTH_LIMIT")]
    pub depth_limit: usize,

    /// Minimum support for a dependency to be reported (0.0-1.0)
    #[arg(value_name = "MINIMUM_SUPPORT")]
    pub minimum_support: f64,

    /// Run discovery this many times and report timings
    #[arg(value_name = "TRIALS")]
    pub trials: Option<usize>,

    /// Field delimiter (default: auto-detect)
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Evaluate candidates in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Enable verbose output (debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl Cli {
    /// Delimiter as a byte, if one was given.
    pub fn delimiter_byte(&self) -> Result<Option<u8>, String> {
        match self.delimiter {
            None => Ok(None),
            Some(c) if c.is_ascii() => Ok(Some(c as u8)),
            Some(c) => Err(format!("Delimiter must be a single ASCII character, got '{}'", c)),
        }
    }

    /// Log filter directive: explicit level, else debug when verbose, else warn.
    pub fn log_directive(&self) -> String {
        match (&self.log_level, self.verbose) {
            (Some(level), _) => level.to_lowercase(),
            (None, true) => "debug".to_string(),
            (None, false) => "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_arguments() {
        let cli = Cli::try_parse_from(["fdscout", "data.csv", "3", "0.91"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("data.csv"));
        assert_eq!(cli.depth_limit, 3);
        assert_eq!(cli.minimum_support, 0.91);
        assert_eq!(cli.trials, None);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_trials_and_flags() {
        let cli = Cli::try_parse_from([
            "fdscout", "data.tsv", "2", "0.5", "10", "--format", "json", "--parallel", "-d", "\t",
        ])
        .unwrap();
        assert_eq!(cli.trials, Some(10));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.parallel);
        assert_eq!(cli.delimiter_byte().unwrap(), Some(b'\t'));
    }

    #[test]
    fn test_missing_arguments() {
        assert!(Cli::try_parse_from(["fdscout", "data.csv", "3"]).is_err());
        assert!(Cli::try_parse_from(["fdscout"]).is_err());
    }

    #[test]
    fn test_malformed_numbers() {
        assert!(Cli::try_parse_from(["fdscout", "data.csv", "three", "0.9"]).is_err());
        assert!(Cli::try_parse_from(["fdscout", "data.csv", "3", "high"]).is_err());
        assert!(Cli::try_parse_from(["fdscout", "data.csv", "3", "0.9", "-1"]).is_err());
    }

    #[test]
    fn test_log_directive() {
        let quiet = Cli::try_parse_from(["fdscout", "d.csv", "1", "1.0"]).unwrap();
        assert_eq!(quiet.log_directive(), "warn");

        let verbose = Cli::try_parse_from(["fdscout", "d.csv", "1", "1.0", "-v"]).unwrap();
        assert_eq!(verbose.log_directive(), "debug");

        let explicit =
            Cli::try_parse_from(["fdscout", "d.csv", "1", "1.0", "-v", "--log-level", "TRACE"])
                .unwrap();
        assert_eq!(explicit.log_directive(), "trace");
    }

    #[test]
    fn test_non_ascii_delimiter() {
        let cli = Cli::try_parse_from(["fdscout", "d.csv", "1", "1.0", "-d", "é"]).unwrap();
        assert!(cli.delimiter_byte().is_err());
    }
}
