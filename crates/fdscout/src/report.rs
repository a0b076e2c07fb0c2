//! Human-readable and JSON rendering of discovered dependencies.

use std::fmt::Write;
use std::time::Duration;

use serde_json::json;

use crate::discovery::FunctionalDependency;
use crate::error::Result;
use crate::miner::DiscoveryResult;
use crate::timing::TimingReport;

/// Title line printed above the dependency list.
pub const TITLE: &str = "Discovered FDs:";

/// One dependency per line, under [`TITLE`].
pub fn render_text(dependencies: &[FunctionalDependency]) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    for fd in dependencies {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}", fd);
    }
    out
}

/// Per-trial and average durations, one line each.
pub fn render_timing(report: &TimingReport) -> String {
    let mut out = String::new();
    for (i, elapsed) in report.trials.iter().enumerate() {
        let _ = writeln!(out, "Trial {}: {:.3} ms", i + 1, millis(*elapsed));
    }
    let _ = writeln!(
        out,
        "Average over {} trial(s): {:.3} ms",
        report.trials.len(),
        millis(report.average)
    );
    out
}

/// Pretty-printed JSON for a discovery result, with timings when the run was
/// repeated.
pub fn render_json(result: &DiscoveryResult, timing: Option<&TimingReport>) -> Result<String> {
    let mut value = serde_json::to_value(result)?;

    if let Some(report) = timing {
        let trials: Vec<f64> = report.trials.iter().map(|d| millis(*d)).collect();
        value["timing"] = json!({
            "trials_ms": trials,
            "average_ms": millis(report.average),
            "min_ms": millis(report.min),
            "max_ms": millis(report.max),
        });
    }

    Ok(serde_json::to_string_pretty(&value)?)
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        let fds = vec![
            FunctionalDependency::new(vec!["A".into()], "C", 1.0),
            FunctionalDependency::new(vec!["A".into(), "B".into()], "D", 0.75),
        ];
        assert_eq!(
            render_text(&fds),
            "Discovered FDs:\nA -> C with support 1.0\nA, B -> D with support 0.75\n"
        );
    }

    #[test]
    fn test_render_timing() {
        let report = TimingReport::from_durations(vec![
            Duration::from_millis(2),
            Duration::from_millis(4),
        ]);
        assert_eq!(
            render_timing(&report),
            "Trial 1: 2.000 ms\nTrial 2: 4.000 ms\nAverage over 2 trial(s): 3.000 ms\n"
        );
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_text(&[]), "Discovered FDs:\n");
    }
}
