//! CPU check: processor identification and the synthetic sqrt benchmark.

use super::{CheckContext, CheckOutcome};
use crate::bench;
use crate::report::Verdict;

/// Scores at or below this suggest a badly throttled or misrepresented CPU.
const SCORE_FLOOR_OPS_S: f64 = 50_000_000.0;

pub fn classify_score(ops_per_s: f64) -> bool {
    ops_per_s > SCORE_FLOOR_OPS_S
}

pub fn run(ctx: &CheckContext) -> CheckOutcome {
    let mut verdicts = Vec::new();

    for cpu in ctx.inventory.cpus()? {
        let name = cpu.name.as_deref().unwrap_or("unknown CPU");
        let cores = cpu
            .cores
            .map(|c| c.to_string())
            .unwrap_or_else(|| "?".to_string());
        let threads = cpu
            .threads
            .map(|t| t.to_string())
            .unwrap_or_else(|| "?".to_string());
        let current = cpu
            .current_mhz
            .map(|c| c.to_string())
            .unwrap_or_else(|| "?".to_string());
        let max = cpu
            .max_mhz
            .map(|m| m.to_string())
            .unwrap_or_else(|| "?".to_string());
        verdicts.push(Verdict::ok(
            "cpu",
            "info",
            format!("{name}, {cores} cores/{threads} threads, clock: {current}/{max} MHz"),
        ));
    }

    if !ctx.skip_benchmarks {
        match bench::cpu_benchmark() {
            Ok(outcome) => {
                let message = format!(
                    "score: {:.0} ops/s (elapsed: {}ms)",
                    outcome.metric,
                    outcome.elapsed.as_millis()
                );
                let verdict = if classify_score(outcome.metric) {
                    Verdict::ok("cpu", "benchmark", message)
                } else {
                    Verdict::warn("cpu", "benchmark", message)
                };
                verdicts.push(verdict);
            }
            Err(err) => verdicts.push(Verdict::error("cpu", "benchmark", err.to_string())),
        }
    }

    Ok(verdicts)
}
