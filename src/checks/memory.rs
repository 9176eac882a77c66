//! Memory check: installed capacity, per-module details, and the synthetic
//! throughput benchmark.

use super::{CheckContext, CheckOutcome};
use crate::bench;
use crate::report::Verdict;

/// Throughput at or below this is flagged as slow.
const THROUGHPUT_FLOOR_MB_S: f64 = 5000.0;

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

pub fn classify_throughput(mb_per_s: f64) -> bool {
    mb_per_s > THROUGHPUT_FLOOR_MB_S
}

pub fn run(ctx: &CheckContext) -> CheckOutcome {
    let mut verdicts = Vec::new();

    let total = ctx.inventory.total_memory_bytes()?;
    verdicts.push(Verdict::ok(
        "memory",
        "total capacity",
        format!("{:.2} GB", total as f64 / GIB),
    ));

    for module in ctx.inventory.memory_modules()? {
        let manufacturer = module.manufacturer.as_deref().unwrap_or("unknown");
        let capacity = module
            .capacity_bytes
            .map(|b| format!("{:.2} GB", b as f64 / GIB))
            .unwrap_or_else(|| "unknown size".to_string());
        let speed = module
            .speed_mhz
            .map(|mhz| format!("{mhz} MHz"))
            .unwrap_or_else(|| "unknown speed".to_string());
        verdicts.push(Verdict::ok(
            "memory",
            "module",
            format!("{manufacturer}, {capacity}, {speed}"),
        ));
    }

    if !ctx.skip_benchmarks {
        match bench::memory_benchmark() {
            Ok(outcome) => {
                let message = format!("throughput: {:.2} MB/s", outcome.metric);
                let verdict = if classify_throughput(outcome.metric) {
                    Verdict::ok("memory", "benchmark", message)
                } else {
                    Verdict::warn("memory", "benchmark", message)
                };
                verdicts.push(verdict);
            }
            Err(err) => verdicts.push(Verdict::error("memory", "benchmark", err.to_string())),
        }
    }

    Ok(verdicts)
}
