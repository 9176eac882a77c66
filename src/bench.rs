//! Synthetic benchmark workloads.
//!
//! Both are blocking, single-threaded, stopwatch-timed proxies for hardware
//! health, not correctness checks. The workload shapes and iteration counts
//! are fixed because the WARN thresholds were calibrated against them.

use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::inventory::{InventoryError, InventoryResult};

/// Iterations for the CPU square-root loop.
pub const CPU_BENCH_ITERATIONS: u64 = 100_000_000;

/// Memory benchmark buffer size: 100 MB (decimal, matching the reported
/// throughput unit).
pub const MEM_BENCH_BYTES: usize = 100_000_000;

/// Stride at which the memory benchmark touches the buffer.
const MEM_BENCH_STRIDE: usize = 4096;

#[derive(Debug, Clone, Copy)]
pub struct BenchOutcome {
    /// CPU: ops/s. Memory: MB/s.
    pub metric: f64,
    pub elapsed: Duration,
}

/// Sum square roots of `0..CPU_BENCH_ITERATIONS` and report ops/s.
pub fn cpu_benchmark() -> InventoryResult<BenchOutcome> {
    let start = Instant::now();
    let mut sum = 0.0f64;
    for i in 0..CPU_BENCH_ITERATIONS {
        sum += (i as f64).sqrt();
    }
    black_box(sum);

    let elapsed = start.elapsed();
    let secs = elapsed.as_secs_f64();
    if secs <= 0.0 {
        return Err(InventoryError::Benchmark(
            "cpu benchmark finished with zero elapsed time".to_string(),
        ));
    }
    Ok(BenchOutcome {
        metric: CPU_BENCH_ITERATIONS as f64 / secs,
        elapsed,
    })
}

/// Allocate and perturb a 100 MB buffer, reporting MB/s over the whole
/// allocate/fill/touch pass.
pub fn memory_benchmark() -> InventoryResult<BenchOutcome> {
    let start = Instant::now();

    let mut buf = vec![0u8; MEM_BENCH_BYTES];
    // Deterministic pseudo-random fill; the workload only needs the pages
    // written, not real entropy.
    let mut state: u64 = 0x1234_5678_9abc_def0;
    for chunk in buf.chunks_mut(8) {
        state ^= state >> 12;
        state = state.wrapping_mul(0x2545_F491_4F6C_DD1D);
        state ^= state << 25;
        let bytes = state.to_le_bytes();
        let len = chunk.len();
        chunk.copy_from_slice(&bytes[..len]);
    }

    for i in (0..buf.len()).step_by(MEM_BENCH_STRIDE) {
        buf[i] = (buf[i] as f64 * 0.5) as u8;
    }
    black_box(&buf);

    let elapsed = start.elapsed();
    let secs = elapsed.as_secs_f64();
    if secs <= 0.0 {
        return Err(InventoryError::Benchmark(
            "memory benchmark finished with zero elapsed time".to_string(),
        ));
    }
    Ok(BenchOutcome {
        // Buffer size is 100 MB by construction, so throughput is 100/secs.
        metric: (MEM_BENCH_BYTES as f64 / 1_000_000.0) / secs,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpu_benchmark_reports_positive_rate() {
        let outcome = cpu_benchmark().expect("cpu benchmark should complete");
        assert!(outcome.metric > 0.0);
        assert!(outcome.elapsed > Duration::ZERO);
    }

    #[test]
    fn memory_benchmark_reports_positive_rate() {
        let outcome = memory_benchmark().expect("memory benchmark should complete");
        assert!(outcome.metric > 0.0);
    }
}
