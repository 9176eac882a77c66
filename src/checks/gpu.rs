//! GPU check: counterfeit-card heuristic and driver status.

use super::{CheckContext, CheckOutcome};
use crate::inventory::GpuAdapter;
use crate::report::Verdict;

/// No genuine NVIDIA card of the last decade ships with less than 1 GiB of
/// VRAM; relabeled counterfeits frequently misreport tiny amounts.
const NVIDIA_VRAM_FLOOR_BYTES: u64 = 1024 * 1024 * 1024;

/// Deliberately narrow: a substring match on the adapter name plus the VRAM
/// floor. Cards without a VRAM reading are not flagged.
pub fn looks_counterfeit(gpu: &GpuAdapter) -> bool {
    let named_nvidia = gpu
        .name
        .as_deref()
        .map(|n| n.contains("NVIDIA"))
        .unwrap_or(false);
    match (named_nvidia, gpu.vram_bytes) {
        (true, Some(vram)) => vram < NVIDIA_VRAM_FLOOR_BYTES,
        _ => false,
    }
}

pub fn run(ctx: &CheckContext) -> CheckOutcome {
    let mut verdicts = Vec::new();

    for gpu in ctx.inventory.gpus()? {
        let name = gpu.name.clone().unwrap_or_else(|| "unknown GPU".to_string());
        let verdict = if looks_counterfeit(&gpu) {
            Verdict::warn("gpu", "adapter", format!("{name} (possibly counterfeit)"))
        } else {
            Verdict::ok("gpu", "adapter", name)
        };
        verdicts.push(verdict);

        let driver = format!(
            "version: {}",
            gpu.driver_version.as_deref().unwrap_or("unknown")
        );
        let verdict = if gpu.status.as_deref() == Some("OK") {
            Verdict::ok("gpu", "driver status", driver)
        } else {
            Verdict::warn("gpu", "driver status", driver)
        };
        verdicts.push(verdict);

        verdicts.push(Verdict::info(
            "gpu",
            "PCIe link rate",
            "requires specialized tooling",
        ));
    }

    Ok(verdicts)
}
