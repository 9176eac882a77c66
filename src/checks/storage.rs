//! Storage check: disk enumeration, adapter-reported health, and per-disk
//! IO utilization.

use super::{CheckContext, CheckOutcome};
use crate::inventory::DiskPerf;
use crate::report::Verdict;

/// Busy percentage above this means the disk is saturated.
const BUSY_CEILING_PERCENT: u64 = 90;

/// The perf counters include an aggregate row that must not be reported.
const AGGREGATE_ROW: &str = "_Total";

pub fn busy_is_high(perf: &DiskPerf) -> bool {
    // Platforms that cannot sample utilization report no value; treat that
    // as idle rather than inventing a warning.
    perf.busy_percent.unwrap_or(0) > BUSY_CEILING_PERCENT
}

pub fn run(ctx: &CheckContext) -> CheckOutcome {
    let mut verdicts = Vec::new();

    for disk in ctx.inventory.disk_drives()? {
        let model = disk
            .model
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or("unknown disk")
            .to_string();
        let size = disk
            .size_bytes
            .map(|b| format!("{:.2} GB", b as f64 / 1024.0 / 1024.0 / 1024.0))
            .unwrap_or_else(|| "unknown size".to_string());
        verdicts.push(Verdict::ok("storage", "disk", format!("{model}, {size}")));

        let verdict = if disk.status.as_deref() == Some("OK") {
            Verdict::ok("storage", "SMART status", model)
        } else {
            Verdict::warn("storage", "SMART status", model)
        };
        verdicts.push(verdict);
    }

    for perf in ctx.inventory.disk_perf()? {
        if perf.name == AGGREGATE_ROW {
            continue;
        }
        let busy = perf.busy_percent.unwrap_or(0);
        let message = format!("{}: {busy}%", perf.name);
        let verdict = if busy_is_high(&perf) {
            Verdict::warn("storage", "IO utilization", message)
        } else {
            Verdict::ok("storage", "IO utilization", message)
        };
        verdicts.push(verdict);
    }

    Ok(verdicts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::fake::FakeInventory;
    use crate::inventory::DiskDrive;
    use crate::report::Status;

    fn perf(name: &str, busy: Option<u64>) -> DiskPerf {
        DiskPerf {
            name: name.to_string(),
            busy_percent: busy,
        }
    }

    #[test]
    fn busy_ceiling_is_exclusive_and_missing_reads_as_idle() {
        assert!(!busy_is_high(&perf("0 C:", Some(90))));
        assert!(busy_is_high(&perf("0 C:", Some(91))));
        assert!(!busy_is_high(&perf("0 C:", None)));
    }

    #[test]
    fn aggregate_row_is_excluded() {
        let inventory = FakeInventory {
            disk_perf: vec![perf("_Total", Some(95)), perf("0 C:", Some(12))],
            ..FakeInventory::default()
        };
        let ctx = CheckContext {
            inventory: &inventory,
            skip_benchmarks: true,
        };
        let verdicts = run(&ctx).unwrap();
        let io: Vec<_> = verdicts
            .iter()
            .filter(|v| v.item == "IO utilization")
            .collect();
        assert_eq!(io.len(), 1);
        assert_eq!(io[0].status, Status::Ok);
        assert_eq!(io[0].message, "0 C:: 12%");
    }

    #[test]
    fn smart_status_warns_unless_reported_ok() {
        let inventory = FakeInventory {
            disk_drives: vec![
                DiskDrive {
                    model: Some("Samsung SSD 990 PRO 1TB ".to_string()),
                    size_bytes: Some(1_000_204_886_016),
                    status: Some("OK".to_string()),
                },
                DiskDrive {
                    model: Some("Old Spinner".to_string()),
                    size_bytes: None,
                    status: Some("Pred Fail".to_string()),
                },
                DiskDrive {
                    model: None,
                    size_bytes: Some(256_060_514_304),
                    status: None,
                },
            ],
            ..FakeInventory::default()
        };
        let ctx = CheckContext {
            inventory: &inventory,
            skip_benchmarks: true,
        };
        let verdicts = run(&ctx).unwrap();
        let smart: Vec<_> = verdicts
            .iter()
            .filter(|v| v.item == "SMART status")
            .collect();
        assert_eq!(smart.len(), 3);
        assert_eq!(smart[0].status, Status::Ok);
        assert_eq!(smart[0].message, "Samsung SSD 990 PRO 1TB");
        assert_eq!(smart[1].status, Status::Warn);
        assert_eq!(smart[2].status, Status::Warn);
    }
}
