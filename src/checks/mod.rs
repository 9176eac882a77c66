//! Diagnostic runner: a fixed sequence of independent checks.
//!
//! Each check pulls readings from the inventory, classifies them, and
//! returns a list of verdicts. A fault anywhere inside a check is caught at
//! the check boundary and converted into exactly one ERROR verdict; the
//! remaining checks run unaffected.

pub mod board;
pub mod cooling;
pub mod cpu;
pub mod devices;
pub mod drivers;
pub mod gpu;
pub mod laptop;
pub mod memory;
pub mod network;
pub mod os;
pub mod power;
pub mod storage;

use tracing::debug;

use crate::inventory::{HardwareInventory, InventoryError};
use crate::report::{Reporter, Verdict};

/// Shared input for every check in one run.
pub struct CheckContext<'a> {
    pub inventory: &'a dyn HardwareInventory,
    pub skip_benchmarks: bool,
}

pub type CheckOutcome = Result<Vec<Verdict>, InventoryError>;

type CheckFn = fn(&CheckContext) -> CheckOutcome;

/// One entry in the diagnostic sequence.
pub struct Check {
    /// Stable identifier, used to disable a check via config.
    pub name: &'static str,
    /// Section title printed before the check's verdicts.
    pub title: &'static str,
    /// Verdict category used when the check itself fails.
    pub category: &'static str,
    run: CheckFn,
}

/// The fixed check order. No check depends on another's output.
pub const SEQUENCE: &[Check] = &[
    Check {
        name: "board",
        title: "Board check",
        category: "board",
        run: board::run,
    },
    Check {
        name: "fans",
        title: "Fan check",
        category: "fan",
        run: cooling::run_fans,
    },
    Check {
        name: "memory",
        title: "Memory check",
        category: "memory",
        run: memory::run,
    },
    Check {
        name: "storage",
        title: "Storage check",
        category: "storage",
        run: storage::run,
    },
    Check {
        name: "temperature",
        title: "Temperature check",
        category: "temperature",
        run: cooling::run_temperature,
    },
    Check {
        name: "gpu",
        title: "GPU check",
        category: "gpu",
        run: gpu::run,
    },
    Check {
        name: "network",
        title: "Network check",
        category: "network",
        run: network::run,
    },
    Check {
        name: "drivers",
        title: "Driver check",
        category: "driver",
        run: drivers::run,
    },
    Check {
        name: "power",
        title: "Power check",
        category: "power",
        run: power::run,
    },
    Check {
        name: "os",
        title: "Operating system check",
        category: "os",
        run: os::run,
    },
    Check {
        name: "cpu",
        title: "CPU check",
        category: "cpu",
        run: cpu::run,
    },
    Check {
        name: "laptop",
        title: "Laptop check",
        category: "laptop",
        run: laptop::run,
    },
    Check {
        name: "devices",
        title: "Other devices check",
        category: "device",
        run: devices::run,
    },
];

/// Run one check, unwrapping a failure into exactly one synthetic ERROR
/// verdict.
fn execute(check: &Check, ctx: &CheckContext) -> Vec<Verdict> {
    match (check.run)(ctx) {
        Ok(verdicts) => verdicts,
        Err(err) => vec![Verdict::error(check.category, "check failed", err.to_string())],
    }
}

/// Drive the sequence, handing each check's verdicts to `emit` as soon as
/// the check finishes. Nothing is buffered across checks; the slow
/// benchmark checks must not delay the output of the ones before them.
fn run_streaming<F>(ctx: &CheckContext, disabled: &[String], mut emit: F)
where
    F: FnMut(&'static Check, &[Verdict]),
{
    for check in SEQUENCE {
        if disabled.iter().any(|name| name == check.name) {
            debug!(check = check.name, "check disabled, skipping");
            continue;
        }
        let verdicts = execute(check, ctx);
        emit(check, &verdicts);
    }
}

/// Run the sequence and print each check's section as soon as it completes.
pub fn run_all(ctx: &CheckContext, reporter: &Reporter, disabled: &[String]) {
    run_streaming(ctx, disabled, |check, verdicts| {
        reporter.section(check.title);
        for verdict in verdicts {
            reporter.verdict(verdict);
        }
    });
}

/// Collecting variant for tests that compare whole runs.
#[cfg(test)]
fn run_sequence(ctx: &CheckContext, disabled: &[String]) -> Vec<(&'static Check, Vec<Verdict>)> {
    let mut results = Vec::new();
    run_streaming(ctx, disabled, |check, verdicts| {
        results.push((check, verdicts.to_vec()));
    });
    results
}
