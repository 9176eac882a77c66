//! Driver check: devices reporting a nonzero configuration error code.

use super::{CheckContext, CheckOutcome};
use crate::report::Verdict;

pub fn run(ctx: &CheckContext) -> CheckOutcome {
    let problems = ctx.inventory.problem_devices()?;
    if problems.is_empty() {
        return Ok(vec![Verdict::ok("driver", "status", "no problem drivers")]);
    }

    Ok(problems
        .into_iter()
        .map(|device| {
            let name = device.name.unwrap_or_else(|| "unknown device".to_string());
            Verdict::error(
                "driver",
                "problem device",
                format!("{name} (error code: {})", device.error_code),
            )
        })
        .collect())
}
