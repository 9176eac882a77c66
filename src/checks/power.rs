//! Power check: battery presence, charge state, and the PSU voltage stub.

use super::{CheckContext, CheckOutcome};
use crate::inventory::Battery;
use crate::report::Verdict;

/// Remaining charge below this is flagged.
const CHARGE_FLOOR_PERCENT: u64 = 20;

/// Platform charge-state code for "charging".
const CHARGING_CODE: &str = "2";

pub fn charge_is_low(battery: &Battery) -> bool {
    battery
        .charge_percent
        .map(|p| p < CHARGE_FLOOR_PERCENT)
        .unwrap_or(false)
}

pub fn run(ctx: &CheckContext) -> CheckOutcome {
    let mut verdicts = Vec::new();

    let batteries = ctx.inventory.batteries()?;
    if batteries.is_empty() {
        verdicts.push(Verdict::info(
            "power",
            "type",
            "desktop or no battery detected",
        ));
    } else {
        for battery in batteries {
            let state = if battery.status_code.as_deref() == Some(CHARGING_CODE) {
                "charging"
            } else {
                "on battery"
            };
            let charge = battery
                .charge_percent
                .map(|p| format!("{p}%"))
                .unwrap_or_else(|| "unknown".to_string());
            let message = format!("{state}, remaining charge: {charge}");
            let verdict = if charge_is_low(&battery) {
                Verdict::warn("power", "battery", message)
            } else {
                Verdict::ok("power", "battery", message)
            };
            verdicts.push(verdict);
        }
    }

    verdicts.push(Verdict::info(
        "power",
        "output voltage",
        "requires specialized tooling",
    ));

    Ok(verdicts)
}
