//! Laptop-only check. Desktops are detected by battery absence and skip the
//! rest of the group.

use super::{CheckContext, CheckOutcome};
use crate::report::Verdict;

pub fn run(ctx: &CheckContext) -> CheckOutcome {
    if ctx.inventory.batteries()?.is_empty() {
        return Ok(vec![Verdict::info(
            "laptop",
            "detection",
            "no battery detected, likely desktop",
        )]);
    }

    Ok(vec![Verdict::info(
        "laptop",
        "NIC temperature",
        "requires specialized tooling",
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::fake::FakeInventory;
    use crate::inventory::Battery;
    use crate::report::Status;

    #[test]
    fn no_battery_emits_exactly_one_info_and_nothing_else() {
        let inventory = FakeInventory::default();
        let ctx = CheckContext {
            inventory: &inventory,
            skip_benchmarks: true,
        };
        let verdicts = run(&ctx).unwrap();
        assert_eq!(verdicts.len(), 1);
        assert_eq!(verdicts[0].status, Status::Info);
        assert!(verdicts[0].message.contains("likely desktop"));
    }

    #[test]
    fn battery_present_runs_the_laptop_subchecks() {
        let inventory = FakeInventory {
            batteries: vec![Battery {
                status_code: Some("2".to_string()),
                charge_percent: Some(64),
            }],
            ..FakeInventory::default()
        };
        let ctx = CheckContext {
            inventory: &inventory,
            skip_benchmarks: true,
        };
        let verdicts = run(&ctx).unwrap();
        assert_eq!(verdicts.len(), 1);
        assert_eq!(verdicts[0].item, "NIC temperature");
        assert_eq!(verdicts[0].status, Status::Info);
    }
}
