//! Other-devices check: USB and PCIe enumeration. Purely informational.

use super::{CheckContext, CheckOutcome};
use crate::report::Verdict;

pub fn run(ctx: &CheckContext) -> CheckOutcome {
    let mut verdicts = Vec::new();

    for device in ctx.inventory.usb_devices()? {
        verdicts.push(Verdict::ok("usb", "device", device.name));
    }

    for device in ctx.inventory.pnp_devices()? {
        if device.class.as_deref() != Some("System") {
            continue;
        }
        verdicts.push(Verdict::ok(
            "pcie",
            "device",
            device.name.unwrap_or_else(|| "unknown device".to_string()),
        ));
    }

    verdicts.push(Verdict::info(
        "device",
        "negotiated link speed",
        "requires specialized tooling",
    ));

    Ok(verdicts)
}
