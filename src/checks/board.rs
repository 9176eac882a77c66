//! Motherboard check: BIOS age heuristic, board identification, voltage
//! probes, and the count of healthy IO devices.

use super::{CheckContext, CheckOutcome};
use crate::report::Verdict;

/// BIOS builds from these years are old enough to warrant a firmware update.
const OLD_BIOS_YEARS: &[&str] = &["2015", "2016", "2017", "2018"];

/// The age heuristic is a plain substring match against the version string,
/// so date-bearing versions like "2016-01" trip it. A missing version is not
/// treated as old.
pub fn bios_is_old(version: Option<&str>) -> bool {
    match version {
        Some(v) => OLD_BIOS_YEARS.iter().any(|year| v.contains(year)),
        None => false,
    }
}

pub fn run(ctx: &CheckContext) -> CheckOutcome {
    let mut verdicts = Vec::new();

    for bios in ctx.inventory.bios()? {
        let version = bios.version.as_deref().unwrap_or("unknown");
        let verdict = if bios_is_old(bios.version.as_deref()) {
            Verdict::warn("board", "BIOS version", version)
        } else {
            Verdict::ok("board", "BIOS version", version)
        };
        verdicts.push(verdict);
    }

    for board in ctx.inventory.baseboards()? {
        verdicts.push(Verdict::ok(
            "board",
            "baseboard",
            format!(
                "manufacturer: {}, model: {}",
                board.manufacturer.as_deref().unwrap_or("unknown"),
                board.product.as_deref().unwrap_or("unknown")
            ),
        ));
    }

    // Probe rows are informational; a probe without a reading still gets
    // its row.
    for probe in ctx.inventory.voltage_probes()? {
        let name = probe.name.as_deref().unwrap_or("voltage probe");
        let reading = probe
            .reading_volts
            .map(|volts| format!("{volts:.2} V"))
            .unwrap_or_else(|| "unknown".to_string());
        verdicts.push(Verdict::ok("board", name, reading));
    }
    verdicts.push(Verdict::info(
        "board",
        "voltage readings",
        "requires specialized tooling",
    ));

    let connected = ctx
        .inventory
        .pnp_devices()?
        .iter()
        .filter(|dev| dev.status.as_deref() == Some("OK"))
        .count();
    verdicts.push(Verdict::ok(
        "board",
        "IO devices",
        format!("{connected} devices connected and healthy"),
    ));

    Ok(verdicts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::fake::FakeInventory;
    use crate::inventory::{BiosReading, PnpDevice, VoltageProbe};
    use crate::report::Status;

    #[test]
    fn bios_year_heuristic_boundaries() {
        for year in ["2015", "2016", "2017", "2018"] {
            assert!(bios_is_old(Some(year)), "{year} should be flagged");
        }
        assert!(!bios_is_old(Some("2014")));
        assert!(!bios_is_old(Some("2019")));
        assert!(!bios_is_old(Some("F.42")));
        assert!(!bios_is_old(Some("")));
        assert!(!bios_is_old(None));
    }

    #[test]
    fn bios_2016_dash_01_warns_with_version_in_message() {
        let inventory = FakeInventory {
            bios: vec![BiosReading {
                version: Some("2016-01".to_string()),
            }],
            ..FakeInventory::default()
        };
        let ctx = CheckContext {
            inventory: &inventory,
            skip_benchmarks: true,
        };
        let verdicts = run(&ctx).unwrap();
        let bios: Vec<_> = verdicts
            .iter()
            .filter(|v| v.item == "BIOS version")
            .collect();
        assert_eq!(bios.len(), 1);
        assert_eq!(bios[0].status, Status::Warn);
        assert!(bios[0].message.contains("2016-01"));
    }

    #[test]
    fn missing_bios_version_is_ok() {
        let inventory = FakeInventory {
            bios: vec![BiosReading { version: None }],
            ..FakeInventory::default()
        };
        let ctx = CheckContext {
            inventory: &inventory,
            skip_benchmarks: true,
        };
        let verdicts = run(&ctx).unwrap();
        let bios = verdicts.iter().find(|v| v.item == "BIOS version").unwrap();
        assert_eq!(bios.status, Status::Ok);
    }

    #[test]
    fn voltage_probe_rows_are_ok_with_or_without_a_reading() {
        let inventory = FakeInventory {
            voltage_probes: vec![
                VoltageProbe {
                    name: Some("VCore".to_string()),
                    reading_volts: Some(1.25),
                },
                VoltageProbe {
                    name: None,
                    reading_volts: None,
                },
            ],
            ..FakeInventory::default()
        };
        let ctx = CheckContext {
            inventory: &inventory,
            skip_benchmarks: true,
        };
        let verdicts = run(&ctx).unwrap();
        let vcore = verdicts.iter().find(|v| v.item == "VCore").unwrap();
        assert_eq!(vcore.status, Status::Ok);
        assert_eq!(vcore.message, "1.25 V");
        let unnamed = verdicts.iter().find(|v| v.item == "voltage probe").unwrap();
        assert_eq!(unnamed.status, Status::Ok);
        assert_eq!(unnamed.message, "unknown");
        // The specialized-tooling stub is still emitted alongside the rows.
        assert!(verdicts
            .iter()
            .any(|v| v.item == "voltage readings" && v.status == Status::Info));
    }

    #[test]
    fn io_device_count_only_includes_healthy_devices() {
        let inventory = FakeInventory {
            pnp_devices: vec![
                PnpDevice {
                    name: Some("usb hub".to_string()),
                    status: Some("OK".to_string()),
                    class: None,
                },
                PnpDevice {
                    name: Some("broken widget".to_string()),
                    status: Some("Error".to_string()),
                    class: None,
                },
                PnpDevice {
                    name: Some("mystery".to_string()),
                    status: None,
                    class: None,
                },
            ],
            ..FakeInventory::default()
        };
        let ctx = CheckContext {
            inventory: &inventory,
            skip_benchmarks: true,
        };
        let verdicts = run(&ctx).unwrap();
        let io = verdicts.iter().find(|v| v.item == "IO devices").unwrap();
        assert!(io.message.starts_with("1 "));
    }
}
