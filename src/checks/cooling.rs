//! Cooling checks: fan enumeration and the two temperature probes.

use super::{CheckContext, CheckOutcome};
use crate::inventory::ThermalZone;
use crate::report::Verdict;

/// Anything hotter than this is flagged, for both probe kinds.
const TEMP_CEILING_CELSIUS: f64 = 80.0;

/// Thermal zones report in tenths of Kelvin.
pub fn thermal_zone_celsius(zone: &ThermalZone) -> Option<f64> {
    zone.raw_tenths_kelvin
        .map(|raw| raw as f64 / 10.0 - 273.15)
}

pub fn run_fans(ctx: &CheckContext) -> CheckOutcome {
    let fans = ctx.inventory.fans()?;
    if fans.is_empty() {
        return Ok(vec![Verdict::warn(
            "fan",
            "detection",
            "no fan information detected",
        )]);
    }

    let mut verdicts = Vec::new();
    for fan in fans {
        let name = fan.name.unwrap_or_else(|| "unknown fan".to_string());
        let message = match fan.desired_rpm {
            Some(rpm) => format!("target speed: {rpm} RPM"),
            None => "target speed unknown".to_string(),
        };
        let verdict = if fan.status.as_deref() == Some("OK") {
            Verdict::ok("fan", name, message)
        } else {
            Verdict::warn("fan", name, message)
        };
        verdicts.push(verdict);
    }
    Ok(verdicts)
}

pub fn run_temperature(ctx: &CheckContext) -> CheckOutcome {
    let mut verdicts = Vec::new();

    for probe in ctx.inventory.temperature_probes()? {
        let name = probe
            .name
            .unwrap_or_else(|| "temperature sensor".to_string());
        match probe.reading_celsius {
            Some(celsius) => {
                let message = format!("{celsius}°C");
                let verdict = if celsius as f64 > TEMP_CEILING_CELSIUS {
                    Verdict::warn("temperature", name, message)
                } else {
                    Verdict::ok("temperature", name, message)
                };
                verdicts.push(verdict);
            }
            None => verdicts.push(Verdict::warn("temperature", name, "cannot read")),
        }
    }

    for zone in ctx.inventory.thermal_zones()? {
        let name = zone
            .name
            .clone()
            .unwrap_or_else(|| "CPU temperature".to_string());
        match thermal_zone_celsius(&zone) {
            Some(celsius) => {
                let message = format!("{celsius:.1}°C");
                let verdict = if celsius > TEMP_CEILING_CELSIUS {
                    Verdict::warn("temperature", name, message)
                } else {
                    Verdict::ok("temperature", name, message)
                };
                verdicts.push(verdict);
            }
            None => verdicts.push(Verdict::warn("temperature", name, "cannot read")),
        }
    }

    Ok(verdicts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::fake::FakeInventory;
    use crate::inventory::{FanReading, TemperatureProbe};
    use crate::report::Status;

    fn ctx(inventory: &FakeInventory) -> CheckContext<'_> {
        CheckContext {
            inventory,
            skip_benchmarks: true,
        }
    }

    #[test]
    fn zero_fans_yields_exactly_one_warn() {
        let inventory = FakeInventory::default();
        let verdicts = run_fans(&ctx(&inventory)).unwrap();
        assert_eq!(verdicts.len(), 1);
        assert_eq!(verdicts[0].status, Status::Warn);
        assert_eq!(verdicts[0].message, "no fan information detected");
    }

    #[test]
    fn fan_status_text_decides_the_verdict() {
        let inventory = FakeInventory {
            fans: vec![
                FanReading {
                    name: Some("CPU fan".to_string()),
                    status: Some("OK".to_string()),
                    desired_rpm: Some(1800),
                },
                FanReading {
                    name: Some("case fan".to_string()),
                    status: Some("Degraded".to_string()),
                    desired_rpm: None,
                },
                FanReading {
                    name: None,
                    status: None,
                    desired_rpm: Some(900),
                },
            ],
            ..FakeInventory::default()
        };
        let verdicts = run_fans(&ctx(&inventory)).unwrap();
        assert_eq!(verdicts.len(), 3);
        assert_eq!(verdicts[0].status, Status::Ok);
        assert!(verdicts[0].message.contains("1800 RPM"));
        assert_eq!(verdicts[1].status, Status::Warn);
        assert_eq!(verdicts[2].status, Status::Warn);
        assert_eq!(verdicts[2].item, "unknown fan");
    }

    #[test]
    fn generic_probe_warns_above_eighty_and_on_missing_reading() {
        let inventory = FakeInventory {
            temperature_probes: vec![
                TemperatureProbe {
                    name: Some("inlet".to_string()),
                    reading_celsius: Some(80),
                },
                TemperatureProbe {
                    name: Some("outlet".to_string()),
                    reading_celsius: Some(81),
                },
                TemperatureProbe {
                    name: Some("dead probe".to_string()),
                    reading_celsius: None,
                },
            ],
            ..FakeInventory::default()
        };
        let verdicts = run_temperature(&ctx(&inventory)).unwrap();
        assert_eq!(verdicts[0].status, Status::Ok);
        assert_eq!(verdicts[1].status, Status::Warn);
        assert_eq!(verdicts[2].status, Status::Warn);
        assert_eq!(verdicts[2].message, "cannot read");
    }

    #[test]
    fn thermal_zone_conversion_and_threshold() {
        // 3600 tenths-Kelvin = 86.85 °C, 3000 = 26.85 °C.
        let warm = ThermalZone {
            name: None,
            raw_tenths_kelvin: Some(3600),
        };
        let cool = ThermalZone {
            name: None,
            raw_tenths_kelvin: Some(3000),
        };
        assert!((thermal_zone_celsius(&warm).unwrap() - 86.85).abs() < 1e-9);
        assert!((thermal_zone_celsius(&cool).unwrap() - 26.85).abs() < 1e-9);

        let inventory = FakeInventory {
            thermal_zones: vec![warm, cool],
            ..FakeInventory::default()
        };
        let verdicts = run_temperature(&ctx(&inventory)).unwrap();
        assert_eq!(verdicts[0].status, Status::Warn);
        assert!(verdicts[0].message.ends_with("°C"));
        assert_eq!(verdicts[1].status, Status::Ok);

        // 3532 tenths-Kelvin is 80.05 °C, just over the ceiling.
        assert!(
            thermal_zone_celsius(&ThermalZone {
                name: None,
                raw_tenths_kelvin: Some(3532),
            })
            .unwrap()
                > 80.0
        );
    }
}
