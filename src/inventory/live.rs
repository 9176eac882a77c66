//! Live inventory implementation.
//!
//! Readings come from:
//! - Cross-platform: sysinfo crate (CPU, memory, disks, thermal components)
//! - Windows: `wmic` CSV queries (BIOS, fans, SMART status, security center,
//!   event log, PnP entities)
//! - Linux: sysfs/procfs (DMI strings, hwmon fans/voltages, thermal zones,
//!   power supplies) and lspci/nvidia-smi/dmidecode where installed
//!
//! Everything is best-effort: a source that cannot be reached fails with
//! `DataSourceUnavailable`; a class with nothing to enumerate returns an
//! empty list.

use std::net::ToSocketAddrs;
use std::path::PathBuf;
use std::process::Command;

use sysinfo::System;

#[cfg(any(target_os = "windows", target_os = "linux"))]
use tracing::debug;

#[cfg(target_os = "windows")]
use std::collections::HashMap;

#[cfg(target_os = "linux")]
use std::fs;

use super::{
    BaseboardReading, Battery, BiosReading, CpuReading, CrashEvent, DiskDrive, DiskPerf,
    FanReading, FirewallProduct, GpuAdapter, HardwareInventory, InventoryError, InventoryResult,
    MemoryModule, NetworkAdapter, OsReading, PnpDevice, ProblemDevice, TemperatureProbe,
    ThermalZone, UsbDevice, VoltageProbe,
};

/// Inventory backed by the running machine.
#[derive(Debug, Default)]
pub struct LiveInventory;

impl LiveInventory {
    pub fn new() -> Self {
        LiveInventory
    }

    fn hosts_path() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            let root = std::env::var_os("SystemRoot")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("C:\\Windows"));
            root.join("System32").join("drivers").join("etc").join("hosts")
        }

        #[cfg(not(target_os = "windows"))]
        {
            PathBuf::from("/etc/hosts")
        }
    }
}

impl HardwareInventory for LiveInventory {
    fn bios(&self) -> InventoryResult<Vec<BiosReading>> {
        #[cfg(target_os = "windows")]
        {
            let rows = wmic_rows(&["bios"], &["Version"], None, None)?;
            Ok(rows
                .into_iter()
                .map(|row| BiosReading {
                    version: non_empty(row.get("Version")),
                })
                .collect())
        }

        #[cfg(target_os = "linux")]
        {
            // DMI version strings rarely carry a year on their own; combine
            // with the release date so the age heuristic has something to
            // look at.
            let version = read_dmi("bios_version");
            let date = read_dmi("bios_date");
            let combined = match (version, date) {
                (Some(v), Some(d)) => Some(format!("{v} {d}")),
                (v, d) => v.or(d),
            };
            Ok(vec![BiosReading { version: combined }])
        }

        #[cfg(not(any(target_os = "windows", target_os = "linux")))]
        {
            Ok(Vec::new())
        }
    }

    fn baseboards(&self) -> InventoryResult<Vec<BaseboardReading>> {
        #[cfg(target_os = "windows")]
        {
            let rows = wmic_rows(&["baseboard"], &["Manufacturer", "Product"], None, None)?;
            Ok(rows
                .into_iter()
                .map(|row| BaseboardReading {
                    manufacturer: non_empty(row.get("Manufacturer")),
                    product: non_empty(row.get("Product")),
                })
                .collect())
        }

        #[cfg(target_os = "linux")]
        {
            let manufacturer = read_dmi("board_vendor");
            let product = read_dmi("board_name");
            if manufacturer.is_none() && product.is_none() {
                return Ok(Vec::new());
            }
            Ok(vec![BaseboardReading {
                manufacturer,
                product,
            }])
        }

        #[cfg(not(any(target_os = "windows", target_os = "linux")))]
        {
            Ok(Vec::new())
        }
    }

    fn voltage_probes(&self) -> InventoryResult<Vec<VoltageProbe>> {
        #[cfg(target_os = "windows")]
        {
            let rows = wmic_rows(
                &["path", "Win32_VoltageProbe"],
                &["Name", "CurrentReading"],
                None,
                None,
            )?;
            Ok(rows
                .into_iter()
                .map(|row| VoltageProbe {
                    name: non_empty(row.get("Name")),
                    reading_volts: row
                        .get("CurrentReading")
                        .and_then(|v| v.trim().parse::<f64>().ok()),
                })
                .collect())
        }

        #[cfg(target_os = "linux")]
        {
            Ok(hwmon_voltage_probes())
        }

        #[cfg(not(any(target_os = "windows", target_os = "linux")))]
        {
            Ok(Vec::new())
        }
    }

    fn pnp_devices(&self) -> InventoryResult<Vec<PnpDevice>> {
        #[cfg(target_os = "windows")]
        {
            let rows = wmic_rows(
                &["path", "Win32_PnPEntity"],
                &["Name", "Status", "PNPClass"],
                None,
                None,
            )?;
            Ok(rows
                .into_iter()
                .map(|row| PnpDevice {
                    name: non_empty(row.get("Name")),
                    status: non_empty(row.get("Status")),
                    class: non_empty(row.get("PNPClass")),
                })
                .collect())
        }

        #[cfg(not(target_os = "windows"))]
        {
            // lspci rows double as the PCIe inventory; a device that
            // enumerates on the bus is reported as present and OK.
            Ok(lspci_devices())
        }
    }

    fn fans(&self) -> InventoryResult<Vec<FanReading>> {
        #[cfg(target_os = "windows")]
        {
            let rows = wmic_rows(
                &["path", "Win32_Fan"],
                &["Name", "Status", "DesiredSpeed"],
                None,
                None,
            )?;
            Ok(rows
                .into_iter()
                .map(|row| FanReading {
                    name: non_empty(row.get("Name")),
                    status: non_empty(row.get("Status")),
                    desired_rpm: row
                        .get("DesiredSpeed")
                        .and_then(|v| v.trim().parse::<u64>().ok()),
                })
                .collect())
        }

        #[cfg(target_os = "linux")]
        {
            Ok(hwmon_fans())
        }

        #[cfg(not(any(target_os = "windows", target_os = "linux")))]
        {
            Ok(Vec::new())
        }
    }

    fn total_memory_bytes(&self) -> InventoryResult<u64> {
        let mut sys = System::new();
        sys.refresh_memory();
        let total = sys.total_memory();
        if total == 0 {
            return Err(InventoryError::MissingField("total physical memory"));
        }
        Ok(total)
    }

    fn memory_modules(&self) -> InventoryResult<Vec<MemoryModule>> {
        #[cfg(target_os = "windows")]
        {
            let rows = wmic_rows(
                &["memorychip"],
                &["Manufacturer", "Capacity", "Speed"],
                None,
                None,
            )?;
            Ok(rows
                .into_iter()
                .map(|row| MemoryModule {
                    manufacturer: non_empty(row.get("Manufacturer")),
                    capacity_bytes: row.get("Capacity").and_then(|v| v.trim().parse().ok()),
                    speed_mhz: row.get("Speed").and_then(|v| v.trim().parse().ok()),
                })
                .collect())
        }

        #[cfg(target_os = "linux")]
        {
            // dmidecode needs root; silently report nothing when it fails.
            Ok(dmidecode_modules().unwrap_or_default())
        }

        #[cfg(not(any(target_os = "windows", target_os = "linux")))]
        {
            Ok(Vec::new())
        }
    }

    fn disk_drives(&self) -> InventoryResult<Vec<DiskDrive>> {
        #[cfg(target_os = "windows")]
        {
            let rows = wmic_rows(&["diskdrive"], &["Model", "Size", "Status"], None, None)?;
            Ok(rows
                .into_iter()
                .map(|row| DiskDrive {
                    model: non_empty(row.get("Model")).map(|m| m.trim().to_string()),
                    size_bytes: row.get("Size").and_then(|v| v.trim().parse().ok()),
                    status: non_empty(row.get("Status")),
                })
                .collect())
        }

        #[cfg(not(target_os = "windows"))]
        {
            let disks = sysinfo::Disks::new_with_refreshed_list();
            Ok(disks
                .list()
                .iter()
                .map(|disk| DiskDrive {
                    model: Some(disk.name().to_string_lossy().to_string()),
                    size_bytes: Some(disk.total_space()),
                    status: None,
                })
                .collect())
        }
    }

    fn disk_perf(&self) -> InventoryResult<Vec<DiskPerf>> {
        #[cfg(target_os = "windows")]
        {
            let rows = wmic_rows(
                &["path", "Win32_PerfFormattedData_PerfDisk_PhysicalDisk"],
                &["Name", "PercentDiskTime"],
                None,
                None,
            )?;
            Ok(rows
                .into_iter()
                .filter_map(|row| {
                    let name = non_empty(row.get("Name"))?;
                    Some(DiskPerf {
                        name,
                        busy_percent: row
                            .get("PercentDiskTime")
                            .and_then(|v| v.trim().parse().ok()),
                    })
                })
                .collect())
        }

        #[cfg(not(target_os = "windows"))]
        {
            // No single-shot busy% counter outside the Windows perf
            // provider; nothing enumerated is a valid answer here.
            Ok(Vec::new())
        }
    }

    fn temperature_probes(&self) -> InventoryResult<Vec<TemperatureProbe>> {
        let components = sysinfo::Components::new_with_refreshed_list();
        Ok(components
            .list()
            .iter()
            .map(|component| TemperatureProbe {
                name: Some(component.label().to_string()),
                reading_celsius: component
                    .temperature()
                    .filter(|celsius| celsius.is_finite())
                    .map(|celsius| celsius.round() as i64),
            })
            .collect())
    }

    fn thermal_zones(&self) -> InventoryResult<Vec<ThermalZone>> {
        #[cfg(target_os = "windows")]
        {
            let rows = wmic_rows(
                &["path", "MSAcpi_ThermalZoneTemperature"],
                &["CurrentTemperature"],
                None,
                Some("root\\wmi"),
            )?;
            Ok(rows
                .into_iter()
                .map(|row| ThermalZone {
                    name: None,
                    raw_tenths_kelvin: row
                        .get("CurrentTemperature")
                        .and_then(|v| v.trim().parse().ok()),
                })
                .collect())
        }

        #[cfg(target_os = "linux")]
        {
            Ok(sysfs_thermal_zones())
        }

        #[cfg(not(any(target_os = "windows", target_os = "linux")))]
        {
            Ok(Vec::new())
        }
    }

    fn gpus(&self) -> InventoryResult<Vec<GpuAdapter>> {
        #[cfg(target_os = "windows")]
        {
            let rows = wmic_rows(
                &["path", "win32_VideoController"],
                &["Name", "AdapterRAM", "Status", "DriverVersion"],
                None,
                None,
            )?;
            Ok(rows
                .into_iter()
                .map(|row| GpuAdapter {
                    name: non_empty(row.get("Name")),
                    vram_bytes: row.get("AdapterRAM").and_then(|v| v.trim().parse().ok()),
                    status: non_empty(row.get("Status")),
                    driver_version: non_empty(row.get("DriverVersion")),
                })
                .collect())
        }

        #[cfg(not(target_os = "windows"))]
        {
            if let Some(gpu) = nvidia_smi_adapter() {
                return Ok(vec![gpu]);
            }
            Ok(lspci_gpus())
        }
    }

    fn network_adapters(&self) -> InventoryResult<Vec<NetworkAdapter>> {
        #[cfg(target_os = "windows")]
        {
            let rows = wmic_rows(
                &["path", "win32_NetworkAdapter"],
                &["Name", "NetConnectionStatus"],
                Some("NetEnabled=true"),
                None,
            )?;
            Ok(rows
                .into_iter()
                .map(|row| NetworkAdapter {
                    name: non_empty(row.get("Name")),
                    connection_status: non_empty(row.get("NetConnectionStatus")),
                })
                .collect())
        }

        #[cfg(target_os = "linux")]
        {
            Ok(sysfs_network_adapters())
        }

        #[cfg(not(any(target_os = "windows", target_os = "linux")))]
        {
            let networks = sysinfo::Networks::new_with_refreshed_list();
            Ok(networks
                .list()
                .iter()
                .map(|(name, _)| NetworkAdapter {
                    name: Some(name.clone()),
                    connection_status: Some("2".to_string()),
                })
                .collect())
        }
    }

    fn network_available(&self) -> bool {
        self.network_adapters()
            .map(|adapters| {
                adapters
                    .iter()
                    .any(|adapter| adapter.connection_status.as_deref() == Some("2"))
            })
            .unwrap_or(false)
    }

    fn resolve_host(&self, host: &str) -> InventoryResult<String> {
        let mut addrs = (host, 80)
            .to_socket_addrs()
            .map_err(|err| InventoryError::DataSourceUnavailable(format!("lookup failed: {err}")))?;
        match addrs.next() {
            Some(addr) => Ok(format!("{host} -> {}", addr.ip())),
            None => Err(InventoryError::MissingField("resolved address")),
        }
    }

    fn hosts_file(&self) -> InventoryResult<Option<String>> {
        let path = Self::hosts_path();
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) if err.kind() == std::io::ErrorKind::InvalidData => Err(
                InventoryError::ParseFailure(format!("{} is not valid UTF-8", path.display())),
            ),
            Err(err) => Err(InventoryError::DataSourceUnavailable(format!(
                "cannot read {}: {err}",
                path.display()
            ))),
        }
    }

    fn firewall_products(&self) -> InventoryResult<Vec<FirewallProduct>> {
        #[cfg(target_os = "windows")]
        {
            let rows = wmic_rows(
                &["path", "FirewallProduct"],
                &["displayName", "productState"],
                None,
                Some("root\\SecurityCenter2"),
            )?;
            Ok(rows
                .into_iter()
                .map(|row| FirewallProduct {
                    name: non_empty(row.get("displayName")),
                    product_state: non_empty(row.get("productState")),
                })
                .collect())
        }

        #[cfg(not(target_os = "windows"))]
        {
            Ok(Vec::new())
        }
    }

    fn problem_devices(&self) -> InventoryResult<Vec<ProblemDevice>> {
        #[cfg(target_os = "windows")]
        {
            let rows = wmic_rows(
                &["path", "Win32_PnPEntity"],
                &["Name", "ConfigManagerErrorCode"],
                Some("ConfigManagerErrorCode<>0"),
                None,
            )?;
            Ok(rows
                .into_iter()
                .filter_map(|row| {
                    let error_code = row
                        .get("ConfigManagerErrorCode")
                        .and_then(|v| v.trim().parse().ok())?;
                    Some(ProblemDevice {
                        name: non_empty(row.get("Name")),
                        error_code,
                    })
                })
                .collect())
        }

        #[cfg(not(target_os = "windows"))]
        {
            Ok(Vec::new())
        }
    }

    fn batteries(&self) -> InventoryResult<Vec<Battery>> {
        #[cfg(target_os = "windows")]
        {
            let rows = wmic_rows(
                &["path", "Win32_Battery"],
                &["BatteryStatus", "EstimatedChargeRemaining"],
                None,
                None,
            )?;
            Ok(rows
                .into_iter()
                .map(|row| Battery {
                    status_code: non_empty(row.get("BatteryStatus")),
                    charge_percent: row
                        .get("EstimatedChargeRemaining")
                        .and_then(|v| v.trim().parse().ok()),
                })
                .collect())
        }

        #[cfg(target_os = "linux")]
        {
            Ok(sysfs_batteries())
        }

        #[cfg(not(any(target_os = "windows", target_os = "linux")))]
        {
            Ok(Vec::new())
        }
    }

    fn os(&self) -> InventoryResult<OsReading> {
        let version = System::long_os_version().or_else(|| {
            match (System::name(), System::os_version()) {
                (Some(name), Some(version)) => Some(format!("{name} {version}")),
                (name, version) => name.or(version),
            }
        });
        let edition = {
            let id = System::distribution_id();
            if id.is_empty() {
                None
            } else {
                Some(id)
            }
        };
        Ok(OsReading { version, edition })
    }

    fn unexpected_shutdowns(&self) -> InventoryResult<Vec<CrashEvent>> {
        #[cfg(target_os = "windows")]
        {
            let rows = wmic_rows(
                &["ntevent"],
                &["TimeGenerated"],
                Some("(LogFile='System' and EventCode=41)"),
                None,
            )?;
            Ok(rows
                .into_iter()
                .map(|row| CrashEvent {
                    timestamp: row
                        .get("TimeGenerated")
                        .and_then(|raw| parse_wmi_datetime(raw)),
                })
                .collect())
        }

        #[cfg(not(target_os = "windows"))]
        {
            Ok(Vec::new())
        }
    }

    fn cpus(&self) -> InventoryResult<Vec<CpuReading>> {
        let mut sys = System::new();
        sys.refresh_cpu_all();

        let cpus = sys.cpus();
        if cpus.is_empty() {
            return Err(InventoryError::DataSourceUnavailable(
                "no CPU detected".to_string(),
            ));
        }

        let first = &cpus[0];
        let threads = cpus.len();
        let cores = sys.physical_core_count().unwrap_or(threads);

        Ok(vec![CpuReading {
            name: Some(first.brand().to_string()),
            cores: Some(cores),
            threads: Some(threads),
            current_mhz: Some(first.frequency()),
            max_mhz: max_cpu_frequency_mhz(),
        }])
    }

    fn usb_devices(&self) -> InventoryResult<Vec<UsbDevice>> {
        #[cfg(target_os = "windows")]
        {
            let rows = wmic_rows(
                &["path", "Win32_USBControllerDevice"],
                &["Dependent"],
                None,
                None,
            )?;
            Ok(rows
                .into_iter()
                .filter_map(|row| {
                    let dependent = non_empty(row.get("Dependent"))?;
                    // Shape: \\HOST\root\cimv2:Win32_PnPEntity.DeviceID="USB\..."
                    let name = dependent
                        .splitn(2, '=')
                        .nth(1)
                        .map(|value| value.trim_matches('"').to_string())?;
                    Some(UsbDevice { name })
                })
                .collect())
        }

        #[cfg(target_os = "linux")]
        {
            Ok(sysfs_usb_devices())
        }

        #[cfg(not(any(target_os = "windows", target_os = "linux")))]
        {
            Ok(Vec::new())
        }
    }
}

#[cfg(target_os = "windows")]
fn non_empty(value: Option<&String>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Run a `wmic ... get <fields> /format:csv` query and return one map of
/// column name to value per row. The header line maps the alphabetically
/// reordered CSV columns back to the requested field names.
#[cfg(target_os = "windows")]
fn wmic_rows(
    object: &[&str],
    fields: &[&str],
    where_clause: Option<&str>,
    namespace: Option<&str>,
) -> InventoryResult<Vec<HashMap<String, String>>> {
    let mut args: Vec<String> = Vec::new();
    if let Some(ns) = namespace {
        args.push(format!("/namespace:\\\\{ns}"));
    }
    args.extend(object.iter().map(|s| s.to_string()));
    if let Some(clause) = where_clause {
        args.push("where".to_string());
        args.push(clause.to_string());
    }
    args.push("get".to_string());
    args.push(fields.join(","));
    args.push("/format:csv".to_string());

    let output = Command::new("wmic").args(&args).output().map_err(|err| {
        InventoryError::DataSourceUnavailable(format!("wmic not available: {err}"))
    })?;

    if !output.status.success() {
        return Err(InventoryError::DataSourceUnavailable(format!(
            "wmic {} exited with {}",
            object.join(" "),
            output.status
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines().map(str::trim).filter(|line| !line.is_empty());

    let Some(header) = lines.next() else {
        return Ok(Vec::new());
    };
    let columns: Vec<String> = header.split(',').map(|col| col.trim().to_string()).collect();

    let mut rows = Vec::new();
    for line in lines {
        let values: Vec<&str> = line.split(',').collect();
        let mut row = HashMap::new();
        for (idx, column) in columns.iter().enumerate() {
            if column == "Node" {
                continue;
            }
            if let Some(value) = values.get(idx) {
                row.insert(column.clone(), value.trim().to_string());
            }
        }
        if !row.is_empty() {
            rows.push(row);
        }
    }
    debug!(rows = rows.len(), "wmic query {}", object.join(" "));
    Ok(rows)
}

/// Parse a WMI CIM_DATETIME like `20240131123456.000000+060`.
#[cfg(target_os = "windows")]
fn parse_wmi_datetime(raw: &str) -> Option<chrono::NaiveDateTime> {
    let compact = raw.trim().get(..14)?;
    chrono::NaiveDateTime::parse_from_str(compact, "%Y%m%d%H%M%S").ok()
}

fn max_cpu_frequency_mhz() -> Option<u64> {
    #[cfg(target_os = "linux")]
    {
        let raw = fs::read_to_string("/sys/devices/system/cpu/cpu0/cpufreq/scaling_max_freq").ok()?;
        raw.trim().parse::<u64>().ok().map(|khz| khz / 1000)
    }

    #[cfg(target_os = "windows")]
    {
        let rows = wmic_rows(&["cpu"], &["MaxClockSpeed"], None, None).ok()?;
        rows.first()
            .and_then(|row| row.get("MaxClockSpeed"))
            .and_then(|v| v.trim().parse().ok())
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux")))]
    {
        None
    }
}

#[cfg(target_os = "linux")]
fn read_dmi(field: &str) -> Option<String> {
    let raw = fs::read_to_string(format!("/sys/class/dmi/id/{field}")).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(target_os = "linux")]
fn hwmon_fans() -> Vec<FanReading> {
    let mut fans = Vec::new();
    let Ok(entries) = fs::read_dir("/sys/class/hwmon") else {
        return fans;
    };
    for entry in entries.flatten() {
        let dir = entry.path();
        let chip = fs::read_to_string(dir.join("name"))
            .map(|name| name.trim().to_string())
            .unwrap_or_else(|_| "hwmon".to_string());
        let Ok(files) = fs::read_dir(&dir) else {
            continue;
        };
        for file in files.flatten() {
            let file_name = file.file_name().to_string_lossy().to_string();
            if !file_name.starts_with("fan") || !file_name.ends_with("_input") {
                continue;
            }
            let rpm = fs::read_to_string(file.path())
                .ok()
                .and_then(|raw| raw.trim().parse::<u64>().ok());
            let label = file_name.trim_end_matches("_input");
            fans.push(FanReading {
                name: Some(format!("{chip} {label}")),
                // A sensor that answers with a reading is considered healthy.
                status: rpm.map(|_| "OK".to_string()),
                desired_rpm: rpm,
            });
        }
    }
    fans
}

#[cfg(target_os = "linux")]
fn hwmon_voltage_probes() -> Vec<VoltageProbe> {
    let mut probes = Vec::new();
    let Ok(entries) = fs::read_dir("/sys/class/hwmon") else {
        return probes;
    };
    for entry in entries.flatten() {
        let dir = entry.path();
        let chip = fs::read_to_string(dir.join("name"))
            .map(|name| name.trim().to_string())
            .unwrap_or_else(|_| "hwmon".to_string());
        let Ok(files) = fs::read_dir(&dir) else {
            continue;
        };
        for file in files.flatten() {
            let file_name = file.file_name().to_string_lossy().to_string();
            if !file_name.starts_with("in") || !file_name.ends_with("_input") {
                continue;
            }
            let millivolts = fs::read_to_string(file.path())
                .ok()
                .and_then(|raw| raw.trim().parse::<f64>().ok());
            let label = file_name.trim_end_matches("_input");
            probes.push(VoltageProbe {
                name: Some(format!("{chip} {label}")),
                reading_volts: millivolts.map(|mv| mv / 1000.0),
            });
        }
    }
    probes
}

#[cfg(target_os = "linux")]
fn sysfs_thermal_zones() -> Vec<ThermalZone> {
    let mut zones = Vec::new();
    let Ok(entries) = fs::read_dir("/sys/class/thermal") else {
        return zones;
    };
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        if !name.starts_with("thermal_zone") {
            continue;
        }
        let dir = entry.path();
        let zone_type = fs::read_to_string(dir.join("type"))
            .ok()
            .map(|t| t.trim().to_string());
        // sysfs reports millidegrees Celsius; the canonical reading unit is
        // tenths of Kelvin.
        let raw = fs::read_to_string(dir.join("temp"))
            .ok()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .map(|milli_c| (milli_c / 100.0 + 2731.5).round() as u32);
        zones.push(ThermalZone {
            name: zone_type,
            raw_tenths_kelvin: raw,
        });
    }
    zones
}

#[cfg(target_os = "linux")]
fn sysfs_network_adapters() -> Vec<NetworkAdapter> {
    let mut adapters = Vec::new();
    let Ok(entries) = fs::read_dir("/sys/class/net") else {
        return adapters;
    };
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        if name == "lo" {
            continue;
        }
        let operstate = fs::read_to_string(entry.path().join("operstate"))
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        // Map to the connection-status codes the classifiers expect:
        // "2" connected, "7" media disconnected.
        let code = if operstate == "up" { "2" } else { "7" };
        adapters.push(NetworkAdapter {
            name: Some(name),
            connection_status: Some(code.to_string()),
        });
    }
    adapters
}

#[cfg(target_os = "linux")]
fn sysfs_batteries() -> Vec<Battery> {
    let mut batteries = Vec::new();
    let Ok(entries) = fs::read_dir("/sys/class/power_supply") else {
        return batteries;
    };
    for entry in entries.flatten() {
        let dir = entry.path();
        let kind = fs::read_to_string(dir.join("type")).unwrap_or_default();
        if kind.trim() != "Battery" {
            continue;
        }
        let charge_percent = fs::read_to_string(dir.join("capacity"))
            .ok()
            .and_then(|raw| raw.trim().parse::<u64>().ok());
        let status_code = fs::read_to_string(dir.join("status"))
            .ok()
            .map(|raw| if raw.trim() == "Charging" { "2" } else { "1" }.to_string());
        batteries.push(Battery {
            status_code,
            charge_percent,
        });
    }
    batteries
}

#[cfg(target_os = "linux")]
fn sysfs_usb_devices() -> Vec<UsbDevice> {
    let mut devices = Vec::new();
    let Ok(entries) = fs::read_dir("/sys/bus/usb/devices") else {
        return devices;
    };
    for entry in entries.flatten() {
        if let Ok(product) = fs::read_to_string(entry.path().join("product")) {
            let product = product.trim();
            if !product.is_empty() {
                devices.push(UsbDevice {
                    name: product.to_string(),
                });
            }
        }
    }
    devices
}

#[cfg(target_os = "linux")]
fn dmidecode_modules() -> Option<Vec<MemoryModule>> {
    let output = Command::new("dmidecode").args(["-t", "17"]).output().ok()?;
    if !output.status.success() {
        debug!("dmidecode failed or not available");
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut modules = Vec::new();
    let mut current: Option<MemoryModule> = None;

    for line in stdout.lines() {
        if line.starts_with("Memory Device") {
            if let Some(module) = current.take() {
                if module.capacity_bytes.is_some() {
                    modules.push(module);
                }
            }
            current = Some(MemoryModule::default());
            continue;
        }
        let Some(module) = current.as_mut() else {
            continue;
        };
        let line = line.trim();
        if let Some(size) = line.strip_prefix("Size:") {
            module.capacity_bytes = parse_dmi_size(size.trim());
        } else if let Some(speed) = line.strip_prefix("Speed:") {
            module.speed_mhz = speed
                .trim()
                .split_whitespace()
                .next()
                .and_then(|v| v.parse().ok());
        } else if let Some(manufacturer) = line.strip_prefix("Manufacturer:") {
            let value = manufacturer.trim();
            if !value.is_empty() && value != "Unknown" && value != "Not Specified" {
                module.manufacturer = Some(value.to_string());
            }
        }
    }
    if let Some(module) = current.take() {
        if module.capacity_bytes.is_some() {
            modules.push(module);
        }
    }
    Some(modules)
}

/// Parse dmidecode size values like "8192 MB" or "8 GB".
#[cfg(target_os = "linux")]
fn parse_dmi_size(value: &str) -> Option<u64> {
    let mut parts = value.split_whitespace();
    let number: u64 = parts.next()?.parse().ok()?;
    match parts.next()? {
        "MB" => Some(number * 1024 * 1024),
        "GB" => Some(number * 1024 * 1024 * 1024),
        _ => None,
    }
}

#[cfg(not(target_os = "windows"))]
fn nvidia_smi_adapter() -> Option<GpuAdapter> {
    let output = Command::new("nvidia-smi")
        .args([
            "--query-gpu=name,memory.total,driver_version",
            "--format=csv,noheader,nounits",
        ])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout.lines().next()?;
    let parts: Vec<&str> = line.split(", ").collect();
    if parts.len() < 3 {
        return None;
    }

    let raw_name = parts[0].trim();
    let name = if raw_name.starts_with("NVIDIA") {
        raw_name.to_string()
    } else {
        format!("NVIDIA {raw_name}")
    };
    let vram_bytes = parts[1]
        .trim()
        .parse::<u64>()
        .ok()
        .map(|mib| mib * 1024 * 1024);

    Some(GpuAdapter {
        name: Some(name),
        vram_bytes,
        // The driver answered the query; that is the best health signal
        // available here.
        status: Some("OK".to_string()),
        driver_version: Some(parts[2].trim().to_string()),
    })
}

#[cfg(not(target_os = "windows"))]
fn lspci_lines() -> Vec<String> {
    let Ok(output) = Command::new("lspci").output() else {
        return Vec::new();
    };
    if !output.status.success() {
        return Vec::new();
    }
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| line.to_string())
        .collect()
}

#[cfg(not(target_os = "windows"))]
fn lspci_device_name(line: &str) -> Option<String> {
    line.find(": ").map(|idx| {
        let after = &line[idx + 2..];
        match after.rfind(" (rev") {
            Some(rev_idx) => after[..rev_idx].to_string(),
            None => after.to_string(),
        }
    })
}

#[cfg(not(target_os = "windows"))]
fn lspci_devices() -> Vec<PnpDevice> {
    lspci_lines()
        .iter()
        .map(|line| PnpDevice {
            name: lspci_device_name(line),
            status: Some("OK".to_string()),
            class: Some("System".to_string()),
        })
        .collect()
}

#[cfg(not(target_os = "windows"))]
fn lspci_gpus() -> Vec<GpuAdapter> {
    lspci_lines()
        .iter()
        .filter(|line| line.contains("VGA") || line.contains("3D controller"))
        .map(|line| GpuAdapter {
            name: lspci_device_name(line),
            vram_bytes: None,
            status: None,
            driver_version: None,
        })
        .collect()
}
