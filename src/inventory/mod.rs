//! Hardware/OS inventory abstraction.
//!
//! All platform-specific enumeration lives behind the [`HardwareInventory`]
//! trait, one method per resource class. Each method returns already-decoded
//! readings or fails with a single error; the classifiers never talk to the
//! platform directly, which keeps them unit-testable with synthetic readings.

pub mod live;

use chrono::NaiveDateTime;
use thiserror::Error;

pub use live::LiveInventory;

/// Failure taxonomy for a data-source call.
///
/// The runner collapses all of these into one ERROR verdict per failing
/// check; the variants exist so the live sources can report what actually
/// went wrong in the message.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("data source unavailable: {0}")]
    DataSourceUnavailable(String),
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("parse failure: {0}")]
    ParseFailure(String),
    #[error("benchmark failure: {0}")]
    Benchmark(String),
}

pub type InventoryResult<T> = Result<T, InventoryError>;

/// Firmware identification.
#[derive(Debug, Clone, Default)]
pub struct BiosReading {
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct BaseboardReading {
    pub manufacturer: Option<String>,
    pub product: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct VoltageProbe {
    pub name: Option<String>,
    pub reading_volts: Option<f64>,
}

/// A plug-and-play device row (used for the IO-device count and the PCIe
/// enumeration; `class` holds the device class name when known).
#[derive(Debug, Clone, Default)]
pub struct PnpDevice {
    pub name: Option<String>,
    pub status: Option<String>,
    pub class: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FanReading {
    pub name: Option<String>,
    pub status: Option<String>,
    pub desired_rpm: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryModule {
    pub manufacturer: Option<String>,
    pub capacity_bytes: Option<u64>,
    pub speed_mhz: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct DiskDrive {
    pub model: Option<String>,
    pub size_bytes: Option<u64>,
    /// Adapter-reported health text ("OK" when healthy).
    pub status: Option<String>,
}

/// Per-physical-disk utilization sample. `name` may be the aggregate
/// `"_Total"` row, which classifiers must skip.
#[derive(Debug, Clone, Default)]
pub struct DiskPerf {
    pub name: String,
    pub busy_percent: Option<u64>,
}

/// Generic temperature probe, reading in whole degrees Celsius.
#[derive(Debug, Clone, Default)]
pub struct TemperatureProbe {
    pub name: Option<String>,
    pub reading_celsius: Option<i64>,
}

/// Platform thermal zone, raw value in tenths of Kelvin.
#[derive(Debug, Clone, Default)]
pub struct ThermalZone {
    pub name: Option<String>,
    pub raw_tenths_kelvin: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct GpuAdapter {
    pub name: Option<String>,
    pub vram_bytes: Option<u64>,
    pub status: Option<String>,
    pub driver_version: Option<String>,
}

/// Network adapter with its numeric connection-status code as reported by
/// the platform ("2" means connected).
#[derive(Debug, Clone, Default)]
pub struct NetworkAdapter {
    pub name: Option<String>,
    pub connection_status: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FirewallProduct {
    pub name: Option<String>,
    /// Security-center product state bitmask as a decimal string.
    pub product_state: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ProblemDevice {
    pub name: Option<String>,
    pub error_code: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Battery {
    /// Charge-state code as reported ("2" means charging).
    pub status_code: Option<String>,
    pub charge_percent: Option<u64>,
}

/// Operating system identification.
#[derive(Debug, Clone, Default)]
pub struct OsReading {
    pub version: Option<String>,
    pub edition: Option<String>,
}

/// One unexpected-shutdown event from the system log.
#[derive(Debug, Clone, Default)]
pub struct CrashEvent {
    pub timestamp: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default)]
pub struct CpuReading {
    pub name: Option<String>,
    pub cores: Option<usize>,
    pub threads: Option<usize>,
    pub current_mhz: Option<u64>,
    pub max_mhz: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct UsbDevice {
    pub name: String,
}

/// Capability interface over the machine's hardware/OS data sources.
///
/// Contract per method: return decoded readings or fail. Callers never retry.
/// An empty list is a valid answer ("nothing enumerated"), distinct from a
/// failure of the underlying source.
pub trait HardwareInventory {
    fn bios(&self) -> InventoryResult<Vec<BiosReading>>;
    fn baseboards(&self) -> InventoryResult<Vec<BaseboardReading>>;
    fn voltage_probes(&self) -> InventoryResult<Vec<VoltageProbe>>;
    fn pnp_devices(&self) -> InventoryResult<Vec<PnpDevice>>;
    fn fans(&self) -> InventoryResult<Vec<FanReading>>;
    fn total_memory_bytes(&self) -> InventoryResult<u64>;
    fn memory_modules(&self) -> InventoryResult<Vec<MemoryModule>>;
    fn disk_drives(&self) -> InventoryResult<Vec<DiskDrive>>;
    fn disk_perf(&self) -> InventoryResult<Vec<DiskPerf>>;
    fn temperature_probes(&self) -> InventoryResult<Vec<TemperatureProbe>>;
    fn thermal_zones(&self) -> InventoryResult<Vec<ThermalZone>>;
    fn gpus(&self) -> InventoryResult<Vec<GpuAdapter>>;
    fn network_adapters(&self) -> InventoryResult<Vec<NetworkAdapter>>;
    fn network_available(&self) -> bool;
    /// Resolve `host`; returns a description of the result on success.
    fn resolve_host(&self, host: &str) -> InventoryResult<String>;
    /// Contents of the OS hosts file, `None` when the file does not exist.
    fn hosts_file(&self) -> InventoryResult<Option<String>>;
    fn firewall_products(&self) -> InventoryResult<Vec<FirewallProduct>>;
    fn problem_devices(&self) -> InventoryResult<Vec<ProblemDevice>>;
    fn batteries(&self) -> InventoryResult<Vec<Battery>>;
    fn os(&self) -> InventoryResult<OsReading>;
    fn unexpected_shutdowns(&self) -> InventoryResult<Vec<CrashEvent>>;
    fn cpus(&self) -> InventoryResult<Vec<CpuReading>>;
    fn usb_devices(&self) -> InventoryResult<Vec<UsbDevice>>;
}
