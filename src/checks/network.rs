//! Network check: adapter state, reachability, DNS resolution, hosts-file
//! tampering, and firewall product state.

use super::{CheckContext, CheckOutcome};
use crate::report::Verdict;

/// Platform connection-status code for "connected".
const ADAPTER_CONNECTED_CODE: &str = "2";

/// Well-known host used to probe DNS resolution.
const DNS_PROBE_HOST: &str = "www.microsoft.com";

/// Security-center product-state bitmask meaning enabled and up to date.
const FIREWALL_ENABLED_STATE: &str = "266240";

/// Fixed redirect lines that indicate a tampered hosts file. Deliberately
/// literal; broadening the patterns would change observable behavior.
const SUSPICIOUS_HOSTS_LINES: &[&str] = &["127.0.0.1 microsoft.com", "127.0.0.1 google.com"];

pub fn hosts_file_tampered(contents: &str) -> bool {
    SUSPICIOUS_HOSTS_LINES
        .iter()
        .any(|line| contents.contains(line))
}

pub fn run(ctx: &CheckContext) -> CheckOutcome {
    let mut verdicts = Vec::new();

    for adapter in ctx.inventory.network_adapters()? {
        let name = adapter
            .name
            .unwrap_or_else(|| "unknown adapter".to_string());
        let verdict = if adapter.connection_status.as_deref() == Some(ADAPTER_CONNECTED_CODE) {
            Verdict::ok("network", "adapter", name)
        } else {
            Verdict::warn("network", "adapter", name)
        };
        verdicts.push(verdict);
    }

    if ctx.inventory.network_available() {
        verdicts.push(Verdict::ok("network", "connectivity", "connected"));
    } else {
        verdicts.push(Verdict::error("network", "connectivity", "not connected"));
    }

    // Resolution failures are an expected outcome here, not a check fault.
    match ctx.inventory.resolve_host(DNS_PROBE_HOST) {
        Ok(resolved) => verdicts.push(Verdict::ok("network", "DNS resolution", resolved)),
        Err(_) => verdicts.push(Verdict::error(
            "network",
            "DNS resolution",
            "resolution failed",
        )),
    }

    if let Some(contents) = ctx.inventory.hosts_file()? {
        let verdict = if hosts_file_tampered(&contents) {
            Verdict::warn("network", "hosts file", "suspicious entries detected")
        } else {
            Verdict::ok("network", "hosts file", "clean")
        };
        verdicts.push(verdict);
    }

    for product in ctx.inventory.firewall_products()? {
        let name = product
            .name
            .unwrap_or_else(|| "firewall".to_string());
        let verdict = if product.product_state.as_deref() == Some(FIREWALL_ENABLED_STATE) {
            Verdict::ok("network", name, "enabled")
        } else {
            Verdict::warn("network", name, "disabled")
        };
        verdicts.push(verdict);
    }

    Ok(verdicts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::fake::FakeInventory;
    use crate::inventory::{FirewallProduct, NetworkAdapter};
    use crate::report::Status;

    fn ctx(inventory: &FakeInventory) -> CheckContext<'_> {
        CheckContext {
            inventory,
            skip_benchmarks: true,
        }
    }

    #[test]
    fn adapter_code_two_means_connected() {
        let inventory = FakeInventory {
            network_adapters: vec![
                NetworkAdapter {
                    name: Some("eth0".to_string()),
                    connection_status: Some("2".to_string()),
                },
                NetworkAdapter {
                    name: Some("wlan0".to_string()),
                    connection_status: Some("7".to_string()),
                },
                NetworkAdapter {
                    name: Some("bt0".to_string()),
                    connection_status: None,
                },
            ],
            ..FakeInventory::default()
        };
        let verdicts = run(&ctx(&inventory)).unwrap();
        let adapters: Vec<_> = verdicts.iter().filter(|v| v.item == "adapter").collect();
        assert_eq!(adapters[0].status, Status::Ok);
        assert_eq!(adapters[1].status, Status::Warn);
        assert_eq!(adapters[2].status, Status::Warn);
    }

    #[test]
    fn unreachable_network_and_failed_dns_are_errors() {
        let inventory = FakeInventory {
            network_available: false,
            dns_resolves: false,
            ..FakeInventory::default()
        };
        let verdicts = run(&ctx(&inventory)).unwrap();
        let connectivity = verdicts.iter().find(|v| v.item == "connectivity").unwrap();
        assert_eq!(connectivity.status, Status::Error);
        let dns = verdicts.iter().find(|v| v.item == "DNS resolution").unwrap();
        assert_eq!(dns.status, Status::Error);
        assert_eq!(dns.message, "resolution failed");
    }

    #[test]
    fn hosts_file_patterns() {
        assert!(hosts_file_tampered("127.0.0.1 google.com\n"));
        assert!(hosts_file_tampered(
            "# comment\n127.0.0.1 microsoft.com\n::1 localhost\n"
        ));
        assert!(!hosts_file_tampered("127.0.0.1 localhost\n::1 localhost\n"));
    }

    #[test]
    fn absent_hosts_file_produces_no_verdict() {
        let inventory = FakeInventory::default();
        let verdicts = run(&ctx(&inventory)).unwrap();
        assert!(verdicts.iter().all(|v| v.item != "hosts file"));
    }

    #[test]
    fn tampered_hosts_file_warns() {
        let inventory = FakeInventory {
            hosts_file: Some("127.0.0.1 google.com\n".to_string()),
            ..FakeInventory::default()
        };
        let verdicts = run(&ctx(&inventory)).unwrap();
        let hosts = verdicts.iter().find(|v| v.item == "hosts file").unwrap();
        assert_eq!(hosts.status, Status::Warn);
        assert_eq!(hosts.message, "suspicious entries detected");
    }

    #[test]
    fn firewall_enabled_only_for_the_exact_state() {
        let inventory = FakeInventory {
            firewall_products: vec![
                FirewallProduct {
                    name: Some("Windows Defender Firewall".to_string()),
                    product_state: Some("266240".to_string()),
                },
                FirewallProduct {
                    name: Some("ThirdParty Firewall".to_string()),
                    product_state: Some("262144".to_string()),
                },
                FirewallProduct {
                    name: None,
                    product_state: None,
                },
            ],
            ..FakeInventory::default()
        };
        let verdicts = run(&ctx(&inventory)).unwrap();
        let fw: Vec<_> = verdicts
            .iter()
            .filter(|v| v.message == "enabled" || v.message == "disabled")
            .collect();
        assert_eq!(fw.len(), 3);
        assert_eq!(fw[0].status, Status::Ok);
        assert_eq!(fw[1].status, Status::Warn);
        assert_eq!(fw[1].message, "disabled");
        assert_eq!(fw[2].status, Status::Warn);
    }
}
