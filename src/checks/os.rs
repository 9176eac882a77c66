//! Operating system check: identification and crash-log stability.

use super::{CheckContext, CheckOutcome};
use crate::inventory::CrashEvent;
use crate::report::Verdict;

pub fn run(ctx: &CheckContext) -> CheckOutcome {
    let mut verdicts = Vec::new();

    let os = ctx.inventory.os()?;
    verdicts.push(Verdict::info(
        "os",
        "version",
        os.version.as_deref().unwrap_or("unknown").to_string(),
    ));
    verdicts.push(Verdict::info(
        "os",
        "edition",
        os.edition.as_deref().unwrap_or("unknown").to_string(),
    ));

    verdicts.push(stability_verdict(&ctx.inventory.unexpected_shutdowns()?));

    Ok(verdicts)
}

/// Event code 41 entries are unexpected shutdowns; any at all is worth a
/// warning with the count and the most recent occurrence.
pub fn stability_verdict(events: &[CrashEvent]) -> Verdict {
    if events.is_empty() {
        return Verdict::ok("os", "stability", "no unexpected shutdowns recorded");
    }
    let last = events
        .iter()
        .filter_map(|e| e.timestamp)
        .max()
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown date".to_string());
    Verdict::warn(
        "os",
        "stability",
        format!("unexpected shutdowns: {}, last: {last}", events.len()),
    )
}
