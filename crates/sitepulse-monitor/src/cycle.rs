//! Cycle runner — one pass over the configured sites.
//!
//! Per site: probe → classify → decide against the stored baseline →
//! deliver (when a transition fired) → record the new status. Sites are
//! processed one at a time in list order, so each site's decide + notify
//! + record runs as a unit. The store is flushed exactly once, after the
//! loop.

use tracing::{info, warn};

use pulse_core::Site;
use sitepulse_notify::Notify;
use sitepulse_state::StatusStore;

use crate::classify::classify;
use crate::engine::{build_notification, decide};
use crate::probe::Probe;

/// Counters for one finished cycle (observability only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleSummary {
    /// Sites probed this cycle.
    pub sites_checked: usize,
    /// Notifications handed to the notifier.
    pub notifications_sent: usize,
}

/// Run one monitoring cycle over `sites`.
///
/// Never fails: probe errors become `Down`, delivery errors end in the
/// notifier's logs, and a failed flush is logged here. The store always
/// receives the new status, whether or not an alert fired.
pub async fn run_cycle(
    sites: &[Site],
    prober: &dyn Probe,
    store: &mut StatusStore,
    notifier: &dyn Notify,
) -> CycleSummary {
    info!(sites = sites.len(), "starting monitoring cycle");

    let mut notifications_sent = 0;
    for site in sites {
        let observation = prober.probe(&site.url).await;
        let current = classify(&observation, site.expected_status);
        let previous = store.get(&site.url);

        match decide(previous, current) {
            Some(kind) => {
                info!(
                    site = %site.name,
                    status = current.label(),
                    kind = ?kind,
                    "status changed, notifying"
                );
                let notification = build_notification(site, current, kind, &observation);
                notifier.deliver(&notification).await;
                notifications_sent += 1;
            }
            None => {
                info!(site = %site.name, status = current.label(), "no status change");
            }
        }

        store.set(&site.url, current);
    }

    if let Err(e) = store.save() {
        warn!(error = %e, "failed to save status store");
    }

    CycleSummary {
        sites_checked: sites.len(),
        notifications_sent,
    }
}
