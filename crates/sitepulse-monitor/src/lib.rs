//! sitepulse-monitor — the SitePulse core: probe, classify, decide, run.
//!
//! # Architecture
//!
//! ```text
//! run_cycle(sites, prober, store, notifier)
//!   ├── per site, in list order:
//!   │     ├── Probe::probe(url)              → Observation
//!   │     ├── classify(observation, code)    → Status
//!   │     ├── decide(store.get(url), status) → Option<MessageKind>
//!   │     │     └── Some(kind): build_notification → Notify::deliver
//!   │     └── store.set(url, status)
//!   └── store.save()   (exactly once, after the loop)
//! ```
//!
//! Failure never travels past its origin: transport errors become `Down`,
//! delivery errors end in the notifier's logs, and a failed flush is a
//! warning here. The transition engine only ever sees closed enums.

pub mod classify;
pub mod cycle;
pub mod engine;
pub mod probe;

pub use classify::classify;
pub use cycle::{CycleSummary, run_cycle};
pub use engine::{MessageKind, build_notification, decide};
pub use probe::{HttpProber, Observation, PROBE_TIMEOUT, Probe};
