//! Transition engine — decides which status changes produce an alert.
//!
//! # Decision table
//!
//! ```text
//! previous        current     alert
//! ──────────────────────────────────────────────────
//! Up | Degraded → Down        Outage         (red)
//! Down          → Up          Recovery       (teal)
//! Degraded      → Up          IssueResolved  (teal)
//! Up            → Degraded    IssueDetected  (yellow)
//! Down          → Degraded    silent
//! none          → anything    silent (first seen)
//! unchanged                   silent
//! ```
//!
//! First-seen suppression is uniform and deliberate, including a site
//! that enters the config while already down: it is recorded, not
//! alarmed, and the next edge fires normally. Down → Degraded is also
//! silent; the recovery alert fires once the site is fully up.

use chrono::Utc;

use pulse_core::{Notification, Site, color};
use sitepulse_state::Status;

use crate::probe::Observation;

/// The four transition classes that produce an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// A site we knew to be alive stopped answering.
    Outage,
    /// A down site answers with the expected code again.
    Recovery,
    /// An up site started answering with an unexpected code.
    IssueDetected,
    /// A degraded site answers with the expected code again.
    IssueResolved,
}

impl MessageKind {
    /// Severity color for the embed.
    pub fn color(&self) -> u32 {
        match self {
            MessageKind::Outage => color::RED,
            MessageKind::IssueDetected => color::YELLOW,
            MessageKind::Recovery | MessageKind::IssueResolved => color::TEAL,
        }
    }

    /// Alert description. `IssueDetected` carries the observed and
    /// expected codes; the other kinds are fixed one-liners.
    pub fn describe(&self, expected_status: u16, observation: &Observation) -> String {
        match self {
            MessageKind::Outage => "🚨 **SERVICE OUTAGE:** Site is unreachable.".to_string(),
            MessageKind::Recovery => {
                "✅ **SERVICE RECOVERED:** Site is reachable again after an outage.".to_string()
            }
            MessageKind::IssueDetected => {
                let mut text =
                    "⚠️ **ISSUE DETECTED:** Site returned an unexpected status code.".to_string();
                if let Observation::Reachable { code } = observation {
                    text.push_str(&format!("\n**Code:** {code} (expected: {expected_status})"));
                }
                text
            }
            MessageKind::IssueResolved => {
                "✅ **ISSUE RESOLVED:** Site is returning the expected status code again."
                    .to_string()
            }
        }
    }
}

/// Decide whether the move from `previous` to `current` fires an alert.
///
/// `None` previous means the site has no baseline yet: first cycle for
/// this site, or the status file was lost. The match is exhaustive over
/// the whole transition space, so extending [`Status`] forces every rule
/// to be revisited.
pub fn decide(previous: Option<Status>, current: Status) -> Option<MessageKind> {
    use Status::{Degraded, Down, Up};

    match (previous, current) {
        // First observation: record a baseline, never alarm.
        (None, _) => None,
        // A site we knew to be alive stopped answering.
        (Some(Up | Degraded), Down) => Some(MessageKind::Outage),
        // Back from an outage.
        (Some(Down), Up) => Some(MessageKind::Recovery),
        // The expected status code is back.
        (Some(Degraded), Up) => Some(MessageKind::IssueResolved),
        // Reachable, but the code stopped matching.
        (Some(Up), Degraded) => Some(MessageKind::IssueDetected),
        // Improving but not yet healthy.
        (Some(Down), Degraded) => None,
        // Steady state.
        (Some(Up), Up) | (Some(Degraded), Degraded) | (Some(Down), Down) => None,
    }
}

/// Build the alert for a decided transition.
pub fn build_notification(
    site: &Site,
    current: Status,
    kind: MessageKind,
    observation: &Observation,
) -> Notification {
    Notification {
        title: format!("🌐 SITE STATUS: {} [{}]", site.name, current.label()),
        description: kind.describe(site.expected_status, observation),
        color: kind.color(),
        url: site.url.clone(),
        timestamp: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use Status::{Degraded, Down, Up};

    fn site(name: &str) -> Site {
        Site {
            name: name.to_string(),
            url: "https://example.com".to_string(),
            expected_status: 200,
        }
    }

    #[test]
    fn transition_table_is_exact() {
        // All nine (previous, current) pairs with a baseline.
        let table = [
            (Up, Up, None),
            (Up, Degraded, Some(MessageKind::IssueDetected)),
            (Up, Down, Some(MessageKind::Outage)),
            (Degraded, Up, Some(MessageKind::IssueResolved)),
            (Degraded, Degraded, None),
            (Degraded, Down, Some(MessageKind::Outage)),
            (Down, Up, Some(MessageKind::Recovery)),
            (Down, Degraded, None),
            (Down, Down, None),
        ];
        for (previous, current, expected) in table {
            assert_eq!(
                decide(Some(previous), current),
                expected,
                "decide({previous:?} -> {current:?})"
            );
        }
    }

    #[test]
    fn first_seen_is_always_silent() {
        for current in [Up, Degraded, Down] {
            assert_eq!(decide(None, current), None, "first seen {current:?}");
        }
    }

    #[test]
    fn first_seen_down_stays_silent() {
        // Deliberately asymmetric versus a later Up/Degraded -> Down
        // edge: a site entering the config while already down has no
        // baseline to have changed from.
        assert_eq!(decide(None, Down), None);
    }

    #[test]
    fn down_to_degraded_stays_silent() {
        assert_eq!(decide(Some(Down), Degraded), None);
    }

    #[test]
    fn severity_colors_match_kinds() {
        assert_eq!(MessageKind::Outage.color(), color::RED);
        assert_eq!(MessageKind::IssueDetected.color(), color::YELLOW);
        assert_eq!(MessageKind::Recovery.color(), color::TEAL);
        assert_eq!(MessageKind::IssueResolved.color(), color::TEAL);
    }

    #[test]
    fn issue_detected_carries_both_codes() {
        let text = MessageKind::IssueDetected.describe(200, &Observation::Reachable { code: 503 });
        assert!(text.contains("ISSUE DETECTED"), "text: {text}");
        assert!(text.contains("**Code:** 503 (expected: 200)"), "text: {text}");
    }

    #[test]
    fn outage_description_is_fixed() {
        let text = MessageKind::Outage.describe(
            200,
            &Observation::Unreachable {
                reason: "connection refused".to_string(),
            },
        );
        assert_eq!(text, "🚨 **SERVICE OUTAGE:** Site is unreachable.");
    }

    #[test]
    fn notification_title_embeds_name_and_label() {
        let n = build_notification(
            &site("Docs"),
            Down,
            MessageKind::Outage,
            &Observation::Unreachable {
                reason: "timeout".to_string(),
            },
        );
        assert_eq!(n.title, "🌐 SITE STATUS: Docs [DOWN]");
        assert_eq!(n.url, "https://example.com");
        assert_eq!(n.color, color::RED);
    }

    #[test]
    fn notification_for_degraded_site() {
        let n = build_notification(
            &site("Api"),
            Degraded,
            MessageKind::IssueDetected,
            &Observation::Reachable { code: 500 },
        );
        assert_eq!(n.title, "🌐 SITE STATUS: Api [DEGRADED]");
        assert!(n.description.ends_with("**Code:** 500 (expected: 200)"));
        assert_eq!(n.color, color::YELLOW);
    }
}
