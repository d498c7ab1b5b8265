//! Shared types used across SitePulse crates.

use chrono::{DateTime, Utc};

/// Discord embed palette. Values are 24-bit RGB as decimal integers, the
/// form Discord's webhook API expects.
pub mod color {
    /// Healthy green. Part of the palette but no alert carries it: a site
    /// that stays up is silent.
    pub const GREEN: u32 = 5763719;
    /// Warning yellow for a newly detected unexpected status code.
    pub const YELLOW: u32 = 16776960;
    /// Critical red for a new outage.
    pub const RED: u32 = 15158332;
    /// Success teal for recoveries and resolved issues.
    pub const TEAL: u32 = 3066993;
}

/// A status-change alert, produced by the transition engine and handed to
/// the notifier. At most one is produced per site per cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Embed title: site name plus the uppercase status label.
    pub title: String,
    /// Human-readable description of the transition.
    pub description: String,
    /// Embed color, 24-bit RGB as a decimal integer (see [`color`]).
    pub color: u32,
    /// The monitored site's url.
    pub url: String,
    /// When the transition was decided.
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_matches_discord_values() {
        // RGB components of the palette, pinned so nobody retypes a
        // decimal color and silently changes the embed look.
        assert_eq!(color::GREEN, 0x57F287);
        assert_eq!(color::YELLOW, 0xFFFF00);
        assert_eq!(color::RED, 0xE74C3C);
        assert_eq!(color::TEAL, 0x2ECC71);
    }
}
