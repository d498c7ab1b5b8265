//! Persisted status types.

use serde::{Deserialize, Serialize};

/// Classified health state of a site, persisted across cycles.
///
/// The absence of a stored entry is the read-time "unknown" default,
/// surfaced as `Option::None` by [`crate::StatusStore::get`]. It has no
/// variant here, so an unknown status can never be written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Reachable and returned the expected status code.
    #[serde(rename = "UP")]
    Up,
    /// Reachable but returned an unexpected status code.
    ///
    /// Earlier releases stored this under a Czech label; it is still
    /// accepted on read and rewritten as `DEGRADED` on the next save.
    #[serde(rename = "DEGRADED", alias = "POTENCIÁLNÍ PROBLÉM")]
    Degraded,
    /// Unreachable: transport failure or a status code outside [200, 600).
    #[serde(rename = "DOWN")]
    Down,
}

impl Status {
    /// Uppercase label as it appears in notification titles and the
    /// persisted file.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Up => "UP",
            Status::Degraded => "DEGRADED",
            Status::Down => "DOWN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_uppercase_label() {
        assert_eq!(serde_json::to_string(&Status::Up).unwrap(), "\"UP\"");
        assert_eq!(serde_json::to_string(&Status::Degraded).unwrap(), "\"DEGRADED\"");
        assert_eq!(serde_json::to_string(&Status::Down).unwrap(), "\"DOWN\"");
    }

    #[test]
    fn label_matches_serialized_form() {
        for status in [Status::Up, Status::Degraded, Status::Down] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.label()));
        }
    }

    #[test]
    fn accepts_legacy_degraded_label() {
        let status: Status = serde_json::from_str("\"POTENCIÁLNÍ PROBLÉM\"").unwrap();
        assert_eq!(status, Status::Degraded);
    }

    #[test]
    fn rejects_unknown_label() {
        assert!(serde_json::from_str::<Status>("\"UNKNOWN\"").is_err());
    }
}
