//! Site list parser.
//!
//! The site list is a JSON array of records with camelCase field names:
//!
//! ```text
//! [
//!   { "name": "Docs", "url": "https://docs.example.com", "expectedStatus": 200 }
//! ]
//! ```
//!
//! A missing or malformed list is a startup failure — the monitor refuses
//! to run against a guessed configuration.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// One monitored site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    /// Display label used in notification titles.
    pub name: String,
    /// Probe target; also the site's identity key in the status store.
    pub url: String,
    /// HTTP status code the site must return when healthy.
    pub expected_status: u16,
}

/// Load the site list from `path`.
///
/// Order is preserved: sites are probed in list order.
pub fn load_sites(path: &Path) -> anyhow::Result<Vec<Site>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read site list {}", path.display()))?;
    let sites: Vec<Site> = serde_json::from_str(&content)
        .with_context(|| format!("invalid site list {}", path.display()))?;
    Ok(sites)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_site_record() {
        let json = r#"
[
  { "name": "Docs", "url": "https://docs.example.com", "expectedStatus": 200 },
  { "name": "Old blog", "url": "https://blog.example.com", "expectedStatus": 301 }
]
"#;
        let sites: Vec<Site> = serde_json::from_str(json).unwrap();
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].name, "Docs");
        assert_eq!(sites[0].expected_status, 200);
        assert_eq!(sites[1].expected_status, 301);
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let site = Site {
            name: "Docs".to_string(),
            url: "https://docs.example.com".to_string(),
            expected_status: 200,
        };
        let json = serde_json::to_string(&site).unwrap();
        assert!(json.contains("\"expectedStatus\":200"));
    }

    #[test]
    fn test_load_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sites.json");
        std::fs::write(
            &path,
            r#"[
  { "name": "b", "url": "https://b.example.com", "expectedStatus": 200 },
  { "name": "a", "url": "https://a.example.com", "expectedStatus": 200 }
]"#,
        )
        .unwrap();

        let sites = load_sites(&path).unwrap();
        assert_eq!(sites[0].name, "b");
        assert_eq!(sites[1].name, "a");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_sites(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read site list"));
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sites.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_sites(&path).unwrap_err();
        assert!(err.to_string().contains("invalid site list"));
    }

    #[test]
    fn test_load_rejects_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sites.json");
        std::fs::write(&path, r#"[{ "name": "no url", "expectedStatus": 200 }]"#).unwrap();

        assert!(load_sites(&path).is_err());
    }
}
