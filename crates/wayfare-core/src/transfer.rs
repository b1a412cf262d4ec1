//! Journal export and import.
//!
//! The export document wraps the marker collection with a version stamp,
//! export date, the user avatar, and summary metadata, and is offered to
//! the user as a JSON file download. Import accepts the same document and
//! fully overwrites the stored collection; merge is out of scope, and the
//! UI is expected to confirm with the user when prior data exists (the
//! store's `is_empty` answers that).

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::error::StoreError;
use crate::marker::Marker;
use crate::record;

/// Version stamp written into every export document.
pub const EXPORT_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub total_markers: usize,
    pub total_visits: usize,
}

/// The export document. Markers are borrowed from the store snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalExport<'a> {
    pub version: &'static str,
    pub export_date: DateTime<Utc>,
    pub markers: &'a [Marker],
    pub user_avatar: Option<&'a str>,
    pub metadata: ExportMetadata,
}

/// Build the export document for a store snapshot.
pub fn export_journal<'a>(markers: &'a [Marker], user_avatar: Option<&'a str>) -> JournalExport<'a> {
    JournalExport {
        version: EXPORT_VERSION,
        export_date: Utc::now(),
        markers,
        user_avatar,
        metadata: ExportMetadata {
            total_markers: markers.len(),
            total_visits: markers.iter().map(|m| m.visits.len()).sum(),
        },
    }
}

/// Serialize an export document for download.
pub fn export_to_string(export: &JournalExport<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(export)
}

/// Download filename for an export taken on `date`.
pub fn suggested_filename(date: NaiveDate) -> String {
    format!("travel-footprint-{}.json", date.format("%Y-%m-%d"))
}

/// A parsed import file, ready to apply via
/// [`MarkerStore::replace_all`](crate::store::MarkerStore::replace_all).
#[derive(Debug, Clone)]
pub struct JournalImport {
    pub markers: Vec<Marker>,
    pub user_avatar: Option<String>,
}

/// Parse an import file.
///
/// Rejects files that are not JSON or whose `markers` field is missing or
/// not an array. Marker elements go through the same tolerant codec as the
/// stored collection, so legacy-shaped records import cleanly.
pub fn parse_import(json: &str) -> Result<JournalImport, StoreError> {
    let document: serde_json::Value = serde_json::from_str(json)
        .map_err(|err| StoreError::validation("file", format!("not valid JSON: {err}")))?;

    let markers = match document.get("markers") {
        Some(serde_json::Value::Array(elements)) => {
            record::decode_marker_values(elements.clone())
        }
        Some(_) => return Err(StoreError::validation("markers", "must be an array")),
        None => return Err(StoreError::validation("markers", "missing from import file")),
    };

    let user_avatar = document
        .get("userAvatar")
        .and_then(|v| v.as_str())
        .map(str::to_string);

    Ok(JournalImport {
        markers,
        user_avatar,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_markers() {
        let err = parse_import(r#"{"version": "1.0.0"}"#).unwrap_err();
        assert!(matches!(err, StoreError::Validation { field: "markers", .. }));
    }

    #[test]
    fn rejects_non_array_markers() {
        let err = parse_import(r#"{"markers": {"id": 1}}"#).unwrap_err();
        assert!(matches!(err, StoreError::Validation { field: "markers", .. }));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(parse_import("not json").is_err());
    }

    #[test]
    fn accepts_avatar_and_empty_markers() {
        let import = parse_import(r#"{"markers": [], "userAvatar": "🧭"}"#).unwrap();
        assert!(import.markers.is_empty());
        assert_eq!(import.user_avatar.as_deref(), Some("🧭"));
    }

    #[test]
    fn suggested_filename_embeds_date() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 9).unwrap();
        assert_eq!(suggested_filename(date), "travel-footprint-2024-07-09.json");
    }
}
