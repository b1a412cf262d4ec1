//! Marker and visit domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use wayfare_tags::Tag;

use crate::error::StoreError;

/// Unique marker identifier (UUID string for new markers; legacy records
/// used numeric timestamps, decoded to their string form).
pub type MarkerId = String;

/// Unique visit identifier within a marker.
pub type VisitId = String;

/// Maximum marker name length, in characters.
pub const MAX_NAME_LEN: usize = 50;

/// Maximum visit notes length, in characters.
pub const MAX_NOTES_LEN: usize = 500;

/// Maximum photo caption length, in characters.
pub const MAX_CAPTION_LEN: usize = 100;

/// Maximum number of photos per visit.
pub const MAX_PHOTOS_PER_VISIT: usize = 10;

/// Maximum number of tags per marker.
pub const MAX_TAGS_PER_MARKER: usize = 3;

/// One photo attached to a visit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Image content as a data URL.
    pub data_url: String,
    #[serde(default)]
    pub caption: String,
}

/// One dated occasion at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub id: VisitId,
    /// Calendar date of the visit, no time component.
    pub visit_date: NaiveDate,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub photos: Vec<Photo>,
    /// Set once at creation, never refreshed.
    pub created_at: DateTime<Utc>,
}

/// One geographic location the user has recorded.
///
/// `tags` holds up to [`MAX_TAGS_PER_MARKER`] tag ids in selection order;
/// the first is the primary tag. `visits` keeps insertion order; display
/// ordering is a presentation concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub id: MarkerId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub visits: Vec<Visit>,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation scoped to this marker, visits included.
    pub updated_at: DateTime<Utc>,
}

impl Marker {
    /// The marker's primary tag: first assigned tag, or the default
    /// sentinel when none are assigned or the id is unknown.
    pub fn primary_tag(&self) -> &'static Tag {
        wayfare_tags::primary_tag(&self.tags)
    }

    /// Find a visit by id.
    pub fn visit(&self, visit_id: &str) -> Option<&Visit> {
        self.visits.iter().find(|v| v.id == visit_id)
    }
}

/// Input for creating a marker. The store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewMarker {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub tags: Vec<String>,
    pub initial_visit: NewVisit,
}

/// Input for adding a visit. The store assigns id and `created_at`.
#[derive(Debug, Clone)]
pub struct NewVisit {
    pub visit_date: NaiveDate,
    pub notes: String,
    pub photos: Vec<Photo>,
}

impl NewVisit {
    pub fn on(visit_date: NaiveDate) -> Self {
        Self {
            visit_date,
            notes: String::new(),
            photos: Vec::new(),
        }
    }
}

/// Partial marker update; absent fields are left unchanged. `id`,
/// `created_at`, and the visit list are never touched by a marker patch.
#[derive(Debug, Clone, Default)]
pub struct MarkerPatch {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub tags: Option<Vec<String>>,
}

/// Partial visit update; absent fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct VisitPatch {
    pub visit_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub photos: Option<Vec<Photo>>,
}

/// Validate and trim a marker name.
pub(crate) fn validate_name(name: &str) -> Result<String, StoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StoreError::validation("name", "must not be empty"));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(StoreError::validation(
            "name",
            format!("must be at most {MAX_NAME_LEN} characters"),
        ));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn validate_tags(tags: &[String]) -> Result<(), StoreError> {
    if tags.len() > MAX_TAGS_PER_MARKER {
        return Err(StoreError::validation(
            "tags",
            format!("at most {MAX_TAGS_PER_MARKER} tags per marker"),
        ));
    }
    Ok(())
}

pub(crate) fn validate_notes(notes: &str) -> Result<(), StoreError> {
    if notes.chars().count() > MAX_NOTES_LEN {
        return Err(StoreError::validation(
            "notes",
            format!("must be at most {MAX_NOTES_LEN} characters"),
        ));
    }
    Ok(())
}

pub(crate) fn validate_photos(photos: &[Photo]) -> Result<(), StoreError> {
    if photos.len() > MAX_PHOTOS_PER_VISIT {
        return Err(StoreError::validation(
            "photos",
            format!("at most {MAX_PHOTOS_PER_VISIT} photos per visit"),
        ));
    }
    for photo in photos {
        if photo.caption.chars().count() > MAX_CAPTION_LEN {
            return Err(StoreError::validation(
                "caption",
                format!("must be at most {MAX_CAPTION_LEN} characters"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        assert_eq!(validate_name("  Tokyo Tower ").unwrap(), "Tokyo Tower");
    }

    #[test]
    fn blank_name_rejected() {
        assert!(matches!(
            validate_name("   "),
            Err(StoreError::Validation { field: "name", .. })
        ));
    }

    #[test]
    fn overlong_name_rejected() {
        let name = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_name(&name).is_err());
        let name = "x".repeat(MAX_NAME_LEN);
        assert!(validate_name(&name).is_ok());
    }

    #[test]
    fn photo_limits() {
        let photos = vec![Photo::default(); MAX_PHOTOS_PER_VISIT + 1];
        assert!(validate_photos(&photos).is_err());

        let photos = vec![Photo {
            data_url: "data:image/png;base64,".into(),
            caption: "c".repeat(MAX_CAPTION_LEN + 1),
        }];
        assert!(matches!(
            validate_photos(&photos),
            Err(StoreError::Validation { field: "caption", .. })
        ));
    }

    #[test]
    fn primary_tag_falls_back_to_default() {
        let marker = Marker {
            id: "m1".into(),
            name: "Tokyo Tower".into(),
            latitude: 35.6586,
            longitude: 139.7454,
            tags: vec![],
            visits: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(marker.primary_tag().id, "default");
    }

    #[test]
    fn marker_serializes_camel_case() {
        let marker = Marker {
            id: "m1".into(),
            name: "Tokyo Tower".into(),
            latitude: 35.6586,
            longitude: 139.7454,
            tags: vec!["sightseeing".into()],
            visits: vec![Visit {
                id: "v1".into(),
                visit_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                notes: String::new(),
                photos: vec![],
                created_at: Utc::now(),
            }],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&marker).unwrap();
        assert!(json.contains("\"visitDate\":\"2024-05-01\""));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
    }
}
