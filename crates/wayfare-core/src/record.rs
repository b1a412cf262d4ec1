//! On-disk record codec.
//!
//! The stored shape is a JSON array of marker records. Two generations of
//! records exist: the current shape carries a `visits` array; records
//! written before multi-visit support carried a flat
//! `visitDate`/`notes`/`photos` trio on the marker itself, and numeric ids.
//! Decoding accepts both and canonicalizes to [`Marker`]; encoding always
//! writes the current shape.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use crate::marker::{Marker, Photo, Visit};

/// Marker ids were `Date.now()` numbers in early records, strings since.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    fn into_string(self) -> String {
        match self {
            RecordId::Number(n) => n.to_string(),
            RecordId::Text(s) => s,
        }
    }
}

/// Photos were stored as bare URL strings before captions existed, then as
/// objects under a `url` or `dataUrl` key with `description` or `caption`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PhotoRecord {
    Url(String),
    Object {
        #[serde(default, rename = "dataUrl")]
        data_url: Option<String>,
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        caption: Option<String>,
        #[serde(default)]
        description: Option<String>,
    },
}

impl PhotoRecord {
    fn into_photo(self) -> Photo {
        match self {
            PhotoRecord::Url(url) => Photo {
                data_url: url,
                caption: String::new(),
            },
            PhotoRecord::Object {
                data_url,
                url,
                caption,
                description,
            } => Photo {
                data_url: data_url.or(url).unwrap_or_default(),
                caption: caption.or(description).unwrap_or_default(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VisitRecord {
    #[serde(default)]
    id: Option<String>,
    visit_date: NaiveDate,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    photos: Vec<PhotoRecord>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl VisitRecord {
    fn into_visit(self, fallback_created_at: DateTime<Utc>) -> Visit {
        Visit {
            id: self.id.unwrap_or_else(new_visit_id),
            visit_date: self.visit_date,
            notes: self.notes,
            photos: self.photos.into_iter().map(PhotoRecord::into_photo).collect(),
            created_at: self.created_at.unwrap_or(fallback_created_at),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarkerRecord {
    id: RecordId,
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    visits: Vec<VisitRecord>,
    // Legacy flat fields from before multi-visit support.
    #[serde(default)]
    visit_date: Option<NaiveDate>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    photos: Vec<PhotoRecord>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl MarkerRecord {
    /// Canonicalize into the in-memory shape. A legacy flat visit becomes
    /// the leading entry of the visits list; a record carrying both shapes
    /// keeps both.
    fn into_marker(self) -> Marker {
        let created_at = self.created_at.unwrap_or_else(Utc::now);
        let mut visits = Vec::with_capacity(self.visits.len() + 1);
        if let Some(visit_date) = self.visit_date {
            visits.push(Visit {
                id: new_visit_id(),
                visit_date,
                notes: self.notes.unwrap_or_default(),
                photos: self.photos.into_iter().map(PhotoRecord::into_photo).collect(),
                created_at,
            });
        }
        visits.extend(self.visits.into_iter().map(|v| v.into_visit(created_at)));

        Marker {
            id: self.id.into_string(),
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            tags: self.tags,
            visits,
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
        }
    }
}

pub(crate) fn new_marker_id() -> String {
    Uuid::new_v4().to_string()
}

pub(crate) fn new_visit_id() -> String {
    Uuid::new_v4().to_string()
}

/// Decode a stored marker array. Individual records that fail to decode are
/// skipped with a warning; one bad element must not take the journal down.
pub(crate) fn decode_markers(json: &str) -> Result<Vec<Marker>, serde_json::Error> {
    let elements: Vec<serde_json::Value> = serde_json::from_str(json)?;
    Ok(decode_marker_values(elements))
}

pub(crate) fn decode_marker_values(elements: Vec<serde_json::Value>) -> Vec<Marker> {
    elements
        .into_iter()
        .filter_map(|element| match serde_json::from_value::<MarkerRecord>(element) {
            Ok(record) => Some(record.into_marker()),
            Err(err) => {
                warn!(%err, "skipping undecodable marker record");
                None
            }
        })
        .collect()
}

/// Encode the collection in the current (visits-array) shape.
pub(crate) fn encode_markers(markers: &[Marker]) -> Result<String, serde_json::Error> {
    serde_json::to_string(markers)
}
