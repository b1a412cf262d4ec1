//! The marker store: sole owner of the persisted marker collection.

use chrono::Utc;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::marker::{
    validate_name, validate_notes, validate_photos, validate_tags, Marker, MarkerPatch, NewMarker,
    NewVisit, Visit, VisitPatch,
};
use crate::record;
use crate::storage::{MemoryStorage, Storage, StorageError, MARKERS_KEY};

/// Owns the marker collection and its storage backend.
///
/// All reads and writes of persisted travel data pass through this type;
/// consumers receive it by reference (no global instance). Every mutation
/// re-serializes the entire collection under [`MARKERS_KEY`].
///
/// Mutating operations validate first and leave state untouched on
/// [`StoreError::Validation`] / not-found errors. A
/// [`StoreError::Persistence`] error is returned *after* the in-memory
/// mutation applied: the collection is correct, only the durable copy lags.
pub struct MarkerStore {
    markers: Vec<Marker>,
    storage: Box<dyn Storage>,
}

impl MarkerStore {
    /// Load the persisted collection from a storage backend.
    ///
    /// An absent key is an empty journal. An unreadable payload is treated
    /// the same, with a warning; last-write-wins storage may have been
    /// truncated mid-write.
    pub fn open(storage: Box<dyn Storage>) -> Result<Self, StoreError> {
        let markers = match storage.get(MARKERS_KEY)? {
            Some(json) => match record::decode_markers(&json) {
                Ok(markers) => markers,
                Err(err) => {
                    warn!(%err, "stored marker collection is unreadable, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Ok(Self { markers, storage })
    }

    /// An empty store over in-memory storage.
    pub fn in_memory() -> Self {
        Self {
            markers: Vec::new(),
            storage: Box::new(MemoryStorage::new()),
        }
    }

    /// Current snapshot, in insertion order.
    pub fn list(&self) -> &[Marker] {
        &self.markers
    }

    pub fn get(&self, id: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Create a marker with its initial visit.
    pub fn create(&mut self, input: NewMarker) -> Result<Marker, StoreError> {
        let name = validate_name(&input.name)?;
        validate_tags(&input.tags)?;
        validate_notes(&input.initial_visit.notes)?;
        validate_photos(&input.initial_visit.photos)?;

        let now = Utc::now();
        let marker = Marker {
            id: record::new_marker_id(),
            name,
            latitude: input.latitude,
            longitude: input.longitude,
            tags: input.tags,
            visits: vec![build_visit(input.initial_visit, now)],
            created_at: now,
            updated_at: now,
        };
        debug!(marker_id = %marker.id, "created marker");

        let created = marker.clone();
        self.markers.push(marker);
        self.persist()?;
        Ok(created)
    }

    /// Merge `patch` into the marker with `id`, preserving `id`,
    /// `created_at`, and the visit list.
    pub fn update(&mut self, id: &str, patch: MarkerPatch) -> Result<Marker, StoreError> {
        let index = self.index_of(id)?;
        let name = match &patch.name {
            Some(name) => Some(validate_name(name)?),
            None => None,
        };
        if let Some(tags) = &patch.tags {
            validate_tags(tags)?;
        }

        let marker = &mut self.markers[index];
        if let Some(name) = name {
            marker.name = name;
        }
        if let Some(latitude) = patch.latitude {
            marker.latitude = latitude;
        }
        if let Some(longitude) = patch.longitude {
            marker.longitude = longitude;
        }
        if let Some(tags) = patch.tags {
            marker.tags = tags;
        }
        marker.updated_at = Utc::now();

        let updated = marker.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Remove a marker and all its visits. Irreversible.
    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let index = self.index_of(id)?;
        let removed = self.markers.remove(index);
        debug!(marker_id = %removed.id, visits = removed.visits.len(), "deleted marker");
        self.persist()
    }

    /// Append a visit to a marker.
    pub fn add_visit(&mut self, marker_id: &str, visit: NewVisit) -> Result<Marker, StoreError> {
        validate_notes(&visit.notes)?;
        validate_photos(&visit.photos)?;
        let index = self.index_of(marker_id)?;

        let now = Utc::now();
        let marker = &mut self.markers[index];
        marker.visits.push(build_visit(visit, now));
        marker.updated_at = now;

        let updated = marker.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Merge `patch` into one visit, preserving its `id` and `created_at`.
    pub fn update_visit(
        &mut self,
        marker_id: &str,
        visit_id: &str,
        patch: VisitPatch,
    ) -> Result<Marker, StoreError> {
        if let Some(notes) = &patch.notes {
            validate_notes(notes)?;
        }
        if let Some(photos) = &patch.photos {
            validate_photos(photos)?;
        }
        let marker_index = self.index_of(marker_id)?;
        let visit_index = visit_index(&self.markers[marker_index], visit_id)?;

        let marker = &mut self.markers[marker_index];
        let visit = &mut marker.visits[visit_index];
        if let Some(visit_date) = patch.visit_date {
            visit.visit_date = visit_date;
        }
        if let Some(notes) = patch.notes {
            visit.notes = notes;
        }
        if let Some(photos) = patch.photos {
            visit.photos = photos;
        }
        marker.updated_at = Utc::now();

        let updated = marker.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Remove one visit. The marker stays even if its visit list empties.
    pub fn remove_visit(&mut self, marker_id: &str, visit_id: &str) -> Result<Marker, StoreError> {
        let marker_index = self.index_of(marker_id)?;
        let visit_index = visit_index(&self.markers[marker_index], visit_id)?;

        let marker = &mut self.markers[marker_index];
        marker.visits.remove(visit_index);
        marker.updated_at = Utc::now();

        let updated = marker.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Replace the entire collection (import support). Returns the new
    /// marker count.
    pub fn replace_all(&mut self, markers: Vec<Marker>) -> Result<usize, StoreError> {
        self.markers = markers;
        debug!(markers = self.markers.len(), "replaced marker collection");
        self.persist()?;
        Ok(self.markers.len())
    }

    fn index_of(&self, id: &str) -> Result<usize, StoreError> {
        self.markers
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| StoreError::MarkerNotFound(id.to_string()))
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let json =
            record::encode_markers(&self.markers).map_err(|err| StorageError::Write {
                key: MARKERS_KEY.to_string(),
                message: err.to_string(),
            })?;
        if let Err(err) = self.storage.set(MARKERS_KEY, &json) {
            warn!(%err, "failed to persist marker collection");
            return Err(err.into());
        }
        Ok(())
    }
}

fn build_visit(input: NewVisit, now: chrono::DateTime<Utc>) -> Visit {
    Visit {
        id: record::new_visit_id(),
        visit_date: input.visit_date,
        notes: input.notes,
        photos: input.photos,
        created_at: now,
    }
}

fn visit_index(marker: &Marker, visit_id: &str) -> Result<usize, StoreError> {
    marker
        .visits
        .iter()
        .position(|v| v.id == visit_id)
        .ok_or_else(|| StoreError::VisitNotFound {
            marker_id: marker.id.clone(),
            visit_id: visit_id.to_string(),
        })
}
