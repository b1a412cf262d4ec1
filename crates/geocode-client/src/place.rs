//! Geocoding result types.

use serde::{Deserialize, Serialize};

/// One candidate location from a forward search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Short label: the leading segment of the display name.
    pub name: String,
    /// Full display address from the service.
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Service-side category (e.g. `place`, `tourism`).
    pub class: Option<String>,
    /// Service-side type (e.g. `city`, `village`, `building`).
    pub place_type: Option<String>,
    /// Address rank; lower means a larger area.
    pub place_rank: Option<u32>,
}

impl Place {
    /// Map-zoom level appropriate for this candidate's extent, by address
    /// rank when present, otherwise by type, defaulting to city level.
    pub fn zoom_level(&self) -> u8 {
        if let Some(rank) = self.place_rank {
            match rank {
                0..=4 => return 8,
                5..=8 => return 10,
                9..=12 => return 12,
                13..=16 => return 14,
                17..=18 => return 15,
                19..=20 => return 16,
                _ => {}
            }
        }
        match self.place_type.as_deref() {
            Some("country") => 8,
            Some("state") => 10,
            Some("region") | Some("province") => 11,
            Some("city") => 13,
            Some("town") => 14,
            Some("village") | Some("suburb") => 15,
            Some("neighbourhood") | Some("road") | Some("amenity") => 16,
            Some("building") => 17,
            _ => 14,
        }
    }
}

/// A forward search answer, echoing the query it was made for so callers
/// can discard stale responses.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub query: String,
    pub places: Vec<Place>,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}
