//! wayfare-views - derived views over the marker collection.
//!
//! Every builder here is a pure projection of a store snapshot: it borrows
//! `&[Marker]`, mutates nothing, and is recomputed on each call. Expected
//! volumes are a few hundred markers and visits, so there is no caching or
//! invalidation to reason about: calling a builder twice on the same
//! snapshot yields identical output.
//!
//! Ordering rules shared by the dated views: visit-date descending, with
//! ties keeping the original store order (stable sorts over the flattening
//! of markers in insertion order).

pub mod calendar;
pub mod groups;
pub mod stats;
pub mod timeline;

pub use calendar::*;
pub use groups::*;
pub use stats::*;
pub use timeline::*;

#[cfg(test)]
pub(crate) mod testutil {
    use chrono::{DateTime, NaiveDate, Utc};
    use wayfare_core::{Marker, Visit};

    pub fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn timestamp() -> DateTime<Utc> {
        "2024-01-01T00:00:00Z".parse().unwrap()
    }

    /// A marker with one visit per date, visit ids `v0`, `v1`, ...
    pub fn marker(id: &str, name: &str, tags: &[&str], visit_dates: &[&str]) -> Marker {
        Marker {
            id: id.to_string(),
            name: name.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            visits: visit_dates
                .iter()
                .enumerate()
                .map(|(i, d)| Visit {
                    id: format!("v{i}"),
                    visit_date: date(d),
                    notes: String::new(),
                    photos: Vec::new(),
                    created_at: timestamp(),
                })
                .collect(),
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }
}
