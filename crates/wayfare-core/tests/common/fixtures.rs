//! Shared builders for store and transfer tests.

use chrono::NaiveDate;
use wayfare_core::{NewMarker, NewVisit, Photo};

/// Parse a `YYYY-MM-DD` literal.
pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap_or_else(|_| panic!("bad test date: {s}"))
}

/// A marker input with one bare initial visit.
pub fn marker_input(name: &str, lat: f64, lon: f64, tags: &[&str], visit_date: &str) -> NewMarker {
    NewMarker {
        name: name.to_string(),
        latitude: lat,
        longitude: lon,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        initial_visit: NewVisit::on(date(visit_date)),
    }
}

/// A visit input carrying notes and one captioned photo.
pub fn visit_with_notes(visit_date: &str, notes: &str) -> NewVisit {
    NewVisit {
        visit_date: date(visit_date),
        notes: notes.to_string(),
        photos: vec![Photo {
            data_url: "data:image/jpeg;base64,dGVzdA==".to_string(),
            caption: "test shot".to_string(),
        }],
    }
}
