//! Chronological timeline of all visits.

use std::collections::BTreeSet;

use chrono::Datelike;
use wayfare_core::{Marker, Visit};

/// One visit in the context of its marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineEntry<'a> {
    pub marker: &'a Marker,
    pub visit: &'a Visit,
}

/// Flatten every marker's visit list into `{marker, visit}` pairs, newest
/// visit date first. Same-date entries keep their relative store order.
pub fn timeline(markers: &[Marker]) -> Vec<TimelineEntry<'_>> {
    let mut entries: Vec<TimelineEntry> = markers
        .iter()
        .flat_map(|marker| {
            marker
                .visits
                .iter()
                .map(move |visit| TimelineEntry { marker, visit })
        })
        .collect();
    entries.sort_by(|a, b| b.visit.visit_date.cmp(&a.visit.visit_date));
    entries
}

/// The timeline cut into `YYYY-MM` sections, newest month first.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSection<'a> {
    pub month: String,
    pub entries: Vec<TimelineEntry<'a>>,
}

pub fn timeline_by_month(markers: &[Marker]) -> Vec<MonthSection<'_>> {
    let mut sections: Vec<MonthSection> = Vec::new();
    for entry in timeline(markers) {
        let month = entry.visit.visit_date.format("%Y-%m").to_string();
        if let Some(section) = sections.last_mut() {
            if section.month == month {
                section.entries.push(entry);
                continue;
            }
        }
        sections.push(MonthSection {
            month,
            entries: vec![entry],
        });
    }
    sections
}

/// Distinct visit years, newest first (the timeline's year filter row).
pub fn years(markers: &[Marker]) -> Vec<i32> {
    let set: BTreeSet<i32> = markers
        .iter()
        .flat_map(|m| m.visits.iter().map(|v| v.visit_date.year()))
        .collect();
    set.into_iter().rev().collect()
}
