//! Aggregate statistics and rankings.

use std::collections::HashSet;

use chrono::NaiveDate;
use wayfare_core::Marker;
use wayfare_tags::{Tag, TAGS};

use crate::timeline::timeline;

/// Headline numbers for the statistics screen and the poster.
///
/// `days_traveled` counts distinct visit dates; two visits on the same
/// calendar date count once. `places_visited` counts distinct marker
/// names, a name-uniqueness proxy rather than geographic resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalStats {
    pub total_markers: usize,
    pub total_visits: usize,
    pub days_traveled: usize,
    pub places_visited: usize,
}

pub fn journal_stats(markers: &[Marker]) -> JournalStats {
    let mut dates: HashSet<NaiveDate> = HashSet::new();
    let mut names: HashSet<&str> = HashSet::new();
    let mut total_visits = 0;
    for marker in markers {
        names.insert(marker.name.as_str());
        total_visits += marker.visits.len();
        for visit in &marker.visits {
            dates.insert(visit.visit_date);
        }
    }
    JournalStats {
        total_markers: markers.len(),
        total_visits,
        days_traveled: dates.len(),
        places_visited: names.len(),
    }
}

/// A marker with its visit count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisitCount<'a> {
    pub marker: &'a Marker,
    pub visits: usize,
}

/// The `n` most-visited markers, by visit count descending. Ties keep the
/// original list order.
pub fn top_visited(markers: &[Marker], n: usize) -> Vec<VisitCount<'_>> {
    let mut ranked: Vec<VisitCount> = markers
        .iter()
        .map(|marker| VisitCount {
            marker,
            visits: marker.visits.len(),
        })
        .collect();
    ranked.sort_by(|a, b| b.visits.cmp(&a.visits));
    ranked.truncate(n);
    ranked
}

/// A recent-visit row: marker name and visit date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecentVisit<'a> {
    pub name: &'a str,
    pub date: NaiveDate,
}

/// The `n` most recent visits across all markers.
pub fn recent_visits(markers: &[Marker], n: usize) -> Vec<RecentVisit<'_>> {
    timeline(markers)
        .into_iter()
        .take(n)
        .map(|entry| RecentVisit {
            name: entry.marker.name.as_str(),
            date: entry.visit.visit_date,
        })
        .collect()
}

/// Occurrence count of one catalog tag across all markers' tag lists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagUsage {
    pub tag: &'static Tag,
    pub count: usize,
}

/// How often each catalog tag is assigned, count descending (ties in
/// catalog order). Counts every assigned tag, not just the primary one;
/// unknown ids contribute nothing.
pub fn tag_usage(markers: &[Marker]) -> Vec<TagUsage> {
    let mut usage: Vec<TagUsage> = TAGS
        .iter()
        .filter_map(|tag| {
            let count = markers
                .iter()
                .flat_map(|m| m.tags.iter())
                .filter(|id| id.as_str() == tag.id)
                .count();
            (count > 0).then_some(TagUsage { tag, count })
        })
        .collect();
    usage.sort_by(|a, b| b.count.cmp(&a.count));
    usage
}
