//! Visit counts bucketed by month and year, for chart rendering.

use std::collections::BTreeMap;

use wayfare_core::Marker;

/// Visit count for one `YYYY-MM` or `YYYY` bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketCount {
    pub bucket: String,
    pub visits: usize,
}

/// Visits per `YYYY-MM`, ascending by bucket key.
pub fn monthly_counts(markers: &[Marker]) -> Vec<BucketCount> {
    bucket_counts(markers, "%Y-%m")
}

/// Visits per `YYYY`, ascending by bucket key.
pub fn yearly_counts(markers: &[Marker]) -> Vec<BucketCount> {
    bucket_counts(markers, "%Y")
}

fn bucket_counts(markers: &[Marker], key_format: &str) -> Vec<BucketCount> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for marker in markers {
        for visit in &marker.visits {
            let key = visit.visit_date.format(key_format).to_string();
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .map(|(bucket, visits)| BucketCount { bucket, visits })
        .collect()
}
