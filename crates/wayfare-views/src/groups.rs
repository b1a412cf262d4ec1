//! Visits grouped by the marker's primary tag.

use wayfare_core::Marker;
use wayfare_tags::{Tag, TAGS};

use crate::timeline::TimelineEntry;

/// All visits whose marker's primary tag matches `tag`, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct TagGroup<'a> {
    pub tag: &'static Tag,
    pub entries: Vec<TimelineEntry<'a>>,
}

/// Group every `{marker, visit}` pair under the marker's *primary* tag.
///
/// Groups come out in catalog order and only for tags with at least one
/// entry. Markers whose primary tag is the default sentinel (no tags, or
/// an unknown first tag) appear in no group.
pub fn tag_groups(markers: &[Marker]) -> Vec<TagGroup<'_>> {
    TAGS.iter()
        .filter_map(|tag| {
            let mut entries: Vec<TimelineEntry> = markers
                .iter()
                .filter(|marker| marker.primary_tag().id == tag.id)
                .flat_map(|marker| {
                    marker
                        .visits
                        .iter()
                        .map(move |visit| TimelineEntry { marker, visit })
                })
                .collect();
            if entries.is_empty() {
                return None;
            }
            entries.sort_by(|a, b| b.visit.visit_date.cmp(&a.visit.visit_date));
            Some(TagGroup { tag, entries })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::marker;

    #[test]
    fn groups_by_primary_tag_only() {
        let markers = vec![
            marker("m1", "Ramen Alley", &["food", "culture"], &["2024-01-01"]),
            marker("m2", "Night Market", &["food"], &["2024-02-01"]),
            marker("m3", "Opera House", &["culture"], &["2024-03-01"]),
            marker("m4", "Untagged Pier", &[], &["2024-04-01"]),
        ];

        let groups = tag_groups(&markers);
        assert_eq!(groups.len(), 2);

        // Catalog order puts food before culture.
        assert_eq!(groups[0].tag.id, "food");
        assert_eq!(groups[0].entries.len(), 2);
        assert_eq!(groups[1].tag.id, "culture");
        assert_eq!(groups[1].entries.len(), 1);

        // m1 is primary-food, so its visit is not under culture.
        assert!(groups[1].entries.iter().all(|e| e.marker.id == "m3"));
    }

    #[test]
    fn every_tagged_pair_lands_in_exactly_one_group() {
        let markers = vec![
            marker("m1", "A", &["food"], &["2024-01-01", "2024-01-02"]),
            marker("m2", "B", &["relax"], &["2024-02-01"]),
        ];
        let groups = tag_groups(&markers);
        let total: usize = groups.iter().map(|g| g.entries.len()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn entries_sorted_newest_first_within_group() {
        let markers = vec![
            marker("m1", "A", &["food"], &["2024-01-01"]),
            marker("m2", "B", &["food"], &["2024-06-01"]),
        ];
        let groups = tag_groups(&markers);
        assert_eq!(groups[0].entries[0].marker.id, "m2");
    }

    #[test]
    fn unknown_primary_tag_is_excluded() {
        let markers = vec![marker("m1", "A", &["zeppelin"], &["2024-01-01"])];
        assert!(tag_groups(&markers).is_empty());
    }

    #[test]
    fn empty_store_yields_no_groups() {
        assert!(tag_groups(&[]).is_empty());
    }
}
