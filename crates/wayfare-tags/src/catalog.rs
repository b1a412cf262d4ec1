//! The predefined tag catalog and lookup helpers.

use serde::Serialize;

/// Display metadata for one tag.
///
/// `color` is the full-strength hex color used for map icons; `light_color`
/// is a translucent variant for chip backgrounds. Markers reference tags by
/// id; the metadata itself serializes (for UI bridges) but never
/// deserializes, since the catalog is compiled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
    pub light_color: &'static str,
}

/// The predefined catalog, in display order.
pub const TAGS: &[Tag] = &[
    Tag {
        id: "sightseeing",
        name: "Sightseeing",
        emoji: "🏞️",
        color: "#6BA5D6",
        light_color: "rgba(107, 165, 214, 0.15)",
    },
    Tag {
        id: "family",
        name: "Family trip",
        emoji: "👨‍👩‍👧‍👦",
        color: "#E89AC7",
        light_color: "rgba(232, 154, 199, 0.15)",
    },
    Tag {
        id: "friends",
        name: "With friends",
        emoji: "👯‍♀️",
        color: "#FFB86C",
        light_color: "rgba(255, 184, 108, 0.15)",
    },
    Tag {
        id: "celebrity",
        name: "Fan trip",
        emoji: "⭐",
        color: "#FFD93D",
        light_color: "rgba(255, 217, 61, 0.15)",
    },
    Tag {
        id: "food",
        name: "Food hunt",
        emoji: "🍜",
        color: "#FF6B6B",
        light_color: "rgba(255, 107, 107, 0.15)",
    },
    Tag {
        id: "culture",
        name: "Culture",
        emoji: "🎭",
        color: "#9B59B6",
        light_color: "rgba(155, 89, 182, 0.15)",
    },
    Tag {
        id: "adventure",
        name: "Adventure",
        emoji: "🏔️",
        color: "#27AE60",
        light_color: "rgba(39, 174, 96, 0.15)",
    },
    Tag {
        id: "relax",
        name: "Getaway",
        emoji: "🏖️",
        color: "#3498DB",
        light_color: "rgba(52, 152, 219, 0.15)",
    },
    Tag {
        id: "business",
        name: "Business",
        emoji: "💼",
        color: "#34495E",
        light_color: "rgba(52, 73, 94, 0.15)",
    },
    Tag {
        id: "photography",
        name: "Photo walk",
        emoji: "📷",
        color: "#16A085",
        light_color: "rgba(22, 160, 133, 0.15)",
    },
    Tag {
        id: "shopping",
        name: "Shopping",
        emoji: "🛍️",
        color: "#E74C3C",
        light_color: "rgba(231, 76, 60, 0.15)",
    },
    Tag {
        id: "festival",
        name: "Festival",
        emoji: "🎉",
        color: "#F39C12",
        light_color: "rgba(243, 156, 18, 0.15)",
    },
];

/// Sentinel for markers without an assigned tag.
pub const DEFAULT_TAG: Tag = Tag {
    id: "default",
    name: "Uncategorized",
    emoji: "📍",
    color: "#95A5A6",
    light_color: "rgba(149, 165, 166, 0.15)",
};

/// Look up a tag by id. Unknown or empty ids resolve to [`DEFAULT_TAG`].
pub fn tag_by_id(id: &str) -> &'static Tag {
    TAGS.iter().find(|tag| tag.id == id).unwrap_or(&DEFAULT_TAG)
}

/// Resolve a list of tag ids. An empty list yields the default sentinel.
pub fn tags_by_ids<I, S>(ids: I) -> Vec<&'static Tag>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let resolved: Vec<&'static Tag> = ids.into_iter().map(|id| tag_by_id(id.as_ref())).collect();
    if resolved.is_empty() {
        vec![&DEFAULT_TAG]
    } else {
        resolved
    }
}

/// The primary tag of a marker: the first assigned tag, or the default
/// sentinel when no tags are assigned.
pub fn primary_tag<S: AsRef<str>>(ids: &[S]) -> &'static Tag {
    ids.first().map(|id| tag_by_id(id.as_ref())).unwrap_or(&DEFAULT_TAG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_id_resolves() {
        let tag = tag_by_id("food");
        assert_eq!(tag.id, "food");
        assert_eq!(tag.emoji, "🍜");
    }

    #[test]
    fn unknown_id_falls_back_to_default() {
        assert_eq!(tag_by_id("scuba").id, "default");
        assert_eq!(tag_by_id("").id, "default");
    }

    #[test]
    fn catalog_ids_are_unique() {
        for (i, a) in TAGS.iter().enumerate() {
            for b in &TAGS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
            assert_ne!(a.id, DEFAULT_TAG.id);
        }
    }

    #[test]
    fn empty_id_list_yields_sentinel() {
        let tags = tags_by_ids(Vec::<String>::new());
        assert_eq!(tags, vec![&DEFAULT_TAG]);
    }

    #[test]
    fn primary_tag_is_first() {
        let ids = ["culture", "food"];
        assert_eq!(primary_tag(&ids).id, "culture");
        assert_eq!(primary_tag::<&str>(&[]).id, "default");
    }
}
